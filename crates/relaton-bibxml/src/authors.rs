//! `<author>` construction from contributors

use relaton_models::{Contributor, Organization};

use crate::element::Element;
use crate::error::{Result, SerializeError};

/// Contributor roles rendered as xml2rfc authors
pub const AUTHOR_ROLES: [&str; 3] = ["author", "editor", "publisher"];

const IANA: &str = "IANA";
const IANA_NAME: &str = "Internet Assigned Numbers Authority";

/// Whether the contributor has at least one author-like role
pub fn is_author(contributor: &Contributor) -> bool {
    contributor
        .role_tags()
        .any(|tag| AUTHOR_ROLES.contains(&tag))
}

/// Build an `<author>` element for a contributor.
///
/// Fails with [`SerializeError::Role`] when the contributor has no
/// author-like role, and with [`SerializeError::Structure`] when it names
/// neither a person nor an organization.
pub fn create_author(contributor: &Contributor) -> Result<Element> {
    if !is_author(contributor) {
        return Err(SerializeError::Role("incompatible roles".to_string()));
    }
    if contributor.person.is_none() && contributor.organization.is_none() {
        return Err(SerializeError::Structure(
            "contributor is neither an organization nor a person".to_string(),
        ));
    }

    let mut author = Element::new("author");

    if contributor.has_role("editor") {
        author.set("role", "editor");
    }

    let organization = contributor.organization.as_ref().or_else(|| {
        contributor
            .person
            .as_ref()
            .and_then(|p| p.affiliation.first())
            .map(|a| &a.organization)
    });

    if let Some(org) = organization {
        author.append(organization_element(org));
        if let Some(address) = address_element(org) {
            author.append(address);
        }
    }

    if let Some(person) = &contributor.person {
        let name = &person.name;
        if let Some(fullname) = name.display_name() {
            author.set("fullname", fullname);
        }
        if let Some(surname) = name.surname_text() {
            author.set("surname", surname);
        }
        let initials = name.initials();
        if !initials.is_empty() {
            author.set("initials", initials.join(" "));
        }
    }

    Ok(author)
}

fn is_iana(org: &Organization) -> bool {
    org.abbreviation.as_deref() == Some(IANA) || org.name.iter().any(|n| n.content == IANA_NAME)
}

fn organization_element(org: &Organization) -> Element {
    let name = if is_iana(org) {
        IANA
    } else {
        org.primary_name().unwrap_or_default()
    };

    let mut element = Element::with_text("organization", name);
    if let Some(abbrev) = &org.abbreviation {
        element.set("abbrev", abbrev.as_str());
    }
    element
}

// <address> with the first postal contact and the organization's URL.
fn address_element(org: &Organization) -> Option<Element> {
    let postal = org.contact.iter().find_map(|c| c.postal_address());
    if postal.is_none() && org.url.is_none() {
        return None;
    }

    let mut address = Element::new("address");

    if let Some(postal_address) = postal {
        let mut postal = Element::new("postal");
        if let Some(country) = &postal_address.country {
            postal.append(Element::with_text("country", country.as_str()));
        }
        if let Some(city) = &postal_address.city {
            postal.append(Element::with_text("city", city.as_str()));
        }
        address.append(postal);
    }

    if let Some(url) = &org.url {
        address.append(Element::with_text("uri", url.as_str()));
    }

    Some(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relaton_models::{Address, ContactMethod, Forename, FullName, Person};

    fn author_person() -> Person {
        Person::new(
            FullName::default()
                .with_forename(Forename::new("Vinton"))
                .with_surname("Cerf"),
        )
    }

    #[test]
    fn test_roles() {
        let c = Contributor::person(author_person(), &["author"]);
        assert!(is_author(&c));
        let c = Contributor::person(author_person(), &["publisher", "distributor"]);
        assert!(is_author(&c));
        let c = Contributor::person(author_person(), &["distributor"]);
        assert!(!is_author(&c));
        let c = Contributor::person(author_person(), &[]);
        assert!(!is_author(&c));
    }

    #[test]
    fn test_role_error() {
        let c = Contributor::person(author_person(), &[]);
        assert!(matches!(create_author(&c), Err(SerializeError::Role(_))));
    }

    #[test]
    fn test_structure_error() {
        let c = Contributor {
            role: vec![relaton_models::Role::new("author")],
            person: None,
            organization: None,
        };
        assert!(matches!(create_author(&c), Err(SerializeError::Structure(_))));
    }

    #[test]
    fn test_editor_role() {
        let c = Contributor::person(author_person(), &["author", "editor"]);
        let author = create_author(&c).unwrap();
        assert_eq!(author.get("role"), Some("editor"));

        let c = Contributor::person(author_person(), &["author"]);
        assert_eq!(create_author(&c).unwrap().get("role"), None);
    }

    #[test]
    fn test_person_name_attributes() {
        let name = FullName::complete("Dr. V. G. Cerf")
            .with_surname("Cerf")
            .with_initial("V.")
            .with_initial("G.");
        let c = Contributor::person(Person::new(name), &["author"]);
        let author = create_author(&c).unwrap();
        assert_eq!(author.get("fullname"), Some("Dr. V. G. Cerf"));
        assert_eq!(author.get("surname"), Some("Cerf"));
        assert_eq!(author.get("initials"), Some("V G"));
    }

    #[test]
    fn test_assembled_fullname() {
        let c = Contributor::person(author_person(), &["author"]);
        let author = create_author(&c).unwrap();
        assert_eq!(author.get("fullname"), Some("Vinton Cerf"));
        assert_eq!(author.get("initials"), None);
    }

    #[test]
    fn test_fullname_includes_initial_only_forename() {
        let name = FullName::default()
            .with_forename(Forename::new("Jon"))
            .with_forename(Forename::from_initial("B"))
            .with_surname("Postel");
        let c = Contributor::person(Person::new(name), &["author"]);
        let author = create_author(&c).unwrap();
        assert_eq!(author.get("fullname"), Some("Jon B Postel"));
        assert_eq!(author.get("surname"), Some("Postel"));
        assert_eq!(author.get("initials"), Some("B"));
    }

    #[test]
    fn test_affiliation_organization() {
        let person = author_person().with_affiliation(
            Organization::new("Google")
                .with_url("https://google.com")
                .with_contact(ContactMethod::with_address(
                    Address::new("US").with_city("Mountain View"),
                )),
        );
        let c = Contributor::person(person, &["author"]);
        let author = create_author(&c).unwrap();

        let org = author.find("organization").unwrap();
        assert_eq!(org.text(), "Google");
        assert_eq!(org.get("abbrev"), None);

        let address = author.find("address").unwrap();
        let postal = address.find("postal").unwrap();
        let names: Vec<&str> = postal.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["country", "city"]);
        assert_eq!(postal.find("city").map(Element::text).as_deref(), Some("Mountain View"));
        assert_eq!(address.find("uri").map(Element::text).as_deref(), Some("https://google.com"));
    }

    #[test]
    fn test_contacts_without_country_are_not_postal() {
        let mut address = Address::new("");
        address.city = Some("Nowhere".to_string());
        let org = Organization::new("Example").with_contact(ContactMethod::with_address(address));
        let c = Contributor::organization(org, &["publisher"]);
        let author = create_author(&c).unwrap();
        assert!(author.find("address").is_none());
    }

    #[test]
    fn test_iana_by_abbreviation() {
        let org = Organization::new("Some Registry").with_abbreviation("IANA");
        let author = create_author(&Contributor::organization(org, &["publisher"])).unwrap();
        let org = author.find("organization").unwrap();
        assert_eq!(org.text(), "IANA");
        assert_eq!(org.get("abbrev"), Some("IANA"));
    }

    #[test]
    fn test_iana_by_name() {
        let org = Organization::new("Internet Assigned Numbers Authority");
        let author = create_author(&Contributor::organization(org, &["publisher"])).unwrap();
        assert_eq!(author.find("organization").map(Element::text).as_deref(), Some("IANA"));
        assert!(author.get("fullname").is_none());
    }
}
