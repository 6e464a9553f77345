//! People and their names

use serde::{Deserialize, Serialize};

use crate::{one_or_many, ContactMethod, GenericStringValue, Organization};

/// A person acting as contributor
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: FullName,
    #[serde(default, deserialize_with = "one_or_many")]
    pub affiliation: Vec<PersonAffiliation>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub contact: Vec<ContactMethod>,
}

impl Person {
    pub fn new(name: FullName) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Builder method to add an affiliation
    pub fn with_affiliation(mut self, organization: Organization) -> Self {
        self.affiliation.push(PersonAffiliation { organization });
        self
    }
}

/// Affiliation of a person with an organization
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAffiliation {
    pub organization: Organization,
}

/// A person's name, either pre-composed (`completename`) or decomposed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    #[serde(default, deserialize_with = "one_or_many")]
    pub prefix: Vec<GenericStringValue>,
    #[serde(default)]
    pub given: Option<GivenName>,
    #[serde(default)]
    pub surname: Option<GenericStringValue>,
    #[serde(default)]
    pub completename: Option<GenericStringValue>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub addition: Vec<GenericStringValue>,
    /// Flat list of initials, as found in older records
    #[serde(default, deserialize_with = "one_or_many")]
    pub initial: Vec<GenericStringValue>,
}

/// Given names of a person
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GivenName {
    #[serde(default, deserialize_with = "one_or_many")]
    pub forename: Vec<Forename>,
    /// Initials including punctuation, e.g. "J.-P."
    #[serde(default)]
    pub formatted_initials: Option<GenericStringValue>,
}

/// A single forename, optionally with its initial
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ForenameRepr")]
pub struct Forename {
    pub content: String,
    pub initial: Option<String>,
    pub language: Vec<String>,
    pub script: Vec<String>,
}

impl Forename {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// A forename known only by its initial
    pub fn from_initial(initial: impl Into<String>) -> Self {
        Self {
            initial: Some(initial.into()),
            ..Default::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ForenameRepr {
    Bare(String),
    Full {
        #[serde(default)]
        content: Option<String>,
        #[serde(default)]
        initial: Option<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        language: Vec<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        script: Vec<String>,
    },
}

impl From<ForenameRepr> for Forename {
    fn from(repr: ForenameRepr) -> Self {
        match repr {
            ForenameRepr::Bare(content) => Self::new(content),
            ForenameRepr::Full {
                content,
                initial,
                language,
                script,
            } => Self {
                content: content.unwrap_or_default(),
                initial,
                language,
                script,
            },
        }
    }
}

impl FullName {
    /// A name given only as a pre-composed string
    pub fn complete(name: impl Into<String>) -> Self {
        Self {
            completename: Some(GenericStringValue::new(name)),
            ..Default::default()
        }
    }

    /// Builder method to set the surname
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(GenericStringValue::new(surname));
        self
    }

    /// Builder method to add a forename
    pub fn with_forename(mut self, forename: Forename) -> Self {
        self.given
            .get_or_insert_with(GivenName::default)
            .forename
            .push(forename);
        self
    }

    /// Builder method to set formatted initials
    pub fn with_formatted_initials(mut self, initials: impl Into<String>) -> Self {
        self.given
            .get_or_insert_with(GivenName::default)
            .formatted_initials = Some(GenericStringValue::new(initials));
        self
    }

    /// Builder method to add a flat initial
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial.push(GenericStringValue::new(initial));
        self
    }

    /// Builder method to add a prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix.push(GenericStringValue::new(prefix));
        self
    }

    /// Builder method to add an addition (suffix)
    pub fn with_addition(mut self, addition: impl Into<String>) -> Self {
        self.addition.push(GenericStringValue::new(addition));
        self
    }

    /// Non-empty surname content
    pub fn surname_text(&self) -> Option<&str> {
        self.surname
            .as_ref()
            .map(|s| s.content.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Non-empty pre-composed name content
    pub fn completename_text(&self) -> Option<&str> {
        self.completename
            .as_ref()
            .map(|s| s.content.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Initials without periods.
    ///
    /// Taken from the flat `initial` list if present, else from the
    /// formatted initials, else from each forename's initial.
    pub fn initials(&self) -> Vec<String> {
        let raw: Vec<&str> = if !self.initial.is_empty() {
            self.initial.iter().map(|i| i.content.as_str()).collect()
        } else if let Some(formatted) = self
            .given
            .as_ref()
            .and_then(|g| g.formatted_initials.as_ref())
        {
            vec![formatted.content.as_str()]
        } else {
            self.given
                .iter()
                .flat_map(|g| g.forename.iter())
                .filter_map(|f| f.initial.as_deref())
                .collect()
        };

        raw.into_iter()
            .map(strip_initial_punctuation)
            .filter(|i| !i.is_empty())
            .collect()
    }

    /// Forenames, each by its content or else its initial; falls back to
    /// the name's initials when no forename yields either
    pub fn forenames(&self) -> Vec<String> {
        let names: Vec<String> = self
            .given
            .iter()
            .flat_map(|g| g.forename.iter())
            .filter_map(|f| match f.content.trim() {
                "" => f.initial.as_deref().map(strip_initial_punctuation),
                content => Some(content.to_string()),
            })
            .filter(|n| !n.is_empty())
            .collect();

        if names.is_empty() {
            self.initials()
        } else {
            names
        }
    }

    /// Name assembled from its parts: prefix, forenames, surname, addition
    pub fn assembled_name(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        parts.extend(self.prefix.iter().map(|p| p.content.trim().to_string()));
        parts.extend(self.forenames());
        if let Some(surname) = self.surname_text() {
            parts.push(surname.trim().to_string());
        }
        parts.extend(self.addition.iter().map(|a| a.content.trim().to_string()));

        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The pre-composed name if present, otherwise the assembled one
    pub fn display_name(&self) -> Option<String> {
        match self.completename_text() {
            Some(complete) => Some(complete.to_string()),
            None => Some(self.assembled_name()).filter(|n| !n.is_empty()),
        }
    }
}

/// "J.-P." becomes "J -P", "A.B." becomes "A B"
fn strip_initial_punctuation(initial: &str) -> String {
    initial
        .replace('.', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembled_name_order() {
        let name = FullName::default()
            .with_prefix("Dr.")
            .with_forename(Forename::new("Vinton"))
            .with_forename(Forename::new("Gray"))
            .with_surname("Cerf")
            .with_addition("Jr.");
        assert_eq!(name.assembled_name(), "Dr. Vinton Gray Cerf Jr.");
    }

    #[test]
    fn test_assembled_name_from_formatted_initials() {
        let name = FullName::default()
            .with_formatted_initials("V. G.")
            .with_surname("Cerf");
        assert_eq!(name.assembled_name(), "V G Cerf");
        assert_eq!(name.initials(), vec!["V G"]);
    }

    #[test]
    fn test_forename_initials_without_periods() {
        let name = FullName::default()
            .with_forename(Forename::from_initial("J."))
            .with_forename(Forename::from_initial("R."))
            .with_surname("Postel");
        assert_eq!(name.initials(), vec!["J", "R"]);
        assert_eq!(name.assembled_name(), "J R Postel");
    }

    #[test]
    fn test_flat_initials_take_precedence() {
        let name = FullName::default()
            .with_initial("Mr")
            .with_formatted_initials("X.");
        assert_eq!(name.initials(), vec!["Mr"]);
    }

    #[test]
    fn test_display_name_prefers_completename() {
        let name = FullName::complete("Mr Cerf").with_surname("Cerf");
        assert_eq!(name.display_name().as_deref(), Some("Mr Cerf"));

        let empty = FullName::default();
        assert!(empty.display_name().is_none());
    }

    #[test]
    fn test_deserialize_structured_name() {
        let name: FullName = serde_json::from_str(
            r#"{
                "given": {"forename": [{"content": "Jon", "language": "en"}, {"initial": "B"}]},
                "surname": {"content": "Postel", "language": "en"}
            }"#,
        )
        .unwrap();
        assert_eq!(name.surname_text(), Some("Postel"));
        assert_eq!(name.assembled_name(), "Jon B Postel");
        assert_eq!(name.initials(), vec!["B"]);
    }

    #[test]
    fn test_initial_only_forename_kept_beside_full_forename() {
        let name = FullName::default()
            .with_forename(Forename::new("Jon"))
            .with_forename(Forename::from_initial("B."))
            .with_surname("Postel");
        assert_eq!(name.forenames(), vec!["Jon", "B"]);
        assert_eq!(name.assembled_name(), "Jon B Postel");
        assert_eq!(name.display_name().as_deref(), Some("Jon B Postel"));
    }
}
