//! Organizations

use serde::{Deserialize, Serialize};

use crate::{one_or_many, ContactMethod, GenericStringValue};

/// An organization acting as contributor or affiliation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Name variants; the first one is the preferred name
    #[serde(default, deserialize_with = "one_or_many")]
    pub name: Vec<GenericStringValue>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub contact: Vec<ContactMethod>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

impl Organization {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: vec![GenericStringValue::new(name)],
            ..Default::default()
        }
    }

    /// Builder method to set the abbreviation
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Builder method to set the URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builder method to add a contact
    pub fn with_contact(mut self, contact: ContactMethod) -> Self {
        self.contact.push(contact);
        self
    }

    /// The preferred (first) name
    pub fn primary_name(&self) -> Option<&str> {
        self.name.first().map(|n| n.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_as_single_string() {
        let org: Organization =
            serde_json::from_str(r#"{"name": "Internet Engineering Task Force"}"#).unwrap();
        assert_eq!(org.primary_name(), Some("Internet Engineering Task Force"));
        assert!(org.contact.is_empty());
    }

    #[test]
    fn test_name_variants() {
        let org: Organization = serde_json::from_str(
            r#"{"name": [{"content": "IETF", "language": "en"}, "Internet Engineering Task Force"], "abbreviation": "IETF"}"#,
        )
        .unwrap();
        assert_eq!(org.name.len(), 2);
        assert_eq!(org.primary_name(), Some("IETF"));
        assert_eq!(org.abbreviation.as_deref(), Some("IETF"));
    }
}
