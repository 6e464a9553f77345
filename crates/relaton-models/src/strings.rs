//! Localized and formatted strings

use serde::{Deserialize, Serialize};

use crate::one_or_many;

/// A piece of text tagged with its markup format and locale.
///
/// `format` is a MIME-like hint (`text/html`, `text/plain`,
/// `application/x-jats+xml`) that governs how `content` is to be read.
/// Deserializes from a bare string as well as from the full object form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StringValueRepr")]
pub struct GenericStringValue {
    pub content: String,
    pub format: Option<String>,
    pub language: Vec<String>,
    pub script: Vec<String>,
}

impl GenericStringValue {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Builder method to set the markup format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Builder method to add a language code
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language.push(language.into());
        self
    }

    /// Whether any of the value's language codes matches `code`
    /// (case-insensitive)
    pub fn has_language(&self, code: &str) -> bool {
        self.language.iter().any(|l| l.eq_ignore_ascii_case(code))
    }
}

impl From<&str> for GenericStringValue {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringValueRepr {
    Bare(String),
    Full {
        content: String,
        #[serde(default)]
        format: Option<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        language: Vec<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        script: Vec<String>,
    },
}

impl From<StringValueRepr> for GenericStringValue {
    fn from(repr: StringValueRepr) -> Self {
        match repr {
            StringValueRepr::Bare(content) => Self::new(content),
            StringValueRepr::Full {
                content,
                format,
                language,
                script,
            } => Self {
                content,
                format,
                language,
                script,
            },
        }
    }
}

/// A typed title. Unlike [`GenericStringValue`], content may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TitleRepr")]
pub struct Title {
    pub content: Option<String>,
    pub format: Option<String>,
    pub language: Vec<String>,
    pub script: Vec<String>,
    #[serde(rename = "type")]
    pub title_type: Option<String>,
}

impl Title {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Builder method to set the title type (`main`, `title-intro`, ...)
    pub fn with_type(mut self, title_type: impl Into<String>) -> Self {
        self.title_type = Some(title_type.into());
        self
    }

    /// Title content, treating an empty string the same as a missing one
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TitleRepr {
    Bare(String),
    Full {
        #[serde(default)]
        content: Option<String>,
        #[serde(default)]
        format: Option<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        language: Vec<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        script: Vec<String>,
        #[serde(default, rename = "type")]
        title_type: Option<String>,
    },
}

impl From<TitleRepr> for Title {
    fn from(repr: TitleRepr) -> Self {
        match repr {
            TitleRepr::Bare(content) => Self::new(content),
            TitleRepr::Full {
                content,
                format,
                language,
                script,
                title_type,
            } => Self {
                content,
                format,
                language,
                script,
                title_type,
            },
        }
    }
}

/// Bibliographic note
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiblioNote {
    pub content: String,
    #[serde(default, rename = "type")]
    pub note_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_value_from_bare_string() {
        let value: GenericStringValue = serde_json::from_str(r#""Internet Society""#).unwrap();
        assert_eq!(value.content, "Internet Society");
        assert!(value.format.is_none());
    }

    #[test]
    fn test_string_value_full_form() {
        let value: GenericStringValue = serde_json::from_str(
            r#"{"content": "<p>Text</p>", "format": "text/html", "language": "en", "script": ["Latn"]}"#,
        )
        .unwrap();
        assert_eq!(value.format.as_deref(), Some("text/html"));
        assert_eq!(value.language, vec!["en"]);
        assert_eq!(value.script, vec!["Latn"]);
        assert!(value.has_language("EN"));
    }

    #[test]
    fn test_title_without_content() {
        let title: Title = serde_json::from_str(r#"{"type": "main"}"#).unwrap();
        assert!(title.content.is_none());
        assert_eq!(title.title_type.as_deref(), Some("main"));
        assert!(title.text().is_none());
    }

    #[test]
    fn test_title_empty_content_has_no_text() {
        assert!(Title::new("").text().is_none());
        assert_eq!(Title::new("Ethernet").text(), Some("Ethernet"));
    }
}
