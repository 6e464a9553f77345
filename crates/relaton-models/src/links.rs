//! Typed links

use serde::{Deserialize, Serialize};

/// A typed URL (`src`, `xml`, `pdf`, `doi`, ...)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub content: String,
    #[serde(default, rename = "type")]
    pub link_type: Option<String>,
}

impl Link {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            link_type: None,
        }
    }

    pub fn typed(content: impl Into<String>, link_type: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            link_type: Some(link_type.into()),
        }
    }

    /// Whether the link has exactly the given type
    pub fn is_type(&self, link_type: &str) -> bool {
        self.link_type.as_deref() == Some(link_type)
    }
}
