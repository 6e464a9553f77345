//! Configuration for the bibxml serializer
//!
//! Every option has a default matching established xml2rfc output, so an
//! empty TOML document is a valid configuration:
//!
//! ```toml
//! missing_title = "placeholder"          # or "fail"
//! target_placement = "both"              # "attribute", "format-element"
//! refcontent_placement = "element"       # or "attribute"
//! date_exempt_link_prefixes = ["http://www.iana.org"]
//! preferred_abstract_languages = ["en", "eng"]
//!
//! [anchor]
//! internet_draft = true
//! sanitize = false
//!
//! [render]
//! xml_declaration = true
//! pretty = true
//! indent = 2
//! canonical = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Serializer-wide configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    /// What to do with an item that has no title at all
    pub missing_title: MissingTitle,
    /// Where the selected target URL goes on a `<reference>`
    pub target_placement: TargetPlacement,
    /// Where the locality string goes on a `<reference>`
    pub refcontent_placement: RefcontentPlacement,
    /// Items linking to any of these prefixes get no `<date>`
    pub date_exempt_link_prefixes: Vec<String>,
    /// Abstract languages to prefer, in order; empty means "first abstract"
    pub preferred_abstract_languages: Vec<String>,
    /// Anchor selection variants
    pub anchor: AnchorConfig,
    /// Byte-level rendering
    pub render: RenderOptions,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            missing_title: MissingTitle::default(),
            target_placement: TargetPlacement::default(),
            refcontent_placement: RefcontentPlacement::default(),
            date_exempt_link_prefixes: vec!["http://www.iana.org".to_string()],
            preferred_abstract_languages: Vec::new(),
            anchor: AnchorConfig::default(),
            render: RenderOptions::default(),
        }
    }
}

impl SerializerConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Handling of items without any title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingTitle {
    /// Render "[title unavailable]"
    #[default]
    Placeholder,
    /// Refuse to build the reference
    Fail,
}

/// Where the target URL is attached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetPlacement {
    /// `target` attribute on the reference
    Attribute,
    /// `<format type="TXT" target="..."/>` child
    FormatElement,
    /// Both of the above
    #[default]
    Both,
}

impl TargetPlacement {
    pub fn uses_attribute(self) -> bool {
        matches!(self, TargetPlacement::Attribute | TargetPlacement::Both)
    }

    pub fn uses_format_element(self) -> bool {
        matches!(self, TargetPlacement::FormatElement | TargetPlacement::Both)
    }
}

/// Where the refcontent string is attached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefcontentPlacement {
    /// `<refcontent>` child element
    #[default]
    Element,
    /// `refcontent` attribute
    Attribute,
}

/// Anchor selection variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Give Internet-Draft identifiers the `I-D.` anchor treatment
    pub internet_draft: bool,
    /// Rewrite anchors that are not valid XML names
    pub sanitize: bool,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            internet_draft: true,
            sanitize: false,
        }
    }
}

/// Options for rendering an element tree to text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Emit `<?xml version="1.0" encoding="utf-8"?>`
    pub xml_declaration: bool,
    /// Indent nested elements
    pub pretty: bool,
    /// Spaces per nesting level when pretty-printing
    pub indent: usize,
    /// Order attributes by name
    pub canonical: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            pretty: true,
            indent: 2,
            canonical: true,
        }
    }
}

impl RenderOptions {
    /// Single-line output without declaration, attributes in tree order
    pub fn compact() -> Self {
        Self {
            xml_declaration: false,
            pretty: false,
            indent: 0,
            canonical: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = SerializerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SerializerConfig::default());
        assert_eq!(config.date_exempt_link_prefixes, vec!["http://www.iana.org"]);
    }

    #[test]
    fn test_partial_toml() {
        let config = SerializerConfig::from_toml_str(
            r#"
            missing_title = "fail"
            target_placement = "format-element"
            preferred_abstract_languages = ["en", "eng"]

            [anchor]
            sanitize = true

            [render]
            pretty = false
            "#,
        )
        .unwrap();
        assert_eq!(config.missing_title, MissingTitle::Fail);
        assert_eq!(config.target_placement, TargetPlacement::FormatElement);
        assert!(config.anchor.sanitize);
        assert!(config.anchor.internet_draft);
        assert!(!config.render.pretty);
        assert!(config.render.canonical);
        assert_eq!(config.refcontent_placement, RefcontentPlacement::Element);
    }

    #[test]
    fn test_invalid_toml() {
        let err = SerializerConfig::from_toml_str("missing_title = \"sometimes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_target_placement_flags() {
        assert!(TargetPlacement::Both.uses_attribute());
        assert!(TargetPlacement::Both.uses_format_element());
        assert!(!TargetPlacement::Attribute.uses_format_element());
        assert!(!TargetPlacement::FormatElement.uses_attribute());
    }
}
