//! Error types for relaton-bibxml

use thiserror::Error;

/// Result type alias for serializer operations
pub type Result<T> = std::result::Result<T, SerializeError>;

/// Main error type for serializer operations
#[derive(Error, Debug)]
pub enum SerializeError {
    /// The item lacks what is needed to build the element at all
    #[error("Unable to construct element: {0}")]
    Structure(String),

    /// A contributor without any author-like role was given to the author builder
    #[error("Unable to construct <author>: {0}")]
    Role(String),

    /// No candidate for an optional value (anchor, target)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failure while writing XML
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Rendered bytes were not UTF-8
    #[error("Rendered XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl SerializeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SerializeError::NotFound(_))
    }
}

/// Recoverable failure of one paragraph extraction stage
#[derive(Error, Debug)]
pub enum ParagraphError {
    #[error("Markup could not be parsed: {0}")]
    Markup(#[from] quick_xml::Error),

    #[error("Markup has unclosed elements")]
    Unbalanced,

    #[error("No paragraphs found")]
    NoParagraphs,
}

/// Errors that can occur when loading serializer configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
