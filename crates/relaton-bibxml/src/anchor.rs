//! Anchor selection
//!
//! The anchor is the short token other documents use to cross-reference a
//! rendered `<reference>`. It is always taken from one of the item's
//! document identifiers.

use lazy_static::lazy_static;
use regex::Regex;
use relaton_models::{BibliographicItem, DocId};
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

use crate::config::AnchorConfig;
use crate::error::{Result, SerializeError};

lazy_static! {
    static ref XML_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9._-]*$").unwrap();
    static ref SEPARATOR_RUN_REGEX: Regex = Regex::new(r"[_-]{2,}").unwrap();
}

/// Pick an identifier for the anchor.
///
/// Priority: a docid scoped `anchor`, then a primary docid, then the first.
pub fn select_anchor(docids: &[DocId]) -> Result<String> {
    docids
        .iter()
        .find(|d| d.scope.as_deref() == Some("anchor"))
        .or_else(|| docids.iter().find(|d| d.is_primary()))
        .or_else(|| docids.first())
        .map(|d| d.id.clone())
        .ok_or_else(|| SerializeError::NotFound("no suitable anchor".to_string()))
}

/// Anchor for an Internet-Draft identifier.
///
/// Versioned drafts keep their identifier, unversioned ones get the `I-D.`
/// prefix used by the xml2rfc reference libraries.
pub fn format_internet_draft_anchor(id: &str, versioned: bool) -> String {
    if versioned {
        id.to_string()
    } else {
        format!("I-D.{}", id)
    }
}

/// Anchor for a whole item, honouring the configured variants
pub fn get_suitable_anchor(item: &BibliographicItem, config: &AnchorConfig) -> Result<String> {
    let scoped = item
        .docid
        .iter()
        .find(|d| d.scope.as_deref() == Some("anchor"));
    let draft = item.docid.iter().find(|d| d.is_type("internet-draft"));

    let anchor = match (scoped, draft) {
        (Some(docid), _) => docid.id.clone(),
        (None, Some(docid)) if config.internet_draft => {
            format_internet_draft_anchor(&docid.id, item.has_draft_version())
        }
        _ => select_anchor(&item.docid)?,
    };

    if config.sanitize && !is_valid_anchor(&anchor) {
        let sanitized = sanitize_anchor(&anchor);
        trace!(from = %anchor, to = %sanitized, "sanitized anchor");
        Ok(sanitized)
    } else {
        Ok(anchor)
    }
}

/// Whether `anchor` can be used as-is as an XML name token
pub fn is_valid_anchor(anchor: &str) -> bool {
    XML_NAME_REGEX.is_match(anchor)
}

/// Rewrite an arbitrary identifier into a valid XML name token.
///
/// `"ISO/IEC 27001:2013"` becomes `"ISO-IEC_27001.2013"`.
pub fn sanitize_anchor(anchor: &str) -> String {
    let mapped: String = anchor
        .nfkd()
        .filter_map(|c| match c {
            '/' => Some('-'),
            ':' => Some('.'),
            c if c.is_whitespace() => Some('_'),
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') => Some(c),
            c if !c.is_ascii() => None,
            _ => Some('_'),
        })
        .collect();

    let collapsed = SEPARATOR_RUN_REGEX.replace_all(&mapped, "_");
    let trimmed = collapsed.trim_matches(|c| c == '_' || c == '-');

    match trimmed.chars().next() {
        None => "_".to_string(),
        Some(first) if first.is_ascii_digit() || first == '.' => format!("_{}", trimmed),
        Some(_) => trimmed.to_string(),
    }
}
