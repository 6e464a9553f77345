//! xml2rfc reference serialization
//!
//! This crate renders Relaton bibliographic items as xml2rfc v3
//! (RFC 7991) `<reference>` and `<referencegroup>` elements.
//!
//! Features:
//! - Title, author, date, abstract and series selection from messy records
//! - Per-registry series extraction (DOI, RFC, Internet-Draft, W3C, 3GPP, IEEE)
//! - HTML, JATS and plain-text abstracts reduced to paragraphs
//! - Anchor selection with optional XML-name sanitization
//! - Pretty-printed, canonically ordered XML output
//!
//! ```
//! use relaton_bibxml::{serialize_to_string, DocId, BibliographicItem};
//!
//! let item = BibliographicItem::new(vec![DocId::new("RFC 4036", "IETF")])
//!     .with_title("Management Information Base for Data Over Cable Service Interface Specification (DOCSIS) Cable Modem Termination Systems for Subscriber Management");
//! let xml = serialize_to_string(&item, None).unwrap();
//! assert!(xml.contains(r#"<seriesInfo name="RFC" value="4036"/>"#));
//! ```

pub mod abstracts;
pub mod anchor;
pub mod authors;
pub mod config;
pub mod element;
pub mod error;
pub mod refcontent;
pub mod reference;
pub mod series;
pub mod target;
mod writer;

pub use abstracts::{create_abstract, get_paragraphs, get_paragraphs_str, TextFormat};
pub use anchor::{get_suitable_anchor, sanitize_anchor, select_anchor};
pub use authors::{create_author, is_author, AUTHOR_ROLES};
pub use config::{
    AnchorConfig, MissingTitle, RefcontentPlacement, RenderOptions, SerializerConfig,
    TargetPlacement,
};
pub use element::{Element, Node};
pub use error::{ConfigError, ParagraphError, Result, SerializeError};
pub use refcontent::build_refcontent_string;
pub use reference::{create_reference, serialize, Serializer, DEFAULT_TITLE};
pub use series::{extract_series, SeriesInfo, DOCID_SERIES_EXTRACTORS};
pub use target::get_suitable_target;
pub use writer::{render, serialize_to_string};

// Re-export the data model so callers need a single dependency
pub use relaton_models::{BibliographicItem, Contributor, DocId};
