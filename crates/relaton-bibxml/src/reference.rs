//! `<reference>` and `<referencegroup>` assembly
//!
//! An item with titles becomes a single `<reference>`. An untitled item
//! that includes other items becomes a `<referencegroup>` of their
//! references. Anything else cannot be rendered.

use std::collections::HashSet;

use chrono::Datelike;
use relaton_models::{BibliographicItem, DatePrecision, Relation};
use tracing::debug;

use crate::abstracts::create_abstract;
use crate::anchor::get_suitable_anchor;
use crate::authors::{create_author, is_author};
use crate::config::{MissingTitle, RefcontentPlacement, SerializerConfig};
use crate::element::Element;
use crate::error::{Result, SerializeError};
use crate::refcontent::build_refcontent_string;
use crate::series::{extract_series, SeriesInfo};
use crate::target::get_suitable_target;

/// Title used when an item's title is empty or missing
pub const DEFAULT_TITLE: &str = "[title unavailable]";

/// Serializes bibliographic items to xml2rfc element trees.
///
/// Holds only configuration; a single instance can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    config: SerializerConfig,
}

impl Serializer {
    pub fn new(config: SerializerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Serialize an item to a `<reference>` or `<referencegroup>` element.
    ///
    /// `anchor` overrides the anchor computed from the item's identifiers.
    pub fn serialize(&self, item: &BibliographicItem, anchor: Option<&str>) -> Result<Element> {
        let mut root = if !item.title.is_empty() {
            self.create_reference(item)?
        } else if item.relation.iter().any(Relation::is_includes) {
            self.create_referencegroup(item.included_items())?
        } else {
            return Err(SerializeError::Structure(
                "item has neither titles nor included items".to_string(),
            ));
        };

        let anchor = match anchor {
            Some(anchor) => Some(anchor.to_string()),
            None => match get_suitable_anchor(item, &self.config.anchor) {
                Ok(anchor) => Some(anchor),
                Err(e) => {
                    debug!(error = %e, "no anchor for item");
                    None
                }
            },
        };
        if let Some(anchor) = anchor {
            root.set("anchor", anchor);
        }

        if self.config.target_placement.uses_attribute() || root.name == "referencegroup" {
            if let Ok(target) = get_suitable_target(&item.link) {
                root.set("target", target);
            }
        }

        Ok(root)
    }

    /// A `<referencegroup>` with one `<reference>` per item
    pub fn create_referencegroup<'a, I>(&self, items: I) -> Result<Element>
    where
        I: IntoIterator<Item = &'a BibliographicItem>,
    {
        let mut group = Element::new("referencegroup");
        for item in items {
            group.append(self.create_reference(item)?);
        }
        Ok(group)
    }

    /// A single `<reference>` for an item
    pub fn create_reference(&self, item: &BibliographicItem) -> Result<Element> {
        let title = match item.title.first() {
            Some(title) => title.text().unwrap_or(DEFAULT_TITLE),
            None => match self.config.missing_title {
                MissingTitle::Placeholder => DEFAULT_TITLE,
                MissingTitle::Fail => {
                    return Err(SerializeError::Structure("item has no title".to_string()))
                }
            },
        };

        let mut front = Element::new("front").child(Element::with_text("title", title));

        let mut has_authors = false;
        for contributor in item.contributor.iter().filter(|c| is_author(c)) {
            front.append(create_author(contributor)?);
            has_authors = true;
        }
        if !has_authors {
            front.append(Element::new("author"));
        }

        if let Some(date) = self.date_element(item) {
            front.append(date);
        }

        if !item.abstract_.is_empty() {
            match create_abstract(&item.abstract_, &self.config.preferred_abstract_languages) {
                Ok(abstract_) => front.append(abstract_),
                Err(e) => debug!(error = %e, "skipping abstract"),
            }
        }

        let mut reference = Element::new("reference").child(front);

        match get_suitable_anchor(item, &self.config.anchor) {
            Ok(anchor) => reference.set("anchor", anchor),
            Err(e) => debug!(error = %e, "reference without anchor"),
        }

        if let Some(extent) = &item.extent {
            let refcontent = build_refcontent_string(extent);
            if !refcontent.is_empty() {
                match self.config.refcontent_placement {
                    RefcontentPlacement::Element => {
                        reference.append(Element::with_text("refcontent", refcontent))
                    }
                    RefcontentPlacement::Attribute => reference.set("refcontent", refcontent),
                }
            }
        }

        for series in collect_series(item) {
            reference.append(
                Element::new("seriesInfo")
                    .attr("name", series.name)
                    .attr("value", series.value),
            );
        }

        match get_suitable_target(&item.link) {
            Ok(target) => {
                let placement = self.config.target_placement;
                if placement.uses_format_element() {
                    reference.append(
                        Element::new("format")
                            .attr("type", "TXT")
                            .attr("target", target.as_str()),
                    );
                }
                if placement.uses_attribute() {
                    reference.set("target", target);
                }
            }
            Err(e) => debug!(error = %e, "reference without target"),
        }

        Ok(reference)
    }

    fn date_element(&self, item: &BibliographicItem) -> Option<Element> {
        let exempt = item.link.iter().find(|link| {
            self.config
                .date_exempt_link_prefixes
                .iter()
                .any(|prefix| link.content.starts_with(prefix.as_str()))
        });
        if let Some(link) = exempt {
            debug!(link = %link.content, "date omitted for exempt link");
            return None;
        }

        let date = item
            .date
            .iter()
            .find(|d| d.date_type == "published")
            .or_else(|| item.date.first())?;

        let Some(parsed) = date.parsed() else {
            debug!(value = %date.value, "unparseable date");
            return None;
        };

        let mut element = Element::new("date").attr("year", parsed.date.format("%Y").to_string());
        if parsed.precision >= DatePrecision::Month {
            element.set("month", parsed.date.format("%B").to_string());
        }
        if parsed.precision == DatePrecision::Day {
            element.set("day", parsed.date.day().to_string());
        }
        Some(element)
    }
}

/// Serialize with the default configuration
pub fn serialize(item: &BibliographicItem, anchor: Option<&str>) -> Result<Element> {
    Serializer::default().serialize(item, anchor)
}

/// Build a `<reference>` with the default configuration
pub fn create_reference(item: &BibliographicItem) -> Result<Element> {
    Serializer::default().create_reference(item)
}

// Identifier-derived series first, then declared ones; each pair once.
fn collect_series(item: &BibliographicItem) -> Vec<SeriesInfo> {
    let declared = item.series.iter().filter_map(|series| {
        let title = series.title.first().map(|t| t.content.as_str())?;
        let number = series.number.as_deref().filter(|n| !n.is_empty())?;
        Some(SeriesInfo::new(title, number))
    });

    let mut seen = HashSet::new();
    extract_series(&item.docid)
        .into_iter()
        .chain(declared)
        .filter(|series| seen.insert(series.clone()))
        .collect()
}
