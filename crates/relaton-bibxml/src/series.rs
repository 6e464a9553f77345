//! Series extraction from document identifiers
//!
//! Each registry writes its identifiers differently, so each gets its own
//! extractor. Extractors are independent: the registry entry's docid type
//! decides whether its transform runs, and a transform that cannot make
//! sense of an identifier contributes nothing (or the raw id, for IEEE).

use relaton_models::DocId;
use tracing::trace;

/// A `(name, value)` pair rendered as `<seriesInfo name=".." value=".."/>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesInfo {
    pub name: String,
    pub value: String,
}

impl SeriesInfo {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One registry's rule for deriving series information from a docid
#[derive(Debug, Clone, Copy)]
pub struct SeriesExtractor {
    /// Human-readable registry name
    pub registry: &'static str,
    /// Docid type this extractor handles, matched case-insensitively
    pub docid_type: &'static str,
    transform: fn(&DocId) -> Option<SeriesInfo>,
}

impl SeriesExtractor {
    pub fn applies_to(&self, docid: &DocId) -> bool {
        docid.is_type(self.docid_type)
    }

    pub fn apply(&self, docid: &DocId) -> Option<SeriesInfo> {
        if !self.applies_to(docid) {
            return None;
        }
        let series = (self.transform)(docid);
        if series.is_none() {
            trace!(registry = self.registry, id = %docid.id, "docid yields no series");
        }
        series
    }
}

const DOI: SeriesExtractor = SeriesExtractor {
    registry: "DOI",
    docid_type: "doi",
    transform: |docid| Some(SeriesInfo::new("DOI", docid.id.as_str())),
};

const RFC: SeriesExtractor = SeriesExtractor {
    registry: "RFC",
    docid_type: "ietf",
    transform: rfc_series,
};

const INTERNET_DRAFT: SeriesExtractor = SeriesExtractor {
    registry: "Internet-Draft",
    docid_type: "internet-draft",
    transform: |docid| Some(SeriesInfo::new("Internet-Draft", docid.id.as_str())),
};

const W3C: SeriesExtractor = SeriesExtractor {
    registry: "W3C",
    docid_type: "w3c",
    transform: w3c_series,
};

const THREE_GPP_TR: SeriesExtractor = SeriesExtractor {
    registry: "3GPP TR",
    docid_type: "3gpp",
    transform: three_gpp_tr_series,
};

const IEEE: SeriesExtractor = SeriesExtractor {
    registry: "IEEE",
    docid_type: "ieee",
    transform: ieee_series,
};

/// All extractors, in the order their results are emitted
pub static DOCID_SERIES_EXTRACTORS: &[SeriesExtractor] =
    &[DOI, RFC, INTERNET_DRAFT, W3C, THREE_GPP_TR, IEEE];

/// `("DOI", id)` for DOI identifiers
pub fn extract_doi_series(docid: &DocId) -> Option<SeriesInfo> {
    DOI.apply(docid)
}

/// `("RFC", number)` for IETF identifiers of the form "RFC 4036"
pub fn extract_rfc_series(docid: &DocId) -> Option<SeriesInfo> {
    RFC.apply(docid)
}

/// `("Internet-Draft", id)` for Internet-Draft identifiers
pub fn extract_id_series(docid: &DocId) -> Option<SeriesInfo> {
    INTERNET_DRAFT.apply(docid)
}

/// `("W3C", name)` for W3C identifiers such as "W3C.REC-xml-20081126"
pub fn extract_w3c_series(docid: &DocId) -> Option<SeriesInfo> {
    W3C.apply(docid)
}

/// `("3GPP TR", "{id} {version}")` for "3GPP TR {id}:{release}/{version}"
pub fn extract_3gpp_tr_series(docid: &DocId) -> Option<SeriesInfo> {
    THREE_GPP_TR.apply(docid)
}

/// `("IEEE", "{id}-{year}")` for IEEE identifiers, or the raw id when the
/// identifier does not split into id and year
pub fn extract_ieee_series(docid: &DocId) -> Option<SeriesInfo> {
    IEEE.apply(docid)
}

/// Run every extractor over every docid, in order
pub fn extract_series(docids: &[DocId]) -> Vec<SeriesInfo> {
    docids
        .iter()
        .flat_map(|docid| {
            DOCID_SERIES_EXTRACTORS
                .iter()
                .filter_map(move |extractor| extractor.apply(docid))
        })
        .collect()
}

fn rfc_series(docid: &DocId) -> Option<SeriesInfo> {
    if !docid.id.to_lowercase().starts_with("rfc ") {
        return None;
    }
    let normalized = docid.id.replace('.', " ");
    let number = normalized.rsplit(' ').next().unwrap_or_default();
    Some(SeriesInfo::new("RFC", number))
}

fn w3c_series(docid: &DocId) -> Option<SeriesInfo> {
    let normalized = docid.id.replace('.', " ");
    let name = normalized.rsplit("W3C ").next().unwrap_or_default();
    Some(SeriesInfo::new("W3C", name))
}

fn three_gpp_tr_series(docid: &DocId) -> Option<SeriesInfo> {
    let version = docid.id.rsplit('/').next().unwrap_or_default();
    let id = docid.id.split("3GPP TR ").nth(1)?.split(':').next()?;
    Some(SeriesInfo::new("3GPP TR", format!("{} {}", id, version)))
}

fn ieee_series(docid: &DocId) -> Option<SeriesInfo> {
    let token = docid
        .id
        .rsplit(' ')
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let mut segments = token.trim().split('.');

    match (segments.next(), segments.next()) {
        (Some(id), Some(year)) => Some(SeriesInfo::new(
            "IEEE",
            format!("{}-{}", id.replace('-', "."), year),
        )),
        _ => Some(SeriesInfo::new("IEEE", docid.id.as_str())),
    }
}
