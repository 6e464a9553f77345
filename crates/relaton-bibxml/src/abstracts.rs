//! Abstract normalization
//!
//! Abstracts arrive as HTML fragments, JATS fragments or plain text, and not
//! always labelled correctly. Each is reduced to a list of paragraph strings
//! by trying the markup parsers the declared format allows, in order, and
//! finally splitting on blank lines.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use relaton_models::GenericStringValue;
use tracing::trace;

use crate::element::Element;
use crate::error::{ParagraphError, Result, SerializeError};

const JATS_NAMESPACE: &str = "http://www.ncbi.nlm.nih.gov/JATS1";

/// Markup dialect of a text value, as far as its `format` tells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Html,
    Jats,
    Plain,
    /// No format given
    Unspecified,
    /// A format naming none of the known dialects
    Other,
}

type Stage = fn(&str) -> std::result::Result<Vec<String>, ParagraphError>;

const HTML_STAGE: (&str, Stage) = ("html", get_paragraphs_html);
const JATS_STAGE: (&str, Stage) = ("jats", get_paragraphs_jats);

impl TextFormat {
    pub fn detect(format: Option<&str>) -> Self {
        let format = match format.map(str::trim) {
            None | Some("") => return TextFormat::Unspecified,
            Some(format) => format.to_ascii_lowercase(),
        };

        if format.contains("html") {
            TextFormat::Html
        } else if format.contains("jats") {
            TextFormat::Jats
        } else if format.contains("plain") {
            TextFormat::Plain
        } else {
            TextFormat::Other
        }
    }

    /// Markup stages to try before falling back to plain text
    fn markup_stages(self) -> &'static [(&'static str, Stage)] {
        match self {
            TextFormat::Html | TextFormat::Unspecified => &[HTML_STAGE],
            TextFormat::Jats => &[JATS_STAGE],
            TextFormat::Plain => &[],
            TextFormat::Other => &[HTML_STAGE, JATS_STAGE],
        }
    }
}

/// Paragraphs of a text value, dispatched on its declared format
pub fn get_paragraphs(value: &GenericStringValue) -> Vec<String> {
    get_paragraphs_str(&value.content, value.format.as_deref())
}

/// Paragraphs of `text` in the given declared format.
///
/// Never fails: markup that cannot be parsed, or that has no paragraphs,
/// is treated as plain text.
pub fn get_paragraphs_str(text: &str, format: Option<&str>) -> Vec<String> {
    let text_format = TextFormat::detect(format);

    for (stage, parse) in text_format.markup_stages() {
        match parse(text) {
            Ok(paragraphs) => return paragraphs,
            Err(e) => trace!(stage, ?text_format, error = %e, "paragraph stage failed"),
        }
    }

    get_paragraphs_plain(text)
}

/// Text of each direct `<p>` in an HTML fragment
pub fn get_paragraphs_html(text: &str) -> std::result::Result<Vec<String>, ParagraphError> {
    let document = format!("<main>{}</main>", text);
    direct_paragraphs(&document, |e| e.name().as_ref() == b"p")
}

/// Text of each direct paragraph in a JATS fragment; `<jats:p>` and `<p>`
/// both count
pub fn get_paragraphs_jats(text: &str) -> std::result::Result<Vec<String>, ParagraphError> {
    let document = format!("<main xmlns:jats=\"{}\">{}</main>", JATS_NAMESPACE, text);
    direct_paragraphs(&document, |e| e.local_name().as_ref() == b"p")
}

/// Blank-line separated paragraphs
pub fn get_paragraphs_plain(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build `<abstract>` from the preferred abstract.
///
/// With no preferred languages the first abstract is used; otherwise the
/// first one tagged with any preferred language, else the first.
pub fn create_abstract(abstracts: &[GenericStringValue], preferred: &[String]) -> Result<Element> {
    let chosen = preferred
        .iter()
        .find_map(|lang| abstracts.iter().find(|a| a.has_language(lang)))
        .or_else(|| abstracts.first())
        .ok_or_else(|| SerializeError::Structure("no abstracts given".to_string()))?;

    let paragraphs = get_paragraphs(chosen);
    if paragraphs.is_empty() {
        return Err(SerializeError::Structure("abstract has no text".to_string()));
    }

    let mut element = Element::new("abstract");
    for paragraph in paragraphs {
        element.append(Element::with_text("t", paragraph));
    }
    Ok(element)
}

// Text of every matching child of the root element, in document order.
fn direct_paragraphs<F>(document: &str, is_paragraph: F) -> std::result::Result<Vec<String>, ParagraphError>
where
    F: Fn(&BytesStart) -> bool,
{
    let mut reader = Reader::from_str(document);
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<String> = None;
    let mut paragraphs = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                depth += 1;
                if depth == 2 && is_paragraph(e) {
                    current = Some(String::new());
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some(text) = current.take() {
                        let text = text.trim();
                        if !text.is_empty() {
                            paragraphs.push(text.to_string());
                        }
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(ref e) => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::CData(ref e) => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(ParagraphError::Unbalanced);
    }
    if paragraphs.is_empty() {
        return Err(ParagraphError::NoParagraphs);
    }
    Ok(paragraphs)
}
