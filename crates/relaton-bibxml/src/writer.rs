//! Byte-level rendering of element trees

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use relaton_models::BibliographicItem;

use crate::config::RenderOptions;
use crate::element::{Element, Node};
use crate::error::Result;
use crate::reference::Serializer;

/// Render an element tree as UTF-8 XML text.
///
/// Childless elements are written as empty tags. In canonical mode
/// attributes are ordered by name.
pub fn render(element: &Element, options: &RenderOptions) -> Result<String> {
    let mut writer = if options.pretty {
        Writer::new_with_indent(Vec::new(), b' ', options.indent)
    } else {
        Writer::new(Vec::new())
    };

    if options.xml_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    }
    write_element(&mut writer, element, options.canonical)?;

    Ok(String::from_utf8(writer.into_inner())?)
}

/// Serialize an item with the default configuration and render it with
/// declaration, indentation and canonical attribute order
pub fn serialize_to_string(item: &BibliographicItem, anchor: Option<&str>) -> Result<String> {
    Serializer::default().serialize_to_string(item, anchor)
}

impl Serializer {
    /// Serialize an item and render it with the configured options
    pub fn serialize_to_string(
        &self,
        item: &BibliographicItem,
        anchor: Option<&str>,
    ) -> Result<String> {
        let root = self.serialize(item, anchor)?;
        render(&root, &self.config().render)
    }
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    element: &Element,
    canonical: bool,
) -> quick_xml::Result<()> {
    let mut attributes: Vec<&(String, String)> = element.attributes().iter().collect();
    if canonical {
        attributes.sort_by(|a, b| a.0.cmp(&b.0));
    }

    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.is_empty() {
        return writer.write_event(Event::Empty(start));
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            Node::Element(e) => write_element(writer, e, canonical)?,
            Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Element {
        Element::new("reference")
            .attr("target", "https://example.org/?a=1&b=2")
            .attr("anchor", "EX")
            .child(
                Element::new("front")
                    .child(Element::with_text("title", "Fish & <Chips>"))
                    .child(Element::new("author")),
            )
    }

    #[test]
    fn test_compact() {
        let xml = render(&tree(), &RenderOptions::compact()).unwrap();
        assert_eq!(
            xml,
            "<reference target=\"https://example.org/?a=1&amp;b=2\" anchor=\"EX\">\
             <front><title>Fish &amp; &lt;Chips&gt;</title><author/></front></reference>"
        );
    }

    #[test]
    fn test_pretty_canonical() {
        let xml = render(&tree(), &RenderOptions::default()).unwrap();
        insta::assert_snapshot!(xml, @r###"
        <?xml version="1.0" encoding="utf-8"?>
        <reference anchor="EX" target="https://example.org/?a=1&amp;b=2">
          <front>
            <title>Fish &amp; &lt;Chips&gt;</title>
            <author/>
          </front>
        </reference>
        "###);
    }

    #[test]
    fn test_declaration_only_when_asked() {
        let options = RenderOptions {
            xml_declaration: false,
            ..RenderOptions::compact()
        };
        let xml = render(&Element::new("referencegroup"), &options).unwrap();
        assert_eq!(xml, "<referencegroup/>");
    }
}
