//! Lenient markup parsing via quick-xml.
//!
//! Email templates are HTML-ish, not strict XML: void elements go unclosed,
//! attribute names are mixed-case, text leans on entities like `&nbsp;`.
//! The reader runs with end-name checking off and an explicit open-element
//! stack here does the balancing. Text, comments, CDATA, entity references
//! and doctypes are captured byte-for-byte as text nodes so untouched markup
//! survives the round trip.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::dom::{Element, Node};
use crate::error::Error;

/// HTML elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub(crate) fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Parse a template fragment into a sequence of root nodes.
///
/// This is the only fallible operation in the crate; everything downstream
/// of a successful parse is total.
pub fn parse_fragment(input: &str) -> Result<Vec<Node>, Error> {
    let mut reader = Reader::from_str(input);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut roots: Vec<Node> = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    macro_rules! attach {
        ($node:expr) => {
            match stack.last_mut() {
                Some(parent) => parent.children.push($node),
                None => roots.push($node),
            }
        };
    }

    loop {
        let event = reader.read_event().map_err(|source| Error::Parse {
            position: reader.error_position(),
            source,
        })?;

        match event {
            Event::Start(start) => {
                let element = element_from(&start, &reader)?;
                if is_void(&element.name) {
                    attach!(Node::Element(element));
                } else {
                    stack.push(element);
                }
            }
            Event::Empty(start) => {
                let element = element_from(&start, &reader)?;
                attach!(Node::Element(element));
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).to_lowercase();
                if let Some(open) = stack.iter().rposition(|el| el.name == name) {
                    // Implicitly close anything left open inside it.
                    while stack.len() > open {
                        let element = stack.pop().expect("open element");
                        attach!(Node::Element(element));
                    }
                }
                // Unmatched end tags are dropped.
            }
            Event::Text(text) => {
                attach!(Node::Text(String::from_utf8_lossy(&text).into_owned()));
            }
            Event::GeneralRef(entity) => {
                let name = String::from_utf8_lossy(&entity).into_owned();
                attach!(Node::Text(format!("&{name};")));
            }
            Event::CData(cdata) => {
                let inner = String::from_utf8_lossy(&cdata).into_owned();
                attach!(Node::Text(format!("<![CDATA[{inner}]]>")));
            }
            Event::Comment(comment) => {
                let inner = String::from_utf8_lossy(&comment).into_owned();
                attach!(Node::Text(format!("<!--{inner}-->")));
            }
            Event::DocType(doctype) => {
                let inner = String::from_utf8_lossy(&doctype).into_owned();
                attach!(Node::Text(format!("<!DOCTYPE {inner}>")));
            }
            Event::PI(pi) => {
                let inner = String::from_utf8_lossy(&pi).into_owned();
                attach!(Node::Text(format!("<?{inner}?>")));
            }
            Event::Decl(decl) => {
                let inner = String::from_utf8_lossy(&decl).into_owned();
                attach!(Node::Text(format!("<?{inner}?>")));
            }
            Event::Eof => break,
        }
    }

    // Close whatever is still open at end of input.
    while let Some(element) = stack.pop() {
        attach!(Node::Element(element));
    }

    Ok(roots)
}

fn element_from(start: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Element, Error> {
    let name = String::from_utf8_lossy(start.name().as_ref()).to_lowercase();
    let mut element = Element::new(name);

    for attr in start.html_attributes() {
        let attr = attr.map_err(|source| Error::Parse {
            position: reader.error_position(),
            source: source.into(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_lowercase();
        let value = String::from_utf8_lossy(&attr.value).into_owned();
        element.push_attr(key, value);
    }

    Ok(element)
}
