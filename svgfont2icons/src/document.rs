//! The minimal view of a parsed SVG font that extraction needs.
//!
//! Metrics and glyph selection only look up elements by tag and attributes by
//! name, so anything offering that can stand in for a real XML tree.

use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

use crate::error::Error;

pub trait FontElement {
    fn attribute(&self, name: &str) -> Option<&str>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

pub trait FontDocument {
    type Element: FontElement;

    /// All elements with the given tag, in document order.
    fn elements_by_tag(&self, tag: &str) -> Vec<&Self::Element>;
}

/// An element with its unescaped attributes; children are flattened into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    tag: String,
    attributes: Vec<(String, String)>,
}

impl XmlElement {
    fn from_start(start: &BytesStart) -> Result<XmlElement, Error> {
        let tag = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let value = attr.unescape_value()?;
            attributes.push((
                String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                value.into_owned(),
            ));
        }
        Ok(XmlElement { tag, attributes })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl FontElement for XmlElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Every element of an XML document, in document order.
///
/// Tags are matched on their local name so `<svg:glyph>` is a `glyph`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlDocument {
    elements: Vec<XmlElement>,
}

impl XmlDocument {
    pub fn parse(xml: &str) -> Result<XmlDocument, Error> {
        let mut reader = Reader::from_str(xml);
        let mut elements = Vec::new();
        loop {
            match reader.read_event()? {
                Event::Start(start) | Event::Empty(start) => {
                    elements.push(XmlElement::from_start(&start)?)
                }
                Event::Eof => break,
                _ => (),
            }
        }
        Ok(XmlDocument { elements })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FontDocument for XmlDocument {
    type Element = XmlElement;

    fn elements_by_tag(&self, tag: &str) -> Vec<&XmlElement> {
        self.elements.iter().filter(|e| e.tag == tag).collect()
    }
}
