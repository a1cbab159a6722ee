//! An in-memory stand in for a parsed font document.

use crate::document::{FontDocument, FontElement};

#[derive(Debug, Default, Clone)]
pub(crate) struct FakeElement {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
}

impl FakeElement {
    pub(crate) fn new(tag: &'static str, attributes: &[(&'static str, &str)]) -> FakeElement {
        FakeElement {
            tag,
            attributes: attributes
                .iter()
                .map(|(k, v)| (*k, v.to_string()))
                .collect(),
        }
    }
}

impl FontElement for FakeElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FakeDocument {
    elements: Vec<FakeElement>,
}

impl FakeDocument {
    pub(crate) fn new() -> FakeDocument {
        FakeDocument::default()
    }

    pub(crate) fn with(mut self, tag: &'static str, attributes: &[(&'static str, &str)]) -> Self {
        self.elements.push(FakeElement::new(tag, attributes));
        self
    }

    /// `<font>` and `<font-face>` with the usual icon font metrics.
    pub(crate) fn icon_font() -> FakeDocument {
        FakeDocument::new()
            .with("font", &[("horiz-adv-x", "1000")])
            .with("font-face", &[("ascent", "850"), ("units-per-em", "1000")])
    }
}

impl FontDocument for FakeDocument {
    type Element = FakeElement;

    fn elements_by_tag(&self, tag: &str) -> Vec<&FakeElement> {
        self.elements.iter().filter(|e| e.tag == tag).collect()
    }
}
