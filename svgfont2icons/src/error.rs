use iconpath::MalformedPathError;
use quick_xml::events::attributes::AttrError;
use smol_str::SmolStr;
use thiserror::Error;

/// The document lacks something every glyph transform depends on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFontDocumentError {
    #[error("No <{0}> element")]
    MissingElement(&'static str),
    #[error("<{element}> has no '{attribute}' attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("<{element}> attribute '{attribute}' is not a number: '{value}'")]
    InvalidNumber {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid font document: {0}")]
    InvalidFontDocument(#[from] InvalidFontDocumentError),
    #[error("Glyph {index} ('{name}') has malformed path data")]
    MalformedPath {
        index: usize,
        name: SmolStr,
        #[source]
        source: MalformedPathError,
    },
    #[error("Error parsing XML: '{0}'")]
    Xml(#[from] quick_xml::Error),
    #[error("Error parsing XML attribute: '{0}'")]
    XmlAttribute(#[from] AttrError),
}
