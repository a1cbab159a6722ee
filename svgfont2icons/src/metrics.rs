//! Font wide metrics and their fallback rules.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    document::{FontDocument, FontElement},
    error::InvalidFontDocumentError,
};

/// Assumed when `<font-face>` has no usable `units-per-em`
pub const DEFAULT_UNITS_PER_EM: f64 = 1000.0;

/// The em size icons are normalized to
pub const TARGET_UNITS_PER_EM: f64 = 1000.0;

const FONT: &str = "font";
const FONT_FACE: &str = "font-face";
const HORIZ_ADV_X: &str = "horiz-adv-x";
const ASCENT: &str = "ascent";
const UNITS_PER_EM: &str = "units-per-em";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Default advance for glyphs that don't set their own
    pub horiz_adv_x: Option<f64>,
    pub ascent: f64,
    pub units_per_em: f64,
    /// `TARGET_UNITS_PER_EM / units_per_em`
    pub scale: f64,
}

impl FontMetrics {
    pub fn new(horiz_adv_x: Option<f64>, ascent: f64, units_per_em: f64) -> FontMetrics {
        FontMetrics {
            horiz_adv_x,
            ascent,
            units_per_em,
            scale: TARGET_UNITS_PER_EM / units_per_em,
        }
    }

    /// Read metrics from the first `<font>` and `<font-face>` of `doc`.
    pub fn resolve<D: FontDocument>(doc: &D) -> Result<FontMetrics, InvalidFontDocumentError> {
        let font = first_element(doc, FONT)?;
        let face = first_element(doc, FONT_FACE)?;
        Ok(FontMetrics::new(
            resolve_font_advance(font),
            resolve_ascent(face)?,
            resolve_units_per_em(face),
        ))
    }
}

fn first_element<'a, D: FontDocument>(
    doc: &'a D,
    tag: &'static str,
) -> Result<&'a D::Element, InvalidFontDocumentError> {
    doc.elements_by_tag(tag)
        .into_iter()
        .next()
        .ok_or(InvalidFontDocumentError::MissingElement(tag))
}

/// A finite number, surrounding whitespace allowed.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// `units-per-em` of `<font-face>`; absent, non-numeric or non-positive means
/// [`DEFAULT_UNITS_PER_EM`].
pub fn resolve_units_per_em(face: &impl FontElement) -> f64 {
    face.attribute(UNITS_PER_EM)
        .and_then(parse_number)
        .filter(|upem| *upem > 0.0)
        .unwrap_or(DEFAULT_UNITS_PER_EM)
}

/// `ascent` of `<font-face>`, without which there is no baseline to flip around.
pub fn resolve_ascent(face: &impl FontElement) -> Result<f64, InvalidFontDocumentError> {
    let raw = face
        .attribute(ASCENT)
        .ok_or(InvalidFontDocumentError::MissingAttribute {
            element: FONT_FACE,
            attribute: ASCENT,
        })?;
    parse_number(raw).ok_or_else(|| InvalidFontDocumentError::InvalidNumber {
        element: FONT_FACE,
        attribute: ASCENT,
        value: raw.to_string(),
    })
}

/// `horiz-adv-x` of `<font>`, if it is a number.
pub fn resolve_font_advance(font: &impl FontElement) -> Option<f64> {
    let raw = font.attribute(HORIZ_ADV_X)?;
    let advance = parse_number(raw);
    if advance.is_none() {
        warn!("Ignoring <font> {HORIZ_ADV_X}='{raw}', it is not a number");
    }
    advance
}
