//! Reading `<glyph>` declarations and choosing which become icons.

use log::{debug, warn};
use smol_str::SmolStr;

use crate::{
    document::{FontDocument, FontElement},
    metrics::{parse_number, FontMetrics},
};

/// Name given to glyphs without a `glyph-name`
pub const FALLBACK_NAME: &str = "glyph";

/// A `<glyph>` exactly as declared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGlyph {
    /// Position among the document's `<glyph>` elements
    pub index: usize,
    pub path_data: Option<String>,
    /// Informational only, icons get new code points
    pub unicode: Option<String>,
    pub name: Option<String>,
    /// Unparsed, so a present but unusable value can be told from an absent one
    pub horiz_adv_x: Option<String>,
}

impl RawGlyph {
    pub fn from_element(index: usize, element: &impl FontElement) -> RawGlyph {
        let owned = |name: &str| element.attribute(name).map(str::to_string);
        RawGlyph {
            index,
            path_data: owned("d"),
            unicode: owned("unicode"),
            name: owned("glyph-name"),
            horiz_adv_x: owned("horiz-adv-x"),
        }
    }

    /// Every `<glyph>` in document order.
    pub fn read_all<D: FontDocument>(doc: &D) -> Vec<RawGlyph> {
        doc.elements_by_tag("glyph")
            .into_iter()
            .enumerate()
            .map(|(i, element)| RawGlyph::from_element(i, element))
            .collect()
    }

    /// The glyph's own name, or [`FALLBACK_NAME`].
    pub fn icon_name(&self) -> SmolStr {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => SmolStr::new(name),
            _ => SmolStr::new_static(FALLBACK_NAME),
        }
    }
}

/// A glyph that will become an icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub index: usize,
    pub name: SmolStr,
    pub path_data: String,
    /// Advance in target units
    pub width: f64,
}

/// The glyph's advance, falling back to the font wide one.
///
/// A glyph that declares `horiz-adv-x` never falls back, even if the value is
/// unusable. Zero, empty and non-numeric advances all resolve to `None`.
pub fn resolve_glyph_advance(glyph: &RawGlyph, metrics: &FontMetrics) -> Option<f64> {
    let advance = match glyph.horiz_adv_x.as_deref() {
        Some(raw) => {
            let advance = parse_number(raw);
            if advance.is_none() && !raw.trim().is_empty() {
                warn!(
                    "Glyph {} ('{}') horiz-adv-x='{raw}' is not a number",
                    glyph.index,
                    glyph.icon_name()
                );
            }
            advance
        }
        None => metrics.horiz_adv_x,
    };
    advance.filter(|advance| *advance != 0.0)
}

/// Decide whether `glyph` becomes an icon.
///
/// Glyphs without outline data (spaces, mostly) and glyphs without a usable
/// advance are skipped; that is normal, not an error.
pub fn select(glyph: &RawGlyph, metrics: &FontMetrics) -> Option<Candidate> {
    let Some(path_data) = glyph
        .path_data
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    else {
        debug!(
            "Skip glyph {} ('{}'), it has no outline",
            glyph.index,
            glyph.icon_name()
        );
        return None;
    };
    let Some(advance) = resolve_glyph_advance(glyph, metrics) else {
        debug!(
            "Skip glyph {} ('{}'), it has no advance width",
            glyph.index,
            glyph.icon_name()
        );
        return None;
    };
    Some(Candidate {
        index: glyph.index,
        name: glyph.icon_name(),
        path_data: path_data.to_string(),
        width: advance * metrics.scale,
    })
}
