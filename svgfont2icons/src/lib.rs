//! Extracts icon outlines from an SVG font.
//!
//! Each `<glyph>` with an outline and an advance becomes a [`NormalizedIcon`]:
//! its path moved into a y-down, 1000 unit em with the top of the em at the
//! origin, and a private use code point of its own.

pub mod allocator;
pub mod document;
pub mod error;
pub mod glyph;
mod icon;
pub mod metrics;
pub mod pipeline;
#[cfg(test)]
mod test_util;

pub use allocator::{CodePointAllocator, PRIVATE_USE_BASE};
pub use document::{FontDocument, FontElement, XmlDocument};
pub use error::{Error, InvalidFontDocumentError};
pub use icon::NormalizedIcon;
pub use metrics::FontMetrics;
pub use pipeline::MalformedPathPolicy;

use log::{debug, info, warn};

use crate::{
    glyph::{select, RawGlyph},
    pipeline::normalize_all,
};

/// Settings for one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Code point of the first icon
    pub code_point_base: u32,
    pub on_malformed_path: MalformedPathPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            code_point_base: PRIVATE_USE_BASE,
            on_malformed_path: MalformedPathPolicy::default(),
        }
    }
}

/// Extract icons from an already parsed font document.
///
/// Any error aborts the run; there is no partial result.
pub fn extract_icons<D: FontDocument>(
    doc: &D,
    options: &Options,
) -> Result<Vec<NormalizedIcon>, Error> {
    let metrics = FontMetrics::resolve(doc)?;
    debug!("{metrics:?}");

    let glyphs = RawGlyph::read_all(doc);
    let candidates: Vec<_> = glyphs
        .iter()
        .filter_map(|glyph| select(glyph, &metrics))
        .collect();
    debug!(
        "{} of {} glyphs have an outline and an advance",
        candidates.len(),
        glyphs.len()
    );

    let normalized = normalize_all(&candidates, &metrics, options.on_malformed_path)?;
    let icons = CodePointAllocator::new(options.code_point_base).assign(normalized);

    for icon in icons.iter().filter(|icon| !icon.has_nominal_width()) {
        warn!("Icon '{}' width {} != 1000", icon.name, icon.width);
    }
    info!(
        "Extracted {} icons: {}",
        icons.len(),
        icons
            .iter()
            .map(|icon| icon.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(icons)
}

/// Parse SVG font text and extract its icons.
pub fn import_svg_font(svg: &str, options: &Options) -> Result<Vec<NormalizedIcon>, Error> {
    let doc = XmlDocument::parse(svg)?;
    extract_icons(&doc, options)
}
