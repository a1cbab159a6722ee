//! Moves glyph outlines from font space into icon space.

use iconpath::{IconPath, PathOp};
use kurbo::Vec2;
use log::warn;
use rayon::prelude::*;
use smol_str::SmolStr;

use crate::{error::Error, glyph::Candidate, metrics::FontMetrics};

/// Decimal places kept in normalized path data
pub const PATH_PRECISION: u32 = 1;

/// What to do when a glyph's path data doesn't parse.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPathPolicy {
    /// Fail the whole extraction, so an incomplete icon set is never produced
    #[default]
    Abort,
    /// Leave the glyph out and keep going
    Skip,
}

/// The rewrite applied to every outline, in order.
///
/// Font space has y growing up from the baseline; icon space has y growing
/// down from the top of the em. Moving the ascent line to y=0 before flipping
/// puts the top of the em at the origin.
pub fn normalization_ops(metrics: &FontMetrics) -> [PathOp; 4] {
    [
        PathOp::Translate(Vec2::new(0.0, -metrics.ascent)),
        PathOp::Scale(Vec2::new(metrics.scale, -metrics.scale)),
        PathOp::ToAbsolute,
        PathOp::Round(PATH_PRECISION),
    ]
}

/// An outline in icon space, not yet given a code point.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGlyph {
    pub index: usize,
    pub name: SmolStr,
    pub path: String,
    pub width: f64,
}

/// Normalize one glyph; depends on nothing but its arguments.
pub fn normalize(candidate: &Candidate, metrics: &FontMetrics) -> Result<NormalizedGlyph, Error> {
    let path = IconPath::parse(&candidate.path_data).map_err(|source| Error::MalformedPath {
        index: candidate.index,
        name: candidate.name.clone(),
        source,
    })?;
    Ok(NormalizedGlyph {
        index: candidate.index,
        name: candidate.name.clone(),
        path: path.apply_all(&normalization_ops(metrics)).to_svg(),
        width: candidate.width,
    })
}

/// Normalize every candidate, in parallel, keeping source order.
///
/// With [`MalformedPathPolicy::Abort`] the error reported is that of the first
/// malformed glyph in source order.
pub fn normalize_all(
    candidates: &[Candidate],
    metrics: &FontMetrics,
    policy: MalformedPathPolicy,
) -> Result<Vec<NormalizedGlyph>, Error> {
    let results: Vec<_> = candidates
        .par_iter()
        .map(|candidate| normalize(candidate, metrics))
        .collect();

    let mut glyphs = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(glyph) => glyphs.push(glyph),
            Err(e) if policy == MalformedPathPolicy::Skip => warn!("Skipping: {e}"),
            Err(e) => return Err(e),
        }
    }
    Ok(glyphs)
}
