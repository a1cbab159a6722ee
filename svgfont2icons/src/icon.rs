use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::metrics::TARGET_UNITS_PER_EM;

/// An extracted icon, ready for an icon font build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedIcon {
    /// The glyph's name; not necessarily unique
    pub name: SmolStr,
    pub code_point: u32,
    /// Absolute path data, y down, one decimal place
    pub path: String,
    pub width: f64,
}

impl NormalizedIcon {
    /// Icons are expected to be one em wide; others still work, but look off.
    pub fn has_nominal_width(&self) -> bool {
        self.width == TARGET_UNITS_PER_EM
    }
}
