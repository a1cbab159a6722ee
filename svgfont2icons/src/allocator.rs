//! Code point assignment for extracted icons.

use log::warn;

use crate::{icon::NormalizedIcon, pipeline::NormalizedGlyph};

/// First code point handed out, at the start of the BMP private use area.
pub const PRIVATE_USE_BASE: u32 = 0xe800;

/// Last code point of the BMP private use area.
const PRIVATE_USE_END: u32 = 0xf8ff;

/// Hands out consecutive code points.
///
/// One allocator serves one extraction run; a fresh run starts again at the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointAllocator {
    next: u32,
}

impl Default for CodePointAllocator {
    fn default() -> Self {
        CodePointAllocator::new(PRIVATE_USE_BASE)
    }
}

impl CodePointAllocator {
    pub fn new(base: u32) -> CodePointAllocator {
        CodePointAllocator { next: base }
    }

    /// The code point the next call to [`allocate`](Self::allocate) returns.
    pub fn peek(&self) -> u32 {
        self.next
    }

    pub fn allocate(&mut self) -> u32 {
        let code_point = self.next;
        if code_point == PRIVATE_USE_END + 1 {
            warn!("Allocating past the private use area, U+{code_point:04X} and up are not private use");
        }
        self.next += 1;
        code_point
    }

    /// Give each glyph, in order, the next code point.
    pub fn assign(&mut self, glyphs: Vec<NormalizedGlyph>) -> Vec<NormalizedIcon> {
        glyphs
            .into_iter()
            .map(|glyph| NormalizedIcon {
                name: glyph.name,
                code_point: self.allocate(),
                path: glyph.path,
                width: glyph.width,
            })
            .collect()
    }
}
