//! Stroke style for line drawing.

use crate::basics::{CoverType, COVER_FULL};
use crate::color::Rgba8;

/// Stroke parameters for a single draw call.
///
/// A `width` of zero disables drawing entirely. `opa` is the overall stroke
/// opacity on the crate-wide 0..=255 scale and combines with the alpha of
/// `color` at blend time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle<C = Rgba8> {
    pub width: i32,
    pub color: C,
    pub opa: CoverType,
}

impl<C> LineStyle<C> {
    pub fn new(width: i32, color: C, opa: CoverType) -> Self {
        Self { width, color, opa }
    }
}

/// One-pixel opaque black line.
impl Default for LineStyle<Rgba8> {
    fn default() -> Self {
        Self {
            width: 1,
            color: Rgba8::new_opaque(0, 0, 0),
            opa: COVER_FULL,
        }
    }
}
