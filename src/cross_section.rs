//! Perpendicular cross-section pattern for thick strokes.

use crate::basics::PointI;
use crate::bresenham::LineStepper;

// ============================================================================
// CrossSection
// ============================================================================

/// The ordered set of offsets that thickens an ideal one-pixel line into a
/// band of the corrected stroke width.
///
/// Offsets come from walking a nested Bresenham line from the origin toward
/// the stroke's normal vector, one per unit of width, and are then
/// re-centered by half of the last offset so the band straddles the ideal
/// line. An odd width therefore balances exactly; an even width leans half
/// a pixel to the normal's side.
///
/// A width of zero degenerates to the single origin offset (a hairline:
/// callers fill no planks for it, but edge and cap ramps still anchor on
/// the entry). The buffer is sized to the width at construction, so there
/// is no ceiling on supported stroke widths.
#[derive(Debug)]
pub struct CrossSection {
    offsets: Vec<PointI>,
}

impl CrossSection {
    pub fn new(width: i32, normal: PointI) -> Self {
        let offsets = if width > 0 {
            let mut offsets = Vec::with_capacity(width as usize);
            let mut walker = LineStepper::new(PointI::new(0, 0), normal);
            for _ in 0..width {
                offsets.push(walker.pos());
                walker.advance();
            }
            let center = offsets[width as usize - 1];
            for p in offsets.iter_mut() {
                p.x -= center.x / 2;
                p.y -= center.y / 2;
            }
            offsets
        } else {
            vec![PointI::new(0, 0)]
        };
        Self { offsets }
    }

    /// Number of offsets; at least 1.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn offsets(&self) -> &[PointI] {
        &self.offsets
    }

    /// Offset of the first long edge of the band.
    #[inline]
    pub fn first(&self) -> PointI {
        self.offsets[0]
    }

    /// Offset of the opposite long edge.
    #[inline]
    pub fn last(&self) -> PointI {
        self.offsets[self.offsets.len() - 1]
    }
}

// ============================================================================
// Tests
// ============================================================================
