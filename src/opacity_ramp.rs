//! Opacity ramps for edge anti-aliasing.

use crate::basics::CoverType;

// ============================================================================
// OpacityRamp trait
// ============================================================================

/// Opacity profile of an anti-aliasing ramp.
///
/// `opacity` returns the blend opacity of pixel `step` (0-based) within a
/// ramp of `length` pixels. Implementations must stay within `0..=max_opa`;
/// the line renderer inverts the profile (`max_opa - opacity`) for ramps
/// that fade in instead of out.
pub trait OpacityRamp {
    fn opacity(&self, length: i32, step: i32, max_opa: CoverType) -> CoverType;
}

// ============================================================================
// LinearRamp
// ============================================================================

/// Straight-line falloff, strongest at the stroke side.
///
/// `max_opa * (length - step) / (length + 1)` — neither endpoint of the
/// ramp reaches fully opaque or fully transparent, so the ramp meets both
/// the solid stroke and the background without a visible step.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearRamp;

impl OpacityRamp for LinearRamp {
    #[inline]
    fn opacity(&self, length: i32, step: i32, max_opa: CoverType) -> CoverType {
        ((length - step) as i64 * max_opa as i64 / (length + 1) as i64) as CoverType
    }
}

// ============================================================================
// Tests
// ============================================================================
