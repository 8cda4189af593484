//! Slope-dependent stroke width correction.
//!
//! A band built from `width` parallel one-pixel offsets is measured along
//! the minor axis, so its perpendicular thickness shrinks as the slope
//! approaches the diagonal (by a factor of `cos θ`). The table below undoes
//! that: widths are scaled by `1 / cos θ` in 1/64 fixed-point steps before
//! the cross-section pattern is generated.

/// Fixed-point base of the correction factors (factor 64 == 1.0).
pub const WIDTH_CORR_BASE: i32 = 64;

/// Shift dividing a width multiplied by a correction factor.
pub const WIDTH_CORR_SHIFT: i32 = 6;

/// `64 / cos(atan(i / 64))` for slope ratios 0..=64, i.e. 0° to 45° off the
/// major axis. Monotonically non-decreasing.
static WIDTH_CORR_TABLE: [u8; 65] = [
    64, 64, 64, 64, 64, 64, 64, 64, 64, 65, 65, 65, 65, 65, 66, 66, 66, 66, 66,
    67, 67, 67, 68, 68, 68, 69, 69, 69, 70, 70, 71, 71, 72, 72, 72, 73, 73, 74,
    74, 75, 75, 76, 77, 77, 78, 78, 79, 79, 80, 81, 81, 82, 82, 83, 84, 84, 85,
    86, 86, 87, 88, 88, 89, 90, 91,
];

/// Scale `width` by the correction factor for a line with the given
/// absolute deltas. `hor` tells which axis is major. Identity for
/// axis-aligned input, `width * 91 / 64` for a perfect diagonal.
pub fn corrected_width(width: i32, dx: i32, dy: i32, hor: bool) -> i32 {
    let ratio = if hor {
        (dy * WIDTH_CORR_BASE) / dx
    } else {
        (dx * WIDTH_CORR_BASE) / dy
    };
    (width * WIDTH_CORR_TABLE[ratio as usize] as i32) >> WIDTH_CORR_SHIFT
}

// ============================================================================
// Tests
// ============================================================================
