//! # linerast
//!
//! Integer-only rasterization of thick straight lines with edge
//! anti-aliasing.
//!
//! Given two integer endpoints, a stroke style (width, color, opacity) and
//! a clip mask, the line renderer emits the exact set of clipped rectangle
//! fills and blended pixels that draw the segment:
//!
//! - perfectly horizontal and vertical segments collapse to a single
//!   rectangle fill;
//! - everything else walks the segment with a Bresenham stepper one
//!   scanline at a time, sweeping a perpendicular cross-section pattern of
//!   the slope-corrected stroke width across it;
//! - inside corners of the swept band are closed with single pixels, and
//!   optional opacity ramps soften the two long edges and both end caps.
//!
//! No floating point is used anywhere in the draw path, and a draw call
//! holds no state beyond its own stack: nothing is cached between calls.
//!
//! ## Architecture
//!
//! 1. **Rendering buffer** — row access over a caller-owned byte buffer
//! 2. **Pixel format** — blends colors into the buffer rows
//! 3. **Base renderer** — bounds every operation to a clip rectangle
//! 4. **Line renderer** — classification, stepping, width correction,
//!    cross-section sweep, edge anti-aliasing

// Foundation types
pub mod basics;
pub mod color;

// Raster target
pub mod pixfmt_rgba;
pub mod renderer_base;
pub mod rendering_buffer;

// Line engine
pub mod bresenham;
pub mod cross_section;
pub mod opacity_ramp;
pub mod renderer_line;
pub mod style;
pub mod width_corr;
