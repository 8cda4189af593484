//! Base renderer with clipping.
//!
//! Wraps a pixel format with a clip rectangle so every rendering operation
//! is bounded within the visible area before it reaches the pixel bytes.

use crate::basics::{CoverType, RectI};
use crate::pixfmt_rgba::PixelFormat;

// ============================================================================
// RendererBase — clip-and-delegate renderer
// ============================================================================

/// Clips all operations to a rectangle, then delegates to the pixel format.
pub struct RendererBase<PF: PixelFormat> {
    ren: PF,
    clip_box: RectI,
}

impl<PF: PixelFormat> RendererBase<PF> {
    /// Wrap the given pixel format. The clip box starts at the full buffer
    /// extent.
    pub fn new(ren: PF) -> Self {
        let w = ren.width() as i32;
        let h = ren.height() as i32;
        Self {
            ren,
            clip_box: RectI::new(0, 0, w - 1, h - 1),
        }
    }

    pub fn width(&self) -> u32 {
        self.ren.width()
    }

    pub fn height(&self) -> u32 {
        self.ren.height()
    }

    /// Set the clip rectangle (intersected with the buffer bounds).
    /// Returns `false`, leaving an empty clip box, if nothing remains.
    pub fn clip_box_i(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        let mut cb = RectI::new(x1, y1, x2, y2);
        cb.normalize();
        if cb.clip(&RectI::new(
            0,
            0,
            self.ren.width() as i32 - 1,
            self.ren.height() as i32 - 1,
        )) {
            self.clip_box = cb;
            true
        } else {
            self.clip_box = RectI::new(1, 1, 0, 0);
            false
        }
    }

    pub fn clip_box(&self) -> &RectI {
        &self.clip_box
    }

    pub fn xmin(&self) -> i32 {
        self.clip_box.x1
    }

    pub fn ymin(&self) -> i32 {
        self.clip_box.y1
    }

    pub fn xmax(&self) -> i32 {
        self.clip_box.x2
    }

    pub fn ymax(&self) -> i32 {
        self.clip_box.y2
    }

    #[inline]
    pub fn inbox(&self, x: i32, y: i32) -> bool {
        x >= self.clip_box.x1
            && y >= self.clip_box.y1
            && x <= self.clip_box.x2
            && y <= self.clip_box.y2
    }

    pub fn ren(&self) -> &PF {
        &self.ren
    }

    pub fn ren_mut(&mut self) -> &mut PF {
        &mut self.ren
    }

    // ========================================================================
    // Rendering operations (clip then delegate)
    // ========================================================================

    /// Clear the entire buffer to a solid color, ignoring the clip box.
    pub fn clear(&mut self, c: &PF::ColorType) {
        let w = self.ren.width();
        if w > 0 {
            for y in 0..self.ren.height() as i32 {
                self.ren.copy_hline(0, y, w, c);
            }
        }
    }

    /// Blend a single pixel (clipped).
    pub fn blend_pixel(&mut self, x: i32, y: i32, c: &PF::ColorType, cover: CoverType) {
        if self.inbox(x, y) {
            self.ren.blend_pixel(x, y, c, cover);
        }
    }

    /// Blend a horizontal line (clipped). x1, x2 are inclusive endpoints.
    pub fn blend_hline(
        &mut self,
        mut x1: i32,
        y: i32,
        mut x2: i32,
        c: &PF::ColorType,
        cover: CoverType,
    ) {
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }
        if y > self.ymax() || y < self.ymin() || x1 > self.xmax() || x2 < self.xmin() {
            return;
        }
        x1 = x1.max(self.xmin());
        x2 = x2.min(self.xmax());
        self.ren.blend_hline(x1, y, (x2 - x1 + 1) as u32, c, cover);
    }

    /// Blend a solid rectangle (clipped). All coordinates inclusive.
    pub fn blend_bar(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        c: &PF::ColorType,
        cover: CoverType,
    ) {
        let mut rc = RectI::new(x1, y1, x2, y2);
        rc.normalize();
        if rc.clip(&self.clip_box) {
            for y in rc.y1..=rc.y2 {
                self.ren
                    .blend_hline(rc.x1, y, (rc.x2 - rc.x1 + 1) as u32, c, cover);
            }
        }
    }

    /// Get the pixel at (x, y), or default if outside the clip box.
    pub fn pixel(&self, x: i32, y: i32) -> PF::ColorType
    where
        PF::ColorType: Default,
    {
        if self.inbox(x, y) {
            self.ren.pixel(x, y)
        } else {
            PF::ColorType::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
