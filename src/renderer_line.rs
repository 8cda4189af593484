//! Thick line renderer with optional edge anti-aliasing.
//!
//! Draws a straight segment of arbitrary slope and integer stroke width
//! using clipped rectangle fills and single-pixel writes only. Perfectly
//! horizontal or vertical segments collapse to one rectangle. Everything
//! else walks the segment one scanline at a time and sweeps a perpendicular
//! cross-section pattern across it: one "plank" rectangle per pattern
//! offset, one extra pixel wherever the pattern bends (a rectangular tiling
//! would leave a gap at every inside corner), and, when anti-aliasing is
//! enabled, opacity ramps along the two long edges, both end caps, and the
//! staircase of the cap cross-section.

use log::trace;

use crate::basics::{intersect_rectangles, CoverType, PointI, RectI};
use crate::bresenham::LineStepper;
use crate::cross_section::CrossSection;
use crate::opacity_ramp::{LinearRamp, OpacityRamp};
use crate::pixfmt_rgba::PixelFormat;
use crate::renderer_base::RendererBase;
use crate::style::LineStyle;
use crate::width_corr::corrected_width;

// ============================================================================
// LineRenderer
// ============================================================================

/// Line renderer over a clipped base renderer.
///
/// Holds the opacity-ramp profile used for anti-aliasing and a runtime
/// switch disabling anti-aliasing entirely (hard-edged planks only).
pub struct LineRenderer<'a, PF: PixelFormat, R: OpacityRamp = LinearRamp> {
    ren: &'a mut RendererBase<PF>,
    ramp: R,
    antialias: bool,
}

impl<'a, PF: PixelFormat> LineRenderer<'a, PF, LinearRamp> {
    pub fn new(ren: &'a mut RendererBase<PF>) -> Self {
        Self {
            ren,
            ramp: LinearRamp,
            antialias: true,
        }
    }
}

impl<'a, PF: PixelFormat, R: OpacityRamp> LineRenderer<'a, PF, R> {
    /// Like [`new`](LineRenderer::new) with a custom ramp profile.
    pub fn with_ramp(ren: &'a mut RendererBase<PF>, ramp: R) -> Self {
        Self {
            ren,
            ramp,
            antialias: true,
        }
    }

    pub fn set_antialias(&mut self, on: bool) {
        self.antialias = on;
    }

    pub fn antialias(&self) -> bool {
        self.antialias
    }

    pub fn ren(&self) -> &RendererBase<PF> {
        self.ren
    }

    pub fn ren_mut(&mut self) -> &mut RendererBase<PF> {
        self.ren
    }

    /// Draw a line from `p1` to `p2`, confined to `mask`.
    ///
    /// A zero (or negative) stroke width and coincident endpoints are
    /// no-ops. Endpoint order does not matter: the segment is normalized so
    /// its major axis increases before any drawing happens.
    pub fn draw_line(
        &mut self,
        p1: PointI,
        p2: PointI,
        mask: &RectI,
        style: &LineStyle<PF::ColorType>,
    ) {
        if style.width <= 0 {
            return;
        }
        if p1 == p2 {
            return;
        }

        let (p1, p2) = if (p1.x - p2.x).abs() > (p1.y - p2.y).abs() {
            // Rather horizontal: order by x
            if p1.x < p2.x {
                (p1, p2)
            } else {
                (p2, p1)
            }
        } else {
            // Rather vertical: order by y
            if p1.y < p2.y {
                (p1, p2)
            } else {
                (p2, p1)
            }
        };

        let line = LineStepper::new(p1, p2);

        if p1.y == p2.y {
            self.draw_hor(&line, mask, style);
        } else if p1.x == p2.x {
            self.draw_ver(&line, mask, style);
        } else {
            self.draw_skew(line, mask, style);
        }
    }

    // ========================================================================
    // Axis-aligned fast paths
    // ========================================================================

    fn draw_hor(&mut self, line: &LineStepper, mask: &RectI, style: &LineStyle<PF::ColorType>) {
        let width = style.width - 1;
        let width_half = width >> 1;
        let width_1 = width & 0x1;

        let area = RectI::new(
            line.p1().x,
            line.p1().y - width_half - width_1,
            line.p2().x,
            line.p2().y + width_half,
        );
        self.fill_rect(&area, mask, &style.color, style.opa);
    }

    fn draw_ver(&mut self, line: &LineStepper, mask: &RectI, style: &LineStyle<PF::ColorType>) {
        let width = style.width - 1;
        let width_half = width >> 1;
        let width_1 = width & 0x1;

        let area = RectI::new(
            line.p1().x - width_half,
            line.p1().y,
            line.p2().x + width_half + width_1,
            line.p2().y,
        );
        self.fill_rect(&area, mask, &style.color, style.opa);
    }

    // ========================================================================
    // Skew line
    // ========================================================================

    fn draw_skew(&mut self, line: LineStepper, mask: &RectI, style: &LineStyle<PF::ColorType>) {
        let mut width = style.width;
        if self.antialias {
            // The outermost pixel of the stroke on each side becomes a ramp
            width -= 1;
        }

        if width > 0 {
            width = corrected_width(width, line.dx(), line.dy(), line.is_hor());
        }
        trace!("skew line corrected width: {width}");

        let p1 = line.p1();
        let p2 = line.p2();
        let vect_main = PointI::new(p2.x - p1.x, p2.y - p1.y);

        // Normal vector, rotated so it points to a fixed side of the stroke
        let vect_norm = if line.is_hor() {
            if p1.y < p2.y {
                PointI::new(-vect_main.y, vect_main.x)
            } else {
                PointI::new(vect_main.y, -vect_main.x)
            }
        } else if p1.x < p2.x {
            PointI::new(vect_main.y, -vect_main.x)
        } else {
            PointI::new(-vect_main.y, vect_main.x)
        };

        let pattern = CrossSection::new(width, vect_norm);

        if self.antialias {
            self.draw_cap_ramps(&line, &pattern, width, mask, style);
        }

        // Ramp rows sit one pixel outward of the long edges; a hairline
        // keeps its fading edge on the centerline itself.
        let aa_shift1 = if line.is_hor() { line.sy() } else { line.sx() };
        let aa_shift2 = if width == 0 { 0 } else { aa_shift1 };

        if line.is_hor() {
            self.draw_skew_hor(line, &pattern, width, aa_shift1, aa_shift2, mask, style);
        } else {
            self.draw_skew_ver(line, &pattern, width, aa_shift1, aa_shift2, mask, style);
        }
    }

    /// One scanline of the major axis at a time: fill a plank per pattern
    /// offset, close inside corners, ramp both edges, then the final band
    /// and its end caps.
    #[allow(clippy::too_many_arguments)]
    fn draw_skew_hor(
        &mut self,
        mut line: LineStepper,
        pattern: &CrossSection,
        width: i32,
        aa_shift1: i32,
        aa_shift2: i32,
        mask: &RectI,
        style: &LineStyle<PF::ColorType>,
    ) {
        let pat = pattern.offsets();
        let last = pattern.len() - 1;
        let mut prev_p = line.p1();
        let mut first_run = true;

        while line.advance_until_y_changes() {
            let act = line.pos();
            for i in 0..width as usize {
                let x1 = prev_p.x + pat[i].x;
                let y1 = prev_p.y + pat[i].y;
                let area = RectI::new(x1, y1, x1 + act.x - prev_p.x - 1, y1);
                self.fill_rect(&area, mask, &style.color, style.opa);

                // Stepping in y leaves one pixel empty at every inside
                // corner; no gap exists yet on the first scanline.
                if i != 0 && pat[i].x != pat[i - 1].x && !first_run {
                    self.set_px(x1, y1 - line.sy(), mask, &style.color, style.opa);
                }
            }

            if self.antialias {
                self.hor_ramp(
                    prev_p.x + pat[0].x,
                    prev_p.y + pat[0].y - aa_shift1,
                    -(act.x - prev_p.x),
                    mask,
                    &style.color,
                    style.opa,
                );
                self.hor_ramp(
                    prev_p.x + pat[last].x,
                    prev_p.y + pat[last].y + aa_shift2,
                    act.x - prev_p.x,
                    mask,
                    &style.color,
                    style.opa,
                );
            }

            first_run = false;
            prev_p = act;
        }

        // Last band, spanning through the end point
        let act = line.pos();
        for i in 0..width as usize {
            let x1 = prev_p.x + pat[i].x;
            let y1 = prev_p.y + pat[i].y;
            let area = RectI::new(x1, y1, x1 + act.x - prev_p.x, y1);
            self.fill_rect(&area, mask, &style.color, style.opa);

            if i != 0 && pat[i].x != pat[i - 1].x && !first_run {
                self.set_px(x1, y1 - line.sy(), mask, &style.color, style.opa);
            }
        }

        if self.antialias {
            // End caps are not continued by a next band: one pixel longer
            self.hor_ramp(
                prev_p.x + pat[0].x,
                prev_p.y + pat[0].y - aa_shift1,
                -(act.x - prev_p.x + 1),
                mask,
                &style.color,
                style.opa,
            );
            self.hor_ramp(
                prev_p.x + pat[last].x,
                prev_p.y + pat[last].y + aa_shift2,
                act.x - prev_p.x + 1,
                mask,
                &style.color,
                style.opa,
            );
        }
    }

    /// Mirror of [`draw_skew_hor`](Self::draw_skew_hor) for rather-vertical
    /// segments: columns instead of rows.
    #[allow(clippy::too_many_arguments)]
    fn draw_skew_ver(
        &mut self,
        mut line: LineStepper,
        pattern: &CrossSection,
        width: i32,
        aa_shift1: i32,
        aa_shift2: i32,
        mask: &RectI,
        style: &LineStyle<PF::ColorType>,
    ) {
        let pat = pattern.offsets();
        let last = pattern.len() - 1;
        let mut prev_p = line.p1();
        let mut first_run = true;

        while line.advance_until_x_changes() {
            let act = line.pos();
            for i in 0..width as usize {
                let x1 = prev_p.x + pat[i].x;
                let y1 = prev_p.y + pat[i].y;
                let area = RectI::new(x1, y1, x1, y1 + act.y - prev_p.y - 1);
                self.fill_rect(&area, mask, &style.color, style.opa);

                if i != 0 && pat[i].y != pat[i - 1].y && !first_run {
                    self.set_px(x1 - line.sx(), y1, mask, &style.color, style.opa);
                }
            }

            if self.antialias {
                self.ver_ramp(
                    prev_p.x + pat[0].x - aa_shift1,
                    prev_p.y + pat[0].y,
                    -(act.y - prev_p.y),
                    mask,
                    &style.color,
                    style.opa,
                );
                self.ver_ramp(
                    prev_p.x + pat[last].x + aa_shift2,
                    prev_p.y + pat[last].y,
                    act.y - prev_p.y,
                    mask,
                    &style.color,
                    style.opa,
                );
            }

            first_run = false;
            prev_p = act;
        }

        let act = line.pos();
        for i in 0..width as usize {
            let x1 = prev_p.x + pat[i].x;
            let y1 = prev_p.y + pat[i].y;
            let area = RectI::new(x1, y1, x1, y1 + act.y - prev_p.y);
            self.fill_rect(&area, mask, &style.color, style.opa);

            if i != 0 && pat[i].y != pat[i - 1].y && !first_run {
                self.set_px(x1 - line.sx(), y1, mask, &style.color, style.opa);
            }
        }

        if self.antialias {
            self.ver_ramp(
                prev_p.x + pat[0].x - aa_shift1,
                prev_p.y + pat[0].y,
                -(act.y - prev_p.y + 1),
                mask,
                &style.color,
                style.opa,
            );
            self.ver_ramp(
                prev_p.x + pat[last].x + aa_shift2,
                prev_p.y + pat[last].y,
                act.y - prev_p.y + 1,
                mask,
                &style.color,
                style.opa,
            );
        }
    }

    /// Smooth the staircase of the cross-section at both end caps: one ramp
    /// per straight run of the pattern, plus the trailing run extended by
    /// one pixel for the cap itself.
    fn draw_cap_ramps(
        &mut self,
        line: &LineStepper,
        pattern: &CrossSection,
        width: i32,
        mask: &RectI,
        style: &LineStyle<PF::ColorType>,
    ) {
        let pat = pattern.offsets();
        let p1 = line.p1();
        let p2 = line.p2();
        let mut last_corner = 0usize;

        if line.is_hor() {
            for i in 1..width as usize {
                if pat[i - 1].x != pat[i].x {
                    let seg_w = pat[i].y - pat[last_corner].y;
                    if line.sy() < 0 {
                        self.ver_ramp(
                            p1.x + pat[last_corner].x - 1,
                            p1.y + pat[last_corner].y + seg_w + 1,
                            seg_w,
                            mask,
                            &style.color,
                            style.opa,
                        );
                        self.ver_ramp(
                            p2.x + pat[last_corner].x + 1,
                            p2.y + pat[last_corner].y + seg_w + 1,
                            -seg_w,
                            mask,
                            &style.color,
                            style.opa,
                        );
                    } else {
                        self.ver_ramp(
                            p1.x + pat[last_corner].x - 1,
                            p1.y + pat[last_corner].y,
                            seg_w,
                            mask,
                            &style.color,
                            style.opa,
                        );
                        self.ver_ramp(
                            p2.x + pat[last_corner].x + 1,
                            p2.y + pat[last_corner].y,
                            -seg_w,
                            mask,
                            &style.color,
                            style.opa,
                        );
                    }
                    last_corner = i;
                }
            }

            let seg_w = pat[pattern.len() - 1].y - pat[last_corner].y;
            if line.sy() < 0 {
                self.ver_ramp(
                    p1.x + pat[last_corner].x - 1,
                    p1.y + pat[last_corner].y + seg_w,
                    seg_w + line.sy(),
                    mask,
                    &style.color,
                    style.opa,
                );
                self.ver_ramp(
                    p2.x + pat[last_corner].x + 1,
                    p2.y + pat[last_corner].y + seg_w,
                    -(seg_w + line.sy()),
                    mask,
                    &style.color,
                    style.opa,
                );
            } else {
                self.ver_ramp(
                    p1.x + pat[last_corner].x - 1,
                    p1.y + pat[last_corner].y,
                    seg_w + line.sy(),
                    mask,
                    &style.color,
                    style.opa,
                );
                self.ver_ramp(
                    p2.x + pat[last_corner].x + 1,
                    p2.y + pat[last_corner].y,
                    -(seg_w + line.sy()),
                    mask,
                    &style.color,
                    style.opa,
                );
            }
        } else {
            for i in 1..width as usize {
                if pat[i - 1].y != pat[i].y {
                    let seg_w = pat[i].x - pat[last_corner].x;
                    if line.sx() < 0 {
                        self.hor_ramp(
                            p1.x + pat[last_corner].x + seg_w + 1,
                            p1.y + pat[last_corner].y - 1,
                            seg_w,
                            mask,
                            &style.color,
                            style.opa,
                        );
                        self.hor_ramp(
                            p2.x + pat[last_corner].x + seg_w + 1,
                            p2.y + pat[last_corner].y + 1,
                            -seg_w,
                            mask,
                            &style.color,
                            style.opa,
                        );
                    } else {
                        self.hor_ramp(
                            p1.x + pat[last_corner].x,
                            p1.y + pat[last_corner].y - 1,
                            seg_w,
                            mask,
                            &style.color,
                            style.opa,
                        );
                        self.hor_ramp(
                            p2.x + pat[last_corner].x,
                            p2.y + pat[last_corner].y + 1,
                            -seg_w,
                            mask,
                            &style.color,
                            style.opa,
                        );
                    }
                    last_corner = i;
                }
            }

            let seg_w = pat[pattern.len() - 1].x - pat[last_corner].x;
            if line.sx() < 0 {
                self.hor_ramp(
                    p1.x + pat[last_corner].x + seg_w,
                    p1.y + pat[last_corner].y - 1,
                    seg_w + line.sx(),
                    mask,
                    &style.color,
                    style.opa,
                );
                self.hor_ramp(
                    p2.x + pat[last_corner].x + seg_w,
                    p2.y + pat[last_corner].y + 1,
                    -(seg_w + line.sx()),
                    mask,
                    &style.color,
                    style.opa,
                );
            } else {
                self.hor_ramp(
                    p1.x + pat[last_corner].x,
                    p1.y + pat[last_corner].y - 1,
                    seg_w + line.sx(),
                    mask,
                    &style.color,
                    style.opa,
                );
                self.hor_ramp(
                    p2.x + pat[last_corner].x,
                    p2.y + pat[last_corner].y + 1,
                    -(seg_w + line.sx()),
                    mask,
                    &style.color,
                    style.opa,
                );
            }
        }
    }

    // ========================================================================
    // Edge anti-aliasing ramps
    // ========================================================================

    /// Horizontal ramp of `|length|` pixels starting at (x, y), opacity from
    /// the ramp profile. A negative length fades in instead of out.
    fn hor_ramp(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        mask: &RectI,
        c: &PF::ColorType,
        opa: CoverType,
    ) {
        let (len, inv) = if length < 0 { (-length, true) } else { (length, false) };
        for i in 0..len {
            let mut px_opa = self.ramp.opacity(len, i, opa);
            if inv {
                px_opa = opa.saturating_sub(px_opa);
            }
            self.set_px(x + i, y, mask, c, px_opa);
        }
    }

    /// Vertical variant of [`hor_ramp`](Self::hor_ramp).
    fn ver_ramp(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        mask: &RectI,
        c: &PF::ColorType,
        opa: CoverType,
    ) {
        let (len, inv) = if length < 0 { (-length, true) } else { (length, false) };
        for i in 0..len {
            let mut px_opa = self.ramp.opacity(len, i, opa);
            if inv {
                px_opa = opa.saturating_sub(px_opa);
            }
            self.set_px(x, y + i, mask, c, px_opa);
        }
    }

    // ========================================================================
    // Masked write primitives
    // ========================================================================

    fn fill_rect(&mut self, area: &RectI, mask: &RectI, c: &PF::ColorType, opa: CoverType) {
        let mut r = *area;
        r.normalize();
        let r = intersect_rectangles(&r, mask);
        if r.is_valid() {
            self.ren.blend_bar(r.x1, r.y1, r.x2, r.y2, c, opa);
        }
    }

    fn set_px(&mut self, x: i32, y: i32, mask: &RectI, c: &PF::ColorType, opa: CoverType) {
        if mask.hit_test(x, y) {
            self.ren.blend_pixel(x, y, c, opa);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;
    use crate::pixfmt_rgba::PixfmtRgba32;
    use crate::rendering_buffer::RenderingBuffer;

    const BPP: usize = 4;
    const W: u32 = 24;
    const H: u32 = 24;

    fn red(width: i32) -> LineStyle {
        LineStyle::new(width, Rgba8::new_opaque(255, 0, 0), 255)
    }

    fn full_mask() -> RectI {
        RectI::new(0, 0, W as i32 - 1, H as i32 - 1)
    }

    fn draw_into(
        buf: &mut [u8],
        aa: bool,
        p1: PointI,
        p2: PointI,
        mask: &RectI,
        style: &LineStyle,
    ) {
        let rbuf = RenderingBuffer::new(buf, W, H, (W * BPP as u32) as i32).unwrap();
        let pf = PixfmtRgba32::new(rbuf).unwrap();
        let mut rb = RendererBase::new(pf);
        let mut lr = LineRenderer::new(&mut rb);
        lr.set_antialias(aa);
        lr.draw_line(p1, p2, mask, style);
    }

    fn canvas() -> Vec<u8> {
        vec![0u8; (W * H) as usize * BPP]
    }

    fn alpha_at(buf: &[u8], x: i32, y: i32) -> u8 {
        buf[(y as usize * W as usize + x as usize) * BPP + 3]
    }

    fn red_at(buf: &[u8], x: i32, y: i32) -> u8 {
        buf[(y as usize * W as usize + x as usize) * BPP]
    }

    fn lit_pixels(buf: &[u8]) -> Vec<(i32, i32)> {
        let mut lit = Vec::new();
        for y in 0..H as i32 {
            for x in 0..W as i32 {
                if alpha_at(buf, x, y) != 0 {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_zero_width_is_noop() {
        let mut buf = canvas();
        draw_into(&mut buf, true, PointI::new(2, 2), PointI::new(12, 7), &full_mask(), &red(0));
        assert!(lit_pixels(&buf).is_empty());
    }

    #[test]
    fn test_negative_width_is_noop() {
        let mut buf = canvas();
        draw_into(&mut buf, true, PointI::new(2, 2), PointI::new(12, 7), &full_mask(), &red(-3));
        assert!(lit_pixels(&buf).is_empty());
    }

    #[test]
    fn test_coincident_endpoints_are_noop() {
        let mut buf = canvas();
        draw_into(&mut buf, true, PointI::new(5, 5), PointI::new(5, 5), &full_mask(), &red(4));
        assert!(lit_pixels(&buf).is_empty());
    }

    #[test]
    fn test_horizontal_band() {
        let mut buf = canvas();
        draw_into(&mut buf, true, PointI::new(2, 5), PointI::new(12, 5), &full_mask(), &red(3));
        let mut expected = Vec::new();
        for y in 4..=6 {
            for x in 2..=12 {
                expected.push((x, y));
            }
        }
        assert_eq!(lit_pixels(&buf), expected);
        assert_eq!(alpha_at(&buf, 2, 4), 255);
        assert_eq!(alpha_at(&buf, 12, 6), 255);
    }

    #[test]
    fn test_horizontal_even_width_leans_up() {
        let mut buf = canvas();
        draw_into(&mut buf, false, PointI::new(2, 5), PointI::new(12, 5), &full_mask(), &red(4));
        let lit = lit_pixels(&buf);
        let ys: Vec<i32> = lit.iter().map(|&(_, y)| y).collect();
        assert_eq!(ys.iter().min(), Some(&3));
        assert_eq!(ys.iter().max(), Some(&6));
        assert_eq!(lit.len(), 11 * 4);
    }

    #[test]
    fn test_vertical_hairline() {
        let mut buf = canvas();
        draw_into(&mut buf, true, PointI::new(5, 1), PointI::new(5, 11), &full_mask(), &red(1));
        let expected: Vec<(i32, i32)> = (1..=11).map(|y| (5, y)).collect();
        assert_eq!(lit_pixels(&buf), expected);
    }

    #[test]
    fn test_vertical_band() {
        let mut buf = canvas();
        draw_into(&mut buf, false, PointI::new(5, 2), PointI::new(5, 9), &full_mask(), &red(3));
        let mut expected = Vec::new();
        for y in 2..=9 {
            for x in 4..=6 {
                expected.push((x, y));
            }
        }
        assert_eq!(lit_pixels(&buf), expected);
    }

    #[test]
    fn test_endpoint_order_invariance() {
        for (p1, p2, w) in [
            (PointI::new(2, 5), PointI::new(12, 5), 3),
            (PointI::new(5, 1), PointI::new(5, 11), 2),
            (PointI::new(2, 3), PointI::new(17, 9), 4),
            (PointI::new(3, 2), PointI::new(9, 17), 4),
            (PointI::new(2, 2), PointI::new(12, 7), 1),
        ] {
            for aa in [false, true] {
                let mut fwd = canvas();
                let mut rev = canvas();
                draw_into(&mut fwd, aa, p1, p2, &full_mask(), &red(w));
                draw_into(&mut rev, aa, p2, p1, &full_mask(), &red(w));
                assert_eq!(fwd, rev, "p1={:?} p2={:?} w={} aa={}", p1, p2, w, aa);
            }
        }
    }

    #[test]
    fn test_skew_no_aa_covers_centerline() {
        let mut buf = canvas();
        draw_into(&mut buf, false, PointI::new(2, 2), PointI::new(12, 7), &full_mask(), &red(3));
        // Every pixel of the ideal Bresenham path is inside the band
        let mut line = LineStepper::new(PointI::new(2, 2), PointI::new(12, 7));
        loop {
            let p = line.pos();
            assert_eq!(alpha_at(&buf, p.x, p.y), 255, "at {:?}", p);
            if !line.advance() {
                break;
            }
        }
        // Hard edges only: every lit pixel is fully opaque
        for &(x, y) in lit_pixels(&buf).iter() {
            assert_eq!(alpha_at(&buf, x, y), 255);
        }
    }

    #[test]
    fn test_skew_diagonal_covers_centerline() {
        let mut buf = canvas();
        draw_into(&mut buf, false, PointI::new(2, 2), PointI::new(10, 10), &full_mask(), &red(2));
        for k in 2..=10 {
            assert_eq!(alpha_at(&buf, k, k), 255, "at ({k},{k})");
        }
    }

    #[test]
    fn test_skew_aa_adds_soft_edges() {
        let mut hard = canvas();
        let mut soft = canvas();
        draw_into(&mut hard, false, PointI::new(2, 3), PointI::new(17, 9), &full_mask(), &red(4));
        draw_into(&mut soft, true, PointI::new(2, 3), PointI::new(17, 9), &full_mask(), &red(4));

        let partial = |buf: &[u8]| {
            lit_pixels(buf)
                .iter()
                .filter(|&&(x, y)| {
                    let a = alpha_at(buf, x, y);
                    a > 0 && a < 255
                })
                .count()
        };
        assert_eq!(partial(&hard), 0);
        assert!(partial(&soft) > 0);
    }

    #[test]
    fn test_skew_hairline_aa_exact_ramps() {
        // dx=10, dy=5: one y step per two x steps. The anti-aliased
        // hairline is a fade-out ramp on the centerline and a fade-in ramp
        // one row above, per scanline segment.
        let mut buf = canvas();
        draw_into(&mut buf, true, PointI::new(2, 2), PointI::new(12, 7), &full_mask(), &red(1));

        for k in 0..5 {
            let (x, y) = (2 + 2 * k, 2 + k);
            assert_eq!(red_at(&buf, x, y), 170, "segment {k} centerline head");
            assert_eq!(red_at(&buf, x + 1, y), 85, "segment {k} centerline tail");
            assert_eq!(red_at(&buf, x, y - 1), 85, "segment {k} fade-in head");
            assert_eq!(red_at(&buf, x + 1, y - 1), 170, "segment {k} fade-in tail");
        }
        // Terminal band: single-pixel ramps
        assert_eq!(red_at(&buf, 12, 7), 127);
        assert_eq!(red_at(&buf, 12, 6), 128);
        // Cap ramps, one pixel outward of each endpoint
        assert_eq!(red_at(&buf, 1, 2), 127);
        assert_eq!(red_at(&buf, 13, 7), 128);
    }

    #[test]
    fn test_mask_confines_writes() {
        let mask = RectI::new(5, 3, 10, 8);
        let mut buf = canvas();
        draw_into(&mut buf, true, PointI::new(2, 2), PointI::new(17, 11), &mask, &red(5));
        let lit = lit_pixels(&buf);
        assert!(!lit.is_empty());
        for &(x, y) in lit.iter() {
            assert!(mask.hit_test(x, y), "({x},{y}) escaped the mask");
        }
    }

    #[test]
    fn test_writes_confined_to_mask_and_clip_box() {
        let mask = RectI::new(3, 3, 20, 20);
        let clip = RectI::new(6, 4, 11, 9);
        let mut buf = canvas();
        {
            let rbuf = RenderingBuffer::new(&mut buf, W, H, (W * BPP as u32) as i32).unwrap();
            let pf = PixfmtRgba32::new(rbuf).unwrap();
            let mut rb = RendererBase::new(pf);
            rb.clip_box_i(clip.x1, clip.y1, clip.x2, clip.y2);
            let mut lr = LineRenderer::new(&mut rb);
            lr.draw_line(PointI::new(2, 2), PointI::new(17, 11), &mask, &red(5));
        }
        let lit = lit_pixels(&buf);
        assert!(!lit.is_empty());
        for &(x, y) in lit.iter() {
            assert!(mask.hit_test(x, y) && clip.hit_test(x, y), "({x},{y})");
        }
    }

    #[test]
    fn test_disjoint_mask_is_noop() {
        let mask = RectI::new(20, 20, 23, 23);
        let mut buf = canvas();
        draw_into(&mut buf, true, PointI::new(2, 2), PointI::new(12, 7), &mask, &red(5));
        assert!(lit_pixels(&buf).is_empty());
    }

    #[test]
    fn test_steep_line_uses_vertical_sweep() {
        let mut buf = canvas();
        draw_into(&mut buf, false, PointI::new(3, 2), PointI::new(8, 18), &full_mask(), &red(3));
        let mut line = LineStepper::new(PointI::new(3, 2), PointI::new(8, 18));
        loop {
            let p = line.pos();
            assert_eq!(alpha_at(&buf, p.x, p.y), 255, "at {:?}", p);
            if !line.advance() {
                break;
            }
        }
    }

    #[test]
    fn test_custom_ramp_profile() {
        struct FullRamp;
        impl OpacityRamp for FullRamp {
            fn opacity(&self, _length: i32, _step: i32, max_opa: CoverType) -> CoverType {
                max_opa
            }
        }

        let mut buf = canvas();
        {
            let rbuf = RenderingBuffer::new(&mut buf, W, H, (W * BPP as u32) as i32).unwrap();
            let pf = PixfmtRgba32::new(rbuf).unwrap();
            let mut rb = RendererBase::new(pf);
            let mut lr = LineRenderer::with_ramp(&mut rb, FullRamp);
            lr.draw_line(PointI::new(2, 2), PointI::new(12, 7), &full_mask(), &red(1));
        }
        // Fade-out ramps saturate to full opacity, fade-in ramps to zero
        assert_eq!(alpha_at(&buf, 2, 2), 255);
        assert_eq!(alpha_at(&buf, 3, 2), 255);
        assert_eq!(alpha_at(&buf, 2, 1), 0);
    }

    #[test]
    fn test_translucent_stroke_blends_opacity() {
        let mut buf = canvas();
        let style = LineStyle::new(3, Rgba8::new_opaque(0, 0, 255), 128);
        draw_into(&mut buf, false, PointI::new(2, 5), PointI::new(12, 5), &full_mask(), &style);
        assert_eq!(buf[(5 * W as usize + 5) * BPP + 2], 128);
    }
}
