//! Incremental integer line stepping.
//!
//! [`LineStepper`] walks every pixel of a segment with the classic
//! error-term rule — additions, subtractions and comparisons only. The
//! scanline-granular variants advance a whole major-axis run at once and
//! are what the thick-line drawer iterates on.

use crate::basics::PointI;

// ============================================================================
// LineStepper
// ============================================================================

/// State machine stepping from one endpoint of a segment to the other.
///
/// Starting at `p1`, each `advance` moves one pixel toward `p2`; after
/// exactly `max(dx, dy)` successful steps the walk sits on `p2` and further
/// calls return `false`. A segment with `dx > dy` is classified as rather
/// horizontal, everything else as rather vertical.
#[derive(Debug, Clone)]
pub struct LineStepper {
    p1: PointI,
    p2: PointI,
    p_act: PointI,
    dx: i32,
    sx: i32,
    dy: i32,
    sy: i32,
    err: i32,
    hor: bool,
}

impl LineStepper {
    pub fn new(p1: PointI, p2: PointI) -> Self {
        let dx = (p2.x - p1.x).abs();
        let sx = if p2.x >= p1.x { 1 } else { -1 };
        let dy = (p2.y - p1.y).abs();
        let sy = if p2.y >= p1.y { 1 } else { -1 };
        Self {
            p1,
            p2,
            p_act: p1,
            dx,
            sx,
            dy,
            sy,
            err: (if dx > dy { dx } else { -dy }) / 2,
            hor: dx > dy,
        }
    }

    /// Step to the next pixel. Returns `false` once `p2` has been reached.
    /// Both coordinates may step at once on a perfectly diagonal segment.
    pub fn advance(&mut self) -> bool {
        if self.p_act == self.p2 {
            return false;
        }
        let e2 = self.err;
        if e2 > -self.dx {
            self.err -= self.dy;
            self.p_act.x += self.sx;
        }
        if e2 < self.dy {
            self.err += self.dx;
            self.p_act.y += self.sy;
        }
        true
    }

    /// Advance until the y coordinate changes. `false` on exhaustion.
    pub fn advance_until_y_changes(&mut self) -> bool {
        let last_y = self.p_act.y;
        loop {
            if !self.advance() {
                return false;
            }
            if self.p_act.y != last_y {
                return true;
            }
        }
    }

    /// Advance until the x coordinate changes. `false` on exhaustion.
    pub fn advance_until_x_changes(&mut self) -> bool {
        let last_x = self.p_act.x;
        loop {
            if !self.advance() {
                return false;
            }
            if self.p_act.x != last_x {
                return true;
            }
        }
    }

    #[inline]
    pub fn p1(&self) -> PointI {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> PointI {
        self.p2
    }

    /// Current position of the walk.
    #[inline]
    pub fn pos(&self) -> PointI {
        self.p_act
    }

    #[inline]
    pub fn dx(&self) -> i32 {
        self.dx
    }

    #[inline]
    pub fn dy(&self) -> i32 {
        self.dy
    }

    /// x step direction (+1 or -1).
    #[inline]
    pub fn sx(&self) -> i32 {
        self.sx
    }

    /// y step direction (+1 or -1).
    #[inline]
    pub fn sy(&self) -> i32 {
        self.sy
    }

    /// `true` when the segment changes more in x than in y.
    #[inline]
    pub fn is_hor(&self) -> bool {
        self.hor
    }
}

// ============================================================================
// Tests
// ============================================================================
