//! Integer pixel rectangles used for collision tests.
use glam::Vec2;

/// Axis-aligned rectangle in whole pixels. Overlap is strict: rectangles that
/// only share an edge do not collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`x`h` whose bottom edge midpoint sits at `(mx, my)`.
    /// Fractional anchors are floored onto the pixel grid.
    pub fn from_midbottom(mx: f32, my: f32, w: i32, h: i32) -> Self {
        let mx = mx.floor() as i32;
        let my = my.floor() as i32;
        Self::new(mx - w / 2, my - h, w, h)
    }

    #[inline] pub fn right(&self) -> i32 { self.x + self.w }
    #[inline] pub fn bottom(&self) -> i32 { self.y + self.h }

    #[inline]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    #[inline]
    pub fn overlaps(&self, other: &PixelRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x as f32 + self.w as f32 * 0.5, self.y as f32 + self.h as f32 * 0.5)
    }
}
