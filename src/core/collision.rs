//! Axis-separated collision against the collision layer.
//!
//! Not a general solver: the hero box is tested against the 3x3 tiles around
//! it, one axis at a time, and a blocked axis simply loses its step.
use glam::Vec2;

use crate::core::grid::CollisionGrid;
use crate::core::rect::PixelRect;

/// Size of the hero's collision box, anchored at its midbottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hitbox {
    pub w: i32,
    pub h: i32,
}

impl Hitbox {
    pub const fn new(w: i32, h: i32) -> Self { Self { w, h } }

    #[inline]
    pub fn rect_at(&self, pos: Vec2) -> PixelRect {
        PixelRect::from_midbottom(pos.x, pos.y, self.w, self.h)
    }

    /// The 3x3 lookup only sees every overlap while the box fits in a tile.
    pub fn fits_tile(&self, tile_w: i32, tile_h: i32) -> bool {
        self.w <= tile_w && self.h <= tile_h
    }
}

/// Floors negative values and ceils positive ones, so any nonzero fraction
/// becomes at least one whole pixel.
#[inline]
pub fn special_round(value: f32) -> i32 {
    if value < 0.0 { value.floor() as i32 } else { value.ceil() as i32 }
}

/// Returns the part of `step` the hero at `pos` may take this frame.
///
/// Each axis is tested alone with its step rounded away from zero; an axis
/// whose move would overlap a solid neighbour is zeroed, the other keeps its
/// original fractional value. Moving diagonally into a wall therefore slides
/// along it.
pub fn check_collision(pos: Vec2, step: Vec2, hitbox: Hitbox, grid: &CollisionGrid) -> Vec2 {
    let hero = hitbox.rect_at(pos);
    let (tx, ty) = grid.tile_at(pos);
    let tiles = grid.neighbourhood(tx, ty);

    let mut resolved = step;

    let sx = special_round(step.x);
    let moved_x = hero.translate(sx, 0);
    if tiles.iter().any(|t| moved_x.overlaps(t)) {
        resolved.x = 0.0;
    }

    let sy = special_round(step.y);
    let moved_y = hero.translate(0, sy);
    if tiles.iter().any(|t| moved_y.overlaps(t)) {
        resolved.y = 0.0;
    }

    resolved
}

/// Whether the single world point lies on an empty cell.
pub fn is_walkable(pos: Vec2, grid: &CollisionGrid) -> bool {
    let (tx, ty) = grid.tile_at(pos);
    !grid.is_solid(tx, ty)
}
