//! Collision layer as an occupancy grid.
use glam::Vec2;
use smallvec::SmallVec;

use crate::core::rect::PixelRect;

/// Solid/empty cells of the collision layer. Cells outside the grid count as
/// solid so the map border stops the hero.
#[derive(Clone, Debug)]
pub struct CollisionGrid {
    width: i32,
    height: i32,
    tile_w: i32,
    tile_h: i32,
    solid: Vec<bool>,
}

impl CollisionGrid {
    pub fn new(width: i32, height: i32, tile_w: i32, tile_h: i32) -> Self {
        let n = (width.max(0) * height.max(0)) as usize;
        Self { width, height, tile_w, tile_h, solid: vec![false; n] }
    }

    /// Builds a grid from row-major rows of ASCII, `#` marking a solid cell.
    /// Handy for small hand-written layouts.
    pub fn from_rows(rows: &[&str], tile_w: i32, tile_h: i32) -> Self {
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as i32;
        let mut grid = Self::new(width, height, tile_w, tile_h);
        for (j, row) in rows.iter().enumerate() {
            for (i, c) in row.chars().enumerate() {
                grid.set_solid(i as i32, j as i32, c == '#');
            }
        }
        grid
    }

    #[inline] pub fn width(&self) -> i32 { self.width }
    #[inline] pub fn height(&self) -> i32 { self.height }
    #[inline] pub fn tile_size(&self) -> (i32, i32) { (self.tile_w, self.tile_h) }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height { return None; }
        Some((y * self.width + x) as usize)
    }

    pub fn set_solid(&mut self, x: i32, y: i32, solid: bool) {
        if let Some(i) = self.index(x, y) {
            self.solid[i] = solid;
        }
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|i| self.solid[i]).unwrap_or(true)
    }

    /// Tile coordinates containing the world point.
    pub fn tile_at(&self, p: Vec2) -> (i32, i32) {
        (
            (p.x / self.tile_w as f32).floor() as i32,
            (p.y / self.tile_h as f32).floor() as i32,
        )
    }

    pub fn tile_rect(&self, x: i32, y: i32) -> PixelRect {
        PixelRect::new(x * self.tile_w, y * self.tile_h, self.tile_w, self.tile_h)
    }

    /// Rectangles of the solid cells in the 3x3 window centred on `(tx, ty)`.
    pub fn neighbourhood(&self, tx: i32, ty: i32) -> SmallVec<[PixelRect; 9]> {
        let mut out = SmallVec::new();
        for dy in -1..=1 {
            for dx in -1..=1 {
                let (x, y) = (tx + dx, ty + dy);
                if self.is_solid(x, y) {
                    out.push(self.tile_rect(x, y));
                }
            }
        }
        out
    }

    pub fn solid_count(&self) -> usize {
        self.solid.iter().filter(|s| **s).count()
    }
}
