//! Viewport following the hero.
use std::ops::Range;

use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub center: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(center: Vec2, viewport: Vec2) -> Self {
        Self { center, viewport }
    }

    #[inline] pub fn set_center(&mut self, c: Vec2) { self.center = c; }

    #[inline]
    pub fn top_left(&self) -> Vec2 { self.center - self.viewport * 0.5 }

    /// World pixel to screen pixel, floored so tiles do not shimmer.
    #[inline]
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 { (p - self.top_left()).floor() }

    /// Column and row ranges of the tiles that intersect the viewport,
    /// clamped to a `cols`x`rows` map.
    pub fn visible_tiles(&self, tile_w: i32, tile_h: i32, cols: i32, rows: i32) -> (Range<i32>, Range<i32>) {
        let tl = self.top_left();
        let br = tl + self.viewport;
        let span = |lo: f32, hi: f32, size: i32, n: i32| {
            let a = ((lo / size as f32).floor() as i32).clamp(0, n);
            let b = ((hi / size as f32).ceil() as i32).clamp(0, n);
            a..b.max(a)
        };
        (span(tl.x, br.x, tile_w, cols), span(tl.y, br.y, tile_h, rows))
    }

    /// Like [`Camera::visible_tiles`], with `extra_rows` more rows below the
    /// viewport for tiles that hang upward out of cells lower on the map.
    pub fn visible_tiles_with_overhang(
        &self,
        tile_w: i32,
        tile_h: i32,
        cols: i32,
        rows: i32,
        extra_rows: i32,
    ) -> (Range<i32>, Range<i32>) {
        let (xs, ys) = self.visible_tiles(tile_w, tile_h, cols, rows);
        let end = (ys.end + extra_rows.max(0)).min(rows).max(ys.start);
        (xs, ys.start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_projection() {
        let cam = Camera::new(Vec2::new(500.0, 400.0), Vec2::new(200.0, 100.0));
        assert_eq!(cam.top_left(), Vec2::new(400.0, 350.0));
        assert_eq!(cam.world_to_screen(Vec2::new(500.0, 400.0)), Vec2::new(100.0, 50.0));
        assert_eq!(cam.world_to_screen(Vec2::new(400.5, 350.9)), Vec2::ZERO);
    }

    #[test]
    fn visible_range_is_clamped() {
        let cam = Camera::new(Vec2::new(40.0, 40.0), Vec2::new(128.0, 128.0));
        let (xs, ys) = cam.visible_tiles(32, 32, 10, 2);
        assert_eq!(xs, 0..4);
        assert_eq!(ys, 0..2);

        let far = Camera::new(Vec2::new(-1000.0, 50.0), Vec2::new(64.0, 64.0));
        let (xs, _) = far.visible_tiles(32, 32, 10, 10);
        assert!(xs.is_empty());
    }

    #[test]
    fn overhang_extends_rows_below() {
        let cam = Camera::new(Vec2::new(100.0, 100.0), Vec2::new(50.0, 50.0));
        let (xs, ys) = cam.visible_tiles_with_overhang(32, 32, 10, 10, 2);
        assert_eq!(xs, 2..4);
        assert_eq!(ys, 2..6);
        // clamped to the map
        let (_, ys) = cam.visible_tiles_with_overhang(32, 32, 10, 5, 3);
        assert_eq!(ys, 2..5);
        // no overhang, same as the plain range
        assert_eq!(cam.visible_tiles_with_overhang(32, 32, 10, 10, 0), cam.visible_tiles(32, 32, 10, 10));
    }

    #[test]
    fn partial_tiles_included() {
        let cam = Camera::new(Vec2::new(100.0, 100.0), Vec2::new(50.0, 50.0));
        // viewport [75, 125): touches columns 2 and 3
        let (xs, ys) = cam.visible_tiles(32, 32, 10, 10);
        assert_eq!(xs, 2..4);
        assert_eq!(ys, 2..4);
    }
}
