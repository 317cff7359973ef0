//! Keyboard intent to per-frame displacement.
use glam::Vec2;

/// Raw directional intent, each axis in {-1, 0, 1}. Screen axes: +x right, +y down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Direction {
    pub x: i8,
    pub y: i8,
}

impl Direction {
    pub const NONE: Direction = Direction { x: 0, y: 0 };

    pub fn new(x: i8, y: i8) -> Self {
        Self { x: x.signum(), y: y.signum() }
    }

    /// Opposing keys cancel out.
    pub fn from_keys(left: bool, right: bool, up: bool, down: bool) -> Self {
        Self {
            x: right as i8 - left as i8,
            y: down as i8 - up as i8,
        }
    }

    #[inline] pub fn is_none(&self) -> bool { self.x == 0 && self.y == 0 }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 { Vec2::new(self.x as f32, self.y as f32) }
}

/// Displacement of length `speed * dt` along `dir`, same speed diagonally as
/// along an axis. No input gives a zero vector.
pub fn displacement(dir: Direction, dt: f32, speed: f32) -> Vec2 {
    let v = dir.as_vec2();
    let len = v.length();
    let len = if len > 0.0 { len } else { 1.0 };
    v * (speed * dt / len)
}
