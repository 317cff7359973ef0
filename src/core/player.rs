use glam::{IVec2, Vec2};

use crate::core::collision::Hitbox;
use crate::core::rect::PixelRect;

/// The hero. `pos` is the midbottom of both the sprite and the (smaller)
/// collision box.
pub struct Player {
    pub pos: Vec2,
    pub sprite_size: IVec2,
    pub hitbox: Hitbox,
    pub speed: f32,    // px/s
    pub moving: bool,
}

impl Player {
    pub fn new(pos: Vec2, sprite_size: IVec2, hitbox: Hitbox, speed: f32) -> Self {
        Self { pos, sprite_size, hitbox, speed, moving: false }
    }

    pub fn sprite_rect(&self) -> PixelRect {
        PixelRect::from_midbottom(self.pos.x, self.pos.y, self.sprite_size.x, self.sprite_size.y)
    }

    #[inline]
    pub fn collision_rect(&self) -> PixelRect { self.hitbox.rect_at(self.pos) }

    /// Centre of the sprite, what the camera follows.
    #[inline]
    pub fn center(&self) -> Vec2 { self.sprite_rect().center() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_and_box_share_midbottom() {
        let p = Player::new(Vec2::new(200.0, 300.0), IVec2::new(64, 64), Hitbox::new(28, 5), 75.0);
        let s = p.sprite_rect();
        let c = p.collision_rect();
        assert_eq!(s.bottom(), c.bottom());
        assert_eq!(s.x + s.w / 2, c.x + c.w / 2);
        assert_eq!(p.center(), Vec2::new(200.0, 268.0));
    }
}
