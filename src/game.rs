//! Per-frame game state: hero, camera and the collision layer.
use anyhow::{Result, bail};
use glam::{IVec2, Vec2};

use crate::config::{DemoCfg, WindowCfg};
use crate::core::camera::Camera;
use crate::core::collision::{Hitbox, check_collision};
use crate::core::grid::CollisionGrid;
use crate::core::movement::{Direction, displacement};
use crate::core::player::Player;
use crate::map::TileMap;

/// Window size for a map: the map's pixel size capped at the configured maximum.
pub fn screen_size(map_px: (i32, i32), win: &WindowCfg) -> (i32, i32) {
    (map_px.0.min(win.max_width), map_px.1.min(win.max_height))
}

/// Hero midbottom at world `(screen_w, screen_h)`, pulled back so the whole
/// hitbox lies inside the map. Off-map cells are solid, so a box straddling
/// the edge could never move.
pub fn spawn_point(screen: (i32, i32), map_px: (i32, i32), hitbox: Hitbox) -> Vec2 {
    let half = hitbox.w / 2;
    let x = screen.0.min(map_px.0 - (hitbox.w - half) - 1).max(half);
    let y = screen.1.min(map_px.1 - 1).max(hitbox.h);
    Vec2::new(x as f32, y as f32)
}

/// Hero and camera, moving against the map's collision layer.
pub struct Game<'m> {
    pub player: Player,
    pub camera: Camera,
    pub grid: &'m CollisionGrid,
}

impl<'m> Game<'m> {
    pub fn new(map: &'m TileMap, sprite_size: IVec2, cfg: &DemoCfg) -> Result<Self> {
        let hitbox = Hitbox::new(cfg.hero.hitbox_w, cfg.hero.hitbox_h);
        if hitbox.w <= 0 || hitbox.h <= 0 {
            bail!("hitbox {}x{} is not positive", hitbox.w, hitbox.h);
        }
        if !hitbox.fits_tile(map.tile_w, map.tile_h) {
            bail!(
                "hitbox {}x{} does not fit a {}x{} tile",
                hitbox.w, hitbox.h, map.tile_w, map.tile_h
            );
        }
        let (sw, sh) = screen_size(map.pixel_size(), &cfg.window);
        let start = spawn_point((sw, sh), map.pixel_size(), hitbox);
        let player = Player::new(start, sprite_size, hitbox, cfg.hero.speed);
        let camera = Camera::new(player.center(), Vec2::new(sw as f32, sh as f32));
        Ok(Self { player, camera, grid: &map.collision })
    }

    /// One frame of movement. Returns whether the hero actually moved.
    pub fn update(&mut self, dir: Direction, dt: f32) -> bool {
        let want = displacement(dir, dt, self.player.speed);
        let step = check_collision(self.player.pos, want, self.player.hitbox, self.grid);
        self.player.pos += step;
        self.player.moving = step != Vec2::ZERO;
        self.camera.set_center(self.player.center());
        self.player.moving
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapCfg;
    use crate::map::{TileLayer, TileRef};

    fn map_from(rows: &[&str]) -> TileMap {
        let (w, h) = (rows[0].len() as i32, rows.len() as i32);
        let solid: Vec<Option<TileRef>> = rows
            .iter()
            .flat_map(|r| r.chars().map(|c| (c == '#').then_some(TileRef { tileset: 0, id: 0 })))
            .collect();
        let cfg = MapCfg { hero_layer: 0, collision_layer: 1, ..MapCfg::default() };
        let layers = vec![
            TileLayer::from_cells("ground", w, h, vec![None; (w * h) as usize]).expect("ground"),
            TileLayer::from_cells("collision", w, h, solid).expect("collision"),
        ];
        TileMap::assemble(w, h, 32, 32, layers, Vec::new(), &cfg).expect("map")
    }

    #[test]
    fn screen_is_capped() {
        let win = WindowCfg::default();
        assert_eq!(screen_size((3200, 400), &win), (1024, 400));
        assert_eq!(screen_size((100, 9000), &win), (100, 768));
    }

    #[test]
    fn spawn_stays_inside_small_maps() {
        let hb = Hitbox::new(28, 5);
        // window as large as the map: pulled in from the bottom-right corner
        assert_eq!(spawn_point((320, 256), (320, 256), hb), Vec2::new(305.0, 255.0));
        let r = hb.rect_at(spawn_point((320, 256), (320, 256), hb));
        assert_eq!((r.right(), r.bottom()), (319, 255));
        // map larger than the window: the screen corner is already inside
        assert_eq!(spawn_point((1024, 768), (3200, 3200), hb), Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn starts_near_screen_corner() {
        let map = map_from(&["..........", "..........", ".........."]);
        let g = Game::new(&map, IVec2::new(64, 64), &DemoCfg::default()).expect("game");
        assert_eq!(g.player.pos, Vec2::new(305.0, 95.0));
        assert_eq!(g.camera.center, g.player.center());
        assert_eq!(g.camera.viewport, Vec2::new(320.0, 96.0));
    }

    #[test]
    fn moves_away_from_real_spawn() {
        let map = map_from(&[".........."; 8]);
        let mut g = Game::new(&map, IVec2::new(64, 64), &DemoCfg::default()).expect("game");
        let start = g.player.pos;
        for _ in 0..120 {
            g.update(Direction::new(-1, -1), 1.0 / 60.0);
        }
        assert!(g.player.pos.x < start.x - 50.0, "{:?} -> {:?}", start, g.player.pos);
        assert!(g.player.pos.y < start.y - 50.0, "{:?} -> {:?}", start, g.player.pos);
    }

    #[test]
    fn corner_spawn_is_open_towards_the_map() {
        let map = map_from(&[".........."; 8]);
        let cfg = DemoCfg::default();
        let step = |dx, dy| {
            let mut g = Game::new(&map, IVec2::new(64, 64), &cfg).expect("game");
            g.update(Direction::new(dx, dy), 1.0 / 60.0)
        };
        assert!(step(-1, 0), "stuck going west");
        assert!(step(0, -1), "stuck going north");
        // already against the map edge
        assert!(!step(1, 0));
        assert!(!step(0, 1));
    }

    #[test]
    fn shares_the_map_collision_grid() {
        let map = map_from(&["...", "..."]);
        let g = Game::new(&map, IVec2::new(32, 32), &DemoCfg::default()).expect("game");
        assert!(std::ptr::eq(g.grid, &map.collision));
    }

    #[test]
    fn oversized_hitbox_rejected() {
        let map = map_from(&["...", "..."]);
        let mut cfg = DemoCfg::default();
        cfg.hero.hitbox_w = 40;
        assert!(Game::new(&map, IVec2::new(64, 64), &cfg).is_err());
    }

    #[test]
    fn update_moves_and_follows() {
        let map = map_from(&["......", "......", "......", "......"]);
        let mut g = Game::new(&map, IVec2::new(32, 32), &DemoCfg::default()).expect("game");
        g.player.pos = Vec2::new(64.0, 80.0);
        assert!(g.update(Direction::new(1, 0), 0.1));
        assert_eq!(g.player.pos, Vec2::new(71.5, 80.0));
        assert_eq!(g.camera.center, g.player.center());
        assert!(!g.update(Direction::NONE, 0.1));
        assert!(!g.player.moving);
    }
}
