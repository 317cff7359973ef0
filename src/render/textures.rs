use anyhow::{Result, anyhow};
use glam::IVec2;
use raylib::prelude::*;
use std::path::Path;

use crate::config::DemoCfg;
use crate::map::TileMap;

/// GPU textures for every tileset image plus the hero sprite.
pub struct TextureManager {
    tilesets: Vec<Texture2D>,
    hero: Texture2D,
    hero_size: IVec2,
}

impl TextureManager {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, map: &TileMap, cfg: &DemoCfg) -> Result<Self> {
        let mut tilesets = Vec::with_capacity(map.tilesets.len());
        for ts in &map.tilesets {
            let path = ts.image.to_string_lossy();
            let tex = rl
                .load_texture(thread, &path)
                .map_err(|e| anyhow!("tileset '{}' image {path}: {e}", ts.name))?;
            log::debug!("tileset '{}': {}x{} from {path}", ts.name, ts.image_w, ts.image_h);
            tilesets.push(tex);
        }

        let hero_path = cfg.texture_path(&cfg.hero.sprite);
        let img = match Image::load_image(&hero_path.to_string_lossy()) {
            Ok(img) => img,
            Err(e) => {
                log::warn!("hero sprite {}: {e}; drawing a placeholder", hero_path.display());
                make_tank_placeholder(64, 64)
            }
        };
        let hero_size = IVec2::new(img.width().max(1), img.height().max(1));
        let hero = rl
            .load_texture_from_image(thread, &img)
            .map_err(|e| anyhow!("upload hero sprite: {e}"))?;

        Ok(Self { tilesets, hero, hero_size })
    }

    #[inline] pub fn tileset(&self, i: usize) -> Option<&Texture2D> { self.tilesets.get(i) }
    #[inline] pub fn hero(&self) -> &Texture2D { &self.hero }
    #[inline] pub fn hero_size(&self) -> IVec2 { self.hero_size }
}

/// Window icon, if the file is there.
pub fn load_icon(path: &Path) -> Option<Image> {
    match Image::load_image(&path.to_string_lossy()) {
        Ok(img) => Some(img),
        Err(e) => {
            log::debug!("no window icon at {}: {e}", path.display());
            None
        }
    }
}

/// Top-down tank drawn from rectangles: tracks, hull, turret, barrel pointing up.
fn make_tank_placeholder(w: i32, h: i32) -> Image {
    let mut img = Image::gen_image_color(w, h, Color::BLANK);
    let track = Color::new(40, 40, 40, 255);
    let hull = Color::new(70, 110, 60, 255);
    let turret = Color::new(95, 140, 80, 255);
    img.draw_rectangle(w / 8, h / 4, w / 6, h * 3 / 4, track);
    img.draw_rectangle(w - w / 8 - w / 6, h / 4, w / 6, h * 3 / 4, track);
    img.draw_rectangle(w / 8 + w / 6, h / 3, w - 2 * (w / 8 + w / 6), h * 2 / 3 - h / 16, hull);
    img.draw_rectangle(w / 2 - w / 8, h / 2 - h / 16, w / 4, h / 4, turret);
    img.draw_rectangle(w / 2 - w / 32, h / 16, w / 16, h / 2 - h / 8, turret);
    img
}
