//! Draws visible tile layers with the hero slotted in after its layer.
use glam::Vec2;
use raylib::prelude::*;

use crate::core::camera::Camera;
use crate::game::Game;
use crate::map::{TileLayer, TileMap};
use crate::render::textures::TextureManager;

pub fn draw_scene(d: &mut impl RaylibDraw, map: &TileMap, textures: &TextureManager, game: &Game<'_>) {
    d.clear_background(Color::BLACK);
    for (i, layer) in map.layers.iter().enumerate() {
        if layer.visible {
            draw_layer(d, map, layer, textures, &game.camera);
        }
        if i == map.hero_layer {
            draw_hero(d, textures, game);
        }
    }
}

fn draw_layer(d: &mut impl RaylibDraw, map: &TileMap, layer: &TileLayer, textures: &TextureManager, cam: &Camera) {
    let alpha = (layer.opacity.clamp(0.0, 1.0) * 255.0) as u8;
    let tint = Color::new(255, 255, 255, alpha);
    let (xs, ys) = cam.visible_tiles_with_overhang(
        map.tile_w,
        map.tile_h,
        layer.width,
        layer.height,
        map.tall_tile_rows(),
    );
    for y in ys {
        for x in xs.clone() {
            let Some(cell) = layer.get(x, y) else { continue };
            let (Some(ts), Some(tex)) = (map.tilesets.get(cell.tileset), textures.tileset(cell.tileset)) else {
                continue;
            };
            let (sx, sy, sw, sh) = ts.source_rect(cell.id);
            // tiles taller than the grid hang upward from the cell's bottom edge
            let world = Vec2::new(
                (x * map.tile_w) as f32,
                ((y + 1) * map.tile_h - sh) as f32,
            );
            let at = cam.world_to_screen(world);
            d.draw_texture_rec(
                tex,
                Rectangle::new(sx as f32, sy as f32, sw as f32, sh as f32),
                Vector2::new(at.x, at.y),
                tint,
            );
        }
    }
}

fn draw_hero(d: &mut impl RaylibDraw, textures: &TextureManager, game: &Game<'_>) {
    let r = game.player.sprite_rect();
    let at = game.camera.world_to_screen(Vec2::new(r.x as f32, r.y as f32));
    d.draw_texture_v(textures.hero(), Vector2::new(at.x, at.y), Color::WHITE);
}
