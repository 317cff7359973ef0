use anyhow::Result;
use raylib::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tiledemo::audio_manager::AudioManager;
use tiledemo::config;
use tiledemo::game::{Game, screen_size};
use tiledemo::map::TileMap;
use tiledemo::process_events::process_events;
use tiledemo::render::textures::{TextureManager, load_icon};
use tiledemo::render::tiles::draw_scene;

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();
    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cfg = config::load_default()?;
    // first argument overrides the map path
    if let Some(arg) = std::env::args().nth(1) {
        cfg.map.path = PathBuf::from(arg);
    }

    let map = TileMap::load(&cfg.map.path, &cfg.map)?;
    let (sw, sh) = screen_size(map.pixel_size(), &cfg.window);

    let (mut window, raylib_thread) = raylib::init()
        .size(sw, sh)
        .title(&cfg.window.title)
        .build();
    window.set_exit_key(Some(KeyboardKey::KEY_ESCAPE));
    if let Some(fps) = cfg.window.target_fps {
        window.set_target_fps(fps);
    }
    if let Some(icon) = cfg.window.icon.as_deref().and_then(|n| load_icon(&cfg.texture_path(n))) {
        window.set_window_icon(&icon);
    }

    let textures = TextureManager::new(&mut window, &raylib_thread, &map, &cfg)?;
    let mut game = Game::new(&map, textures.hero_size(), &cfg)?;

    let mut audio = if cfg.audio.footsteps {
        AudioManager::new(Duration::from_millis(cfg.audio.step_interval_ms)).map(|mut a| {
            a.load_step(&cfg.audio.step_sound);
            a
        })
    } else {
        None
    };

    log::info!("window {sw}x{sh}, hero at ({}, {})", game.player.pos.x, game.player.pos.y);
    let mut last_report = Instant::now();

    while !window.window_should_close() {
        let dt = window.get_frame_time();
        let dir = process_events(&window);
        let moved = game.update(dir, dt);

        if let Some(a) = audio.as_mut() {
            if moved { a.play_step() } else { a.stop_steps() }
        }

        let fps_now = window.get_fps();
        if last_report.elapsed() >= Duration::from_secs(1) {
            log::info!("fps: {fps_now}");
            last_report = Instant::now();
        }

        let mut d = window.begin_drawing(&raylib_thread);
        draw_scene(&mut d, &map, &textures, &game);
        if cfg.window.show_fps {
            d.draw_text(&format!("FPS: {fps_now}"), 10, 10, 20, Color::WHITE);
        }
    }
    Ok(())
}
