//! Demo configuration loaded from data/config/demo.toml.
//!
//! Every field has a default; a missing file means defaults. A few env
//! variables override the file for quick tuning.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DemoCfg {
    pub map: MapCfg,
    pub hero: HeroCfg,
    pub window: WindowCfg,
    pub audio: AudioCfg,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapCfg {
    /// TMX file; relative paths resolve against the data root.
    pub path: PathBuf,
    pub texture_dir: PathBuf,
    /// Index among tile layers after which the hero is drawn.
    pub hero_layer: usize,
    /// Index among tile layers whose non-empty cells are solid.
    pub collision_layer: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeroCfg {
    pub sprite: String,
    /// Pixels per second.
    pub speed: f32,
    pub hitbox_w: i32,
    pub hitbox_h: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowCfg {
    pub title: String,
    pub icon: Option<String>,
    pub max_width: i32,
    pub max_height: i32,
    pub show_fps: bool,
    pub target_fps: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioCfg {
    pub footsteps: bool,
    pub step_sound: PathBuf,
    pub step_interval_ms: u64,
}

impl Default for MapCfg {
    fn default() -> Self {
        Self {
            path: PathBuf::from("test.tmx"),
            texture_dir: PathBuf::from("textures"),
            hero_layer: 1,
            collision_layer: 3,
        }
    }
}

impl Default for HeroCfg {
    fn default() -> Self {
        Self {
            sprite: "tank-64.png".to_string(),
            speed: 75.0,
            hitbox_w: 28,
            hitbox_h: 5,
        }
    }
}

impl Default for WindowCfg {
    fn default() -> Self {
        Self {
            title: "test2allien, use arrow keys".to_string(),
            icon: Some("tank-48.png".to_string()),
            max_width: 1024,
            max_height: 768,
            show_fps: false,
            target_fps: None,
        }
    }
}

impl Default for AudioCfg {
    fn default() -> Self {
        Self {
            footsteps: true,
            step_sound: PathBuf::from("sounds/step.wav"),
            step_interval_ms: 260,
        }
    }
}

impl DemoCfg {
    /// Joins every relative path onto `root`.
    pub fn rebase(&mut self, root: &Path) {
        for p in [&mut self.map.path, &mut self.map.texture_dir, &mut self.audio.step_sound] {
            if p.is_relative() {
                *p = root.join(&*p);
            }
        }
    }

    pub fn texture_path(&self, name: &str) -> PathBuf {
        self.map.texture_dir.join(name)
    }
}

/// `./data` when run from a checkout root, else the crate's own data dir.
pub fn data_root() -> PathBuf {
    let cwd = Path::new("data");
    if cwd.is_dir() {
        return cwd.to_path_buf();
    }
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn parse(txt: &str) -> Result<DemoCfg> {
    toml::from_str::<DemoCfg>(txt).context("parse demo TOML")
}

/// Reads `path` if it exists, otherwise defaults. Paths are not rebased.
pub fn load_from(path: &Path) -> Result<DemoCfg> {
    if path.is_file() {
        let txt = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        parse(&txt)
    } else {
        log::debug!("no config at {}; using defaults", path.display());
        Ok(DemoCfg::default())
    }
}

/// Applies overrides from a variable lookup (the process env in `load_default`).
pub fn apply_overrides(cfg: &mut DemoCfg, var: impl Fn(&str) -> Option<String>) {
    if let Some(s) = var("TILEDEMO_MAP") {
        cfg.map.path = PathBuf::from(s);
    }
    if let Some(s) = var("TILEDEMO_SPEED") {
        match s.parse() {
            Ok(v) => cfg.hero.speed = v,
            Err(_) => log::warn!("ignoring TILEDEMO_SPEED={s}: not a number"),
        }
    }
    if let Some(s) = var("TILEDEMO_SHOW_FPS") {
        cfg.window.show_fps = matches!(s.as_str(), "1" | "true" | "yes");
    }
}

pub fn load_default() -> Result<DemoCfg> {
    let root = data_root();
    let mut cfg = load_from(&root.join("config/demo.toml"))?;
    apply_overrides(&mut cfg, |k| std::env::var(k).ok());
    cfg.rebase(&root);
    Ok(cfg)
}
