//! Tiled (TMX) map loading.
//!
//! The parsed map is copied into plain owned structs so the rest of the demo
//! never deals with `tiled` lifetimes. Only orthogonal, finite maps are
//! supported; object, image and group layers are skipped.

use anyhow::{Context, Result, anyhow, bail};
use std::path::{Path, PathBuf};

use crate::config::MapCfg;
use crate::core::grid::CollisionGrid;

/// A tile cell: which tileset, and the tile's local id inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRef {
    pub tileset: usize,
    pub id: u32,
}

pub struct TileLayer {
    pub name: String,
    pub visible: bool,
    pub opacity: f32,
    pub width: i32,
    pub height: i32,
    cells: Vec<Option<TileRef>>,
}

impl TileLayer {
    /// Layer from row-major cells; `cells.len()` must be `width * height`.
    pub fn from_cells(name: &str, width: i32, height: i32, cells: Vec<Option<TileRef>>) -> Result<Self> {
        if cells.len() != (width.max(0) * height.max(0)) as usize {
            bail!("layer '{name}': {} cells for {width}x{height}", cells.len());
        }
        Ok(Self { name: name.to_string(), visible: true, opacity: 1.0, width, height, cells })
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileRef> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height { return None; }
        self.cells[(y * self.width + x) as usize]
    }

    pub fn occupied(&self) -> usize { self.cells.iter().filter(|c| c.is_some()).count() }
}

/// Single-image tileset laid out as a regular grid.
pub struct Tileset {
    pub name: String,
    pub image: PathBuf,
    pub image_w: i32,
    pub image_h: i32,
    pub tile_w: i32,
    pub tile_h: i32,
    pub columns: i32,
    pub spacing: i32,
    pub margin: i32,
}

impl Tileset {
    /// Pixel rect `(x, y, w, h)` of tile `id` inside the tileset image.
    pub fn source_rect(&self, id: u32) -> (i32, i32, i32, i32) {
        let cols = self.columns.max(1) as u32;
        let col = (id % cols) as i32;
        let row = (id / cols) as i32;
        (
            self.margin + col * (self.tile_w + self.spacing),
            self.margin + row * (self.tile_h + self.spacing),
            self.tile_w,
            self.tile_h,
        )
    }
}

pub struct TileMap {
    pub width: i32,
    pub height: i32,
    pub tile_w: i32,
    pub tile_h: i32,
    pub layers: Vec<TileLayer>,
    pub tilesets: Vec<Tileset>,
    pub hero_layer: usize,
    pub collision: CollisionGrid,
}

impl TileMap {
    pub fn load(path: &Path, cfg: &MapCfg) -> Result<Self> {
        let mut loader = tiled::Loader::new();
        let map = loader
            .load_tmx_map(path)
            .map_err(|e| anyhow!("load map {}: {e}", path.display()))?;

        if map.orientation != tiled::Orientation::Orthogonal {
            bail!("{}: only orthogonal maps are supported", path.display());
        }

        let tilesets = map
            .tilesets()
            .iter()
            .map(|ts| convert_tileset(ts))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("tilesets of {}", path.display()))?;

        let mut layers = Vec::new();
        for layer in map.layers() {
            let name = layer.name.clone();
            let (visible, opacity) = (layer.visible, layer.opacity);
            let Some(tiles) = layer.as_tile_layer() else {
                log::debug!("skipping non-tile layer '{name}'");
                continue;
            };
            let idx = layers.len();
            let converted = convert_layer(&tiles, name, visible, opacity)
                .with_context(|| format!("tile layer {idx} of {}", path.display()))?;
            layers.push(converted);
        }

        Self::assemble(
            map.width as i32,
            map.height as i32,
            map.tile_width as i32,
            map.tile_height as i32,
            layers,
            tilesets,
            cfg,
        )
        .with_context(|| format!("map {}", path.display()))
    }

    /// Validates layer indices and builds the collision grid.
    pub fn assemble(
        width: i32,
        height: i32,
        tile_w: i32,
        tile_h: i32,
        layers: Vec<TileLayer>,
        tilesets: Vec<Tileset>,
        cfg: &MapCfg,
    ) -> Result<Self> {
        if tile_w <= 0 || tile_h <= 0 {
            bail!("tile size {tile_w}x{tile_h} is not positive");
        }
        if cfg.hero_layer >= layers.len() {
            bail!("hero layer {} out of range ({} tile layers)", cfg.hero_layer, layers.len());
        }
        let coll = layers.get(cfg.collision_layer).ok_or_else(|| {
            anyhow!("collision layer {} out of range ({} tile layers)", cfg.collision_layer, layers.len())
        })?;
        let collision = collision_grid(coll, tile_w, tile_h);
        log::info!(
            "map {}x{} tiles of {}x{} px, {} tile layers, collision layer '{}' with {} solid cells",
            width, height, tile_w, tile_h, layers.len(), coll.name, collision.solid_count()
        );
        Ok(Self {
            width,
            height,
            tile_w,
            tile_h,
            layers,
            tilesets,
            hero_layer: cfg.hero_layer,
            collision,
        })
    }

    pub fn pixel_size(&self) -> (i32, i32) {
        (self.width * self.tile_w, self.height * self.tile_h)
    }

    /// Rows a tile from the tallest tileset can reach above its own cell.
    pub fn tall_tile_rows(&self) -> i32 {
        let tallest = self.tilesets.iter().map(|t| t.tile_h).max().unwrap_or(0);
        if self.tile_h <= 0 || tallest <= self.tile_h {
            return 0;
        }
        (tallest + self.tile_h - 1) / self.tile_h - 1
    }
}

fn convert_layer(tiles: &tiled::TileLayer, name: String, visible: bool, opacity: f32) -> Result<TileLayer> {
    let (Some(w), Some(h)) = (tiles.width(), tiles.height()) else {
        bail!("infinite layer '{name}' is not supported");
    };
    let (w, h) = (w as i32, h as i32);
    let mut cells = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            cells.push(tiles.get_tile(x, y).map(|t| TileRef { tileset: t.tileset_index(), id: t.id() }));
        }
    }
    let mut layer = TileLayer::from_cells(&name, w, h, cells)?;
    layer.visible = visible;
    layer.opacity = opacity;
    Ok(layer)
}

fn convert_tileset(ts: &tiled::Tileset) -> Result<Tileset> {
    let Some(img) = ts.image.as_ref() else {
        bail!("tileset '{}' has no single image (image collections are not supported)", ts.name);
    };
    let (tile_w, tile_h) = (ts.tile_width as i32, ts.tile_height as i32);
    let (spacing, margin) = (ts.spacing as i32, ts.margin as i32);
    let columns = grid_columns(ts.columns, img.width, (tile_w, tile_h), spacing, margin)
        .with_context(|| format!("tileset '{}'", ts.name))?;
    Ok(Tileset {
        name: ts.name.clone(),
        image: img.source.clone(),
        image_w: img.width,
        image_h: img.height,
        tile_w,
        tile_h,
        columns,
        spacing,
        margin,
    })
}

/// Declared column count, or as many tile columns as fit the image.
fn grid_columns(declared: u32, image_w: i32, (tile_w, tile_h): (i32, i32), spacing: i32, margin: i32) -> Result<i32> {
    if tile_w <= 0 || tile_h <= 0 {
        bail!("tile size {tile_w}x{tile_h} is not positive");
    }
    if declared > 0 {
        return Ok(declared as i32);
    }
    Ok(((image_w - 2 * margin + spacing) / (tile_w + spacing)).max(1))
}

/// Any non-empty cell of `layer` is solid.
pub fn collision_grid(layer: &TileLayer, tile_w: i32, tile_h: i32) -> CollisionGrid {
    let mut grid = CollisionGrid::new(layer.width, layer.height, tile_w, tile_h);
    for y in 0..layer.height {
        for x in 0..layer.width {
            grid.set_solid(x, y, layer.get(x, y).is_some());
        }
    }
    grid
}
