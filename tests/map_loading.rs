use std::path::{Path, PathBuf};

use tiledemo::config::MapCfg;
use tiledemo::map::{TileMap, TileRef};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/fixture.tmx")
}

#[test]
fn loads_tile_layers_and_skips_objects() {
    let map = TileMap::load(&fixture(), &MapCfg::default()).expect("load fixture");
    assert_eq!((map.width, map.height), (6, 5));
    assert_eq!((map.tile_w, map.tile_h), (32, 32));
    assert_eq!(map.pixel_size(), (192, 160));

    let names: Vec<&str> = map.layers.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["ground", "decor", "canopy", "collision"]);
    assert!(map.layers[0].visible);
    assert!(!map.layers[2].visible);
    assert!((map.layers[3].opacity - 0.5).abs() < 1e-6);
    assert_eq!(map.hero_layer, 1);
}

#[test]
fn cells_keep_local_tile_ids() {
    let map = TileMap::load(&fixture(), &MapCfg::default()).expect("load fixture");
    let decor = &map.layers[1];
    assert_eq!(decor.get(1, 1), Some(TileRef { tileset: 0, id: 1 }));
    assert_eq!(decor.get(0, 0), None);
    assert_eq!(decor.occupied(), 2);
    assert_eq!(map.layers[0].occupied(), 30);
}

#[test]
fn tileset_metadata() {
    let map = TileMap::load(&fixture(), &MapCfg::default()).expect("load fixture");
    assert_eq!(map.tilesets.len(), 1);
    let ts = &map.tilesets[0];
    assert_eq!(ts.name, "terrain");
    assert_eq!(ts.columns, 2);
    assert_eq!((ts.image_w, ts.image_h), (64, 64));
    assert!(ts.image.ends_with("terrain.png"));
    assert_eq!(ts.source_rect(3), (32, 32, 32, 32));
}

#[test]
fn collision_grid_from_fourth_tile_layer() {
    let map = TileMap::load(&fixture(), &MapCfg::default()).expect("load fixture");
    let g = &map.collision;
    assert_eq!((g.width(), g.height()), (6, 5));
    assert!(g.is_solid(0, 0));
    assert!(g.is_solid(3, 2));
    assert!(!g.is_solid(1, 1));
    assert!(!g.is_solid(2, 2));
    // 18 border cells plus the pillar
    assert_eq!(g.solid_count(), 19);
}

#[test]
fn other_collision_layer_can_be_chosen() {
    let cfg = MapCfg { collision_layer: 1, ..MapCfg::default() };
    let map = TileMap::load(&fixture(), &cfg).expect("load fixture");
    assert_eq!(map.collision.solid_count(), 2);
}

#[test]
fn bad_layer_index_is_an_error() {
    let cfg = MapCfg { collision_layer: 7, ..MapCfg::default() };
    let err = TileMap::load(&fixture(), &cfg).err().expect("out of range");
    let msg = format!("{err:#}");
    assert!(msg.contains("collision layer 7"), "{msg}");
    assert!(msg.contains("fixture.tmx"), "{msg}");
}

#[test]
fn missing_file_names_the_path() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/nope.tmx");
    let err = TileMap::load(&path, &MapCfg::default()).err().expect("missing");
    assert!(format!("{err:#}").contains("nope.tmx"));
}
