//! Top-down tile-map demo: loads a Tiled map, drives a tank around it with
//! the arrow keys and stops it at the collision layer.

pub mod audio_manager;
pub mod config;
pub mod core;
pub mod game;
pub mod map;
pub mod process_events;
pub mod render;
