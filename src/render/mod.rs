//! Rendering on top of raylib.
//!
//! Re-exports:
//! - `textures`: tileset and hero textures with a placeholder fallback
//! - `tiles`: layer drawing and hero placement

pub mod textures;
pub mod tiles;
