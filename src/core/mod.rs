//! Core game types and logic, independent of the window.
//!
//! Re-exports:
//! - `rect`: integer pixel rectangles
//! - `grid`: collision layer occupancy
//! - `collision`: axis-separated step resolution
//! - `movement`: key intent to displacement
//! - `player`: hero position and boxes
//! - `camera`: viewport following the hero

pub mod rect;
pub mod grid;
pub mod collision;
pub mod movement;
pub mod player;
pub mod camera;
