use raylib::prelude::*;

use crate::core::movement::Direction;

/// Arrow-key intent for this frame. Escape and window-close are handled by
/// `window_should_close`.
pub fn process_events(window: &RaylibHandle) -> Direction {
    Direction::from_keys(
        window.is_key_down(KeyboardKey::KEY_LEFT),
        window.is_key_down(KeyboardKey::KEY_RIGHT),
        window.is_key_down(KeyboardKey::KEY_UP),
        window.is_key_down(KeyboardKey::KEY_DOWN),
    )
}
