//! Terminal input module.
//!
//! Maps `crossterm` key events into [`KeyAction`]s. Which keys mean what
//! depends on the [`InputMode`]: the start screen takes a player name, the
//! board addresses tiles by letter.

pub mod map;

pub use memory_match_types as types;

pub use map::{key_for_tile, map_key, should_quit, tile_for_key, InputMode, KeyAction, TILE_KEYS};
