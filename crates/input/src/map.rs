//! Key mapping from terminal events to player actions.

use crate::types::TileId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Tile labels in deal order; one key per tile of a 20-tile deck.
pub const TILE_KEYS: [char; 20] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't',
];

/// Which screen the keyboard currently drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Start screen: typing a player name.
    NameEntry,
    /// Round in progress or end screen.
    Board,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Type(char),
    Erase,
    /// Start a round (name entry) or start over from the end screen.
    Submit,
    SelectTile(TileId),
    Quit,
}

/// Map keyboard input to a player action.
pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<KeyAction> {
    if should_quit(key) {
        return Some(KeyAction::Quit);
    }

    match (mode, key.code) {
        (_, KeyCode::Enter) => Some(KeyAction::Submit),
        (InputMode::NameEntry, KeyCode::Backspace) => Some(KeyAction::Erase),
        (InputMode::NameEntry, KeyCode::Char(c)) if !c.is_control() => Some(KeyAction::Type(c)),
        (InputMode::Board, KeyCode::Char(c)) => tile_for_key(c).map(KeyAction::SelectTile),
        _ => None,
    }
}

/// Tile addressed by a (case-insensitive) label key.
pub fn tile_for_key(c: char) -> Option<TileId> {
    let c = c.to_ascii_lowercase();
    TILE_KEYS
        .iter()
        .position(|&k| k == c)
        .map(|i| TileId(i as u16))
}

/// Label key for a tile, if it has one.
pub fn key_for_tile(id: TileId) -> Option<char> {
    TILE_KEYS.get(id.index()).copied()
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_entry_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('A')), InputMode::NameEntry),
            Some(KeyAction::Type('A'))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' ')), InputMode::NameEntry),
            Some(KeyAction::Type(' '))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Backspace), InputMode::NameEntry),
            Some(KeyAction::Erase)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter), InputMode::NameEntry),
            Some(KeyAction::Submit)
        );
    }

    #[test]
    fn test_board_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a')), InputMode::Board),
            Some(KeyAction::SelectTile(TileId(0)))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('T')), InputMode::Board),
            Some(KeyAction::SelectTile(TileId(19)))
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('u')), InputMode::Board), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Backspace), InputMode::Board), None);
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter), InputMode::Board),
            Some(KeyAction::Submit)
        );
    }

    #[test]
    fn test_labels_round_trip() {
        for (i, &k) in TILE_KEYS.iter().enumerate() {
            let id = TileId(i as u16);
            assert_eq!(tile_for_key(k), Some(id));
            assert_eq!(key_for_tile(id), Some(k));
        }
        assert_eq!(key_for_tile(TileId(20)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Esc), InputMode::NameEntry),
            Some(KeyAction::Quit)
        );
    }
}
