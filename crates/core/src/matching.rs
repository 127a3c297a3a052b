//! Match evaluation. Pure: the controller applies the resulting transitions.

use crate::types::{Tile, TileState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Match,
    Mismatch,
}

/// Two distinct revealed tiles showing the same card form a match.
pub fn evaluate(a: &Tile, b: &Tile) -> Verdict {
    let both_revealed = a.state == TileState::Revealed && b.state == TileState::Revealed;
    if both_revealed && a.id != b.id && a.identity() == b.identity() {
        Verdict::Match
    } else {
        Verdict::Mismatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CardDescriptor, TileId};

    fn tile(id: u16, identity: &str, state: TileState) -> Tile {
        Tile {
            id: TileId(id),
            card: CardDescriptor::new(identity, format!("{identity}.png")),
            state,
        }
    }

    #[test]
    fn same_identity_revealed_is_match() {
        let a = tile(0, "cat", TileState::Revealed);
        let b = tile(5, "cat", TileState::Revealed);
        assert_eq!(evaluate(&a, &b), Verdict::Match);
    }

    #[test]
    fn different_identity_is_mismatch() {
        let a = tile(0, "cat", TileState::Revealed);
        let b = tile(1, "dog", TileState::Revealed);
        assert_eq!(evaluate(&a, &b), Verdict::Mismatch);
    }

    #[test]
    fn unrevealed_tiles_never_match() {
        for state in [TileState::Hidden, TileState::Matched] {
            let a = tile(0, "cat", TileState::Revealed);
            let b = tile(1, "cat", state);
            assert_eq!(evaluate(&a, &b), Verdict::Mismatch);
        }
    }

    #[test]
    fn tile_does_not_match_itself() {
        let a = tile(3, "cat", TileState::Revealed);
        assert_eq!(evaluate(&a, &a), Verdict::Mismatch);
    }

    #[test]
    fn evaluation_is_symmetric() {
        let tiles = [
            tile(0, "cat", TileState::Revealed),
            tile(1, "cat", TileState::Revealed),
            tile(2, "dog", TileState::Revealed),
            tile(3, "cat", TileState::Hidden),
            tile(4, "dog", TileState::Matched),
        ];
        for a in &tiles {
            for b in &tiles {
                assert_eq!(evaluate(a, b), evaluate(b, a));
            }
        }
    }
}
