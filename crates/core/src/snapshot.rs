use crate::types::{Phase, RoundState, Tile, TileId, TileState};

/// Point-in-time copy of everything the controller owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub state: RoundState,
    pub tiles: Vec<Tile>,
    pub selection: Vec<TileId>,
    pub generation: u32,
    pub player_name: String,
    pub faces_shown: bool,
    pub clock_ms: u64,
}

impl RoundSnapshot {
    pub fn playable(&self) -> bool {
        self.state.phase == Phase::Active
    }

    pub fn tile_state(&self, id: TileId) -> Option<TileState> {
        self.tiles.get(id.index()).map(|t| t.state)
    }

    /// Tiles not yet matched.
    pub fn unmatched(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.state != TileState::Matched)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundController;
    use crate::store::Leaderboard;
    use crate::types::CardDescriptor;

    #[test]
    fn snapshot_mirrors_controller() {
        let pool: Vec<CardDescriptor> = (0..10)
            .map(|i| CardDescriptor::new(format!("c{i}"), format!("{i}.png")))
            .collect();
        let mut round = RoundController::new(Leaderboard::in_memory(), 17);
        round.start_round("ana", &pool).unwrap();
        round.select_tile(TileId(3));

        let snap = round.snapshot();
        assert!(snap.playable());
        assert_eq!(snap.tiles.len(), 20);
        assert_eq!(snap.selection, vec![TileId(3)]);
        assert_eq!(snap.tile_state(TileId(3)), Some(TileState::Revealed));
        assert_eq!(snap.tile_state(TileId(40)), None);
        assert_eq!(snap.unmatched(), 20);
        assert_eq!(snap.player_name, "ana");
        assert_eq!(snap.generation, round.generation());
    }
}
