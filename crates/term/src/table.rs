//! TableModel: the presentation side's copy of the round.
//!
//! It is rebuilt purely from [`RoundEvent`]s and never talks back to the
//! controller.

use crate::types::{
    Phase, RoundEvent, RoundState, ScoreEntry, SoundCue, Tile, TileId, TileState, TIME_LOW_AT,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableModel {
    tiles: Vec<Tile>,
    round: RoundState,
    leaderboard: Vec<ScoreEntry>,
    /// Tiles revealed since the last evaluation (selection highlight).
    highlighted: Vec<TileId>,
    faces_shown: bool,
    /// Cues not yet played, oldest first.
    cues: Vec<SoundCue>,
}

impl TableModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &RoundEvent) {
        match event {
            RoundEvent::TilesDealt(tiles) => {
                self.tiles = tiles.clone();
                self.highlighted.clear();
                self.faces_shown = false;
            }
            RoundEvent::TileStateChanged { tile, state } => {
                if let Some(t) = self.tiles.get_mut(tile.index()) {
                    t.state = *state;
                }
                if *state == TileState::Revealed {
                    self.highlighted.push(*tile);
                }
            }
            RoundEvent::SelectionCleared => self.highlighted.clear(),
            RoundEvent::RoundStateChanged(state) => self.round = *state,
            RoundEvent::SoundCue(cue) => self.cues.push(*cue),
            RoundEvent::FacesShown => {
                self.faces_shown = true;
                self.highlighted.clear();
            }
            RoundEvent::TilesCleared => {
                self.tiles.clear();
                self.highlighted.clear();
                self.faces_shown = false;
                self.cues.clear();
            }
            RoundEvent::LeaderboardChanged(entries) => self.leaderboard = entries.clone(),
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn leaderboard(&self) -> &[ScoreEntry] {
        &self.leaderboard
    }

    pub fn is_highlighted(&self, id: TileId) -> bool {
        self.highlighted.contains(&id)
    }

    pub fn faces_shown(&self) -> bool {
        self.faces_shown
    }

    /// Cues received since the last call, consumed by whoever plays sounds.
    pub fn take_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }

    /// Whether the face of `tile` should be visible.
    pub fn face_visible(&self, tile: &Tile) -> bool {
        self.faces_shown || tile.state != TileState::Hidden
    }

    pub fn time_low(&self) -> bool {
        self.round.phase == Phase::Active && self.round.remaining_seconds <= TIME_LOW_AT
    }
}
