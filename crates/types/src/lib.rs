//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (round logic, persistence, terminal rendering).
//!
//! # Round Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROUND_SECONDS` | 75 | Countdown length of one round |
//! | `DECK_PAIRS` | 10 | Pairs dealt per round (20 tiles) |
//! | `TIME_LOW_AT` | 13 | Remaining seconds that trigger the time-low cue |
//! | `TICK_MS` | 1000 | Countdown cadence |
//! | `MISMATCH_REVERT_MS` | 1000 | Delay before a mismatched pair flips back |
//! | `END_SCREEN_MS` | 10000 | Delay before a finished round resets to idle |
//! | `LEADERBOARD_CAPACITY` | 10 | Maximum stored score entries |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{format_clock, Phase, TileState, ROUND_SECONDS};
//!
//! assert_eq!(format_clock(ROUND_SECONDS), "1:15");
//! assert_eq!(Phase::from_str("won"), Some(Phase::Won));
//! assert!(TileState::Hidden.is_selectable());
//! ```

/// Countdown length of one round, in seconds
pub const ROUND_SECONDS: u32 = 75;

/// Number of distinct cards dealt per round (each appears twice)
pub const DECK_PAIRS: usize = 10;

/// Remaining seconds at which the time-low cue fires (once per round)
pub const TIME_LOW_AT: u32 = 13;

/// Countdown cadence in milliseconds
pub const TICK_MS: u32 = 1000;

/// Delay before a mismatched pair flips back, in milliseconds
pub const MISMATCH_REVERT_MS: u32 = 1000;

/// Delay between the end screen and the automatic reset, in milliseconds
pub const END_SCREEN_MS: u32 = 10_000;

/// Maximum number of stored leaderboard entries
pub const LEADERBOARD_CAPACITY: usize = 10;

/// A card as served by the deck source. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardDescriptor {
    pub identity: String,
    pub image_ref: String,
}

impl CardDescriptor {
    pub fn new(identity: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            image_ref: image_ref.into(),
        }
    }
}

/// Position of a tile in the dealt deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u16);

impl TileId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-tile gameplay state
///
/// - **Hidden**: face down, selectable
/// - **Revealed**: face up, waiting for evaluation or for a mismatch revert
/// - **Matched**: paired, terminal for the rest of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    Hidden,
    Revealed,
    Matched,
}

impl TileState {
    pub fn is_selectable(&self) -> bool {
        matches!(self, TileState::Hidden)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileState::Hidden => "hidden",
            TileState::Revealed => "revealed",
            TileState::Matched => "matched",
        }
    }
}

/// One clickable card instance. Two tiles share each card identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub card: CardDescriptor,
    pub state: TileState,
}

impl Tile {
    pub fn new(id: TileId, card: CardDescriptor) -> Self {
        Self {
            id,
            card,
            state: TileState::Hidden,
        }
    }

    pub fn identity(&self) -> &str {
        &self.card.identity
    }
}

/// Round lifecycle phase
///
/// The cycle goes: Idle → Active → Won | Lost → Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Active,
    Won,
    Lost,
}

impl Phase {
    /// Won and Lost hold until the round is reset.
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }

    /// Parse phase from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "idle" => Some(Phase::Idle),
            "active" => Some(Phase::Active),
            "won" => Some(Phase::Won),
            "lost" => Some(Phase::Lost),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Active => "active",
            Phase::Won => "won",
            Phase::Lost => "lost",
        }
    }
}

/// Observable round counters.
///
/// Invariants: `matched_pairs <= required_pairs`; phase only moves forward
/// until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundState {
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub matched_pairs: u32,
    pub required_pairs: u32,
}

impl RoundState {
    pub fn new(round_seconds: u32, required_pairs: u32) -> Self {
        Self {
            phase: Phase::Idle,
            remaining_seconds: round_seconds,
            matched_pairs: 0,
            required_pairs,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(ROUND_SECONDS, DECK_PAIRS as u32)
    }
}

/// One leaderboard row. Lower `elapsed_seconds` is better.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreEntry {
    pub player_name: String,
    pub elapsed_seconds: u32,
}

impl ScoreEntry {
    pub fn new(player_name: impl Into<String>, elapsed_seconds: u32) -> Self {
        Self {
            player_name: player_name.into(),
            elapsed_seconds,
        }
    }
}

/// Named sound cues for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Flip,
    Success,
    Unflip,
    TimeLow,
    Win,
    Lose,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Flip => "flip",
            SoundCue::Success => "success",
            SoundCue::Unflip => "unflip",
            SoundCue::TimeLow => "timelow",
            SoundCue::Win => "win",
            SoundCue::Lose => "lose",
        }
    }
}

/// Outbound notification from the round controller.
///
/// Observers fold these into their own view of the round; they never
/// mutate controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// A fresh deck was laid out, every tile hidden.
    TilesDealt(Vec<Tile>),
    TileStateChanged { tile: TileId, state: TileState },
    /// The selection highlight was removed after an evaluation.
    SelectionCleared,
    RoundStateChanged(RoundState),
    SoundCue(SoundCue),
    /// The round was lost: show every face that is still hidden or revealed.
    FacesShown,
    /// The round was reset and its tiles discarded.
    TilesCleared,
    LeaderboardChanged(Vec<ScoreEntry>),
}

/// Format seconds as `m:ss`.
///
/// # Examples
///
/// ```
/// use memory_match_types::format_clock;
///
/// assert_eq!(format_clock(0), "0:00");
/// assert_eq!(format_clock(9), "0:09");
/// assert_eq!(format_clock(61), "1:01");
/// ```
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_defaults_match_rules() {
        assert_eq!(ROUND_SECONDS, 75);
        assert_eq!(DECK_PAIRS, 10);
        assert_eq!(TIME_LOW_AT, 13);
        assert_eq!(MISMATCH_REVERT_MS, 1000);
        assert_eq!(END_SCREEN_MS, 10_000);
        assert_eq!(LEADERBOARD_CAPACITY, 10);
    }

    #[test]
    fn default_round_state_is_idle() {
        let state = RoundState::default();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.remaining_seconds, 75);
        assert_eq!(state.matched_pairs, 0);
        assert_eq!(state.required_pairs, 10);
    }

    #[test]
    fn only_hidden_tiles_are_selectable() {
        assert!(TileState::Hidden.is_selectable());
        assert!(!TileState::Revealed.is_selectable());
        assert!(!TileState::Matched.is_selectable());
    }

    #[test]
    fn phase_round_trips_through_str() {
        for phase in [Phase::Idle, Phase::Active, Phase::Won, Phase::Lost] {
            assert_eq!(Phase::from_str(phase.as_str()), Some(phase));
        }
        assert_eq!(Phase::from_str("ACTIVE"), Some(Phase::Active));
        assert_eq!(Phase::from_str("paused"), None);
    }

    #[test]
    fn finished_phases() {
        assert!(Phase::Won.is_finished());
        assert!(Phase::Lost.is_finished());
        assert!(!Phase::Idle.is_finished());
        assert!(!Phase::Active.is_finished());
    }

    #[test]
    fn clock_formatting_pads_seconds() {
        assert_eq!(format_clock(75), "1:15");
        assert_eq!(format_clock(13), "0:13");
        assert_eq!(format_clock(600), "10:00");
    }
}
