//! Session configuration from environment variables.

use std::path::PathBuf;

pub const DEFAULT_DECK_PATH: &str = "./api/meme.json";
pub const DEFAULT_DATA_DIR: &str = ".memory-match";
pub const DEFAULT_FRAME_MS: u32 = 50;
pub const DEFAULT_MAX_PENDING: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// JSON card pool served by the deck source.
    pub deck_path: PathBuf,
    /// Profile directory for persisted scores.
    pub data_dir: PathBuf,
    /// Cadence at which the session advances the round clock.
    pub frame_ms: u32,
    /// Fixed deal seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub max_pending_commands: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            deck_path: PathBuf::from(DEFAULT_DECK_PATH),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            frame_ms: DEFAULT_FRAME_MS,
            seed: None,
            log_path: None,
            max_pending_commands: DEFAULT_MAX_PENDING,
        }
    }
}

impl SessionConfig {
    /// Read `MEMORY_MATCH_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparseable values fall back
    /// to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let deck_path = non_empty("MEMORY_MATCH_DECK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DECK_PATH));
        let data_dir = non_empty("MEMORY_MATCH_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let frame_ms = non_empty("MEMORY_MATCH_FRAME_MS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(DEFAULT_FRAME_MS);
        let seed = non_empty("MEMORY_MATCH_SEED").and_then(|s| s.parse::<u32>().ok());
        let log_path = non_empty("MEMORY_MATCH_LOG_PATH").map(PathBuf::from);
        let max_pending_commands = non_empty("MEMORY_MATCH_MAX_PENDING")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_PENDING);

        Self {
            deck_path,
            data_dir,
            frame_ms,
            seed,
            log_path,
            max_pending_commands,
        }
    }
}
