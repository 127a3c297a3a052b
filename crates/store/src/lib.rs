//! Persistence for the local high-score board.
//!
//! - [`kv`]: opaque key-value backends (in-memory, one-file-per-key on disk)
//! - [`leaderboard`]: bounded, time-ascending score board stored under [`SCORES_KEY`]

pub mod error;
pub mod kv;
pub mod leaderboard;

pub use memory_match_types as types;

pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use leaderboard::{Leaderboard, SCORES_KEY};
