//! Leaderboard store - bounded, time-ascending record of won rounds.
//!
//! The persisted payload is a JSON array of `{"name": .., "time": ..}` objects
//! under [`SCORES_KEY`]. Reading never fails: a missing, unreadable or
//! malformed payload is an empty board.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kv::{KeyValueStore, MemoryStore};
use crate::types::{ScoreEntry, LEADERBOARD_CAPACITY};

/// Storage key of the persisted score array
pub const SCORES_KEY: &str = "scores";

/// On-disk shape of one score row.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredScore {
    name: String,
    time: u32,
}

impl From<&ScoreEntry> for StoredScore {
    fn from(value: &ScoreEntry) -> Self {
        Self {
            name: value.player_name.clone(),
            time: value.elapsed_seconds,
        }
    }
}

impl From<StoredScore> for ScoreEntry {
    fn from(value: StoredScore) -> Self {
        ScoreEntry::new(value.name, value.time)
    }
}

pub struct Leaderboard {
    store: Box<dyn KeyValueStore + Send>,
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Open a board backed by `store`, loading whatever it already holds.
    pub fn open(store: impl KeyValueStore + Send + 'static) -> Self {
        let mut board = Self {
            store: Box::new(store),
            entries: Vec::new(),
        };
        board.load();
        board
    }

    /// Board backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::open(MemoryStore::new())
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-read the persisted sequence, replacing the in-memory copy.
    pub fn load(&mut self) -> &[ScoreEntry] {
        self.entries = read_entries(self.store.as_ref());
        &self.entries
    }

    /// Insert `entry`, keep the best [`LEADERBOARD_CAPACITY`] and persist.
    ///
    /// An entry that ties an existing time ranks after it. A failed write is
    /// logged; the in-memory board is updated regardless.
    pub fn record(&mut self, entry: ScoreEntry) -> &[ScoreEntry] {
        tracing::debug!(
            player = %entry.player_name,
            elapsed = entry.elapsed_seconds,
            "recording score"
        );
        self.entries.push(entry);
        normalize(&mut self.entries);

        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, "failed to persist leaderboard");
        }
        &self.entries
    }

    fn persist(&mut self) -> Result<(), crate::StoreError> {
        let rows: Vec<StoredScore> = self.entries.iter().map(StoredScore::from).collect();
        let payload = serde_json::to_string(&rows)?;
        self.store.set(SCORES_KEY, &payload)
    }
}

impl fmt::Debug for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaderboard")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

fn normalize(entries: &mut Vec<ScoreEntry>) {
    // Stable: equal times keep insertion order.
    entries.sort_by_key(|e| e.elapsed_seconds);
    entries.truncate(LEADERBOARD_CAPACITY);
}

fn read_entries(store: &(dyn KeyValueStore + Send)) -> Vec<ScoreEntry> {
    let raw = match store.get(SCORES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "leaderboard unreadable, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<StoredScore>>(&raw) {
        Ok(rows) => {
            let mut entries: Vec<ScoreEntry> = rows.into_iter().map(ScoreEntry::from).collect();
            normalize(&mut entries);
            entries
        }
        Err(e) => {
            tracing::warn!(error = %e, "leaderboard payload malformed, starting empty");
            Vec::new()
        }
    }
}
