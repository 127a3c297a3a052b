//! Deck sources - where the card pool comes from.
//!
//! Fetching never fails from the caller's point of view: transport or parse
//! problems are logged and produce an empty pool, which the deck builder then
//! rejects as too small.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use memory_match_types as types;

use crate::types::CardDescriptor;

pub trait DeckSource {
    fn fetch_card_pool(&self) -> Vec<CardDescriptor>;
}

/// Raw pool entry: `{"name": "...", "url": "..."}`.
#[derive(Debug, Clone, Deserialize)]
struct PoolEntry {
    name: String,
    url: String,
}

impl From<PoolEntry> for CardDescriptor {
    fn from(value: PoolEntry) -> Self {
        CardDescriptor::new(value.name, value.url)
    }
}

/// Parse a pool payload. Unknown fields are ignored.
pub fn parse_pool(payload: &str) -> Result<Vec<CardDescriptor>, serde_json::Error> {
    let entries: Vec<PoolEntry> = serde_json::from_str(payload)?;
    Ok(entries.into_iter().map(CardDescriptor::from).collect())
}

/// Reads the pool from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileDeckSource {
    path: PathBuf,
}

impl JsonFileDeckSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeckSource for JsonFileDeckSource {
    fn fetch_card_pool(&self) -> Vec<CardDescriptor> {
        let payload = match std::fs::read_to_string(&self.path) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "deck source unreadable");
                return Vec::new();
            }
        };
        match parse_pool(&payload) {
            Ok(pool) => {
                tracing::debug!(path = %self.path.display(), cards = pool.len(), "card pool fetched");
                pool
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "deck source malformed");
                Vec::new()
            }
        }
    }
}

/// Serves a fixed pool.
#[derive(Debug, Clone, Default)]
pub struct StaticDeckSource {
    pool: Vec<CardDescriptor>,
}

impl StaticDeckSource {
    pub fn new(pool: Vec<CardDescriptor>) -> Self {
        Self { pool }
    }

    /// `count` placeholder cards named `card-0`, `card-1`, ...
    pub fn numbered(count: usize) -> Self {
        Self::new(
            (0..count)
                .map(|i| CardDescriptor::new(format!("card-{i}"), format!("card-{i}.png")))
                .collect(),
        )
    }
}

impl DeckSource for StaticDeckSource {
    fn fetch_card_pool(&self) -> Vec<CardDescriptor> {
        self.pool.clone()
    }
}

impl<T: DeckSource + ?Sized> DeckSource for Box<T> {
    fn fetch_card_pool(&self) -> Vec<CardDescriptor> {
        (**self).fetch_card_pool()
    }
}
