//! Deck builder - picks cards from the pool and deals them as shuffled pairs.

use std::collections::HashSet;

use thiserror::Error;

use crate::rng::SimpleRng;
use crate::types::CardDescriptor;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("card pool too small: need {required} distinct cards, have {available}")]
    InsufficientPool { required: usize, available: usize },
}

/// Build a playable deck of `2 * size` cards.
///
/// `size` distinct identities are sampled from `pool` (duplicates in the pool
/// count once), each is doubled and the result is Fisher-Yates shuffled.
pub fn build_deck(
    pool: &[CardDescriptor],
    size: usize,
    rng: &mut SimpleRng,
) -> Result<Vec<CardDescriptor>, DeckError> {
    let mut seen = HashSet::with_capacity(pool.len());
    let mut unique: Vec<&CardDescriptor> = pool
        .iter()
        .filter(|card| seen.insert(card.identity.as_str()))
        .collect();

    if unique.len() < size {
        return Err(DeckError::InsufficientPool {
            required: size,
            available: unique.len(),
        });
    }

    rng.shuffle(&mut unique);
    unique.truncate(size);

    let mut deck: Vec<CardDescriptor> = Vec::with_capacity(size * 2);
    for card in unique {
        deck.push(card.clone());
        deck.push(card.clone());
    }
    rng.shuffle(&mut deck);
    Ok(deck)
}
