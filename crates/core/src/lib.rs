//! Round logic - pure, deterministic, and testable
//!
//! This crate contains the rules of a memory-matching round and nothing else.
//! It has **no dependencies** on rendering, input or async runtimes:
//!
//! - **Deterministic**: a seed fixes every deal; time only moves through
//!   [`RoundController::advance`]
//! - **Testable**: timers are plain data, so delays are exercised without sleeping
//! - **Portable**: drive it from a terminal loop, a tokio task, or a test
//!
//! # Module Structure
//!
//! - [`deck`]: pool sampling and pair dealing
//! - [`matching`]: pair evaluation
//! - [`round`]: the round state machine
//! - [`rng`]: seeded Fisher-Yates shuffling
//! - [`snapshot`]: copyable view of a round
//! - [`timers`]: generation-tagged one-shot timers
//!
//! # Example
//!
//! ```
//! use memory_match_core::{RoundController, store::Leaderboard};
//! use memory_match_types::{CardDescriptor, Phase};
//!
//! let pool: Vec<CardDescriptor> = (0..10)
//!     .map(|i| CardDescriptor::new(format!("card-{i}"), format!("{i}.png")))
//!     .collect();
//!
//! let mut round = RoundController::new(Leaderboard::in_memory(), 12345);
//! round.start_round("ana", &pool).unwrap();
//! assert_eq!(round.phase(), Phase::Active);
//!
//! // 75 seconds later the round is lost.
//! round.advance(75_000);
//! assert_eq!(round.phase(), Phase::Lost);
//! ```

pub mod deck;
pub mod matching;
pub mod rng;
pub mod round;
pub mod snapshot;
pub mod timers;

pub use memory_match_store as store;
pub use memory_match_types as types;

pub use deck::{build_deck, DeckError};
pub use matching::{evaluate, Verdict};
pub use rng::SimpleRng;
pub use round::{RoundController, RoundRules};
pub use snapshot::RoundSnapshot;
pub use timers::{TimerQueue, TimerTask};
