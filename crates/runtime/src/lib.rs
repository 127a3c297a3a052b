//! Async host for a round controller.
//!
//! The controller itself is synchronous and clockless. This crate gives it a
//! home on a tokio runtime:
//!
//! - [`session`]: the task that owns the controller, applies [`PlayerCommand`]s
//!   and advances time on a fixed cadence
//! - [`handle`]: [`SessionHandle`], a blocking facade for a synchronous UI loop
//! - [`config`]: `MEMORY_MATCH_*` environment configuration
//! - [`telemetry`]: `tracing` subscriber setup
//!
//! # Environment Variables
//!
//! - `MEMORY_MATCH_DECK_PATH`: card pool JSON (default: "./api/meme.json")
//! - `MEMORY_MATCH_DATA_DIR`: score storage directory (default: ".memory-match")
//! - `MEMORY_MATCH_FRAME_MS`: clock cadence in ms (default: 50)
//! - `MEMORY_MATCH_SEED`: fixed deal seed (default: clock-derived)
//! - `MEMORY_MATCH_LOG_PATH`: log file (default: logging off)
//! - `MEMORY_MATCH_MAX_PENDING`: inbound command queue bound (default: 32)

pub mod config;
pub mod handle;
pub mod session;
pub mod telemetry;

pub use memory_match_core as core;
pub use memory_match_source as source;
pub use memory_match_store as store;
pub use memory_match_types as types;

pub use config::SessionConfig;
pub use handle::SessionHandle;
pub use session::{run_session, PlayerCommand};
pub use telemetry::init_logging;
