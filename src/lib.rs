//! Memory match (workspace facade crate).
//!
//! Re-exports the workspace crates as `memory_match::{core,input,runtime,source,store,term,types}`
//! so the binary, integration tests and benches share one import surface.

pub use memory_match_core as core;
pub use memory_match_input as input;
pub use memory_match_runtime as runtime;
pub use memory_match_source as source;
pub use memory_match_store as store;
pub use memory_match_term as term;
pub use memory_match_types as types;
