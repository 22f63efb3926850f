//! Memory match (workspace facade crate).
//!
//! Re-exports the game crates under `memory_match::{core,input,term,types}`
//! and holds the application layer: configuration, the event journal and
//! the runner that ties a session to both.

pub use memory_match_core as core;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;

pub mod config;
pub mod journal;
pub mod runner;
