//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`]s.
//! Nothing here knows about the session's state: a click always becomes a
//! `Select`, and the session decides whether it means anything.

pub mod map;
pub mod pointer;

pub use memory_match_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
pub use pointer::to_coord;
