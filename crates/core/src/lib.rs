//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory game: tiles and their flip
//! animation, board generation, the match engine and level progression.
//! It has **zero dependencies** on terminals, input devices or files, making it:
//!
//! - **Deterministic**: The same seed deals the same boards and messages
//! - **Testable**: Every rule is driven by explicit timestamps, no clocks inside
//! - **Portable**: The terminal front end is just one possible presentation
//! - **Non-blocking**: Delays are recorded timestamps checked on each tick
//!
//! # Module Structure
//!
//! - [`tile`]: Per-cell reveal state and flip animation
//! - [`board`]: Grid of tiles, pair dealing, coordinate lookups
//! - [`engine`]: Selection / match / mismatch-rollback state machine
//! - [`level`]: Level schedule and transitions between boards
//! - [`session`]: One play session from menu to final score
//! - [`rng`]: Seedable shuffling
//! - [`snapshot`]: Plain render data for the view
//!
//! # Example
//!
//! ```
//! use memory_match_core::Session;
//! use memory_match_types::{Coord, Phase};
//!
//! let mut session = Session::new(7).unwrap();
//! session.start(0.0);
//! session.tick(3.0);
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! session.select(Coord::new(0, 0), 3.1);
//! assert_eq!(session.engine().selected_tile(), Some(Coord::new(0, 0)));
//! ```
//!
//! # Timing
//!
//! The frame loop calls [`Session::tick`](session::Session::tick) once per
//! frame with a monotonically increasing timestamp in seconds. Flip
//! animations, mismatch rollback, the countdown and the level banner are all
//! resolved from that timestamp.

pub mod board;
pub mod engine;
pub mod level;
pub mod messages;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod tile;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use engine::{MatchEngine, RejectReason, SelectOutcome, Selection, TickOutcome};
pub use level::{required_pairs, LevelController, LevelParams, DEFAULT_PALETTE_SIZE, LEVELS};
pub use rng::TileRng;
pub use session::Session;
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use tile::Tile;
