//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a
//! [`core::GameSnapshot`] into a framebuffer of styled cells and the
//! renderer flushes the difference to the terminal. No widget toolkit.
//!
//! The view also owns the board geometry ([`GameView::board_layout`]) so
//! the input layer can map mouse clicks onto exactly what was drawn.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{face_color, face_glyph, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
