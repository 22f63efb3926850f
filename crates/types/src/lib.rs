//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be used
//! by the rules engine, the terminal view and the input layer alike.
//!
//! # Grid
//!
//! - Grids are square, `grid_size x grid_size`, at most [`MAX_GRID_SIZE`] wide
//! - Coordinates are `(row, col)`, row 0 at the top, col 0 at the left
//! - Coordinates are signed so that pointer positions left of / above the board
//!   map to negative cells, which the engine rejects like any other bad cell
//!
//! # Timing Constants
//!
//! Game logic runs on timestamps in seconds (`f64`) supplied by the frame loop:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame loop interval (~60 FPS) |
//! | `FLIP_DURATION_SECS` | 0.3 | One tile flip animation |
//! | `MISMATCH_ROLLBACK_SECS` | 1.0 | Mismatched pair stays face-up this long |
//! | `LEVEL_TRANSITION_SECS` | 2.0 | "Level complete" banner duration |
//! | `COUNTDOWN_SECS` | 3.0 | Countdown before play starts |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{Coord, GameAction, Phase, MAX_GRID_SIZE};
//!
//! let c = Coord::new(1, 2);
//! assert_eq!(c.index(4), Some(6));
//! assert_eq!(Coord::new(-1, 0).index(4), None);
//!
//! assert_eq!(GameAction::Select(c).as_str(), "select");
//! assert_eq!(Phase::Menu.as_str(), "menu");
//! assert_eq!(MAX_GRID_SIZE, 5);
//! ```

/// Largest supported grid edge (5x5 = 25 cells)
pub const MAX_GRID_SIZE: usize = 5;

/// Number of cells in the largest grid
pub const MAX_CELLS: usize = MAX_GRID_SIZE * MAX_GRID_SIZE;

/// Frame loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration of one tile flip animation
pub const FLIP_DURATION_SECS: f64 = 0.3;

/// Delay before two mismatched tiles are flipped back
pub const MISMATCH_ROLLBACK_SECS: f64 = 1.0;

/// How long the level-complete banner is shown before the next level
pub const LEVEL_TRANSITION_SECS: f64 = 2.0;

/// Countdown between pressing play and the board becoming active
pub const COUNTDOWN_SECS: f64 = 3.0;

/// Points per match, multiplied by the current level
pub const POINTS_PER_MATCH: u32 = 10;


/// A grid cell position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Flat row-major index for a `grid_size x grid_size` grid
    ///
    /// Returns `None` if the coordinate lies outside the grid.
    pub fn index(&self, grid_size: usize) -> Option<usize> {
        let n = grid_size as i32;
        if self.row < 0 || self.col < 0 || self.row >= n || self.col >= n {
            return None;
        }
        Some(self.row as usize * grid_size + self.col as usize)
    }

    /// Inverse of [`Coord::index`]
    pub fn from_index(index: usize, grid_size: usize) -> Self {
        Self {
            row: (index / grid_size) as i32,
            col: (index % grid_size) as i32,
        }
    }
}

/// Opaque face value printed on a tile
///
/// A face is an index into a palette; two tiles match when their faces are
/// equal. The rules never look at what a face means, the view maps it to a
/// glyph and a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u8);

impl FaceId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Commands the frame loop can send to a session
///
/// These are produced by the input layer (mouse clicks, keys) and are the
/// only way the presentation side drives the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Turn over the tile at a grid coordinate
    Select(Coord),
    /// Leave the menu and start the countdown
    Start,
    /// Move on from a completed level
    AdvanceLevel,
    /// Back to the menu with a fresh level 1 board
    Restart,
}

impl GameAction {
    /// Short snake_case name, used in the event journal
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Select(_) => "select",
            GameAction::Start => "start",
            GameAction::AdvanceLevel => "advance_level",
            GameAction::Restart => "restart",
        }
    }
}

/// Session lifecycle phase
///
/// `menu -> countdown -> playing -> level_complete -> (playing | game_complete)`
///
/// Time-gated phases carry the timestamp they were entered at; the session
/// compares it against a threshold on every tick instead of waiting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Menu,
    Countdown { since: f64 },
    Playing,
    LevelComplete { since: f64 },
    GameComplete,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Countdown { .. } => "countdown",
            Phase::Playing => "playing",
            Phase::LevelComplete { .. } => "level_complete",
            Phase::GameComplete => "game_complete",
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }
}

/// Where the board sits on the screen
///
/// Produced by the view for the current viewport and consumed by the input
/// layer to turn pointer positions into grid coordinates. Units are terminal
/// cells; a tile occupies `tile_w x tile_h` cells including its gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub margin_x: i32,
    pub margin_y: i32,
    pub tile_w: i32,
    pub tile_h: i32,
    pub grid_size: usize,
}

impl BoardLayout {
    /// Top-left screen cell of a tile
    pub fn tile_origin(&self, coord: Coord) -> (i32, i32) {
        (
            self.margin_x + coord.col * self.tile_w,
            self.margin_y + coord.row * self.tile_h,
        )
    }

    /// Total board width in screen cells
    pub fn width(&self) -> i32 {
        self.tile_w * self.grid_size as i32
    }

    /// Total board height in screen cells
    pub fn height(&self) -> i32 {
        self.tile_h * self.grid_size as i32
    }
}
