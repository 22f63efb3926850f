//! Level module - the fixed level schedule and moving between boards
//!
//! | Level | Grid | Mask | Pairs |
//! |-------|------|------|-------|
//! | 1 | 4x4 | none | 8 |
//! | 2 | 5x5 | centre cell | 12 |
//!
//! The controller only answers "is this level done" and performs the switch
//! when asked. How long the "level complete" banner stays up is decided by
//! the caller (see [`crate::session::Session::transition_ready`]).

use crate::board::{Board, BoardError};
use crate::engine::MatchEngine;
use crate::messages;
use crate::rng::TileRng;
use crate::types::Coord;

/// Faces available to every level
pub const DEFAULT_PALETTE_SIZE: u8 = 16;

/// Shape of one level's board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelParams {
    pub grid_size: usize,
    /// Cells left without a tile
    pub mask: &'static [Coord],
    pub palette_size: u8,
}

impl LevelParams {
    pub fn required_pairs(&self) -> usize {
        required_pairs(self.grid_size, self.mask.len())
    }
}

const CENTRE_HOLE: [Coord; 1] = [Coord::new(2, 2)];

/// Levels in play order
pub const LEVELS: [LevelParams; 2] = [
    LevelParams {
        grid_size: 4,
        mask: &[],
        palette_size: DEFAULT_PALETTE_SIZE,
    },
    LevelParams {
        grid_size: 5,
        mask: &CENTRE_HOLE,
        palette_size: DEFAULT_PALETTE_SIZE,
    },
];

/// Pairs on a `grid_size x grid_size` board with `holes` masked cells
pub fn required_pairs(grid_size: usize, holes: usize) -> usize {
    (grid_size * grid_size).saturating_sub(holes) / 2
}

/// Tracks the current level and swaps boards between levels
#[derive(Debug, Clone)]
pub struct LevelController {
    /// 1-based level number
    level: u32,
}

impl LevelController {
    pub fn new() -> Self {
        Self { level: 1 }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn params(&self) -> &'static LevelParams {
        let idx = (self.level as usize).saturating_sub(1).min(LEVELS.len() - 1);
        &LEVELS[idx]
    }

    pub fn required_pairs(&self) -> usize {
        self.params().required_pairs()
    }

    pub fn is_level_complete(&self, matches_found: u32) -> bool {
        matches_found as usize == self.required_pairs()
    }

    pub fn has_next_level(&self) -> bool {
        (self.level as usize) < LEVELS.len()
    }

    pub fn is_final_level(&self) -> bool {
        !self.has_next_level()
    }

    /// Deal the board for the current level
    pub fn build_board(&self, rng: &mut TileRng) -> Result<Board, BoardError> {
        Board::build(self.params(), rng)
    }

    /// Move to the next level
    ///
    /// Does nothing and returns `Ok(false)` unless the current level is
    /// complete and another level follows. Otherwise clears the engine's
    /// selection and match count (score is kept), deals the next board and
    /// posts the level-start message.
    pub fn advance(
        &mut self,
        engine: &mut MatchEngine,
        board: &mut Board,
        rng: &mut TileRng,
    ) -> Result<bool, BoardError> {
        if !self.is_level_complete(engine.matches_found()) || !self.has_next_level() {
            return Ok(false);
        }

        let next = Board::build(&LEVELS[self.level as usize], rng)?;
        self.level += 1;
        *board = next;
        engine.reset();
        engine.set_message(messages::level_start(self.level, self.required_pairs()));
        Ok(true)
    }

    /// Back to level 1 with a zero score and a fresh board
    pub fn reset(
        &mut self,
        engine: &mut MatchEngine,
        board: &mut Board,
        rng: &mut TileRng,
    ) -> Result<(), BoardError> {
        let first = Board::build(&LEVELS[0], rng)?;
        self.level = 1;
        *board = first;
        engine.reset_score();
        Ok(())
    }
}

impl Default for LevelController {
    fn default() -> Self {
        Self::new()
    }
}
