//! Match engine - the selection / match / rollback state machine
//!
//! The engine is always in exactly one of three states:
//!
//! - **Idle**: no unmatched tile is waiting for a partner
//! - **OneSelected**: one tile turned over, waiting for the second pick
//! - **MismatchPending**: two different faces are showing; input is locked
//!   until [`MatchEngine::tick`] flips them back after
//!   [`MISMATCH_ROLLBACK_SECS`]
//!
//! Keeping the state in one enum means "a selected tile" and "a pending
//! mismatch" can never both be set.
//!
//! Rejected selections are ordinary events, not errors: they leave every
//! field untouched and report why in [`SelectOutcome::Rejected`].

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::messages::CELEBRATIONS;
use crate::rng::TileRng;
use crate::types::{Coord, MAX_CELLS, MISMATCH_ROLLBACK_SECS, POINTS_PER_MATCH};

/// Engine state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    Idle,
    OneSelected(Coord),
    MismatchPending { since: f64 },
}

/// Why a selection was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A mismatched pair is still showing
    Locked,
    OutOfBounds,
    Masked,
    Matched,
    Revealed,
    /// The tile is mid-flip
    Flipping,
    /// The session is not in play (menu, countdown, banner)
    Inactive,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::Locked => "locked",
            RejectReason::OutOfBounds => "out_of_bounds",
            RejectReason::Masked => "masked",
            RejectReason::Matched => "matched",
            RejectReason::Revealed => "revealed",
            RejectReason::Flipping => "flipping",
            RejectReason::Inactive => "inactive",
        }
    }
}

/// Result of [`MatchEngine::select_tile`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectOutcome {
    /// First tile of a pair turned over
    FirstPick(Coord),
    Matched {
        first: Coord,
        second: Coord,
        points: u32,
        message: &'static str,
    },
    /// Faces differ; both stay up until the rollback
    Mismatched { first: Coord, second: Coord },
    Rejected(RejectReason),
}

impl SelectOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectOutcome::FirstPick(_) => "first_pick",
            SelectOutcome::Matched { .. } => "matched",
            SelectOutcome::Mismatched { .. } => "mismatched",
            SelectOutcome::Rejected(_) => "rejected",
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, SelectOutcome::Rejected(_))
    }
}

/// What one [`MatchEngine::tick`] did
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// Flip animations that finished this tick
    pub flips_completed: u32,
    /// Tiles turned back face-down by a mismatch rollback
    pub rolled_back: ArrayVec<Coord, MAX_CELLS>,
}

#[derive(Debug, Clone)]
pub struct MatchEngine {
    selection: Selection,
    matches_found: u32,
    score: u32,
    message: String,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self {
            selection: Selection::Idle,
            matches_found: 0,
            score: 0,
            message: String::new(),
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The tile waiting for its partner, if any
    pub fn selected_tile(&self) -> Option<Coord> {
        match self.selection {
            Selection::OneSelected(c) => Some(c),
            _ => None,
        }
    }

    /// When the pending mismatch was recorded, if one is showing
    pub fn pending_mismatch(&self) -> Option<f64> {
        match self.selection {
            Selection::MismatchPending { since } => Some(since),
            _ => None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.pending_mismatch().is_some()
    }

    pub fn matches_found(&self) -> u32 {
        self.matches_found
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl AsRef<str>) {
        self.message.clear();
        self.message.push_str(message.as_ref());
    }

    /// Turn over the tile at `coord`
    ///
    /// A first pick records the coordinate. A second pick either matches
    /// (both tiles marked, `POINTS_PER_MATCH * level` added) or starts a
    /// pending mismatch. Selections while a mismatch is showing, or on a
    /// tile that is missing, face-up, matched or mid-flip, change nothing.
    pub fn select_tile(
        &mut self,
        board: &mut Board,
        coord: Coord,
        now: f64,
        level: u32,
        rng: &mut TileRng,
    ) -> SelectOutcome {
        let prev = match self.selection {
            Selection::MismatchPending { .. } => {
                return SelectOutcome::Rejected(RejectReason::Locked);
            }
            Selection::Idle => None,
            Selection::OneSelected(c) => Some(c),
        };

        let reject = match board.cell_at(coord) {
            None if board.is_masked(coord) => Some(RejectReason::Masked),
            None => Some(RejectReason::OutOfBounds),
            Some(t) if t.matched() => Some(RejectReason::Matched),
            Some(t) if t.is_flipping() => Some(RejectReason::Flipping),
            Some(t) if t.revealed() => Some(RejectReason::Revealed),
            Some(_) => None,
        };
        if let Some(reason) = reject {
            return SelectOutcome::Rejected(reason);
        }

        if let Some(tile) = board.cell_at_mut(coord) {
            tile.start_flip(now);
        }

        let Some(first) = prev else {
            self.selection = Selection::OneSelected(coord);
            return SelectOutcome::FirstPick(coord);
        };

        let first_face = board.cell_at(first).map(|t| t.face());
        let second_face = board.cell_at(coord).map(|t| t.face());

        if first_face.is_some() && first_face == second_face {
            if let Some((a, b)) = board.pair_mut(first, coord) {
                a.set_matched();
                b.set_matched();
            }
            let points = POINTS_PER_MATCH * level;
            self.matches_found += 1;
            self.score += points;
            let message = rng.pick(&CELEBRATIONS).copied().unwrap_or(CELEBRATIONS[0]);
            self.set_message(message);
            self.selection = Selection::Idle;
            SelectOutcome::Matched {
                first,
                second: coord,
                points,
                message,
            }
        } else {
            self.selection = Selection::MismatchPending { since: now };
            SelectOutcome::Mismatched {
                first,
                second: coord,
            }
        }
    }

    /// Per-frame update
    ///
    /// Advances every flip animation, then, once a pending mismatch has been
    /// showing for longer than [`MISMATCH_ROLLBACK_SECS`], starts flipping
    /// every face-up unmatched tile back down and unlocks input.
    pub fn tick(&mut self, board: &mut Board, now: f64) -> TickOutcome {
        let mut out = TickOutcome::default();

        for (_, tile) in board.tiles_mut() {
            if tile.advance(now) {
                out.flips_completed += 1;
            }
        }

        if let Selection::MismatchPending { since } = self.selection {
            if now - since > MISMATCH_ROLLBACK_SECS {
                for (coord, tile) in board.tiles_mut() {
                    if tile.revealed() && !tile.matched() && !tile.is_flipping() {
                        tile.start_flip(now);
                        out.rolled_back.push(coord);
                    }
                }
                self.selection = Selection::Idle;
            }
        }

        out
    }

    /// Clear selection state and the match count for a new board
    pub fn reset(&mut self) {
        self.selection = Selection::Idle;
        self.matches_found = 0;
    }

    /// [`MatchEngine::reset`] plus a zero score
    pub fn reset_score(&mut self) {
        self.reset();
        self.score = 0;
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
