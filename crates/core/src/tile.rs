//! Tile module - one cell's face, reveal state and flip animation
//!
//! A flip is purely visual until it finishes: `start_flip` only starts the
//! clock, and `revealed` toggles when `advance` sees the animation complete.

use crate::types::{FaceId, FLIP_DURATION_SECS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    face: FaceId,
    revealed: bool,
    matched: bool,
    flipping: bool,
    flip_progress: f64,
    flip_started_at: f64,
}

impl Tile {
    /// A hidden, unmatched tile showing `face` on its front
    pub fn new(face: FaceId) -> Self {
        Self {
            face,
            revealed: false,
            matched: false,
            flipping: false,
            flip_progress: 0.0,
            flip_started_at: 0.0,
        }
    }

    pub fn face(&self) -> FaceId {
        self.face
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn matched(&self) -> bool {
        self.matched
    }

    pub fn is_flipping(&self) -> bool {
        self.flipping
    }

    /// Animation fraction in `[0, 1]`, only meaningful while flipping
    pub fn flip_progress(&self) -> f64 {
        self.flip_progress
    }

    pub(crate) fn set_matched(&mut self) {
        self.matched = true;
    }

    /// Hidden, unmatched and not mid-flip
    pub fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched && !self.flipping
    }

    /// Begin a flip animation at `now`
    pub fn start_flip(&mut self, now: f64) {
        self.flipping = true;
        self.flip_started_at = now;
        self.flip_progress = 0.0;
    }

    /// Step the flip animation
    ///
    /// Returns true exactly once per flip, on the call that completes it.
    pub fn advance(&mut self, now: f64) -> bool {
        if !self.flipping {
            return false;
        }

        let progress = ((now - self.flip_started_at) / FLIP_DURATION_SECS).clamp(0.0, 1.0);
        self.flip_progress = progress;
        if progress >= 1.0 {
            self.flipping = false;
            self.revealed = !self.revealed;
            return true;
        }
        false
    }

    /// Which side the player currently sees
    ///
    /// Mid-flip, the side being turned towards shows from the halfway point.
    pub fn shows_face(&self) -> bool {
        if self.flipping && self.flip_progress >= 0.5 {
            !self.revealed
        } else {
            self.revealed
        }
    }
}
