//! Session module - one play session from the menu to the final score
//!
//! The session owns everything the game mutates: the board, the match
//! engine, the level controller, the RNG and the clocks. The frame loop holds
//! one `Session` and drives it with timestamps; there is no global state.
//!
//! Every delay (countdown, level banner) is stored as the timestamp it
//! started at and compared against a threshold on each tick.

use crate::board::{Board, BoardError};
use crate::engine::{MatchEngine, RejectReason, SelectOutcome, TickOutcome};
use crate::level::LevelController;
use crate::messages;
use crate::rng::TileRng;
use crate::snapshot::{GameSnapshot, TileSnapshot};
use crate::types::{Coord, GameAction, Phase, COUNTDOWN_SECS, LEVEL_TRANSITION_SECS};

#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    board: Board,
    engine: MatchEngine,
    levels: LevelController,
    rng: TileRng,
    /// Play time from finished stretches (earlier levels)
    banked_secs: f64,
    /// Start of the current play stretch, only meaningful while playing
    play_since: f64,
    game_active: bool,
    game_complete: bool,
    high_score: u32,
    best_time: Option<f64>,
}

impl Session {
    /// Create a session in the menu with a level 1 board dealt from `seed`
    pub fn new(seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(TileRng::new(seed))
    }

    pub fn with_rng(mut rng: TileRng) -> Result<Self, BoardError> {
        let levels = LevelController::new();
        let board = levels.build_board(&mut rng)?;
        let mut engine = MatchEngine::new();
        engine.set_message(messages::WELCOME);

        Ok(Self {
            phase: Phase::Menu,
            board,
            engine,
            levels,
            rng,
            banked_secs: 0.0,
            play_since: 0.0,
            game_active: false,
            game_complete: false,
            high_score: 0,
            best_time: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn level(&self) -> u32 {
        self.levels.level()
    }

    pub fn levels(&self) -> &LevelController {
        &self.levels
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn matches_found(&self) -> u32 {
        self.engine.matches_found()
    }

    pub fn message(&self) -> &str {
        self.engine.message()
    }

    pub fn game_active(&self) -> bool {
        self.game_active
    }

    pub fn game_complete(&self) -> bool {
        self.game_complete
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn best_time(&self) -> Option<f64> {
        self.best_time
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_level_complete(&self) -> bool {
        self.levels.is_level_complete(self.engine.matches_found())
    }

    /// Seconds of play so far, paused outside of the playing phase
    pub fn elapsed(&self, now: f64) -> f64 {
        match self.phase {
            Phase::Playing => self.banked_secs + (now - self.play_since).max(0.0),
            _ => self.banked_secs,
        }
    }

    /// Countdown digit to show (3, 2, 1), `None` outside the countdown
    pub fn countdown_remaining(&self, now: f64) -> Option<u32> {
        match self.phase {
            Phase::Countdown { since } => {
                let gone = (now - since).max(0.0).floor();
                Some((COUNTDOWN_SECS - gone).max(1.0) as u32)
            }
            _ => None,
        }
    }

    /// Leave the menu and start the countdown
    pub fn start(&mut self, now: f64) -> bool {
        if self.phase != Phase::Menu {
            return false;
        }
        self.phase = Phase::Countdown { since: now };
        self.banked_secs = 0.0;
        true
    }

    /// Forward a tile pick to the engine while playing
    pub fn select(&mut self, coord: Coord, now: f64) -> SelectOutcome {
        if !self.phase.is_playing() {
            return SelectOutcome::Rejected(RejectReason::Inactive);
        }
        let level = self.levels.level();
        self.engine
            .select_tile(&mut self.board, coord, now, level, &mut self.rng)
    }

    /// Per-frame update
    ///
    /// Ends the countdown, runs the engine (animations and mismatch
    /// rollback) and notices a finished level. Animations keep running on
    /// the banner and final screens so the last pair finishes turning over.
    pub fn tick(&mut self, now: f64) -> TickOutcome {
        match self.phase {
            Phase::Menu => TickOutcome::default(),
            Phase::Countdown { since } => {
                if now - since >= COUNTDOWN_SECS {
                    self.phase = Phase::Playing;
                    self.game_active = true;
                    self.play_since = since + COUNTDOWN_SECS;
                    self.engine.set_message(messages::GO);
                }
                TickOutcome::default()
            }
            Phase::Playing => {
                let out = self.engine.tick(&mut self.board, now);
                if self.is_level_complete() {
                    self.finish_level(now);
                }
                out
            }
            Phase::LevelComplete { .. } | Phase::GameComplete => {
                self.engine.tick(&mut self.board, now)
            }
        }
    }

    /// True once the level-complete banner has been up long enough
    pub fn transition_ready(&self, now: f64) -> bool {
        match self.phase {
            Phase::LevelComplete { since } => now - since >= LEVEL_TRANSITION_SECS,
            _ => false,
        }
    }

    /// Move past a completed level
    ///
    /// Deals the next board and resumes play, or ends the game after the
    /// final level. Returns `Ok(false)` without touching anything when the
    /// current level is not complete.
    pub fn advance_level(&mut self, now: f64) -> Result<bool, BoardError> {
        if !self.is_level_complete() {
            return Ok(false);
        }
        match self.phase {
            Phase::Playing => self.finish_level(now),
            Phase::LevelComplete { .. } => {}
            _ => return Ok(false),
        }

        if self.levels.has_next_level() {
            let advanced = self
                .levels
                .advance(&mut self.engine, &mut self.board, &mut self.rng)?;
            if advanced {
                self.phase = Phase::Playing;
                self.play_since = now;
            }
            return Ok(advanced);
        }

        self.phase = Phase::GameComplete;
        self.game_active = false;
        self.game_complete = true;
        self.record_bests();
        self.engine.set_message(messages::GAME_COMPLETE);
        Ok(true)
    }

    /// Back to the menu with a fresh level 1 board
    ///
    /// Score, time and matches are cleared; the high score and best time
    /// survive for the rest of the process.
    pub fn reset_session(&mut self) -> Result<(), BoardError> {
        self.record_bests();
        self.levels
            .reset(&mut self.engine, &mut self.board, &mut self.rng)?;
        self.phase = Phase::Menu;
        self.banked_secs = 0.0;
        self.play_since = 0.0;
        self.game_active = false;
        self.game_complete = false;
        self.engine.set_message(messages::WELCOME);
        Ok(())
    }

    /// Dispatch a command from the input layer
    ///
    /// Returns whether anything changed. `Start` on the final screen plays
    /// again from level 1.
    pub fn apply_action(&mut self, action: GameAction, now: f64) -> Result<bool, BoardError> {
        match action {
            GameAction::Select(coord) => Ok(!self.select(coord, now).is_rejected()),
            GameAction::Start => {
                if self.phase == Phase::GameComplete {
                    self.reset_session()?;
                }
                Ok(self.start(now))
            }
            GameAction::AdvanceLevel => self.advance_level(now),
            GameAction::Restart => {
                self.reset_session()?;
                Ok(true)
            }
        }
    }

    fn finish_level(&mut self, now: f64) {
        self.banked_secs += (now - self.play_since).max(0.0);
        self.phase = Phase::LevelComplete { since: now };
        self.engine
            .set_message(messages::level_complete(self.levels.level()));
    }

    fn record_bests(&mut self) {
        self.high_score = self.high_score.max(self.engine.score());
        if self.game_complete {
            let t = self.banked_secs;
            self.best_time = Some(self.best_time.map_or(t, |best| best.min(t)));
        }
    }

    /// Write render data for `now` into an existing snapshot
    pub fn snapshot_into(&self, now: f64, out: &mut GameSnapshot) {
        out.grid_size = self.board.grid_size();
        for row in out.tiles.iter_mut() {
            row.fill(None);
        }
        for (coord, tile) in self.board.tiles() {
            out.tiles[coord.row as usize][coord.col as usize] = Some(TileSnapshot::from(tile));
        }

        out.selected = self.engine.selected_tile();
        out.locked = self.engine.is_locked();
        out.phase = self.phase;
        out.countdown = self.countdown_remaining(now);
        out.level = self.levels.level();
        out.final_level = self.levels.is_final_level();
        out.score = self.engine.score();
        out.high_score = self.high_score.max(self.engine.score());
        out.elapsed_secs = self.elapsed(now);
        out.best_time_secs = self.best_time;
        out.matches_found = self.engine.matches_found();
        out.required_pairs = self.levels.required_pairs() as u32;
        out.game_active = self.game_active;
        out.game_complete = self.game_complete;
        out.message.clear();
        out.message.push_str(self.engine.message());
    }

    pub fn snapshot(&self, now: f64) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(now, &mut s);
        s
    }
}
