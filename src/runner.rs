//! Runner: one session plus its journal, driven by the frame loop.
//!
//! The binary owns the terminal and the clock; the runner owns the game.
//! Every lifecycle change the session makes is written to the journal here,
//! so the frame loop only forwards actions and timestamps.

use std::io::Write;

use anyhow::Result;

use crate::core::{Session, TickOutcome};
use crate::journal::{Journal, JournalEvent};
use crate::types::{GameAction, Phase};

pub struct Runner<W: Write> {
    session: Session,
    journal: Journal<W>,
}

impl<W: Write> Runner<W> {
    pub fn new(session: Session, mut journal: Journal<W>, tick_ms: u32) -> Self {
        journal.record(
            0,
            &JournalEvent::SessionStart {
                seed: session.seed(),
                tick_ms,
            },
        );
        Self { session, journal }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn journal(&self) -> &Journal<W> {
        &self.journal
    }

    pub fn into_journal(self) -> Journal<W> {
        self.journal
    }

    /// Apply one input action at `now` seconds. Returns whether it changed
    /// anything.
    pub fn apply(&mut self, action: GameAction, now: f64) -> Result<bool> {
        let ts = ts_ms(now);
        match action {
            GameAction::Select(coord) => {
                let outcome = self.session.select(coord, now);
                self.journal.record(
                    ts,
                    &JournalEvent::select(coord, &outcome, self.session.score()),
                );
                Ok(!outcome.is_rejected())
            }
            GameAction::Start => {
                let replay = self.session.phase() == Phase::GameComplete;
                let started = self.session.apply_action(action, now)?;
                if replay {
                    self.record_reset(ts);
                }
                if started {
                    self.journal.record(ts, &JournalEvent::Start);
                }
                Ok(started)
            }
            GameAction::AdvanceLevel => self.advance(now),
            GameAction::Restart => {
                self.session.reset_session()?;
                self.record_reset(ts);
                Ok(true)
            }
        }
    }

    /// Per-frame update: runs the session tick, journals what it did and
    /// moves past a level banner once it has been up long enough.
    pub fn tick(&mut self, now: f64) -> Result<TickOutcome> {
        let ts = ts_ms(now);
        let before = self.session.phase();
        let out = self.session.tick(now);

        if !out.rolled_back.is_empty() {
            self.journal.record(
                ts,
                &JournalEvent::Rollback {
                    tiles: out.rolled_back.len() as u32,
                },
            );
        }

        match (before, self.session.phase()) {
            (Phase::Countdown { .. }, Phase::Playing) => {
                self.journal.record(
                    ts,
                    &JournalEvent::CountdownDone {
                        level: self.session.level(),
                    },
                );
            }
            (Phase::Playing, Phase::LevelComplete { .. }) => {
                self.journal.record(
                    ts,
                    &JournalEvent::LevelComplete {
                        level: self.session.level(),
                        score: self.session.score(),
                        elapsed_secs: self.session.elapsed(now),
                    },
                );
            }
            _ => {}
        }

        if self.session.transition_ready(now) {
            self.advance(now)?;
        }
        Ok(out)
    }

    pub fn flush(&mut self) {
        self.journal.flush();
    }

    fn advance(&mut self, now: f64) -> Result<bool> {
        let ts = ts_ms(now);
        // A level finished by the last match but not yet seen by a tick is
        // closed inside advance_level, so its record is taken here.
        let unseen = (self.session.phase() == Phase::Playing).then(|| {
            JournalEvent::LevelComplete {
                level: self.session.level(),
                score: self.session.score(),
                elapsed_secs: self.session.elapsed(now),
            }
        });
        if !self.session.advance_level(now)? {
            return Ok(false);
        }
        if let Some(event) = unseen {
            self.journal.record(ts, &event);
        }

        if self.session.game_complete() {
            self.journal.record(
                ts,
                &JournalEvent::GameComplete {
                    score: self.session.score(),
                    elapsed_secs: self.session.elapsed(now),
                    high_score: self.session.high_score(),
                },
            );
        } else {
            self.journal.record(
                ts,
                &JournalEvent::LevelStart {
                    level: self.session.level(),
                    grid_size: self.session.board().grid_size(),
                    pairs: self.session.levels().required_pairs(),
                },
            );
        }
        Ok(true)
    }

    fn record_reset(&mut self, ts: u64) {
        self.journal.record(
            ts,
            &JournalEvent::Reset {
                high_score: self.session.high_score(),
            },
        );
    }
}

fn ts_ms(now: f64) -> u64 {
    (now.max(0.0) * 1000.0) as u64
}
