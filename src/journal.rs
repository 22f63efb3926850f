//! JSONL event journal.
//!
//! One JSON object per line, each with a `ts_ms` timestamp (milliseconds
//! since the session started) and an `event` tag:
//!
//! ```text
//! {"ts_ms":0,"event":"session_start","seed":7,"tick_ms":16}
//! {"ts_ms":3412,"event":"select","row":0,"col":2,"outcome":"first_pick","score":0}
//! ```
//!
//! The journal is best effort: the first failed write closes it and the
//! game carries on without it.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::SelectOutcome;
use crate::types::Coord;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JournalEvent {
    SessionStart {
        seed: u64,
        tick_ms: u32,
    },
    Start,
    CountdownDone {
        level: u32,
    },
    Select {
        row: i32,
        col: i32,
        outcome: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<&'static str>,
        score: u32,
    },
    Rollback {
        tiles: u32,
    },
    LevelComplete {
        level: u32,
        score: u32,
        elapsed_secs: f64,
    },
    LevelStart {
        level: u32,
        grid_size: usize,
        pairs: usize,
    },
    GameComplete {
        score: u32,
        elapsed_secs: f64,
        high_score: u32,
    },
    Reset {
        high_score: u32,
    },
}

impl JournalEvent {
    pub fn select(coord: Coord, outcome: &SelectOutcome, score: u32) -> Self {
        let reason = match outcome {
            SelectOutcome::Rejected(r) => Some(r.as_str()),
            _ => None,
        };
        JournalEvent::Select {
            row: coord.row,
            col: coord.col,
            outcome: outcome.as_str(),
            reason,
            score,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            JournalEvent::SessionStart { .. } => "session_start",
            JournalEvent::Start => "start",
            JournalEvent::CountdownDone { .. } => "countdown_done",
            JournalEvent::Select { .. } => "select",
            JournalEvent::Rollback { .. } => "rollback",
            JournalEvent::LevelComplete { .. } => "level_complete",
            JournalEvent::LevelStart { .. } => "level_start",
            JournalEvent::GameComplete { .. } => "game_complete",
            JournalEvent::Reset { .. } => "reset",
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    ts_ms: u64,
    #[serde(flatten)]
    event: &'a JournalEvent,
}

pub struct Journal<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl Journal<BufWriter<File>> {
    /// Append to `path`, or a disabled journal when `path` is `None`.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::disabled());
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow!("journal: open {} failed: {}", path, e))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> Journal<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, ts_ms: u64, event: &JournalEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &Record { ts_ms, event }).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }

    /// The underlying writer, unless a write failed or the journal was
    /// disabled.
    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}
