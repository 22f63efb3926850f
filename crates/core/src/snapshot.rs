use crate::tile::Tile;
use crate::types::{Coord, FaceId, Phase, MAX_GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSnapshot {
    pub face: FaceId,
    pub revealed: bool,
    pub matched: bool,
    pub flipping: bool,
    pub progress: f64,
    /// Side currently visible (flips at the animation midpoint)
    pub face_up: bool,
}

impl From<&Tile> for TileSnapshot {
    fn from(value: &Tile) -> Self {
        Self {
            face: value.face(),
            revealed: value.revealed(),
            matched: value.matched(),
            flipping: value.is_flipping(),
            progress: value.flip_progress(),
            face_up: value.shows_face(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub grid_size: usize,
    /// `tiles[row][col]`, `None` for masked or unused cells
    pub tiles: [[Option<TileSnapshot>; MAX_GRID_SIZE]; MAX_GRID_SIZE],
    pub selected: Option<Coord>,
    /// A mismatched pair is showing and input is ignored
    pub locked: bool,
    pub phase: Phase,
    pub countdown: Option<u32>,
    pub level: u32,
    pub final_level: bool,
    pub score: u32,
    pub high_score: u32,
    pub elapsed_secs: f64,
    pub best_time_secs: Option<f64>,
    pub matches_found: u32,
    pub required_pairs: u32,
    pub game_active: bool,
    pub game_complete: bool,
    pub message: String,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid_size = 0;
        self.tiles = [[None; MAX_GRID_SIZE]; MAX_GRID_SIZE];
        self.selected = None;
        self.locked = false;
        self.phase = Phase::Menu;
        self.countdown = None;
        self.level = 1;
        self.final_level = false;
        self.score = 0;
        self.high_score = 0;
        self.elapsed_secs = 0.0;
        self.best_time_secs = None;
        self.matches_found = 0;
        self.required_pairs = 0;
        self.game_active = false;
        self.game_complete = false;
        self.message.clear();
    }

    pub fn tile(&self, coord: Coord) -> Option<&TileSnapshot> {
        coord.index(self.grid_size)?;
        self.tiles[coord.row as usize][coord.col as usize].as_ref()
    }

    pub fn any_flipping(&self) -> bool {
        self.tiles
            .iter()
            .flatten()
            .flatten()
            .any(|t| t.flipping)
    }

    /// Nothing on screen moves by itself (menu or final screen, no flips)
    pub fn is_static(&self) -> bool {
        matches!(self.phase, Phase::Menu | Phase::GameComplete) && !self.any_flipping()
    }

    /// Cheap hash of everything the view draws
    ///
    /// Used to skip redrawing identical frames. Elapsed time is folded in at
    /// the displayed precision (tenths of a second), flip progress in 1/64ths.
    pub fn fingerprint(&self) -> u64 {
        use std::hash::Hasher;

        let mut h = Fnv1aHasher::new();
        h.write_u8(self.phase_tag());
        h.write_u32(self.countdown.unwrap_or(0));
        h.write_u32(self.level);
        h.write_u32(self.score);
        h.write_u32(self.high_score);
        h.write_u32(self.matches_found);
        h.write_u64((self.elapsed_secs * 10.0) as u64);
        h.write_u8(self.locked as u8);
        for t in self.tiles.iter().flatten() {
            match t {
                None => h.write_u8(0),
                Some(t) => {
                    h.write_u8(1);
                    h.write_u8(t.face.0);
                    h.write_u8((t.revealed as u8) | (t.matched as u8) << 1 | (t.flipping as u8) << 2);
                    h.write_u8((t.progress * 64.0) as u8);
                }
            }
        }
        h.write(self.message.as_bytes());
        h.finish()
    }

    fn phase_tag(&self) -> u8 {
        match self.phase {
            Phase::Menu => 0,
            Phase::Countdown { .. } => 1,
            Phase::Playing => 2,
            Phase::LevelComplete { .. } => 3,
            Phase::GameComplete => 4,
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid_size: 0,
            tiles: [[None; MAX_GRID_SIZE]; MAX_GRID_SIZE],
            selected: None,
            locked: false,
            phase: Phase::Menu,
            countdown: None,
            level: 1,
            final_level: false,
            score: 0,
            high_score: 0,
            elapsed_secs: 0.0,
            best_time_secs: None,
            matches_found: 0,
            required_pairs: 0,
            game_active: false,
            game_complete: false,
            message: String::new(),
        };
        s.clear();
        s
    }
}

/// FNV-1a, 64 bit
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl std::hash::Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}
