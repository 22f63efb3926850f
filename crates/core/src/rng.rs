//! RNG module - seedable shuffling for board dealing
//!
//! Wraps `SmallRng` so a whole session can be replayed from one `u64` seed.
//! Boards are dealt with a Fisher-Yates shuffle (`SliceRandom::shuffle`),
//! which gives every arrangement of the face values equal probability.

use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;

/// Seeded RNG used for dealing boards and picking messages
#[derive(Debug, Clone)]
pub struct TileRng {
    inner: SmallRng,
    seed: u64,
}

impl TileRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from system entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Shuffle a slice in place
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Pick one element uniformly, `None` for an empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// The seed this RNG was created with (for journaling and replays)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for TileRng {
    fn default() -> Self {
        Self::new(1)
    }
}
