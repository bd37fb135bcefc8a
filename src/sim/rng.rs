//! Injectable randomness for spawning and ghost movement
//!
//! Everything random in the simulation goes through [`RandomSource`], so a
//! seeded [`SimRng`] replays a run exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Uniform integer in `[low, high)`. Callers guarantee `low < high`.
    fn next_in(&mut self, low: i32, high: i32) -> i32;
}

/// Seeded PCG32 generator
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed drawn from the thread-local OS-seeded generator
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    fn next_in(&mut self, low: i32, high: i32) -> i32 {
        self.rng.random_range(low..high)
    }
}

/// Replays a fixed list of offsets, cycling when exhausted.
///
/// Each draw returns `low + offset % (high - low)`.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRng {
    offsets: Vec<u32>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(offsets: Vec<u32>) -> Self {
        Self { offsets, cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn next_in(&mut self, low: i32, high: i32) -> i32 {
        let offset = self.offsets[self.cursor % self.offsets.len()];
        self.cursor += 1;
        low + (offset % (high - low) as u32) as i32
    }
}
