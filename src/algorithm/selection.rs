//! Uniform choice sources for neighbor selection
//!
//! The generator asks for exactly one choice per carving step. Production runs
//! use a seeded PRNG; tests substitute a scripted sequence of choices.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Capability to pick one of `count` options uniformly
pub trait Chooser {
    /// Pick an index in `0..count`
    ///
    /// Callers never pass `count == 0`.
    fn choose(&mut self, count: usize) -> usize;
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn choose(&mut self, count: usize) -> usize {
        (**self).choose(count)
    }
}

/// Seeded random selector for reproducible stochastic choices
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
    seed: u64,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a selector from a freshly drawn seed
    ///
    /// The seed stays available through [`RandomSelector::seed`] so the run
    /// can be reproduced.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Seed this selector was created from
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Chooser for RandomSelector {
    fn choose(&mut self, count: usize) -> usize {
        if count <= 1 {
            return 0;
        }
        self.rng.random_range(0..count)
    }
}

/// Replays a fixed sequence of choices, wrapping around when exhausted
///
/// Each scripted value is reduced modulo the number of options, so a script
/// of zeros always takes the first unvisited neighbor in direction order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    choices: Vec<usize>,
    position: usize,
}

impl ScriptedSelector {
    /// Create a selector replaying `choices`
    pub const fn new(choices: Vec<usize>) -> Self {
        Self {
            choices,
            position: 0,
        }
    }

    /// Number of choices handed out so far
    pub const fn calls(&self) -> usize {
        self.position
    }
}

impl Chooser for ScriptedSelector {
    fn choose(&mut self, count: usize) -> usize {
        let scripted = if self.choices.is_empty() {
            0
        } else {
            self.choices
                .get(self.position % self.choices.len())
                .copied()
                .unwrap_or(0)
        };
        self.position += 1;
        if count == 0 { 0 } else { scripted % count }
    }
}
