//! Deterministic random number generation for duels.
//!
//! ## Key Features
//!
//! - **Injectable**: every engine operation draws through [`RandomSource`],
//!   so tests can script exact sequences with [`ScriptedRng`]
//! - **Deterministic**: same seed produces identical sequence
//! - **Forkable**: derive independent streams (one per game, one for flavor text)
//!
//! ```
//! use shell_duel::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut flavor = rng.fork();
//!
//! // Forks are deterministic: same parent seed, same fork sequence
//! let mut rng2 = GameRng::new(42);
//! let mut flavor2 = rng2.fork();
//! assert_eq!(flavor.next_below(100), flavor2.next_below(100));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness consumed by the engine.
///
/// Implementations must return `next_f64` in `[0, 1)` and `next_below(n)`
/// in `0..n` for `n > 0`.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `0..bound`.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Bernoulli trial: `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Fisher–Yates shuffle, back to front.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }
}

impl RandomSource for GameRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn next_below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// A random source that replays fixed sequences.
///
/// Floats and integers come from separate queues. Once a queue runs dry,
/// `next_f64` yields `0.0` and `next_below` yields `0`; [`ScriptedRng::drained`]
/// tells whether the script was consumed exactly.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    floats: VecDeque<f64>,
    ints: VecDeque<usize>,
    floats_drawn: usize,
    ints_drawn: usize,
}

impl ScriptedRng {
    /// Create a script from float and integer sequences.
    #[must_use]
    pub fn new(floats: impl IntoIterator<Item = f64>, ints: impl IntoIterator<Item = usize>) -> Self {
        Self {
            floats: floats.into_iter().collect(),
            ints: ints.into_iter().collect(),
            floats_drawn: 0,
            ints_drawn: 0,
        }
    }

    /// Script of floats only.
    #[must_use]
    pub fn floats(floats: impl IntoIterator<Item = f64>) -> Self {
        Self::new(floats, std::iter::empty())
    }

    /// Script of integers only.
    #[must_use]
    pub fn ints(ints: impl IntoIterator<Item = usize>) -> Self {
        Self::new(std::iter::empty(), ints)
    }

    /// Number of `next_f64` draws so far.
    #[must_use]
    pub fn floats_drawn(&self) -> usize {
        self.floats_drawn
    }

    /// Number of `next_below` draws so far.
    #[must_use]
    pub fn ints_drawn(&self) -> usize {
        self.ints_drawn
    }

    /// True when both queues are empty.
    #[must_use]
    pub fn drained(&self) -> bool {
        self.floats.is_empty() && self.ints.is_empty()
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        self.floats_drawn += 1;
        self.floats.pop_front().unwrap_or(0.0)
    }

    fn next_below(&mut self, bound: usize) -> usize {
        self.ints_drawn += 1;
        self.ints.pop_front().map_or(0, |n| n % bound.max(1))
    }
}
