//! Deterministic entropy source for scramble generation.
//!
//! Scrambling needs a uniform choice over valid anchors and a fair direction
//! coin. The source is seeded and explicit rather than a hidden global
//! generator: the same seed always produces the same scramble, which makes
//! puzzle sessions reproducible in tests and replayable by hosts.
//!
//! Uses ChaCha8 for speed while maintaining high-quality randomness, and
//! exposes an O(1) state capture ([`PuzzleRngState`]) so a whole session can
//! round-trip through serde.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded deterministic RNG for puzzle scrambling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "PuzzleRngState", into = "PuzzleRngState")]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniform index in `0..bound`. `bound` must be non-zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Generate a random boolean with the given probability of `true`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> PuzzleRngState {
        PuzzleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &PuzzleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// values have been generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

impl From<PuzzleRngState> for PuzzleRng {
    fn from(state: PuzzleRngState) -> Self {
        Self::from_state(&state)
    }
}

impl From<PuzzleRng> for PuzzleRngState {
    fn from(rng: PuzzleRng) -> Self {
        rng.state()
    }
}
