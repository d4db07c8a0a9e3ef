//! Deterministic random number generation for scrambling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical scrambles
//! - **Forkable**: Independent streams for parallel episodes
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use cube_rl::core::CubeRng;
//!
//! let mut rng = CubeRng::new(42);
//! let mut worker_rng = rng.fork();
//!
//! // Forks are deterministic - same seed and fork counter, same stream
//! let mut rng2 = CubeRng::new(42);
//! let mut worker_rng2 = rng2.fork();
//! assert_eq!(worker_rng.gen_index(12), worker_rng2.gen_index(12));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable RNG passed explicitly to everything that needs randomness.
///
/// Uses ChaCha8 for speed; there is no process-wide generator anywhere in
/// the crate.
#[derive(Clone, Debug)]
pub struct CubeRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl CubeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence, so one
    /// master seed can drive many episodes, each owning its own grid.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a named purpose.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let context_seed = context
            .bytes()
            .fold(splitmix64(self.seed), |state, byte| splitmix64(state ^ u64::from(byte)));

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Uniform index in `0..bound`.
    ///
    /// `bound` must be non-zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> CubeRngState {
        CubeRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &CubeRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how many values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = CubeRng::new(42);
        let mut rng2 = CubeRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = CubeRng::new(1);
        let mut rng2 = CubeRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_index_bounds() {
        let mut rng = CubeRng::new(7);
        for _ in 0..1000 {
            assert!(rng.gen_index(6) < 6);
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = CubeRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = CubeRng::new(42);
        let mut rng2 = CubeRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
    }

    #[test]
    fn test_context_streams() {
        let rng = CubeRng::new(42);
        let mut scramble = rng.for_context("scramble");
        let mut other = rng.for_context("agent");
        let mut scramble_again = CubeRng::new(42).for_context("scramble");

        let seq1: Vec<_> = (0..10).map(|_| scramble.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| other.gen_index(1000)).collect();
        let seq3: Vec<_> = (0..10).map(|_| scramble_again.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
        assert_eq!(seq1, seq3);
    }

    #[test]
    fn test_context_seed_is_pinned() {
        // Env seeds must replay the same scrambles across releases.
        assert_eq!(CubeRng::new(5).for_context("scramble").seed(), 0xe31f_fc41_cf6c_1ba7);
        assert_eq!(CubeRng::new(42).for_context("scramble").seed(), 0xa11f_7eb6_aabf_9e6a);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = CubeRng::new(42);
        for _ in 0..100 {
            rng.gen_index(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_index(1000)).collect();

        let mut restored = CubeRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_index(1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = CubeRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CubeRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
