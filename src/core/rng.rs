//! Seeded random source for the environment's replies.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical environment moves
//! - **Context streams**: Independent streams for agent exploration vs environment
//! - **Checkpointable**: O(1) state capture and restore
//!
//! ```
//! use numeric_tictactoe::core::GameRng;
//!
//! let moves = [1u8, 3, 5, 7, 9];
//! let mut rng1 = GameRng::new(7);
//! let mut rng2 = GameRng::new(7);
//! assert_eq!(rng1.choose(&moves), rng2.choose(&moves));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derive a stream for a named purpose (e.g. "agent", "environment").
    ///
    /// The same context always yields the same stream from the same seed,
    /// on every platform and toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Choose a uniformly random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// FNV-1a over the seed's little-endian bytes and the context, finished
/// with the SplitMix64 mixer.
fn context_seed(seed: u64, context: &str) -> u64 {
    let hash = seed
        .to_le_bytes()
        .iter()
        .chain(context.as_bytes())
        .fold(FNV_OFFSET, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));

    let mut z = hash.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}
