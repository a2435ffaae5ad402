//! Seeded instance-key minting.
//!
//! Every copy placed in a deck gets its own key so that two copies of the
//! same catalog card can be told apart (for rendering, drag handles, ...).
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical key sequence
//! - **Shareable**: `&self` minting, safe to call from profile hooks
//!
//! ```
//! use ccg_deck::core::KeyMinter;
//!
//! let a = KeyMinter::new(42);
//! let b = KeyMinter::new(42);
//! assert_eq!(a.mint(), b.mint());
//! ```

use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of per-copy instance keys.
///
/// Uses ChaCha8 for speed; keys are 64-bit so collisions within one deck
/// are not a practical concern.
#[derive(Debug)]
pub struct KeyMinter {
    inner: Mutex<ChaCha8Rng>,
    seed: Option<u64>,
}

impl KeyMinter {
    /// Create a minter with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            seed: Some(seed),
        }
    }

    /// Create a minter seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: Mutex::new(ChaCha8Rng::from_entropy()),
            seed: None,
        }
    }

    /// The fixed seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Mint the next key.
    pub fn mint(&self) -> u64 {
        let mut rng = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen()
    }
}
