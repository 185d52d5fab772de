//! Deterministic Random Number Stream
//!
//! Uses the xoroshiro128+ algorithm for fast, high-quality, deterministic
//! randomness. Given the same seed, produces an identical sequence on all
//! platforms, so a maze layout is fully described by its seed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::hash::hash_with_domain;

/// Domain separator keeping phrase-derived seeds disjoint from grid digests.
const SEED_DOMAIN: &[u8] = b"MAZECAST_SEED_V1";

/// Errors from bounded integer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RngError {
    /// The caller asked for a draw from an empty range.
    #[error("invalid range: min ({min}) is greater than max ({max})")]
    InvalidRange {
        /// Lower bound as requested.
        min: i32,
        /// Upper bound as requested.
        max: i32,
    },
}

/// Deterministic PRNG stream using the xoroshiro128+ algorithm.
///
/// # Determinism Guarantee
///
/// Given the same seed, this stream will produce the exact same sequence
/// of random numbers on any platform (x86, ARM, WASM). Every consumer of
/// randomness in this crate draws from a `RandomStream`, never from an
/// ambient source.
///
/// # Example
///
/// ```
/// use mazecast::core::rng::RandomStream;
///
/// let mut stream = RandomStream::new(2718);
/// let value = stream.next_u64();
/// assert_eq!(value, 10516023897661500129); // Always the same!
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RandomStream {
    state: [u64; 2],
}

impl Default for RandomStream {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomStream {
    /// Create a new stream from a 64-bit seed.
    ///
    /// Uses SplitMix64 to initialize the internal state, ensuring
    /// good distribution even from weak seeds (0, 1, 2, ...).
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // Ensure state is never all zeros
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    /// Discard the current state and restart from `seed`, exactly as if
    /// the stream had been freshly constructed.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Generate the next 64-bit random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Generate a random u32.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// Draw a value in `[0, span)`.
    ///
    /// Simple modulo - slight bias for very large spans, but acceptable
    /// for the grid dimensions drawn here.
    #[inline]
    fn bounded(&mut self, span: u64) -> u64 {
        if span == 0 {
            return 0;
        }
        self.next_u64() % span
    }

    /// Draw an integer uniformly from `[min, max]` inclusive.
    ///
    /// Consumes exactly one draw, including when `min == max`.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidRange`] if `min > max`.
    pub fn uniform_int(&mut self, min: i32, max: i32) -> Result<i32, RngError> {
        if min > max {
            return Err(RngError::InvalidRange { min, max });
        }
        let span = (max as i64 - min as i64 + 1) as u64;
        Ok((min as i64 + self.bounded(span) as i64) as i32)
    }

    /// Draw an odd integer uniformly from `[min, max]`.
    ///
    /// The bounds are first snapped inward to the nearest odd values. If
    /// that snap inverts the range (no odd value exists between `min` and
    /// `max`), the snapped minimum is returned as-is and no draw is
    /// consumed; the result can then sit outside the requested range
    /// (`uniform_odd(4, 4)` returns `5`). Wall placement depends on this
    /// exact fallback, so it is part of the contract rather than an error.
    pub fn uniform_odd(&mut self, min: i32, max: i32) -> i32 {
        let mut lo = min;
        let mut hi = max;
        if lo % 2 == 0 {
            lo += 1;
        }
        if hi % 2 == 0 {
            hi -= 1;
        }
        if lo > hi {
            return lo;
        }
        let count = ((hi as i64 - lo as i64) / 2 + 1) as u64;
        (lo as i64 + 2 * self.bounded(count) as i64) as i32
    }

    /// Draw an even integer uniformly from `[min, max]`.
    ///
    /// Same contract as [`uniform_odd`](Self::uniform_odd) with the
    /// parities flipped: a degenerate range returns the snapped minimum
    /// without consuming a draw (`uniform_even(5, 5)` returns `6`).
    pub fn uniform_even(&mut self, min: i32, max: i32) -> i32 {
        let mut lo = min;
        let mut hi = max;
        if lo % 2 != 0 {
            lo += 1;
        }
        if hi % 2 != 0 {
            hi -= 1;
        }
        if lo > hi {
            return lo;
        }
        let count = ((hi as i64 - lo as i64) / 2 + 1) as u64;
        (lo as i64 + 2 * self.bounded(count) as i64) as i32
    }

    /// Draw a boolean with equal probability.
    #[inline]
    pub fn uniform_bool(&mut self) -> bool {
        self.bounded(2) == 1
    }

    /// Shuffle a slice in place using the Fisher-Yates algorithm.
    ///
    /// Consumes exactly `slice.len() - 1` draws; slices shorter than two
    /// elements consume none.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        for i in (1..len).rev() {
            let j = self.bounded(i as u64 + 1) as usize;
            slice.swap(i, j);
        }
    }

    /// Get current state (for checkpointing/debugging).
    pub fn state(&self) -> [u64; 2] {
        self.state
    }

    /// Restore from saved state.
    pub fn set_state(&mut self, state: [u64; 2]) {
        self.state = state;
    }
}

/// SplitMix64 for seed initialization.
/// Produces well-distributed values from sequential seeds.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Derive a numeric seed from a human-readable phrase.
///
/// Hashes the phrase under a fixed domain tag and takes the first eight
/// digest bytes as a little-endian `u64`. The same phrase always maps to
/// the same seed, so a phrase like "daily maze" names one layout forever.
pub fn derive_seed(phrase: &str) -> u64 {
    let hash = hash_with_domain(SEED_DOMAIN, phrase.as_bytes());

    // Take first 8 bytes as seed
    u64::from_le_bytes(hash[0..8].try_into().unwrap())
}

// =============================================================================
// TESTS
// =============================================================================
