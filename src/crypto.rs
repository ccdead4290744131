// src/crypto.rs
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

/// Size of the space a single 32-bit draw covers.
const WORD_SPACE: u64 = 1 << 32;

/// Cryptographically secure source of unbiased integers.
///
/// Wraps any `CryptoRng`; production code uses the operating system
/// generator through [`SecureRandom::new`].
#[derive(Debug)]
pub struct SecureRandom<R = OsRng> {
    rng: R,
}

impl SecureRandom<OsRng> {
    pub fn new() -> Self {
        SecureRandom { rng: OsRng }
    }
}

impl Default for SecureRandom<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> SecureRandom<R> {
    pub fn from_rng(rng: R) -> Self {
        SecureRandom { rng }
    }

    /// Return a value uniformly distributed over `[0, max)`.
    ///
    /// Draws are rejected when they fall in the incomplete tail of the
    /// 32-bit space so that `x % max` carries no modulo bias. A `max` of
    /// zero returns 0.
    pub fn random_int(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }

        let max_wide = u64::from(max);
        let limit = (WORD_SPACE / max_wide) * max_wide;

        loop {
            let x = u64::from(self.rng.next_u32());
            if x < limit {
                return (x % max_wide) as u32;
            }
        }
    }

    /// Pick an index into a collection of `len` items.
    ///
    /// Collections larger than `u32::MAX` are never handed to the generators;
    /// the length saturates to keep the draw in range.
    pub fn random_index(&mut self, len: usize) -> usize {
        let max = u32::try_from(len).unwrap_or(u32::MAX);
        self.random_int(max) as usize
    }
}
