//! Deterministic RNG wrapper using PCG32.
//!
//! All glitch passes and base-image generators MUST take their randomness
//! from this module so that the same seed always reproduces the same bytes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits so that
    /// distinct 32-bit seeds map to distinct PCG32 states.
    pub fn new(seed: u32) -> Self {
        // Expand 32-bit seed to 64-bit for PCG32 state
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Derive a decorrelated sub-seed for a named variant using BLAKE3.
    ///
    /// Used to split one user-facing seed into independent streams, e.g.
    /// one stream per base-image style or per batch entry.
    pub fn derive_variant_seed(base_seed: u32, variant_id: &str) -> u32 {
        let mut input = Vec::with_capacity(4 + variant_id.len());
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(variant_id.as_bytes());
        let hash = blake3::hash(&input);
        let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
        u32::from_le_bytes(bytes)
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random u32.
    #[inline]
    pub fn gen_u32(&mut self) -> u32 {
        self.inner.gen::<u32>()
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// Generate a random 8-bit RGB color, drawing channels in R, G, B order.
    #[inline]
    pub fn gen_rgb8(&mut self) -> [u8; 3] {
        [
            self.gen_range(0..=255u8),
            self.gen_range(0..=255u8),
            self.gen_range(0..=255u8),
        ]
    }

    /// Pick a uniformly random element from a non-empty slice.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = self.gen_range(0..items.len());
        &items[idx]
    }

    /// Shuffle a slice in place using the Fisher-Yates algorithm.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.gen_range(0..=i);
            items.swap(i, j);
        }
    }
}
