//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Worker streams
//!
//! A run has one base seed (fresh entropy, or a fixed value for
//! reproducible runs). Worker `k` seeds its generator with
//! [`worker_seed`]`(base, k)`, a SplitMix64 mix of both values, so streams
//! of neighbouring workers do not start from neighbouring states.

use serde::{Deserialize, Serialize};

/// SplitMix64 increment (golden ratio)
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Random number generator using xorshift64*
///
/// # Example
/// ```
/// use chsh_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let x = rng.next_bool();
/// let u = rng.next_f64(); // [0.0, 1.0)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Example
    /// ```
    /// use chsh_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create the generator owned by worker `worker_id` in a run seeded with `base_seed`
    ///
    /// # Example
    /// ```
    /// use chsh_simulator_core_rs::RngManager;
    ///
    /// let mut w0 = RngManager::for_worker(42, 0);
    /// let mut w1 = RngManager::for_worker(42, 1);
    /// assert_ne!(w0.next(), w1.next());
    /// ```
    pub fn for_worker(base_seed: u64, worker_id: u64) -> Self {
        Self::new(worker_seed(base_seed, worker_id))
    }

    /// Create a generator from fresh OS-backed entropy
    pub fn from_entropy() -> Self {
        Self::new(fresh_seed())
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state and returns a random value.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Fair coin flip (probability 0.5)
    ///
    /// Uses the top output bit, which is the strongest bit of xorshift64*.
    pub fn next_bool(&mut self) -> bool {
        self.next() >> 63 == 1
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use chsh_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let u = rng.next_f64();
    /// assert!(u >= 0.0 && u < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Keep 53 bits of mantissa precision
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate random f64 in range [min, max)
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }

    /// Generate random index in [0, len)
    ///
    /// # Panics
    /// Panics if len == 0
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "len must be positive");
        (self.next() % len as u64) as usize
    }

    /// Get current RNG state (for replay)
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

/// SplitMix64 finalizer
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seed for worker `worker_id` of a run whose base seed is `base_seed`
pub fn worker_seed(base_seed: u64, worker_id: u64) -> u64 {
    splitmix64(base_seed ^ splitmix64(worker_id))
}

/// Fresh base seed drawn from the thread-local entropy-seeded generator
pub fn fresh_seed() -> u64 {
    rand::random::<u64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let rng = RngManager::new(0);
        assert_ne!(rng.get_state(), 0, "Zero seed should be converted to 1");
    }

    #[test]
    #[should_panic(expected = "len must be positive")]
    fn test_index_empty_range() {
        let mut rng = RngManager::new(12345);
        rng.index(0);
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = RngManager::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&val),
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_uniform_respects_bounds() {
        let mut rng = RngManager::new(7);
        for _ in 0..1000 {
            let v = rng.uniform(-1.5, 1.5);
            assert!((-1.5..1.5).contains(&v));
        }
    }

    #[test]
    fn test_next_bool_is_balanced() {
        let mut rng = RngManager::new(2024);
        let trues = (0..100_000).filter(|_| rng.next_bool()).count();
        let rate = trues as f64 / 100_000.0;
        assert!((rate - 0.5).abs() < 0.01, "coin rate {}", rate);
    }

    #[test]
    fn test_worker_seeds_distinct() {
        let seeds: Vec<u64> = (0..64).map(|k| worker_seed(99, k)).collect();
        for i in 0..seeds.len() {
            for j in (i + 1)..seeds.len() {
                assert_ne!(seeds[i], seeds[j], "workers {} and {} collide", i, j);
            }
        }
    }
}
