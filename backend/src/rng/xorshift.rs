//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. Every stochastic rule in the
//! simulation (sickness rolls, disasters, migration) draws from one
//! `RngManager` threaded through by `&mut`, so a fixed seed reproduces an
//! entire run exactly.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use city_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let roll = rng.next_f64();        // uniform in [0, 1)
/// let demand = rng.range(0, 101);   // a citizen demand value in [0, 100]
/// assert!(roll >= 0.0 && roll < 1.0);
/// assert!((0..=100).contains(&demand));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with the given seed
    ///
    /// A zero seed is coerced to 1 (xorshift requires non-zero state).
    ///
    /// # Example
    /// ```
    /// use city_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64 value, advancing internal state
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use city_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let demand = rng.range(0, 101); // citizen demand in [0, 100]
    /// assert!(demand >= 0 && demand <= 100);
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Generate a random f64 in range [0.0, 1.0)
    ///
    /// This is the draw every probability-driven rule compares against.
    ///
    /// # Example
    /// ```
    /// use city_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let p = rng.next_f64();
    /// assert!(p >= 0.0 && p < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) using the top 53 bits
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Roll against a probability: true with probability `chance`
    ///
    /// `chance` must already be validated to lie in [0, 1]; values at or
    /// above 1.0 always succeed, values at or below 0.0 never do.
    ///
    /// # Example
    /// ```
    /// use city_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(7);
    /// assert!(rng.chance(1.0));
    /// assert!(!rng.chance(0.0));
    /// ```
    pub fn chance(&mut self, chance: f64) -> bool {
        self.next_f64() < chance
    }

    /// Get the current RNG state (for reporting/replay)
    pub fn state(&self) -> u64 {
        self.state
    }
}
