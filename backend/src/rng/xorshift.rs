//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG suitable for driving the simulation.
//!
//! # Determinism
//!
//! Same seed → same sequence of draws. This is CRITICAL for:
//! - Debugging (reproduce an exact session)
//! - Testing (verify progression and alert behavior)
//! - Replay (re-run a scored session and get the same score)

use serde::{Deserialize, Serialize};

use super::RandomSource;

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use defense_simulator_core_rs::rng::{RandomSource, XorShiftRng};
///
/// let mut rng = XorShiftRng::new(12345);
/// let draw = rng.next_f64();
/// assert!(draw >= 0.0 && draw < 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XorShiftRng {
    /// Internal state (64-bit)
    state: u64,
}

impl XorShiftRng {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is remapped to 1 (xorshift requirement: the all-zero
    /// state is a fixed point).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Get current RNG state (for replay from a known point)
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl RandomSource for XorShiftRng {
    fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        // Top 53 bits scaled to [0.0, 1.0)
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}
