//! RNG oracle for deterministic random number generation.
//!
//! The wheel draws exactly two random quantities per spin: the win segment and
//! the number of extra turns. Both come from an injected [`RngOracle`] keyed by
//! a seed derived from the session seed and the spin counter, so a session is
//! fully replayable from its seed.
//!
//! # Determinism
//!
//! Implementations must be deterministic: the same seed yields the same value.

/// Seed contexts for the independent draws made by one spin.
pub mod context {
    /// Picks the win segment.
    pub const WIN_SEGMENT: u32 = 0;
    /// Picks the fractional extra turns.
    pub const EXTRA_TURNS: u32 = 1;
}

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[0, 1)`.
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (f64::from(u32::MAX) + 1.0)
    }

    /// Uniform index in `[0, count)`; `count` of zero yields zero.
    ///
    /// Uses the high bits (multiply-shift) rather than a modulo, matching a
    /// `floor(unit * count)` draw without its floating point rounding.
    fn pick_index(&self, seed: u64, count: u32) -> u32 {
        if count == 0 {
            return 0;
        }
        ((u64::from(self.next_u32(seed)) * u64::from(count)) >> 32) as u32
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state, one multiply, one
/// xorshift and one rotate per draw.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Derives the seed for one draw.
///
/// * `game_seed` - set once per session
/// * `nonce` - spin counter, increments with every started spin
/// * `context` - distinguishes independent draws of the same spin (see [`context`])
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing constants
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
