//! RNG oracle for deterministic random number generation.
//!
//! Randomness in the game is limited to critical-hit rolls and cosmetic shape
//! generation. Both derive a seed from stable inputs (battle seed, turn nonce,
//! entity id) and ask the oracle for a value, so replaying the same inputs
//! reproduces the same battle.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

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

/// Oracle that ignores the seed and always yields the same value.
///
/// `FixedRng(0)` makes every d100 roll a 1 (always critical), `FixedRng(99)`
/// makes it a 100 (never critical).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedRng(pub u32);

impl FixedRng {
    pub const ALWAYS_CRITICAL: Self = Self(0);
    pub const NEVER_CRITICAL: Self = Self(99);
}

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Compute a deterministic seed from its components.
///
/// * `base_seed` - Seed chosen when the battle (or roster) was created
/// * `nonce` - Sequence number (turn index, draw index)
/// * `subject` - Entity id the roll concerns
/// * `context` - Distinguishes several rolls for the same subject and nonce
///
/// Context values used by the game:
///
/// - `0`: critical hit check
/// - `1`: shape point count
/// - `2..`: shape point indices
pub fn compute_seed(base_seed: u64, nonce: u64, subject: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = base_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (subject as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
