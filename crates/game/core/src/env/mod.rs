//! Environment services the rules depend on but do not own.
//!
//! The only service today is randomness: battle criticals and cosmetic shape
//! generation both draw from an injected [`RngOracle`] so callers (and tests)
//! control every outcome.
mod rng;

pub use rng::{FixedRng, PcgRng, RngOracle, compute_seed};
