//! Combat resolution system.
//!
//! Pure functions for resolving a single attack between two Lutemons. The
//! battle engine owns turn order and defeat handling; this module only turns
//! stats plus a random roll into damage.
//!
//! # Core Functions
//!
//! - `calculate_damage`: attack minus defense, floored at zero
//! - `apply_damage`: HP reduction (clamped to 0)
//! - `is_critical`: d100 roll against the configured critical chance
//! - `resolve_attack`: complete attack (damage + critical + application)

pub mod damage;
pub mod result;

pub use damage::{apply_damage, calculate_damage, is_critical};
pub use result::{AttackReport, resolve_attack};
