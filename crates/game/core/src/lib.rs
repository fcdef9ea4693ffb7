//! Deterministic game rules for the Lutemon roster.
//!
//! `lutemon-core` defines the canonical entity model (stats, colors, cosmetic
//! shapes), the combat formulas, the per-entity statistics recorder and the
//! randomness oracle. It performs no I/O: storage, persistence and the battle
//! orchestrator live in `lutemon-runtime` and drive the mutation primitives
//! exposed here.
pub mod combat;
pub mod config;
pub mod entity;
pub mod env;
pub mod error;
pub mod location;
pub mod stats;

pub use combat::{AttackReport, apply_damage, calculate_damage, is_critical, resolve_attack};
pub use config::GameConfig;
pub use entity::{Color, ColorProfile, CombatStats, Lutemon, LutemonId, Shape};
pub use env::{FixedRng, PcgRng, RngOracle, compute_seed};
pub use error::{CoreError, ErrorSeverity, GameError};
pub use location::Location;
pub use stats::{GlobalStats, LutemonStats};
