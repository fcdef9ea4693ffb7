//! Lutemon entity and its stat-mutation primitives.
//!
//! The entity knows nothing about locations or persistence; storage and the
//! battle engine call these primitives and keep the bookkeeping.
mod color;
mod id;
mod shape;

use std::fmt;

pub use color::{Color, ColorProfile};
pub use id::LutemonId;
pub use shape::Shape;

use crate::combat::{apply_damage, calculate_damage};

/// A creature in the roster.
///
/// `total_attack()` is always `base_attack + experience`; it is derived, never
/// stored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lutemon {
    id: LutemonId,
    name: String,
    color: Color,
    base_attack: u32,
    defense: u32,
    experience: u32,
    max_health: u32,
    health: u32,
    shape: Shape,
}

/// Mutable combat fields, used to restore an entity from a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatStats {
    pub attack: u32,
    pub defense: u32,
    pub experience: u32,
    pub max_health: u32,
    pub health: u32,
}

impl Lutemon {
    /// Creates a fresh entity with its color's default stats and full health.
    pub fn new(id: LutemonId, name: impl Into<String>, color: Color, shape: Shape) -> Self {
        let profile = color.profile();
        Self {
            id,
            name: name.into(),
            color,
            base_attack: profile.attack,
            defense: profile.defense,
            experience: 0,
            max_health: profile.max_health,
            health: profile.max_health,
            shape,
        }
    }

    /// Restores an entity whose stats have diverged from the color defaults.
    ///
    /// Health is clamped into `[0, max_health]`.
    pub fn with_stats(
        id: LutemonId,
        name: impl Into<String>,
        color: Color,
        shape: Shape,
        stats: CombatStats,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            base_attack: stats.attack,
            defense: stats.defense,
            experience: stats.experience,
            max_health: stats.max_health,
            health: stats.health.min(stats.max_health),
            shape,
        }
    }

    /// Trains once: attack grows by the color bonus and experience by one.
    pub fn train(&mut self) {
        self.base_attack = self.base_attack.saturating_add(self.color.training_bonus());
        self.experience = self.experience.saturating_add(1);
    }

    /// Hits `target` once without any critical bonus.
    ///
    /// Returns whether the target is still standing. Only the target's health
    /// changes.
    pub fn attack(&self, target: &mut Lutemon) -> bool {
        let damage = calculate_damage(self.total_attack(), target.defense);
        target.take_damage(damage)
    }

    /// Lowers health by `damage`, floored at zero. Returns whether health
    /// remains above zero.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        self.health = apply_damage(self.health, damage);
        self.is_alive()
    }

    /// Reverts attack, defense and max health to the color table and clears
    /// experience. Health is left as-is.
    pub fn reset_stats(&mut self) {
        let profile = self.color.profile();
        self.base_attack = profile.attack;
        self.defense = profile.defense;
        self.max_health = profile.max_health;
        self.experience = 0;
    }

    pub fn heal(&mut self) {
        self.health = self.max_health;
    }

    pub fn id(&self) -> LutemonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn base_attack(&self) -> u32 {
        self.base_attack
    }

    /// Saturates at `u32::MAX`.
    pub fn total_attack(&self) -> u32 {
        self.base_attack.saturating_add(self.experience)
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Current combat fields, the inverse of [`Lutemon::with_stats`].
    pub fn combat_stats(&self) -> CombatStats {
        CombatStats {
            attack: self.base_attack,
            defense: self.defense,
            experience: self.experience,
            max_health: self.max_health,
            health: self.health,
        }
    }
}

impl fmt::Display for Lutemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) att: {}; def: {}; exp: {}; health: {}/{}",
            self.color,
            self.name,
            self.total_attack(),
            self.defense,
            self.experience,
            self.health,
            self.max_health
        )
    }
}
