//! Attack resolution and its report.

use crate::config::GameConfig;
use crate::entity::Lutemon;

use super::damage::{calculate_damage, is_critical};

/// What happened during one attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    /// Damage before any critical bonus.
    pub base_damage: u32,
    /// Whether the roll landed a critical hit.
    pub critical: bool,
    /// Damage actually applied to the defender.
    pub total_damage: u32,
    /// Defender health after the hit.
    pub defender_health: u32,
    pub defender_max_health: u32,
}

impl AttackReport {
    pub fn defeated(&self) -> bool {
        self.defender_health == 0
    }
}

/// Resolve a complete attack: base damage, critical check, application.
///
/// `roll` is a d100 value (1-100). Only the defender's health changes.
pub fn resolve_attack(
    attacker: &Lutemon,
    defender: &mut Lutemon,
    roll: u32,
    config: &GameConfig,
) -> AttackReport {
    let base_damage = calculate_damage(attacker.total_attack(), defender.defense());

    let critical = is_critical(roll, config.critical_chance);
    let total_damage = if critical {
        base_damage.saturating_add(config.critical_bonus)
    } else {
        base_damage
    };

    defender.take_damage(total_damage);

    AttackReport {
        base_damage,
        critical,
        total_damage,
        defender_health: defender.health(),
        defender_max_health: defender.max_health(),
    }
}
