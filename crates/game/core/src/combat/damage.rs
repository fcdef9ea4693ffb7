//! Damage calculation and application.

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate base damage from an attack.
///
/// # Formula
///
/// ```text
/// damage = max(0, total_attack - defense)
/// ```
pub fn calculate_damage(total_attack: u32, defense: u32) -> u32 {
    total_attack.saturating_sub(defense)
}

/// Apply damage to current HP.
///
/// Returns the new HP value, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Check whether a d100 roll (1-100) lands a critical hit.
///
/// With `chance` = 25 exactly a quarter of the rolls qualify.
pub fn is_critical(roll: u32, chance: u32) -> bool {
    roll <= chance
}
