/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Chance (in percent, 0-100) that an attack lands a critical hit.
    pub critical_chance: u32,
    /// Flat damage added on a critical hit.
    pub critical_bonus: u32,
    /// How many training sessions the winner of a battle receives.
    pub victory_trainings: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Number of fighters the Battle location can hold.
    pub const BATTLE_CAPACITY: usize = 2;
    /// Bounds on the number of points in a cosmetic shape.
    pub const MIN_SHAPE_POINTS: u32 = 3;
    pub const MAX_SHAPE_POINTS: usize = 5;
    /// Shape point indices range over `0..=MAX_SHAPE_INDEX`.
    pub const MAX_SHAPE_INDEX: u32 = 7;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CRITICAL_CHANCE: u32 = 25;
    pub const DEFAULT_CRITICAL_BONUS: u32 = 5;
    pub const DEFAULT_VICTORY_TRAININGS: u32 = 2;

    pub fn new() -> Self {
        Self {
            critical_chance: Self::DEFAULT_CRITICAL_CHANCE,
            critical_bonus: Self::DEFAULT_CRITICAL_BONUS,
            victory_trainings: Self::DEFAULT_VICTORY_TRAININGS,
        }
    }

    /// Same rules with critical hits disabled.
    pub fn without_criticals() -> Self {
        Self {
            critical_chance: 0,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
