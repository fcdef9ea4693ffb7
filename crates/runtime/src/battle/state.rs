use lutemon_core::LutemonId;

/// Lifecycle of a battle.
///
/// `Idle` until two fighters are registered, `Active` while attacks are
/// exchanged, `Resolved` once one side reached zero health.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BattleState {
    #[default]
    Idle,
    Active,
    Resolved,
}

/// Which registered fighter attacks next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnOwner {
    #[default]
    First,
    Second,
}

impl TurnOwner {
    pub fn other(self) -> Self {
        match self {
            TurnOwner::First => TurnOwner::Second,
            TurnOwner::Second => TurnOwner::First,
        }
    }
}

/// The two registered fighters, in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Fighters {
    pub first: LutemonId,
    pub second: LutemonId,
}

impl Fighters {
    /// `(attacker, defender)` for the given turn owner.
    pub fn roles(self, owner: TurnOwner) -> (LutemonId, LutemonId) {
        match owner {
            TurnOwner::First => (self.first, self.second),
            TurnOwner::Second => (self.second, self.first),
        }
    }
}

/// Final result of a resolved battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleOutcome {
    pub winner: LutemonId,
    pub loser: LutemonId,
    /// Number of attacks exchanged, including the finishing blow.
    pub turns: u64,
}

/// Result of a single attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The defender survived; roles have swapped.
    Continue,
    BattleOver(BattleOutcome),
}
