//! Errors raised by the battle engine.

use lutemon_core::{ErrorSeverity, GameError, LutemonId};
use thiserror::Error;

use super::state::BattleState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("battle is not active (state: {0:?})")]
    NotActive(BattleState),

    #[error("fighter {0} not found")]
    FighterNotFound(LutemonId),

    #[error("lutemon {0} cannot fight itself")]
    SameFighter(LutemonId),

    #[error("battle did not finish within {0} turns")]
    TurnLimit(u64),
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotActive(_) | Self::FighterNotFound(_) => ErrorSeverity::Recoverable,
            Self::SameFighter(_) => ErrorSeverity::Validation,
            Self::TurnLimit(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotActive(_) => "BATTLE_NOT_ACTIVE",
            Self::FighterNotFound(_) => "FIGHTER_NOT_FOUND",
            Self::SameFighter(_) => "SAME_FIGHTER",
            Self::TurnLimit(_) => "TURN_LIMIT",
        }
    }
}
