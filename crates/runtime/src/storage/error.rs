//! Errors raised by roster operations.

use lutemon_core::{ErrorSeverity, GameError, LutemonId};
use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("lutemon {0} not found")]
    NotFound(LutemonId),

    #[error("battle area is full ({capacity} fighters)")]
    BattleFull { capacity: usize },

    #[error("lutemon {0} is already stored")]
    DuplicateId(LutemonId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GameError for StorageError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) | Self::BattleFull { .. } => ErrorSeverity::Recoverable,
            Self::DuplicateId(_) => ErrorSeverity::Validation,
            Self::Repository(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::BattleFull { .. } => "BATTLE_FULL",
            Self::DuplicateId(_) => "DUPLICATE_ID",
            Self::Repository(e) => e.error_code(),
        }
    }
}
