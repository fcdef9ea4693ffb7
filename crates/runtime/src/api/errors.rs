//! Unified error type surfaced by the runtime API.
//!
//! Wraps storage, battle and repository failures so clients can bubble them
//! up with consistent context.
use lutemon_core::{CoreError, ErrorSeverity, GameError};
use thiserror::Error;

pub use crate::battle::BattleError;
pub use crate::repository::RepositoryError;
pub use crate::storage::StorageError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("battle needs two fighters in the battle area, found {found}")]
    NotEnoughFighters { found: usize },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Core(e) => e.severity(),
            Self::Storage(e) => e.severity(),
            Self::Battle(e) => e.severity(),
            Self::Repository(e) => e.severity(),
            Self::NotEnoughFighters { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Core(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Battle(e) => e.error_code(),
            Self::Repository(e) => e.error_code(),
            Self::NotEnoughFighters { .. } => "NOT_ENOUGH_FIGHTERS",
        }
    }
}
