//! Error types raised by repository implementations.

use lutemon_core::{ErrorSeverity, GameError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("nothing to import")]
    NothingToImport,
}

impl GameError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LockPoisoned => ErrorSeverity::Internal,
            Self::CorruptedData(_) => ErrorSeverity::Validation,
            Self::Io(_) | Self::Serialization(_) | Self::Json(_) | Self::NothingToImport => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "LOCK_POISONED",
            Self::Io(_) => "IO",
            Self::Serialization(_) => "SERIALIZATION",
            Self::Json(_) => "JSON",
            Self::CorruptedData(_) => "CORRUPTED_DATA",
            Self::NothingToImport => "NOTHING_TO_IMPORT",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
