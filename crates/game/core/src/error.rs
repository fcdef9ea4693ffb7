//! Common error infrastructure for lutemon-core.
//!
//! Every expected failure in the rules is an explicit return value. The only
//! condition treated as a programming error (recording statistics against
//! the wrong entity) is an assertion and never surfaces here.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry with different input (e.g. battle full)
/// - **Validation**: invalid input rejected at construction time
/// - **Internal**: unexpected state inconsistency
/// - **Fatal**: unrecoverable, state cannot be trusted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for errors raised by the game rules and the runtime.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while constructing core values from untrusted input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("unknown color '{0}' (expected white, green, pink, orange or black)")]
    UnknownColor(String),

    #[error("unknown location '{0}' (expected home, training or battle)")]
    UnknownLocation(String),
}

impl GameError for CoreError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownColor(_) => "UNKNOWN_COLOR",
            Self::UnknownLocation(_) => "UNKNOWN_LOCATION",
        }
    }
}
