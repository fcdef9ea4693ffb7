//! Turns command failures into a message and a process exit status.

use std::error::Error as StdError;
use std::process::ExitCode;

use lutemon_core::{CoreError, ErrorSeverity, GameError};
use lutemon_runtime::{BattleError, RepositoryError, RuntimeError, StorageError};

/// Exit status for errors that carry no game classification.
const EXIT_FAILURE: u8 = 1;
/// Bad input that will fail again unchanged.
const EXIT_INVALID: u8 = 2;
/// `EX_SOFTWARE`: the roster reached a state it should never be in.
const EXIT_INTERNAL: u8 = 70;

/// Severity and code of the first classified error in the chain.
pub fn classify(err: &anyhow::Error) -> Option<(ErrorSeverity, &'static str)> {
    err.chain().find_map(classify_one)
}

fn classify_one(err: &(dyn StdError + 'static)) -> Option<(ErrorSeverity, &'static str)> {
    fn pair<E: GameError>(e: &E) -> (ErrorSeverity, &'static str) {
        (e.severity(), e.error_code())
    }

    if let Some(e) = err.downcast_ref::<RuntimeError>() {
        return Some(pair(e));
    }
    if let Some(e) = err.downcast_ref::<StorageError>() {
        return Some(pair(e));
    }
    if let Some(e) = err.downcast_ref::<BattleError>() {
        return Some(pair(e));
    }
    if let Some(e) = err.downcast_ref::<RepositoryError>() {
        return Some(pair(e));
    }
    err.downcast_ref::<CoreError>().map(pair)
}

pub fn exit_code(severity: Option<ErrorSeverity>) -> u8 {
    match severity {
        Some(s) if s.is_internal() => EXIT_INTERNAL,
        Some(ErrorSeverity::Validation) => EXIT_INVALID,
        _ => EXIT_FAILURE,
    }
}

/// Print the error on stderr, log it, and pick the exit status.
pub fn report(err: &anyhow::Error) -> ExitCode {
    let classified = classify(err);
    match classified {
        Some((severity, code)) => {
            tracing::error!(code, severity = severity.as_str(), "{:#}", err);
            eprintln!("error [{}]: {:#}", code, err);
        }
        None => {
            tracing::error!("{:#}", err);
            eprintln!("error: {:#}", err);
        }
    }
    ExitCode::from(exit_code(classified.map(|(severity, _)| severity)))
}
