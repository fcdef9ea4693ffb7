//! Public runtime API surface.
//!
//! Gathers the types exposed to consumers of the runtime crate.

pub mod errors;

pub use errors::{BattleError, RepositoryError, Result, RuntimeError, StorageError};
