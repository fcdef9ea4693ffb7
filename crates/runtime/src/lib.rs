//! Storage, persistence and battle orchestration for the Lutemon roster.
//!
//! This crate drives the rules defined in `lutemon-core`:
//! - [`storage`] owns the roster, the location state machine and the id
//!   allocator
//! - [`battle`] runs turn-based battles against that storage
//! - [`repository`] persists snapshots (file or in-memory) and handles
//!   import/export
//! - [`config`] loads runtime settings from the environment
//! - [`api`] exposes the error types clients bubble up
pub mod api;
pub mod arena;
pub mod battle;
pub mod config;
pub mod repository;
pub mod storage;

pub use api::{BattleError, RepositoryError, Result, RuntimeError, StorageError};
pub use arena::{ArenaReport, run_arena_battle};
pub use battle::{
    BattleEngine, BattleEvent, BattleLog, BattleOutcome, BattleState, TurnOutcome, TurnOwner,
};
pub use config::RuntimeConfig;
pub use repository::{
    FileRepository, InMemoryRepository, LocationMap, LutemonRecord, RosterRepository,
};
pub use storage::{IdAllocator, Storage};
