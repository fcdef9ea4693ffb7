//! Repository layer for persisted roster data.
//!
//! Repositories implement the persistence gateway consumed by
//! [`Storage`](crate::storage::Storage):
//! - Entity table (which Lutemon is where, with its stats)
//! - Statistics table (global counters and per-entity history)
//! - Import/export of the entity table to an external file
//!
//! Every save is a whole-snapshot overwrite.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileRepository;
pub use memory::InMemoryRepository;
pub use traits::RosterRepository;
pub use types::{EntitySnapshot, LocationMap, LutemonRecord, SCHEMA_VERSION, StatsSnapshot};
