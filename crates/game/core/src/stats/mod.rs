//! Statistics recorder.
//!
//! [`LutemonStats`] tracks one entity's counters and stat history;
//! [`GlobalStats`] owns all of them plus the roster-wide counters. Both only
//! read entity state, they never mutate entities.

mod global;
mod history;

pub use global::GlobalStats;
pub use history::LutemonStats;
