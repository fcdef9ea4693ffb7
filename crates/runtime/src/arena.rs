//! Runs the battle between the current occupants of the battle area.

use lutemon_core::{GameConfig, Location, RngOracle};

use crate::api::{Result, RuntimeError};
use crate::battle::{BattleEngine, BattleLog, BattleOutcome};
use crate::storage::Storage;

/// Outcome and full log of a finished arena battle.
#[derive(Clone, Debug)]
pub struct ArenaReport {
    pub outcome: BattleOutcome,
    pub log: BattleLog,
}

/// Fight the two Lutemons in the battle area to completion.
///
/// The first occupant attacks first.
pub fn run_arena_battle<R: RngOracle + ?Sized>(
    storage: &mut Storage,
    rng: &R,
    config: GameConfig,
    seed: u64,
) -> Result<ArenaReport> {
    let (a, b) = match storage.members(Location::Battle) {
        &[a, b] => (a, b),
        other => {
            return Err(RuntimeError::NotEnoughFighters { found: other.len() });
        }
    };

    let mut engine = BattleEngine::new(storage, rng, config, seed);
    engine.start_battle(a, b)?;
    let outcome = engine.run_to_completion()?;

    Ok(ArenaReport {
        outcome,
        log: engine.log().clone(),
    })
}
