//! Turn-based battle between two stored Lutemons.
//!
//! The [`BattleEngine`] borrows the [`Storage`] for the whole battle, so the
//! fighters cannot be moved or removed by anyone else while it runs. Each
//! [`BattleEngine::execute_attack`] call resolves exactly one attack; pacing
//! between attacks is the caller's concern.
mod error;
mod log;
mod state;

pub use error::BattleError;
pub use log::{BattleEvent, BattleLog};
pub use state::{BattleOutcome, BattleState, TurnOutcome, TurnOwner};

use lutemon_core::{
    GameConfig, Location, Lutemon, LutemonId, RngOracle, compute_seed, resolve_attack,
};

use crate::storage::Storage;
use state::Fighters;

/// Seed context used for critical hit rolls.
const CRITICAL_CONTEXT: u32 = 0;

pub type Result<T> = std::result::Result<T, BattleError>;

/// Battle orchestrator: alternating attacks, critical hits and the defeat
/// transaction.
pub struct BattleEngine<'a, R: RngOracle + ?Sized> {
    storage: &'a mut Storage,
    rng: &'a R,
    config: GameConfig,
    seed: u64,
    state: BattleState,
    fighters: Option<Fighters>,
    turn_owner: TurnOwner,
    turn: u64,
    log: BattleLog,
    outcome: Option<BattleOutcome>,
}

impl<'a, R: RngOracle + ?Sized> BattleEngine<'a, R> {
    /// Upper bound used by [`BattleEngine::run_to_completion`].
    pub const MAX_TURNS: u64 = 10_000;

    /// Creates an idle engine. `seed` feeds every critical roll of the battle.
    pub fn new(storage: &'a mut Storage, rng: &'a R, config: GameConfig, seed: u64) -> Self {
        Self {
            storage,
            rng,
            config,
            seed,
            state: BattleState::Idle,
            fighters: None,
            turn_owner: TurnOwner::First,
            turn: 0,
            log: BattleLog::new(),
            outcome: None,
        }
    }

    /// Registers two fighters and activates the battle. `a` attacks first.
    ///
    /// Fails without any state change if either id is unknown or both ids are
    /// the same.
    pub fn start_battle(&mut self, a: LutemonId, b: LutemonId) -> Result<()> {
        if a == b {
            return Err(BattleError::SameFighter(a));
        }
        let first = self.storage.entity(a).ok_or(BattleError::FighterNotFound(a))?;
        let second = self.storage.entity(b).ok_or(BattleError::FighterNotFound(b))?;

        let intro = [BattleEvent::fighter(1, first), BattleEvent::fighter(2, second)];
        tracing::info!("Battle started: {} vs {}", first.name(), second.name());

        self.log.clear();
        for event in intro {
            self.log.push(event);
        }
        self.fighters = Some(Fighters {
            first: a,
            second: b,
        });
        self.turn_owner = TurnOwner::First;
        self.turn = 0;
        self.outcome = None;
        self.state = BattleState::Active;
        Ok(())
    }

    /// Resolves one attack by the current attacker.
    pub fn execute_attack(&mut self) -> Result<TurnOutcome> {
        let fighters = match (self.state, self.fighters) {
            (BattleState::Active, Some(fighters)) => fighters,
            (state, _) => return Err(BattleError::NotActive(state)),
        };
        let (attacker_id, defender_id) = fighters.roles(self.turn_owner);

        let attacker = self
            .storage
            .entity(attacker_id)
            .cloned()
            .ok_or(BattleError::FighterNotFound(attacker_id))?;
        let roll = self.rng.roll_d100(compute_seed(
            self.seed,
            self.turn,
            attacker_id.get(),
            CRITICAL_CONTEXT,
        ));

        let defender = self
            .storage
            .entity_mut(defender_id)
            .ok_or(BattleError::FighterNotFound(defender_id))?;
        let defender_name = defender.name().to_string();
        let report = resolve_attack(&attacker, defender, roll, &self.config);
        self.turn += 1;

        self.log.push(BattleEvent::Attack {
            attacker: attacker.name().to_string(),
            defender: defender_name.clone(),
        });
        if report.critical {
            self.log.push(BattleEvent::Critical {
                bonus: self.config.critical_bonus,
            });
        }
        self.log.push(BattleEvent::Damage {
            defender: defender_name,
            damage: report.total_damage,
            health: report.defender_health,
            max_health: report.defender_max_health,
        });

        if report.defeated() {
            let outcome = self.resolve_defeat(attacker_id, defender_id);
            return Ok(TurnOutcome::BattleOver(outcome));
        }

        self.turn_owner = self.turn_owner.other();
        Ok(TurnOutcome::Continue)
    }

    /// Attacks until one fighter falls.
    ///
    /// Gives up with [`BattleError::TurnLimit`] if neither side can hurt the
    /// other; the battle stays active in that case.
    pub fn run_to_completion(&mut self) -> Result<BattleOutcome> {
        for _ in 0..Self::MAX_TURNS {
            if let TurnOutcome::BattleOver(outcome) = self.execute_attack()? {
                return Ok(outcome);
            }
        }
        tracing::warn!("Battle stalled after {} turns", Self::MAX_TURNS);
        Err(BattleError::TurnLimit(Self::MAX_TURNS))
    }

    /// Defeat transaction: reward the winner, reset the loser, send both home,
    /// record the outcome and persist once.
    fn resolve_defeat(&mut self, winner: LutemonId, loser: LutemonId) -> BattleOutcome {
        let winner_name = self.name_of(winner);
        let loser_name = self.name_of(loser);

        self.log.push(BattleEvent::Defeated {
            name: loser_name.clone(),
        });

        if let Some(lutemon) = self.storage.entity_mut(winner) {
            for _ in 0..self.config.victory_trainings {
                lutemon.train();
            }
        }
        self.log.push(BattleEvent::Victory {
            name: winner_name.clone(),
        });

        self.storage.relocate(winner, Location::Home);
        if let Some(lutemon) = self.storage.entity_mut(winner) {
            lutemon.heal();
        }

        if let Some(lutemon) = self.storage.entity_mut(loser) {
            lutemon.reset_stats();
            lutemon.heal();
        }
        self.storage.relocate(loser, Location::Home);

        // Recorded after the reset, so the loser's last point shows defaults.
        self.storage.record_battle(winner, loser);
        self.storage.record_stats(loser);
        self.storage.record_stats(winner);

        self.log.push(BattleEvent::ReturnHome { name: loser_name });

        self.storage.persist_entities();
        self.storage.persist_stats();

        let outcome = BattleOutcome {
            winner,
            loser,
            turns: self.turn,
        };
        tracing::info!(
            "Battle over after {} turns: {} defeated {}",
            outcome.turns,
            winner_name,
            self.name_of(loser)
        );

        self.state = BattleState::Resolved;
        self.outcome = Some(outcome);
        outcome
    }

    fn name_of(&self, id: LutemonId) -> String {
        self.storage
            .entity(id)
            .map(|l| l.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn turn_owner(&self) -> TurnOwner {
        self.turn_owner
    }

    /// Number of attacks resolved so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Fighter who attacks next (or landed the final blow once resolved).
    pub fn attacker(&self) -> Option<&Lutemon> {
        let (attacker, _) = self.fighters?.roles(self.turn_owner);
        self.storage.entity(attacker)
    }

    pub fn defender(&self) -> Option<&Lutemon> {
        let (_, defender) = self.fighters?.roles(self.turn_owner);
        self.storage.entity(defender)
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn storage(&self) -> &Storage {
        self.storage
    }
}
