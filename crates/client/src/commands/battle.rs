//! Battle command.

use anyhow::Result;
use clap::Parser;
use lutemon_core::PcgRng;
use lutemon_runtime::{RuntimeConfig, Storage, run_arena_battle};

/// Fight the two Lutemons in the battle area to the end
#[derive(Parser, Debug)]
pub struct Battle {
    /// Seed for critical hit rolls (default: BATTLE_SEED or random)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Battle {
    pub fn execute(self, storage: &mut Storage, config: &RuntimeConfig) -> Result<()> {
        let seed = self.seed.unwrap_or_else(|| config.battle_seed());
        let report = run_arena_battle(storage, &PcgRng, config.game.clone(), seed)?;

        for line in report.log.lines() {
            println!("{}", line);
        }

        let name = |id| {
            storage
                .entity(id)
                .map(|l| l.name().to_string())
                .unwrap_or_default()
        };
        println!(
            "\n{} won after {} turns (seed {})",
            name(report.outcome.winner),
            report.outcome.turns,
            seed
        );
        Ok(())
    }
}
