//! Statistics command.

use anyhow::Result;
use clap::Parser;
use lutemon_core::{LutemonId, LutemonStats};
use lutemon_runtime::Storage;

use super::parse_id;

/// Show global statistics, or one Lutemon's history
#[derive(Parser, Debug)]
pub struct Stats {
    #[arg(value_parser = parse_id)]
    pub id: Option<LutemonId>,
}

impl Stats {
    pub fn execute(self, storage: &Storage) -> Result<()> {
        let stats = storage.stats();

        if let Some(id) = self.id {
            let Some(own) = stats.lutemon_stats(id) else {
                anyhow::bail!("no statistics for lutemon {}", id);
            };
            print_lutemon(storage, own);
            return Ok(());
        }

        println!("Battles:   {}", stats.total_battles());
        println!("Trainings: {}", stats.total_trainings());
        println!("Lutemons by color:");
        for (color, count) in stats.color_distribution() {
            println!("  {:<7} {}", color, count);
        }
        for own in stats.all() {
            print_lutemon(storage, own);
        }
        Ok(())
    }
}

fn print_lutemon(storage: &Storage, own: &LutemonStats) {
    let name = storage
        .entity(own.lutemon_id())
        .map(|l| l.name().to_string())
        .unwrap_or_else(|| "(removed)".to_string());
    let win_rate = own
        .win_rate()
        .map(|rate| format!("{:.0}%", rate * 100.0))
        .unwrap_or_else(|| "-".to_string());

    println!(
        "{} {} [{}]: won {}, lost {}, win rate {}, trainings {}",
        own.lutemon_id(),
        name,
        own.color_type(),
        own.battles_won(),
        own.battles_lost(),
        win_rate,
        own.training_count()
    );
    println!("    attack:     {:?}", own.attack_history());
    println!("    experience: {:?}", own.experience_history());
}
