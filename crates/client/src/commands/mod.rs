//! One module per group of subcommands.

mod battle;
mod data;
mod roster;
mod stats;

pub use battle::Battle;
pub use data::{Clear, Export, Import};
pub use roster::{Create, Heal, List, Move, Remove, Train};
pub use stats::Stats;

use lutemon_core::{Color, CoreError, Location, LutemonId};

fn parse_color(value: &str) -> Result<Color, CoreError> {
    Color::parse(value)
}

fn parse_location(value: &str) -> Result<Location, CoreError> {
    Location::parse(value)
}

fn parse_id(value: &str) -> Result<LutemonId, String> {
    value
        .trim_start_matches('#')
        .parse::<u32>()
        .map(LutemonId)
        .map_err(|e| format!("invalid lutemon id '{value}': {e}"))
}
