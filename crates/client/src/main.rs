//! Command-line driver for the Lutemon roster.
//!
//! Run with: `lutemon <command>`

mod commands;
mod logging;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use commands::{Battle, Clear, Create, Export, Heal, Import, List, Move, Remove, Stats, Train};
use lutemon_runtime::RuntimeConfig;

/// Manage, train and battle Lutemons
#[derive(Parser)]
#[command(name = "lutemon")]
#[command(about = "Manage, train and battle Lutemons", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Create a new Lutemon at home
    Create(Create),

    /// List Lutemons, optionally in one location
    List(List),

    /// Move a Lutemon to another location
    Move(Move),

    /// Train a Lutemon once
    Train(Train),

    /// Restore a Lutemon to full health
    Heal(Heal),

    /// Fight the two Lutemons in the battle area
    Battle(Battle),

    /// Show statistics
    Stats(Stats),

    /// Export the roster to the export file
    Export(Export),

    /// Replace the roster with the export file
    Import(Import),

    /// Delete all saved data
    Clear(Clear),

    /// Remove a Lutemon from the roster
    Remove(Remove),
}

fn main() -> ExitCode {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report::report(&err),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = RuntimeConfig::from_env();
    logging::setup_logging()?;

    let mut storage = config.open_storage()?;

    match cli.command {
        Command::Create(cmd) => cmd.execute(&mut storage),
        Command::List(cmd) => cmd.execute(&storage),
        Command::Move(cmd) => cmd.execute(&mut storage),
        Command::Train(cmd) => cmd.execute(&mut storage),
        Command::Heal(cmd) => cmd.execute(&mut storage),
        Command::Battle(cmd) => cmd.execute(&mut storage, &config),
        Command::Stats(cmd) => cmd.execute(&storage),
        Command::Export(cmd) => cmd.execute(&storage),
        Command::Import(cmd) => cmd.execute(&mut storage),
        Command::Clear(cmd) => cmd.execute(&mut storage),
        Command::Remove(cmd) => cmd.execute(&mut storage),
    }
}
