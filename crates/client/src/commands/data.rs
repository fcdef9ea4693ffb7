//! Import, export and clear commands.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use lutemon_runtime::Storage;

/// Export the roster to the export file
#[derive(Parser, Debug)]
pub struct Export {}

impl Export {
    pub fn execute(self, storage: &Storage) -> Result<()> {
        storage.export_entities()?;
        println!("Exported {} lutemons", storage.entity_count());
        Ok(())
    }
}

/// Replace the roster with the contents of the export file
#[derive(Parser, Debug)]
pub struct Import {}

impl Import {
    pub fn execute(self, storage: &mut Storage) -> Result<()> {
        let count = storage.import_entities()?;
        println!("Imported {} lutemons", count);
        Ok(())
    }
}

/// Delete all saved data
#[derive(Parser, Debug)]
pub struct Clear {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Clear {
    pub fn execute(self, storage: &mut Storage) -> Result<()> {
        if !self.yes && !confirm("Delete all lutemons and statistics?")? {
            println!("Cancelled");
            return Ok(());
        }

        storage.clear_all()?;
        println!("All data cleared");
        Ok(())
    }
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
