//! Roster management commands.

use anyhow::Result;
use clap::Parser;
use lutemon_core::{Color, Location, Lutemon, LutemonId};
use lutemon_runtime::Storage;

use super::{parse_color, parse_id, parse_location};

/// Create a new Lutemon at home
#[derive(Parser, Debug)]
pub struct Create {
    pub name: String,

    /// white, green, pink, orange or black
    #[arg(value_parser = parse_color)]
    pub color: Color,
}

impl Create {
    pub fn execute(self, storage: &mut Storage) -> Result<()> {
        let id = storage.create_entity(self.name, self.color);
        if let Some(lutemon) = storage.entity(id) {
            println!("Created {}", line(lutemon));
        }
        Ok(())
    }
}

/// List Lutemons
#[derive(Parser, Debug)]
pub struct List {
    /// Only show this location
    #[arg(value_parser = parse_location)]
    pub location: Option<Location>,
}

impl List {
    pub fn execute(self, storage: &Storage) -> Result<()> {
        let locations = match self.location {
            Some(location) => vec![location],
            None => Location::ALL.to_vec(),
        };

        for location in locations {
            let members = storage.entities_by_location(location);
            match location.capacity() {
                Some(capacity) => println!("{} ({}/{}):", location, members.len(), capacity),
                None => println!("{} ({}):", location, members.len()),
            }
            for lutemon in members {
                println!("  {}", line(lutemon));
            }
        }
        Ok(())
    }
}

/// Move a Lutemon to another location
#[derive(Parser, Debug)]
pub struct Move {
    #[arg(value_parser = parse_id)]
    pub id: LutemonId,

    /// home, training or battle
    #[arg(value_parser = parse_location)]
    pub location: Location,
}

impl Move {
    pub fn execute(self, storage: &mut Storage) -> Result<()> {
        storage.move_entity(self.id, self.location)?;
        println!("Moved {} to {}", self.id, self.location);
        Ok(())
    }
}

/// Train a Lutemon once
#[derive(Parser, Debug)]
pub struct Train {
    #[arg(value_parser = parse_id)]
    pub id: LutemonId,

    /// Number of sessions
    #[arg(short, long, default_value_t = 1)]
    pub times: u32,
}

impl Train {
    pub fn execute(self, storage: &mut Storage) -> Result<()> {
        for _ in 0..self.times {
            storage.train_entity(self.id)?;
        }
        if let Some(lutemon) = storage.entity(self.id) {
            println!("Trained {}", line(lutemon));
        }
        Ok(())
    }
}

/// Restore a Lutemon to full health
#[derive(Parser, Debug)]
pub struct Heal {
    #[arg(value_parser = parse_id)]
    pub id: LutemonId,
}

impl Heal {
    pub fn execute(self, storage: &mut Storage) -> Result<()> {
        storage.heal_entity(self.id)?;
        if let Some(lutemon) = storage.entity(self.id) {
            println!("Healed {}", line(lutemon));
        }
        Ok(())
    }
}

/// Remove a Lutemon from the roster
#[derive(Parser, Debug)]
pub struct Remove {
    #[arg(value_parser = parse_id)]
    pub id: LutemonId,
}

impl Remove {
    pub fn execute(self, storage: &mut Storage) -> Result<()> {
        match storage.remove_entity(self.id) {
            Some(lutemon) => println!("Removed {}", line(&lutemon)),
            None => anyhow::bail!("lutemon {} not found", self.id),
        }
        Ok(())
    }
}

fn line(lutemon: &Lutemon) -> String {
    format!("{} {}", lutemon.id(), lutemon)
}
