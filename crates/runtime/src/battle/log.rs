//! Battle log entries.
//!
//! Entries are structured so tests and renderers can match on them; their
//! `Display` output is the human-readable log line.

use std::fmt;

use lutemon_core::Lutemon;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    /// Fighter introduction written when a battle starts.
    Fighter { slot: u8, description: String },
    Attack { attacker: String, defender: String },
    Critical { bonus: u32 },
    Damage {
        defender: String,
        damage: u32,
        health: u32,
        max_health: u32,
    },
    Defeated { name: String },
    Victory { name: String },
    ReturnHome { name: String },
}

impl BattleEvent {
    pub(crate) fn fighter(slot: u8, lutemon: &Lutemon) -> Self {
        Self::Fighter {
            slot,
            description: lutemon.to_string(),
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fighter { slot, description } => write!(f, "Fighter {}: {}", slot, description),
            Self::Attack { attacker, defender } => write!(f, "{} attacks {}!", attacker, defender),
            Self::Critical { bonus } => write!(f, "Critical hit! +{} damage!", bonus),
            Self::Damage {
                defender,
                damage,
                health,
                max_health,
            } => write!(
                f,
                "{} takes {} damage! (HP: {}/{})",
                defender, damage, health, max_health
            ),
            Self::Defeated { name } => write!(f, "{} has been defeated!", name),
            Self::Victory { name } => write!(f, "{} wins and gains experience!", name),
            Self::ReturnHome { name } => write!(f, "{} returns to home to recover!", name),
        }
    }
}

/// Ordered entries of the current battle; cleared when a new battle starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattleLog {
    entries: Vec<BattleEvent>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: BattleEvent) {
        tracing::debug!(target: "battle", "{}", event);
        self.entries.push(event);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[BattleEvent] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleEvent> {
        self.entries.iter()
    }

    /// Rendered log lines.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_render_in_order() {
        let mut log = BattleLog::new();
        log.push(BattleEvent::Attack {
            attacker: "Black1".into(),
            defender: "White1".into(),
        });
        log.push(BattleEvent::Critical { bonus: 5 });
        log.push(BattleEvent::Damage {
            defender: "White1".into(),
            damage: 10,
            health: 10,
            max_health: 20,
        });

        assert_eq!(
            log.lines(),
            vec![
                "Black1 attacks White1!",
                "Critical hit! +5 damage!",
                "White1 takes 10 damage! (HP: 10/20)",
            ]
        );

        log.clear();
        assert!(log.is_empty());
    }
}
