use crate::entity::{Color, Lutemon, LutemonId};

/// Per-entity counters and stat history.
///
/// Histories are append-only and never hold two adjacent equal values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LutemonStats {
    lutemon_id: LutemonId,
    color_type: Color,
    battles_won: u32,
    battles_lost: u32,
    training_count: u32,
    attack_history: Vec<u32>,
    experience_history: Vec<u32>,
}

impl LutemonStats {
    pub fn new(lutemon_id: LutemonId, color_type: Color) -> Self {
        Self {
            lutemon_id,
            color_type,
            battles_won: 0,
            battles_lost: 0,
            training_count: 0,
            attack_history: Vec::new(),
            experience_history: Vec::new(),
        }
    }

    pub fn record_win(&mut self) {
        self.battles_won += 1;
    }

    pub fn record_loss(&mut self) {
        self.battles_lost += 1;
    }

    pub fn record_training(&mut self) {
        self.training_count += 1;
    }

    /// Appends the entity's current total attack and experience to the
    /// histories, skipping values equal to the last recorded point.
    ///
    /// # Panics
    ///
    /// Panics if `lutemon` is not the entity these stats belong to.
    pub fn record_stats(&mut self, lutemon: &Lutemon) {
        assert_eq!(
            lutemon.id(),
            self.lutemon_id,
            "stats for {} cannot record lutemon {}",
            self.lutemon_id,
            lutemon.id()
        );

        push_if_changed(&mut self.attack_history, lutemon.total_attack());
        push_if_changed(&mut self.experience_history, lutemon.experience());
    }

    pub fn lutemon_id(&self) -> LutemonId {
        self.lutemon_id
    }

    pub fn color_type(&self) -> Color {
        self.color_type
    }

    pub fn battles_won(&self) -> u32 {
        self.battles_won
    }

    pub fn battles_lost(&self) -> u32 {
        self.battles_lost
    }

    pub fn battles_fought(&self) -> u32 {
        self.battles_won + self.battles_lost
    }

    /// Share of battles won, or `None` before the first battle.
    pub fn win_rate(&self) -> Option<f32> {
        match self.battles_fought() {
            0 => None,
            fought => Some(self.battles_won as f32 / fought as f32),
        }
    }

    pub fn training_count(&self) -> u32 {
        self.training_count
    }

    pub fn attack_history(&self) -> &[u32] {
        &self.attack_history
    }

    pub fn experience_history(&self) -> &[u32] {
        &self.experience_history
    }
}

fn push_if_changed(history: &mut Vec<u32>, value: u32) {
    if history.last() != Some(&value) {
        history.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Shape;

    fn white(id: u32) -> Lutemon {
        Lutemon::new(LutemonId(id), "White", Color::White, Shape::default())
    }

    #[test]
    fn first_record_creates_initial_point() {
        let lutemon = white(1);
        let mut stats = LutemonStats::new(lutemon.id(), lutemon.color());
        stats.record_stats(&lutemon);

        assert_eq!(stats.attack_history(), &[5]);
        assert_eq!(stats.experience_history(), &[0]);
    }

    #[test]
    fn unchanged_values_are_not_appended() {
        let mut lutemon = white(1);
        let mut stats = LutemonStats::new(lutemon.id(), lutemon.color());
        stats.record_stats(&lutemon);
        stats.record_stats(&lutemon);
        lutemon.take_damage(3);
        stats.record_stats(&lutemon);

        assert_eq!(stats.attack_history().len(), 1);
        assert_eq!(stats.experience_history().len(), 1);

        lutemon.train();
        stats.record_stats(&lutemon);
        assert_eq!(stats.attack_history(), &[5, 8]);
        assert_eq!(stats.experience_history(), &[0, 1]);
    }

    #[test]
    fn histories_never_repeat_adjacent_values() {
        let mut lutemon = white(1);
        let mut stats = LutemonStats::new(lutemon.id(), lutemon.color());
        for step in 0..20 {
            if step % 3 == 0 {
                lutemon.train();
            }
            if step % 7 == 0 {
                lutemon.reset_stats();
            }
            stats.record_stats(&lutemon);
        }

        for history in [stats.attack_history(), stats.experience_history()] {
            assert!(history.windows(2).all(|w| w[0] != w[1]));
        }
    }

    #[test]
    fn counters_and_win_rate() {
        let mut stats = LutemonStats::new(LutemonId(1), Color::Green);
        assert_eq!(stats.win_rate(), None);

        stats.record_win();
        stats.record_win();
        stats.record_loss();
        stats.record_training();

        assert_eq!(stats.battles_won(), 2);
        assert_eq!(stats.battles_lost(), 1);
        assert_eq!(stats.training_count(), 1);
        assert!((stats.win_rate().unwrap() - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "cannot record lutemon")]
    fn recording_another_entity_panics() {
        let mut stats = LutemonStats::new(LutemonId(1), Color::White);
        stats.record_stats(&white(2));
    }
}
