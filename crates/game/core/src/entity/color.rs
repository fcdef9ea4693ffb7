//! Lutemon colors and their fixed stat table.

use core::str::FromStr;

use crate::error::CoreError;

/// The closed set of Lutemon colors.
///
/// Color is chosen at creation, never changes, and selects both the starting
/// stats and the per-training attack bonus through [`Color::profile`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    White,
    Green,
    Pink,
    Orange,
    Black,
}

/// Starting stats and training bonus for a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorProfile {
    pub attack: u32,
    pub defense: u32,
    pub max_health: u32,
    pub training_bonus: u32,
}

impl ColorProfile {
    const fn new(attack: u32, defense: u32, max_health: u32, training_bonus: u32) -> Self {
        Self {
            attack,
            defense,
            max_health,
            training_bonus,
        }
    }
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Green,
        Color::Pink,
        Color::Orange,
        Color::Black,
    ];

    /// Looks up the color's row in the stat table.
    pub const fn profile(self) -> ColorProfile {
        match self {
            Color::White => ColorProfile::new(5, 4, 20, 2),
            Color::Green => ColorProfile::new(6, 3, 19, 3),
            Color::Pink => ColorProfile::new(7, 2, 18, 4),
            Color::Orange => ColorProfile::new(8, 1, 17, 5),
            Color::Black => ColorProfile::new(9, 0, 16, 6),
        }
    }

    pub const fn training_bonus(self) -> u32 {
        self.profile().training_bonus
    }

    /// RGB hex string used by presentation layers to paint the creature.
    pub const fn display_color(self) -> &'static str {
        match self {
            Color::White => "#F5F5F5",
            Color::Green => "#4CAF50",
            Color::Pink => "#E91E63",
            Color::Orange => "#FF9800",
            Color::Black => "#212121",
        }
    }

    /// Parses a color name, case-insensitively.
    ///
    /// Anything outside the closed set is rejected instead of falling back to
    /// a default color.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        Self::from_str(name.trim()).map_err(|_| CoreError::UnknownColor(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_published_values() {
        let rows: Vec<_> = Color::ALL
            .iter()
            .map(|c| {
                let p = c.profile();
                (p.attack, p.defense, p.max_health, p.training_bonus)
            })
            .collect();

        assert_eq!(
            rows,
            vec![(5, 4, 20, 2), (6, 3, 19, 3), (7, 2, 18, 4), (8, 1, 17, 5), (9, 0, 16, 6)]
        );
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!(Color::parse("white").unwrap(), Color::White);
        assert_eq!(Color::parse("ORANGE").unwrap(), Color::Orange);
        assert_eq!(Color::Pink.to_string(), "pink");
    }

    #[test]
    fn parse_rejects_unknown_color() {
        let err = Color::parse("purple").unwrap_err();
        assert_eq!(err, CoreError::UnknownColor("purple".to_string()));
    }
}
