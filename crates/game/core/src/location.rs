//! Places an entity can occupy.

use core::str::FromStr;

use crate::config::GameConfig;
use crate::error::CoreError;

/// One of the three roster locations.
///
/// Every entity is in exactly one location at a time. [`Location::Battle`]
/// holds at most [`GameConfig::BATTLE_CAPACITY`] entities; the others are
/// unbounded.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum Location {
    #[default]
    Home,
    Training,
    Battle,
}

impl Location {
    /// All locations in display order.
    pub const ALL: [Location; 3] = [Location::Home, Location::Training, Location::Battle];

    /// Maximum number of members, or `None` when unbounded.
    pub const fn capacity(self) -> Option<usize> {
        match self {
            Location::Battle => Some(GameConfig::BATTLE_CAPACITY),
            Location::Home | Location::Training => None,
        }
    }

    /// Parses a location name, case-insensitively.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        Self::from_str(name.trim()).map_err(|_| CoreError::UnknownLocation(name.to_string()))
    }
}
