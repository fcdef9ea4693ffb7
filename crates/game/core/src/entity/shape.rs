//! Cosmetic polygon descriptor.
//!
//! The shape has no influence on combat; it is generated once when the entity
//! is created and handed to renderers as-is.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::{RngOracle, compute_seed};

/// Point indices of a 3-5 sided polygon, each in `0..=7`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    points: ArrayVec<u8, { GameConfig::MAX_SHAPE_POINTS }>,
}

impl Shape {
    /// Radius reported for out-of-range point queries.
    pub const DEFAULT_RADIUS: f32 = 0.5;

    /// Draws a new shape from the oracle.
    ///
    /// `seed` is the roster's shape seed and `subject` the new entity's id, so
    /// the same roster replays to the same shapes.
    pub fn generate(rng: &(impl RngOracle + ?Sized), seed: u64, subject: u32) -> Self {
        let count = rng.range(
            compute_seed(seed, 0, subject, 1),
            GameConfig::MIN_SHAPE_POINTS,
            GameConfig::MAX_SHAPE_POINTS as u32,
        );

        let points = (0..count)
            .map(|i| {
                rng.range(
                    compute_seed(seed, 0, subject, 2 + i),
                    0,
                    GameConfig::MAX_SHAPE_INDEX,
                ) as u8
            })
            .collect();

        Self { points }
    }

    /// Builds a shape from stored point indices.
    ///
    /// Extra points beyond the maximum are dropped and indices are clamped.
    pub fn from_points(points: impl IntoIterator<Item = u8>) -> Self {
        let points = points
            .into_iter()
            .take(GameConfig::MAX_SHAPE_POINTS)
            .map(|p| p.min(GameConfig::MAX_SHAPE_INDEX as u8))
            .collect();
        Self { points }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[u8] {
        &self.points
    }

    /// Relative radius (roughly 0.33-0.92) of the given polygon point.
    pub fn radius(&self, index: usize) -> f32 {
        match self.points.get(index) {
            Some(&p) => (p as f32 + 4.0) / 12.0,
            None => Self::DEFAULT_RADIUS,
        }
    }
}
