//! Transformation cost estimation.
//!
//! The estimator is a pure pricing formula over two catalog entries: the
//! same inputs always produce the same output, and an unknown code on
//! either side degrades to a zero cost rather than an error, so checkout
//! glue can render "no estimate" without special cases.

mod formulation;

pub use formulation::{generate_formulation, ColorFormulation, FormulaPart};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::Difficulty;

/// Base cost unit every multiplier applies to.
pub const BASE_COST: f64 = 100.0;

/// Hair length tiers priced by the estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HairLength {
    Short,
    #[default]
    Medium,
    Long,
    ExtraLong,
}

impl HairLength {
    /// Cost multiplier for this length.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Short => 1.0,
            Self::Medium => 1.3,
            Self::Long => 1.7,
            Self::ExtraLong => 2.2,
        }
    }

    /// All lengths, shortest first.
    #[must_use]
    pub const fn all() -> &'static [HairLength] {
        &[Self::Short, Self::Medium, Self::Long, Self::ExtraLong]
    }
}

/// Cost multiplier for the target color's difficulty tier.
#[must_use]
pub const fn difficulty_multiplier(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Basic => 1.0,
        Difficulty::Intermediate => 1.2,
        Difficulty::Advanced => 1.5,
        Difficulty::Premium => 2.0,
    }
}

/// Estimate the cost of transforming `from` into `to`.
///
/// ```text
/// cost = 100 × length × (1 + 0.2·|Δlevel|) × difficulty(to) × priceMultiplier(to)
/// ```
///
/// rounded to the nearest whole unit. Returns `0` if either code is unknown.
#[must_use]
pub fn transformation_cost(catalog: &Catalog, from: &str, to: &str, length: HairLength) -> u32 {
    let (Some(from_color), Some(to_color)) = (catalog.get(from), catalog.get(to)) else {
        return 0;
    };

    let level_gap = f64::from(from_color.level_gap(to_color));
    let complexity = 1.0 + level_gap * 0.2;

    let cost = BASE_COST
        * length.multiplier()
        * complexity
        * difficulty_multiplier(to_color.difficulty)
        * to_color.price_multiplier;

    cost.round() as u32
}
