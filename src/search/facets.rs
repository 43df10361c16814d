//! Faceted statistics over a filtered result set.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{Category, Color, Difficulty, Undertone};

/// Per-facet counts computed over the *filtered* colors, not the catalog.
///
/// This is what lets a caller render "N results in category X" counters next
/// to an active filter. Only populated buckets appear; a filter matching
/// nothing yields all-empty maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetStats {
    /// Result count per category.
    pub categories: BTreeMap<Category, usize>,
    /// Result count per undertone.
    pub undertones: BTreeMap<Undertone, usize>,
    /// Result count per difficulty tier.
    pub difficulties: BTreeMap<Difficulty, usize>,
    /// Result count per depth level.
    pub levels: BTreeMap<u8, usize>,
}

impl FacetStats {
    /// Tally facets over a set of colors.
    #[must_use]
    pub fn tally<'a>(colors: impl IntoIterator<Item = &'a Color>) -> Self {
        let mut stats = Self::default();
        for color in colors {
            *stats.categories.entry(color.category).or_default() += 1;
            *stats.undertones.entry(color.undertone).or_default() += 1;
            *stats.difficulties.entry(color.difficulty).or_default() += 1;
            *stats.levels.entry(color.level).or_default() += 1;
        }
        stats
    }

    /// Whether every facet map is empty (zero results).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.undertones.is_empty()
            && self.difficulties.is_empty()
            && self.levels.is_empty()
    }

    /// Total tallied colors (identical across facets by construction).
    #[must_use]
    pub fn total(&self) -> usize {
        self.categories.values().sum()
    }
}
