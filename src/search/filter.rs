//! The explicit filter record accepted by the search engine.

use serde::{Deserialize, Serialize};

use crate::model::{Category, Color, Difficulty, Undertone};

/// Multi-field search filter.
///
/// Every field is independently optional; an absent field imposes no
/// constraint, so the default filter matches the whole catalog. Supplied
/// fields combine with logical AND, while the multi-value fields (category,
/// undertone, difficulty) match any of their listed values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorFilter {
    /// Match any of these categories. Empty = unconstrained.
    pub categories: Vec<Category>,
    /// Match any of these undertones. Empty = unconstrained.
    pub undertones: Vec<Undertone>,
    /// Match any of these difficulty tiers. Empty = unconstrained.
    pub difficulties: Vec<Difficulty>,
    /// Inclusive (min, max) depth level range.
    pub level_range: Option<(u8, u8)>,
    /// Availability flag to require.
    pub is_available: Option<bool>,
    /// Premium flag to require.
    pub is_premium: Option<bool>,
    /// Case-insensitive substrings: any tag of the color partially matching
    /// any entry is a hit. Empty = unconstrained.
    pub tags: Vec<String>,
    /// Inclusive (min, max) range on the price multiplier.
    pub price_range: Option<(f64, f64)>,
}

impl ColorFilter {
    /// A filter with no constraints; matches the full catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one category (additive with previous calls).
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Restrict to one undertone (additive with previous calls).
    #[must_use]
    pub fn with_undertone(mut self, undertone: Undertone) -> Self {
        self.undertones.push(undertone);
        self
    }

    /// Restrict to one difficulty tier (additive with previous calls).
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulties.push(difficulty);
        self
    }

    /// Restrict to an inclusive level range.
    #[must_use]
    pub fn with_level_range(mut self, min: u8, max: u8) -> Self {
        self.level_range = Some((min, max));
        self
    }

    /// Require the availability flag.
    #[must_use]
    pub fn with_availability(mut self, available: bool) -> Self {
        self.is_available = Some(available);
        self
    }

    /// Require the premium flag.
    #[must_use]
    pub fn with_premium(mut self, premium: bool) -> Self {
        self.is_premium = Some(premium);
        self
    }

    /// Add a tag substring (additive with previous calls).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Restrict to an inclusive price-multiplier range.
    #[must_use]
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some((min, max));
        self
    }

    /// Whether a color satisfies every supplied constraint.
    #[must_use]
    pub fn matches(&self, color: &Color) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&color.category) {
            return false;
        }
        if !self.undertones.is_empty() && !self.undertones.contains(&color.undertone) {
            return false;
        }
        if !self.difficulties.is_empty() && !self.difficulties.contains(&color.difficulty) {
            return false;
        }
        if let Some((min, max)) = self.level_range {
            if color.level < min || color.level > max {
                return false;
            }
        }
        if let Some(available) = self.is_available {
            if color.is_available != available {
                return false;
            }
        }
        if let Some(premium) = self.is_premium {
            if color.is_premium != premium {
                return false;
            }
        }
        if !self.tags.is_empty() {
            let hit = self.tags.iter().any(|wanted| {
                let wanted = wanted.to_lowercase();
                color
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&wanted))
            });
            if !hit {
                return false;
            }
        }
        if let Some((min, max)) = self.price_range {
            if color.price_multiplier < min || color.price_multiplier > max {
                return false;
            }
        }
        true
    }
}

/// Commonly-requested filter shapes exposed to picker interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum FilterPreset {
    /// Available natural shades.
    Natural,
    /// Available blonde shades.
    Blonde,
    /// Available premium shades.
    Premium,
    /// Available basic-difficulty shades, for first-time buyers.
    Beginner,
    /// Available warm-undertone shades.
    Warm,
    /// Available cool-undertone shades.
    Cool,
}

impl FilterPreset {
    /// The filter this preset expands to.
    #[must_use]
    pub fn filter(&self) -> ColorFilter {
        let base = ColorFilter::new().with_availability(true);
        match self {
            Self::Natural => base.with_category(Category::Natural),
            Self::Blonde => base.with_category(Category::Blonde),
            Self::Premium => base.with_premium(true),
            Self::Beginner => base.with_difficulty(Difficulty::Basic),
            Self::Warm => base.with_undertone(Undertone::Warm),
            Self::Cool => base.with_undertone(Undertone::Cool),
        }
    }

    /// All presets.
    #[must_use]
    pub const fn all() -> &'static [FilterPreset] {
        &[
            Self::Natural,
            Self::Blonde,
            Self::Premium,
            Self::Beginner,
            Self::Warm,
            Self::Cool,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn test_empty_filter_matches_everything() {
        let catalog = Catalog::builtin().unwrap();
        let filter = ColorFilter::new();
        assert!(catalog.colors().all(|c| filter.matches(c)));
    }

    #[test]
    fn test_multi_value_field_is_or() {
        let catalog = Catalog::builtin().unwrap();
        let filter = ColorFilter::new()
            .with_category(Category::Natural)
            .with_category(Category::Blonde);
        let burgundy = catalog.get("#99J").unwrap();
        let black = catalog.get("#1").unwrap();
        assert!(!filter.matches(burgundy));
        assert!(filter.matches(black));
    }

    #[test]
    fn test_tag_match_is_substring_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        let black = catalog.get("#1").unwrap();
        assert!(ColorFilter::new().with_tag("PRET").matches(black));
        assert!(!ColorFilter::new().with_tag("dourado").matches(black));
    }

    #[test]
    fn test_ranges_are_inclusive() {
        let catalog = Catalog::builtin().unwrap();
        let platinum = catalog.get("#10").unwrap();
        assert!(ColorFilter::new().with_level_range(10, 10).matches(platinum));
        assert!(ColorFilter::new()
            .with_price_range(2.0, 2.0)
            .matches(platinum));
        assert!(!ColorFilter::new().with_level_range(1, 9).matches(platinum));
    }

    #[test]
    fn test_presets_constrain_availability() {
        for preset in FilterPreset::all() {
            assert_eq!(preset.filter().is_available, Some(true));
        }
    }

    #[test]
    fn test_filter_serde_round_trip() {
        let filter = ColorFilter::new()
            .with_category(Category::Blonde)
            .with_premium(true)
            .with_level_range(6, 10);
        let json = serde_json::to_string(&filter).unwrap();
        let back: ColorFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(filter, back);
    }
}
