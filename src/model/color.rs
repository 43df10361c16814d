//! The `Color` entity and its classification enums.
//!
//! Category, undertone, and difficulty are closed enumerations: a dataset
//! entry using any other value is rejected at parse time, which protects
//! index construction from silently dropping unrecognized buckets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::ColorCode;

/// Top-level color family.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Natural blacks and browns.
    Natural,
    /// The blonde scale, including platinum and golden shades.
    Blonde,
    /// Fashion shades: reds, burgundy, fantasy tones.
    Fashion,
}

impl Category {
    /// Human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Blonde => "blonde",
            Self::Fashion => "fashion",
        }
    }

    /// All categories, in display order.
    #[must_use]
    pub const fn all() -> &'static [Category] {
        &[Self::Natural, Self::Blonde, Self::Fashion]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dominant cast of a color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Cool,
    Warm,
    Neutral,
}

impl Undertone {
    /// Human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cool => "cool",
            Self::Warm => "warm",
            Self::Neutral => "neutral",
        }
    }

    /// All undertones.
    #[must_use]
    pub const fn all() -> &'static [Undertone] {
        &[Self::Cool, Self::Warm, Self::Neutral]
    }

    /// Whether `self` and `other` form the warm/cool opposite pair.
    ///
    /// Neutral has no opposite.
    #[must_use]
    pub const fn is_opposite_of(&self, other: Undertone) -> bool {
        matches!(
            (self, other),
            (Self::Warm, Undertone::Cool) | (Self::Cool, Undertone::Warm)
        )
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Technical complexity tier for achieving and maintaining a color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
    Premium,
}

impl Difficulty {
    /// Human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Premium => "premium",
        }
    }

    /// All tiers, from simplest to most demanding.
    #[must_use]
    pub const fn all() -> &'static [Difficulty] {
        &[
            Self::Basic,
            Self::Intermediate,
            Self::Advanced,
            Self::Premium,
        ]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four directed compatibility relations attached to each color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompatibilityKind {
    Harmonious,
    Gradient,
    Highlights,
    Avoid,
}

impl CompatibilityKind {
    /// Relation name as it appears in the dataset.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Harmonious => "harmonious",
            Self::Gradient => "gradient",
            Self::Highlights => "highlights",
            Self::Avoid => "avoid",
        }
    }
}

/// Directed compatibility edges of a color, keyed by relation.
///
/// These are adjacency lists from the owning color outward: if A lists B as
/// harmonious, B is not required to list A back. The asymmetry is a domain
/// rule and is preserved throughout the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Compatibility {
    /// Shades that blend well with this color.
    pub harmonious: Vec<ColorCode>,
    /// Shades suited for gradient/ombre transitions.
    pub gradient: Vec<ColorCode>,
    /// Shades suited for highlights over this base.
    pub highlights: Vec<ColorCode>,
    /// Shades that should not be combined with this color.
    pub avoid: Vec<ColorCode>,
}

impl Compatibility {
    /// The list for a given relation.
    #[must_use]
    pub fn list(&self, kind: CompatibilityKind) -> &[ColorCode] {
        match kind {
            CompatibilityKind::Harmonious => &self.harmonious,
            CompatibilityKind::Gradient => &self.gradient,
            CompatibilityKind::Highlights => &self.highlights,
            CompatibilityKind::Avoid => &self.avoid,
        }
    }

    /// Every referenced code paired with the relation that lists it.
    pub fn referenced(&self) -> impl Iterator<Item = (CompatibilityKind, &ColorCode)> {
        let kinds = [
            CompatibilityKind::Harmonious,
            CompatibilityKind::Gradient,
            CompatibilityKind::Highlights,
            CompatibilityKind::Avoid,
        ];
        kinds
            .into_iter()
            .flat_map(move |kind| self.list(kind).iter().map(move |code| (kind, code)))
    }

    /// Codes present in `avoid` that also appear in a positive list.
    ///
    /// The dataset does not guarantee disjointness; overlaps are flagged at
    /// load time but never stripped, since the source intent is ambiguous.
    #[must_use]
    pub fn avoid_overlap(&self) -> Vec<&ColorCode> {
        self.avoid
            .iter()
            .filter(|code| {
                self.harmonious.contains(code)
                    || self.gradient.contains(code)
                    || self.highlights.contains(code)
            })
            .collect()
    }

    /// Whether `code` appears in the `avoid` list.
    #[must_use]
    pub fn avoids(&self, code: &str) -> bool {
        self.avoid.iter().any(|c| c.value() == code)
    }
}

/// Descriptive application notes for salon use. Not used by any algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalInfo {
    /// E.g. "30-45 minutos".
    pub processing_time: String,
    /// Developer (oxidant) volume, e.g. "20 vol".
    pub developer_volume: String,
    /// Free-form application notes.
    pub technical_notes: String,
    /// Recommended aftercare products/routines.
    #[serde(default)]
    pub aftercare: Vec<String>,
}

/// A catalog color entry.
///
/// Colors are reference data: built once from the dataset document and never
/// mutated afterward. All engine operations read them through the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    /// Unique catalog code, e.g. `"#613"`.
    pub code: ColorCode,
    /// Customer-facing name.
    pub commercial_name: String,
    /// Colorimetry chart name.
    pub technical_name: String,
    /// Display description.
    pub description: String,
    /// Color family.
    pub category: Category,
    /// Free-form classification within the category, e.g. "loiros dourados".
    pub subcategory: String,
    /// Dominant cast.
    pub undertone: Undertone,
    /// Depth scale, 1 (darkest) to 10 (lightest).
    pub level: u8,
    /// Technical complexity tier.
    pub difficulty: Difficulty,
    /// Display color value, e.g. `"#f8f6f0"`.
    pub hex_color: String,
    /// Scalar applied to a base price; always positive.
    pub price_multiplier: f64,
    /// Whether the color is currently offered.
    pub is_available: bool,
    /// Whether the color is a premium shade.
    pub is_premium: bool,
    /// Classification tags; insertion order is irrelevant.
    pub tags: BTreeSet<String>,
    /// Directed compatibility edges.
    pub compatibility: Compatibility,
    /// Optional salon application notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_info: Option<TechnicalInfo>,
}

impl Color {
    /// Absolute level distance to another color.
    #[must_use]
    pub fn level_gap(&self, other: &Color) -> u8 {
        self.level.abs_diff(other.level)
    }

    /// Number of tags shared exactly (case-sensitive) with another color.
    #[must_use]
    pub fn shared_tag_count(&self, other: &Color) -> usize {
        self.tags.intersection(&other.tags).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_color(code: &str, level: u8) -> Color {
        Color {
            code: ColorCode::from(code),
            commercial_name: "Test".to_string(),
            technical_name: "Test".to_string(),
            description: String::new(),
            category: Category::Natural,
            subcategory: String::new(),
            undertone: Undertone::Neutral,
            level,
            difficulty: Difficulty::Basic,
            hex_color: "#000000".to_string(),
            price_multiplier: 1.0,
            is_available: true,
            is_premium: false,
            tags: BTreeSet::new(),
            compatibility: Compatibility::default(),
            technical_info: None,
        }
    }

    #[test]
    fn test_enum_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Blonde).unwrap(), "\"blonde\"");
        let undertone: Undertone = serde_json::from_str("\"warm\"").unwrap();
        assert_eq!(undertone, Undertone::Warm);
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let result: Result<Category, _> = serde_json::from_str("\"pastel\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_undertone_opposites() {
        assert!(Undertone::Warm.is_opposite_of(Undertone::Cool));
        assert!(Undertone::Cool.is_opposite_of(Undertone::Warm));
        assert!(!Undertone::Neutral.is_opposite_of(Undertone::Warm));
        assert!(!Undertone::Warm.is_opposite_of(Undertone::Warm));
    }

    #[test]
    fn test_level_gap() {
        let dark = sample_color("#1", 1);
        let light = sample_color("#10", 10);
        assert_eq!(dark.level_gap(&light), 9);
        assert_eq!(light.level_gap(&dark), 9);
    }

    #[test]
    fn test_shared_tags_are_exact() {
        let mut a = sample_color("#1", 1);
        let mut b = sample_color("#2", 2);
        a.tags = ["natural", "preto"].iter().map(|s| s.to_string()).collect();
        b.tags = ["natural", "Preto"].iter().map(|s| s.to_string()).collect();
        // Case matters for tag similarity.
        assert_eq!(a.shared_tag_count(&b), 1);
    }

    #[test]
    fn test_avoid_overlap_detection() {
        let compat = Compatibility {
            harmonious: vec!["#2".into(), "#4".into()],
            gradient: vec![],
            highlights: vec![],
            avoid: vec!["#4".into(), "#613".into()],
        };
        let overlap = compat.avoid_overlap();
        assert_eq!(overlap.len(), 1);
        assert_eq!(*overlap[0], "#4");
    }

    #[test]
    fn test_referenced_covers_all_lists() {
        let compat = Compatibility {
            harmonious: vec!["#1".into()],
            gradient: vec!["#2".into()],
            highlights: vec!["#4".into()],
            avoid: vec!["#613".into()],
        };
        let refs: Vec<_> = compat.referenced().collect();
        assert_eq!(refs.len(), 4);
        assert_eq!(refs[0].0, CompatibilityKind::Harmonious);
        assert_eq!(refs[3].0, CompatibilityKind::Avoid);
    }
}
