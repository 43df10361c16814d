//! Harmonization recommendations.
//!
//! For a base color, the recommender assembles up to four groups of
//! companion shades following classic color-theory schemes. A group that
//! would be empty is omitted entirely rather than emitted with no colors.

mod graph;

pub use graph::compatible_colors;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::ColorCode;

/// Color-theory scheme of a recommendation group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    /// Same undertone and family, nearby depth levels.
    Monochromatic,
    /// Neighboring shades from the base's harmonious list.
    Analogous,
    /// Contrasting undertones at a close depth level.
    Complementary,
    /// Gradient companions for three-tone blends.
    Triadic,
}

impl HarmonyKind {
    /// Scheme name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
        }
    }

    /// Display description of the scheme.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Monochromatic => "Shades from the same family at different depths",
            Self::Analogous => "Neighboring shades that create smooth transitions",
            Self::Complementary => "Contrasting shades for visual impact",
            Self::Triadic => "Three-tone combination for complex gradients",
        }
    }
}

/// One recommendation group.
#[derive(Debug, Clone, Serialize)]
pub struct HarmonyGroup {
    /// Scheme this group follows.
    #[serde(rename = "type")]
    pub kind: HarmonyKind,
    /// Recommended companion codes, never empty.
    pub colors: Vec<ColorCode>,
    /// Display description.
    pub description: &'static str,
}

/// Ordered recommendation groups for a base color.
#[derive(Debug, Clone, Serialize)]
pub struct Harmonization {
    /// The base color the groups were computed for.
    pub base: ColorCode,
    /// Groups in fixed scheme order; empty schemes are absent.
    pub groups: Vec<HarmonyGroup>,
}

/// Generate harmonization groups for a base color.
///
/// Returns `None` for an unknown code.
#[must_use]
pub fn generate_harmonization(catalog: &Catalog, code: &str) -> Option<Harmonization> {
    let base = catalog.get(code)?;
    let mut groups = Vec::new();

    // Monochromatic: same undertone and family, within two levels, base excluded.
    let monochromatic: Vec<ColorCode> = catalog
        .colors()
        .filter(|c| {
            c.undertone == base.undertone
                && c.category == base.category
                && c.level_gap(base) <= 2
                && c.code != base.code
        })
        .take(3)
        .map(|c| c.code.clone())
        .collect();
    push_group(&mut groups, HarmonyKind::Monochromatic, monochromatic);

    // Analogous: leading entries of the base's harmonious list.
    let analogous: Vec<ColorCode> = base
        .compatibility
        .harmonious
        .iter()
        .take(3)
        .cloned()
        .collect();
    push_group(&mut groups, HarmonyKind::Analogous, analogous);

    // Complementary: different undertone within one level.
    let complementary: Vec<ColorCode> = catalog
        .colors()
        .filter(|c| c.undertone != base.undertone && c.level_gap(base) <= 1)
        .take(2)
        .map(|c| c.code.clone())
        .collect();
    push_group(&mut groups, HarmonyKind::Complementary, complementary);

    // Triadic: only when the gradient list supports a three-tone blend.
    if base.compatibility.gradient.len() >= 2 {
        let triadic: Vec<ColorCode> = base
            .compatibility
            .gradient
            .iter()
            .take(2)
            .cloned()
            .collect();
        push_group(&mut groups, HarmonyKind::Triadic, triadic);
    }

    Some(Harmonization {
        base: base.code.clone(),
        groups,
    })
}

fn push_group(groups: &mut Vec<HarmonyGroup>, kind: HarmonyKind, colors: Vec<ColorCode>) {
    if !colors.is_empty() {
        groups.push(HarmonyGroup {
            kind,
            colors,
            description: kind.description(),
        });
    }
}
