//! Mixing recipes for achieving a target color.
//!
//! Basic shades apply directly; demanding shades are approximated by
//! blending catalog bases. Recipes reference well-known chart anchors
//! (platinum `#10`, dark blonde `#6`, honey `#16`, light blonde `#8`) and
//! fall back gracefully when a custom dataset lacks them: the part list
//! still names the codes, and the caller resolves what it can.

use serde::Serialize;

use super::{transformation_cost, HairLength};
use crate::catalog::Catalog;
use crate::model::{Category, ColorCode, Difficulty, Undertone};

/// One ingredient of a mixing recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormulaPart {
    /// Catalog code of the ingredient shade.
    pub code: ColorCode,
    /// Share of the mix, in percent. Parts of a recipe sum to 100.
    pub percentage: u8,
}

impl FormulaPart {
    fn new(code: &str, percentage: u8) -> Self {
        Self {
            code: ColorCode::from(code),
            percentage,
        }
    }
}

/// A complete recipe for reaching a target shade.
#[derive(Debug, Clone, Serialize)]
pub struct ColorFormulation {
    /// The shade the recipe produces.
    pub target: ColorCode,
    /// Ingredient shades and their shares.
    pub parts: Vec<FormulaPart>,
    /// Ordered application steps.
    pub instructions: Vec<String>,
    /// Estimated cost from a medium-brown base at medium length.
    pub estimated_cost: u32,
}

/// Build a mixing recipe for a target color.
///
/// Returns `None` for an unknown target code. The cost estimate assumes a
/// `#4` (medium brown) starting point, the chart's canonical base.
#[must_use]
pub fn generate_formulation(catalog: &Catalog, target: &str) -> Option<ColorFormulation> {
    let color = catalog.get(target)?;

    let processing_time = color
        .technical_info
        .as_ref()
        .map(|info| info.processing_time.as_str());
    let developer_volume = color
        .technical_info
        .as_ref()
        .map(|info| info.developer_volume.as_str());

    if color.difficulty == Difficulty::Basic {
        return Some(ColorFormulation {
            target: color.code.clone(),
            parts: vec![FormulaPart {
                code: color.code.clone(),
                percentage: 100,
            }],
            instructions: vec![
                "Apply directly over natural hair".to_string(),
                format!(
                    "Processing time: {}",
                    processing_time.unwrap_or("30-45 minutos")
                ),
                format!(
                    "Developer volume: {}",
                    developer_volume.unwrap_or("20 vol")
                ),
            ],
            estimated_cost: transformation_cost(catalog, "#4", target, HairLength::Medium),
        });
    }

    let mut parts = Vec::new();
    let mut instructions = vec!["Pre-lighten if necessary".to_string()];

    if color.category == Category::Blonde && color.level >= 8 {
        parts.push(FormulaPart::new("#10", 60));
        parts.push(FormulaPart {
            code: color.code.clone(),
            percentage: 40,
        });
        instructions.push("Lift to level 9-10".to_string());
        instructions.push("Apply toner in the indicated proportion".to_string());
    } else if color.undertone == Undertone::Warm {
        parts.push(FormulaPart::new("#6", 50));
        parts.push(FormulaPart::new("#16", 30));
        parts.push(FormulaPart {
            code: color.code.clone(),
            percentage: 20,
        });
        instructions.push("Blend the warm tones in proportion".to_string());
    } else {
        parts.push(FormulaPart {
            code: color.code.clone(),
            percentage: 80,
        });
        parts.push(FormulaPart::new("#8", 20));
    }

    instructions.push(format!(
        "Processing time: {}",
        processing_time.unwrap_or("45-60 minutos")
    ));
    instructions.push("Tone if necessary".to_string());

    Some(ColorFormulation {
        target: color.code.clone(),
        parts,
        instructions,
        estimated_cost: transformation_cost(catalog, "#4", target, HairLength::Medium),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_target_returns_none() {
        let catalog = Catalog::builtin().unwrap();
        assert!(generate_formulation(&catalog, "#999").is_none());
    }

    #[test]
    fn test_basic_shade_applies_directly() {
        let catalog = Catalog::builtin().unwrap();
        let formulation = generate_formulation(&catalog, "#1").unwrap();
        assert_eq!(formulation.parts.len(), 1);
        assert_eq!(formulation.parts[0].code, "#1");
        assert_eq!(formulation.parts[0].percentage, 100);
    }

    #[test]
    fn test_high_blonde_blends_platinum_base() {
        let catalog = Catalog::builtin().unwrap();
        let formulation = generate_formulation(&catalog, "#613").unwrap();
        let codes: Vec<_> = formulation.parts.iter().map(|p| p.code.value()).collect();
        assert_eq!(codes, vec!["#10", "#613"]);
    }

    #[test]
    fn test_warm_target_blends_warm_bases() {
        let catalog = Catalog::builtin().unwrap();
        // #27: fashion, warm, level 7 -> warm blend branch.
        let formulation = generate_formulation(&catalog, "#27").unwrap();
        let codes: Vec<_> = formulation.parts.iter().map(|p| p.code.value()).collect();
        assert_eq!(codes, vec!["#6", "#16", "#27"]);
    }

    #[test]
    fn test_parts_always_sum_to_100() {
        let catalog = Catalog::builtin().unwrap();
        for color in catalog.colors() {
            let formulation = generate_formulation(&catalog, color.code.value()).unwrap();
            let total: u32 = formulation
                .parts
                .iter()
                .map(|p| u32::from(p.percentage))
                .sum();
            assert_eq!(total, 100, "parts of {} do not sum to 100", color.code);
        }
    }

    #[test]
    fn test_estimated_cost_matches_estimator() {
        let catalog = Catalog::builtin().unwrap();
        let formulation = generate_formulation(&catalog, "#613").unwrap();
        assert_eq!(
            formulation.estimated_cost,
            transformation_cost(&catalog, "#4", "#613", HairLength::Medium)
        );
    }
}
