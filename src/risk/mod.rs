//! Transformation risk validation.
//!
//! Checks a `from -> to` color transformation against the safety rules of
//! professional colorimetry. All rules are evaluated independently — each
//! may contribute warnings and recommendations — and the transformation is
//! valid exactly when no rule produced a warning.
//!
//! The incompatibility rule reads only the `from` color's `avoid` list, so
//! validation is intentionally asymmetric: `validate(a, b)` and
//! `validate(b, a)` may disagree. That mirrors the directed compatibility
//! graph and is a domain rule, not an oversight.

use serde::Serialize;

use crate::catalog::Catalog;

/// Level gap beyond which a transformation counts as a complex process.
const COMPLEX_LEVEL_GAP: u8 = 4;
/// Starting level at or below which a jump to a very light target is extreme.
const EXTREME_FROM_LEVEL: u8 = 3;
/// Target level at or above which a jump from a dark base is extreme.
const EXTREME_TO_LEVEL: u8 = 8;

/// Outcome of a transformation safety check.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationCheck {
    /// True when no rule raised a warning. Recommendations alone (such as
    /// premium aftercare) never invalidate.
    pub is_valid: bool,
    /// Safety warnings, one per triggered rule.
    pub warnings: Vec<String>,
    /// Professional recommendations accompanying the warnings.
    pub recommendations: Vec<String>,
}

/// Validate a color transformation.
///
/// Unknown codes short-circuit to an invalid sentinel result; otherwise all
/// rules run, in a fixed order, with no early exit.
#[must_use]
pub fn validate_transformation(catalog: &Catalog, from: &str, to: &str) -> TransformationCheck {
    let (Some(from_color), Some(to_color)) = (catalog.get(from), catalog.get(to)) else {
        return TransformationCheck {
            is_valid: false,
            warnings: vec!["One or both colors were not found".to_string()],
            recommendations: vec!["Verify the color codes".to_string()],
        };
    };

    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    // Directed incompatibility: only the from side's avoid list is consulted.
    if from_color.compatibility.avoids(to) {
        warnings.push("Transformation not recommended - incompatible colors".to_string());
        recommendations.push("Consider an intermediate color first".to_string());
    }

    let level_gap = from_color.level_gap(to_color);
    if level_gap > COMPLEX_LEVEL_GAP {
        warnings.push("Large level difference - complex process".to_string());
        recommendations.push("Stage the transformation across sessions".to_string());
        recommendations.push("Use reconstructive treatments".to_string());
    }

    if from_color.level <= EXTREME_FROM_LEVEL && to_color.level >= EXTREME_TO_LEVEL {
        warnings.push("Extreme transformation - high risk of damage".to_string());
        recommendations.push("Process should be performed by an experienced professional".to_string());
        recommendations.push("Multiple sessions may be required".to_string());
    }

    if to_color.is_premium {
        recommendations.push("Premium color - frequent maintenance required".to_string());
        recommendations.push("Special aftercare is mandatory".to_string());
    }

    TransformationCheck {
        is_valid: warnings.is_empty(),
        warnings,
        recommendations,
    }
}
