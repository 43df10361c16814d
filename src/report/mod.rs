//! Multi-color compatibility reports.
//!
//! Scores every unordered pair in a set of colors against the compatibility
//! graph and the undertone wheel, normalizes to a 0-100 scale, and attaches
//! threshold-based analysis text. Pair evaluation is unordered, so permuting
//! the input never changes the score.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::Color;

/// Pair bonus when either side lists the other as harmonious or gradient.
const PAIR_BONUS: i32 = 20;
/// Pair penalty when either side lists the other under avoid.
const AVOID_PENALTY: i32 = 30;
/// Bonus for equal undertones.
const SAME_UNDERTONE_BONUS: i32 = 10;
/// Bonus for the warm/cool opposite pair; mutually exclusive with the above.
const OPPOSITE_UNDERTONE_BONUS: i32 = 5;

/// Score at or above which a set is considered compatible.
pub const COMPATIBLE_THRESHOLD: u8 = 50;
/// Score at or above which the analysis reads as excellent harmony.
const EXCELLENT_THRESHOLD: u8 = 70;
/// Score at or above which an incompatible set still reads as moderate.
const MODERATE_THRESHOLD: u8 = 30;

/// Aggregate compatibility analysis for a set of colors.
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityReport {
    /// Whether the set scores at least [`COMPATIBLE_THRESHOLD`].
    pub compatible: bool,
    /// Normalized score, 0-100.
    pub score: u8,
    /// Threshold-based analysis text.
    pub analysis: String,
    /// Actionable suggestions for improving the combination.
    pub suggestions: Vec<String>,
}

impl CompatibilityReport {
    fn failure(analysis: &str, suggestions: Vec<String>) -> Self {
        Self {
            compatible: false,
            score: 0,
            analysis: analysis.to_string(),
            suggestions,
        }
    }
}

/// Score the mutual compatibility of a set of colors.
///
/// Requires at least two codes, all resolvable; anything less degrades to a
/// zero-score failure report rather than an error.
#[must_use]
pub fn compatibility_report<S: AsRef<str>>(catalog: &Catalog, codes: &[S]) -> CompatibilityReport {
    if codes.len() < 2 {
        return CompatibilityReport::failure(
            "At least 2 colors are required for analysis",
            Vec::new(),
        );
    }

    let mut colors: Vec<&Color> = Vec::with_capacity(codes.len());
    for code in codes {
        match catalog.get(code.as_ref()) {
            Some(color) => colors.push(color),
            None => {
                return CompatibilityReport::failure(
                    "Some colors were not found",
                    vec!["Verify the color codes".to_string()],
                );
            }
        }
    }

    let mut raw_score = 0_i32;
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            raw_score += score_pair(a, b);
        }
    }

    let pair_count = (colors.len() * (colors.len() - 1) / 2) as i32;
    let max_possible = pair_count * PAIR_BONUS;
    let normalized = (f64::from(raw_score) / f64::from(max_possible) * 100.0).round();
    let score = normalized.clamp(0.0, 100.0) as u8;

    let mut suggestions = Vec::new();
    let analysis = if score >= EXCELLENT_THRESHOLD {
        "Excellent harmony between the selected colors"
    } else if score >= COMPATIBLE_THRESHOLD {
        suggestions.push("Consider adjusting the intensity of some colors".to_string());
        "Good compatibility, with some considerations"
    } else if score >= MODERATE_THRESHOLD {
        suggestions.push("Run strand tests before full application".to_string());
        suggestions.push("Consider using intermediate colors".to_string());
        "Moderate compatibility, apply with care"
    } else {
        suggestions.push("Choose more harmonious colors".to_string());
        suggestions.push("Consult a professional colorist".to_string());
        "Low compatibility - combination not recommended"
    };

    let categories: BTreeSet<_> = colors.iter().map(|c| c.category).collect();
    if categories.len() > 2 {
        suggestions.push("Many different categories - consider focusing on one palette".to_string());
    }

    CompatibilityReport {
        compatible: score >= COMPATIBLE_THRESHOLD,
        score,
        analysis: analysis.to_string(),
        suggestions,
    }
}

fn score_pair(a: &Color, b: &Color) -> i32 {
    let mut score = 0;

    let positively_linked = a.compatibility.harmonious.contains(&b.code)
        || a.compatibility.gradient.contains(&b.code)
        || b.compatibility.harmonious.contains(&a.code)
        || b.compatibility.gradient.contains(&a.code);
    if positively_linked {
        score += PAIR_BONUS;
    }

    if a.compatibility.avoids(b.code.value()) || b.compatibility.avoids(a.code.value()) {
        score -= AVOID_PENALTY;
    }

    if a.undertone == b.undertone {
        score += SAME_UNDERTONE_BONUS;
    } else if a.undertone.is_opposite_of(b.undertone) {
        score += OPPOSITE_UNDERTONE_BONUS;
    }

    score
}
