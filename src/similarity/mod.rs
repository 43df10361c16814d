//! Pairwise similarity scoring and top-k ranking.
//!
//! The score is an additive sum of field agreements; it is symmetric in its
//! arguments and bounded by the field weights. Ranking is a stable
//! descending sort, so colors with equal scores keep catalog order.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::Color;

/// Default number of similar colors returned to picker interfaces.
pub const DEFAULT_LIMIT: usize = 5;

/// Weight for a category match.
const CATEGORY_WEIGHT: u32 = 30;
/// Weight for an undertone match.
const UNDERTONE_WEIGHT: u32 = 25;
/// Maximum level-closeness contribution; decays by 2 per level of distance.
const LEVEL_WEIGHT: u32 = 20;
/// Weight for a difficulty match.
const DIFFICULTY_WEIGHT: u32 = 15;
/// Contribution per exactly shared tag.
const TAG_WEIGHT: u32 = 2;

/// A color with its similarity score against the query color.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredColor<'a> {
    /// The candidate color.
    pub color: &'a Color,
    /// Additive similarity score.
    pub score: u32,
}

/// Similarity between two colors.
///
/// Category +30, undertone +25, level closeness `max(0, 20 − 2·Δ)`,
/// difficulty +15, and +2 per exactly matching tag (case-sensitive).
#[must_use]
pub fn similarity_score(a: &Color, b: &Color) -> u32 {
    let mut score = 0;
    if a.category == b.category {
        score += CATEGORY_WEIGHT;
    }
    if a.undertone == b.undertone {
        score += UNDERTONE_WEIGHT;
    }
    score += LEVEL_WEIGHT.saturating_sub(2 * u32::from(a.level_gap(b)));
    if a.difficulty == b.difficulty {
        score += DIFFICULTY_WEIGHT;
    }
    score += TAG_WEIGHT * a.shared_tag_count(b) as u32;
    score
}

/// The `limit` colors most similar to `code`, best first.
///
/// The queried color is never part of its own result. Unknown codes yield
/// an empty list.
#[must_use]
pub fn find_similar<'a>(catalog: &'a Catalog, code: &str, limit: usize) -> Vec<ScoredColor<'a>> {
    let Some(base) = catalog.get(code) else {
        return Vec::new();
    };

    let mut scored: Vec<ScoredColor<'a>> = catalog
        .colors()
        .filter(|c| c.code != base.code)
        .map(|c| ScoredColor {
            color: c,
            score: similarity_score(base, c),
        })
        .collect();

    // Stable: ties keep catalog order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
