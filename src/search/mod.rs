//! Multi-field catalog search with faceted statistics.
//!
//! Searching never fails: an empty filter returns the full catalog and a
//! filter matching nothing returns an empty result with zeroed facets. The
//! result list preserves catalog insertion order — there is no implicit
//! relevance sort.

mod facets;
mod filter;

pub use facets::FacetStats;
pub use filter::{ColorFilter, FilterPreset};

use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::Color;

/// A search result: the matching colors, their count, and facet counters
/// computed over the matches.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    /// Matching colors, in catalog order.
    pub colors: Vec<&'a Color>,
    /// Number of matches.
    pub total: usize,
    /// Facet counts over the matches.
    pub facets: FacetStats,
}

/// Filter the catalog.
///
/// All supplied filter fields must hold (AND); multi-value fields match any
/// of their values (OR). See [`ColorFilter`] for field semantics.
#[must_use]
pub fn search_colors<'a>(catalog: &'a Catalog, filter: &ColorFilter) -> SearchResult<'a> {
    let colors: Vec<&Color> = catalog.colors().filter(|c| filter.matches(c)).collect();
    let facets = FacetStats::tally(colors.iter().copied());
    SearchResult {
        total: colors.len(),
        colors,
        facets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Difficulty, Undertone};

    #[test]
    fn test_empty_filter_returns_full_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let result = search_colors(&catalog, &ColorFilter::new());
        assert_eq!(result.total, catalog.len());
        assert_eq!(result.colors.len(), catalog.len());
    }

    #[test]
    fn test_result_preserves_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        let result = search_colors(&catalog, &ColorFilter::new().with_category(Category::Natural));
        let catalog_order: Vec<_> = catalog
            .colors()
            .filter(|c| c.category == Category::Natural)
            .map(|c| &c.code)
            .collect();
        let result_order: Vec<_> = result.colors.iter().map(|c| &c.code).collect();
        assert_eq!(result_order, catalog_order);
    }

    #[test]
    fn test_and_semantics_across_fields() {
        let catalog = Catalog::builtin().unwrap();
        let both = search_colors(
            &catalog,
            &ColorFilter::new()
                .with_category(Category::Blonde)
                .with_premium(true),
        );
        let blonde = search_colors(&catalog, &ColorFilter::new().with_category(Category::Blonde));
        let premium = search_colors(&catalog, &ColorFilter::new().with_premium(true));

        for color in &both.colors {
            assert!(blonde.colors.iter().any(|c| c.code == color.code));
            assert!(premium.colors.iter().any(|c| c.code == color.code));
        }
        assert!(both.total <= blonde.total.min(premium.total));
    }

    #[test]
    fn test_exact_level_range() {
        let catalog = Catalog::builtin().unwrap();
        let result = search_colors(&catalog, &ColorFilter::new().with_level_range(6, 6));
        assert!(result.total > 0);
        assert!(result.colors.iter().all(|c| c.level == 6));
        let expected = catalog.colors().filter(|c| c.level == 6).count();
        assert_eq!(result.total, expected);
    }

    #[test]
    fn test_no_match_returns_zeroed_stats() {
        let catalog = Catalog::builtin().unwrap();
        let result = search_colors(
            &catalog,
            &ColorFilter::new().with_price_range(100.0, 200.0),
        );
        assert_eq!(result.total, 0);
        assert!(result.colors.is_empty());
        assert!(result.facets.is_empty());
    }

    #[test]
    fn test_facets_computed_over_matches_only() {
        let catalog = Catalog::builtin().unwrap();
        let result = search_colors(
            &catalog,
            &ColorFilter::new().with_difficulty(Difficulty::Basic),
        );
        assert_eq!(result.facets.total(), result.total);
        assert_eq!(result.facets.difficulties.len(), 1);
        assert_eq!(
            result.facets.difficulties.get(&Difficulty::Basic),
            Some(&result.total)
        );
    }

    #[test]
    fn test_undertone_or_semantics() {
        let catalog = Catalog::builtin().unwrap();
        let result = search_colors(
            &catalog,
            &ColorFilter::new()
                .with_undertone(Undertone::Warm)
                .with_undertone(Undertone::Cool),
        );
        assert!(result.total > 0);
        assert!(result
            .colors
            .iter()
            .all(|c| matches!(c.undertone, Undertone::Warm | Undertone::Cool)));
    }

    #[test]
    fn test_preset_search() {
        let catalog = Catalog::builtin().unwrap();
        let result = search_colors(&catalog, &FilterPreset::Premium.filter());
        assert!(result.total > 0);
        assert!(result.colors.iter().all(|c| c.is_premium && c.is_available));
    }
}
