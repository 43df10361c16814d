//! Derived lookup tables for the color catalog.
//!
//! The index is built once, immediately after the catalog is validated, and
//! stays immutable for the life of the process. Per-bucket code lists keep
//! catalog insertion order so that grouped reads stay deterministic.

use std::collections::HashMap;

use super::{Category, Color, ColorCode, Difficulty};

/// Precomputed groupings over the catalog.
///
/// Built in a single O(n) pass. The by-code map lives on the catalog itself;
/// this structure holds the category/level groupings and the premium/basic
/// subsets derived from the same pass.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CatalogIndex {
    /// Codes per category, in catalog order.
    by_category: HashMap<Category, Vec<ColorCode>>,
    /// Codes per depth level, in catalog order.
    by_level: HashMap<u8, Vec<ColorCode>>,
    /// Codes of premium colors.
    premium: Vec<ColorCode>,
    /// Codes of basic-difficulty colors.
    basic: Vec<ColorCode>,
    /// Total color count.
    color_count: usize,
}

impl CatalogIndex {
    /// Build the index from colors in catalog order.
    pub fn build<'a>(colors: impl IntoIterator<Item = &'a Color>) -> Self {
        let mut index = Self::default();
        for color in colors {
            index
                .by_category
                .entry(color.category)
                .or_default()
                .push(color.code.clone());
            index
                .by_level
                .entry(color.level)
                .or_default()
                .push(color.code.clone());
            if color.is_premium {
                index.premium.push(color.code.clone());
            }
            if color.difficulty == Difficulty::Basic {
                index.basic.push(color.code.clone());
            }
            index.color_count += 1;
        }
        index
    }

    /// Codes in a category, in catalog order. Empty for an unpopulated category.
    #[must_use]
    pub fn category_codes(&self, category: Category) -> &[ColorCode] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Codes at a depth level, in catalog order.
    #[must_use]
    pub fn level_codes(&self, level: u8) -> &[ColorCode] {
        self.by_level.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Codes of premium colors, in catalog order.
    #[must_use]
    pub fn premium_codes(&self) -> &[ColorCode] {
        &self.premium
    }

    /// Codes of basic-difficulty colors, in catalog order.
    #[must_use]
    pub fn basic_codes(&self) -> &[ColorCode] {
        &self.basic
    }

    /// Number of colors in a category.
    #[must_use]
    pub fn category_count(&self, category: Category) -> usize {
        self.category_codes(category).len()
    }

    /// Darkest (lowest) populated level, if any.
    #[must_use]
    pub fn darkest_level(&self) -> Option<u8> {
        self.by_level.keys().copied().min()
    }

    /// Lightest (highest) populated level, if any.
    #[must_use]
    pub fn lightest_level(&self) -> Option<u8> {
        self.by_level.keys().copied().max()
    }

    /// Total color count.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.color_count
    }
}
