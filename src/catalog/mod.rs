//! Catalog construction and lookup.
//!
//! A [`Catalog`] is built once from a [`DatasetDocument`] and never mutated
//! afterward: every engine in this crate performs pure reads against it, so
//! a shared `Catalog` (or `Arc<Catalog>`) is safe to use from any number of
//! threads without locking.
//!
//! Construction is the only fallible path in the crate. It enforces the
//! catalog invariants up front — unique codes, level and price bounds,
//! referential integrity of every compatibility edge — so the engines can
//! treat the data as trusted.

mod dataset;

pub use dataset::{DatasetDocument, DatasetMetadata, BUILTIN_DATASET};

use indexmap::IndexMap;
use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::{CatalogError, Result};
use crate::model::{CatalogIndex, Category, Color, ColorCode};

/// The immutable color catalog with its derived indices.
#[derive(Debug, Clone)]
pub struct Catalog {
    metadata: DatasetMetadata,
    colors: IndexMap<ColorCode, Color>,
    index: CatalogIndex,
    content_hash: u64,
}

impl Catalog {
    /// Load the embedded professional color chart.
    pub fn builtin() -> Result<Self> {
        Self::from_dataset(DatasetDocument::builtin()?)
    }

    /// Load a catalog from a dataset document in JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_dataset(DatasetDocument::from_json_str(json)?)
    }

    /// Validate a dataset document and build the catalog.
    pub fn from_dataset(document: DatasetDocument) -> Result<Self> {
        if document.colors.is_empty() {
            return Err(CatalogError::EmptyDataset);
        }

        let metadata = DatasetMetadata::from(&document);
        let mut colors: IndexMap<ColorCode, Color> = IndexMap::with_capacity(document.colors.len());

        for color in document.colors {
            if !(1..=10).contains(&color.level) {
                return Err(CatalogError::LevelOutOfRange {
                    code: color.code.to_string(),
                    level: color.level,
                });
            }
            if !(color.price_multiplier > 0.0 && color.price_multiplier.is_finite()) {
                return Err(CatalogError::InvalidPriceMultiplier {
                    code: color.code.to_string(),
                    multiplier: color.price_multiplier,
                });
            }
            let code = color.code.clone();
            if colors.insert(code.clone(), color).is_some() {
                return Err(CatalogError::DuplicateCode {
                    code: code.to_string(),
                });
            }
        }

        // Referential integrity: every listed code must resolve.
        for color in colors.values() {
            for (kind, reference) in color.compatibility.referenced() {
                if !colors.contains_key(reference.value()) {
                    return Err(CatalogError::DanglingReference {
                        code: color.code.to_string(),
                        reference: reference.to_string(),
                        relation: kind.name(),
                    });
                }
            }
        }

        // Avoid-list overlaps are ambiguous source data: flag, keep intact.
        for color in colors.values() {
            let overlap = color.compatibility.avoid_overlap();
            if !overlap.is_empty() {
                tracing::warn!(
                    code = %color.code,
                    overlapping = ?overlap,
                    "avoid list overlaps a positive compatibility list; keeping both entries"
                );
            }
        }

        let index = CatalogIndex::build(colors.values());
        let content_hash = hash_colors(colors.values());

        Ok(Self {
            metadata,
            colors,
            index,
            content_hash,
        })
    }

    /// Look up a color by code. O(1); `None` for unknown codes, never an error.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Color> {
        self.colors.get(code)
    }

    /// All colors, in catalog insertion order.
    pub fn colors(&self) -> impl Iterator<Item = &Color> {
        self.colors.values()
    }

    /// Number of colors in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the catalog is empty. Always false for a validated catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The derived lookup tables.
    #[must_use]
    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Dataset provenance (version, standard, revision date).
    #[must_use]
    pub fn metadata(&self) -> &DatasetMetadata {
        &self.metadata
    }

    /// xxh3 hash over the catalog content, for quick equality checks.
    #[must_use]
    pub fn content_hash(&self) -> u64 {
        self.content_hash
    }

    /// Colors in a category, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Color> {
        self.resolve(self.index.category_codes(category))
    }

    /// Colors at a depth level, in catalog order.
    #[must_use]
    pub fn by_level(&self, level: u8) -> Vec<&Color> {
        self.resolve(self.index.level_codes(level))
    }

    /// The premium subset, in catalog order.
    #[must_use]
    pub fn premium_colors(&self) -> Vec<&Color> {
        self.resolve(self.index.premium_codes())
    }

    /// The basic-difficulty subset, in catalog order.
    #[must_use]
    pub fn basic_colors(&self) -> Vec<&Color> {
        self.resolve(self.index.basic_codes())
    }

    /// Aggregate description of the loaded catalog.
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        let price_bounds = self
            .colors
            .values()
            .map(|c| c.price_multiplier)
            .fold(None::<(f64, f64)>, |acc, p| match acc {
                None => Some((p, p)),
                Some((min, max)) => Some((min.min(p), max.max(p))),
            });

        CatalogSummary {
            total_colors: self.len(),
            version: self.metadata.version.clone(),
            standard: self.metadata.standard.clone(),
            last_updated: self.metadata.last_updated,
            natural_count: self.index.category_count(Category::Natural),
            blonde_count: self.index.category_count(Category::Blonde),
            fashion_count: self.index.category_count(Category::Fashion),
            darkest_level: self.index.darkest_level().unwrap_or(0),
            lightest_level: self.index.lightest_level().unwrap_or(0),
            min_price_multiplier: price_bounds.map_or(0.0, |(min, _)| min),
            max_price_multiplier: price_bounds.map_or(0.0, |(_, max)| max),
        }
    }

    fn resolve<'a>(&'a self, codes: &[ColorCode]) -> Vec<&'a Color> {
        codes
            .iter()
            .filter_map(|code| self.colors.get(code.value()))
            .collect()
    }
}

/// Aggregate catalog statistics, mirroring the dataset's system-info block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_colors: usize,
    pub version: String,
    pub standard: String,
    pub last_updated: chrono::NaiveDate,
    pub natural_count: usize,
    pub blonde_count: usize,
    pub fashion_count: usize,
    pub darkest_level: u8,
    pub lightest_level: u8,
    pub min_price_multiplier: f64,
    pub max_price_multiplier: f64,
}

fn hash_colors<'a>(colors: impl Iterator<Item = &'a Color>) -> u64 {
    let mut input = Vec::new();
    for color in colors {
        if let Ok(bytes) = serde_json::to_vec(color) {
            input.extend(bytes);
        }
    }
    xxh3_64(&input)
}
