//! Unified error types for haircolor-tools.
//!
//! The only fallible operation in this crate is catalog construction. Every
//! domain-level miss (unknown code, filter with no matches, degenerate report
//! input) degrades to an empty or sentinel value instead of an error, so
//! calling code can render "no data" states without error-handling machinery.

use thiserror::Error;

/// Errors raised while loading and validating a color dataset.
///
/// Any of these aborts initialization: a catalog that fails validation is
/// never handed to callers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    /// The dataset document is not valid JSON or uses an unrecognized
    /// category/undertone/difficulty value.
    #[error("Failed to parse color dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two catalog entries share the same code.
    #[error("Duplicate color code in dataset: {code}")]
    DuplicateCode { code: String },

    /// A color's depth level is outside the 1-10 scale.
    #[error("Color {code} has level {level} outside the 1-10 scale")]
    LevelOutOfRange { code: String, level: u8 },

    /// A color's price multiplier is zero, negative, or not finite.
    #[error("Color {code} has invalid price multiplier {multiplier}")]
    InvalidPriceMultiplier { code: String, multiplier: f64 },

    /// A compatibility list references a code with no catalog entry.
    #[error("Color {code} references unknown code {reference} in its {relation} list")]
    DanglingReference {
        code: String,
        reference: String,
        relation: &'static str,
    },

    /// The dataset contains no colors at all.
    #[error("Color dataset is empty")]
    EmptyDataset,
}

/// Convenience result type for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;
