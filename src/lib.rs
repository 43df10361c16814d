//! **A compatibility and transformation engine for professional hair colorimetry.**
//!
//! `haircolor-tools` models a salon-grade color chart as an immutable catalog
//! of [`Color`] entities connected by a directed compatibility graph, and
//! provides the algorithms a storefront color picker and its pricing glue
//! need: multi-field search with faceted counters, harmonization
//! recommendations, transformation cost estimates, safety validation,
//! similarity ranking, and multi-color compatibility reports.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The [`Color`] entity with its closed classification enums
//!   ([`Category`], [`Undertone`], [`Difficulty`]), the [`ColorCode`] primary
//!   key, and the four directed compatibility relations (harmonious,
//!   gradient, highlights, avoid).
//! - **[`catalog`]**: One-time loading and validation of the reference
//!   dataset into a [`Catalog`] with derived indices. This is the only
//!   fallible path in the crate; every algorithm afterwards is a pure,
//!   infallible read.
//! - **[`search`]**: [`search_colors`] filters the catalog with an explicit
//!   [`ColorFilter`] record and returns faceted statistics over the matches.
//! - **[`harmony`]**: [`compatible_colors`] resolves a color's outgoing
//!   compatibility edges; [`generate_harmonization`] assembles
//!   monochromatic/analogous/complementary/triadic recommendation groups.
//! - **[`pricing`]**: [`transformation_cost`] prices a color change from
//!   length, level gap, difficulty, and price multiplier;
//!   [`generate_formulation`] produces a mixing recipe for a target shade.
//! - **[`risk`]**: [`validate_transformation`] runs the safety rules and
//!   reports warnings and recommendations.
//! - **[`similarity`]**: [`find_similar`] ranks the catalog against a query
//!   color with a stable top-k selection.
//! - **[`report`]**: [`compatibility_report`] scores a whole set of colors
//!   pairwise and renders a threshold-based verdict.
//!
//! ## Getting Started
//!
//! ```
//! use haircolor_tools::{Catalog, ColorFilter, HairLength};
//! use haircolor_tools::model::Category;
//!
//! fn main() -> Result<(), haircolor_tools::CatalogError> {
//!     let catalog = Catalog::builtin()?;
//!
//!     let blondes = haircolor_tools::search_colors(
//!         &catalog,
//!         &ColorFilter::new().with_category(Category::Blonde),
//!     );
//!     println!("{} blonde shades", blondes.total);
//!
//!     let cost = haircolor_tools::transformation_cost(
//!         &catalog, "#1", "#613", HairLength::Medium,
//!     );
//!     println!("estimated cost: {cost}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error model
//!
//! Domain misses never raise errors: unknown codes yield empty/`None`/zero
//! results and degenerate report inputs yield sentinel failure values, so
//! presentation code can render "no data" states directly. Only catalog
//! construction fails, and it fails fast on duplicate codes, out-of-range
//! levels or price multipliers, unrecognized enum values, and dangling
//! compatibility references.
//!
//! ## Concurrency
//!
//! A [`Catalog`] is immutable after construction and holds no interior
//! mutability, so sharing it (plain reference or `Arc`) across threads is
//! safe without locking.

#![warn(clippy::unwrap_used)]
#![allow(
    // usize/u32/f64 casts in scoring and pricing math - all values bounded
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod catalog;
pub mod error;
pub mod harmony;
pub mod model;
pub mod pricing;
pub mod report;
pub mod risk;
pub mod search;
pub mod similarity;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogSummary, DatasetDocument, DatasetMetadata, BUILTIN_DATASET};
pub use error::{CatalogError, Result};
pub use harmony::{
    compatible_colors, generate_harmonization, Harmonization, HarmonyGroup, HarmonyKind,
};
pub use model::{
    CatalogIndex, Category, Color, ColorCode, Compatibility, CompatibilityKind, Difficulty,
    TechnicalInfo, Undertone,
};
pub use pricing::{
    difficulty_multiplier, generate_formulation, transformation_cost, ColorFormulation,
    FormulaPart, HairLength, BASE_COST,
};
pub use report::{compatibility_report, CompatibilityReport, COMPATIBLE_THRESHOLD};
pub use risk::{validate_transformation, TransformationCheck};
pub use search::{search_colors, ColorFilter, FacetStats, FilterPreset, SearchResult};
pub use similarity::{find_similar, similarity_score, ScoredColor, DEFAULT_LIMIT};
