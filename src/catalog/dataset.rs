//! The versioned color dataset document.
//!
//! The catalog is reference data supplied at build/deploy time by an external
//! content source. The builtin dataset (the 16-shade professional chart) is
//! embedded in the crate; alternative datasets in the same JSON shape can be
//! loaded through [`crate::Catalog::from_json_str`].

use chrono::NaiveDate;
use schemars::{schema::RootSchema, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Color;

/// The embedded professional color chart.
pub const BUILTIN_DATASET: &str = include_str!("../../data/colors.json");

/// A complete dataset document as shipped by the content source.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatasetDocument {
    /// Dataset version, e.g. "1.0.0".
    pub version: String,
    /// The chart standard the codes follow.
    pub standard: String,
    /// Date of the last content revision.
    pub last_updated: NaiveDate,
    /// Color entries, in authoritative order.
    pub colors: Vec<Color>,
}

impl DatasetDocument {
    /// Parse a dataset document from JSON.
    ///
    /// This checks only structural validity (including closed enum values);
    /// catalog-level invariants are enforced by [`crate::Catalog::from_dataset`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the embedded builtin dataset.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    /// JSON Schema for the dataset document, for external content tooling.
    #[must_use]
    pub fn json_schema() -> RootSchema {
        schemars::schema_for!(DatasetDocument)
    }
}

/// Dataset provenance carried alongside the loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    /// Dataset version.
    pub version: String,
    /// Chart standard.
    pub standard: String,
    /// Last content revision date.
    pub last_updated: NaiveDate,
}

impl From<&DatasetDocument> for DatasetMetadata {
    fn from(doc: &DatasetDocument) -> Self {
        Self {
            version: doc.version.clone(),
            standard: doc.standard.clone(),
            last_updated: doc.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_parses() {
        let doc = DatasetDocument::builtin().unwrap();
        assert_eq!(doc.version, "1.0.0");
        assert_eq!(doc.standard, "International Hair Color Chart");
        assert!(!doc.colors.is_empty());
    }

    #[test]
    fn test_schema_generation() {
        let schema = DatasetDocument::json_schema();
        let json = serde_json::to_value(&schema).unwrap();
        // Spot-check that the entity fields made it into the schema.
        assert!(json.to_string().contains("priceMultiplier"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = DatasetDocument::from_json_str("{not json");
        assert!(matches!(result, Err(crate::CatalogError::Parse(_))));
    }
}
