//! Color code identifiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Catalog-wide unique identifier for a color (e.g. `"#1"`, `"#613"`).
///
/// Codes follow the international hair color chart convention. The code is
/// the primary key of the catalog and doubles as the join key that external
/// pricing and cart logic use to reference a color; this crate makes no
/// assumption about how those callers use the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ColorCode(String);

impl ColorCode {
    /// Create a code from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The underlying code string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// Lets `IndexMap<ColorCode, _>` and friends be queried with a plain `&str`.
impl Borrow<str> for ColorCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ColorCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for ColorCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ColorCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
