//! Reads over the directed compatibility graph.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::model::{Color, CompatibilityKind};

/// All colors a base color can be combined with, resolved to full entries.
///
/// The union is taken in a fixed relation order — harmonious, then gradient,
/// then highlights — with duplicates removed (first occurrence wins). Codes
/// that fail to resolve are dropped silently; an unknown base code yields an
/// empty list. The `avoid` relation is deliberately not part of this union.
#[must_use]
pub fn compatible_colors<'a>(catalog: &'a Catalog, code: &str) -> Vec<&'a Color> {
    let Some(base) = catalog.get(code) else {
        return Vec::new();
    };

    let mut seen: HashSet<&str> = HashSet::new();
    let mut result = Vec::new();
    for kind in [
        CompatibilityKind::Harmonious,
        CompatibilityKind::Gradient,
        CompatibilityKind::Highlights,
    ] {
        for reference in base.compatibility.list(kind) {
            if seen.insert(reference.value()) {
                if let Some(color) = catalog.get(reference.value()) {
                    result.push(color);
                }
            }
        }
    }
    result
}
