//! Entity layer for the color catalog.
//!
//! This module defines the canonical data structures of the engine: the
//! [`Color`] entity with its closed classification enums, the [`ColorCode`]
//! primary key, the directed [`Compatibility`] adjacency lists, and the
//! derived [`CatalogIndex`] lookup tables.

mod code;
mod color;
mod index;

pub use code::*;
pub use color::*;
pub use index::*;
