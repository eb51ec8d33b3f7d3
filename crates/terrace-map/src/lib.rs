//! The terrace map data model.
//!
//! # Tile Catalog
//!
//! A [`TileCatalog`] is the immutable registry of tile types. Each tile type has a [`Category`] (`Top`, `Wall` or `Foot`), the
//! names of its partners in the other two categories of the same terrain family, and its [`SubTile`] art indexed by
//! `(pattern, sub-position, variant)`. Only the combinations that make sense for a category are registered: tops get every
//! blob pattern for the full cell and each corner, while walls and feet only get `Center` and `Edges` for the bottom half and
//! the two bottom corners.
//!
//! # Scene
//!
//! A [`Scene`] is a sparse 3D grid of [`TileInstance`]s addressed by `(x, y, z)` plus a [`SubLayer`]. Tops live on
//! [`TOP_LAYER`], walls and feet on [`WALL_LAYER`], so a top can cap the wall or foot of its own cell.
//!
//! Tiles are bucketed into [`Chunk`]s of `CHUNK_RESOLUTION x CHUNK_RESOLUTION` columns at a single height. Chunks are sorted in
//! render order and carry a dirty flag for whoever turns tiles into geometry.

mod catalog;
mod error;
mod scene;

pub mod coordinates;
pub mod units;

pub use catalog::*;
pub use error::*;
pub use scene::*;

// Re-exports.
pub use terrace_core as core;
