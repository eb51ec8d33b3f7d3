//! Terrain editing for sparse, chunked tile scenes.
//!
//! A [`TerrainEditor`] raises columns of a [`Scene`](terrace_map::Scene) with the tiles of a [`TerrainFamily`] and picks the
//! art of every tile it touches from its neighbors, so hills get edges, corners and cliff bottoms without the caller choosing
//! sub-tiles by hand.
//!
//! ```no_run
//! use terrace::{read_catalog_file, Config, TerrainEditor};
//! use terrace::map::{core::glam::IVec3, Scene};
//!
//! let catalog = read_catalog_file("assets/grasslands.ron")?;
//! let config = Config::read_file("assets/config.ron")?;
//! let family = config.family.clone();
//! let mut scene = Scene::new(&catalog);
//! let mut editor = TerrainEditor::new(&mut scene, config);
//! editor.place(&family, IVec3::new(0, 0, 2))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod editor;
mod error;

pub use config::{parse_catalog, read_catalog_file, Config};
pub use editor::*;
pub use error::LoadError;

// Re-exports.
pub use terrace_map as map;
