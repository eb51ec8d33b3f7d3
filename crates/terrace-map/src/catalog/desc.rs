use super::{Category, Pattern};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_TILE_SIZE: f32 = 24.0;

/// Plain description of a tile set, as supplied by whatever loads catalog files.
///
/// Tiles are kept sorted by name, which fixes the order in which IDs are assigned when building a
/// [`TileCatalog`](crate::TileCatalog).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TileSetDesc {
    /// Edge length of one tile cell in the atlas, in pixels.
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    pub tiles: BTreeMap<String, TileDesc>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TileDesc {
    pub category: Category,
    /// Names of the tile types in the other categories of the same terrain family.
    #[serde(default)]
    pub compatibility: BTreeMap<Category, String>,
    /// For every pattern, the atlas cells of its variants, in tile units.
    pub patterns: BTreeMap<Pattern, Vec<(u32, u32)>>,
}

fn default_tile_size() -> f32 {
    DEFAULT_TILE_SIZE
}

impl TileSetDesc {
    pub fn new(tile_size: f32) -> Self {
        Self {
            tile_size,
            tiles: BTreeMap::new(),
        }
    }

    pub fn with_tile(mut self, name: impl Into<String>, tile: TileDesc) -> Self {
        self.tiles.insert(name.into(), tile);
        self
    }
}

impl TileDesc {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            compatibility: BTreeMap::new(),
            patterns: BTreeMap::new(),
        }
    }

    pub fn compatible_with(mut self, category: Category, name: impl Into<String>) -> Self {
        self.compatibility.insert(category, name.into());
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern, cells: Vec<(u32, u32)>) -> Self {
        self.patterns.insert(pattern, cells);
        self
    }
}
