use crate::{SubLayer, SubTileId, TileTypeId};

use smallvec::SmallVec;
use std::collections::BTreeMap;

/// A placed tile: its type plus the sub-tiles that together make up its drawn appearance.
///
/// Instances are never edited in place. Reshaping a cell writes a whole new instance over the old one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TileInstance {
    pub tile_type: TileTypeId,
    pub sub_tiles: SmallVec<[SubTileId; 4]>,
}

impl TileInstance {
    pub fn new(tile_type: TileTypeId) -> Self {
        Self {
            tile_type,
            sub_tiles: SmallVec::new(),
        }
    }
}

/// Address of a tile within its chunk. Field order is render order: rows first, then columns, then sub-layers.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TileKey {
    pub y: i32,
    pub x: i32,
    pub layer: SubLayer,
}

impl TileKey {
    pub fn new(x: i32, y: i32, layer: SubLayer) -> Self {
        Self { y, x, layer }
    }
}

/// The tiles of one chunk-sized square of columns at a single height.
#[derive(Clone, Debug, Default)]
pub struct Chunk {
    tiles: BTreeMap<TileKey, TileInstance>,
    dirty: bool,
}

impl Chunk {
    pub(crate) fn set_tile(&mut self, key: TileKey, tile: TileInstance) {
        self.tiles.insert(key, tile);
        self.dirty = true;
    }

    pub fn get_tile(&self, key: TileKey) -> Option<&TileInstance> {
        self.tiles.get(&key)
    }

    /// All tiles in render order.
    pub fn tiles(&self) -> impl Iterator<Item = (TileKey, &TileInstance)> {
        self.tiles.iter().map(|(key, tile)| (*key, tile))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True if any tile was written since the renderer last acknowledged this chunk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
