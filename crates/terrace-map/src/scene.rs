mod chunk;

pub use chunk::*;

use crate::{coordinates::in_chunk, units::*, TileCatalog};

use std::collections::BTreeMap;
use terrace_core::glam::{IVec2, IVec3};

/// Disambiguates tiles that occupy the same `(x, y, z)` cell.
pub type SubLayer = u8;

/// Where [`Category::Top`](crate::Category::Top) tiles are stored.
pub const TOP_LAYER: SubLayer = 0;
/// Where [`Category::Wall`](crate::Category::Wall) and [`Category::Foot`](crate::Category::Foot) tiles are stored.
pub const WALL_LAYER: SubLayer = 1;

/// Address of a chunk. Field order is render order: chunk rows, then chunk columns, then heights.
///
/// Because height is the last field, all chunks of one column of chunks are contiguous in a sorted map, which is what makes
/// column height queries a single range scan.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ChunkKey {
    pub y: i32,
    pub x: i32,
    pub z: i32,
}

impl ChunkKey {
    pub fn containing(p: IVec3) -> Self {
        in_chunk(TileUnits(p)).into()
    }
}

impl From<ChunkUnits<IVec3>> for ChunkKey {
    fn from(ChunkUnits(c): ChunkUnits<IVec3>) -> Self {
        Self {
            y: c.y,
            x: c.x,
            z: c.z,
        }
    }
}

/// A sparse 3D grid of tiles, bucketed into chunks.
///
/// Chunks are created the first time a tile lands in them and live as long as the scene. Every write marks the owning chunk
/// dirty; only the renderer clears that flag, via [`Scene::clear_dirty`], once it has rebuilt whatever it draws from the chunk.
pub struct Scene<'c> {
    catalog: &'c TileCatalog,
    chunks: BTreeMap<ChunkKey, Chunk>,
}

impl<'c> Scene<'c> {
    pub fn new(catalog: &'c TileCatalog) -> Self {
        Self {
            catalog,
            chunks: BTreeMap::new(),
        }
    }

    pub fn catalog(&self) -> &'c TileCatalog {
        self.catalog
    }

    /// Inserts `tile` at `p`, replacing whatever was at `(p, layer)`.
    pub fn set_tile(&mut self, tile: TileInstance, p: IVec3, layer: SubLayer) {
        let chunk_key = ChunkKey::containing(p);
        log::trace!(
            "Writing {:?} at {:?} layer {} into chunk {:?}",
            tile,
            p,
            layer,
            chunk_key
        );
        self.chunks
            .entry(chunk_key)
            .or_default()
            .set_tile(TileKey::new(p.x, p.y, layer), tile);
    }

    pub fn get_tile(&self, p: IVec3, layer: SubLayer) -> Option<&TileInstance> {
        self.chunks
            .get(&ChunkKey::containing(p))
            .and_then(|chunk| chunk.get_tile(TileKey::new(p.x, p.y, layer)))
    }

    /// The greatest `z <= at_or_below` holding a tile at `(column, layer)`, or `None` if there is no such tile.
    pub fn highest_tile_z(&self, column: IVec2, layer: SubLayer, at_or_below: i32) -> Option<i32> {
        let (first, last) = Self::column_chunk_keys(column, i32::MIN, at_or_below);
        let key = TileKey::new(column.x, column.y, layer);
        self.chunks
            .range(first..=last)
            .rev()
            .find_map(|(chunk_key, chunk)| chunk.get_tile(key).map(|_| chunk_key.z))
    }

    /// The least `z >= at_or_above` holding a tile at `(column, layer)`, or `None` if there is no such tile.
    pub fn lowest_tile_z(&self, column: IVec2, layer: SubLayer, at_or_above: i32) -> Option<i32> {
        let (first, last) = Self::column_chunk_keys(column, at_or_above, i32::MAX);
        let key = TileKey::new(column.x, column.y, layer);
        self.chunks
            .range(first..=last)
            .find_map(|(chunk_key, chunk)| chunk.get_tile(key).map(|_| chunk_key.z))
    }

    fn column_chunk_keys(column: IVec2, min_z: i32, max_z: i32) -> (ChunkKey, ChunkKey) {
        (
            ChunkKey::containing(column.extend(min_z)),
            ChunkKey::containing(column.extend(max_z)),
        )
    }

    /// All chunks in render order.
    pub fn chunks(&self) -> impl Iterator<Item = (ChunkKey, &Chunk)> {
        self.chunks.iter().map(|(key, chunk)| (*key, chunk))
    }

    pub fn chunk(&self, key: ChunkKey) -> Option<&Chunk> {
        self.chunks.get(&key)
    }

    pub fn dirty_chunks(&self) -> impl Iterator<Item = ChunkKey> + '_ {
        self.chunks
            .iter()
            .filter(|(_, chunk)| chunk.is_dirty())
            .map(|(key, _)| *key)
    }

    /// Acknowledges that the chunk at `key` has been redrawn. Returns whether it was dirty.
    pub fn clear_dirty(&mut self, key: ChunkKey) -> bool {
        self.chunks
            .get_mut(&key)
            .map_or(false, |chunk| chunk.clear_dirty())
    }

    pub fn num_chunks(&self) -> usize {
        self.chunks.len()
    }

    pub fn num_tiles(&self) -> usize {
        self.chunks.values().map(Chunk::len).sum()
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
