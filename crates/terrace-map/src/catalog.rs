mod desc;
mod sub_tile;

pub use desc::*;
pub use sub_tile::*;

use crate::CatalogError;

use smallvec::SmallVec;
use std::collections::BTreeMap;
use terrace_core::{
    allocator::Allocator32,
    geometry::AtlasRect,
    glam::Vec2,
    SmallKeyHashMap,
};

/// Dense index of a tile type within its [`TileCatalog`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TileTypeId(pub u32);

/// Everything the catalog knows about one tile type.
#[derive(Clone, Debug)]
pub struct TileInfo {
    pub id: TileTypeId,
    pub name: String,
    pub category: Category,
    compatibilities: BTreeMap<Category, String>,
    // Variants are stored in order, so the variant number is the index.
    sub_tiles: SmallKeyHashMap<(Pattern, SubPosition), SmallVec<[SubTileId; 2]>>,
}

impl TileInfo {
    /// The name of the tile type playing the role of `category` in this tile's terrain family.
    pub fn compatible_name(&self, category: Category) -> Result<&str, CatalogError> {
        self.compatibilities
            .get(&category)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::MissingCompatibility {
                name: self.name.clone(),
                category,
            })
    }

    pub fn sub_tile_id(
        &self,
        pattern: Pattern,
        sub_position: SubPosition,
        variant: usize,
    ) -> Result<SubTileId, CatalogError> {
        self.sub_tiles
            .get(&(pattern, sub_position))
            .and_then(|variants| variants.get(variant).copied())
            .ok_or_else(|| CatalogError::InvalidSubTile {
                name: self.name.clone(),
                pattern,
                sub_position,
                variant,
            })
    }

    /// How many variants are registered for `(pattern, sub_position)`. Zero if the combination is not registered.
    pub fn num_variants(&self, pattern: Pattern, sub_position: SubPosition) -> usize {
        self.sub_tiles
            .get(&(pattern, sub_position))
            .map_or(0, |variants| variants.len())
    }
}

/// Read-only registry of tile types and their sub-tile art.
///
/// Built once from a [`TileSetDesc`]; the owner decides how long it lives and lends it to any number of
/// [`Scene`](crate::Scene)s.
#[derive(Clone, Debug)]
pub struct TileCatalog {
    tile_size: f32,
    infos: Vec<TileInfo>,
    ids_by_name: SmallKeyHashMap<String, TileTypeId>,
    sub_tiles: Allocator32<SubTile>,
}

impl TileCatalog {
    pub fn from_desc(desc: &TileSetDesc) -> Result<Self, CatalogError> {
        let tile_size = desc.tile_size;
        let mut infos = Vec::with_capacity(desc.tiles.len());
        let mut ids_by_name = SmallKeyHashMap::default();
        let mut sub_tiles = Allocator32::default();

        for (index, (name, tile_desc)) in desc.tiles.iter().enumerate() {
            let id = TileTypeId(index as u32);
            let category = tile_desc.category;
            let mut info = TileInfo {
                id,
                name: name.clone(),
                category,
                compatibilities: tile_desc.compatibility.clone(),
                sub_tiles: SmallKeyHashMap::default(),
            };

            for &pattern in category.patterns() {
                let cells = tile_desc
                    .patterns
                    .get(&pattern)
                    .filter(|cells| !cells.is_empty())
                    .ok_or_else(|| CatalogError::MissingPattern {
                        name: name.clone(),
                        pattern,
                    })?;
                let num_variants = cells.len();

                for &sub_position in category.sub_positions() {
                    let variants = cells
                        .iter()
                        .enumerate()
                        .map(|(variant, &(cell_x, cell_y))| {
                            let cell = AtlasRect::new(
                                Vec2::new(cell_x as f32, cell_y as f32) * tile_size,
                                Vec2::splat(tile_size),
                            );
                            sub_tiles.insert_with(|sub_tile_id| SubTile {
                                id: sub_tile_id,
                                tile_type: id,
                                pattern,
                                sub_position,
                                variant,
                                num_variants,
                                texture_rect: cell.project(sub_position.unit_rect()),
                            })
                        })
                        .collect();
                    info.sub_tiles.insert((pattern, sub_position), variants);
                }
            }

            ids_by_name.insert(name.clone(), id);
            infos.push(info);
        }

        log::debug!(
            "Built tile catalog with {} tile types and {} sub-tiles",
            infos.len(),
            sub_tiles.len()
        );

        Ok(Self {
            tile_size,
            infos,
            ids_by_name,
            sub_tiles,
        })
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn num_tile_types(&self) -> usize {
        self.infos.len()
    }

    pub fn num_sub_tiles(&self) -> usize {
        self.sub_tiles.len()
    }

    pub fn tile_types(&self) -> impl Iterator<Item = &TileInfo> {
        self.infos.iter()
    }

    /// Like [`Self::info`], but an absent name is not an error.
    pub fn lookup(&self, name: &str) -> Option<&TileInfo> {
        self.ids_by_name
            .get(name)
            .map(|id| &self.infos[id.0 as usize])
    }

    pub fn info(&self, name: &str) -> Result<&TileInfo, CatalogError> {
        self.lookup(name).ok_or_else(|| CatalogError::UnknownTile {
            name: name.to_owned(),
        })
    }

    pub fn tile_info(&self, id: TileTypeId) -> Option<&TileInfo> {
        self.infos.get(id.0 as usize)
    }

    pub fn category(&self, name: &str) -> Result<Category, CatalogError> {
        self.info(name).map(|info| info.category)
    }

    pub fn compatible_name(&self, name: &str, category: Category) -> Result<&str, CatalogError> {
        self.info(name)?.compatible_name(category)
    }

    /// Variants are chosen by the caller; the catalog never picks one at random.
    pub fn sub_tile(
        &self,
        name: &str,
        pattern: Pattern,
        sub_position: SubPosition,
        variant: usize,
    ) -> Result<&SubTile, CatalogError> {
        let id = self
            .info(name)?
            .sub_tile_id(pattern, sub_position, variant)?;
        Ok(&self.sub_tiles[id])
    }

    pub fn sub_tile_by_id(&self, id: SubTileId) -> Result<&SubTile, CatalogError> {
        self.sub_tiles
            .get(id)
            .ok_or(CatalogError::UnknownSubTile { id })
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    use terrace_core::approx::assert_relative_eq;

    /// A single grass family laid out on a 24px atlas. Walls have two variants so both height parities resolve.
    pub(crate) fn grass_desc() -> TileSetDesc {
        let top = TileDesc::new(Category::Top)
            .compatible_with(Category::Wall, "grass wall")
            .compatible_with(Category::Foot, "grass foot")
            .with_pattern(Pattern::Center, vec![(0, 0), (1, 0)])
            .with_pattern(Pattern::Patch, vec![(2, 0)])
            .with_pattern(Pattern::Cross, vec![(3, 0)])
            .with_pattern(Pattern::Horizontal, vec![(4, 0)])
            .with_pattern(Pattern::Vertical, vec![(5, 0)]);
        let wall = TileDesc::new(Category::Wall)
            .compatible_with(Category::Top, "grass top")
            .compatible_with(Category::Foot, "grass foot")
            .with_pattern(Pattern::Center, vec![(0, 1), (1, 1)])
            .with_pattern(Pattern::Edges, vec![(2, 1), (3, 1)]);
        let foot = TileDesc::new(Category::Foot)
            .compatible_with(Category::Top, "grass top")
            .compatible_with(Category::Wall, "grass wall")
            .with_pattern(Pattern::Center, vec![(0, 2)])
            .with_pattern(Pattern::Edges, vec![(1, 2)]);

        TileSetDesc::new(DEFAULT_TILE_SIZE)
            .with_tile("grass top", top)
            .with_tile("grass wall", wall)
            .with_tile("grass foot", foot)
    }

    pub(crate) fn grass_catalog() -> TileCatalog {
        TileCatalog::from_desc(&grass_desc()).unwrap()
    }

    #[test]
    fn categories_and_compatibilities() {
        let catalog = grass_catalog();

        assert_eq!(catalog.category("grass top"), Ok(Category::Top));
        assert_eq!(catalog.category("grass foot"), Ok(Category::Foot));
        assert_eq!(
            catalog.compatible_name("grass top", Category::Wall),
            Ok("grass wall")
        );
        assert_eq!(
            catalog.category("lava"),
            Err(CatalogError::UnknownTile {
                name: "lava".into()
            })
        );
    }

    #[test]
    fn missing_compatibility_is_an_error() {
        let desc = grass_desc().with_tile(
            "lonely top",
            TileDesc::new(Category::Top)
                .with_pattern(Pattern::Center, vec![(0, 0)])
                .with_pattern(Pattern::Patch, vec![(0, 0)])
                .with_pattern(Pattern::Cross, vec![(0, 0)])
                .with_pattern(Pattern::Horizontal, vec![(0, 0)])
                .with_pattern(Pattern::Vertical, vec![(0, 0)]),
        );
        let catalog = TileCatalog::from_desc(&desc).unwrap();

        assert_eq!(
            catalog.compatible_name("lonely top", Category::Foot),
            Err(CatalogError::MissingCompatibility {
                name: "lonely top".into(),
                category: Category::Foot
            })
        );
    }

    #[test]
    fn only_meaningful_combinations_are_registered() {
        let catalog = grass_catalog();

        // 5 patterns x 5 sub-positions x variants for the top, 2 x 3 x variants for the others.
        assert_eq!(catalog.num_sub_tiles(), (2 + 1 + 1 + 1 + 1) * 5 + (2 + 2) * 3 + 2 * 3);

        assert!(catalog
            .sub_tile("grass top", Pattern::Cross, SubPosition::TopRight, 0)
            .is_ok());
        assert_eq!(
            catalog.sub_tile("grass top", Pattern::Edges, SubPosition::Full, 0),
            Err(CatalogError::InvalidSubTile {
                name: "grass top".into(),
                pattern: Pattern::Edges,
                sub_position: SubPosition::Full,
                variant: 0
            })
        );
        assert!(catalog
            .sub_tile("grass wall", Pattern::Center, SubPosition::TopHalf, 0)
            .is_err());
        assert!(catalog
            .sub_tile("grass foot", Pattern::Edges, SubPosition::BottomHalf, 1)
            .is_err());
    }

    #[test]
    fn sub_tile_ids_round_trip() {
        let catalog = grass_catalog();

        let sub_tile = catalog
            .sub_tile("grass wall", Pattern::Edges, SubPosition::BottomLeft, 1)
            .unwrap();
        assert_eq!(sub_tile.variant, 1);
        assert_eq!(sub_tile.num_variants, 2);
        assert_eq!(catalog.sub_tile_by_id(sub_tile.id), Ok(sub_tile));
    }

    #[test]
    fn ids_follow_sorted_names() {
        let catalog = grass_catalog();
        let names: Vec<_> = catalog.tile_types().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["grass foot", "grass top", "grass wall"]);

        // The first registered sub-tile belongs to the first tile type in name order.
        let first = catalog
            .sub_tile("grass foot", Pattern::Center, SubPosition::BottomHalf, 0)
            .unwrap();
        assert_eq!(first.id.get(), 1);
    }

    #[test]
    fn texture_rect_covers_sub_position_of_variant_cell() {
        let catalog = grass_catalog();

        let sub_tile = catalog
            .sub_tile("grass wall", Pattern::Center, SubPosition::BottomRight, 1)
            .unwrap();
        let rect = sub_tile.texture_rect;
        // Cell (1, 1) starts at (24, 24); the bottom right quarter starts half a tile further.
        assert_relative_eq!(rect.min.x, 36.0);
        assert_relative_eq!(rect.min.y, 36.0);
        assert_relative_eq!(rect.shape.x, 12.0);
        assert_relative_eq!(rect.shape.y, 12.0);
    }

    #[test]
    fn missing_pattern_fails_the_build() {
        let mut desc = grass_desc();
        desc.tiles
            .get_mut("grass foot")
            .unwrap()
            .patterns
            .remove(&Pattern::Edges);

        assert_eq!(
            TileCatalog::from_desc(&desc).unwrap_err(),
            CatalogError::MissingPattern {
                name: "grass foot".into(),
                pattern: Pattern::Edges
            }
        );
    }
}
