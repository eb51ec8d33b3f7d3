mod family;
mod neighborhood;

pub use family::TerrainFamily;
pub use neighborhood::*;

use crate::Config;

use smallvec::SmallVec;
use terrace_map::{
    core::glam::{IVec2, IVec3},
    CatalogError, Category, Pattern, Scene, SubPosition, TileCatalog, TileInfo, TileInstance,
};

/// Paints terrain into a [`Scene`] and keeps the art of neighboring tiles consistent.
///
/// Every write goes through [`TerrainEditor::shape`], which derives a tile's sub-tiles from its neighbors and then, if asked
/// to `relay`, reshapes the neighbors that depend on it. Relayed shapes never relay again, so one edit touches a bounded
/// neighborhood instead of flooding the scene. The flip side is that a change two cells away is not re-converged.
pub struct TerrainEditor<'s, 'c> {
    scene: &'s mut Scene<'c>,
    config: Config,
    shapes_performed: usize,
}

impl<'s, 'c> TerrainEditor<'s, 'c> {
    pub fn new(scene: &'s mut Scene<'c>, config: Config) -> Self {
        Self {
            scene,
            config,
            shapes_performed: 0,
        }
    }

    pub fn scene(&self) -> &Scene<'c> {
        self.scene
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of [`Self::shape`] calls made through this editor, including the ones made on behalf of [`Self::place`].
    pub fn shapes_performed(&self) -> usize {
        self.shapes_performed
    }

    fn catalog(&self) -> &'c TileCatalog {
        self.scene.catalog()
    }

    /// Raises the column at `(p.x, p.y)` to height `p.z`: walls of `family` from the column's floor up to `p.z`, capped with
    /// a top.
    ///
    /// The floor is the highest top already in the column at or below `p.z`, but never lower than the configured lowest
    /// height. Returns `Ok(false)` without touching the scene if `p.z` is below the floor.
    pub fn place(&mut self, family: &TerrainFamily, p: IVec3) -> Result<bool, CatalogError> {
        family.validate(self.catalog())?;

        let lowest_height = self.config.lowest_height;
        let floor = self
            .scene
            .highest_tile_z(p.truncate(), Category::Top.sub_layer(), p.z)
            .map_or(lowest_height, |z| z.max(lowest_height));
        if p.z < floor {
            log::debug!("Rejected placement at {:?} below floor {}", p, floor);
            return Ok(false);
        }

        for h in floor..p.z {
            self.shape(&family.wall, p.truncate().extend(h), true)?;
        }
        self.shape(&family.top, p, true)?;

        Ok(true)
    }

    /// Recomputes the sub-tiles of the `name` tile at `p` from its neighborhood and writes it to the scene.
    ///
    /// With `relay`, the neighbors whose appearance depends on this tile are reshaped afterwards, without relay.
    pub fn shape(&mut self, name: &str, p: IVec3, relay: bool) -> Result<(), CatalogError> {
        self.shapes_performed += 1;
        let info = self.catalog().info(name)?;
        log::trace!("Shaping {:?} at {:?}, relay = {}", name, p, relay);

        match info.category {
            Category::Foot => self.shape_foot(info, p, relay),
            Category::Wall => self.shape_wall(info, p, relay),
            Category::Top => self.shape_top(info, p, relay),
        }
    }

    fn shape_foot(&mut self, info: &'c TileInfo, p: IVec3, relay: bool) -> Result<(), CatalogError> {
        let foot = info.name.as_str();
        let top = info.compatible_name(Category::Top)?;
        let wall = info.compatible_name(Category::Wall)?;
        let wall_info = self.catalog().info(wall)?;

        let connect_left = self.has(foot, p, LEFT) || self.has(wall, p, LEFT);
        let connect_right = self.has(foot, p, RIGHT) || self.has(wall, p, RIGHT);

        // A side spreads as bare ground if the cell below is uncovered, or if the ground wraps around from the diagonal.
        let spreads = |side: IVec2| {
            self.is_uncovered_top(top, wall, foot, p, BELOW)
                || (self.is_uncovered_top(top, wall, foot, p, side + BELOW)
                    && self.has(top, p, side)
                    && self.has(foot, p, side)
                    && self.has(top, p, BELOW))
        };
        let spreads_left = spreads(LEFT);
        let spreads_right = spreads(RIGHT);

        let variant = wall_variant(p.z);
        let piece = |spreads: bool, connected: bool, sub_position: SubPosition| {
            let (source, variant) = if spreads {
                (info, 0)
            } else {
                (wall_info, variant)
            };
            source.sub_tile_id(connection_pattern(connected), sub_position, variant)
        };

        let mut tile = TileInstance::new(info.id);
        if connect_left == connect_right && spreads_left == spreads_right {
            tile.sub_tiles
                .push(piece(spreads_left, connect_left, SubPosition::BottomHalf)?);
        } else {
            tile.sub_tiles
                .push(piece(spreads_left, connect_left, SubPosition::BottomLeft)?);
            tile.sub_tiles
                .push(piece(spreads_right, connect_right, SubPosition::BottomRight)?);
        }
        self.scene.set_tile(tile, p, info.category.sub_layer());

        if relay {
            self.relay_direct_neighbors(foot, wall, p)?;
        }
        Ok(())
    }

    fn shape_wall(&mut self, info: &'c TileInfo, p: IVec3, relay: bool) -> Result<(), CatalogError> {
        let wall = info.name.as_str();
        let top = info.compatible_name(Category::Top)?;
        let foot = info.compatible_name(Category::Foot)?;

        // A wall can't stand under its own top.
        if self.has(top, p, IVec2::ZERO) {
            return self.shape(foot, p, relay);
        }

        // Nor next to bare ground at its own level; it has to be capped instead.
        if ALL_NEIGHBORS
            .iter()
            .any(|&offset| self.is_uncovered_top(top, wall, foot, p, offset))
        {
            self.shape(foot, p, relay)?;
            return self.shape(top, p, relay);
        }

        let connect_left = self.has(wall, p, LEFT) || self.has(foot, p, LEFT);
        let connect_right = self.has(wall, p, RIGHT) || self.has(foot, p, RIGHT);
        let variant = wall_variant(p.z);
        let piece = |connected: bool, sub_position: SubPosition| {
            info.sub_tile_id(connection_pattern(connected), sub_position, variant)
        };

        let mut tile = TileInstance::new(info.id);
        if connect_left == connect_right {
            tile.sub_tiles
                .push(piece(connect_left, SubPosition::BottomHalf)?);
        } else {
            tile.sub_tiles
                .push(piece(connect_left, SubPosition::BottomLeft)?);
            tile.sub_tiles
                .push(piece(connect_right, SubPosition::BottomRight)?);
        }
        self.scene.set_tile(tile, p, info.category.sub_layer());

        if relay {
            self.relay_direct_neighbors(foot, wall, p)?;
        }
        Ok(())
    }

    fn shape_top(&mut self, info: &'c TileInfo, p: IVec3, relay: bool) -> Result<(), CatalogError> {
        let top = info.name.as_str();
        let wall = info.compatible_name(Category::Wall)?;
        let foot = info.compatible_name(Category::Foot)?;

        let under_wall = self.has(wall, p, IVec2::ZERO) || self.has(foot, p, IVec2::ZERO);
        // Walls about to be capped by this top's relay already count as connected.
        let walls_connect = relay && !under_wall;
        let patterns = Connections::from_fn(|offset| {
            self.has(top, p, offset) || (walls_connect && self.has(wall, p, offset))
        })
        .corner_patterns();

        let mut tile = TileInstance::new(info.id);
        if !under_wall {
            if let Some(pattern) = patterns.uniform() {
                tile.sub_tiles
                    .push(info.sub_tile_id(pattern, SubPosition::Full, 0)?);
            } else {
                for corner in Corner::ALL {
                    tile.sub_tiles.push(info.sub_tile_id(
                        patterns.get(corner),
                        corner.sub_position(),
                        0,
                    )?);
                }
            }
        } else {
            // Over a wall, ground only spills onto the corners that touch open ground.
            for corner in Corner::ALL {
                if self.should_spread(top, wall, foot, p, corner) {
                    tile.sub_tiles.push(info.sub_tile_id(
                        patterns.get(corner),
                        corner.sub_position(),
                        0,
                    )?);
                }
            }
        }
        self.scene.set_tile(tile, p, info.category.sub_layer());

        if relay {
            if !under_wall {
                let walls: SmallVec<[IVec3; 8]> = ALL_NEIGHBORS
                    .iter()
                    .filter(|&&offset| self.has(wall, p, offset))
                    .filter_map(|&offset| neighbor(p, offset))
                    .collect();
                for &q in &walls {
                    self.shape(top, q, false)?;
                }
                for &q in &walls {
                    self.shape(foot, q, false)?;
                }
            }

            for offset in ALL_NEIGHBORS {
                self.reshape_if_present(foot, p, offset)?;
                self.reshape_if_present(top, p, offset)?;
            }
        }
        Ok(())
    }

    fn should_spread(&self, top: &str, wall: &str, foot: &str, p: IVec3, corner: Corner) -> bool {
        let diagonal = corner.offset();
        let side = IVec2::new(diagonal.x, 0);
        let vertical = IVec2::new(0, diagonal.y);

        if self.has(top, p, side) {
            if !self.is_covered(wall, foot, p, side) {
                return true;
            }
            if self.has(top, p, vertical)
                && self.is_uncovered_top(top, wall, foot, p, diagonal)
            {
                return true;
            }
        }

        self.has(top, p, vertical) && !self.is_covered(wall, foot, p, vertical)
    }

    fn relay_direct_neighbors(&mut self, foot: &str, wall: &str, p: IVec3) -> Result<(), CatalogError> {
        for offset in DIRECT_NEIGHBORS {
            self.reshape_if_present(foot, p, offset)?;
            self.reshape_if_present(wall, p, offset)?;
        }
        Ok(())
    }

    fn reshape_if_present(&mut self, name: &str, p: IVec3, offset: IVec2) -> Result<(), CatalogError> {
        if let Some(q) = neighbor(p, offset).filter(|_| self.has(name, p, offset)) {
            self.shape(name, q, false)?;
        }
        Ok(())
    }

    /// True if the cell at `p + offset` holds a `name` tile. Unknown names, empty cells and cells past the edge of the
    /// coordinate range are simply not connected.
    fn has(&self, name: &str, p: IVec3, offset: IVec2) -> bool {
        let q = match neighbor(p, offset) {
            Some(q) => q,
            None => return false,
        };
        self.catalog().lookup(name).map_or(false, |info| {
            self.scene
                .get_tile(q, info.category.sub_layer())
                .map_or(false, |tile| tile.tile_type == info.id)
        })
    }

    fn is_covered(&self, wall: &str, foot: &str, p: IVec3, offset: IVec2) -> bool {
        self.has(wall, p, offset) || self.has(foot, p, offset)
    }

    fn is_uncovered_top(&self, top: &str, wall: &str, foot: &str, p: IVec3, offset: IVec2) -> bool {
        self.has(top, p, offset) && !self.is_covered(wall, foot, p, offset)
    }
}

/// The cell at `p + offset` at the same height, or `None` if that leaves the `i32` range.
fn neighbor(p: IVec3, offset: IVec2) -> Option<IVec3> {
    Some(IVec3::new(
        p.x.checked_add(offset.x)?,
        p.y.checked_add(offset.y)?,
        p.z,
    ))
}

/// Alternates with height so stacked walls show a brick offset.
fn wall_variant(z: i32) -> usize {
    (z.unsigned_abs() % 2) as usize
}

fn connection_pattern(connected: bool) -> Pattern {
    if connected {
        Pattern::Center
    } else {
        Pattern::Edges
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
