use crate::{SubLayer, TileTypeId, TOP_LAYER, WALL_LAYER};

use serde::{Deserialize, Serialize};
use terrace_core::{allocator::AllocId32, geometry::AtlasRect, glam::Vec2};

/// The role a tile type plays in a terrain column.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Category {
    /// Walkable horizontal cap of a column.
    Top,
    /// Vertical face, one height unit tall.
    Wall,
    /// Where a wall meets the ground below it.
    Foot,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Top, Self::Wall, Self::Foot];

    /// Tops live on their own sub-layer so they can sit over a wall or foot of the same cell. Walls and feet share a sub-layer,
    /// which means a foot replaces a wall.
    pub const fn sub_layer(self) -> SubLayer {
        match self {
            Self::Top => TOP_LAYER,
            Self::Wall | Self::Foot => WALL_LAYER,
        }
    }

    /// The patterns a tile type of this category must provide art for.
    pub const fn patterns(self) -> &'static [Pattern] {
        match self {
            Self::Top => &[
                Pattern::Center,
                Pattern::Patch,
                Pattern::Cross,
                Pattern::Horizontal,
                Pattern::Vertical,
            ],
            Self::Wall | Self::Foot => &[Pattern::Center, Pattern::Edges],
        }
    }

    /// The sub-positions registered for every pattern of this category.
    pub const fn sub_positions(self) -> &'static [SubPosition] {
        match self {
            Self::Top => &[
                SubPosition::Full,
                SubPosition::TopLeft,
                SubPosition::TopRight,
                SubPosition::BottomLeft,
                SubPosition::BottomRight,
            ],
            Self::Wall | Self::Foot => &[
                SubPosition::BottomHalf,
                SubPosition::BottomLeft,
                SubPosition::BottomRight,
            ],
        }
    }
}

/// Local connectivity shape, used to pick which art of a blob tile to draw.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Pattern {
    Center,
    Patch,
    Cross,
    Horizontal,
    Vertical,
    Edges,
}

impl Pattern {
    /// Classifies one corner of a tile from the connectivity of the three cells sharing that corner: the horizontal side, the
    /// vertical side and the diagonal.
    pub const fn from_corner(horizontal: bool, vertical: bool, diagonal: bool) -> Self {
        match (horizontal, vertical, diagonal) {
            (true, true, true) => Self::Center,
            (true, true, false) => Self::Cross,
            (true, false, _) => Self::Horizontal,
            (false, true, _) => Self::Vertical,
            (false, false, _) => Self::Patch,
        }
    }
}

/// Which part of a full tile's art a sub-tile covers.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum SubPosition {
    Full,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    TopHalf,
    BottomHalf,
    LeftHalf,
    RightHalf,
}

impl SubPosition {
    /// The covered region as a fraction of the unit square, `y` pointing down.
    pub fn unit_rect(self) -> AtlasRect {
        let (min, shape): ([f32; 2], [f32; 2]) = match self {
            Self::Full => ([0.0, 0.0], [1.0, 1.0]),
            Self::TopLeft => ([0.0, 0.0], [0.5, 0.5]),
            Self::TopRight => ([0.5, 0.0], [0.5, 0.5]),
            Self::BottomLeft => ([0.0, 0.5], [0.5, 0.5]),
            Self::BottomRight => ([0.5, 0.5], [0.5, 0.5]),
            Self::TopHalf => ([0.0, 0.0], [1.0, 0.5]),
            Self::BottomHalf => ([0.0, 0.5], [1.0, 0.5]),
            Self::LeftHalf => ([0.0, 0.0], [0.5, 1.0]),
            Self::RightHalf => ([0.5, 0.0], [0.5, 1.0]),
        };
        AtlasRect::new(Vec2::from(min), Vec2::from(shape))
    }
}

/// Stable identifier of a [`SubTile`], unique within a [`TileCatalog`](crate::TileCatalog).
pub type SubTileId = AllocId32;

/// One drawable piece of a tile type's art.
#[derive(Clone, Debug, PartialEq)]
pub struct SubTile {
    pub id: SubTileId,
    pub tile_type: TileTypeId,
    pub pattern: Pattern,
    pub sub_position: SubPosition,
    pub variant: usize,
    pub num_variants: usize,
    /// In atlas pixels.
    pub texture_rect: AtlasRect,
}
