use terrace_map::{
    core::glam::{const_ivec2, IVec2},
    Pattern, SubPosition,
};

pub const LEFT: IVec2 = const_ivec2!([-1, 0]);
pub const RIGHT: IVec2 = const_ivec2!([1, 0]);
/// Rows grow downward, so "below" in a column's row is `y + 1`.
pub const BELOW: IVec2 = const_ivec2!([0, 1]);

/// The von Neumann neighborhood.
pub const DIRECT_NEIGHBORS: [IVec2; 4] = [
    const_ivec2!([-1, 0]),
    const_ivec2!([0, -1]),
    const_ivec2!([0, 1]),
    const_ivec2!([1, 0]),
];

/// The Moore neighborhood.
pub const ALL_NEIGHBORS: [IVec2; 8] = [
    const_ivec2!([-1, -1]),
    const_ivec2!([-1, 0]),
    const_ivec2!([-1, 1]),
    const_ivec2!([0, -1]),
    const_ivec2!([0, 1]),
    const_ivec2!([1, -1]),
    const_ivec2!([1, 0]),
    const_ivec2!([1, 1]),
];

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Offset of the diagonal neighbor sharing this corner.
    pub fn offset(self) -> IVec2 {
        match self {
            Self::TopLeft => IVec2::new(-1, -1),
            Self::TopRight => IVec2::new(1, -1),
            Self::BottomLeft => IVec2::new(-1, 1),
            Self::BottomRight => IVec2::new(1, 1),
        }
    }

    pub fn sub_position(self) -> SubPosition {
        match self {
            Self::TopLeft => SubPosition::TopLeft,
            Self::TopRight => SubPosition::TopRight,
            Self::BottomLeft => SubPosition::BottomLeft,
            Self::BottomRight => SubPosition::BottomRight,
        }
    }
}

/// Which of the 8 cells around a tile count as connected to it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Connections {
    // Indexed by [dx + 1][dy + 1]. The center is never read.
    cells: [[bool; 3]; 3],
}

impl Connections {
    pub fn from_fn(mut is_connected: impl FnMut(IVec2) -> bool) -> Self {
        let mut connections = Self::default();
        for offset in ALL_NEIGHBORS {
            connections.cells[(offset.x + 1) as usize][(offset.y + 1) as usize] =
                is_connected(offset);
        }
        connections
    }

    /// `offset` must be one of [`ALL_NEIGHBORS`].
    pub(crate) fn get(&self, offset: IVec2) -> bool {
        self.cells[(offset.x + 1) as usize][(offset.y + 1) as usize]
    }

    pub fn corner_pattern(&self, corner: Corner) -> Pattern {
        let diagonal = corner.offset();
        Pattern::from_corner(
            self.get(IVec2::new(diagonal.x, 0)),
            self.get(IVec2::new(0, diagonal.y)),
            self.get(diagonal),
        )
    }

    pub fn corner_patterns(&self) -> CornerPatterns {
        CornerPatterns(Corner::ALL.map(|corner| self.corner_pattern(corner)))
    }
}

/// One blob pattern per corner, in [`Corner::ALL`] order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CornerPatterns(pub [Pattern; 4]);

impl CornerPatterns {
    pub fn get(&self, corner: Corner) -> Pattern {
        self.0[corner as usize]
    }

    /// The shared pattern, if all four corners agree.
    pub fn uniform(&self) -> Option<Pattern> {
        let [first, rest @ ..] = self.0;
        rest.iter().all(|&p| p == first).then(|| first)
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
