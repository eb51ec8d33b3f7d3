use crate::glam::Vec2;

/// An axis-aligned rectangle, e.g. a region of a texture atlas measured in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AtlasRect {
    pub min: Vec2,
    pub shape: Vec2,
}

impl AtlasRect {
    pub const UNIT: Self = Self {
        min: Vec2::ZERO,
        shape: Vec2::ONE,
    };

    pub const fn new(min: Vec2, shape: Vec2) -> Self {
        Self { min, shape }
    }

    /// The corner opposite `min`.
    pub fn max(&self) -> Vec2 {
        self.min + self.shape
    }

    /// Maps `unit`, a rectangle given in fractions of the unit square, into `self`.
    pub fn project(&self, unit: AtlasRect) -> AtlasRect {
        Self {
            min: self.min + unit.min * self.shape,
            shape: unit.shape * self.shape,
        }
    }

    pub fn contains(&self, other: &Self) -> bool {
        self.min.cmple(other.min).all() && other.max().cmple(self.max()).all()
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
