use crate::{Category, Pattern, SubPosition, SubTileId};

use std::fmt;

/// Malformed or mismatched catalog data.
///
/// These are data errors: a well-formed catalog never produces them, so callers are expected to abort the current edit rather
/// than recover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    UnknownTile {
        name: String,
    },
    MissingCompatibility {
        name: String,
        category: Category,
    },
    InvalidSubTile {
        name: String,
        pattern: Pattern,
        sub_position: SubPosition,
        variant: usize,
    },
    UnknownSubTile {
        id: SubTileId,
    },
    MissingPattern {
        name: String,
        pattern: Pattern,
    },
    CategoryMismatch {
        name: String,
        expected: Category,
        actual: Category,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTile { name } => write!(f, "unknown tile type {name:?}"),
            Self::MissingCompatibility { name, category } => write!(
                f,
                "tile type {name:?} declares no compatible {category:?} tile type"
            ),
            Self::InvalidSubTile {
                name,
                pattern,
                sub_position,
                variant,
            } => write!(
                f,
                "tile type {name:?} has no sub-tile (pattern {pattern:?}, sub-position {sub_position:?}, variant {variant})"
            ),
            Self::UnknownSubTile { id } => write!(f, "no sub-tile with ID {id}"),
            Self::MissingPattern { name, pattern } => {
                write!(f, "tile type {name:?} has no cells for pattern {pattern:?}")
            }
            Self::CategoryMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "tile type {name:?} is a {actual:?} tile, expected {expected:?}"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}
