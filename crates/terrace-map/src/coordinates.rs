use crate::units::*;

use terrace_core::glam::{const_ivec2, IVec2, IVec3};
use terrace_core::static_assertions::const_assert_eq;

/// Chunks are square buckets of columns, `CHUNK_RESOLUTION` tiles on a side. Every height level gets its own chunks.
pub const CHUNK_RESOLUTION_LOG2: i32 = 3;
pub const CHUNK_RESOLUTION: i32 = 1 << CHUNK_RESOLUTION_LOG2;
const_assert_eq!(CHUNK_RESOLUTION, 8);

pub const CHUNK_SHAPE_LOG2_IVEC2: IVec2 = const_ivec2!([CHUNK_RESOLUTION_LOG2; 2]);

/// Returns the [`ChunkUnits`] coordinates of the chunk that contains `p`.
///
/// Only the horizontal axes are bucketed; `z` passes through unchanged. The arithmetic shift rounds toward negative infinity,
/// so e.g. `x = -1` lands in chunk `-1`, not chunk `0`.
pub fn in_chunk(p: TileUnits<IVec3>) -> ChunkUnits<IVec3> {
    let TileUnits(p) = p;
    let column = p.truncate() >> CHUNK_SHAPE_LOG2_IVEC2;
    ChunkUnits(column.extend(p.z))
}

/// The tile coordinates of the minimum column of the chunk at `coordinates`, at the chunk's height.
pub fn chunk_min(coordinates: ChunkUnits<IVec3>) -> TileUnits<IVec3> {
    let ChunkUnits(c) = coordinates;
    TileUnits((c.truncate() << CHUNK_SHAPE_LOG2_IVEC2).extend(c.z))
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    fn chunk_of(x: i32, y: i32) -> IVec2 {
        in_chunk(TileUnits(IVec3::new(x, y, 0))).0.truncate()
    }

    #[test]
    fn positive_coordinates_bucket_by_resolution() {
        assert_eq!(chunk_of(0, 0), IVec2::new(0, 0));
        assert_eq!(chunk_of(7, 7), IVec2::new(0, 0));
        assert_eq!(chunk_of(8, 15), IVec2::new(1, 1));
    }

    #[test]
    fn negative_coordinates_round_toward_negative_infinity() {
        assert_eq!(chunk_of(-1, -1), IVec2::new(-1, -1));
        assert_eq!(chunk_of(-8, -8), IVec2::new(-1, -1));
        assert_eq!(chunk_of(-9, 3), IVec2::new(-2, 0));
    }

    #[test]
    fn height_passes_through() {
        assert_eq!(in_chunk(TileUnits(IVec3::new(3, 4, -5))).0.z, -5);
    }

    #[test]
    fn every_column_falls_inside_its_chunk() {
        for x in -20..20 {
            for y in -20..20 {
                let p = IVec3::new(x, y, 2);
                let TileUnits(min) = chunk_min(in_chunk(TileUnits(p)));
                let offset = p - min;
                assert!(offset.x >= 0 && offset.x < CHUNK_RESOLUTION, "{:?}", p);
                assert!(offset.y >= 0 && offset.y < CHUNK_RESOLUTION, "{:?}", p);
                assert_eq!(offset.z, 0);
            }
        }
    }
}
