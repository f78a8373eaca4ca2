//! Squares strictly between two aligned coordinates
//!
//! Used by the board to check path obstruction for sliding pieces. The
//! pieces themselves never consult this module, as they have no visibility
//! into occupancy.

use crate::geometry::Direction;
use crate::types::Coord;

use arrayvec::ArrayVec;

/// At most 6 squares lie strictly between two squares of an 8x8 board.
pub type Path = ArrayVec<Coord, 6>;

/// Returns the squares strictly between `src` and `dst`, exclusive of both,
/// walking along their common rank, file or diagonal.
///
/// Returns `None` when no direction connects the two squares (including
/// `src == dst`).
pub fn strict(src: Coord, dst: Coord) -> Option<Path> {
    let (df, dr) = Direction::between(src, dst)?.delta();
    let mut path = Path::new();
    let mut cur = src.try_shift(df, dr).unwrap();
    while cur != dst {
        path.push(cur);
        cur = cur.try_shift(df, dr).unwrap();
    }
    Some(path)
}
