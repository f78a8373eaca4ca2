use crate::types::{Color, Coord, Rank};

/// One of the eight unit compass directions on the board
///
/// A direction exists only between squares on a common rank, file, or
/// diagonal; knights reason about fixed offsets instead (see
/// [`KNIGHT_DELTAS`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// (file, rank) unit step of this direction, from White's point of view
    pub const fn delta(&self) -> (isize, isize) {
        match *self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, 1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (1, -1),
        }
    }

    pub const fn is_orthogonal(&self) -> bool {
        matches!(
            *self,
            Direction::Up | Direction::Down | Direction::Left | Direction::Right
        )
    }

    pub const fn is_diagonal(&self) -> bool {
        !self.is_orthogonal()
    }

    /// Direction pointing from `src` towards `dst`
    ///
    /// Defined only when the delta is axis-aligned or diagonal with equal
    /// magnitude on both axes; any other delta has no direction.
    pub fn between(src: Coord, dst: Coord) -> Option<Direction> {
        let df = dst.file().index() as isize - src.file().index() as isize;
        let dr = dst.rank().index() as isize - src.rank().index() as isize;
        match (df.signum(), dr.signum()) {
            _ if df != 0 && dr != 0 && df.abs() != dr.abs() => None,
            (0, 0) => None,
            (0, 1) => Some(Direction::Up),
            (0, -1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (-1, 1) => Some(Direction::UpLeft),
            (1, 1) => Some(Direction::UpRight),
            (-1, -1) => Some(Direction::DownLeft),
            (1, -1) => Some(Direction::DownRight),
            _ => unreachable!(),
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::UpLeft,
            Direction::UpRight,
            Direction::DownLeft,
            Direction::DownRight,
        ]
        .into_iter()
    }
}

/// The eight fixed knight offsets
pub const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Rank delta of a single pawn advance for the given color
pub const fn pawn_advance(c: Color) -> isize {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Rank on which the pawns of the given color start, permitting the double
/// advance
pub const fn pawn_home_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Rank on which the major pieces of the given color start
pub const fn back_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

pub fn file_distance(src: Coord, dst: Coord) -> usize {
    src.file().index().abs_diff(dst.file().index())
}

pub fn rank_distance(src: Coord, dst: Coord) -> usize {
    src.rank().index().abs_diff(dst.rank().index())
}
