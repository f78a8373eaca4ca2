//! Piece movement rules
//!
//! Each piece kind answers one question: is a move from `src` to `dst`
//! geometrically legal for me, given the color occupying the destination?
//! The rules are pure functions of those three inputs. They have no access
//! to the rest of the board, so obstruction along the path of a sliding
//! piece is checked separately by [`Board`](crate::board::Board).

use crate::geometry::{self, Direction, KNIGHT_DELTAS};
use crate::types::{Color, Coord, Piece};

use thiserror::Error;

/// Reasons a move is illegal
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// Source and destination are the same square
    #[error("move from {0} to itself")]
    SelfMove(Coord),
    /// No piece occupies the source square
    #[error("no piece at {0}")]
    EmptySource(Coord),
    /// The piece cannot move in this direction or over this distance
    #[error("{0:?} cannot move this way")]
    BadDirection(Piece),
    /// The destination is occupied by a piece of the mover's own color
    #[error("{0:?} cannot capture an allied piece")]
    FriendlyCapture(Piece),
    /// A pawn may only capture diagonally
    #[error("pawn cannot capture straight ahead on {0}")]
    StraightCapture(Coord),
    /// A square between source and destination is occupied
    #[error("path blocked at {0}")]
    PathBlocked(Coord),
}

/// Checks whether a move is geometrically legal for the given piece.
///
/// `dst_color` is the color occupying the destination square, or `None` if it
/// is empty. Path obstruction for sliding pieces is deliberately not checked
/// here; see [`Board::make_move`](crate::board::Board::make_move).
pub fn check_move(
    color: Color,
    piece: Piece,
    src: Coord,
    dst: Coord,
    dst_color: Option<Color>,
) -> Result<(), MoveError> {
    match piece {
        Piece::Pawn => check_pawn(color, src, dst, dst_color),
        Piece::Knight => check_knight(color, src, dst, dst_color),
        Piece::Bishop => check_bishop(color, src, dst, dst_color),
        Piece::Rook => check_rook(color, src, dst, dst_color),
        Piece::Queen => check_queen(color, src, dst, dst_color),
        Piece::King => check_king(color, src, dst, dst_color),
    }
}

fn check_destination(color: Color, piece: Piece, dst_color: Option<Color>) -> Result<(), MoveError> {
    if dst_color == Some(color) {
        return Err(MoveError::FriendlyCapture(piece));
    }
    Ok(())
}

fn check_pawn(
    color: Color,
    src: Coord,
    dst: Coord,
    dst_color: Option<Color>,
) -> Result<(), MoveError> {
    let advance = geometry::pawn_advance(color);
    let dr = dst.rank().index() as isize - src.rank().index() as isize;
    let df = geometry::file_distance(src, dst);

    // Straight advance: one step, or two from the home rank. The destination
    // must be empty, a pawn never captures forwards.
    if df == 0 {
        let steps_ok = dr == advance
            || (dr == 2 * advance && src.rank() == geometry::pawn_home_rank(color));
        if !steps_ok {
            return Err(MoveError::BadDirection(Piece::Pawn));
        }
        if dst_color.is_some() {
            return Err(MoveError::StraightCapture(dst));
        }
        return Ok(());
    }

    // Diagonal single step, only as a capture of the opponent.
    if df == 1 && dr == advance {
        return match dst_color {
            Some(c) if c == color.inv() => Ok(()),
            Some(_) => Err(MoveError::FriendlyCapture(Piece::Pawn)),
            None => Err(MoveError::BadDirection(Piece::Pawn)),
        };
    }

    Err(MoveError::BadDirection(Piece::Pawn))
}

fn check_knight(
    color: Color,
    src: Coord,
    dst: Coord,
    dst_color: Option<Color>,
) -> Result<(), MoveError> {
    let df = dst.file().index() as isize - src.file().index() as isize;
    let dr = dst.rank().index() as isize - src.rank().index() as isize;
    if !KNIGHT_DELTAS.contains(&(df, dr)) {
        return Err(MoveError::BadDirection(Piece::Knight));
    }
    check_destination(color, Piece::Knight, dst_color)
}

fn check_bishop(
    color: Color,
    src: Coord,
    dst: Coord,
    dst_color: Option<Color>,
) -> Result<(), MoveError> {
    match Direction::between(src, dst) {
        Some(d) if d.is_diagonal() => check_destination(color, Piece::Bishop, dst_color),
        _ => Err(MoveError::BadDirection(Piece::Bishop)),
    }
}

fn check_rook(
    color: Color,
    src: Coord,
    dst: Coord,
    dst_color: Option<Color>,
) -> Result<(), MoveError> {
    match Direction::between(src, dst) {
        Some(d) if d.is_orthogonal() => check_destination(color, Piece::Rook, dst_color),
        _ => Err(MoveError::BadDirection(Piece::Rook)),
    }
}

fn check_queen(
    color: Color,
    src: Coord,
    dst: Coord,
    dst_color: Option<Color>,
) -> Result<(), MoveError> {
    match Direction::between(src, dst) {
        Some(_) => check_destination(color, Piece::Queen, dst_color),
        None => Err(MoveError::BadDirection(Piece::Queen)),
    }
}

fn check_king(
    color: Color,
    src: Coord,
    dst: Coord,
    dst_color: Option<Color>,
) -> Result<(), MoveError> {
    let one_step = Direction::between(src, dst).is_some()
        && geometry::file_distance(src, dst) <= 1
        && geometry::rank_distance(src, dst) <= 1;
    if !one_step {
        return Err(MoveError::BadDirection(Piece::King));
    }
    check_destination(color, Piece::King, dst_color)
}
