//! Board-layout strategies
//!
//! A layout produces the initial occupied-square mapping for
//! [`Board::initialize`](crate::board::Board::initialize). The board and the
//! game depend only on the [`Layout`] contract, not on how a layout is
//! built, so tests can inject arbitrary positions.

use crate::geometry;
use crate::types::{Cell, Color, Coord, File, Piece, Rank};

use std::collections::HashMap;

/// Produces an initial board layout
pub trait Layout {
    fn generate(&self) -> HashMap<Coord, Cell>;
}

/// The standard initial chess position
///
/// Back ranks hold rook, knight, bishop, queen, king, bishop, knight, rook
/// in file order, with a rank of pawns in front of each.
#[derive(Debug, Copy, Clone, Default)]
pub struct StandardLayout;

const BACK_RANK_PIECES: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Layout for StandardLayout {
    fn generate(&self) -> HashMap<Coord, Cell> {
        let mut cells = HashMap::new();
        for file in File::iter() {
            cells.insert(
                Coord::from_parts(file, Rank::R2),
                Cell::from_parts(Color::White, Piece::Pawn),
            );
            cells.insert(
                Coord::from_parts(file, Rank::R7),
                Cell::from_parts(Color::Black, Piece::Pawn),
            );
        }
        for color in [Color::White, Color::Black] {
            let rank = geometry::back_rank(color);
            for (file, piece) in File::iter().zip(BACK_RANK_PIECES) {
                cells.insert(Coord::from_parts(file, rank), Cell::from_parts(color, piece));
            }
        }
        cells
    }
}

/// A layout with no pieces at all, used for isolated rule testing
#[derive(Debug, Copy, Clone, Default)]
pub struct EmptyLayout;

impl Layout for EmptyLayout {
    fn generate(&self) -> HashMap<Coord, Cell> {
        HashMap::new()
    }
}
