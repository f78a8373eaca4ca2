//! Board and related things

use crate::between;
use crate::rules::{self, MoveError};
use crate::types::{Cell, Color, Coord, File, Rank};

use std::collections::HashMap;
use std::fmt::{self, Display};

/// Chess board with a sparse position map
///
/// Only occupied squares are stored; querying an absent square yields
/// [`Cell::EMPTY`]. The board applies moves via remove-then-insert, never by
/// mutating a piece in place, so a rejected move leaves the map untouched.
///
/// The board knows the movement rules and path obstruction, but nothing
/// about turns or game state; that belongs to [`Game`](crate::game::Game).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    cells: HashMap<Coord, Cell>,
    initialized: bool,
}

impl Board {
    /// Returns an empty, uninitialized board
    pub fn new() -> Board {
        Board::default()
    }

    /// Replaces the board contents with the given layout
    ///
    /// Empty cells in the layout are dropped, keeping the map sparse.
    pub fn initialize(&mut self, layout: HashMap<Coord, Cell>) {
        self.cells = layout
            .into_iter()
            .filter(|(_, cell)| cell.is_occupied())
            .collect();
        self.initialized = true;
    }

    /// Reports whether [`Board::initialize`] has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the contents of the square at `c`, [`Cell::EMPTY`] if absent
    pub fn get(&self, c: Coord) -> Cell {
        self.cells.get(&c).copied().unwrap_or(Cell::EMPTY)
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Coord::from_parts(file, rank))
    }

    /// Validates and applies a move, returning the captured cell
    ///
    /// The returned cell is whatever occupied `dst` before the move,
    /// [`Cell::EMPTY`] for a quiet move. Callers inspect it to detect
    /// captures, in particular a captured king.
    ///
    /// On any error the board is left unchanged.
    pub fn make_move(&mut self, src: Coord, dst: Coord) -> Result<Cell, MoveError> {
        if src == dst {
            return Err(MoveError::SelfMove(src));
        }
        let mover = self.get(src);
        let (color, piece) = match (mover.color(), mover.piece()) {
            (Some(c), Some(p)) => (c, p),
            _ => return Err(MoveError::EmptySource(src)),
        };
        let captured = self.get(dst);
        rules::check_move(color, piece, src, dst, captured.color())?;
        if piece.is_sliding() {
            // The direction exists here: the rules already rejected any
            // unaligned move for a sliding piece.
            for c in between::strict(src, dst).unwrap() {
                if self.get(c).is_occupied() {
                    return Err(MoveError::PathBlocked(c));
                }
            }
        }
        self.cells.remove(&src);
        self.cells.insert(dst, mover);
        Ok(captured)
    }

    /// Sums the material values of all pieces of the given color
    pub fn score(&self, color: Color) -> f64 {
        self.cells
            .values()
            .filter(|cell| cell.color() == Some(color))
            .filter_map(|cell| cell.piece())
            .map(|piece| piece.value())
            .sum()
    }

    /// Read-only view over the occupied squares, for rendering
    pub fn cells(&self) -> &HashMap<Coord, Cell> {
        &self.cells
    }

    /// Wraps the board to allow pretty-printing with the given style
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used
    /// with `write!()`, `println!()`, or `ToString::to_string`.
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;

    fn cell(c: Cell) -> char;

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank_idx in (0..8).rev() {
            let rank = Rank::from_index(rank_idx);
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                write!(f, "{}", Self::cell(b.get2(file, rank)))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';

    fn cell(c: Cell) -> char {
        c.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';

    fn cell(c: Cell) -> char {
        c.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{EmptyLayout, Layout, StandardLayout};
    use crate::types::Piece;
    use std::str::FromStr;

    fn c(s: &str) -> Coord {
        Coord::from_str(s).unwrap()
    }

    fn standard_board() -> Board {
        let mut board = Board::new();
        board.initialize(StandardLayout.generate());
        board
    }

    #[test]
    fn test_initialized_flag() {
        let mut board = Board::new();
        assert!(!board.is_initialized());
        board.initialize(EmptyLayout.generate());
        assert!(board.is_initialized());
    }

    #[test]
    fn test_self_move() {
        let mut board = standard_board();
        assert_eq!(
            board.make_move(c("d2"), c("d2")),
            Err(MoveError::SelfMove(c("d2")))
        );

        // rejected regardless of initialization
        let mut board = Board::new();
        assert_eq!(
            board.make_move(c("d2"), c("d2")),
            Err(MoveError::SelfMove(c("d2")))
        );
    }

    #[test]
    fn test_empty_source() {
        let mut board = standard_board();
        assert_eq!(
            board.make_move(c("d4"), c("d5")),
            Err(MoveError::EmptySource(c("d4")))
        );
    }

    #[test]
    fn test_quiet_move_and_capture() {
        let mut board = Board::new();
        let mut layout = EmptyLayout.generate();
        layout.insert(c("d4"), Cell::from_parts(Color::White, Piece::Rook));
        layout.insert(c("d8"), Cell::from_parts(Color::Black, Piece::Pawn));
        board.initialize(layout);

        assert_eq!(board.make_move(c("d4"), c("d6")), Ok(Cell::EMPTY));
        assert_eq!(board.get(c("d4")), Cell::EMPTY);
        assert_eq!(
            board.get(c("d6")),
            Cell::from_parts(Color::White, Piece::Rook)
        );

        assert_eq!(
            board.make_move(c("d6"), c("d8")),
            Ok(Cell::from_parts(Color::Black, Piece::Pawn))
        );
        assert_eq!(
            board.get(c("d8")),
            Cell::from_parts(Color::White, Piece::Rook)
        );
        assert_eq!(board.cells().len(), 1);
    }

    #[test]
    fn test_path_obstruction() {
        for blocker in ["d5", "d6", "d7"] {
            let mut board = Board::new();
            let mut layout = EmptyLayout.generate();
            layout.insert(c("d4"), Cell::from_parts(Color::White, Piece::Rook));
            layout.insert(c(blocker), Cell::from_parts(Color::Black, Piece::Pawn));
            board.initialize(layout);

            assert_eq!(
                board.make_move(c("d4"), c("d8")),
                Err(MoveError::PathBlocked(c(blocker)))
            );
            // nothing moved
            assert_eq!(
                board.get(c("d4")),
                Cell::from_parts(Color::White, Piece::Rook)
            );
        }

        let mut board = Board::new();
        let mut layout = EmptyLayout.generate();
        layout.insert(c("d4"), Cell::from_parts(Color::White, Piece::Rook));
        board.initialize(layout);
        assert_eq!(board.make_move(c("d4"), c("d8")), Ok(Cell::EMPTY));
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let mut board = standard_board();
        assert_eq!(board.make_move(c("b1"), c("c3")), Ok(Cell::EMPTY));
        assert_eq!(
            board.get(c("c3")),
            Cell::from_parts(Color::White, Piece::Knight)
        );
    }

    #[test]
    fn test_sliding_blocked_in_initial_position() {
        let mut board = standard_board();
        assert_eq!(
            board.make_move(c("a1"), c("a3")),
            Err(MoveError::PathBlocked(c("a2")))
        );
        assert_eq!(
            board.make_move(c("c1"), c("e3")),
            Err(MoveError::PathBlocked(c("d2")))
        );
    }

    #[test]
    fn test_standard_scores_symmetric() {
        let board = standard_board();
        // 8 pawns + 2 knights + 2 bishops + 2 rooks + 1 queen
        let expected = 8.0 + 2.0 * 2.5 + 2.0 * 3.0 + 2.0 * 5.0 + 9.0;
        assert_eq!(board.score(Color::White), expected);
        assert_eq!(board.score(Color::Black), expected);
    }

    #[test]
    fn test_score_drops_after_capture() {
        let mut board = standard_board();
        board.make_move(c("e2"), c("e4")).unwrap();
        board.make_move(c("d7"), c("d5")).unwrap();
        board.make_move(c("e4"), c("d5")).unwrap();
        assert_eq!(board.score(Color::Black), board.score(Color::White) - 1.0);
    }

    #[test]
    fn test_pretty_ascii() {
        let board = standard_board();
        let res = r#"
8|rnbqkbnr
7|pppppppp
6|........
5|........
4|........
3|........
2|PPPPPPPP
1|RNBQKBNR
-+--------
 |abcdefgh
"#;
        assert_eq!(
            board.pretty(PrettyStyle::Ascii).to_string().trim_end(),
            res.trim()
        );
    }
}
