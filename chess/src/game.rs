//! Game state machine: turns, lifecycle and the king-capture win rule
//!
//! A game starts in `Ready`, runs after [`Game::start`], and finishes the
//! moment a king is captured. There is no check or checkmate detection: the
//! winner is simply the side that takes the opposing king.

use crate::board::Board;
use crate::layout::Layout;
use crate::moves::{self, Move};
use crate::rules::MoveError;
use crate::types::{Cell, Color, Coord, Piece};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error reported by [`Game`] operations
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum GameError {
    /// `start` was called on a game that already left the `Ready` state
    #[error("game already started")]
    AlreadyStarted,
    /// A move was requested while the game is not running
    #[error("game not started")]
    NotStarted,
    /// The winner was queried before the game finished
    #[error("game not finished")]
    NotFinished,
    /// The source square holds a piece of the player not on turn
    #[error("piece at {at} belongs to {color:?}, who is not on turn")]
    WrongTurn { at: Coord, color: Color },
    /// The move is illegal for the piece or the board
    #[error("illegal move: {0}")]
    Move(#[from] MoveError),
    /// The move command could not be parsed
    #[error("bad move command: {0}")]
    Parse(#[from] moves::ParseError),
}

/// Lifecycle state of a game
///
/// Transitions are monotonic: `Ready -> Running -> Finished`, and nothing
/// ever leaves `Finished`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameState {
    Ready,
    Running,
    Finished,
}

/// Per-color material score snapshot
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Scores {
    pub white: f64,
    pub black: f64,
}

impl Scores {
    pub fn get(&self, color: Color) -> f64 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "white: {}, black: {}", self.white, self.black)
    }
}

/// A two-player game of chess won by capturing the king
///
/// The game owns its [`Board`], enforces alternating turns, and tracks the
/// lifecycle state. All failures are reported to the caller as [`GameError`]
/// values and leave the game unmodified.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    state: GameState,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// Returns a new game in the `Ready` state, with White to move first
    pub fn new() -> Game {
        Game {
            board: Board::new(),
            turn: Color::White,
            state: GameState::Ready,
        }
    }

    /// Populates the board from `layout` and starts the game
    pub fn start(&mut self, layout: &dyn Layout) -> Result<(), GameError> {
        if self.state != GameState::Ready {
            return Err(GameError::AlreadyStarted);
        }
        self.board.initialize(layout.generate());
        self.state = GameState::Running;
        Ok(())
    }

    /// Validates and applies a move for the player on turn
    ///
    /// Returns the captured cell, [`Cell::EMPTY`] for a quiet move. When the
    /// captured piece is a king, the game transitions to `Finished` and the
    /// turn stays with the mover, who is then reported by [`Game::winner`].
    /// Otherwise the turn flips to the opponent.
    pub fn make_move(&mut self, mv: Move) -> Result<Cell, GameError> {
        if self.state != GameState::Running {
            return Err(GameError::NotStarted);
        }
        // An empty source is not a turn violation; the board reports it
        // as an illegal move below.
        if self.board.get(mv.src).color() == Some(self.turn.inv()) {
            return Err(GameError::WrongTurn {
                at: mv.src,
                color: self.turn.inv(),
            });
        }
        let captured = self.board.make_move(mv.src, mv.dst)?;
        if captured.piece() == Some(Piece::King) {
            self.state = GameState::Finished;
        } else {
            self.turn = self.turn.inv();
        }
        Ok(captured)
    }

    /// Parses a move command line and applies it
    ///
    /// The line consists of two coordinate tokens, e.g. `"d2 d4"`.
    pub fn make_move_line(&mut self, line: &str) -> Result<Cell, GameError> {
        let mv = Move::from_str(line)?;
        self.make_move(mv)
    }

    /// Current material score of both players
    ///
    /// Valid in any state; reflects the current board contents.
    pub fn status(&self) -> Scores {
        Scores {
            white: self.board.score(Color::White),
            black: self.board.score(Color::Black),
        }
    }

    /// The color that captured the opposing king
    ///
    /// Fails with [`GameError::NotFinished`] while the game is still going.
    pub fn winner(&self) -> Result<Color, GameError> {
        if self.state != GameState::Finished {
            return Err(GameError::NotFinished);
        }
        // The turn is not flipped on the terminal move, so it still names
        // the side that delivered the capture.
        Ok(self.turn)
    }

    pub fn is_finished(&self) -> bool {
        self.state == GameState::Finished
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The color currently permitted to move
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::Ready
    }
}
