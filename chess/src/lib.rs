//! # regicide
//!
//! A two-player chess rules engine where the game is won by capturing the
//! king. The crate validates piece movement, enforces alternating turns, and
//! tracks the game lifecycle; there is deliberately no check or checkmate
//! detection, castling, en passant, or promotion.
//!
//! # Example
//!
//! ```
//! use regicide::{Game, StandardLayout, Color};
//!
//! let mut game = Game::new();
//! game.start(&StandardLayout).unwrap();
//! game.make_move_line("e2 e4").unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! ```

pub mod between;
pub mod board;
pub mod game;
pub mod geometry;
pub mod layout;
pub mod moves;
pub mod rules;
pub mod types;

pub use board::{Board, PrettyStyle};
pub use game::{Game, GameError, GameState, Scores};
pub use layout::{EmptyLayout, Layout, StandardLayout};
pub use moves::Move;
pub use rules::MoveError;
pub use types::{Cell, Color, Coord, File, Piece, Rank};
