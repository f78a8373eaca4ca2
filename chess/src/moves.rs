//! Move commands and their textual form
//!
//! A move command is a pair of coordinates, written as two whitespace
//! separated tokens such as `"d2 d4"`. Parsing stops well before any
//! movement logic: a malformed coordinate never reaches the board.

use crate::types::{Coord, CoordParseError};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a move command
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("missing source coordinate")]
    MissingSrc,
    #[error("missing destination coordinate")]
    MissingDst,
    #[error("extra token after destination")]
    ExtraToken,
    #[error("bad source: {0}")]
    BadSrc(CoordParseError),
    #[error("bad destination: {0}")]
    BadDst(CoordParseError),
}

/// A requested move: source and destination squares
///
/// A `Move` is just the request; whether it is legal is decided by the board
/// and the game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub src: Coord,
    pub dst: Coord,
}

impl Move {
    pub const fn new(src: Coord, dst: Coord) -> Move {
        Move { src, dst }
    }

    /// Parses a move from its two coordinate tokens
    ///
    /// Tokens at positions 0 and 1 are the source and destination; any
    /// other shape fails.
    pub fn from_tokens(tokens: &[&str]) -> Result<Move, ParseError> {
        let mut iter = tokens.iter();
        let src = iter.next().ok_or(ParseError::MissingSrc)?;
        let dst = iter.next().ok_or(ParseError::MissingDst)?;
        if iter.next().is_some() {
            return Err(ParseError::ExtraToken);
        }
        Ok(Move {
            src: Coord::from_str(src).map_err(ParseError::BadSrc)?,
            dst: Coord::from_str(dst).map_err(ParseError::BadDst)?,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.src, self.dst)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        let tokens: Vec<&str> = s.split_ascii_whitespace().collect();
        Move::from_tokens(&tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{File, Rank};

    #[test]
    fn test_parse() {
        let mv = Move::from_str("d2 d4").unwrap();
        assert_eq!(mv.src, Coord::from_parts(File::D, Rank::R2));
        assert_eq!(mv.dst, Coord::from_parts(File::D, Rank::R4));
        assert_eq!(mv.to_string(), "d2 d4");

        assert_eq!(Move::from_str("  b1   c3 ").unwrap().to_string(), "b1 c3");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Move::from_str(""), Err(ParseError::MissingSrc));
        assert_eq!(Move::from_str("d2"), Err(ParseError::MissingDst));
        assert_eq!(Move::from_str("d2 d4 d5"), Err(ParseError::ExtraToken));
        assert_eq!(
            Move::from_str("z2 d4"),
            Err(ParseError::BadSrc(CoordParseError::UnexpectedFileChar('z')))
        );
        assert_eq!(
            Move::from_str("d2 d9"),
            Err(ParseError::BadDst(CoordParseError::UnexpectedRankChar('9')))
        );
        assert_eq!(
            Move::from_str("d2 d44"),
            Err(ParseError::BadDst(CoordParseError::BadLength))
        );
    }

    #[test]
    fn test_from_tokens() {
        let mv = Move::from_tokens(&["e2", "e4"]).unwrap();
        assert_eq!(mv.to_string(), "e2 e4");
        assert_eq!(Move::from_tokens(&["e2"]), Err(ParseError::MissingDst));
    }
}
