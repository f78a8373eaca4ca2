//! Re-exports of the base geometry value types

pub use regicide_base::types::{
    Cell, CellParseError, Color, ColorParseError, Coord, CoordParseError, File, Piece, Rank,
};
