//! Re-exports of the base direction and distance helpers

pub use regicide_base::geometry::{
    back_rank, file_distance, pawn_advance, pawn_home_rank, rank_distance, Direction,
    KNIGHT_DELTAS,
};
