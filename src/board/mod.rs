//! The physical board and the die.

pub mod board;
pub mod die;

pub use board::{
    points_for_field, Board, FIELD_COUNT, RUINS_FIELD, SAFE_START_FIELD, WINNING_SCORE,
};
pub use die::{Die, DieFace};
