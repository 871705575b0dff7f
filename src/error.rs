use thiserror::Error;

use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::types::Position;

/// Errors surfaced to callers of the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OthelloError {
    #[error(
        "board size {columns}x{rows} is invalid: columns and rows must be between {min} and {max}",
        min = MIN_BOARD_SIZE,
        max = MAX_BOARD_SIZE
    )]
    InvalidBoardSize { columns: usize, rows: usize },

    #[error("unrecognized first player {0:?} (expected WHITE or BLACK)")]
    InvalidPlayer(String),

    #[error("unrecognized win condition {0:?} (expected MOST or LEAST)")]
    InvalidWinCondition(String),

    #[error("unrecognized corner tile {0:?} (expected WHITE or BLACK)")]
    InvalidCornerTile(String),

    #[error("illegal move at {0}")]
    InvalidMove(Position),
}

pub type Result<T> = std::result::Result<T, OthelloError>;
