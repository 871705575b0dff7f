pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::{GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE, SetupInput};
pub use error::{OthelloError, Result};
pub use game::GameState;
pub use types::{
    Color, DIRECTIONS, Direction, GameResult, MoveSet, Outcome, Position, Snapshot, Tile,
    WinCondition,
};
