use std::fmt;
use std::ops::Not;

use serde::{Deserialize, Serialize};

/// One of the two players, also the color of the tiles they own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Parses the setup token used by the setup dialog (`WHITE` / `BLACK`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "WHITE" => Some(Self::White),
            "BLACK" => Some(Self::Black),
            _ => None,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => f.write_str("White"),
            Self::Black => f.write_str("Black"),
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    White,
    Black,
}

impl Tile {
    /// Wire code used in [`Snapshot::board`]: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Black => 1,
            Self::White => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Empty => '-',
            Self::White => 'W',
            Self::Black => 'B',
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

impl From<Color> for Tile {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Self::White,
            Color::Black => Self::Black,
        }
    }
}

/// Whether the majority or the minority of tiles wins at game end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WinCondition {
    #[default]
    Most,
    Least,
}

impl WinCondition {
    /// Parses the setup token used by the setup dialog (`MOST` / `LEAST`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "MOST" => Some(Self::Most),
            "LEAST" => Some(Self::Least),
            _ => None,
        }
    }
}

/// Resolved result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    White,
    Black,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => f.write_str("White"),
            Self::Black => f.write_str("Black"),
            Self::Tie => f.write_str("Tie"),
        }
    }
}

/// A board coordinate, 1-based on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub column: u8,
    pub row: u8,
}

impl Position {
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}

impl From<(u8, u8)> for Position {
    fn from((column, row): (u8, u8)) -> Self {
        Self::new(column, row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// One of the eight compass directions a capture chain can run in.
/// Rows grow downwards, so `North` decreases the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Every direction, in the order the legal-move scan visits them.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    /// Unit vector as `(column delta, row delta)`.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }
}

/// One legal capture chain: placing at `target` flips every tile strictly
/// between it and `origin`, walking along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MoveSet {
    pub target: Position,
    pub origin: Position,
    pub direction: Direction,
}

/// Public game state handed to the front end after every state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub columns: u8,
    pub rows: u8,
    /// Row-major tile codes, see [`Tile::code`].
    pub board: Vec<u8>,
    pub turn: Color,
    pub white_count: u16,
    pub black_count: u16,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the player after the last move had no legal move and was skipped.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Tiles flipped by the last move. Empty for snapshots not produced by a move.
    pub flipped: Vec<Position>,
    /// Set only once the game is over.
    pub winner: Option<Outcome>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Outcome,
    pub white_count: u16,
    pub black_count: u16,
}
