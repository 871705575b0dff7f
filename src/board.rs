use std::fmt;

use crate::config::check_dimensions;
use crate::error::Result;
use crate::types::{Direction, Position, Tile};

/// Raised internally when a step leaves the grid. The legal-move scan turns
/// it into "no capture in this direction"; it never reaches callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OutsideBoard;

/// Rectangular Othello grid stored column by column.
/// Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: u8,
    rows: u8,
    tiles: Vec<Tile>,
}

impl Board {
    /// Creates an all-empty board. Each dimension must lie in `4..=16`.
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        check_dimensions(columns, rows)?;
        Ok(Self {
            columns: columns as u8,
            rows: rows as u8,
            tiles: vec![Tile::Empty; columns * rows],
        })
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn contains(&self, pos: Position) -> bool {
        (1..=self.columns).contains(&pos.column) && (1..=self.rows).contains(&pos.row)
    }

    /// Returns `None` when `pos` is off the board.
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.index(pos).map(|idx| self.tiles[idx])
    }

    pub(crate) fn set(&mut self, pos: Position, tile: Tile) {
        if let Some(idx) = self.index(pos) {
            self.tiles[idx] = tile;
        }
    }

    /// Every position, column by column, top to bottom.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (1..=self.columns)
            .flat_map(move |column| (1..=self.rows).map(move |row| Position::new(column, row)))
    }

    pub(crate) fn step(&self, from: Position, direction: Direction) -> std::result::Result<Position, OutsideBoard> {
        let (dc, dr) = direction.offset();
        let column = i16::from(from.column) + i16::from(dc);
        let row = i16::from(from.row) + i16::from(dr);

        if column < 1 || row < 1 || column > i16::from(self.columns) || row > i16::from(self.rows) {
            return Err(OutsideBoard);
        }
        Ok(Position::new(column as u8, row as u8))
    }

    /// Positions walked from `from` (exclusive) along `direction` until the edge.
    pub(crate) fn ray(&self, from: Position, direction: Direction) -> impl Iterator<Item = Position> + '_ {
        std::iter::successors(self.step(from, direction).ok(), move |&pos| {
            self.step(pos, direction).ok()
        })
    }

    /// Returns `(white_count, black_count)`.
    pub fn count(&self) -> (u16, u16) {
        self.tiles.iter().fold((0, 0), |(white, black), tile| match tile {
            Tile::White => (white + 1, black),
            Tile::Black => (white, black + 1),
            Tile::Empty => (white, black),
        })
    }

    pub fn empty_count(&self) -> u16 {
        self.tiles.iter().filter(|tile| tile.is_empty()).count() as u16
    }

    /// Row-major tile codes (see [`Tile::code`]).
    pub fn to_array(&self) -> Vec<u8> {
        (1..=self.rows)
            .flat_map(|row| {
                (1..=self.columns).map(move |column| Position::new(column, row))
            })
            .map(|pos| self.tile(pos).unwrap_or_default().code())
            .collect()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.column as usize - 1) * self.rows as usize + (pos.row as usize - 1))
    }

    /// Builds a board from text rows of `W`, `B` and `-`. Spaces are ignored.
    #[cfg(test)]
    pub(crate) fn from_rows(lines: &[&str]) -> Self {
        let grid: Vec<Vec<Tile>> = lines
            .iter()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        'W' => Tile::White,
                        'B' => Tile::Black,
                        _ => Tile::Empty,
                    })
                    .collect()
            })
            .collect();

        let rows = grid.len() as u8;
        let columns = grid[0].len() as u8;
        let mut board = Self {
            columns,
            rows,
            tiles: vec![Tile::Empty; columns as usize * rows as usize],
        };
        for (r, line) in grid.iter().enumerate() {
            for (c, &tile) in line.iter().enumerate() {
                board.set(Position::new(c as u8 + 1, r as u8 + 1), tile);
            }
        }
        board
    }
}

impl fmt::Display for Board {
    /// Column numbers on top, then one line per row prefixed by its number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for column in 1..=self.columns {
            write!(f, " {column}")?;
        }
        writeln!(f)?;

        for row in 1..=self.rows {
            write!(f, "{row}")?;
            for column in 1..=self.columns {
                let tile = self.tile(Position::new(column, row)).unwrap_or_default();
                write!(f, " {}", tile.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
