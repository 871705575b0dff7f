//! Game setup: the validated [`GameConfig`] and the raw [`SetupInput`] a
//! setup form hands over before validation.

use serde::{Deserialize, Serialize};

use crate::error::{OthelloError, Result};
use crate::types::{Color, WinCondition};

pub const MIN_BOARD_SIZE: usize = 4;
pub const MAX_BOARD_SIZE: usize = 16;

/// Typed game settings. Only the board dimensions can still be out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    pub first_player: Color,
    pub win_condition: WinCondition,
    /// Color of the top-left tile of the starting 2x2 block.
    pub corner_tile: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: 8,
            rows: 8,
            first_player: Color::Black,
            win_condition: WinCondition::Most,
            corner_tile: Color::White,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.columns, self.rows)
    }

    /// `(top-left, adjacent)` colors of the starting block.
    pub fn center_pair(&self) -> (Color, Color) {
        (self.corner_tile, self.corner_tile.opponent())
    }
}

/// Each dimension is checked independently; evenness is not required.
pub(crate) fn check_dimensions(columns: usize, rows: usize) -> Result<()> {
    let range = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
    if range.contains(&columns) && range.contains(&rows) {
        Ok(())
    } else {
        Err(OthelloError::InvalidBoardSize { columns, rows })
    }
}

/// Setup values exactly as a form collects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupInput {
    pub columns: usize,
    pub rows: usize,
    pub first_player: String,
    pub win_condition: String,
    pub corner_tile: String,
}

impl TryFrom<SetupInput> for GameConfig {
    type Error = OthelloError;

    fn try_from(input: SetupInput) -> Result<Self> {
        check_dimensions(input.columns, input.rows)?;

        let first_player = Color::from_token(&input.first_player)
            .ok_or(OthelloError::InvalidPlayer(input.first_player))?;
        let win_condition = WinCondition::from_token(&input.win_condition)
            .ok_or(OthelloError::InvalidWinCondition(input.win_condition))?;
        let corner_tile = Color::from_token(&input.corner_tile)
            .ok_or(OthelloError::InvalidCornerTile(input.corner_tile))?;

        Ok(Self {
            columns: input.columns,
            rows: input.rows,
            first_player,
            win_condition,
            corner_tile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(columns: usize, rows: usize, player: &str, win: &str, corner: &str) -> SetupInput {
        SetupInput {
            columns,
            rows,
            first_player: player.to_string(),
            win_condition: win.to_string(),
            corner_tile: corner.to_string(),
        }
    }

    #[test]
    fn parses_dialog_tokens() {
        let config = GameConfig::try_from(input(6, 10, "WHITE", "LEAST", "BLACK")).unwrap();

        assert_eq!(config.columns, 6);
        assert_eq!(config.rows, 10);
        assert_eq!(config.first_player, Color::White);
        assert_eq!(config.win_condition, WinCondition::Least);
        assert_eq!(config.center_pair(), (Color::Black, Color::White));
    }

    #[test]
    fn rejects_each_bad_field_with_its_own_error() {
        assert_eq!(
            GameConfig::try_from(input(3, 8, "WHITE", "MOST", "WHITE")).unwrap_err(),
            OthelloError::InvalidBoardSize { columns: 3, rows: 8 }
        );
        assert_eq!(
            GameConfig::try_from(input(8, 8, "GREEN", "MOST", "WHITE")).unwrap_err(),
            OthelloError::InvalidPlayer("GREEN".to_string())
        );
        assert_eq!(
            GameConfig::try_from(input(8, 8, "WHITE", "MAYBE", "WHITE")).unwrap_err(),
            OthelloError::InvalidWinCondition("MAYBE".to_string())
        );
        assert_eq!(
            GameConfig::try_from(input(8, 8, "WHITE", "MOST", "")).unwrap_err(),
            OthelloError::InvalidCornerTile(String::new())
        );
    }

    #[test]
    fn size_is_checked_before_enums() {
        let err = GameConfig::try_from(input(17, 8, "GREEN", "MAYBE", "RED")).unwrap_err();
        assert!(matches!(err, OthelloError::InvalidBoardSize { .. }));
    }

    #[test]
    fn dimension_bounds_are_inclusive_and_odd_sizes_pass() {
        assert!(check_dimensions(4, 16).is_ok());
        assert!(check_dimensions(5, 7).is_ok());
        assert!(check_dimensions(16, 17).is_err());
        assert!(check_dimensions(0, 8).is_err());
        assert!(GameConfig::default().validate().is_ok());
    }
}
