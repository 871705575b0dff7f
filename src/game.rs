use log::{debug, info, warn};

use crate::board::Board;
use crate::config::{GameConfig, SetupInput};
use crate::error::{OthelloError, Result};
use crate::types::{
    Color, DIRECTIONS, Direction, GameResult, MoveSet, Outcome, Position, Snapshot, Tile,
    WinCondition,
};

/// A single Othello game: board, whose turn it is, and the rules it was set up with.
///
/// Every operation runs to completion on the caller's value; independent games
/// share nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    win_condition: WinCondition,
    center_pair: (Color, Color),
    started: bool,
}

impl GameState {
    /// Validates `config` and creates a game with an empty board.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.columns, config.rows)?;

        Ok(Self {
            board,
            turn: config.first_player,
            win_condition: config.win_condition,
            center_pair: config.center_pair(),
            started: false,
        })
    }

    pub fn create(
        columns: usize,
        rows: usize,
        first_player: Color,
        win_condition: WinCondition,
        corner_tile: Color,
    ) -> Result<Self> {
        Self::new(GameConfig {
            columns,
            rows,
            first_player,
            win_condition,
            corner_tile,
        })
    }

    /// Parses raw setup values, then creates the game.
    pub fn from_setup(input: SetupInput) -> Result<Self> {
        Self::new(GameConfig::try_from(input)?)
    }

    /// Places the four starting tiles around the board center.
    /// Returns `false` (and changes nothing) if the game was already started.
    pub fn begin_game(&mut self) -> bool {
        if self.started {
            return false;
        }

        let (corner, adjacent) = self.center_pair;
        let Position { column, row } = self.center_anchor();
        self.board.set(Position::new(column, row), corner.into());
        self.board.set(Position::new(column, row + 1), adjacent.into());
        self.board.set(Position::new(column + 1, row), adjacent.into());
        self.board.set(Position::new(column + 1, row + 1), corner.into());
        self.started = true;

        debug!(
            "game started on {}x{} board, {} to move",
            self.board.columns(),
            self.board.rows(),
            self.turn
        );
        true
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn win_condition(&self) -> WinCondition {
        self.win_condition
    }

    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.board.tile(pos)
    }

    /// Every capture chain available to the player to move.
    /// A target may appear several times, once per direction it captures in.
    pub fn legal_moves(&self) -> Vec<MoveSet> {
        self.board
            .positions()
            .filter(|&pos| self.board.tile(pos) == Some(Tile::Empty))
            .flat_map(|target| {
                DIRECTIONS.into_iter().filter_map(move |direction| {
                    self.capture_origin(self.turn, target, direction)
                        .map(|origin| MoveSet {
                            target,
                            origin,
                            direction,
                        })
                })
            })
            .collect()
    }

    /// Distinct target cells of [`legal_moves`](Self::legal_moves), in scan order.
    pub fn legal_targets(&self) -> Vec<Position> {
        let mut targets: Vec<Position> = Vec::new();
        for move_set in self.legal_moves() {
            if targets.last() != Some(&move_set.target) {
                targets.push(move_set.target);
            }
        }
        targets
    }

    pub fn verify_move(&self, pos: Position) -> Result<()> {
        if self.move_sets_at(pos).is_empty() {
            return Err(OthelloError::InvalidMove(pos));
        }
        Ok(())
    }

    /// Places the current player's tile at `pos`, flips every captured chain
    /// and hands the turn to the opponent. Returns the flipped positions.
    ///
    /// The turn passes even if the opponent has no legal reply; follow up with
    /// [`can_current_player_move`](Self::can_current_player_move), or use
    /// [`play`](Self::play) which does both. Nothing changes on error.
    pub fn execute_move(&mut self, pos: Position) -> Result<Vec<Position>> {
        let chains = self.move_sets_at(pos);
        if chains.is_empty() {
            warn!("rejected move {pos} for {}", self.turn);
            return Err(OthelloError::InvalidMove(pos));
        }

        let mover = Tile::from(self.turn);
        let flipped: Vec<Position> = chains
            .iter()
            .flat_map(|chain| {
                self.board
                    .ray(chain.target, chain.direction)
                    .take_while(move |&cell| cell != chain.origin)
            })
            .collect();

        self.board.set(pos, mover);
        for &cell in &flipped {
            self.board.set(cell, mover);
        }

        debug!("{} played {pos}, flipped {}", self.turn, flipped.len());
        self.turn = !self.turn;
        Ok(flipped)
    }

    /// Side-effect-free check whether the player to move has a legal move.
    pub fn has_legal_move(&self) -> bool {
        self.has_legal_move_for(self.turn)
    }

    /// Returns `true` if the player to move has a legal move. Otherwise the
    /// turn is skipped to the opponent and `false` is returned.
    pub fn can_current_player_move(&mut self) -> bool {
        if self.has_legal_move() {
            return true;
        }

        info!("{} has no legal move, turn passes to {}", self.turn, !self.turn);
        self.turn = !self.turn;
        false
    }

    /// `true` when neither player has a legal move. Does not change the turn.
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move_for(self.turn) && !self.has_legal_move_for(!self.turn)
    }

    /// Returns `(white_count, black_count)`.
    pub fn score(&self) -> (u16, u16) {
        self.board.count()
    }

    /// Leader under the configured win condition. Equal counts are a tie.
    pub fn winner(&self) -> Outcome {
        let (white, black) = self.score();
        if white == black {
            return Outcome::Tie;
        }

        let white_ahead = match self.win_condition {
            WinCondition::Most => white > black,
            WinCondition::Least => white < black,
        };
        if white_ahead {
            Outcome::White
        } else {
            Outcome::Black
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (white_count, black_count) = self.score();
        GameResult {
            winner: self.winner(),
            white_count,
            black_count,
        }
    }

    /// Executes a move and then manages the turn: if the next player is
    /// stalled they are skipped, and if the mover is stalled as well the game
    /// is over. The returned snapshot describes the resulting state.
    pub fn play(&mut self, pos: Position) -> Result<Snapshot> {
        let flipped = self.execute_move(pos)?;
        let is_pass = !self.can_current_player_move();
        let mut snapshot = self.snapshot();
        snapshot.is_pass = is_pass;
        snapshot.flipped = flipped;

        if snapshot.is_game_over {
            let result = self.to_game_result();
            info!(
                "game over: {} (white {}, black {})",
                result.winner, result.white_count, result.black_count
            );
        }
        Ok(snapshot)
    }

    /// Current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let (white_count, black_count) = self.score();
        let is_game_over = self.started && self.is_game_over();
        Snapshot {
            columns: self.board.columns(),
            rows: self.board.rows(),
            board: self.board.to_array(),
            turn: self.turn,
            white_count,
            black_count,
            is_game_over,
            is_pass: false,
            flipped: Vec::new(),
            winner: is_game_over.then(|| self.winner()),
        }
    }

    fn center_anchor(&self) -> Position {
        Position::new(self.board.columns() / 2, self.board.rows() / 2)
    }

    fn move_sets_at(&self, pos: Position) -> Vec<MoveSet> {
        if self.board.tile(pos) != Some(Tile::Empty) {
            return Vec::new();
        }

        DIRECTIONS
            .into_iter()
            .filter_map(|direction| {
                self.capture_origin(self.turn, pos, direction)
                    .map(|origin| MoveSet {
                        target: pos,
                        origin,
                        direction,
                    })
            })
            .collect()
    }

    fn has_legal_move_for(&self, player: Color) -> bool {
        self.board.positions().any(|pos| {
            self.board.tile(pos) == Some(Tile::Empty)
                && DIRECTIONS
                    .into_iter()
                    .any(|direction| self.capture_origin(player, pos, direction).is_some())
        })
    }

    /// Walks from `target` over a non-empty run of opponent tiles. Returns the
    /// `player` tile closing the run, or `None` if the run hits an empty cell,
    /// the edge, or has length zero.
    fn capture_origin(&self, player: Color, target: Position, direction: Direction) -> Option<Position> {
        let mine = Tile::from(player);
        let mut run = 0usize;

        for cell in self.board.ray(target, direction) {
            match self.board.tile(cell)? {
                Tile::Empty => return None,
                tile if tile == mine => return (run > 0).then_some(cell),
                _ => run += 1,
            }
        }
        None
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Color) {
        self.board = board;
        self.turn = turn;
        self.started = true;
    }
}
