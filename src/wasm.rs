//! WebAssembly surface for a browser front end.
//!
//! The front end collects setup values, forwards clicks as 1-based
//! `(column, row)` pairs and redraws from the returned snapshots. Engine
//! errors become `JsError`s carrying the error message.

use wasm_bindgen::prelude::*;

use crate::config::SetupInput;
use crate::game::GameState;
use crate::types::Position;

/// Installs the console logger and panic hook. `log_level` defaults to `info`.
#[wasm_bindgen]
pub fn init(log_level: Option<String>) -> bool {
    let level = log_level
        .as_deref()
        .and_then(|level| level.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info);
    install_console_logger(level)
}

#[cfg(target_arch = "wasm32")]
fn install_console_logger(level: log::Level) -> bool {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level).is_ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn install_console_logger(_level: log::Level) -> bool {
    false
}

#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// `setup` is an object with `columns`, `rows`, `first_player`,
    /// `win_condition` and `corner_tile`. The starting tiles are placed
    /// immediately.
    #[wasm_bindgen(constructor)]
    pub fn new(setup: JsValue) -> Result<WasmGame, JsError> {
        let input: SetupInput = serde_wasm_bindgen::from_value(setup)?;
        let mut state = GameState::from_setup(input)?;
        state.begin_game();
        Ok(Self { state })
    }

    /// Plays a move and returns the resulting snapshot.
    pub fn play(&mut self, column: u8, row: u8) -> Result<JsValue, JsError> {
        let snapshot = self.state.play(Position::new(column, row))?;
        Ok(serde_wasm_bindgen::to_value(&snapshot)?)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.state.snapshot())?)
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.state.legal_targets())?)
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Label for the turn indicator, `White` or `Black`.
    pub fn turn(&self) -> String {
        self.state.turn().to_string()
    }

    /// `White`, `Black` or `Tie` under the configured win condition.
    pub fn winner(&self) -> String {
        self.state.winner().to_string()
    }

    /// Plain-text board, one row per line.
    pub fn render(&self) -> String {
        self.state.board().to_string()
    }
}
