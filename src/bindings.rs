use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::board::Player;
use crate::difficulty::{Difficulty, DifficultyConfig};
use crate::game::{GameInstance, GameMode};

/// One Othello game owned by the embedding page. The page constructs as
/// many instances as it likes and drives each through the methods below;
/// nothing is global.
#[wasm_bindgen]
pub struct OthelloGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl OthelloGame {
    /// `mode` is "pvp" or "pve". `difficulty` is "easy", "normal" or
    /// "hard"; PvE only, defaulting to normal. `config` may override the
    /// difficulty table with a plain `{easy: {depth, delay_ms}, ...}`
    /// object; pass `undefined` to keep the stock values.
    #[wasm_bindgen(constructor)]
    pub fn new(
        mode: &str,
        difficulty: Option<String>,
        config: JsValue,
    ) -> Result<OthelloGame, JsValue> {
        let mode = GameMode::parse(mode).ok_or_else(|| js_error("unknown game mode"))?;

        let difficulty = match difficulty.as_deref() {
            None => None,
            Some(name) => {
                Some(Difficulty::parse(name).ok_or_else(|| js_error("unknown difficulty"))?)
            }
        };

        let config = if config.is_undefined() || config.is_null() {
            DifficultyConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|err| js_error(&err.to_string()))?
        };

        Ok(Self {
            inner: GameInstance::with_config(mode, difficulty, config),
        })
    }

    /// Applies a human move for the side to move.
    pub fn place(&mut self, row: u8, col: u8) -> Result<(), JsValue> {
        self.inner
            .place(row, col)
            .map_err(|err| js_error(&err.to_string()))
    }

    /// Runs one AI turn and returns `{row, col, commentary, elapsed_ms}`.
    pub fn ai_move(&mut self) -> Result<JsValue, JsValue> {
        let report = self
            .inner
            .do_ai_move()
            .map_err(|err| js_error(&err.to_string()))?;
        to_js(&report)
    }

    /// Concedes for `player` (1=black, 2=white) and returns the result.
    pub fn resign(&mut self, player: u8) -> Result<JsValue, JsValue> {
        let player = Player::from_u8(player).ok_or_else(|| js_error("unknown player code"))?;
        let result = self
            .inner
            .resign(player)
            .map_err(|err| js_error(&err.to_string()))?;
        to_js(&result)
    }

    /// Starts a fresh game with the same mode, tier and config.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.to_game_state())
    }

    /// Final result; only available once the game is over.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        if !self.inner.is_game_over {
            return Err(js_error("game is not over yet"));
        }
        to_js(&self.inner.to_game_result())
    }

    /// Legal moves for the side to move as `{row, col}` pairs.
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.get_legal_moves())
    }

    /// Every win-rate sample of the current game, oldest first.
    pub fn win_rate_history(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.win_rate_history())
    }

    /// Suggested thinking-animation time for the active tier.
    pub fn ai_delay_ms(&self) -> u32 {
        self.inner.ai_delay_ms()
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| js_error(&err.to_string()))
}

fn js_error(message: &str) -> JsValue {
    JsValue::from_str(message)
}
