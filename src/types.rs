use serde::Serialize;

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the last move sent the turn straight back because the
    ///   opponent had no reply.
    /// - `false` after every ordinary move.
    pub is_pass: bool,
    /// Contract:
    /// - Flipped positions (0..=63) of the last applied move.
    /// - Empty before the first move of a game.
    pub flipped: Vec<u8>,
    /// Black's percentage from the latest win-rate sample.
    pub black_win_rate: u8,
    /// Always `100 - black_win_rate`.
    pub white_win_rate: u8,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 0=draw, 1=black, 2=white.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
    /// Contract: counts above are the board as it stood; a resignation
    /// does not award discs.
    pub via_resignation: bool,
}

/// One point of the win-rate graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinRateSample {
    /// 1-based and strictly increasing within a game.
    pub turn: u32,
    pub black: u8,
    pub white: u8,
}

/// What the AI just played, returned from the AI-turn command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiMove {
    pub row: u8,
    pub col: u8,
    pub commentary: String,
    /// Time the selection took; the presentation delay is separate and
    /// advisory.
    pub elapsed_ms: u32,
}
