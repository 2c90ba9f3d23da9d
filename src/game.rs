use log::{debug, info};
use thiserror::Error;
use web_time::Instant;

use crate::ai::{AiOpponent, eval, search};
use crate::board::{Board, Move, Player, square_label};
use crate::difficulty::{Difficulty, DifficultyConfig};
use crate::types::{AiMove, GameResult, GameState, Position, WinRateSample};

const BOARD_WIDTH: usize = 8;

/// Who controls each color. White is the engine's side in PvE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PvP,
    PvE,
}

impl GameMode {
    /// Parses the wire names used by the embedding page.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "pvp" => Some(Self::PvP),
            "pve" => Some(Self::PvE),
            _ => None,
        }
    }
}

/// Recoverable rule violations; none of them mutates game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error("it is not the human's turn")]
    NotHumanTurn,
    #[error("it is not the AI's turn")]
    NotAiTurn,
    #[error("this game has no AI side")]
    NoAi,
    #[error("row {row} col {col} is off the board")]
    OutOfRange { row: u8, col: u8 },
    #[error("no discs would flip at row {row} col {col}")]
    Rejected { row: u8, col: u8 },
    #[error("the AI has no legal moves")]
    NoLegalMoves,
    #[error("the AI could not select a move")]
    SelectionFailed,
    #[error("the AI selected an illegal move")]
    IllegalSelection,
}

/// A chosen move with the rationale shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub mv: Move,
    pub commentary: String,
}

/// Chooses the AI's move. Implementations see the live board read-only
/// and answer with a move plus one line of commentary.
pub trait MoveSelector: Send + Sync {
    fn select_move(
        &mut self,
        board: &Board,
        player: Player,
        tier: Difficulty,
        depth: u8,
    ) -> Option<Selection>;
}

pub struct GameInstance {
    board: Board,
    pub current_player: Player,
    mode: GameMode,
    difficulty: Option<Difficulty>,
    config: DifficultyConfig,
    pub is_game_over: bool,
    pub is_pass: bool,
    pub flipped: Vec<u8>,
    resigned_by: Option<Player>,
    win_rate_history: Vec<WinRateSample>,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    /// One fresh game. PvE defaults to Normal when no tier is given; PvP
    /// games carry no tier at all.
    pub fn new(mode: GameMode, difficulty: Option<Difficulty>) -> Self {
        Self::with_config(mode, difficulty, DifficultyConfig::default())
    }

    pub fn with_config(
        mode: GameMode,
        difficulty: Option<Difficulty>,
        config: DifficultyConfig,
    ) -> Self {
        Self::with_parts(mode, difficulty, config, Box::new(AiOpponent::new()))
    }

    /// Full injection seam: tests supply scripted selectors here.
    pub fn with_parts(
        mode: GameMode,
        difficulty: Option<Difficulty>,
        config: DifficultyConfig,
        selector: Box<dyn MoveSelector>,
    ) -> Self {
        let difficulty = match mode {
            GameMode::PvE => Some(difficulty.unwrap_or(Difficulty::Normal)),
            GameMode::PvP => None,
        };

        let mut game = Self {
            board: Board::new(),
            current_player: Player::Black,
            mode,
            difficulty,
            config,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
            resigned_by: None,
            win_rate_history: Vec::new(),
            selector,
        };
        game.push_win_rate_sample();
        game
    }

    /// Restores the opening position and history, keeping the mode, tier
    /// and config.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::Black;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
        self.resigned_by = None;
        self.win_rate_history.clear();
        self.push_win_rate_sample();
    }

    /// Applies a human move for the side to move.
    pub fn place(&mut self, row: u8, col: u8) -> Result<(), MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameOver);
        }
        if self.mode == GameMode::PvE && self.current_player == Player::White {
            return Err(MoveError::NotHumanTurn);
        }

        let pos = row_col_to_pos(row, col)?;
        let flips = self.board.flips_for(pos, self.current_player);
        if flips == 0 {
            return Err(MoveError::Rejected { row, col });
        }

        self.apply_move(Move { pos, flips });
        Ok(())
    }

    /// Runs one full AI turn: select, validate, apply. Returns what was
    /// played and why. The presentation delay is the host's concern, see
    /// `ai_delay_ms`.
    pub fn do_ai_move(&mut self) -> Result<AiMove, MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameOver);
        }
        if self.mode != GameMode::PvE {
            return Err(MoveError::NoAi);
        }
        if self.current_player != Player::White {
            return Err(MoveError::NotAiTurn);
        }
        if !self.board.has_legal_move(Player::White) {
            return Err(MoveError::NoLegalMoves);
        }

        let tier = self.difficulty.unwrap_or(Difficulty::Normal);
        let depth = self.config.profile(tier).depth;

        let started = Instant::now();
        let selection = self
            .selector
            .select_move(&self.board, Player::White, tier, depth)
            .ok_or(MoveError::SelectionFailed)?;
        let elapsed_ms = started.elapsed().as_millis() as u32;

        let mv = selection.mv;
        if mv.flips == 0 || self.board.flips_for(mv.pos, Player::White) != mv.flips {
            return Err(MoveError::IllegalSelection);
        }

        debug!("ai plays {} after {elapsed_ms}ms", square_label(mv.pos));
        self.apply_move(mv);

        Ok(AiMove {
            row: mv.row() as u8,
            col: mv.col() as u8,
            commentary: selection.commentary,
            elapsed_ms,
        })
    }

    /// The named player concedes and the opponent wins on the spot. Disc
    /// counts are reported as they stood.
    pub fn resign(&mut self, player: Player) -> Result<GameResult, MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameOver);
        }

        self.resigned_by = Some(player);
        self.is_game_over = true;
        info!("{player:?} resigned");

        Ok(self.to_game_result())
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.has_legal_move(self.current_player)
    }

    pub fn get_legal_moves(&self) -> Vec<Position> {
        self.board
            .valid_moves(self.current_player)
            .into_iter()
            .map(|mv| Position {
                row: mv.row() as u8,
                col: mv.col() as u8,
            })
            .collect()
    }

    /// Latest sample as a `(black, white)` percentage pair.
    pub fn win_rate(&self) -> (u8, u8) {
        self.win_rate_history
            .last()
            .map_or((50, 50), |sample| (sample.black, sample.white))
    }

    pub fn win_rate_history(&self) -> &[WinRateSample] {
        &self.win_rate_history
    }

    /// How long the host should pretend to think before showing the AI
    /// move. Zero without an AI side.
    pub fn ai_delay_ms(&self) -> u32 {
        self.difficulty
            .map_or(0, |tier| self.config.profile(tier).delay_ms)
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        let (black_win_rate, white_win_rate) = self.win_rate();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.as_u8(),
            black_count,
            white_count,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
            black_win_rate,
            white_win_rate,
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();

        if let Some(loser) = self.resigned_by {
            return GameResult {
                winner: loser.opposite().as_u8(),
                black_count,
                white_count,
                via_resignation: true,
            };
        }

        GameResult {
            winner: if black_count > white_count {
                Player::Black.as_u8()
            } else if white_count > black_count {
                Player::White.as_u8()
            } else {
                0
            },
            black_count,
            white_count,
            via_resignation: false,
        }
    }

    /// Places a pre-validated move, then resolves whose turn it is: the
    /// opponent if they can answer, the mover again when the opponent is
    /// stuck, nobody when both are.
    fn apply_move(&mut self, mv: Move) {
        let mover = self.current_player;
        self.board.place(mv.pos, mover);
        self.flipped = bitmask_to_indices(mv.flips);
        self.is_pass = false;

        let opponent = mover.opposite();
        if self.board.has_legal_move(opponent) {
            self.current_player = opponent;
        } else if self.board.has_legal_move(mover) {
            self.is_pass = true;
        } else {
            self.finish();
        }

        self.push_win_rate_sample();
    }

    fn finish(&mut self) {
        self.is_game_over = true;
        let (black, white) = self.board.count();
        info!("game over: black {black}, white {white}");
    }

    /// Search depth for win-rate sampling: the active tier's depth, or 1
    /// when no AI is present.
    fn eval_depth(&self) -> u8 {
        self.difficulty
            .map_or(1, |tier| self.config.profile(tier).depth)
    }

    /// Appends one sample for the position as it now stands, searched from
    /// the side to move and scored as Black's winning percentage.
    fn push_win_rate_sample(&mut self) {
        let to_move = self.current_player;
        let mut scratch = self.board;
        let score = search::minimax(
            &mut scratch,
            to_move,
            self.eval_depth(),
            i32::MIN,
            i32::MAX,
            to_move == Player::Black,
        );

        let black = eval::score_to_win_rate(score);
        self.win_rate_history.push(WinRateSample {
            turn: self.win_rate_history.len() as u32 + 1,
            black,
            white: 100 - black,
        });
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Player) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
        self.resigned_by = None;
    }
}

fn row_col_to_pos(row: u8, col: u8) -> Result<usize, MoveError> {
    if row >= BOARD_WIDTH as u8 || col >= BOARD_WIDTH as u8 {
        return Err(MoveError::OutOfRange { row, col });
    }
    Ok((row as usize) * BOARD_WIDTH + col as usize)
}

fn bitmask_to_indices(mask: u64) -> Vec<u8> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        let idx = bits.trailing_zeros() as u8;
        out.push(idx);
        bits &= bits - 1;
    }

    out
}
