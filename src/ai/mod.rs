pub mod commentary;
pub mod eval;
pub mod search;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::ai::commentary::SearchOutcome;
use crate::board::{Board, Move, Player, square_label};
use crate::difficulty::Difficulty;
use crate::game::{MoveSelector, Selection};

/// A difficulty-graded opponent. Owns its randomness source so games can
/// be replayed under test.
pub struct AiOpponent {
    rng: Box<dyn RngCore + Send + Sync>,
}

impl AiOpponent {
    pub fn new() -> Self {
        Self::with_rng(Box::new(StdRng::from_entropy()))
    }

    /// Deterministic construction from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Box::new(StdRng::seed_from_u64(seed)))
    }

    pub fn with_rng(rng: Box<dyn RngCore + Send + Sync>) -> Self {
        Self { rng }
    }

    /// Uniform pick over the candidates.
    fn pick_easy(&mut self, moves: &[Move]) -> Selection {
        let mv = moves[self.rng.gen_range(0..moves.len())];
        Selection {
            mv,
            commentary: commentary::easy(mv),
        }
    }
}

impl Default for AiOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for AiOpponent {
    fn select_move(
        &mut self,
        board: &Board,
        player: Player,
        tier: Difficulty,
        depth: u8,
    ) -> Option<Selection> {
        let moves = board.valid_moves(player);
        if moves.is_empty() {
            return None;
        }

        let selection = match tier {
            Difficulty::Easy => self.pick_easy(&moves),
            Difficulty::Normal => pick_normal(&moves),
            Difficulty::Hard => pick_hard(board, player, depth, &moves),
        };
        debug!(
            "{:?} tier picked {} out of {} candidates",
            tier,
            square_label(selection.mv.pos),
            moves.len()
        );

        Some(selection)
    }
}

/// Greedy pick: square weight plus flipped-disc count, first maximum wins.
fn pick_normal(moves: &[Move]) -> Selection {
    let mut best = moves[0];
    let mut best_score = i32::MIN;

    for &mv in moves {
        let score = eval::weight_at(mv.pos) + mv.flip_count() as i32;
        if score > best_score {
            best_score = score;
            best = mv;
        }
    }

    Selection {
        mv: best,
        commentary: commentary::normal(best),
    }
}

/// Searched pick: each candidate is applied and the reply position is
/// searched to `depth`. The reply search always runs as the minimizing
/// side over the Black-positive score, whichever color is choosing, so
/// the chosen move is the Black-positive maximum. First maximum wins.
fn pick_hard(board: &Board, player: Player, depth: u8, moves: &[Move]) -> Selection {
    let opponent = player.opposite();
    let mut scratch = *board;
    let mut best = moves[0];
    let mut best_score = i32::MIN;

    for &mv in moves {
        let flips = scratch.place(mv.pos, player);
        let score = search::minimax(&mut scratch, opponent, depth, i32::MIN, i32::MAX, false);
        scratch.undo(mv.pos, flips, player);

        if score > best_score {
            best_score = score;
            best = mv;
        }
    }

    let outcome = SearchOutcome {
        chosen: best,
        chosen_score: best_score,
        alternative_worst_score: if commentary::is_corner(best.pos) {
            None
        } else {
            worst_alternative(&mut scratch, player, depth, moves, best)
        },
    };

    Selection {
        mv: best,
        commentary: commentary::hard(&outcome),
    }
}

/// Weakest look-ahead score among the candidates that were not chosen,
/// under the same search convention as the pick itself.
fn worst_alternative(
    board: &mut Board,
    player: Player,
    depth: u8,
    moves: &[Move],
    chosen: Move,
) -> Option<i32> {
    let opponent = player.opposite();
    let mut worst: Option<i32> = None;

    for &mv in moves {
        if mv.pos == chosen.pos {
            continue;
        }
        let flips = board.place(mv.pos, player);
        let score = search::minimax(board, opponent, depth, i32::MIN, i32::MAX, false);
        board.undo(mv.pos, flips, player);

        worst = Some(worst.map_or(score, |w| w.min(score)));
    }

    worst
}
