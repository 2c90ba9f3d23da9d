use crate::ai::eval;
use crate::board::{Board, Player};

/// Depth-limited minimax over the Black-positive static score, with
/// alpha-beta cutoffs.
///
/// The position is scored as-is when `depth` runs out or when `to_move`
/// has no legal reply; a stuck side is never passed over inside the
/// search, the line simply freezes there.
///
/// Cutoffs only skip work: for equal arguments the returned value matches
/// the exhaustive search.
pub fn minimax(
    board: &mut Board,
    to_move: Player,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    if depth == 0 {
        return eval::score(board);
    }

    let moves = board.valid_moves(to_move);
    if moves.is_empty() {
        return eval::score(board);
    }

    let opponent = to_move.opposite();

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let flips = board.place(mv.pos, to_move);
            let value = minimax(board, opponent, depth - 1, alpha, beta, false);
            board.undo(mv.pos, flips, to_move);

            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let flips = board.place(mv.pos, to_move);
            let value = minimax(board, opponent, depth - 1, alpha, beta, true);
            board.undo(mv.pos, flips, to_move);

            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Reference minimax without cutoffs, kept test-only so pruning can be
/// checked against it.
#[cfg(test)]
pub(crate) fn minimax_exhaustive(
    board: &mut Board,
    to_move: Player,
    depth: u8,
    maximizing: bool,
) -> i32 {
    if depth == 0 {
        return eval::score(board);
    }

    let moves = board.valid_moves(to_move);
    if moves.is_empty() {
        return eval::score(board);
    }

    let opponent = to_move.opposite();
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let flips = board.place(mv.pos, to_move);
        let value = minimax_exhaustive(board, opponent, depth - 1, !maximizing);
        board.undo(mv.pos, flips, to_move);

        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

/// Plays `plies` moves from the opening, each side always taking its first
/// legal move, and returns the position with the side then to move.
#[cfg(test)]
pub(crate) fn play_opening(plies: usize) -> (Board, Player) {
    let mut board = Board::new();
    let mut to_move = Player::Black;

    for _ in 0..plies {
        if let Some(mv) = board.valid_moves(to_move).first() {
            let _ = board.place(mv.pos, to_move);
        }
        to_move = to_move.opposite();
    }

    (board, to_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_returns_the_static_score() {
        for plies in [0, 3, 6] {
            let (board, to_move) = play_opening(plies);
            let expected = eval::score(&board);

            for maximizing in [true, false] {
                let mut scratch = board;
                let value = minimax(&mut scratch, to_move, 0, i32::MIN, i32::MAX, maximizing);
                assert_eq!(value, expected);
                assert_eq!(scratch, board);
            }
        }
    }

    #[test]
    fn stuck_side_freezes_the_line_at_the_static_score() {
        // Lone black disc in a corner and no white discs anywhere: neither
        // side can capture, so any depth collapses to the static score.
        let board = Board::from_bitboards(1, 0);

        for to_move in [Player::Black, Player::White] {
            let mut scratch = board;
            let value = minimax(&mut scratch, to_move, 3, i32::MIN, i32::MAX, true);
            assert_eq!(value, 120);
        }
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        let (board, to_move) = play_opening(4);
        let mut scratch = board;

        let _ = minimax(&mut scratch, to_move, 3, i32::MIN, i32::MAX, true);

        assert_eq!(scratch, board);
    }

    #[test]
    fn pruning_matches_the_exhaustive_search() {
        for plies in [2, 4, 7, 10] {
            let (board, to_move) = play_opening(plies);

            for depth in 1..=3 {
                for maximizing in [true, false] {
                    let mut pruned = board;
                    let mut full = board;

                    let got = minimax(&mut pruned, to_move, depth, i32::MIN, i32::MAX, maximizing);
                    let want = minimax_exhaustive(&mut full, to_move, depth, maximizing);

                    assert_eq!(got, want);
                }
            }
        }
    }

    #[test]
    fn one_reply_line_evaluates_to_the_forced_leaf() {
        // Black on C1, White on B1: Black's only capture is the corner A1.
        let board = Board::from_bitboards(bit_at(2), bit_at(1));

        let mut scratch = board;
        let value = minimax(&mut scratch, Player::Black, 1, i32::MIN, i32::MAX, true);

        // After A1 the first row holds three black discs: 120 - 20 + 20.
        assert_eq!(value, 120);
        assert_eq!(scratch, board);
    }

    fn bit_at(pos: usize) -> u64 {
        1u64 << pos
    }
}
