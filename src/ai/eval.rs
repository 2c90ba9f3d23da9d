use crate::board::{Board, Cell};

const BOARD_SIZE: usize = 8;
const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Positional weights in row-major order from the top-left corner.
/// Corners dominate, the squares touching a corner are liabilities, edges
/// are mildly valuable and the interior is close to neutral.
pub const WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

/// Weight of one square by board index.
pub fn weight_at(pos: usize) -> i32 {
    WEIGHTS[pos / BOARD_SIZE][pos % BOARD_SIZE]
}

/// Static positional score of a position, always from Black's point of
/// view: Black discs add their square weight, White discs subtract it.
/// Callers own the sign interpretation.
pub fn score(board: &Board) -> i32 {
    let mut total = 0;
    for pos in 0..BOARD_CELLS {
        match board.cell(pos) {
            Cell::Black => total += weight_at(pos),
            Cell::White => total -= weight_at(pos),
            Cell::Empty => {}
        }
    }
    total
}

/// Squashes a Black-positive score into Black's winning percentage with a
/// logistic curve. Zero maps to 50; the curve saturates at 0 and 100.
/// White's percentage is always the complement to 100.
pub fn score_to_win_rate(score: i32) -> u8 {
    let rate = 100.0 / (1.0 + (-f64::from(score) / 100.0).exp());
    rate.round() as u8
}
