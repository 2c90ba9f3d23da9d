use crate::ai::eval;
use crate::board::{Move, square_label};

/// Only corner squares clear this weight bar.
const CORNER_WEIGHT_FLOOR: i32 = 100;
/// Margin over the weakest alternative that makes a move "clearly best".
const CLEAR_MARGIN: i32 = 50;

/// What the deepest tier learned about its pick, kept just long enough to
/// phrase a rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub chosen: Move,
    pub chosen_score: i32,
    /// Lowest look-ahead score among the moves not chosen; `None` when the
    /// chosen move was the only candidate or a corner was taken.
    pub alternative_worst_score: Option<i32>,
}

pub fn is_corner(pos: usize) -> bool {
    eval::weight_at(pos) > CORNER_WEIGHT_FLOOR
}

/// One line for a random pick.
pub fn easy(mv: Move) -> String {
    format!("Hmm... I just felt like playing {}.", square_label(mv.pos))
}

/// One line for a greedy pick; corners get their own phrasing.
pub fn normal(mv: Move) -> String {
    let label = square_label(mv.pos);
    if is_corner(mv.pos) {
        return format!("{label} is a corner, a square that decides the game.");
    }

    let count = mv.flip_count();
    let discs = if count == 1 { "disc" } else { "discs" };
    format!("I figured placing at {label} to flip {count} {discs} was the best trade.")
}

/// One line for a searched pick, graded by how decisively it beat the
/// other candidates.
pub fn hard(outcome: &SearchOutcome) -> String {
    let label = square_label(outcome.chosen.pos);
    if is_corner(outcome.chosen.pos) {
        return format!(
            "The key to victory: I took the corner at {label}! Discs there can never be flipped."
        );
    }

    if let Some(worst) = outcome.alternative_worst_score
        && outcome.chosen_score > worst + CLEAR_MARGIN
    {
        return format!(
            "{label} is the best move available right now. Anything else would have hurt me in the long run."
        );
    }

    format!("I felt it was important to take the initiative by playing {label}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_at(pos: usize) -> Move {
        Move { pos, flips: 1 << 10 }
    }

    #[test]
    fn corners_are_recognized_by_weight() {
        assert!(is_corner(0));
        assert!(is_corner(63));
        assert!(!is_corner(1));
        assert!(!is_corner(27));
    }

    #[test]
    fn easy_line_names_the_square() {
        assert_eq!(
            easy(move_at(19)),
            "Hmm... I just felt like playing D3."
        );
    }

    #[test]
    fn normal_line_counts_flips_and_honors_corners() {
        let single = Move { pos: 19, flips: 1 << 27 };
        assert_eq!(
            normal(single),
            "I figured placing at D3 to flip 1 disc was the best trade."
        );

        let double = Move { pos: 19, flips: (1 << 27) | (1 << 28) };
        assert_eq!(
            normal(double),
            "I figured placing at D3 to flip 2 discs was the best trade."
        );

        assert_eq!(
            normal(move_at(56)),
            "A8 is a corner, a square that decides the game."
        );
    }

    #[test]
    fn hard_line_grades_the_margin() {
        let clearly_best = SearchOutcome {
            chosen: move_at(19),
            chosen_score: 40,
            alternative_worst_score: Some(-11),
        };
        assert!(hard(&clearly_best).contains("best move available"));

        // A margin of exactly 50 is not enough.
        let on_the_line = SearchOutcome {
            chosen: move_at(19),
            chosen_score: 39,
            alternative_worst_score: Some(-11),
        };
        assert!(hard(&on_the_line).contains("initiative"));

        let only_candidate = SearchOutcome {
            chosen: move_at(19),
            chosen_score: 40,
            alternative_worst_score: None,
        };
        assert!(hard(&only_candidate).contains("initiative"));

        let corner = SearchOutcome {
            chosen: move_at(7),
            chosen_score: 0,
            alternative_worst_score: None,
        };
        assert!(hard(&corner).contains("corner at H1"));
    }
}
