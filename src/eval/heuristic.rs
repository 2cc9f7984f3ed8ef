//! Heuristic evaluation function for Gomoku board positions
//!
//! The score is computed from Black's point of view: positive favors Black,
//! negative favors White. Each maximal run of two or more stones contributes
//! its pattern weight. A completed five short-circuits everything else.

use crate::board::{Board, Stone};
use crate::rules::{maximal_runs, WIN_LENGTH};

use super::patterns::ScoreWeights;

/// Score the board with the default weights.
#[must_use]
pub fn score(board: &Board) -> i32 {
    score_with(board, &ScoreWeights::default())
}

/// Score the board from Black's point of view.
///
/// - Only Black has five or more: `weights.five`
/// - Only White has five or more: `-weights.five`
/// - Both do (unreachable in play): 0
/// - Otherwise Black's pattern total minus White's, clamped strictly inside
///   `(-five, five)` so no heuristic total ties or beats a win
///
/// Recoloring every stone negates the result. Weights are not validated
/// here; a non-positive `five` collapses every non-five total to 0 and sums
/// saturate instead of overflowing.
#[must_use]
pub fn score_with(board: &Board, weights: &ScoreWeights) -> i32 {
    let black = evaluate_patterns(board, Stone::Black, weights);
    let white = evaluate_patterns(board, Stone::White, weights);

    match (black.has_five, white.has_five) {
        (true, false) => weights.five,
        (false, true) => weights.five.saturating_neg(),
        (true, true) => 0,
        (false, false) => {
            let limit = weights.five.saturating_sub(1).max(0);
            black.total.saturating_sub(white.total).clamp(-limit, limit)
        }
    }
}

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favor `color`. `Stone::Empty` evaluates to 0.
#[must_use]
pub fn evaluate(board: &Board, color: Stone, weights: &ScoreWeights) -> i32 {
    match color {
        Stone::Black => score_with(board, weights),
        Stone::White => score_with(board, weights).saturating_neg(),
        Stone::Empty => 0,
    }
}

struct PatternTotal {
    total: i32,
    has_five: bool,
}

/// Sum pattern weights over every maximal run of `color`.
fn evaluate_patterns(board: &Board, color: Stone, weights: &ScoreWeights) -> PatternTotal {
    let mut total = 0i32;
    let mut has_five = false;

    for run in maximal_runs(board, color, 2) {
        if run.length >= WIN_LENGTH {
            has_five = true;
            continue;
        }
        total = total.saturating_add(weights.weight(run.length, run.boundary));
    }

    PatternTotal { total, has_five }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::eval::PatternScore;

    fn board() -> Board {
        Board::new(8).unwrap()
    }

    #[test]
    fn test_score_empty_board() {
        assert_eq!(score(&board()), 0);
    }

    #[test]
    fn test_score_single_stone() {
        let mut b = board();
        b.place_stone(Pos::new(3, 3), Stone::Black);
        let s = score(&b);
        assert!(-1000 < s && s < 1000, "single stone scored {}", s);
    }

    #[test]
    fn test_score_five() {
        let mut b = board();
        b.put_seq(Pos::new(0, 0), 1, 0, 5, Stone::Black).unwrap();
        assert_eq!(score(&b), PatternScore::FIVE);

        let mut b = board();
        b.put_seq(Pos::new(2, 2), 0, 1, 5, Stone::White).unwrap();
        assert_eq!(score(&b), -PatternScore::FIVE);
    }

    #[test]
    fn test_score_closed_five_still_wins() {
        let mut b = Board::new(5).unwrap();
        b.put_seq(Pos::new(2, 0), 0, 1, 5, Stone::Black).unwrap();
        assert_eq!(score(&b), PatternScore::FIVE);
    }

    #[test]
    fn test_score_both_fives_neutral() {
        let mut b = board();
        b.put_seq(Pos::new(0, 0), 0, 1, 5, Stone::Black).unwrap();
        b.put_seq(Pos::new(1, 0), 0, 1, 5, Stone::White).unwrap();
        assert_eq!(score(&b), 0);
    }

    #[test]
    fn test_score_open_four() {
        let mut b = board();
        b.put_seq(Pos::new(3, 2), 0, 1, 4, Stone::Black).unwrap();
        assert!(score(&b) >= 500);

        let mut b = board();
        b.put_seq(Pos::new(3, 2), 0, 1, 4, Stone::White).unwrap();
        let s = score(&b);
        assert!(s <= -10_000, "white open four scored {}", s);
        assert!(s > -PatternScore::FIVE);
    }

    #[test]
    fn test_score_semi_open_less_than_open() {
        let mut open = board();
        open.put_seq(Pos::new(3, 2), 0, 1, 3, Stone::Black).unwrap();

        let mut semi = open.clone();
        semi.place_stone(Pos::new(3, 1), Stone::White);

        assert!(score(&open) > score(&semi));
    }

    #[test]
    fn test_score_multiple_open_threes() {
        let mut b = board();
        b.put_seq(Pos::new(0, 1), 0, 1, 3, Stone::Black).unwrap();
        b.put_seq(Pos::new(1, 1), 0, 1, 3, Stone::Black).unwrap();
        assert!(score(&b) > 50);
    }

    #[test]
    fn test_score_double_open_four() {
        let mut b = board();
        b.put_seq(Pos::new(0, 1), 0, 1, 4, Stone::Black).unwrap();
        b.put_seq(Pos::new(1, 1), 0, 1, 4, Stone::Black).unwrap();
        assert!(score(&b) >= 1000);
    }

    #[test]
    fn test_score_mid_game_nonzero() {
        let mut b = board();
        for (r, c) in [(4, 4), (4, 5), (5, 4), (3, 3)] {
            b.place_stone(Pos::new(r, c), Stone::Black);
        }
        for (r, c) in [(4, 3), (5, 5), (6, 4)] {
            b.place_stone(Pos::new(r, c), Stone::White);
        }
        // Black: three semi-open twos plus the open (4,5)-(5,4) two (+80).
        // White: open (5,5)-(6,4) two (-50).
        assert_eq!(score(&b), 30);
    }

    #[test]
    fn test_score_color_swap_negates() {
        let mut b = board();
        b.put_seq(Pos::new(1, 1), 0, 1, 3, Stone::Black).unwrap();
        b.put_seq(Pos::new(4, 2), 1, 1, 2, Stone::White).unwrap();
        b.place_stone(Pos::new(1, 0), Stone::White);
        b.put_seq(Pos::new(7, 0), 0, 1, 4, Stone::White).unwrap();

        let s = score(&b);
        assert_ne!(s, 0);
        assert_eq!(score(&b.swap_colors()), -s);
    }

    #[test]
    fn test_evaluate_perspective() {
        let mut b = board();
        b.put_seq(Pos::new(2, 2), 0, 1, 3, Stone::Black).unwrap();
        let w = ScoreWeights::default();

        let black = evaluate(&b, Stone::Black, &w);
        assert!(black > 0);
        assert_eq!(evaluate(&b, Stone::White, &w), -black);
        assert_eq!(evaluate(&b, Stone::Empty, &w), 0);
    }

    #[test]
    fn test_score_with_degenerate_weights() {
        let mut b = board();
        b.put_seq(Pos::new(2, 2), 0, 1, 3, Stone::Black).unwrap();
        b.put_seq(Pos::new(5, 2), 0, 1, 2, Stone::White).unwrap();

        let zero_five = ScoreWeights {
            five: 0,
            ..ScoreWeights::default()
        };
        assert_eq!(score_with(&board(), &zero_five), 0);
        assert_eq!(score_with(&b, &zero_five), 0);

        let negative_five = ScoreWeights {
            five: i32::MIN,
            ..ScoreWeights::default()
        };
        assert_eq!(score_with(&b, &negative_five), 0);
        b.put_seq(Pos::new(7, 0), 0, 1, 5, Stone::White).unwrap();
        assert_eq!(score_with(&b, &negative_five), i32::MAX);
        assert_eq!(evaluate(&b, Stone::White, &negative_five), -i32::MAX);
    }

    #[test]
    fn test_score_with_huge_weights_saturates() {
        let huge = ScoreWeights {
            five: i32::MAX,
            two: [i32::MAX; 3],
            three: [i32::MAX; 3],
            four: [i32::MAX; 3],
        };
        let mut b = board();
        b.put_seq(Pos::new(0, 0), 0, 1, 4, Stone::Black).unwrap();
        b.put_seq(Pos::new(2, 0), 0, 1, 4, Stone::Black).unwrap();
        b.put_seq(Pos::new(4, 0), 0, 1, 4, Stone::White).unwrap();
        b.put_seq(Pos::new(6, 0), 0, 1, 4, Stone::White).unwrap();
        b.put_seq(Pos::new(7, 7), -1, 0, 2, Stone::White).unwrap();

        let s = score_with(&b, &huge);
        assert!(s.abs() < i32::MAX);
        assert_eq!(evaluate(&b, Stone::White, &huge), -s);

        let mut black_only = board();
        black_only.put_seq(Pos::new(0, 0), 0, 1, 4, Stone::Black).unwrap();
        black_only.put_seq(Pos::new(2, 0), 0, 1, 4, Stone::Black).unwrap();
        assert_eq!(score_with(&black_only, &huge), i32::MAX - 1);
    }

    #[test]
    fn test_heuristic_total_clamped_below_five() {
        // Every row an open-ended four on a wide board
        let mut b = Board::new(15).unwrap();
        for row in (0..15).step_by(2) {
            b.put_seq(Pos::new(row, 1), 0, 1, 4, Stone::Black).unwrap();
            b.put_seq(Pos::new(row, 8), 0, 1, 4, Stone::Black).unwrap();
        }
        let s = score(&b);
        assert!(s < PatternScore::FIVE);
        assert_eq!(s, PatternScore::FIVE - 1);
    }
}
