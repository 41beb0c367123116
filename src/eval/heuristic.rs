//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores a position from line patterns (fives, fours, threes, twos),
//! double-threat combinations and center control. The score is absolute:
//! positive favors Black, negative favors White, and the win sentinels
//! are returned exactly when a five-in-a-row exists.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::rules::has_five_in_row;

use super::patterns::PatternScore;
use super::{Evaluate, FIRST_WIN, SECOND_WIN};

/// Direction vectors for line checking (4 directions)
/// Each direction only needs to be checked once (we scan both ways from each stone)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Maximum Manhattan distance from center on a 15x15 board
const MAX_CENTER_DIST: i32 = 14;

/// Weight per distance unit from center
const POSITION_WEIGHT: i32 = 3;

/// Pattern-based evaluator used by the engine.
///
/// Stateless; one instance can serve any number of evaluations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Evaluate for Heuristic {
    fn evaluate(&self, board: &Board) -> i32 {
        // A completed five decides the game outright.
        if has_five_in_row(board, Stone::Black) {
            return FIRST_WIN;
        }
        if has_five_in_row(board, Stone::White) {
            return SECOND_WIN;
        }

        let pattern_score =
            evaluate_patterns(board, Stone::Black) - evaluate_patterns(board, Stone::White);
        let position_score =
            evaluate_positions(board, Stone::Black) - evaluate_positions(board, Stone::White);

        // Non-terminal scores must stay strictly inside the sentinels.
        (pattern_score + position_score).clamp(SECOND_WIN + 1, FIRST_WIN - 1)
    }
}

/// Evaluate pattern-based score for a color.
///
/// Scans all stones of the given color and evaluates line patterns
/// in all four directions. Each line segment is counted exactly once
/// by only evaluating from the "start" position (no same-color stone
/// in the negative direction).
///
/// Also detects multiple threat combinations that are effectively unstoppable:
/// - Two closed fours: opponent can only block one → bonus
/// - Closed four + open three: must block four, three promotes → bonus
/// - Two open threes: opponent can only block one → bonus
fn evaluate_patterns(board: &Board, color: Stone) -> i32 {
    let Some(stones) = board.stones(color) else {
        return 0;
    };

    let mut score = 0;
    let mut open_fours = 0i32;
    let mut closed_fours = 0i32;
    let mut open_threes = 0i32;

    for pos in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            let pattern_score = evaluate_line(board, pos, dr, dc, color);
            score += pattern_score;

            // Count high-value patterns for combo detection
            if pattern_score >= PatternScore::OPEN_FOUR {
                open_fours += 1;
            } else if pattern_score >= PatternScore::CLOSED_FOUR {
                closed_fours += 1;
            } else if pattern_score >= PatternScore::OPEN_THREE {
                open_threes += 1;
            }
        }
    }

    // Multiple threat combinations the opponent cannot block simultaneously.
    if open_fours >= 1 && (closed_fours >= 1 || open_threes >= 1) {
        score += PatternScore::OPEN_FOUR;
    }
    // Two closed fours = opponent can only block one → effectively an open four
    if closed_fours >= 2 {
        score += PatternScore::OPEN_FOUR;
    }
    // Closed four + open three = opponent must block four, three promotes
    if closed_fours >= 1 && open_threes >= 1 {
        score += PatternScore::OPEN_FOUR;
    }
    // Two open threes = opponent can only block one → one becomes open four
    if open_threes >= 2 {
        score += PatternScore::OPEN_FOUR;
    }

    score
}

/// Evaluate a single line pattern from a position in a given direction.
///
/// Only counts the pattern if this position is the "start" of the line
/// (no same-color stone in the negative direction). This ensures each
/// line segment is counted exactly once, avoiding double-counting.
///
/// Counts consecutive stones and open ends to determine the pattern type.
/// Also detects one-gap patterns like `O_OOO` or `OO_OO` where filling
/// the gap completes five-in-a-row.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn evaluate_line(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> i32 {
    // If there is a same-color stone in the negative direction this position
    // is not the start of the line segment - skip to avoid double counting.
    let prev_r = i32::from(pos.row) - dr;
    let prev_c = i32::from(pos.col) - dc;
    if Pos::is_valid(prev_r, prev_c) {
        let prev_pos = Pos::new(prev_r as u8, prev_c as u8);
        if board.get(prev_pos) == color {
            return 0;
        }
    }

    // Count consecutive stones and detect one gap
    let mut count = 1; // Start with the stone at pos
    let mut open_ends = 0;
    let mut has_gap = false;
    let mut total_span = 1; // Total positions used (stones + gap)

    // Check if there's an open end before our starting position
    if Pos::is_valid(prev_r, prev_c) {
        let prev_pos = Pos::new(prev_r as u8, prev_c as u8);
        if board.get(prev_pos) == Stone::Empty {
            open_ends += 1;
        }
    }

    // Extend in positive direction, allowing one gap
    let mut r = i32::from(pos.row) + dr;
    let mut c = i32::from(pos.col) + dc;
    while Pos::is_valid(r, c) {
        let p = Pos::new(r as u8, c as u8);
        match board.get(p) {
            s if s == color => {
                count += 1;
                total_span += 1;
            }
            Stone::Empty if !has_gap => {
                // Check if there's a same-color stone after this empty cell
                let next_r = r + dr;
                let next_c = c + dc;
                if Pos::is_valid(next_r, next_c)
                    && board.get(Pos::new(next_r as u8, next_c as u8)) == color
                {
                    // Found a gap with a stone after it - continue scanning
                    has_gap = true;
                    total_span += 1;
                    r += dr;
                    c += dc;
                    continue;
                }
                // No stone after gap - this is an open end
                open_ends += 1;
                break;
            }
            Stone::Empty => {
                // Second empty cell (gap already used) - open end on positive side
                open_ends += 1;
                break;
            }
            _ => break, // Opponent stone blocks
        }
        r += dr;
        c += dc;
    }

    // Gap patterns are never an actual five-in-a-row (that requires
    // consecutive stones); filling the gap is always one move away, so
    // the best a gap pattern can be is OPEN_FOUR.
    if has_gap {
        match count {
            5.. => PatternScore::OPEN_FOUR,
            4 if total_span == 5 => PatternScore::OPEN_FOUR, // OO_OO or O_OOO in exactly 5 span
            4 => PatternScore::CLOSED_FOUR,
            3 if open_ends == 2 => PatternScore::OPEN_THREE, // filling gap → open four
            3 if open_ends == 1 => PatternScore::CLOSED_THREE, // filling gap → closed four
            _ => 0,
        }
    } else {
        match (count, open_ends) {
            (5.., _) => PatternScore::FIVE,
            (4, 2) => PatternScore::OPEN_FOUR,
            (4, 1) => PatternScore::CLOSED_FOUR,
            (3, 2) => PatternScore::OPEN_THREE,
            (3, 1) => PatternScore::CLOSED_THREE,
            (2, 2) => PatternScore::OPEN_TWO,
            (2, 1) => PatternScore::CLOSED_TWO,
            _ => 0,
        }
    }
}

/// Evaluate positional bonuses for a color.
///
/// Stones closer to the center are worth more as they have more
/// potential for creating patterns in multiple directions.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
fn evaluate_positions(board: &Board, color: Stone) -> i32 {
    let Some(stones) = board.stones(color) else {
        return 0;
    };

    let center = (BOARD_SIZE / 2) as i32;
    let mut score = 0;

    for pos in stones.iter_ones() {
        // Manhattan distance from center
        let dist = (i32::from(pos.row) - center).abs() + (i32::from(pos.col) - center).abs();
        score += (MAX_CENTER_DIST - dist) * POSITION_WEIGHT;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new();
        let score = Heuristic.evaluate(&board);
        assert_eq!(score, 0, "Empty board should have score 0");
    }

    #[test]
    fn test_evaluate_center_bonus() {
        let mut board = Board::new();
        board.set(Pos::new(7, 7), Stone::Black);

        let score = Heuristic.evaluate(&board);
        assert!(score > 0, "Center position should be valuable, got {}", score);
    }

    #[test]
    fn test_evaluate_corner_less_valuable() {
        let mut board_center = Board::new();
        board_center.set(Pos::new(7, 7), Stone::Black);

        let mut board_corner = Board::new();
        board_corner.set(Pos::new(0, 0), Stone::Black);

        let center_score = Heuristic.evaluate(&board_center);
        let corner_score = Heuristic.evaluate(&board_corner);

        assert!(
            center_score > corner_score,
            "Center ({}) should be more valuable than corner ({})",
            center_score,
            corner_score
        );
    }

    #[test]
    fn test_evaluate_five_is_sentinel() {
        let mut board = Board::new();
        for i in 0..5 {
            board.set(Pos::new(7, i), Stone::Black);
        }
        assert_eq!(Heuristic.evaluate(&board), FIRST_WIN);
    }

    #[test]
    fn test_evaluate_opponent_five_is_sentinel() {
        let mut board = Board::new();
        for i in 0..5 {
            board.set(Pos::new(7, i), Stone::White);
        }
        assert_eq!(Heuristic.evaluate(&board), SECOND_WIN);
    }

    #[test]
    fn test_evaluate_open_four_below_win() {
        let mut board = Board::new();
        // _OOOO_ pattern: stones at cols 1-4, empty at 0 and 5
        for i in 1..5 {
            board.set(Pos::new(7, i), Stone::Black);
        }

        let score = Heuristic.evaluate(&board);
        assert!(score > 0, "Open four should have positive score, got {}", score);
        assert!(score < FIRST_WIN, "Open four should be less than win");
    }

    #[test]
    fn test_evaluate_closed_four() {
        let mut board = Board::new();
        // XOOOO_ pattern: white at col 0, blacks at 1-4, empty at 5
        board.set(Pos::new(7, 0), Stone::White);
        for i in 1..5 {
            board.set(Pos::new(7, i), Stone::Black);
        }

        let score = Heuristic.evaluate(&board);
        assert!(score > 0, "Closed four should have positive score");
    }

    #[test]
    fn test_evaluate_perspective() {
        let mut board1 = Board::new();
        let mut board2 = Board::new();

        // Board1: Black has open three; Board2: White has the same open three
        for i in 1..4 {
            board1.set(Pos::new(7, i), Stone::Black);
            board2.set(Pos::new(7, i), Stone::White);
        }

        let black_advantage = Heuristic.evaluate(&board1);
        let white_advantage = Heuristic.evaluate(&board2);

        assert!(black_advantage > 0, "got {}", black_advantage);
        assert_eq!(
            black_advantage, -white_advantage,
            "Mirrored positions should score symmetrically"
        );
    }

    #[test]
    fn test_evaluate_diagonal_pattern() {
        let mut board = Board::new();
        for i in 0..3 {
            board.set(Pos::new(5 + i, 5 + i), Stone::Black);
        }

        let score = Heuristic.evaluate(&board);
        assert!(score > 0, "Diagonal pattern should be detected and scored positively");
    }

    #[test]
    fn test_evaluate_gap_four() {
        let mut board = Board::new();
        // OO_OO: filling the gap completes five
        for i in [1u8, 2, 4, 5] {
            board.set(Pos::new(7, i), Stone::Black);
        }

        let score = Heuristic.evaluate(&board);
        assert!(
            score >= PatternScore::OPEN_FOUR,
            "Gap four should score like an open four, got {}",
            score
        );
    }

    #[test]
    fn test_evaluate_bounded_by_sentinels() {
        let mut board = Board::new();
        // Pile up threats without completing a five
        for i in 1..5 {
            board.set(Pos::new(3, i), Stone::Black);
            board.set(Pos::new(5, i), Stone::Black);
            board.set(Pos::new(9, i), Stone::Black);
        }

        let score = Heuristic.evaluate(&board);
        assert!(score > SECOND_WIN && score < FIRST_WIN);
    }
}
