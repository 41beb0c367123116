//! Win condition checking for Gomoku

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check if there's 5+ in a row for the given color
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    let Some(stones) = board.stones(stone) else {
        return false;
    };

    for pos in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            // Only count from the start of each segment
            let prev_r = i32::from(pos.row) - dr;
            let prev_c = i32::from(pos.col) - dc;
            if Pos::is_valid(prev_r, prev_c)
                && board.get(Pos::new(prev_r as u8, prev_c as u8)) == stone
            {
                continue;
            }

            let mut count = 1;
            let mut r = i32::from(pos.row) + dr;
            let mut c = i32::from(pos.col) + dc;
            while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
                count += 1;
                r += dr;
                c += dc;
            }

            if count >= 5 {
                return true;
            }
        }
    }
    false
}

/// Check for a winner
///
/// Returns `Some(Stone)` if either color has five in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Stone> {
    for stone in [Stone::Black, Stone::White] {
        if has_five_in_row(board, stone) {
            return Some(stone);
        }
    }
    None
}
