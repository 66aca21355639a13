//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player};
use tracing::instrument;

const fn at(row: usize, col: usize) -> Position {
    Position::ALL[row * 3 + col]
}

/// Every winning line, in scan order: rows, columns, main diagonal, anti diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in scan order,
/// `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let mark = board.mark(*a);
        if mark == board.mark(*b) && mark == board.mark(*c) {
            mark.player()
        } else {
            None
        }
    })
}
