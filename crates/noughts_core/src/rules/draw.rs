//! Tie detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no complete line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_tie(&Board::new()));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / O X X / O X O
        let board = Board::from_rows([
            [Mark::X, Mark::O, Mark::X],
            [Mark::O, Mark::X, Mark::X],
            [Mark::O, Mark::X, Mark::O],
        ]);
        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let board = Board::from_rows([
            [Mark::X, Mark::X, Mark::X],
            [Mark::O, Mark::O, Mark::X],
            [Mark::X, Mark::O, Mark::O],
        ]);
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
