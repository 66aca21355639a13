//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]: they read the board and never mutate it.
//! Win detection scans rows, then columns, then diagonals; the first complete
//! line decides the winner. A tie is only reported when no line is complete.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, check_winner};

use crate::types::{Board, GameOutcome};
use tracing::instrument;

/// Classifies a board as in progress, won or tied.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        GameOutcome::Win(winner)
    } else if is_full(board) {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    }
}
