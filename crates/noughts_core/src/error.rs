//! Error types for the tic-tac-toe core.

use derive_more::{Display, Error};

/// Error that can occur when reading the board or applying a move.
///
/// Every variant except [`GameError::OutOfRange`] is recoverable: the
/// session is left exactly as it was before the rejected call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum GameError {
    /// Row or column outside `0..3`.
    #[display("Cell ({row}, {col}) is out of range (must be 0-2)")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell is already occupied.
    #[display("Position ({row}, {col}) already occupied")]
    IllegalMove {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },

    /// The game has already been won or tied.
    #[display("Game is already over")]
    GameOver,

    /// The bot was asked to move on a full board.
    #[display("No legal moves available")]
    NoLegalMoves,
}

impl GameError {
    /// Returns true if the host should surface this error to the user and carry on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::OutOfRange { .. })
    }
}
