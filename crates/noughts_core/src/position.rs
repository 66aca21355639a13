//! Validated board coordinates.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// A cell on the 3x3 board, addressed by row and column (both 0-2).
///
/// A `Position` can only be built through [`Position::new`] or the
/// [`Position::ALL`] table, so holding one means the coordinates are in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position, failing with [`GameError::OutOfRange`] outside `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(GameError::OutOfRange { row, col })
        }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts to a row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label for this position.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
