//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use crate::position::{BOARD_SIZE, Position};
use serde::{Deserialize, Serialize};

/// A side in the game. The turn always belongs to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, bot-controlled outside local mode).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// The occupant of a board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// Cell holding an X.
    X,
    /// Cell holding an O.
    O,
}

impl Mark {
    /// Returns the player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    /// Returns true for an unoccupied cell.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Rows are stored inline as arrays, so the board is a plain `Copy` value:
/// a copy never shares a row with the original.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the mark at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Mark, GameError> {
        let pos = Position::new(row, col)?;
        Ok(self.mark(pos))
    }

    /// Overwrites the cell at `(row, col)`. No legality check is made here.
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), GameError> {
        let pos = Position::new(row, col)?;
        self.place(pos, mark);
        Ok(())
    }

    /// Gets the mark at an already validated position.
    pub fn mark(&self, pos: Position) -> Mark {
        self.cells[pos.row()][pos.col()]
    }

    /// Overwrites the cell at an already validated position.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row()][pos.col()] = mark;
    }

    /// Checks if a cell is empty.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.mark(pos).is_empty()
    }

    /// Returns true iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|m| !m.is_empty())
    }

    /// Empty cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty_at(*pos))
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|m| **m == mark).count()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    /// Empty cells show their 1-based index so a player can type it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, mark) in row.iter().enumerate() {
                match mark {
                    Mark::Empty => write!(f, "{}", r * BOARD_SIZE + c + 1)?,
                    Mark::X => write!(f, "X")?,
                    Mark::O => write!(f, "O")?,
                }
                if c < BOARD_SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if r < BOARD_SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Classification of a board: still playing, won, or tied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Board full with no completed line.
    Tie,
}

impl GameOutcome {
    /// Returns true once the game is won or tied.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "Player {} won!", player),
            GameOutcome::Tie => write!(f, "It is a tie!"),
        }
    }
}

/// Who controls the O side.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans sharing the board.
    #[default]
    Local,
    /// O is played by the easy bot.
    BotEasy,
    /// O is played by the medium bot.
    BotMedium,
}

impl GameMode {
    /// The side a bot plays in this mode, if any.
    pub fn bot_player(self) -> Option<Player> {
        match self {
            GameMode::Local => None,
            GameMode::BotEasy | GameMode::BotMedium => Some(Player::O),
        }
    }

    /// Returns true if `player` is bot-controlled in this mode.
    pub fn is_bot(self, player: Player) -> bool {
        self.bot_player() == Some(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(Mark::Empty), 9);
        assert!(!board.is_full());
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut board = Board::new();
        board.set(1, 2, Mark::O).unwrap();
        assert_eq!(board.get(1, 2), Ok(Mark::O));
        assert_eq!(board.get(2, 1), Ok(Mark::Empty));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut board = Board::new();
        assert_eq!(board.get(3, 0), Err(GameError::OutOfRange { row: 3, col: 0 }));
        assert_eq!(
            board.set(0, 3, Mark::X),
            Err(GameError::OutOfRange { row: 0, col: 3 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_set_touches_only_one_cell() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X).unwrap();
        assert_eq!(board.count(Mark::X), 1);
        assert_eq!(board.rows()[1], [Mark::Empty; 3]);
        assert_eq!(board.rows()[2], [Mark::Empty; 3]);
        assert_eq!(board.rows()[0], [Mark::X, Mark::Empty, Mark::Empty]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Board::new();
        original.set(0, 0, Mark::X).unwrap();

        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set(0, 1, Mark::O).unwrap();
        copy.set(2, 2, Mark::X).unwrap();
        assert_eq!(original.get(0, 1), Ok(Mark::Empty));
        assert_eq!(original.get(2, 2), Ok(Mark::Empty));

        original.set(1, 1, Mark::O).unwrap();
        assert_eq!(copy.get(1, 1), Ok(Mark::Empty));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_rows([[Mark::X; 3], [Mark::O; 3], [Mark::X; 3]]);
        assert!(board.is_full());
        assert!(board.empty_positions().is_empty());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X).unwrap();
        board.set(1, 1, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_mark_player_conversion() {
        assert_eq!(Mark::from(Player::X), Mark::X);
        assert_eq!(Mark::O.player(), Some(Player::O));
        assert_eq!(Mark::Empty.player(), None);
        assert_eq!(Player::X.opponent(), Player::O);
    }

    #[test]
    fn test_game_mode_parsing() {
        assert_eq!(GameMode::from_str("local"), Ok(GameMode::Local));
        assert_eq!(GameMode::from_str("bot-easy"), Ok(GameMode::BotEasy));
        assert_eq!(GameMode::from_str("Bot-Medium"), Ok(GameMode::BotMedium));
        assert!(GameMode::from_str("hard").is_err());
        assert_eq!(GameMode::BotEasy.to_string(), "bot-easy");
    }

    #[test]
    fn test_bot_player() {
        assert!(!GameMode::Local.is_bot(Player::O));
        assert!(GameMode::BotEasy.is_bot(Player::O));
        assert!(!GameMode::BotMedium.is_bot(Player::X));
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!GameOutcome::InProgress.is_terminal());
        assert!(GameOutcome::Tie.is_terminal());
        assert_eq!(GameOutcome::Win(Player::O).winner(), Some(Player::O));
        assert_eq!(GameOutcome::Win(Player::X).to_string(), "Player X won!");
    }
}
