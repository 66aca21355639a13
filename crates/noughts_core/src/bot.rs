//! Bot move selection.
//!
//! The bot only ever reads a copy of the board. Both named policies currently
//! pick uniformly among the empty cells; [`Policy::Medium`] is kept distinct so
//! a stronger strategy can be attached without touching game modes or hosts.

use crate::error::GameError;
use crate::position::Position;
use crate::types::{Board, GameMode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Named bot difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Policy {
    /// Easy bot.
    Easy,
    /// Medium bot. Plays the same random strategy as [`Policy::Easy`] for now.
    Medium,
}

impl Policy {
    /// The policy driving the O side in `mode`, if a bot plays at all.
    pub fn for_mode(mode: GameMode) -> Option<Self> {
        match mode {
            GameMode::Local => None,
            GameMode::BotEasy => Some(Policy::Easy),
            GameMode::BotMedium => Some(Policy::Medium),
        }
    }

    /// The move-choosing strategy behind this policy.
    pub fn strategy(self) -> Strategy {
        match self {
            Policy::Easy | Policy::Medium => Strategy::Random,
        }
    }
}

/// How a move is chosen from the candidate cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Uniform choice among empty cells.
    Random,
}

/// Chooses bot moves.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    rng: StdRng,
}

impl MoveSelector {
    /// Creates a selector seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a selector with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks a legal move on `board` according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMoves`] if the board has no empty cell.
    #[instrument(skip(self, board))]
    pub fn select_move(&mut self, board: &Board, policy: Policy) -> Result<Position, GameError> {
        let chosen = match policy.strategy() {
            Strategy::Random => self.random_move(board),
        };

        match chosen {
            Some(pos) => {
                debug!(%policy, position = %pos, "Bot chose position");
                Ok(pos)
            }
            None => {
                warn!(%policy, "Bot asked to move on a full board");
                Err(GameError::NoLegalMoves)
            }
        }
    }

    fn random_move(&mut self, board: &Board) -> Option<Position> {
        let candidates = board.empty_positions();
        candidates.choose(&mut self.rng).copied()
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}
