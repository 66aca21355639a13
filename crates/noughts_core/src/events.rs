//! Events emitted by the turn controller.

use crate::action::Move;
use crate::types::{GameMode, Player};
use serde::{Deserialize, Serialize};

/// Something that happened during a session transition.
///
/// Events are returned in the order they occurred, so a host can replay
/// them to animate or log a turn that included a bot reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    MoveApplied(Move),
    /// The turn passed to this player.
    TurnChanged(Player),
    /// This player completed a line.
    Won(Player),
    /// The board filled with no winner.
    Tie,
    /// The session returned to its initial state.
    Reset,
    /// The game mode changed.
    ModeChanged(GameMode),
}

impl GameEvent {
    /// Returns true for events that end the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::Won(_) | GameEvent::Tie)
    }
}
