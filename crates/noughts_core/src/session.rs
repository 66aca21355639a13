//! Turn controller: the single owner and mutator of a game.
//!
//! A [`GameSession`] is an explicitly owned value. Every change goes through
//! [`GameSession::apply_move`], [`GameSession::set_mode`] or
//! [`GameSession::reset`]; each call runs to completion, including any bot
//! reply, before returning, so readers never observe a half-applied turn.

use crate::action::Move;
use crate::bot::{MoveSelector, Policy};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameMode, GameOutcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One game of tic-tac-toe and everything needed to drive it.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Player,
    mode: GameMode,
    outcome: GameOutcome,
    history: Vec<Move>,
    selector: MoveSelector,
}

/// Read-only view of a session for rendering or serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The board.
    pub board: Board,
    /// Player to move.
    pub turn: Player,
    /// Current game mode.
    pub mode: GameMode,
    /// Current outcome.
    pub outcome: GameOutcome,
    /// Moves applied since the last reset.
    pub history: Vec<Move>,
}

impl GameSession {
    /// Creates a session in the initial state with an entropy-seeded bot.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self::with_selector(mode, MoveSelector::from_entropy())
    }

    /// Creates a session in the initial state using `selector` for bot moves.
    #[instrument(skip(selector))]
    pub fn with_selector(mode: GameMode, selector: MoveSelector) -> Self {
        info!(%mode, "Creating new game session");
        Self {
            board: Board::new(),
            turn: Player::X,
            mode,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
            selector,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the moves applied since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Captures the current state for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board,
            turn: self.turn,
            mode: self.mode,
            outcome: self.outcome,
            history: self.history.clone(),
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// If the game continues and the next player is bot-controlled, the bot's
    /// reply is applied before this returns. The returned events cover both
    /// moves in order.
    ///
    /// # Errors
    ///
    /// - [`GameError::OutOfRange`] for coordinates outside `0..3`
    /// - [`GameError::GameOver`] once the game is won or tied
    /// - [`GameError::IllegalMove`] if the cell is occupied
    ///
    /// None of these change the session.
    #[instrument(skip(self), fields(turn = %self.turn, mode = %self.mode))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Vec<GameEvent>, GameError> {
        let pos = Position::new(row, col).inspect_err(|e| {
            warn!(error = %e, "Move outside the board");
        })?;

        let mut events = Vec::new();
        self.place(pos, &mut events)?;
        self.run_bot(&mut events)?;
        Ok(events)
    }

    /// Switches the game mode without touching the board.
    ///
    /// Selecting a bot mode while O is to move in a live game lets the bot
    /// reply immediately.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) -> Result<Vec<GameEvent>, GameError> {
        info!(from = %self.mode, to = %mode, "Game mode changed");
        self.mode = mode;

        let mut events = vec![GameEvent::ModeChanged(mode)];
        self.run_bot(&mut events)?;
        Ok(events)
    }

    /// Restores the initial state: empty board, X to move, in progress.
    ///
    /// The game mode is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Vec<GameEvent> {
        info!(moves = self.history.len(), "Resetting game");
        self.board = Board::new();
        self.turn = Player::X;
        self.outcome = GameOutcome::InProgress;
        self.history.clear();
        self.check_invariants();
        vec![GameEvent::Reset]
    }

    /// Single placement transition shared by human and bot moves.
    fn place(&mut self, pos: Position, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        if self.outcome.is_terminal() {
            warn!(position = %pos, outcome = %self.outcome, "Move after game over");
            return Err(GameError::GameOver);
        }
        if !self.board.is_empty_at(pos) {
            warn!(position = %pos, "Position already occupied");
            return Err(GameError::IllegalMove {
                row: pos.row(),
                col: pos.col(),
            });
        }

        let action = Move::new(self.turn, pos);
        self.board.place(pos, self.turn.into());
        self.history.push(action);
        events.push(GameEvent::MoveApplied(action));
        debug!(%action, "Move applied");

        self.outcome = rules::evaluate(&self.board);
        match self.outcome {
            GameOutcome::Win(winner) => {
                info!(%winner, "Game won");
                events.push(GameEvent::Won(winner));
            }
            GameOutcome::Tie => {
                info!("Game tied");
                events.push(GameEvent::Tie);
            }
            GameOutcome::InProgress => {
                self.turn = self.turn.opponent();
                events.push(GameEvent::TurnChanged(self.turn));
            }
        }

        self.check_invariants();
        Ok(())
    }

    /// Post-transition hook: lets the bot play while it holds the turn.
    fn run_bot(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        while let Some(policy) = self.bot_to_move() {
            // The selector reads a copy so analysis can never touch live state.
            let board = self.board;
            let pos = self.selector.select_move(&board, policy)?;
            self.place(pos, events)?;
        }
        Ok(())
    }

    fn bot_to_move(&self) -> Option<Policy> {
        if self.outcome.is_terminal() || !self.mode.is_bot(self.turn) {
            return None;
        }
        Policy::for_mode(self.mode)
    }

    fn check_invariants(&self) {
        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "Session invariants violated"
        );
    }

    #[cfg(test)]
    pub(crate) fn board_mut_for_test(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::Local)
    }
}
