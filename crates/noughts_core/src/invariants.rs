//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every transition.
//! The turn controller checks them in debug builds; they are also testable on
//! their own.

use crate::session::GameSession;
use crate::types::{GameOutcome, Mark, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        warn!(invariant = I::description(), "Invariant violated");
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// X moves first, so X never trails O and never leads by more than one mark.
pub struct MarkBalanceInvariant;

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        let x = session.board().count(Mark::X);
        let o = session.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// While the game is live, X is to move exactly when the marks are balanced.
pub struct TurnMatchesBoardInvariant;

impl Invariant<GameSession> for TurnMatchesBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        if session.outcome() != GameOutcome::InProgress {
            return true;
        }
        let balanced = session.board().count(Mark::X) == session.board().count(Mark::O);
        (session.turn() == Player::X) == balanced
    }

    fn description() -> &'static str {
        "Player to move matches the marks on the board"
    }
}

/// Move history replays onto the board: one entry per filled cell, alternating from X.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let history = session.history();

        if history.len() != 9 - board.count(Mark::Empty) {
            return false;
        }

        let mut expected = Player::X;
        for action in history {
            if action.player != expected || board.mark(action.position) != action.player.into() {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "Move history matches the board and alternates from X"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    MarkBalanceInvariant,
    TurnMatchesBoardInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::MoveSelector;
    use crate::types::GameMode;

    fn session() -> GameSession {
        GameSession::with_selector(GameMode::Local, MoveSelector::seeded(0))
    }

    #[test]
    fn test_invariants_hold_for_new_session() {
        assert!(SessionInvariants::check_all(&session()).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut game = session();
        game.apply_move(0, 0).unwrap();
        game.apply_move(1, 1).unwrap();
        game.apply_move(0, 2).unwrap();
        assert!(SessionInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariants_hold_through_bot_games() {
        for seed in 0..50 {
            let mut game = GameSession::with_selector(GameMode::BotEasy, MoveSelector::seeded(seed));
            while !game.outcome().is_terminal() {
                let pos = game.board().empty_positions()[0];
                game.apply_move(pos.row(), pos.col()).unwrap();
                assert!(SessionInvariants::check_all(&game).is_ok());
            }
        }
    }

    #[test]
    fn test_detects_corrupted_board() {
        let mut game = session();
        game.apply_move(1, 1).unwrap();
        game.board_mut_for_test().set(0, 0, Mark::O).unwrap();

        let violations = SessionInvariants::check_all(&game).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == HistoryConsistentInvariant::description())
        );
        assert!(
            violations
                .iter()
                .any(|v| v.description == TurnMatchesBoardInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MarkBalanceInvariant, TurnMatchesBoardInvariant);
        assert!(TwoInvariants::check_all(&session()).is_ok());
    }
}
