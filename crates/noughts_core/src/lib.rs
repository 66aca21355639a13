//! noughts core - tic-tac-toe state machine, rule engine and bot.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Mark`]s, a plain value that copies deeply
//! - **Rules**: [`evaluate`] classifies a board as in progress, won or tied
//! - **Session**: [`GameSession`] owns one game and applies moves
//! - **Bot**: [`MoveSelector`] picks moves for the O side in bot modes
//! - **Host**: [`GameHost`] turns taps and mode changes into transitions
//!   and reports back through [`HostListener`]
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameMode, GameOutcome, GameSession, Player};
//!
//! let mut game = GameSession::new(GameMode::Local);
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.apply_move(row, col)?;
//! }
//! assert_eq!(game.outcome(), GameOutcome::Win(Player::X));
//! # Ok::<(), noughts_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod bot;
mod error;
mod events;
mod host;
mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::Move;
pub use bot::{MoveSelector, Policy, Strategy};
pub use error::GameError;
pub use events::GameEvent;
pub use host::{GameHost, HostListener};
pub use invariants::{
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, SessionInvariants, TurnMatchesBoardInvariant,
};
pub use position::{BOARD_SIZE, Position};
pub use rules::evaluate;
pub use session::{GameSession, SessionSnapshot};
pub use types::{Board, GameMode, GameOutcome, Mark, Player};
