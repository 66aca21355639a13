//! Host-facing interface.
//!
//! A host (terminal, GUI, test harness) forwards user input to a [`GameHost`]
//! and receives callbacks through [`HostListener`]. The host only ever reads
//! the board and the player to move; everything else stays inside the session.

use crate::action::Move;
use crate::error::GameError;
use crate::events::GameEvent;
use crate::session::GameSession;
use crate::types::{Board, GameMode, Player};
use tracing::{debug, instrument};

/// Callbacks a host implements to present the game.
///
/// Every method has an empty default so hosts implement only what they show.
pub trait HostListener {
    /// A mark was placed, by a human or the bot.
    fn on_move(&mut self, _action: Move) {}

    /// `player` won. The host should offer a restart.
    fn on_win(&mut self, _player: Player) {}

    /// The game ended in a tie. The host should offer a restart.
    fn on_tie(&mut self) {}

    /// The tapped cell is already occupied.
    fn on_illegal_move(&mut self, _row: usize, _col: usize) {}

    /// A cell was tapped after the game ended.
    fn on_game_over_rejected(&mut self) {}

    /// Redraw using the current board and player to move.
    fn on_render(&mut self, _board: &Board, _turn: Player) {}
}

/// Binds a session to a listener and translates host input into transitions.
#[derive(Debug)]
pub struct GameHost<L> {
    session: GameSession,
    listener: L,
}

impl<L: HostListener> GameHost<L> {
    /// Creates a host around an existing session.
    pub fn new(session: GameSession, listener: L) -> Self {
        Self { session, listener }
    }

    /// Returns the session for read access.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Returns the listener mutably.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consumes the host, returning its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Draws the current state without changing it.
    pub fn render(&mut self) {
        self.listener.on_render(self.session.board(), self.session.turn());
    }

    /// A cell was tapped.
    ///
    /// Occupied cells and taps after game over are reported through the
    /// listener and leave the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] for coordinates outside the board,
    /// which a well-behaved host never produces.
    #[instrument(skip(self))]
    pub fn on_cell_tapped(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        match self.session.apply_move(row, col) {
            Ok(events) => {
                self.dispatch(&events);
                self.render();
                Ok(())
            }
            Err(GameError::IllegalMove { row, col }) => {
                self.listener.on_illegal_move(row, col);
                Ok(())
            }
            Err(GameError::GameOver) => {
                self.listener.on_game_over_rejected();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// A game mode was selected. The board is kept.
    #[instrument(skip(self))]
    pub fn on_mode_selected(&mut self, mode: GameMode) -> Result<(), GameError> {
        let events = self.session.set_mode(mode)?;
        self.dispatch(&events);
        self.render();
        Ok(())
    }

    /// The restart action was chosen.
    #[instrument(skip(self))]
    pub fn on_restart(&mut self) {
        let events = self.session.reset();
        self.dispatch(&events);
        self.render();
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            debug!(?event, "Dispatching event to host");
            match *event {
                GameEvent::MoveApplied(action) => self.listener.on_move(action),
                GameEvent::Won(player) => self.listener.on_win(player),
                GameEvent::Tie => self.listener.on_tie(),
                GameEvent::TurnChanged(_) | GameEvent::Reset | GameEvent::ModeChanged(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::MoveSelector;

    #[derive(Debug, Default)]
    struct Recorder {
        moves: Vec<Move>,
        wins: Vec<Player>,
        ties: usize,
        illegal: Vec<(usize, usize)>,
        rejected: usize,
        renders: usize,
    }

    impl HostListener for Recorder {
        fn on_move(&mut self, action: Move) {
            self.moves.push(action);
        }
        fn on_win(&mut self, player: Player) {
            self.wins.push(player);
        }
        fn on_tie(&mut self) {
            self.ties += 1;
        }
        fn on_illegal_move(&mut self, row: usize, col: usize) {
            self.illegal.push((row, col));
        }
        fn on_game_over_rejected(&mut self) {
            self.rejected += 1;
        }
        fn on_render(&mut self, _board: &Board, _turn: Player) {
            self.renders += 1;
        }
    }

    fn host(mode: GameMode) -> GameHost<Recorder> {
        GameHost::new(
            GameSession::with_selector(mode, MoveSelector::seeded(21)),
            Recorder::default(),
        )
    }

    #[test]
    fn test_tap_places_and_renders() {
        let mut host = host(GameMode::Local);
        host.on_cell_tapped(0, 0).unwrap();
        assert_eq!(host.listener().moves.len(), 1);
        assert_eq!(host.listener().renders, 1);
        assert_eq!(host.session().turn(), Player::O);
    }

    #[test]
    fn test_tap_on_occupied_cell_notifies() {
        let mut host = host(GameMode::Local);
        host.on_cell_tapped(0, 0).unwrap();
        host.on_cell_tapped(0, 0).unwrap();
        assert_eq!(host.listener().illegal, vec![(0, 0)]);
        assert_eq!(host.listener().renders, 1);
        assert_eq!(host.session().turn(), Player::O);
    }

    #[test]
    fn test_win_callback_and_restart() {
        let mut host = host(GameMode::Local);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            host.on_cell_tapped(row, col).unwrap();
        }
        assert_eq!(host.listener().wins, vec![Player::X]);

        host.on_cell_tapped(2, 2).unwrap();
        assert_eq!(host.listener().rejected, 1);

        host.on_restart();
        assert_eq!(host.session().board(), &Board::new());
        assert_eq!(host.session().turn(), Player::X);
    }

    #[test]
    fn test_out_of_range_is_returned() {
        let mut host = host(GameMode::Local);
        assert_eq!(
            host.on_cell_tapped(5, 5),
            Err(GameError::OutOfRange { row: 5, col: 5 })
        );
    }

    #[test]
    fn test_bot_move_reported_to_host() {
        let mut host = host(GameMode::BotEasy);
        host.on_cell_tapped(1, 1).unwrap();
        let moves = &host.listener().moves;
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[1].player, Player::O);
    }

    #[test]
    fn test_mode_selection_keeps_board() {
        let mut host = host(GameMode::Local);
        host.on_cell_tapped(0, 0).unwrap();
        host.on_mode_selected(GameMode::BotEasy).unwrap();
        assert_eq!(host.session().mode(), GameMode::BotEasy);
        // O was to move, so the bot answered straight away.
        assert_eq!(host.session().history().len(), 2);
        assert_eq!(host.session().turn(), Player::X);
    }
}
