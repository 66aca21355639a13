//! Line-oriented terminal host.
//!
//! Reads one command per line and prints the board after every change.

use anyhow::Result;
use noughts_core::{Board, GameHost, GameMode, HostListener, Move, Player, Position};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Help text listing the accepted commands.
pub const HELP: &str = "\
Commands:
  1-9          place your mark on the numbered cell
  <row> <col>  place your mark by coordinates (0-2)
  mode <m>     switch mode: local, bot-easy, bot-medium
  restart      start a new game
  help         show this help
  quit         leave";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Tap the cell at `(row, col)`.
    Tap(usize, usize),
    /// Select a game mode.
    Mode(GameMode),
    /// Start over.
    Restart,
    /// Print the help.
    Help,
    /// Leave the game.
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["q" | "quit" | "exit"] => Ok(Command::Quit),
            ["r" | "restart"] => Ok(Command::Restart),
            ["h" | "help" | "?"] => Ok(Command::Help),
            ["mode", mode] => GameMode::from_str(mode)
                .map(Command::Mode)
                .map_err(|_| format!("Unknown mode '{}'", mode)),
            [cell] => {
                let number: usize = cell
                    .parse()
                    .map_err(|_| format!("Unknown command '{}'", cell))?;
                number
                    .checked_sub(1)
                    .and_then(Position::from_index)
                    .map(|pos| Command::Tap(pos.row(), pos.col()))
                    .ok_or_else(|| format!("Cell must be 1-9, got {}", number))
            }
            [row, col] => {
                let row: usize = row.parse().map_err(|_| format!("Invalid row '{}'", row))?;
                let col: usize = col.parse().map_err(|_| format!("Invalid column '{}'", col))?;
                Position::new(row, col)
                    .map(|pos| Command::Tap(pos.row(), pos.col()))
                    .map_err(|e| e.to_string())
            }
            [] => Err("Empty command".to_string()),
            _ => Err(format!("Unknown command '{}'", line.trim())),
        }
    }
}

/// Prints host callbacks to a writer.
///
/// Write failures are kept and surfaced by [`TerminalListener::take_error`],
/// since listener callbacks cannot return errors.
#[derive(Debug)]
pub struct TerminalListener<W> {
    out: W,
    error: Option<std::io::Error>,
}

impl<W: Write> TerminalListener<W> {
    /// Creates a listener printing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Returns the first write error since the last call, if any.
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    /// Prints a line, remembering the first failure.
    pub fn say(&mut self, line: &str) {
        if self.error.is_none()
            && let Err(e) = writeln!(self.out, "{}", line)
        {
            self.error = Some(e);
        }
    }
}

impl<W: Write> HostListener for TerminalListener<W> {
    fn on_move(&mut self, action: Move) {
        self.say(&format!("{} played {}", action.player, action.position.label()));
    }

    fn on_win(&mut self, player: Player) {
        self.say(&format!("Huraay! Player {} won!", player));
        self.say("Type 'restart' to play again.");
    }

    fn on_tie(&mut self) {
        self.say("It is a tie!");
        self.say("Type 'restart' to play again.");
    }

    fn on_illegal_move(&mut self, _row: usize, _col: usize) {
        self.say("Position already occupied");
    }

    fn on_game_over_rejected(&mut self) {
        self.say("Game is over. Type 'restart' to play again.");
    }

    fn on_render(&mut self, board: &Board, turn: Player) {
        self.say("");
        self.say(&board.to_string());
        self.say(&format!("Current Turn: {}", turn));
    }
}

/// Runs the command loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R, W>(host: &mut GameHost<TerminalListener<W>>, input: R, show_help: bool) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    if show_help {
        host.listener_mut().say(HELP);
    }
    host.render();
    flush_errors(host)?;

    for line in input.lines() {
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                debug!(%message, "Unparsed input");
                host.listener_mut().say(&message);
                flush_errors(host)?;
                continue;
            }
        };

        debug!(?command, "Handling command");
        match command {
            Command::Tap(row, col) => host.on_cell_tapped(row, col)?,
            Command::Mode(mode) => {
                host.on_mode_selected(mode)?;
                host.listener_mut().say(&format!("Mode: {}", mode));
            }
            Command::Restart => host.on_restart(),
            Command::Help => host.listener_mut().say(HELP),
            Command::Quit => {
                flush_errors(host)?;
                return Ok(());
            }
        }
        flush_errors(host)?;
    }

    Ok(())
}

fn flush_errors<W: Write>(host: &mut GameHost<TerminalListener<W>>) -> Result<()> {
    if let Some(e) = host.listener_mut().take_error() {
        warn!(error = %e, "Failed to write to terminal");
        return Err(e.into());
    }
    Ok(())
}
