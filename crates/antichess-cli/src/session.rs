//! The interactive read-evaluate-print loop.

use std::io::{BufRead, Write};

use antichess_core::{IllegalMove, Move};
use tracing::{debug, info, warn};

use crate::command::{Command, Setting, parse_command};
use crate::error::GameError;
use crate::game::{Game, Outcome, Termination};
use crate::render::{BoardView, GlyphStyle};

const PROMPT: &str = "Enter 'move A2 B4', 'display', 'hint', or 'quit': ";

const HELP: &str = "\
Commands:
  move <from> <to>         play a move, e.g. 'move A2 A4'
  display                  draw the board
  hint                     list every legal move
  quit                     concede the game
  set glyphs unicode|ascii choose how pieces are drawn
  set redraw on|off        draw the board before every prompt
  help                     show this list";

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How the board is drawn.
    pub glyphs: GlyphStyle,
    /// Draw the board before every prompt, not only on `display`.
    pub redraw: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            glyphs: GlyphStyle::Unicode,
            redraw: true,
        }
    }
}

/// One game played over a line-based input and a text output.
pub struct Session<R, W> {
    input: R,
    output: W,
    game: Game,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session for a new game.
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self::with_game(input, output, config, Game::new())
    }

    /// Create a session that continues an existing game.
    pub fn with_game(input: R, output: W, config: SessionConfig, game: Game) -> Self {
        Self {
            input,
            output,
            game,
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run until the game ends or input closes.
    ///
    /// Returns the outcome, or `None` when input ran out first.
    pub fn run(&mut self) -> Result<Option<Outcome>, GameError> {
        let mut show_board = true;
        let mut line = String::new();

        loop {
            if show_board || self.config.redraw {
                self.draw_board()?;
            }
            show_board = false;

            let side = self.game.side_to_move();
            writeln!(self.output, "\n{side}'s turn")?;

            if let Some(outcome) = self.game.status() {
                self.announce(outcome)?;
                return Ok(Some(outcome));
            }

            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                info!("input closed");
                return Ok(None);
            }
            debug!(cmd = %line.trim(), "received command");

            match parse_command(&line) {
                Ok(Command::Move(mv)) => {
                    if let Some(outcome) = self.handle_move(mv)? {
                        return Ok(Some(outcome));
                    }
                }
                Ok(Command::Display) => show_board = true,
                Ok(Command::Hint) => self.handle_hint()?,
                Ok(Command::Quit) => {
                    let outcome = self.game.resign();
                    writeln!(self.output, "{side} quits. {} wins!", outcome.winner)?;
                    return Ok(Some(outcome));
                }
                Ok(Command::Set(setting)) => self.handle_set(setting)?,
                Ok(Command::Help) => writeln!(self.output, "{HELP}")?,
                Ok(Command::Unknown(_)) => writeln!(self.output, "Invalid action. Try again.")?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    /// Report a game that is already over when its turn comes up.
    fn announce(&mut self, outcome: Outcome) -> Result<(), GameError> {
        let winner = outcome.winner;
        let loser = winner.flip();
        match outcome.termination {
            Termination::NoLegalMoves => {
                writeln!(self.output, "{loser} has no valid moves. {winner} wins!")?;
            }
            Termination::Resignation => writeln!(self.output, "{loser} quits. {winner} wins!")?,
            Termination::EmptyArmy => writeln!(self.output, "{winner} wins!")?,
        }
        info!(%winner, termination = ?outcome.termination, "game over");
        Ok(())
    }

    fn draw_board(&mut self) -> Result<(), GameError> {
        writeln!(self.output, "{}", BoardView::new(self.game.board(), self.config.glyphs))?;
        Ok(())
    }

    fn handle_move(&mut self, mv: Move) -> Result<Option<Outcome>, GameError> {
        match self.game.play(mv) {
            Ok(Some(outcome)) => {
                self.draw_board()?;
                writeln!(self.output, "\n{} wins!", outcome.winner)?;
                Ok(Some(outcome))
            }
            Ok(None) => Ok(None),
            Err(GameError::Rejected {
                source: IllegalMove::NotLegal,
            }) => {
                writeln!(self.output, "Invalid move. Try again.")?;
                Ok(None)
            }
            Err(GameError::Rejected {
                source: IllegalMove::CaptureRequired,
            }) => {
                writeln!(self.output, "You must capture a piece when possible.")?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn handle_hint(&mut self) -> Result<(), GameError> {
        let hints: Vec<String> = self.game.hints().iter().map(Move::to_string).collect();
        writeln!(self.output, "Valid moves: {}", hints.join(", "))?;
        Ok(())
    }

    fn handle_set(&mut self, setting: Setting) -> Result<(), GameError> {
        match setting {
            Setting::Glyphs(style) => self.config.glyphs = style,
            Setting::Redraw(on) => self.config.redraw = on,
        }
        debug!(?setting, "setting changed");
        writeln!(self.output, "ok")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use antichess_core::{Color, Square};

    use super::*;

    fn run(input: &str, config: SessionConfig) -> (Option<Outcome>, String, SessionConfig) {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(input.as_bytes()), &mut output, config);
        let outcome = session.run().unwrap();
        let config = session.config();
        drop(session);
        (outcome, String::from_utf8(output).unwrap(), config)
    }

    #[test]
    fn input_closed_ends_without_outcome() {
        let (outcome, out, _) = run("", SessionConfig::default());
        assert_eq!(outcome, None);
        assert!(out.contains("White's turn"));
        assert!(out.contains(PROMPT));
    }

    #[test]
    fn quit_awards_opponent() {
        let (outcome, out, _) = run("quit\n", SessionConfig::default());
        assert_eq!(outcome.map(|o| o.winner), Some(Color::Black));
        assert!(out.contains("White quits. Black wins!"));
    }

    #[test]
    fn invalid_action_and_move_messages() {
        let (_, out, _) = run("dance\nmove A2 A5\nmove A2\n", SessionConfig::default());
        assert!(out.contains("Invalid action. Try again."));
        assert!(out.contains("Invalid move. Try again."));
        assert!(out.contains("Invalid move format. Use 'A2 B4' format."));
    }

    #[test]
    fn hint_lists_moves() {
        let (_, out, _) = run("hint\n", SessionConfig::default());
        assert!(out.contains("Valid moves: B1 A3, B1 C3, G1 F3, G1 H3, A2 A3, A2 A4,"));
    }

    #[test]
    fn set_changes_config() {
        let config = SessionConfig::default();
        let (_, out, config) = run("set glyphs ascii\nset redraw off\n", config);
        assert_eq!(config.glyphs, GlyphStyle::Ascii);
        assert!(!config.redraw);
        assert!(out.contains("ok"));
    }

    #[test]
    fn redraw_off_draws_on_display_only() {
        let config = SessionConfig {
            glyphs: GlyphStyle::Ascii,
            redraw: false,
        };
        let (_, out, _) = run("hint\ndisplay\n", config);
        // Initial draw plus the explicit display
        assert_eq!(out.matches("8   r   n   b   q   k   b   n   r   8").count(), 2);
    }

    #[test]
    fn with_game_resumes_position() {
        let board = "8/8/8/8/8/8/1p6/R7".parse().unwrap();
        let game = Game::from_board(board, Color::Black);
        let mut output = Vec::new();
        let mut session = Session::with_game(
            Cursor::new(&b"move b2 a1\n"[..]),
            &mut output,
            SessionConfig::default(),
            game,
        );
        let outcome = session.run().unwrap();
        assert_eq!(
            outcome,
            Some(Outcome {
                winner: Color::White,
                termination: Termination::EmptyArmy,
            })
        );
        assert_eq!(session.game().board().get(Square::A1).map(|p| p.color()), Some(Color::Black));
        drop(session);
        assert!(String::from_utf8(output).unwrap().contains("White wins!"));
    }

    fn resume(game: Game) -> (Option<Outcome>, String) {
        let mut output = Vec::new();
        let mut session =
            Session::with_game(Cursor::new(&b""[..]), &mut output, SessionConfig::default(), game);
        let outcome = session.run().unwrap();
        drop(session);
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn finished_by_resignation_reports_quit() {
        let mut game = Game::new();
        game.resign();
        let (outcome, out) = resume(game);
        assert_eq!(
            outcome,
            Some(Outcome {
                winner: Color::Black,
                termination: Termination::Resignation,
            })
        );
        assert_eq!(out.lines().last(), Some("White quits. Black wins!"));
        assert!(!out.contains("no valid moves"));
        assert!(!out.contains(PROMPT));
    }

    #[test]
    fn finished_by_empty_army_reports_winner() {
        let board = "8/8/8/8/8/8/1p6/R7".parse().unwrap();
        let mut game = Game::from_board(board, Color::Black);
        game.play(Move::new(Square::B2, Square::A1)).unwrap();
        let (outcome, out) = resume(game);
        assert_eq!(
            outcome,
            Some(Outcome {
                winner: Color::White,
                termination: Termination::EmptyArmy,
            })
        );
        assert_eq!(out.lines().last(), Some("White wins!"));
        assert!(!out.contains("no valid moves"));
    }
}
