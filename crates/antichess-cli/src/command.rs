//! Player command parsing.

use antichess_core::Move;

use crate::error::CommandError;
use crate::notation::parse_move;
use crate::render::GlyphStyle;

/// A runtime-adjustable session setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// `set glyphs unicode|ascii`
    Glyphs(GlyphStyle),
    /// `set redraw on|off`: draw the board before every prompt.
    Redraw(bool),
}

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `move A2 A4` -- play a move.
    Move(Move),
    /// `display` -- draw the board.
    Display,
    /// `hint` -- list every legal move.
    Hint,
    /// `quit` -- concede the game.
    Quit,
    /// `set <name> <value>` -- change a session setting.
    Set(Setting),
    /// `help` -- list the commands.
    Help,
    /// Anything else.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`]. Case-insensitive.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim().to_lowercase();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line.as_str(), ""),
    };

    match word {
        "move" if !rest.is_empty() => parse_move(rest).map(Command::Move),
        "display" if rest.is_empty() => Ok(Command::Display),
        "hint" if rest.is_empty() => Ok(Command::Hint),
        "quit" if rest.is_empty() => Ok(Command::Quit),
        "help" if rest.is_empty() => Ok(Command::Help),
        "set" => parse_setting(rest).map(Command::Set),
        _ => Ok(Command::Unknown(line.clone())),
    }
}

/// Parse the arguments of `set`.
fn parse_setting(args: &str) -> Result<Setting, CommandError> {
    let mut tokens = args.split_whitespace();
    let name = tokens.next().unwrap_or_default();
    let value = tokens.next().ok_or_else(|| CommandError::MissingSettingValue {
        name: name.to_string(),
    })?;
    let invalid = || CommandError::InvalidSettingValue {
        name: name.to_string(),
        value: value.to_string(),
    };

    match name {
        "glyphs" => match value {
            "unicode" => Ok(Setting::Glyphs(GlyphStyle::Unicode)),
            "ascii" => Ok(Setting::Glyphs(GlyphStyle::Ascii)),
            _ => Err(invalid()),
        },
        "redraw" => match value {
            "on" => Ok(Setting::Redraw(true)),
            "off" => Ok(Setting::Redraw(false)),
            _ => Err(invalid()),
        },
        _ => Err(CommandError::UnknownSetting {
            name: name.to_string(),
        }),
    }
}
