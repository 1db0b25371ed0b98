//! Move notation typed by players: two squares such as `A2 A4`.

use antichess_core::{Move, Square};

use crate::error::CommandError;

/// Parse `"<from> <to>"`, case-insensitive, squares separated by whitespace.
pub fn parse_move(text: &str) -> Result<Move, CommandError> {
    let malformed = || CommandError::MalformedMove {
        input: text.to_string(),
    };

    let mut tokens = text.split_whitespace();
    let (Some(from), Some(to), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };

    let from = Square::from_algebraic(from).ok_or_else(malformed)?;
    let to = Square::from_algebraic(to).ok_or_else(malformed)?;
    Ok(Move::new(from, to))
}
