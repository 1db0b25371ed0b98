//! Turn driver for losing chess: command parsing, rendering, and the game loop.

pub mod command;
pub mod error;
pub mod game;
pub mod notation;
pub mod render;
pub mod session;

pub use command::{Command, Setting, parse_command};
pub use error::{CommandError, GameError};
pub use game::{Game, Outcome, Termination};
pub use notation::parse_move;
pub use render::{BoardView, GlyphStyle};
pub use session::{Session, SessionConfig};
