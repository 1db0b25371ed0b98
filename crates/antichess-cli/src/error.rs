//! Driver errors.

use antichess_core::IllegalMove;

/// Errors from parsing one line of player input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The move text is not two squares such as `A2 B4`.
    #[error("Invalid move format. Use 'A2 B4' format.")]
    MalformedMove {
        /// The text that failed to parse.
        input: String,
    },

    /// `set` named a setting that does not exist.
    #[error("unknown setting: {name}")]
    UnknownSetting {
        /// The setting name as typed.
        name: String,
    },

    /// `set` was given no value.
    #[error("missing value for setting: {name}")]
    MissingSettingValue {
        /// The setting name.
        name: String,
    },

    /// `set` was given a value the setting does not accept.
    #[error("invalid value for {name}: {value}")]
    InvalidSettingValue {
        /// The setting name.
        name: String,
        /// The rejected value.
        value: String,
    },
}

/// Errors from playing a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The rules engine refused the move.
    #[error("move rejected: {source}")]
    Rejected {
        /// Why the move was refused.
        #[from]
        source: IllegalMove,
    },

    /// A move was offered after the game ended.
    #[error("the game is already over")]
    Finished,

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
