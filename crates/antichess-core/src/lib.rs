//! Core losing-chess types: board representation and the rules engine.

mod board;
mod chess_move;
mod color;
mod error;
mod piece;
mod piece_kind;
mod placement;
mod rules;
mod square;

pub use board::Board;
pub use chess_move::Move;
pub use color::Color;
pub use error::{IllegalMove, PlacementError};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STANDARD_PLACEMENT;
pub use rules::RulesEngine;
pub use square::Square;
