//! Move legality, mandatory capture, move enumeration, and terminal state.
//!
//! Every operation is a pure function of a [`Board`] and an explicit acting
//! color. Whose turn it is lives with the caller.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::IllegalMove;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::king_reaches;
use self::knights::knight_reaches;
use self::pawns::pawn_reaches;
use self::sliders::{bishop_reaches, queen_reaches, rook_reaches};

/// Row and column offset from `from` to `to`.
#[inline]
fn delta(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

/// The losing-chess rules engine.
///
/// Geometric legality ([`is_legal`](Self::is_legal)) and the mandatory-capture
/// gate ([`validate`](Self::validate)) are separate steps:
/// [`legal_moves`](Self::legal_moves) lists every geometric move even when a
/// capture is forced, and [`permitted_moves`](Self::permitted_moves) applies
/// the gate.
pub struct RulesEngine;

impl RulesEngine {
    /// Whether `color` may move the piece on `from` to `to`, ignoring the
    /// mandatory-capture rule.
    ///
    /// Off-board coordinates cannot form a [`Square`], so they never reach
    /// this check.
    pub fn is_legal(board: &Board, from: Square, to: Square, color: Color) -> bool {
        let Some(piece) = board.get(from) else {
            return false;
        };
        if piece.color() != color {
            return false;
        }
        if board.get(to).is_some_and(|target| target.color() == color) {
            return false;
        }

        match piece.kind() {
            PieceKind::Pawn => pawn_reaches(board, from, to, color),
            PieceKind::Knight => knight_reaches(from, to),
            PieceKind::Bishop => bishop_reaches(board, from, to),
            PieceKind::Rook => rook_reaches(board, from, to),
            PieceKind::Queen => queen_reaches(board, from, to),
            PieceKind::King => king_reaches(from, to),
        }
    }

    /// Whether `mv` is legal for `color` and lands on an enemy piece.
    pub fn is_capture(board: &Board, mv: Move, color: Color) -> bool {
        board.get(mv.to).is_some_and(|target| target.color() != color)
            && Self::is_legal(board, mv.from, mv.to, color)
    }

    /// Whether `color` has at least one legal capturing move.
    pub fn has_any_capture(board: &Board, color: Color) -> bool {
        board.occupied_squares_of(color).any(|(from, _)| {
            board
                .occupied_squares_of(color.flip())
                .any(|(to, _)| Self::is_legal(board, from, to, color))
        })
    }

    /// Every geometrically legal move for `color`, ordered row-major by
    /// origin and then by destination. Not filtered by mandatory capture.
    pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
        board
            .occupied_squares_of(color)
            .flat_map(|(from, _)| {
                Square::all()
                    .filter(move |&to| Self::is_legal(board, from, to, color))
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// The capturing subset of [`legal_moves`](Self::legal_moves), same order.
    pub fn capturing_moves(board: &Board, color: Color) -> Vec<Move> {
        Self::legal_moves(board, color)
            .into_iter()
            .filter(|mv| board.is_occupied(mv.to))
            .collect()
    }

    /// The moves `color` may actually play this turn: only captures when any
    /// capture exists, otherwise every legal move.
    pub fn permitted_moves(board: &Board, color: Color) -> Vec<Move> {
        let moves = Self::legal_moves(board, color);
        if moves.iter().any(|mv| board.is_occupied(mv.to)) {
            moves.into_iter().filter(|mv| board.is_occupied(mv.to)).collect()
        } else {
            moves
        }
    }

    /// Commit-time check: geometric legality, then the mandatory-capture rule.
    pub fn validate(board: &Board, mv: Move, color: Color) -> Result<(), IllegalMove> {
        if !Self::is_legal(board, mv.from, mv.to, color) {
            debug!(%mv, %color, "rejected: not legal");
            return Err(IllegalMove::NotLegal);
        }
        if !board.is_occupied(mv.to) && Self::has_any_capture(board, color) {
            debug!(%mv, %color, "rejected: capture required");
            return Err(IllegalMove::CaptureRequired);
        }
        Ok(())
    }

    /// Whether `color` may play `mv` this turn.
    pub fn is_permitted(board: &Board, mv: Move, color: Color) -> bool {
        Self::validate(board, mv, color).is_ok()
    }

    /// The side whose army is empty, if any. Losing every piece wins.
    ///
    /// White is checked first; both armies cannot empty on the same move.
    pub fn winner(board: &Board) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| board.occupied_squares_of(color).next().is_none())
    }
}
