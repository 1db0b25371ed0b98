//! Pawn geometry.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::delta;

/// Whether a pawn of `color` on `from` may move to `to`.
///
/// Straight steps need an empty destination; the double step also needs an
/// empty pass-through square and is only available from the start row.
/// Diagonal steps are captures only. No en passant, no promotion.
pub(super) fn pawn_reaches(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let dir = color.pawn_direction();
    let (drow, dcol) = delta(from, to);
    let target_occupied = board.is_occupied(to);

    if dcol == 0 && !target_occupied {
        if drow == dir {
            return true;
        }
        if drow == 2 * dir && from.row() == color.pawn_start_row() {
            return from
                .offset(dir, 0)
                .is_some_and(|mid| !board.is_occupied(mid));
        }
    }

    dcol.abs() == 1 && drow == dir && target_occupied
}
