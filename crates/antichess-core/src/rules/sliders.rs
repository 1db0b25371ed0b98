//! Sliding piece (bishop, rook, queen) geometry and path clearance.

use crate::board::Board;
use crate::square::Square;

use super::delta;

/// Whether every square strictly between `from` and `to` is empty.
///
/// `to` must lie on a rank, file, or diagonal through `from`.
pub(super) fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (drow, dcol) = delta(from, to);
    let (step_row, step_col) = (drow.signum(), dcol.signum());
    if (step_row, step_col) == (0, 0) {
        return true;
    }

    let mut current = from;
    loop {
        let Some(next) = current.offset(step_row, step_col) else {
            return false;
        };
        if next == to {
            return true;
        }
        if board.is_occupied(next) {
            return false;
        }
        current = next;
    }
}

/// Bishop: same diagonal, open path.
pub(super) fn bishop_reaches(board: &Board, from: Square, to: Square) -> bool {
    let (drow, dcol) = delta(from, to);
    drow != 0 && drow.abs() == dcol.abs() && path_clear(board, from, to)
}

/// Rook: same row or column, open path.
pub(super) fn rook_reaches(board: &Board, from: Square, to: Square) -> bool {
    let (drow, dcol) = delta(from, to);
    (drow == 0) != (dcol == 0) && path_clear(board, from, to)
}

/// Queen: rook or bishop geometry.
pub(super) fn queen_reaches(board: &Board, from: Square, to: Square) -> bool {
    rook_reaches(board, from, to) || bishop_reaches(board, from, to)
}
