//! Knight geometry.

use crate::square::Square;

use super::delta;

/// Whether `to` is a knight's jump away from `from`. Knights ignore blockers.
pub(super) fn knight_reaches(from: Square, to: Square) -> bool {
    let (drow, dcol) = delta(from, to);
    matches!((drow.abs(), dcol.abs()), (1, 2) | (2, 1))
}
