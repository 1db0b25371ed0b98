//! King geometry.

use crate::square::Square;

use super::delta;

/// Whether `to` is adjacent to `from`. There is no check in this variant, so
/// the king may step onto attacked squares.
pub(super) fn king_reaches(from: Square, to: Square) -> bool {
    let (drow, dcol) = delta(from, to);
    from != to && drow.abs() <= 1 && dcol.abs() <= 1
}

#[cfg(test)]
mod tests {
    use super::king_reaches;
    use crate::square::Square;

    #[test]
    fn eight_neighbours() {
        assert_eq!(Square::all().filter(|&to| king_reaches(Square::E4, to)).count(), 8);
        assert_eq!(Square::all().filter(|&to| king_reaches(Square::A1, to)).count(), 3);
    }

    #[test]
    fn not_two_away() {
        assert!(!king_reaches(Square::E1, Square::G1));
        assert!(!king_reaches(Square::E1, Square::E1));
    }
}
