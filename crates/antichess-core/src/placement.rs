//! Piece-placement notation (the first field of a FEN string) for [`Board`].

use std::str::FromStr;

use crate::board::Board;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::square::Square;

/// Placement string of the standard starting position.
pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Board, PlacementError> {
        let ranks: Vec<&str> = s.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // Ranks are written from 8 down to 1
            let row = 7 - rank_index as u8;
            let mut col: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as u8;
                } else {
                    let piece =
                        Piece::from_letter(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;
                    let sq = Square::new(row, col).ok_or(PlacementError::BadRankLength {
                        rank_index,
                        length: col as usize + 1,
                    })?;
                    board.place(sq, piece);
                    col += 1;
                }
            }

            if col != 8 {
                return Err(PlacementError::BadRankLength {
                    rank_index,
                    length: col as usize,
                });
            }
        }

        Ok(board)
    }
}

impl Board {
    /// Serialize the board as a placement string.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in (0u8..8).rev() {
            let mut empty = 0u8;
            for col in 0u8..8 {
                match Square::new(row, col).and_then(|sq| self.get(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        out.push(piece.letter());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
            }
            if row > 0 {
                out.push('/');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::STANDARD_PLACEMENT;
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::PlacementError;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn standard_placement_matches_setup() {
        let parsed: Board = STANDARD_PLACEMENT.parse().unwrap();
        assert_eq!(parsed, Board::new_standard_setup());
        assert_eq!(Board::new_standard_setup().placement(), STANDARD_PLACEMENT);
    }

    #[test]
    fn kingless_positions_accepted() {
        let board: Board = "8/8/8/3p4/8/8/8/R7".parse().unwrap();
        assert_eq!(board.get(Square::D5), Some(Piece::BLACK_PAWN));
        assert_eq!(board.get(Square::A1), Some(Piece::WHITE_ROOK));
        assert_eq!(board.piece_count(Color::White), 1);
        assert_eq!(board.placement(), "8/8/8/3p4/8/8/8/R7");
    }

    #[test]
    fn empty_board_placement() {
        assert_eq!(Board::empty().placement(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn debug_shows_placement() {
        let board: Board = "8/8/8/8/8/8/8/7K".parse().unwrap();
        assert_eq!(format!("{board:?}"), "Board(\"8/8/8/8/8/8/8/7K\")");
    }

    #[test]
    fn wrong_rank_count() {
        let err = "8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::WrongRankCount { found: 3 });
    }

    #[test]
    fn bad_rank_length() {
        let err = "9/8/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert!(matches!(err, PlacementError::InvalidPieceChar { character: '9' }));
        let err = "7/8/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::BadRankLength { rank_index: 0, length: 7 });
        let err = "8p/8/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::BadRankLength { rank_index: 0, length: 9 });
    }

    #[test]
    fn invalid_piece_char() {
        let err = "8/8/8/8/8/8/8/7X".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::InvalidPieceChar { character: 'X' });
    }
}
