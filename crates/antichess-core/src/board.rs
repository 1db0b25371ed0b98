//! The board: sole owner of piece placement.

use std::fmt;

use tracing::trace;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// An 8x8 grid holding at most one piece per square.
///
/// Any placement is accepted. Positions without kings or with unusual piece
/// counts are normal here, since every piece (kings included) can be captured.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square, indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn new_standard_setup() -> Board {
        let mut board = Board::empty();
        for (col, kind) in (0u8..).zip(PieceKind::BACK_RANK) {
            for color in Color::ALL {
                let back_row = match color {
                    Color::White => 0,
                    Color::Black => 7,
                };
                if let Some(sq) = Square::new(back_row, col) {
                    board.place(sq, Piece::new(kind, color));
                }
                if let Some(sq) = Square::new(color.pawn_start_row(), col) {
                    board.place(sq, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Put `piece` on `sq`, overwriting any occupant.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Empty `sq`, returning whatever was there.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Move the occupant of `from` onto `to` and empty `from`.
    ///
    /// No legality check is made. Returns the piece previously on `to`, which
    /// is the captured piece when the move was a capture.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.squares[from.index()].take();
        let captured = std::mem::replace(&mut self.squares[to.index()], moving);
        trace!(%from, %to, ?moving, ?captured, "relocate");
        captured
    }

    /// Iterate over the squares held by `color` in row-major order.
    pub fn occupied_squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Some(piece) if piece.color() == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Number of pieces `color` has left.
    pub fn piece_count(&self, color: Color) -> usize {
        self.occupied_squares_of(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_standard_setup()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}
