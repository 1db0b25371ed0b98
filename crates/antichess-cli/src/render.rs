//! Text rendering of the board.

use std::fmt;

use antichess_core::{Board, Color, Piece, PieceKind, Square};

/// How pieces and empty squares are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// Chess symbols, `·` and `□` for empty squares.
    #[default]
    Unicode,
    /// Placement letters, `.` and `#` for empty squares.
    Ascii,
}

impl GlyphStyle {
    fn piece(self, piece: Piece) -> char {
        match self {
            GlyphStyle::Ascii => piece.letter(),
            GlyphStyle::Unicode => match (piece.color(), piece.kind()) {
                (Color::White, PieceKind::Pawn) => '♙',
                (Color::White, PieceKind::Knight) => '♘',
                (Color::White, PieceKind::Bishop) => '♗',
                (Color::White, PieceKind::Rook) => '♖',
                (Color::White, PieceKind::Queen) => '♕',
                (Color::White, PieceKind::King) => '♔',
                (Color::Black, PieceKind::Pawn) => '♟',
                (Color::Black, PieceKind::Knight) => '♞',
                (Color::Black, PieceKind::Bishop) => '♝',
                (Color::Black, PieceKind::Rook) => '♜',
                (Color::Black, PieceKind::Queen) => '♛',
                (Color::Black, PieceKind::King) => '♚',
            },
        }
    }

    fn empty(self, sq: Square) -> char {
        let even = (sq.row() + sq.col()) % 2 == 0;
        match (self, even) {
            (GlyphStyle::Unicode, true) => '·',
            (GlyphStyle::Unicode, false) => '□',
            (GlyphStyle::Ascii, true) => '.',
            (GlyphStyle::Ascii, false) => '#',
        }
    }
}

const FILE_HEADER: &str = "   A   B   C   D   E   F   G   H";

/// Wrapper for drawing a board as an 8x8 grid, rank 8 at the top.
pub struct BoardView<'a> {
    board: &'a Board,
    style: GlyphStyle,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, style: GlyphStyle) -> Self {
        Self { board, style }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILE_HEADER}")?;
        for row in (0u8..8).rev() {
            write!(f, "{}  ", row + 1)?;
            for sq in (0u8..8).filter_map(|col| Square::new(row, col)) {
                let c = match self.board.get(sq) {
                    Some(piece) => self.style.piece(piece),
                    None => self.style.empty(sq),
                };
                write!(f, " {c}  ")?;
            }
            writeln!(f, " {}", row + 1)?;
        }
        write!(f, "{FILE_HEADER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_unicode() {
        let board = Board::new_standard_setup();
        let output = BoardView::new(&board, GlyphStyle::Unicode).to_string();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], FILE_HEADER);
        assert_eq!(lines[9], FILE_HEADER);
        assert_eq!(lines[1], "8   ♜   ♞   ♝   ♛   ♚   ♝   ♞   ♜   8");
        assert_eq!(lines[8], "1   ♖   ♘   ♗   ♕   ♔   ♗   ♘   ♖   1");
        assert_eq!(lines[7], "2   ♙   ♙   ♙   ♙   ♙   ♙   ♙   ♙   2");
    }

    #[test]
    fn empty_squares_alternate() {
        let board = Board::new_standard_setup();
        let output = BoardView::new(&board, GlyphStyle::Unicode).to_string();
        let lines: Vec<&str> = output.lines().collect();
        // Rank 3 is row 2: A3 has even parity
        assert_eq!(lines[6], "3   ·   □   ·   □   ·   □   ·   □   3");
        assert_eq!(lines[5], "4   □   ·   □   ·   □   ·   □   ·   4");
    }

    #[test]
    fn ascii_style() {
        let board: Board = "8/8/8/8/8/8/8/R3k3".parse().unwrap();
        let output = BoardView::new(&board, GlyphStyle::Ascii).to_string();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[8], "1   R   #   .   #   k   #   .   #   1");
    }
}
