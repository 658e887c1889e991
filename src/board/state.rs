//! Board representation: an 8x8 mailbox of optional pieces.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Color, Piece, Square};

/// The 8x8 board, mapping every square to an optional piece.
///
/// The board is the sole source of truth for piece location. It is `Copy`:
/// scratch copies for self-check simulation are whole-board copies (64 cells)
/// rather than mutate-and-revert, so early returns can never leave a
/// half-reverted position behind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// Create the standard starting position: White on rows 6-7, Black on
    /// rows 0-1.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, &piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(7, col), Color::White, piece);
            board.set_piece(Square(0, col), Color::Black, piece);
            board.set_piece(Square(6, col), Color::White, Piece::Pawn);
            board.set_piece(Square(1, col), Color::Black, Piece::Pawn);
        }
        board
    }

    /// Create a board with no pieces on it.
    #[must_use]
    pub(crate) const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Get the piece and color on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.row()][sq.col()]
    }

    /// Get just the piece kind on a square (without color)
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place a piece, replacing whatever occupied the square.
    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.row()][sq.col()] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.row()][sq.col()] = None;
    }

    /// Relocate the piece on `from` to `to`, clearing `from`.
    ///
    /// Anything standing on `to` is overwritten (a capture).
    #[inline]
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        self.squares[to.row()][to.col()] = self.squares[from.row()][from.col()].take();
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// ASCII diagram from White's perspective, Black at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                match self.squares[row][col] {
                    Some((color, piece)) => write!(f, " {}", piece.to_symbol(color))?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
