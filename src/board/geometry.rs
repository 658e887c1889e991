//! Per-piece movement shapes and sliding-path obstruction.
//!
//! Shape tests answer "is the destination geometrically reachable by this
//! piece kind" and deliberately ignore king safety; the legality layer
//! combines them with the self-check filter. Castling is not king geometry
//! and is validated separately.

use super::state::Board;
use super::types::{Color, Piece, Square};

impl Board {
    /// Test whether `to` is geometrically reachable by a piece of `kind` and
    /// `color` standing on `from`.
    ///
    /// Pawn shapes fold in their occupancy conditions (forward moves need
    /// empty squares, diagonal steps need an enemy piece or the en-passant
    /// target); slider shapes are pure geometry and require a separate
    /// [`clear_path`](Board::clear_path) check.
    pub(crate) fn shape_ok(
        &self,
        kind: Piece,
        from: Square,
        to: Square,
        color: Color,
        en_passant: Option<Square>,
    ) -> bool {
        let dr = to.row() as isize - from.row() as isize;
        let dc = to.col() as isize - from.col() as isize;

        match kind {
            Piece::Pawn => self.pawn_shape_ok(from, to, color, en_passant),
            Piece::Rook => dr == 0 || dc == 0,
            Piece::Bishop => dr.abs() == dc.abs(),
            Piece::Queen => dr == 0 || dc == 0 || dr.abs() == dc.abs(),
            Piece::Knight => {
                (dr.abs() == 2 && dc.abs() == 1) || (dr.abs() == 1 && dc.abs() == 2)
            }
            Piece::King => dr.abs().max(dc.abs()) == 1,
        }
    }

    fn pawn_shape_ok(
        &self,
        from: Square,
        to: Square,
        color: Color,
        en_passant: Option<Square>,
    ) -> bool {
        let dir = color.pawn_direction();
        let dr = to.row() as isize - from.row() as isize;
        let dc = to.col() as isize - from.col() as isize;

        if dc == 0 {
            if !self.is_empty(to) {
                return false;
            }
            if dr == dir {
                return true;
            }
            // Double step from the home row, over an empty square
            if dr == 2 * dir && from.row() == color.pawn_start_row() {
                if let Some(between) = from.offset(dir, 0) {
                    return self.is_empty(between);
                }
            }
            false
        } else if dc.abs() == 1 && dr == dir {
            match self.piece_at(to) {
                Some((occupant, _)) => occupant != color,
                None => en_passant == Some(to),
            }
        } else {
            false
        }
    }

    /// The diagonal-capture shape alone, regardless of occupancy.
    ///
    /// A pawn attacks its two forward diagonals whether or not anything
    /// stands there, so attack detection must not reuse the move shape.
    pub(crate) fn pawn_attacks(from: Square, color: Color, target: Square) -> bool {
        let dr = target.row() as isize - from.row() as isize;
        let dc = target.col() as isize - from.col() as isize;
        dr == color.pawn_direction() && dc.abs() == 1
    }

    /// Walk the unit step vector from the square after `from` up to
    /// (excluding) `to`, failing if any intermediate square is occupied.
    ///
    /// Only meaningful for rook/bishop/queen moves whose shape already
    /// passed; knight and king moves have no intervening squares.
    pub(crate) fn clear_path(&self, from: Square, to: Square) -> bool {
        let dr = (to.row() as isize - from.row() as isize).signum();
        let dc = (to.col() as isize - from.col() as isize).signum();

        let mut current = from;
        loop {
            current = match current.offset(dr, dc) {
                Some(sq) => sq,
                None => return false,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }
}
