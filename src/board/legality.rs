//! Move legality: ownership, self-check filtering, shape, and castling
//! preconditions.

use super::error::RulesError;
use super::game::Game;
use super::types::{CastleSide, Piece, Square};

impl Game {
    /// Test whether moving the piece on `from` to `to` is legal for the side
    /// to move. Castling does not pass through here; see
    /// [`validate_castling`](Game::validate_castling).
    ///
    /// Checks run in order, each short-circuiting to `false`:
    /// 0. Both coordinates are on the board.
    /// 1. `from` holds a piece of the mover's color.
    /// 2. `to` is not occupied by the mover's own piece.
    /// 3. The move, simulated on a scratch board, does not leave the mover's
    ///    king attacked.
    /// 4. The piece's shape reaches `to`, with a clear path for sliders.
    pub(crate) fn is_legal(&self, from: Square, to: Square) -> Result<bool, RulesError> {
        // Out-of-range coordinates are rejected before any board lookup
        if from.row() > 7 || from.col() > 7 || to.row() > 7 || to.col() > 7 {
            return Ok(false);
        }
        let Some((color, kind)) = self.board.piece_at(from) else {
            return Ok(false);
        };
        if color != self.turn {
            return Ok(false);
        }

        if let Some((occupant, _)) = self.board.piece_at(to) {
            if occupant == self.turn {
                return Ok(false);
            }
        }

        // Self-check filter on a scratch copy. The plain relocation is enough
        // here: special-move side effects cannot un-attack the mover's king
        // except for en-passant, which is handled conservatively below.
        let mut scratch = self.board;
        scratch.relocate(from, to);
        if kind == Piece::Pawn
            && Some(to) == self.en_passant_target
            && (from.col() as isize - to.col() as isize).abs() == 1
        {
            scratch.clear_square(Square(from.row(), to.col()));
        }
        let king_sq = scratch.find_king(self.turn)?;
        if scratch.is_attacked(king_sq, self.turn.opponent()) {
            return Ok(false);
        }

        let shape = self
            .board
            .shape_ok(kind, from, to, color, self.en_passant_target);
        if !shape {
            return Ok(false);
        }
        if kind.is_slider() && !self.board.clear_path(from, to) {
            return Ok(false);
        }
        Ok(true)
    }

    /// Recognize a castling attempt and validate its preconditions.
    ///
    /// Only the four canonical pairs qualify: the king on its starting
    /// square moving two columns toward a rook. Preconditions:
    /// - the right for that side is intact (neither king nor rook has moved),
    /// - the rook still stands on its original square (a rook captured in
    ///   place must not leave a usable right behind),
    /// - every square strictly between king and rook is empty,
    /// - the king's start square, the square it crosses, and its destination
    ///   are all unattacked, probed by stepping a scratch king one square at
    ///   a time.
    pub(crate) fn validate_castling(&self, from: Square, to: Square) -> Option<CastleSide> {
        let back = self.turn.back_row();
        if from != Square(back, 4) {
            return None;
        }
        let side = if to == Square(back, 6) {
            CastleSide::King
        } else if to == Square(back, 2) {
            CastleSide::Queen
        } else {
            return None;
        };

        if !self.castling_rights.has(self.turn, side) {
            return None;
        }
        let rook_sq = Square(back, side.rook_col());
        if self.board.piece_at(rook_sq) != Some((self.turn, Piece::Rook)) {
            return None;
        }
        for &col in side.between_cols() {
            if !self.board.is_empty(Square(back, col)) {
                return None;
            }
        }

        let opponent = self.turn.opponent();
        let mut scratch = self.board;
        let mut king_sq = from;
        if scratch.is_attacked(king_sq, opponent) {
            return None;
        }
        for col in [side.rook_dest_col(), side.king_dest_col()] {
            let next = Square(back, col);
            scratch.relocate(king_sq, next);
            king_sq = next;
            if scratch.is_attacked(king_sq, opponent) {
                return None;
            }
        }

        Some(side)
    }
}
