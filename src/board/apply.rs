//! Move application: the only place the authoritative board is mutated.

use super::game::Game;
use super::types::{CastleSide, Piece, Square, PROMOTION_PIECES};

impl Game {
    /// Commit an already-validated single-piece move to the live board,
    /// maintaining castling rights, the en-passant target, and promotion.
    ///
    /// Performs no legality checks; callers must gate through
    /// [`is_legal`](Game::is_legal) first. The result of applying an illegal
    /// move is undefined.
    pub(crate) fn apply_move(&mut self, from: Square, to: Square, promotion: Option<Piece>) {
        let (color, kind) = self
            .board
            .piece_at(from)
            .expect("apply_move 'from' empty");

        self.board.relocate(from, to);

        match kind {
            Piece::King => self.castling_rights.remove_all(color),
            Piece::Rook => {
                if from == Square(color.back_row(), CastleSide::King.rook_col()) {
                    self.castling_rights.remove(color, CastleSide::King);
                } else if from == Square(color.back_row(), CastleSide::Queen.rook_col()) {
                    self.castling_rights.remove(color, CastleSide::Queen);
                }
            }
            _ => {}
        }

        // En-passant capture: the victim stands beside the mover, on the
        // origin row and destination column.
        if kind == Piece::Pawn
            && self.en_passant_target == Some(to)
            && (from.col() as isize - to.col() as isize).abs() == 1
        {
            self.board.clear_square(Square(from.row(), to.col()));
        }

        self.en_passant_target = None;
        if kind == Piece::Pawn
            && from.row() == color.pawn_start_row()
            && (from.row() as isize - to.row() as isize).abs() == 2
        {
            let skipped_row = (from.row() as isize + color.pawn_direction()) as usize;
            self.en_passant_target = Some(Square(skipped_row, from.col()));
        }

        if kind == Piece::Pawn && to.row() == color.promotion_row() {
            self.board.set_piece(to, color, promotion_kind(promotion));
        }
    }

    /// Commit an already-validated castle: king and rook relocated as one
    /// atomic transaction, counted as a single turn.
    pub(crate) fn apply_castle(&mut self, side: CastleSide) {
        let back = self.turn.back_row();
        self.board
            .relocate(Square(back, 4), Square(back, side.king_dest_col()));
        self.board.relocate(
            Square(back, side.rook_col()),
            Square(back, side.rook_dest_col()),
        );
        self.castling_rights.remove_all(self.turn);
        self.en_passant_target = None;
    }
}

/// Map the caller's promotion choice to a replacement kind, defaulting to a
/// queen when none is supplied (or the choice is not a promotable kind).
fn promotion_kind(choice: Option<Piece>) -> Piece {
    match choice {
        Some(piece) if PROMOTION_PIECES.contains(&piece) => piece,
        _ => Piece::Queen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_kind_default_and_invalid() {
        assert_eq!(promotion_kind(None), Piece::Queen);
        assert_eq!(promotion_kind(Some(Piece::Knight)), Piece::Knight);
        assert_eq!(promotion_kind(Some(Piece::Pawn)), Piece::Queen);
        assert_eq!(promotion_kind(Some(Piece::King)), Piece::Queen);
    }
}
