//! Attack detection: is a square attacked by a given side?

use super::error::RulesError;
use super::state::Board;
use super::types::{Color, Piece, Square};

impl Board {
    /// Test whether `square` is attacked by any piece of `by_color`.
    ///
    /// Scans every square and tests each attacker's shape with the query
    /// square as destination, path-cleared for sliders. Short-circuits on the
    /// first attacker found; which piece attacks is irrelevant.
    pub fn is_attacked(&self, square: Square, by_color: Color) -> bool {
        for row in 0..8 {
            for col in 0..8 {
                let from = Square(row, col);
                let Some((color, kind)) = self.piece_at(from) else {
                    continue;
                };
                if color != by_color {
                    continue;
                }

                let reaches = match kind {
                    // Pawns attack diagonally regardless of occupancy and
                    // never attack along their forward-move shape
                    Piece::Pawn => Board::pawn_attacks(from, by_color, square),
                    Piece::Knight | Piece::King => {
                        self.shape_ok(kind, from, square, by_color, None)
                    }
                    Piece::Bishop | Piece::Rook | Piece::Queen => {
                        self.shape_ok(kind, from, square, by_color, None)
                            && self.clear_path(from, square)
                    }
                };
                if reaches {
                    return true;
                }
            }
        }
        false
    }

    /// Locate the unique king of `color`.
    ///
    /// A missing king never occurs in a reachable game state; it signals a
    /// caller bug or a corrupted board and is fatal to the session.
    pub fn find_king(&self, color: Color) -> Result<Square, RulesError> {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if self.piece_at(sq) == Some((color, Piece::King)) {
                    return Ok(sq);
                }
            }
        }
        Err(RulesError::KingMissing { color })
    }

    /// Test whether `color`'s king is currently attacked.
    pub fn in_check(&self, color: Color) -> Result<bool, RulesError> {
        let king_sq = self.find_king(color)?;
        Ok(self.is_attacked(king_sq, color.opponent()))
    }
}
