//! Position classification: check, checkmate, stalemate, or ongoing.

use super::error::RulesError;
use super::game::Game;
use super::types::{GameStatus, Square};

impl Game {
    /// Classify the current position for the side to move.
    ///
    /// Checkmate iff in check with no legal move; stalemate iff not in check
    /// with no legal move; check iff in check with a legal move; otherwise
    /// ongoing. A pure function of the session state: re-running it without
    /// mutation yields the same answer.
    pub(crate) fn classify(&self) -> Result<GameStatus, RulesError> {
        let in_check = self.board.in_check(self.turn)?;
        let has_move = self.has_legal_move()?;

        Ok(match (in_check, has_move) {
            (true, false) => GameStatus::Checkmate(self.turn),
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check(self.turn),
            (false, true) => GameStatus::Ongoing,
        })
    }

    /// Test whether the side to move has any legal move at all.
    ///
    /// Enumerates every origin holding a mover's piece against all 64
    /// destinations, short-circuiting on the first legal move. This is the
    /// dominant cost of classification; acceptable for one interactive game,
    /// not for bulk analysis.
    fn has_legal_move(&self) -> Result<bool, RulesError> {
        for row in 0..8 {
            for col in 0..8 {
                let from = Square(row, col);
                if self.board.color_on(from) != Some(self.turn) {
                    continue;
                }
                for to_row in 0..8 {
                    for to_col in 0..8 {
                        let to = Square(to_row, to_col);
                        if self.is_legal(from, to)? || self.validate_castling(from, to).is_some() {
                            return Ok(true);
                        }
                    }
                }
            }
        }
        Ok(false)
    }
}
