//! The game session aggregate and its single move entry point.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::RulesError;
use super::state::Board;
use super::types::{CastlingRights, Color, GameStatus, MoveOutcome, Piece, Square};

/// A chess game session: board plus all auxiliary move state.
///
/// Board, castling rights, en-passant target, and turn form one mutable unit
/// owned by the session; nothing here is global. All mutation goes through
/// [`try_move`](Game::try_move).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) turn: Color,
}

impl Game {
    /// Start a game from the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            turn: Color::White,
        }
    }

    /// Read-only snapshot of the current board, for rendering layers.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The square a pawn skipped on the immediately preceding double
    /// advance, if any.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// The castling rights still available.
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Attempt to play a move from `from` to `to` for the side to move.
    ///
    /// This is the single entry point per user-confirmed move attempt. It
    /// runs legality (or castling validation), then application, then
    /// classification of the resulting position for the opponent. A promoting
    /// pawn uses `promotion` as its replacement kind, defaulting to a queen.
    ///
    /// An illegal move is a normal negative result, reported as
    /// [`MoveOutcome::Rejected`] with no state mutated; the caller re-prompts.
    /// `Err` surfaces only a kingless-board invariant violation, which is
    /// fatal to the session.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveOutcome, RulesError> {
        if let Some(side) = self.validate_castling(from, to) {
            self.apply_castle(side);
        } else if self.is_legal(from, to)? {
            self.apply_move(from, to, promotion);
        } else {
            #[cfg(feature = "logging")]
            log::debug!("rejected {} -> {} for {}", from, to, self.turn);
            return Ok(MoveOutcome::Rejected);
        }

        self.turn = self.turn.opponent();
        let status = self.classify()?;

        #[cfg(feature = "logging")]
        log::debug!("applied {} -> {}, position now {}", from, to, status);

        Ok(MoveOutcome::Applied(status))
    }

    /// Classify the current position for the side to move, without playing
    /// anything.
    pub fn status(&self) -> Result<GameStatus, RulesError> {
        self.classify()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
