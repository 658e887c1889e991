//! Derived game status and move outcome types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Classification of a position for the side to move.
///
/// Recomputed after every committed move, never persisted across moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Normal play continues
    Ongoing,
    /// The given side is in check but has a legal move
    Check(Color),
    /// The given side is in check with no legal move; it has lost
    Checkmate(Color),
    /// The side to move is not in check but has no legal move; draw
    Stalemate,
}

impl GameStatus {
    /// Returns true if no further moves can be played
    #[inline]
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate(color) => write!(f, "checkmate, {color} loses"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Result of a move attempt through [`Game::try_move`](crate::board::Game::try_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    /// The move was legal and has been committed; carries the status of the
    /// position now facing the opponent
    Applied(GameStatus),
    /// The move failed every legality and castling check; nothing changed
    Rejected,
}
