//! Chess rules engine: board state, move legality, and position classification.
//!
//! Supports the full legality algorithm including castling, en passant, and
//! promotion, plus terminal-state detection (checkmate/stalemate) by
//! exhaustive legal-move enumeration. Move search and notation formats (FEN,
//! PGN) are out of scope; the intended caller is an interactive front end.
//!
//! # Example
//! ```
//! use chess_rules::board::{Game, MoveOutcome, Square};
//!
//! let mut game = Game::new();
//! let outcome = game
//!     .try_move(Square(6, 4), Square(4, 4), None)
//!     .expect("starting position has both kings");
//! assert!(matches!(outcome, MoveOutcome::Applied(_)));
//! ```

mod apply;
mod attacks;
mod builder;
mod classify;
mod error;
mod game;
mod geometry;
mod legality;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{RulesError, SquareError};
pub use game::Game;
pub use state::Board;
pub use types::{CastleSide, CastlingRights, Color, GameStatus, MoveOutcome, Piece, Square};
