//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules
//! engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (row, column) board coordinates
//! - `CastlingRights` and `CastleSide` - castling state
//! - `GameStatus` and `MoveOutcome` - derived position classification

mod castling;
mod piece;
mod square;
mod status;

// Re-export all public types
pub use castling::{CastleSide, CastlingRights};
pub use piece::{Color, Piece};
pub use square::Square;
pub use status::{GameStatus, MoveOutcome};

// Re-export internal utilities
pub(crate) use piece::PROMOTION_PIECES;
