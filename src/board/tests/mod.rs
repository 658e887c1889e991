//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `legality.rs` - Ownership, shape, path, and self-check filtering
//! - `castling.rs` - Castling preconditions and application
//! - `special_moves.rs` - En passant and promotion
//! - `endgames.rs` - Check, checkmate, and stalemate classification
//! - `proptest.rs` - Property-based tests

mod castling;
mod legality;
