//! Error types for board and rules operations.

use std::fmt;

use super::types::Color;

/// Error type for square coordinate failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for violated board invariants.
///
/// These indicate a corrupted board state reachable only through a caller
/// bug, never through play. They are fatal to the current game session:
/// classification must not continue on a board without both kings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// No king of the given color is on the board
    KingMissing { color: Color },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::KingMissing { color } => {
                write!(f, "No {color} king on the board")
            }
        }
    }
}

impl std::error::Error for RulesError {}
