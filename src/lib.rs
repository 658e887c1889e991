pub mod board;

pub use board::{
    Board, CastleSide, CastlingRights, Color, Game, GameStatus, MoveOutcome, Piece,
    PositionBuilder, RulesError, Square, SquareError,
};
