//! Tests for single-piece move legality.

use crate::board::{Color, Game, MoveOutcome, Piece, PositionBuilder, Square};

#[test]
fn test_empty_origin_is_illegal() {
    let game = Game::new();
    assert_eq!(game.is_legal(Square(4, 4), Square(3, 4)), Ok(false));
}

#[test]
fn test_out_of_range_coordinates_are_illegal() {
    let mut game = Game::new();
    assert_eq!(game.is_legal(Square(9, 0), Square(4, 0)), Ok(false));
    assert_eq!(game.is_legal(Square(6, 4), Square(6, 8)), Ok(false));
    assert_eq!(
        game.try_move(Square(6, 4), Square(8, 4), None).unwrap(),
        MoveOutcome::Rejected
    );
}

#[test]
fn test_cannot_move_opponent_piece() {
    let game = Game::new();
    // Black pawn e7-e5 while White is to move
    assert_eq!(game.is_legal(Square(1, 4), Square(3, 4)), Ok(false));
}

#[test]
fn test_cannot_capture_own_piece() {
    let game = Game::new();
    // Rook a1 onto own pawn a2
    assert_eq!(game.is_legal(Square(7, 0), Square(6, 0)), Ok(false));
}

#[test]
fn test_opening_pawn_and_knight_moves() {
    let game = Game::new();
    assert_eq!(game.is_legal(Square(6, 4), Square(5, 4)), Ok(true));
    assert_eq!(game.is_legal(Square(6, 4), Square(4, 4)), Ok(true));
    assert_eq!(game.is_legal(Square(7, 6), Square(5, 5)), Ok(true));
    assert_eq!(game.is_legal(Square(7, 6), Square(5, 7)), Ok(true));
}

#[test]
fn test_sliders_blocked_at_start() {
    let game = Game::new();
    // Rook, bishop, and queen are all walled in by their own pawns
    assert_eq!(game.is_legal(Square(7, 0), Square(4, 0)), Ok(false));
    assert_eq!(game.is_legal(Square(7, 2), Square(5, 4)), Ok(false));
    assert_eq!(game.is_legal(Square(7, 3), Square(4, 3)), Ok(false));
}

#[test]
fn test_path_obstruction_mid_board() {
    let game = PositionBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(4, 0), Color::White, Piece::Rook)
        .piece(Square(4, 3), Color::Black, Piece::Pawn)
        .build();

    // Rook can reach the blocker but not pass it
    assert_eq!(game.is_legal(Square(4, 0), Square(4, 3)), Ok(true));
    assert_eq!(game.is_legal(Square(4, 0), Square(4, 6)), Ok(false));
}

#[test]
fn test_pinned_piece_cannot_move() {
    // Bishop on e2 shields the white king from the e8 rook
    let game = PositionBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(6, 4), Color::White, Piece::Bishop)
        .piece(Square(0, 4), Color::Black, Piece::Rook)
        .piece(Square(0, 0), Color::Black, Piece::King)
        .build();

    assert_eq!(game.is_legal(Square(6, 4), Square(5, 3)), Ok(false));
    assert_eq!(game.is_legal(Square(6, 4), Square(4, 6)), Ok(false));
}

#[test]
fn test_king_must_leave_check() {
    let game = PositionBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(7, 0), Color::White, Piece::Rook)
        .piece(Square(4, 4), Color::Black, Piece::Rook)
        .piece(Square(0, 0), Color::Black, Piece::King)
        .build();

    // Rook moves that ignore the check are rejected
    assert_eq!(game.is_legal(Square(7, 0), Square(5, 0)), Ok(false));
    // Stepping the king off the file escapes
    assert_eq!(game.is_legal(Square(7, 4), Square(7, 3)), Ok(true));
    // The rook cannot reach the checking file in one move, nor stack onto
    // its own king
    assert_eq!(game.is_legal(Square(7, 0), Square(6, 0)), Ok(false));
    assert_eq!(game.is_legal(Square(7, 0), Square(7, 4)), Ok(false));
}

#[test]
fn test_king_cannot_step_into_attack() {
    let game = PositionBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 3), Color::Black, Piece::Rook)
        .piece(Square(0, 0), Color::Black, Piece::King)
        .build();

    assert_eq!(game.is_legal(Square(7, 4), Square(7, 3)), Ok(false));
    assert_eq!(game.is_legal(Square(7, 4), Square(6, 3)), Ok(false));
    assert_eq!(game.is_legal(Square(7, 4), Square(6, 4)), Ok(true));
}

#[test]
fn test_rejected_move_mutates_nothing() {
    let mut game = Game::new();
    let before = game.clone();

    let outcome = game.try_move(Square(6, 4), Square(3, 4), None).unwrap();
    assert_eq!(outcome, MoveOutcome::Rejected);
    assert_eq!(game, before);
}

#[test]
fn test_turn_alternates_after_applied_move() {
    let mut game = Game::new();
    assert_eq!(game.turn(), Color::White);

    game.try_move(Square(6, 4), Square(4, 4), None).unwrap();
    assert_eq!(game.turn(), Color::Black);

    game.try_move(Square(1, 4), Square(3, 4), None).unwrap();
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_capture_of_enemy_piece() {
    let mut game = Game::new();
    game.try_move(Square(6, 4), Square(4, 4), None).unwrap(); // e4
    game.try_move(Square(1, 3), Square(3, 3), None).unwrap(); // d5

    let outcome = game.try_move(Square(4, 4), Square(3, 3), None).unwrap(); // exd5
    assert!(matches!(outcome, MoveOutcome::Applied(_)));
    assert_eq!(
        game.board().piece_at(Square(3, 3)),
        Some((Color::White, Piece::Pawn))
    );
}
