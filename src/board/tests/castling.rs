//! Tests for castling validation and application.

use crate::board::{
    CastleSide, CastlingRights, Color, Game, MoveOutcome, Piece, PositionBuilder, Square,
};

/// White king and both rooks untouched, all rights intact; minimal black.
fn castling_ready() -> PositionBuilder {
    PositionBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(7, 0), Color::White, Piece::Rook)
        .piece(Square(7, 7), Color::White, Piece::Rook)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .castling(CastlingRights::all())
}

#[test]
fn test_kingside_castle_applies_both_pieces() {
    let mut game = castling_ready().build();

    let outcome = game.try_move(Square(7, 4), Square(7, 6), None).unwrap();
    assert!(matches!(outcome, MoveOutcome::Applied(_)));
    assert_eq!(
        game.board().piece_at(Square(7, 6)),
        Some((Color::White, Piece::King))
    );
    assert_eq!(
        game.board().piece_at(Square(7, 5)),
        Some((Color::White, Piece::Rook))
    );
    assert!(game.board().is_empty(Square(7, 4)));
    assert!(game.board().is_empty(Square(7, 7)));

    // One turn consumed, both White rights gone, Black rights intact
    assert_eq!(game.turn(), Color::Black);
    assert!(!game.castling_rights().has(Color::White, CastleSide::King));
    assert!(!game.castling_rights().has(Color::White, CastleSide::Queen));
    assert!(game.castling_rights().has(Color::Black, CastleSide::King));
}

#[test]
fn test_queenside_castle_applies_both_pieces() {
    let mut game = castling_ready().build();

    let outcome = game.try_move(Square(7, 4), Square(7, 2), None).unwrap();
    assert!(matches!(outcome, MoveOutcome::Applied(_)));
    assert_eq!(
        game.board().piece_at(Square(7, 2)),
        Some((Color::White, Piece::King))
    );
    assert_eq!(
        game.board().piece_at(Square(7, 3)),
        Some((Color::White, Piece::Rook))
    );
    assert!(game.board().is_empty(Square(7, 0)));
}

#[test]
fn test_castle_rejected_when_transit_square_occupied() {
    // Untouched king and king-side rook, but f1 is occupied
    let mut game = castling_ready()
        .piece(Square(7, 5), Color::White, Piece::Bishop)
        .build();

    let outcome = game.try_move(Square(7, 4), Square(7, 6), None).unwrap();
    assert_eq!(outcome, MoveOutcome::Rejected);
}

#[test]
fn test_queenside_rejected_when_b1_occupied() {
    // b1 sits between king and rook even though the king never crosses it
    let mut game = castling_ready()
        .piece(Square(7, 1), Color::White, Piece::Knight)
        .build();

    let outcome = game.try_move(Square(7, 4), Square(7, 2), None).unwrap();
    assert_eq!(outcome, MoveOutcome::Rejected);
}

#[test]
fn test_castle_rejected_after_king_moved() {
    let mut game = castling_ready().build();
    game.try_move(Square(7, 4), Square(6, 4), None).unwrap(); // Ke2
    game.try_move(Square(0, 4), Square(1, 4), None).unwrap();
    game.try_move(Square(6, 4), Square(7, 4), None).unwrap(); // Ke1
    game.try_move(Square(1, 4), Square(0, 4), None).unwrap();

    // King is back home but the right is spent forever
    let outcome = game.try_move(Square(7, 4), Square(7, 6), None).unwrap();
    assert_eq!(outcome, MoveOutcome::Rejected);
}

#[test]
fn test_castle_rejected_after_rook_moved() {
    let mut game = castling_ready().build();
    game.try_move(Square(7, 7), Square(6, 7), None).unwrap(); // Rh2
    game.try_move(Square(0, 4), Square(1, 4), None).unwrap();
    game.try_move(Square(6, 7), Square(7, 7), None).unwrap(); // Rh1
    game.try_move(Square(1, 4), Square(0, 4), None).unwrap();

    assert_eq!(
        game.try_move(Square(7, 4), Square(7, 6), None).unwrap(),
        MoveOutcome::Rejected
    );
    // Queen-side right is unaffected
    assert!(matches!(
        game.try_move(Square(7, 4), Square(7, 2), None).unwrap(),
        MoveOutcome::Applied(_)
    ));
}

#[test]
fn test_castle_rejected_while_in_check() {
    let mut game = castling_ready()
        .piece(Square(3, 4), Color::Black, Piece::Rook)
        .build();

    assert_eq!(
        game.try_move(Square(7, 4), Square(7, 6), None).unwrap(),
        MoveOutcome::Rejected
    );
}

#[test]
fn test_castle_rejected_through_attacked_square() {
    // Black rook holds f1; the king would cross an attacked square
    let mut game = castling_ready()
        .piece(Square(0, 5), Color::Black, Piece::Rook)
        .build();

    assert_eq!(
        game.try_move(Square(7, 4), Square(7, 6), None).unwrap(),
        MoveOutcome::Rejected
    );
}

#[test]
fn test_castle_rejected_into_attacked_square() {
    let mut game = castling_ready()
        .piece(Square(0, 6), Color::Black, Piece::Rook)
        .build();

    assert_eq!(
        game.try_move(Square(7, 4), Square(7, 6), None).unwrap(),
        MoveOutcome::Rejected
    );
}

#[test]
fn test_queenside_allowed_when_only_b1_attacked() {
    // The king crosses d1 and c1 but never b1; an attack there is harmless
    let mut game = castling_ready()
        .piece(Square(0, 1), Color::Black, Piece::Rook)
        .build();

    assert!(matches!(
        game.try_move(Square(7, 4), Square(7, 2), None).unwrap(),
        MoveOutcome::Applied(_)
    ));
}

#[test]
fn test_castle_rejected_when_rook_captured_in_place() {
    // The rights bit survives a capture on h1, but the rook is gone; the
    // physical-presence check must refuse the castle.
    let mut game = castling_ready().clear(Square(7, 7)).build();
    assert!(game.castling_rights().has(Color::White, CastleSide::King));

    assert_eq!(
        game.try_move(Square(7, 4), Square(7, 6), None).unwrap(),
        MoveOutcome::Rejected
    );
}

#[test]
fn test_black_kingside_castle() {
    let mut game = PositionBuilder::new()
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(0, 7), Color::Black, Piece::Rook)
        .piece(Square(7, 4), Color::White, Piece::King)
        .castling(CastlingRights::all())
        .side_to_move(Color::Black)
        .build();

    assert!(matches!(
        game.try_move(Square(0, 4), Square(0, 6), None).unwrap(),
        MoveOutcome::Applied(_)
    ));
    assert_eq!(
        game.board().piece_at(Square(0, 6)),
        Some((Color::Black, Piece::King))
    );
    assert_eq!(
        game.board().piece_at(Square(0, 5)),
        Some((Color::Black, Piece::Rook))
    );
}

#[test]
fn test_ordinary_king_step_is_not_a_castle() {
    let mut game = castling_ready().build();
    let _ = game.try_move(Square(7, 4), Square(7, 5), None).unwrap();

    // A one-square king move spends the rights through apply_move
    assert!(!game.castling_rights().has(Color::White, CastleSide::King));
    assert_eq!(
        game.board().piece_at(Square(7, 7)),
        Some((Color::White, Piece::Rook))
    );
}

#[test]
fn test_validate_castling_is_none_for_non_canonical_pairs() {
    let game = castling_ready().build();
    assert_eq!(game.validate_castling(Square(7, 4), Square(7, 7)), None);
    assert_eq!(game.validate_castling(Square(7, 4), Square(6, 6)), None);
    assert_eq!(game.validate_castling(Square(7, 3), Square(7, 5)), None);
}
