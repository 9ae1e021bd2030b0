//! FEN round-trip and parsing tests.

use crate::position::{Color, FenError, MoveParseError, PieceType, Position, Square};

#[test]
fn test_start_position_round_trip() {
    let pos = Position::new();
    assert_eq!(pos.fen(), Position::START_FEN);
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.game_ply(), 0);
    assert_eq!(pos.pieces().popcount(), 32);
}

#[test]
fn test_start_position_layout() {
    let pos = Position::new();
    let e0: Square = "e0".parse().unwrap();
    let e9: Square = "e9".parse().unwrap();
    assert_eq!(pos.king_square(Color::White), e0);
    assert_eq!(pos.king_square(Color::Black), e9);
    assert_eq!(pos.pieces_of(Color::White, PieceType::Pawn).popcount(), 5);
    assert_eq!(pos.pieces_of(Color::Black, PieceType::Cannon).popcount(), 2);
    assert!(pos
        .piece_on("h2".parse().unwrap())
        .is_some_and(|pc| pc.kind() == PieceType::Cannon && pc.color() == Color::White));
}

#[test]
fn test_black_to_move_round_trip() {
    let fen = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR b - - 0 1";
    let pos = Position::from_fen(fen);
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.game_ply(), 1);
    assert_eq!(pos.fen(), fen);
}

#[test]
fn test_fullmove_number_round_trip() {
    let fen = "4k4/9/9/9/9/9/9/9/9/4K4 b - - 0 30";
    let pos = Position::from_fen(fen);
    assert_eq!(pos.game_ply(), 59);
    assert_eq!(pos.fen(), fen);
}

#[test]
fn test_halfmove_clock_is_discarded() {
    // The clock field is read but never stored; emission normalizes it to 0.
    let pos = Position::from_fen("4k4/9/9/9/9/9/9/9/9/4K4 w - - 57 30");
    assert_eq!(pos.fen(), "4k4/9/9/9/9/9/9/9/9/4K4 w - - 0 30");
}

#[test]
fn test_fen_errors() {
    assert!(matches!(
        Position::try_from_fen("4k4"),
        Err(FenError::TooFewParts { found: 1 })
    ));
    assert!(matches!(
        Position::try_from_fen("4q4/9/9/9/9/9/9/9/9/4K4 w - - 0 1"),
        Err(FenError::InvalidPiece { ch: 'q' })
    ));
    assert!(matches!(
        Position::try_from_fen("4k4/9/9/9/9/9/9/9/9/4K4 x - - 0 1"),
        Err(FenError::InvalidSideToMove { .. })
    ));
}

#[test]
fn test_from_str_trait() {
    let pos: Position = Position::START_FEN.parse().unwrap();
    assert_eq!(pos.fen(), Position::START_FEN);
}

#[test]
fn test_parse_move() {
    let pos = Position::new();
    let m = pos.parse_move("h2e2").unwrap();
    assert_eq!(m.from(), "h2".parse::<Square>().unwrap());
    assert_eq!(m.to(), "e2".parse::<Square>().unwrap());

    assert!(matches!(
        pos.parse_move("h2"),
        Err(MoveParseError::InvalidLength { len: 2 })
    ));
    assert!(matches!(
        pos.parse_move("j2e2"),
        Err(MoveParseError::InvalidSquare { .. })
    ));
    // A rook-style move for the king is rejected.
    assert!(matches!(
        pos.parse_move("e0e2"),
        Err(MoveParseError::IllegalMove { .. })
    ));
}

#[test]
fn test_fen_round_trip_after_moves() {
    let mut pos = Position::new();
    super::apply_uci(&mut pos, "h2e2");
    super::apply_uci(&mut pos, "h7e7");
    let fen = pos.fen();
    let reparsed = Position::from_fen(&fen);
    assert_eq!(reparsed.fen(), fen);
    assert_eq!(reparsed.key(), pos.key());
}
