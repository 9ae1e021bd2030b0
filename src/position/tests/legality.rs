//! Legality, pseudo-legality and check-detection tests.

use rand::prelude::*;

use super::legal_moves;
use crate::position::attack_tables::rook_attacks;
use crate::position::{Bitboard, Color, Move, Position};

fn mv(pos: &Position, uci: &str) -> Move {
    let m: Move = uci.parse().unwrap();
    assert!(pos.pseudo_legal(m), "{uci} should be pseudo-legal");
    m
}

#[test]
fn test_start_position_pseudo_legal() {
    let pos = Position::new();

    // Cannon slides sideways, knight hops over the edge of the back rank.
    assert!(pos.pseudo_legal("h2e2".parse().unwrap()));
    assert!(pos.pseudo_legal("b0c2".parse().unwrap()));
    // The king may step forward inside the palace, but never diagonally.
    assert!(pos.pseudo_legal("e0e1".parse().unwrap()));
    assert!(!pos.pseudo_legal("e0d1".parse().unwrap()));
    // Knight move blocked by its leg (the c0 bishop blocks b0->d1).
    assert!(!pos.pseudo_legal("b0d1".parse().unwrap()));
    // No rook-style king moves, no moves onto friendly pieces.
    assert!(!pos.pseudo_legal("e0e2".parse().unwrap()));
    assert!(!pos.pseudo_legal("a0a3".parse().unwrap()));
    // Moves of the side not on turn are rejected.
    assert!(!pos.pseudo_legal("h7e7".parse().unwrap()));
    // Garbage is rejected, not asserted on.
    assert!(!pos.pseudo_legal(Move::NONE));
    assert!(!pos.pseudo_legal(Move::from_u16(u16::MAX)));
}

#[test]
fn test_cannon_capture_needs_screen() {
    // White cannon e2, friendly screen e5, black rook e7.
    let pos = Position::from_fen("3k5/9/4r4/9/4P4/9/9/4C4/9/4K4 w - - 0 1");

    // Hopping capture over the screen is pseudo-legal and legal.
    let capture = mv(&pos, "e2e7");
    assert!(pos.legal(capture));

    // A quiet move may not jump the screen, but may stop short of it.
    assert!(!pos.pseudo_legal("e2e6".parse().unwrap()));
    assert!(pos.pseudo_legal("e2e4".parse().unwrap()));
    // Capturing without a screen is impossible.
    assert!(!pos.pseudo_legal("e2e5".parse().unwrap()));
}

#[test]
fn test_flying_general_restricts_moves() {
    // Kings face on file e with only the white rook between them.
    let pos = Position::from_fen("4k4/9/9/9/4R4/9/9/9/9/4K4 w - - 0 1");

    // Moving the rook off the file would leave the kings facing.
    let off_file = mv(&pos, "e5a5");
    assert!(!pos.legal(off_file));

    // Moving along the file keeps the shield intact.
    let on_file = mv(&pos, "e5e7");
    assert!(pos.legal(on_file));
}

#[test]
fn test_king_cannot_step_into_attack_or_file() {
    // Black rook f9 guards file f; the kings share file e with nothing
    // between them, so e0e1 keeps the file exposed as well.
    let pos = Position::from_fen("4kr3/9/9/9/9/9/9/9/9/4K4 w - - 0 1");

    let into_rook_file = mv(&pos, "e0f0");
    assert!(!pos.legal(into_rook_file));

    let up_the_open_file = mv(&pos, "e0e1");
    assert!(!pos.legal(up_the_open_file));

    let sidestep = mv(&pos, "e0d0");
    assert!(pos.legal(sidestep));
}

#[test]
fn test_pinned_rook_may_not_leave_the_file() {
    // White rook e4 shields its king from the black rook e8.
    let pos = Position::from_fen("3k5/4r4/9/9/9/4R4/9/9/9/4K4 w - - 0 1");

    let leaving = mv(&pos, "e4d4");
    assert!(!pos.legal(leaving));

    let staying = mv(&pos, "e4e6");
    assert!(pos.legal(staying));

    let capturing_the_pinner = mv(&pos, "e4e8");
    assert!(pos.legal(capturing_the_pinner));
}

#[test]
fn test_capturing_the_checker_is_legal() {
    // Black rook e8 checks; the white rook on i8 may take it.
    let pos = Position::from_fen("3k5/4r3R/9/9/9/9/9/9/9/4K4 w - - 0 1");
    assert!(!pos.checkers().is_empty());

    let capture = mv(&pos, "i8e8");
    assert!(pos.legal(capture));

    let ignoring_the_check = mv(&pos, "i8i7");
    assert!(!pos.legal(ignoring_the_check));
}

#[test]
fn test_legal_moves_leave_no_exposure() {
    // Property: after any legal move the mover is not in check and the
    // kings do not see each other down a clear file.
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..40 {
        let moves = legal_moves(&pos);
        if moves.is_empty() {
            break;
        }
        for &m in &moves {
            let gives_check = pos.gives_check(m);
            pos.do_move(m, gives_check);

            let mover = !pos.side_to_move();
            assert!(
                pos.checkers_to(pos.side_to_move(), pos.king_square(mover), pos.pieces())
                    .is_empty(),
                "move {m} left the mover in check"
            );
            let wk = pos.king_square(Color::White);
            assert!(
                (rook_attacks(wk, pos.pieces())
                    & Bitboard::from_square(pos.king_square(Color::Black)))
                .is_empty(),
                "move {m} left the kings facing"
            );

            pos.undo_move(m);
        }
        let m = moves[rng.gen_range(0..moves.len())];
        let gives_check = pos.gives_check(m);
        pos.do_move(m, gives_check);
    }
}

#[test]
fn test_gives_check_matches_post_move_checkers() {
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(0xBADA55);

    for _ in 0..40 {
        let moves = legal_moves(&pos);
        if moves.is_empty() {
            break;
        }
        for &m in &moves {
            let predicted = pos.gives_check(m);
            pos.do_move(m, predicted);
            let actual = !pos
                .checkers_to(
                    !pos.side_to_move(),
                    pos.king_square(pos.side_to_move()),
                    pos.pieces(),
                )
                .is_empty();
            assert_eq!(predicted, actual, "gives_check mismatch on {m}");
            assert_eq!(!pos.checkers().is_empty(), actual);
            pos.undo_move(m);
        }
        let m = moves[rng.gen_range(0..moves.len())];
        let gives_check = pos.gives_check(m);
        pos.do_move(m, gives_check);
    }
}
