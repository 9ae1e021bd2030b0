//! End-to-end scenarios exercising the public position API.

use xiangqi_engine::position::{Move, Position, VALUE_DRAW, VALUE_MATE};

fn play(pos: &mut Position, uci: &str) -> Move {
    let m = pos.parse_move(uci).expect("scenario move must be legal");
    let gives_check = pos.gives_check(m);
    pos.do_move(m, gives_check);
    m
}

#[test]
fn scenario_start_position_round_trip() {
    let pos = Position::new();
    assert_eq!(pos.fen(), Position::START_FEN);

    // Cannon sideways and knight development are pseudo-legal.
    assert!(pos.pseudo_legal("h2e2".parse().unwrap()));
    assert!(pos.pseudo_legal("b0c2".parse().unwrap()));
    // King geometry is confined to orthogonal palace steps.
    assert!(!pos.pseudo_legal("e0d1".parse().unwrap()));
    assert!(!pos.pseudo_legal("e0e2".parse().unwrap()));
}

#[test]
fn scenario_flying_general() {
    // Kings share file e; the only piece between them may not leave it.
    let pos = Position::from_fen("4k4/9/9/9/4R4/9/9/9/9/4K4 w - - 0 1");

    let clearing: Move = "e5a5".parse().unwrap();
    assert!(pos.pseudo_legal(clearing));
    assert!(!pos.legal(clearing));

    let staying: Move = "e5e7".parse().unwrap();
    assert!(pos.pseudo_legal(staying));
    assert!(pos.legal(staying));
}

#[test]
fn scenario_cannon_capture() {
    // White cannon e2, one friendly screen on e5, black piece on e7.
    let pos = Position::from_fen("3k5/9/4r4/9/4P4/9/9/4C4/9/4K4 w - - 0 1");

    let capture: Move = "e2e7".parse().unwrap();
    assert!(pos.pseudo_legal(capture));
    assert!(pos.legal(capture));

    // A quiet move over the screen is rejected.
    let over_screen: Move = "e2e6".parse().unwrap();
    assert!(!pos.pseudo_legal(over_screen));
}

#[test]
fn scenario_see_on_defended_cannon() {
    // Black cannon h2 is defended by the h9 rook; Rxh2 trades a rook for a
    // cannon.
    let pos = Position::from_fen("3k3r1/9/9/9/9/9/9/7c1/7R1/4K4 w - - 0 1");
    let m: Move = "h1h2".parse().unwrap();
    assert!(pos.pseudo_legal(m));

    assert!(!pos.see_ge(m, 0));
    // The full exchange nets cannon minus rook.
    let outcome = -516;
    assert!(pos.see_ge(m, outcome));
    assert!(!pos.see_ge(m, outcome + 1));
}

#[test]
fn scenario_perpetual_check_draw_table() {
    // White checks on every move; black only has king shuffles. At the
    // repetition the one-sided perpetual check scores as a loss for the
    // checker: the side to move (black) receives the mate score.
    let mut pos = Position::from_fen("3k5/9/9/9/9/9/4R4/9/9/5K3 w - - 0 1");
    for uci in ["e3d3", "d9e9", "d3e3", "e9d9"] {
        play(&mut pos, uci);
    }
    assert_eq!(pos.is_repeated(4), None);

    play(&mut pos, "e3d3");
    assert_eq!(pos.is_repeated(5), Some(VALUE_MATE - 5));
}

#[test]
fn scenario_chase_only_perpetual() {
    // White repeatedly attacks the black rook with a knight and never
    // checks; black shuffles the rook. The chaser loses: the chased side
    // to move gets the winning score.
    let mut pos = Position::from_fen("4k4/2r6/9/9/1N7/4P4/9/9/9/4K4 w - - 0 1");
    for uci in ["b5d6", "c8c7", "d6b5", "c7c8", "b5d6"] {
        play(&mut pos, uci);
    }
    assert_eq!(pos.is_repeated(5), Some(VALUE_MATE - 5));
}

#[test]
fn scenario_symmetric_shuffle_is_a_draw() {
    let mut pos = Position::from_fen("1n2k4/9/9/9/9/9/4P4/9/9/1N2K4 w - - 0 1");
    for uci in ["b0c2", "b9c7", "c2b0", "c7b9", "b0c2"] {
        play(&mut pos, uci);
    }
    assert_eq!(pos.is_repeated(5), Some(VALUE_DRAW));
}

#[test]
fn scenario_undo_restores_across_a_game_fragment() {
    let mut pos = Position::new();
    let initial = pos.fen();

    let moves: Vec<Move> = ["h2e2", "h7e7", "b0c2", "b9c7", "e2e6", "e7e3"]
        .iter()
        .map(|uci| play(&mut pos, uci))
        .collect();

    for m in moves.into_iter().rev() {
        pos.undo_move(m);
    }
    assert_eq!(pos.fen(), initial);
}
