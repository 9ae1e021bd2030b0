//! Position tests.

mod fen;
mod legality;

use super::types::{Move, Square, SQUARE_NB};
use super::Position;

/// Enumerate the legal moves by probing every destination square. Slow but
/// oracle-free; production move generation lives outside this crate.
pub(crate) fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in pos.pieces_by_color(pos.side_to_move()) {
        for to in 0..SQUARE_NB {
            let m = Move::new(from, Square::from_index(to));
            if pos.pseudo_legal(m) && pos.legal(m) {
                moves.push(m);
            }
        }
    }
    moves
}

/// Parse, validate and play a move.
pub(crate) fn apply_uci(pos: &mut Position, uci: &str) -> Move {
    let m = pos.parse_move(uci).expect("move not legal");
    let gives_check = pos.gives_check(m);
    pos.do_move(m, gives_check);
    m
}
