//! Repetition, perpetual-check and perpetual-chase adjudication.

use super::state::{Value, VALUE_DRAW, VALUE_MATE};
use super::types::{Bitboard, Move};
use super::Position;

/// Map a bitboard of the current position's squares back through a move, so
/// chase sets from successive plies talk about the same pieces.
fn undo_move_board(b: Bitboard, m: Move) -> Bitboard {
    if !m.is_none() && b.contains(m.to()) {
        (b ^ m.to()) | m.from()
    } else {
        b
    }
}

impl Position {
    /// Check whether the position repeats within the current null-move
    /// window and, if so, adjudicate it under the Asian rules.
    ///
    /// Walks the state stack backward two plies at a time counting key
    /// hits: one hit suffices strictly after the search root (`ply > i`),
    /// two before or at it. Along the walk it tracks, per side, whether
    /// every intermediate ply carried a check (perpetual check) and the
    /// intersection of the per-ply chase sets (perpetual chase). A side
    /// that only perpetually checks, or only perpetually chases, loses:
    /// mate score adjusted by `ply`. Both or neither is a draw.
    #[must_use]
    pub fn is_repeated(&self, ply: i32) -> Option<Value> {
        let end = self.st().plies_from_null;
        if end < 4 {
            return None;
        }

        let st = self.st();
        let mut count = 0;
        let mut perpetual_them =
            !st.checkers.is_empty() && !self.state_at(2).checkers.is_empty();
        let mut perpetual_us = !self.state_at(1).checkers.is_empty()
            && !self.state_at(3).checkers.is_empty();
        let mut chase_them =
            undo_move_board(st.chased, self.state_at(1).mv) & self.state_at(2).chased;
        let mut chase_us = undo_move_board(self.state_at(1).chased, self.state_at(2).mv)
            & self.state_at(3).chased;

        let mut i = 4;
        while i <= end {
            // The chase set is empty at the window boundary, where there is
            // no earlier move to carry it through.
            if i != end {
                chase_them = undo_move_board(chase_them, self.state_at(i as usize - 1).mv)
                    & self.state_at(i as usize).chased;
            }
            let stp = self.state_at(i as usize);
            perpetual_them &= !stp.checkers.is_empty();

            // Score a position repeating once strictly after the root, or
            // twice before or at the root.
            if stp.key == st.key {
                count += 1;
                if count == if ply > i { 1 } else { 2 } {
                    let result = if perpetual_them || perpetual_us {
                        if !perpetual_us {
                            VALUE_MATE - ply
                        } else if !perpetual_them {
                            -VALUE_MATE + ply
                        } else {
                            VALUE_DRAW
                        }
                    } else if !chase_them.is_empty() || !chase_us.is_empty() {
                        if chase_us.is_empty() {
                            VALUE_MATE - ply
                        } else if chase_them.is_empty() {
                            -VALUE_MATE + ply
                        } else {
                            VALUE_DRAW
                        }
                    } else {
                        VALUE_DRAW
                    };

                    #[cfg(feature = "logging")]
                    log::debug!(
                        "repetition at ply {ply}: result {result}, \
                         perpetual them/us {perpetual_them}/{perpetual_us}"
                    );

                    return Some(result);
                }
            }

            if i + 1 <= end {
                perpetual_us &= !self.state_at(i as usize + 1).checkers.is_empty();
                chase_us = undo_move_board(chase_us, self.state_at(i as usize).mv)
                    & self.state_at(i as usize + 1).chased;
            }

            i += 2;
        }

        None
    }
}
