//! Incremental move execution and unwinding.

use crate::zobrist::ZOBRIST;

use super::state::{Accumulator, DirtyPiece, Key, PieceMove, StateInfo};
use super::types::{Bitboard, Color, Move, Piece, PieceType, Square};
use super::Position;

impl Position {
    pub(crate) fn put_piece(&mut self, pc: Piece, sq: Square) {
        debug_assert!(self.board[sq.index()].is_none());
        let bb = Bitboard::from_square(sq);
        self.board[sq.index()] = Some(pc);
        self.by_kind[pc.kind().index()] |= bb;
        self.by_color[pc.color().index()] |= bb;
        self.piece_count[pc.color().index()][pc.kind().index()] += 1;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> Piece {
        let pc = self.board[sq.index()]
            .take()
            .expect("remove_piece from an empty square");
        let bb = Bitboard::from_square(sq);
        self.by_kind[pc.kind().index()] ^= bb;
        self.by_color[pc.color().index()] ^= bb;
        self.piece_count[pc.color().index()][pc.kind().index()] -= 1;
        pc
    }

    pub(crate) fn move_piece(&mut self, from: Square, to: Square) {
        let pc = self.board[from.index()]
            .take()
            .expect("move_piece from an empty square");
        debug_assert!(self.board[to.index()].is_none());
        let from_to = Bitboard::from_square(from) | Bitboard::from_square(to);
        self.by_kind[pc.kind().index()] ^= from_to;
        self.by_color[pc.color().index()] ^= from_to;
        self.board[to.index()] = Some(pc);
    }

    /// Make a legal move. `gives_check` must be the value of
    /// `self.gives_check(m)`; passing it in lets the search reuse the answer
    /// it already computed for move ordering.
    pub fn do_move(&mut self, m: Move, gives_check: bool) {
        debug_assert!(m.is_ok());

        self.nodes.increment();
        let mut k = self.st().key ^ ZOBRIST.side_key;

        // Seed the new record from the current one: non_pawn_material and
        // plies_from_null carry, everything else is recomputed below.
        let mut st = StateInfo {
            key: 0,
            checkers: Bitboard::EMPTY,
            captured: None,
            chased: Bitboard::EMPTY,
            mv: m,
            dirty: DirtyPiece::default(),
            accumulator: Accumulator::default(),
            ..*self.st()
        };
        st.plies_from_null += 1;
        self.game_ply += 1;

        let us = self.side_to_move;
        let them = !us;
        let from = m.from();
        let to = m.to();
        let pc = self.piece_on(from).expect("do_move from an empty square");
        let captured = self.piece_on(to);

        debug_assert_eq!(pc.color(), us);

        st.dirty.moves[0] = Some(PieceMove {
            piece: pc,
            from,
            to: Some(to),
        });

        if let Some(cap) = captured {
            debug_assert_eq!(cap.color(), them);
            debug_assert!(cap.kind() != PieceType::King);

            if cap.kind() != PieceType::Pawn {
                st.non_pawn_material[them.index()] -= cap.kind().mg_value();
            }

            st.dirty.moves[1] = Some(PieceMove {
                piece: cap,
                from: to,
                to: None,
            });

            self.remove_piece(to);
            k ^= ZOBRIST.psq(cap, to);
        }

        k ^= ZOBRIST.psq(pc, from) ^ ZOBRIST.psq(pc, to);

        self.move_piece(from, to);

        st.captured = captured;
        st.key = k;
        st.checkers = if gives_check {
            self.checkers_to(us, self.king_square(them), self.pieces())
        } else {
            Bitboard::EMPTY
        };

        self.states.push(st);
        self.side_to_move = them;

        self.set_check_info();

        #[cfg(debug_assertions)]
        self.assert_ok();
    }

    /// Unmake a move, restoring the position to the exact state before the
    /// matching `do_move`.
    pub fn undo_move(&mut self, m: Move) {
        debug_assert!(m.is_ok());
        debug_assert!(self.states.len() > 1, "undo below the root state");

        self.side_to_move = !self.side_to_move;

        let from = m.from();
        let to = m.to();
        debug_assert!(self.is_empty(from));

        let st = self.states.pop().expect("state stack is never empty");
        debug_assert_eq!(st.mv, m);
        debug_assert!(st.captured.map_or(true, |pc| pc.kind() != PieceType::King));

        self.move_piece(to, from);
        if let Some(cap) = st.captured {
            self.put_piece(cap, to);
        }

        self.game_ply -= 1;

        #[cfg(debug_assertions)]
        self.assert_ok();
    }

    /// Flip the side to move without moving a piece. Only valid when not in
    /// check.
    pub fn do_null_move(&mut self) {
        debug_assert!(self.checkers().is_empty());

        let mut st = *self.st();
        st.mv = Move::NONE;
        st.dirty = DirtyPiece::default();
        st.accumulator = Accumulator::default();
        st.key ^= ZOBRIST.side_key;
        st.plies_from_null = 0;

        self.states.push(st);
        self.side_to_move = !self.side_to_move;

        self.set_check_info();

        #[cfg(debug_assertions)]
        self.assert_ok();
    }

    /// Undo a null move.
    pub fn undo_null_move(&mut self) {
        debug_assert!(self.checkers().is_empty());
        debug_assert!(self.states.len() > 1, "undo below the root state");

        self.states.pop();
        self.side_to_move = !self.side_to_move;
    }

    /// The hash key the position would have after `m`, without touching any
    /// state. Used to prefetch transposition entries.
    #[must_use]
    pub fn key_after(&self, m: Move) -> Key {
        let from = m.from();
        let to = m.to();
        let pc = self.piece_on(from).expect("key_after from an empty square");
        let mut k = self.st().key ^ ZOBRIST.side_key;

        if let Some(captured) = self.piece_on(to) {
            k ^= ZOBRIST.psq(captured, to);
        }

        k ^ ZOBRIST.psq(pc, from) ^ ZOBRIST.psq(pc, to)
    }

    /// Recompute the key, material and check state of the top record from
    /// scratch. Used at setup; move execution maintains the same values
    /// incrementally.
    pub(crate) fn set_state(&mut self) {
        let key = self.computed_key();
        let non_pawn_material = self.computed_non_pawn_material();
        let checkers = self.checkers_to(
            !self.side_to_move,
            self.king_square(self.side_to_move),
            self.pieces(),
        );

        let st = self.st_mut();
        st.key = key;
        st.non_pawn_material = non_pawn_material;
        st.checkers = checkers;
        st.mv = Move::NONE;

        self.set_check_info();
    }

    /// The Zobrist key recomputed from the board.
    pub(crate) fn computed_key(&self) -> Key {
        let mut key = 0;
        for sq in self.pieces() {
            let pc = self.piece_on(sq).expect("occupancy disagrees with board");
            key ^= ZOBRIST.psq(pc, sq);
        }
        if self.side_to_move == Color::Black {
            key ^= ZOBRIST.side_key;
        }
        key
    }

    pub(crate) fn computed_non_pawn_material(&self) -> [i32; 2] {
        let mut npm = [0; 2];
        for sq in self.pieces() {
            let pc = self.piece_on(sq).expect("occupancy disagrees with board");
            if pc.kind() != PieceType::King && pc.kind() != PieceType::Pawn {
                npm[pc.color().index()] += pc.kind().mg_value();
            }
        }
        npm
    }
}
