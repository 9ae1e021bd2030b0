//! Attack queries, pin analysis, and move legality.

use super::attack_tables::{
    advisor_attacks, aligned, attacks_bb, between_bb, bishop_attacks, cannon_attacks,
    king_attacks, knight_attacks, knight_to_attacks, pawn_attacks, pawn_attacks_to, rook_attacks,
};
use super::types::{Bitboard, Color, Move, PieceType, Square};
use super::Position;

impl Position {
    /// All pieces of either color attacking `sq` under the given occupancy.
    #[must_use]
    pub fn attackers_to(&self, sq: Square, occ: Bitboard) -> Bitboard {
        (pawn_attacks_to(Color::White, sq) & self.pieces_of(Color::White, PieceType::Pawn))
            | (pawn_attacks_to(Color::Black, sq) & self.pieces_of(Color::Black, PieceType::Pawn))
            | (knight_to_attacks(sq, occ) & self.pieces_by_kind(PieceType::Knight))
            | (rook_attacks(sq, occ) & self.pieces_by_kind(PieceType::Rook))
            | (cannon_attacks(sq, occ) & self.pieces_by_kind(PieceType::Cannon))
            | (bishop_attacks(sq, occ) & self.pieces_by_kind(PieceType::Bishop))
            | (advisor_attacks(sq) & self.pieces_by_kind(PieceType::Advisor))
            | (king_attacks(sq) & self.pieces_by_kind(PieceType::King))
    }

    /// Pieces of `color` that give check to a king on `sq`. Only the kinds
    /// that can check are consulted.
    #[must_use]
    pub fn checkers_to(&self, color: Color, sq: Square, occ: Bitboard) -> Bitboard {
        ((pawn_attacks_to(color, sq) & self.pieces_by_kind(PieceType::Pawn))
            | (knight_to_attacks(sq, occ) & self.pieces_by_kind(PieceType::Knight))
            | (rook_attacks(sq, occ) & self.pieces_by_kind(PieceType::Rook))
            | (cannon_attacks(sq, occ) & self.pieces_by_kind(PieceType::Cannon)))
            & self.pieces_by_color(color)
    }

    /// Pieces (of both colors) that block `sliders` from attacking `s`, and
    /// the subset of sliders that pin a friend of `s`'s occupant.
    ///
    /// Snipers are rook-movers (rooks, cannons, and kings for the flying
    /// general rule) and knights. A non-cannon sniper is blocked by exactly
    /// one piece on its gate; a cannon by exactly two (removing either
    /// leaves the screen it captures over).
    #[must_use]
    pub fn king_blockers(&self, sliders: Bitboard, s: Square) -> (Bitboard, Bitboard) {
        let mut blockers = Bitboard::EMPTY;
        let mut pinners = Bitboard::EMPTY;

        let rook_movers = self.pieces_by_kind(PieceType::Rook)
            | self.pieces_by_kind(PieceType::Cannon)
            | self.pieces_by_kind(PieceType::King);
        let mut snipers = ((rook_attacks(s, Bitboard::EMPTY) & rook_movers)
            | (knight_attacks(s, Bitboard::EMPTY) & self.pieces_by_kind(PieceType::Knight)))
            & sliders;
        let occupancy = self.pieces() ^ (snipers & !self.pieces_by_kind(PieceType::Cannon));

        let target_color = self
            .piece_on(s)
            .map(super::types::Piece::color);

        while !snipers.is_empty() {
            let sniper_sq = snipers.pop_lsb();
            let is_cannon = self
                .piece_on(sniper_sq)
                .is_some_and(|pc| pc.kind() == PieceType::Cannon);
            let gate = between_bb(s, sniper_sq)
                & if is_cannon {
                    self.pieces() ^ sniper_sq
                } else {
                    occupancy
                };

            if !gate.is_empty()
                && ((!is_cannon && !gate.more_than_one()) || (is_cannon && gate.popcount() == 2))
            {
                blockers |= gate;
                if let Some(color) = target_color {
                    if !(gate & self.pieces_by_color(color)).is_empty() {
                        pinners |= sniper_sq;
                    }
                }
            }
        }

        (blockers, pinners)
    }

    /// Refresh the check info of the top state: blockers and pinners for
    /// both kings, the squares each piece kind would check from, and the
    /// chase set of the last move.
    pub(crate) fn set_check_info(&mut self) {
        let (white_blockers, black_pinners) = self.king_blockers(
            self.pieces_by_color(Color::Black),
            self.king_square(Color::White),
        );
        let (black_blockers, white_pinners) = self.king_blockers(
            self.pieces_by_color(Color::White),
            self.king_square(Color::Black),
        );

        let us = self.side_to_move;
        let ksq = self.king_square(!us);
        let occ = self.pieces();

        let mut check_squares = [Bitboard::EMPTY; super::PIECE_TYPE_NB];
        check_squares[PieceType::Pawn.index()] = pawn_attacks_to(us, ksq);
        check_squares[PieceType::Knight.index()] = knight_to_attacks(ksq, occ);
        check_squares[PieceType::Cannon.index()] = cannon_attacks(ksq, occ);
        check_squares[PieceType::Rook.index()] = rook_attacks(ksq, occ);

        {
            let st = self.st_mut();
            st.blockers_for_king = [white_blockers, black_blockers];
            st.pinners = [white_pinners, black_pinners];
            st.check_squares = check_squares;
        }

        let chased = self.chased();
        self.st_mut().chased = chased;
    }

    /// Whether a pseudo-legal move is legal: it must not expose the mover's
    /// king, neither to a regular attack nor down the open king file.
    #[must_use]
    pub fn legal(&self, m: Move) -> bool {
        debug_assert!(self.pseudo_legal(m));

        let us = self.side_to_move;
        let from = m.from();
        let to = m.to();
        let moved = self.piece_on(from).expect("legal() on an empty from-square");
        let occupied = (self.pieces() ^ from) | to;

        debug_assert_eq!(moved.color(), us);

        // Flying general: no clear rook line may remain between the kings.
        let ksq = if moved.kind() == PieceType::King {
            to
        } else {
            self.king_square(us)
        };
        if !(rook_attacks(ksq, occupied) & self.pieces_of(!us, PieceType::King)).is_empty() {
            return false;
        }

        // A king move must not step into an attacked square.
        if moved.kind() == PieceType::King {
            return self.checkers_to(!us, to, occupied).is_empty();
        }

        // Any other move must leave our king unattacked, discounting an
        // attacker that was just captured on `to`.
        (self.checkers_to(!us, self.king_square(us), occupied) & !Bitboard::from_square(to))
            .is_empty()
    }

    /// Whether an arbitrary move is pseudo-legal in this position. Tolerates
    /// garbage input: used to sanitize moves read from the transposition
    /// table, which can be stale or collided under SMP.
    #[must_use]
    pub fn pseudo_legal(&self, m: Move) -> bool {
        if !m.is_ok() {
            return false;
        }

        let us = self.side_to_move;
        let from = m.from();
        let to = m.to();

        let pc = match self.piece_on(from) {
            Some(pc) if pc.color() == us => pc,
            _ => return false,
        };

        if self.pieces_by_color(us).contains(to) {
            return false;
        }

        match pc.kind() {
            PieceType::Pawn => pawn_attacks(us, from).contains(to),
            // A quiet cannon move is rook-like; the hop applies to captures
            // only, which the generic attack set covers.
            PieceType::Cannon if !self.is_capture(m) => {
                rook_attacks(from, self.pieces()).contains(to)
            }
            kind => attacks_bb(kind, from, self.pieces()).contains(to),
        }
    }

    /// Whether a pseudo-legal move gives check.
    #[must_use]
    pub fn gives_check(&self, m: Move) -> bool {
        debug_assert!(m.is_ok());
        debug_assert!(self
            .moved_piece(m)
            .is_some_and(|pc| pc.color() == self.side_to_move));

        let us = self.side_to_move;
        let from = m.from();
        let to = m.to();
        let ksq = self.king_square(!us);
        let kind = self.piece_on(from).expect("gives_check on an empty from-square").kind();
        let occ_after = (self.pieces() ^ from) | to;

        // Direct check. Cannon attacks depend on the post-move occupancy,
        // so they are recomputed rather than read from check_squares.
        if kind == PieceType::Cannon {
            if cannon_attacks(to, occ_after).contains(ksq) {
                return true;
            }
        } else if self.check_squares(kind).contains(to) {
            return true;
        }

        // Discovered check. A friendly cannon seen by the enemy king can
        // gain a screen from any occupancy change, so recompute in full;
        // otherwise only a departing blocker can discover.
        if !(self.check_squares(PieceType::Rook) & self.pieces_of(us, PieceType::Cannon)).is_empty()
        {
            !self.checkers_to(us, ksq, occ_after).is_empty()
        } else {
            self.blockers_for_king(!us).contains(from) && !aligned(from, to, ksq)
        }
    }
}
