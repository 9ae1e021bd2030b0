//! Chase detection under the Asian perpetual rules.

use super::attack_tables::{
    attacks_bb, between_bb, king_attacks, knight_leg_mask, knight_to_attacks, knight_to_leg_mask,
    line_bb, pawn_attacks, rook_attacks,
};
use super::types::{Bitboard, Color, Move, PieceType, Square};
use super::Position;

impl Position {
    /// The side-to-move pieces that the last move started chasing: attacked
    /// with intent to win material, excluding checks, protected targets and
    /// unpromoted pawns. Empty at the root and after null moves.
    #[must_use]
    pub fn chased(&self) -> Bitboard {
        let mut chased = Bitboard::EMPTY;
        let st = self.st();
        if st.mv == Move::NONE {
            return chased;
        }

        let us = self.side_to_move;
        let them = !us;

        // Pieces that may not defend: pinned to our king, or the lone piece
        // shielding the king file (capturing would trigger the flying
        // general).
        let mut pins = self.blockers_for_king(us);
        let our_king = self.king_square(us);
        let their_king = self.king_square(them);
        if our_king.file() == their_king.file() {
            let king_file_gate =
                between_bb(our_king, their_king) ^ Bitboard::from_square(their_king);
            if !(king_file_gate & self.pieces()).more_than_one() {
                pins |= king_file_gate & self.pieces_by_color(us);
            }
        }

        // Direct attacks from the mover's new square. For rooks and cannons
        // the attacks along the movement line existed before the move and do
        // not count as new.
        let from = st.mv.from();
        let to = st.mv.to();
        let moved_kind = self
            .piece_on(to)
            .expect("last move left its target empty")
            .kind();
        if moved_kind != PieceType::King && moved_kind != PieceType::Pawn {
            let mut direct = attacks_bb(moved_kind, to, self.pieces()) & self.pieces_by_color(us);
            if moved_kind == PieceType::Rook || moved_kind == PieceType::Cannon {
                direct &= !line_bb(from, to);
            }
            self.add_chased(&mut chased, pins, to, moved_kind, direct);
        }

        // Discovered attacks: enemy pieces whose attack set changed when
        // `from` emptied (or when `to` filled, for cannon screens).
        let mut candidates = (knight_leg_mask(from) & self.pieces_of(them, PieceType::Knight))
            | (knight_to_leg_mask(from) & self.pieces_of(them, PieceType::Bishop))
            | (rook_attacks(from, Bitboard::EMPTY)
                & (self.pieces_of(them, PieceType::Rook) | self.pieces_of(them, PieceType::Cannon)))
            | (rook_attacks(to, self.pieces()) & self.pieces_of(them, PieceType::Cannon));
        // Occupancy before the move: the mover returns to `from`, and `to`
        // empties again unless the move was a capture.
        let mut pre_occ = self.pieces() ^ from;
        if st.captured.is_none() {
            pre_occ ^= to;
        }
        while !candidates.is_empty() {
            let sq = candidates.pop_lsb();
            let kind = self
                .piece_on(sq)
                .expect("discovery candidate square is empty")
                .kind();
            let discoveries = self.pieces_by_color(us)
                & attacks_bb(kind, sq, self.pieces())
                & !attacks_bb(kind, sq, pre_occ);
            self.add_chased(&mut chased, pins, sq, kind, discoveries);
        }

        // Defensive relations changed by new pins.
        if st.plies_from_null > 0 {
            let prev = self.state_at(1);

            // Our pieces newly pinned no longer protect: anything they
            // defended is chaseable if an unpinned enemy attacks it.
            let mut new_pins = st.blockers_for_king[us.index()]
                & !prev.blockers_for_king[us.index()]
                & self.pieces_by_color(us);
            while !new_pins.is_empty() {
                let sq = new_pins.pop_lsb();
                let kind = self
                    .piece_on(sq)
                    .expect("pinned square is empty")
                    .kind();
                let mut fake_rooted = self.pieces_by_color(us) & self.chaseable_targets(us);
                if kind == PieceType::Pawn {
                    fake_rooted &= pawn_attacks(us, sq);
                } else {
                    fake_rooted &= attacks_bb(kind, sq, self.pieces());
                }
                while !fake_rooted.is_empty() {
                    let target = fake_rooted.pop_lsb();
                    if !(self.attackers_to(target, self.pieces())
                        & self.pieces_by_color(them)
                        & !self.blockers_for_king(them))
                    .is_empty()
                    {
                        chased |= target;
                    }
                }
            }

            // Enemy pieces newly shielding our king: their captures come
            // with a discovered check, so our king cannot recapture unless
            // the square is genuinely safe afterwards.
            let mut new_discoverers = st.blockers_for_king[us.index()]
                & !prev.blockers_for_king[us.index()]
                & self.pieces_by_color(them);
            while !new_discoverers.is_empty() {
                let sq = new_discoverers.pop_lsb();
                let kind = self
                    .piece_on(sq)
                    .expect("discoverer square is empty")
                    .kind();
                let mut discovery_attacks = self.pieces_by_color(us);
                if kind == PieceType::Pawn {
                    discovery_attacks &= pawn_attacks(them, sq);
                } else {
                    discovery_attacks &= attacks_bb(kind, sq, self.pieces());
                }

                // Captures out of the king's reach cannot be answered at all.
                chased |= discovery_attacks & !king_attacks(our_king);
                // Within the king's reach, the recapture must survive the
                // discovered attacker's backup.
                discovery_attacks &= king_attacks(our_king);
                while !discovery_attacks.is_empty() {
                    let target = discovery_attacks.pop_lsb();
                    if !(self.attackers_to(target, self.pieces() ^ sq ^ our_king)
                        & self.pieces_by_color(them)
                        & !Bitboard::from_square(sq))
                    .is_empty()
                    {
                        chased |= target;
                    }
                }
            }
        }

        chased
    }

    /// Our pieces worth chasing: everything except the king and pawns that
    /// have not yet crossed the river.
    fn chaseable_targets(&self, us: Color) -> Bitboard {
        let them = !us;
        !((self.pieces_of(us, PieceType::King) | self.pieces_of(us, PieceType::Pawn))
            ^ (self.pieces_of(us, PieceType::Pawn) & Bitboard::half(them)))
    }

    /// Fold one attacker's new attacks into the chase set, applying the
    /// target, symmetry and protection rules.
    fn add_chased(
        &self,
        chased: &mut Bitboard,
        pins: Bitboard,
        attacker_sq: Square,
        attacker_kind: PieceType,
        mut attacks: Bitboard,
    ) {
        if (attacks & !*chased).is_empty() {
            return;
        }

        let us = self.side_to_move;
        let them = !us;

        // Checks never count as chases, nor do attacks on unpromoted pawns.
        attacks &= self.chaseable_targets(us);

        // A weaker attacker chasing a stronger piece counts regardless of
        // protection: knights and cannons chasing rooks, bishops and
        // advisors chasing any of the big three.
        if matches!(attacker_kind, PieceType::Knight | PieceType::Cannon) {
            *chased |= attacks & self.pieces_of(us, PieceType::Rook);
        }
        if matches!(attacker_kind, PieceType::Bishop | PieceType::Advisor) {
            *chased |= attacks
                & (self.pieces_of(us, PieceType::Rook)
                    | self.pieces_of(us, PieceType::Cannon)
                    | self.pieces_of(us, PieceType::Knight));
        }

        // Mutual attacks between equals are not chases, except against an
        // impaired knight (no symmetric reply) or a pinned piece.
        if attacker_kind == PieceType::Knight {
            attacks &= !knight_to_attacks(attacker_sq, self.pieces()) | pins;
        } else {
            attacks &= !self.pieces_of(us, attacker_kind) | pins;
        }

        // What survives counts only when genuinely unprotected: no unpinned
        // defender, or only the king while the attacker is backed along the
        // enemy king's file (recapturing would fly the generals).
        while !attacks.is_empty() {
            let target = attacks.pop_lsb();
            let roots = self.attackers_to(target, self.pieces() ^ attacker_sq)
                & self.pieces_by_color(us)
                & !pins;
            if roots.is_empty()
                || (roots == self.pieces_of(us, PieceType::King)
                    && rook_attacks(self.king_square(them), self.pieces() ^ attacker_sq)
                        .contains(target))
            {
                *chased |= target;
            }
        }
    }
}
