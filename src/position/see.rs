//! Static exchange evaluation.

use super::attack_tables::{cannon_attacks, knight_to_attacks, rook_attacks};
use super::state::Value;
use super::types::{Move, Piece, PieceType};
use super::Position;

impl Position {
    /// Whether the static exchange value of `m` is at least `threshold`.
    ///
    /// Runs the exchange on the destination square as a null-window
    /// alpha-beta: both sides recapture with their least valuable attacker,
    /// pinned pieces sit out while their pinner stands, and each removal
    /// re-opens the x-ray attacks it uncovered (rook lines, cannon screens,
    /// knight legs behind advisors). Kings join the exchange down an
    /// otherwise empty king file.
    #[must_use]
    pub fn see_ge(&self, m: Move, threshold: Value) -> bool {
        debug_assert!(self.pseudo_legal(m));

        let from = m.from();
        let to = m.to();

        let piece_value =
            |pc: Option<Piece>| pc.map_or(0, |pc| pc.kind().mg_value());

        let mut swap = piece_value(self.piece_on(to)) - threshold;
        if swap < 0 {
            return false;
        }

        swap = piece_value(self.piece_on(from)) - swap;
        if swap <= 0 {
            return true;
        }

        debug_assert!(self
            .piece_on(from)
            .is_some_and(|pc| pc.color() == self.side_to_move));

        let rooks = self.pieces_by_kind(PieceType::Rook);
        let cannon_pieces = self.pieces_by_kind(PieceType::Cannon);

        let mut occupied = self.pieces() ^ from ^ to;
        let mut stm = self.side_to_move;
        let mut attackers = self.attackers_to(to, occupied);

        // Flying general: once a king sees the exchange square past the
        // rooks, the opposing king on that file joins the attacker set.
        if !(attackers & self.pieces_of(stm, PieceType::King)).is_empty() {
            attackers |=
                rook_attacks(to, occupied & !rooks) & self.pieces_of(!stm, PieceType::King);
        }
        if !(attackers & self.pieces_of(!stm, PieceType::King)).is_empty() {
            attackers |= rook_attacks(to, occupied & !rooks) & self.pieces_of(stm, PieceType::King);
        }

        let mut non_cannons = attackers & !cannon_pieces;
        let mut cannons = attackers & cannon_pieces;
        let mut res = 1;

        loop {
            stm = !stm;
            attackers &= occupied;

            // No more attackers: the side to move gives up the exchange.
            let mut stm_attackers = attackers & self.pieces_by_color(stm);
            if stm_attackers.is_empty() {
                break;
            }

            // Pinned pieces may not take part while a pinner still stands.
            if !(self.pinners(!stm) & occupied).is_empty() {
                stm_attackers &= !self.blockers_for_king(stm);
                if stm_attackers.is_empty() {
                    break;
                }
            }

            res ^= 1;

            // Capture with the least valuable attacker, re-adding whatever
            // x-rays its removal uncovers.
            let bb = stm_attackers & self.pieces_by_kind(PieceType::Pawn);
            if !bb.is_empty() {
                swap = PieceType::Pawn.mg_value() - swap;
                if swap < res {
                    break;
                }
                occupied ^= bb.lsb_bb();
                non_cannons |= rook_attacks(to, occupied) & rooks;
                cannons = cannon_attacks(to, occupied) & cannon_pieces;
                attackers = non_cannons | cannons;
                continue;
            }

            let bb = stm_attackers & self.pieces_by_kind(PieceType::Bishop);
            if !bb.is_empty() {
                swap = PieceType::Bishop.mg_value() - swap;
                if swap < res {
                    break;
                }
                occupied ^= bb.lsb_bb();
                continue;
            }

            let bb = stm_attackers & self.pieces_by_kind(PieceType::Advisor);
            if !bb.is_empty() {
                swap = PieceType::Advisor.mg_value() - swap;
                if swap < res {
                    break;
                }
                occupied ^= bb.lsb_bb();
                non_cannons |= knight_to_attacks(to, occupied)
                    & self.pieces_by_kind(PieceType::Knight);
                attackers = non_cannons | cannons;
                continue;
            }

            let bb = stm_attackers & cannon_pieces;
            if !bb.is_empty() {
                swap = PieceType::Cannon.mg_value() - swap;
                if swap < res {
                    break;
                }
                occupied ^= bb.lsb_bb();
                cannons = cannon_attacks(to, occupied) & cannon_pieces;
                attackers = non_cannons | cannons;
                continue;
            }

            let bb = stm_attackers & self.pieces_by_kind(PieceType::Knight);
            if !bb.is_empty() {
                swap = PieceType::Knight.mg_value() - swap;
                if swap < res {
                    break;
                }
                occupied ^= bb.lsb_bb();
                continue;
            }

            let bb = stm_attackers & rooks;
            if !bb.is_empty() {
                swap = PieceType::Rook.mg_value() - swap;
                if swap < res {
                    break;
                }
                occupied ^= bb.lsb_bb();
                non_cannons |= rook_attacks(to, occupied) & rooks;
                cannons = cannon_attacks(to, occupied) & cannon_pieces;
                attackers = non_cannons | cannons;
                continue;
            }

            // Only the king is left. Capturing with it flips the result if
            // the opponent still has attackers waiting.
            return if (attackers & !self.pieces_by_color(stm)).is_empty() {
                res != 0
            } else {
                res == 0
            };
        }

        res != 0
    }
}
