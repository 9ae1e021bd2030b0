//! Attack bitboard queries for every piece kind.

use super::tables::{
    dir_is_positive, ADVISOR_ATTACKS, BETWEEN_BB, BISHOP_STEPS, KING_ATTACKS, KNIGHT_LEG_MASK,
    KNIGHT_STEPS, KNIGHT_TO_LEG_MASK, KNIGHT_TO_STEPS, LINE_BB, PAWN_ATTACKS, PAWN_ATTACKS_TO,
    RAYS,
};
use crate::position::types::{Bitboard, Color, PieceType, Square};

/// Squares a rook attacks: file and rank rays up to and including the first
/// occupied square.
#[must_use]
pub fn rook_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for dir in 0..4 {
        let ray = RAYS[dir][sq.index()];
        let blockers = ray & occ;
        attacks |= if blockers.is_empty() {
            ray
        } else {
            let first = closest(dir, blockers);
            ray ^ RAYS[dir][first.index()]
        };
    }
    attacks
}

/// Squares a cannon attacks: on each ray, the squares past the first
/// occupied square (the screen) up to and including the second. Quiet cannon
/// moves follow rook geometry instead.
#[must_use]
pub fn cannon_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for dir in 0..4 {
        let ray = RAYS[dir][sq.index()];
        let blockers = ray & occ;
        if blockers.is_empty() {
            continue;
        }
        let screen = closest(dir, blockers);
        let beyond = RAYS[dir][screen.index()];
        let rest = beyond & occ;
        attacks |= if rest.is_empty() {
            beyond
        } else {
            beyond ^ RAYS[dir][closest(dir, rest).index()]
        };
    }
    attacks
}

#[inline]
fn closest(dir: usize, blockers: Bitboard) -> Square {
    if dir_is_positive(dir) {
        blockers.lsb()
    } else {
        blockers.msb()
    }
}

/// Squares a knight attacks, honoring the leg blocks.
#[must_use]
pub fn knight_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for step in &KNIGHT_STEPS[sq.index()] {
        if (step.block & occ).is_empty() {
            attacks |= step.attacks;
        }
    }
    attacks
}

/// Squares from which a knight attacks `sq`, honoring the leg blocks. The
/// knight's move is not symmetric once legs are occupied, so this is a
/// distinct query from `knight_attacks`.
#[must_use]
pub fn knight_to_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for step in &KNIGHT_TO_STEPS[sq.index()] {
        if (step.block & occ).is_empty() {
            attacks |= step.attacks;
        }
    }
    attacks
}

/// Squares a bishop attacks: two-step diagonals with an empty eye, never
/// crossing the river.
#[must_use]
pub fn bishop_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for step in &BISHOP_STEPS[sq.index()] {
        if (step.block & occ).is_empty() {
            attacks |= step.attacks;
        }
    }
    attacks
}

/// Squares an advisor attacks (one diagonal step inside the palace).
#[inline]
#[must_use]
pub fn advisor_attacks(sq: Square) -> Bitboard {
    ADVISOR_ATTACKS[sq.index()]
}

/// Squares a king attacks (one orthogonal step inside the palace).
#[inline]
#[must_use]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Squares a pawn of `color` on `sq` attacks.
#[inline]
#[must_use]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Squares from which a pawn of `color` attacks `sq`.
#[inline]
#[must_use]
pub fn pawn_attacks_to(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS_TO[color.index()][sq.index()]
}

/// Orthogonal neighbors of `sq`: knights standing there have `sq` as a leg.
#[inline]
#[must_use]
pub fn knight_leg_mask(sq: Square) -> Bitboard {
    KNIGHT_LEG_MASK[sq.index()]
}

/// Diagonal neighbors of `sq`: legs of inverse knight attacks and bishop
/// eyes.
#[inline]
#[must_use]
pub fn knight_to_leg_mask(sq: Square) -> Bitboard {
    KNIGHT_TO_LEG_MASK[sq.index()]
}

/// Attack bitboard for a non-pawn piece kind on `sq` given occupancy.
#[must_use]
pub fn attacks_bb(kind: PieceType, sq: Square, occ: Bitboard) -> Bitboard {
    match kind {
        PieceType::Rook => rook_attacks(sq, occ),
        PieceType::Cannon => cannon_attacks(sq, occ),
        PieceType::Knight => knight_attacks(sq, occ),
        PieceType::Bishop => bishop_attacks(sq, occ),
        PieceType::Advisor => advisor_attacks(sq),
        PieceType::King => king_attacks(sq),
        PieceType::Pawn => unreachable!("pawn attacks depend on color"),
    }
}

/// Squares gating an attack from `b` to `a`, plus `b` itself.
#[inline]
#[must_use]
pub fn between_bb(a: Square, b: Square) -> Bitboard {
    BETWEEN_BB[a.index()][b.index()]
}

/// The full file or rank through two squares, or empty when unaligned.
#[inline]
#[must_use]
pub fn line_bb(a: Square, b: Square) -> Bitboard {
    LINE_BB[a.index()][b.index()]
}

/// Whether `c` lies on the file or rank through `a` and `b`.
#[inline]
#[must_use]
pub fn aligned(a: Square, b: Square, c: Square) -> bool {
    line_bb(a, b).contains(c)
}
