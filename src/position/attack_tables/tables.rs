//! Precomputed attack tables.
//!
//! Leaper tables for kings, advisors and pawns; blocked-step tables for the
//! pieces whose moves a single intervening piece can veto (knight leg,
//! bishop eye, the knight-to inverse); ray, line and between tables for the
//! sliding geometry.

use std::sync::LazyLock;

use crate::position::types::{Bitboard, Color, Square, COLOR_NB, SQUARE_NB};

/// A single candidate step that one occupied square can veto: the move is
/// available iff `block` is empty of pieces.
#[derive(Clone, Copy)]
pub(crate) struct BlockedStep {
    pub(crate) block: Bitboard,
    pub(crate) attacks: Bitboard,
}

const EMPTY_STEP: BlockedStep = BlockedStep {
    block: Bitboard::EMPTY,
    attacks: Bitboard::EMPTY,
};

fn leaper_mask(sq: Square, deltas: &[(isize, isize)]) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    for &(df, dr) in deltas {
        if let Some(to) = sq.offset(df, dr) {
            bb |= to;
        }
    }
    bb
}

/// King steps: one square orthogonally, confined to the palace.
pub(crate) static KING_ATTACKS: LazyLock<[Bitboard; SQUARE_NB]> = LazyLock::new(|| {
    let palace = Bitboard::WHITE_PALACE | Bitboard::BLACK_PALACE;
    let mut attacks = [Bitboard::EMPTY; SQUARE_NB];
    for (idx, slot) in attacks.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        if palace.contains(sq) {
            *slot = leaper_mask(sq, &[(0, 1), (1, 0), (0, -1), (-1, 0)]) & palace;
        }
    }
    attacks
});

/// Advisor steps: one square diagonally, confined to the palace.
pub(crate) static ADVISOR_ATTACKS: LazyLock<[Bitboard; SQUARE_NB]> = LazyLock::new(|| {
    let palace = Bitboard::WHITE_PALACE | Bitboard::BLACK_PALACE;
    let mut attacks = [Bitboard::EMPTY; SQUARE_NB];
    for (idx, slot) in attacks.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        if palace.contains(sq) {
            *slot = leaper_mask(sq, &[(1, 1), (1, -1), (-1, 1), (-1, -1)]) & palace;
        }
    }
    attacks
});

/// Pawn attacks by color: the forward step, plus sideways steps once the
/// pawn has crossed the river.
pub(crate) static PAWN_ATTACKS: LazyLock<[[Bitboard; SQUARE_NB]; COLOR_NB]> =
    LazyLock::new(|| {
        let mut attacks = [[Bitboard::EMPTY; SQUARE_NB]; COLOR_NB];
        for idx in 0..SQUARE_NB {
            let sq = Square::from_index(idx);
            let mut white = Bitboard::EMPTY;
            if let Some(to) = sq.offset(0, 1) {
                white |= to;
            }
            if Bitboard::BLACK_HALF.contains(sq) {
                white |= leaper_mask(sq, &[(1, 0), (-1, 0)]);
            }
            let mut black = Bitboard::EMPTY;
            if let Some(to) = sq.offset(0, -1) {
                black |= to;
            }
            if Bitboard::WHITE_HALF.contains(sq) {
                black |= leaper_mask(sq, &[(1, 0), (-1, 0)]);
            }
            attacks[Color::White.index()][idx] = white;
            attacks[Color::Black.index()][idx] = black;
        }
        attacks
    });

/// Squares from which a pawn of the given color attacks the indexed square.
pub(crate) static PAWN_ATTACKS_TO: LazyLock<[[Bitboard; SQUARE_NB]; COLOR_NB]> =
    LazyLock::new(|| {
        let mut attacks = [[Bitboard::EMPTY; SQUARE_NB]; COLOR_NB];
        for idx in 0..SQUARE_NB {
            let sq = Square::from_index(idx);
            let mut white = Bitboard::EMPTY;
            if let Some(from) = sq.offset(0, -1) {
                white |= from;
            }
            // A sideways attacker shares the target's rank, so it has
            // crossed the river exactly when the target square lies beyond it.
            if Bitboard::BLACK_HALF.contains(sq) {
                white |= leaper_mask(sq, &[(1, 0), (-1, 0)]);
            }
            let mut black = Bitboard::EMPTY;
            if let Some(from) = sq.offset(0, 1) {
                black |= from;
            }
            if Bitboard::WHITE_HALF.contains(sq) {
                black |= leaper_mask(sq, &[(1, 0), (-1, 0)]);
            }
            attacks[Color::White.index()][idx] = white;
            attacks[Color::Black.index()][idx] = black;
        }
        attacks
    });

/// Knight steps from a square. Each orthogonal neighbor is the leg for the
/// two moves bending around it.
pub(crate) static KNIGHT_STEPS: LazyLock<[[BlockedStep; 4]; SQUARE_NB]> = LazyLock::new(|| {
    // (leg delta, [target deltas])
    let legs: [((isize, isize), [(isize, isize); 2]); 4] = [
        ((0, 1), [(1, 2), (-1, 2)]),
        ((0, -1), [(1, -2), (-1, -2)]),
        ((1, 0), [(2, 1), (2, -1)]),
        ((-1, 0), [(-2, 1), (-2, -1)]),
    ];
    let mut steps = [[EMPTY_STEP; 4]; SQUARE_NB];
    for (idx, slots) in steps.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        for (slot, &(leg, targets)) in slots.iter_mut().zip(legs.iter()) {
            if let Some(leg_sq) = sq.offset(leg.0, leg.1) {
                *slot = BlockedStep {
                    block: Bitboard::from_square(leg_sq),
                    attacks: leaper_mask(sq, &targets),
                };
            }
        }
    }
    steps
});

/// Inverse knight steps: the squares a knight could attack this square
/// from. Each diagonal neighbor is the leg for the two origins behind it.
pub(crate) static KNIGHT_TO_STEPS: LazyLock<[[BlockedStep; 4]; SQUARE_NB]> = LazyLock::new(|| {
    let legs: [((isize, isize), [(isize, isize); 2]); 4] = [
        ((1, 1), [(1, 2), (2, 1)]),
        ((1, -1), [(1, -2), (2, -1)]),
        ((-1, 1), [(-1, 2), (-2, 1)]),
        ((-1, -1), [(-1, -2), (-2, -1)]),
    ];
    let mut steps = [[EMPTY_STEP; 4]; SQUARE_NB];
    for (idx, slots) in steps.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        for (slot, &(leg, origins)) in slots.iter_mut().zip(legs.iter()) {
            if let Some(leg_sq) = sq.offset(leg.0, leg.1) {
                *slot = BlockedStep {
                    block: Bitboard::from_square(leg_sq),
                    attacks: leaper_mask(sq, &origins),
                };
            }
        }
    }
    steps
});

/// Bishop steps: two squares diagonally, vetoed by the eye square, never
/// across the river.
pub(crate) static BISHOP_STEPS: LazyLock<[[BlockedStep; 4]; SQUARE_NB]> = LazyLock::new(|| {
    let diagonals: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
    let mut steps = [[EMPTY_STEP; 4]; SQUARE_NB];
    for (idx, slots) in steps.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        let own_half = if Bitboard::WHITE_HALF.contains(sq) {
            Bitboard::WHITE_HALF
        } else {
            Bitboard::BLACK_HALF
        };
        for (slot, &(df, dr)) in slots.iter_mut().zip(diagonals.iter()) {
            if let (Some(eye), Some(to)) = (sq.offset(df, dr), sq.offset(2 * df, 2 * dr)) {
                if own_half.contains(to) {
                    *slot = BlockedStep {
                        block: Bitboard::from_square(eye),
                        attacks: Bitboard::from_square(to),
                    };
                }
            }
        }
    }
    steps
});

/// Orthogonal neighbors: the squares whose occupant would veto some knight
/// move departing from here, and conversely the squares a knight must stand
/// on for this square to be its leg.
pub(crate) static KNIGHT_LEG_MASK: LazyLock<[Bitboard; SQUARE_NB]> = LazyLock::new(|| {
    let mut masks = [Bitboard::EMPTY; SQUARE_NB];
    for (idx, slot) in masks.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        *slot = leaper_mask(sq, &[(0, 1), (1, 0), (0, -1), (-1, 0)]);
    }
    masks
});

/// Diagonal neighbors: the legs of inverse knight attacks, which double as
/// bishop eye squares.
pub(crate) static KNIGHT_TO_LEG_MASK: LazyLock<[Bitboard; SQUARE_NB]> = LazyLock::new(|| {
    let mut masks = [Bitboard::EMPTY; SQUARE_NB];
    for (idx, slot) in masks.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        *slot = leaper_mask(sq, &[(1, 1), (1, -1), (-1, 1), (-1, -1)]);
    }
    masks
});

/// Ray directions, ordered so that the first two run toward higher square
/// indices (nearest blocker = lowest set bit).
pub(crate) const DIR_NB: usize = 4;
const RAY_DELTAS: [(isize, isize); DIR_NB] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Whether the nearest square along a direction is the lowest set bit.
#[inline]
pub(crate) const fn dir_is_positive(dir: usize) -> bool {
    dir < 2
}

/// Rays from each square, excluding the square itself.
pub(crate) static RAYS: LazyLock<[[Bitboard; SQUARE_NB]; DIR_NB]> = LazyLock::new(|| {
    let mut rays = [[Bitboard::EMPTY; SQUARE_NB]; DIR_NB];
    for (dir, &(df, dr)) in RAY_DELTAS.iter().enumerate() {
        for idx in 0..SQUARE_NB {
            let mut bb = Bitboard::EMPTY;
            let mut cur = Square::from_index(idx);
            while let Some(next) = cur.offset(df, dr) {
                bb |= next;
                cur = next;
            }
            rays[dir][idx] = bb;
        }
    }
    rays
});

/// `LINE_BB[a][b]`: the full file or rank through both squares, or empty
/// when they are not on a common line.
pub(crate) static LINE_BB: LazyLock<Box<[[Bitboard; SQUARE_NB]; SQUARE_NB]>> =
    LazyLock::new(|| {
        let mut table = Box::new([[Bitboard::EMPTY; SQUARE_NB]; SQUARE_NB]);
        for a in 0..SQUARE_NB {
            let sa = Square::from_index(a);
            for b in 0..SQUARE_NB {
                let sb = Square::from_index(b);
                if a == b {
                    continue;
                }
                if sa.file() == sb.file() {
                    table[a][b] = Bitboard::file_mask(sa.file());
                } else if sa.rank() == sb.rank() {
                    table[a][b] = Bitboard::rank_mask(sa.rank());
                }
            }
        }
        table
    });

/// `BETWEEN_BB[a][b]`: the squares whose occupancy gates an attack from `b`
/// to `a`, plus `b` itself. For aligned squares these are the squares
/// strictly between the two; for a knight relation it is the leg of the
/// attacker on `b`.
pub(crate) static BETWEEN_BB: LazyLock<Box<[[Bitboard; SQUARE_NB]; SQUARE_NB]>> =
    LazyLock::new(|| {
        let mut table = Box::new([[Bitboard::EMPTY; SQUARE_NB]; SQUARE_NB]);
        for a in 0..SQUARE_NB {
            let sa = Square::from_index(a);
            for b in 0..SQUARE_NB {
                let sb = Square::from_index(b);
                if a == b {
                    continue;
                }
                if sa.file() == sb.file() || sa.rank() == sb.rank() {
                    let mut bb = Bitboard::EMPTY;
                    let df = (sb.file() as isize - sa.file() as isize).signum();
                    let dr = (sb.rank() as isize - sa.rank() as isize).signum();
                    let mut cur = sa;
                    while let Some(next) = cur.offset(df, dr) {
                        bb |= next;
                        if next == sb {
                            break;
                        }
                        cur = next;
                    }
                    table[a][b] = bb;
                } else {
                    // Knight relation: b attacks a around the leg adjacent to b.
                    let df = sb.file() as isize - sa.file() as isize;
                    let dr = sb.rank() as isize - sa.rank() as isize;
                    if (df.abs() == 1 && dr.abs() == 2) || (df.abs() == 2 && dr.abs() == 1) {
                        let leg = if df.abs() == 2 {
                            sb.offset(-df.signum(), 0)
                        } else {
                            sb.offset(0, -dr.signum())
                        };
                        if let Some(leg_sq) = leg {
                            table[a][b] = Bitboard::from_square(leg_sq) | sb;
                        }
                    }
                }
            }
        }
        table
    });
