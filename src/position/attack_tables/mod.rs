//! The geometry oracle: pure attack-bitboard queries over the 9x10 board.

mod attacks;
mod tables;

pub use attacks::{
    advisor_attacks, aligned, attacks_bb, between_bb, bishop_attacks, cannon_attacks,
    king_attacks, knight_attacks, knight_leg_mask, knight_to_attacks, knight_to_leg_mask,
    line_bb, pawn_attacks, pawn_attacks_to, rook_attacks,
};
