//! Zobrist hashing keys.
//!
//! A process-wide immutable table mapping each (color, piece kind, square)
//! triple to a 64-bit key, plus one key for the side to move. The table is
//! seeded deterministically so hash keys reproduce across runs.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::position::{Piece, Square, COLOR_NB, PIECE_TYPE_NB, SQUARE_NB};

/// Fixed seed for the key table.
const ZOBRIST_SEED: u64 = 1070372;

pub struct ZobristKeys {
    /// Keys indexed by `[color][piece kind][square]`.
    pub piece_keys: [[[u64; SQUARE_NB]; PIECE_TYPE_NB]; COLOR_NB],
    /// Key XORed in when black is to move.
    pub side_key: u64,
}

impl ZobristKeys {
    /// Key for a piece standing on a square.
    #[inline]
    #[must_use]
    pub fn psq(&self, pc: Piece, sq: Square) -> u64 {
        self.piece_keys[pc.color().index()][pc.kind().index()][sq.index()]
    }
}

pub static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
    let mut piece_keys = [[[0u64; SQUARE_NB]; PIECE_TYPE_NB]; COLOR_NB];
    for color in &mut piece_keys {
        for kind in color.iter_mut() {
            for key in kind.iter_mut() {
                *key = rng.gen();
            }
        }
    }
    let side_key = rng.gen();
    ZobristKeys {
        piece_keys,
        side_key,
    }
});
