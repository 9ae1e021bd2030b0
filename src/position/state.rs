//! Per-ply derived state.
//!
//! One `StateInfo` is kept per ply on a stack owned by the position. Making
//! a move pushes a record seeded from the previous one; `non_pawn_material`
//! and `plies_from_null` carry over and are adjusted incrementally, while
//! `key`, `checkers`, the check info and the chase set are recomputed.

use super::types::{Bitboard, Move, Piece, Square, COLOR_NB, PIECE_TYPE_NB};

/// Zobrist hash key.
pub type Key = u64;

/// Score in centipawns.
pub type Value = i32;

pub const VALUE_DRAW: Value = 0;
pub const VALUE_MATE: Value = 32000;

/// Maximum search depth the per-worker state stack is sized for.
pub const MAX_PLY: usize = 128;

/// One piece movement for incremental evaluator updates. `to == None`
/// encodes a removal (the piece was captured).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Option<Square>,
}

/// The per-move delta the evaluator consumes: at most two piece movements.
/// Entry 0 is the mover; entry 1, when present, is the captured piece. Null
/// moves record no entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyPiece {
    pub moves: [Option<PieceMove>; 2],
}

impl DirtyPiece {
    /// Number of recorded piece movements (0-2).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.iter().flatten().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves[0].is_none()
    }
}

/// Incremental-evaluator freshness flags, invalidated on every move.
#[derive(Clone, Copy, Debug, Default)]
pub struct Accumulator {
    pub computed: [bool; COLOR_NB],
}

/// Derived facts about one ply, memoised for the analysers.
#[derive(Clone, Copy, Debug)]
pub struct StateInfo {
    /// Material excluding pawns and kings, per color. Carried across moves
    /// and adjusted on captures.
    pub(crate) non_pawn_material: [Value; COLOR_NB],
    /// Plies since the last null move (or since setup). Carried and
    /// incremented; bounds the repetition walk.
    pub(crate) plies_from_null: i32,

    /// Zobrist key of the position.
    pub(crate) key: Key,
    /// Enemy pieces giving check to the side to move.
    pub(crate) checkers: Bitboard,
    /// Pieces of either color shielding each king from a sniper behind them.
    pub(crate) blockers_for_king: [Bitboard; COLOR_NB],
    /// Per color, that color's snipers that pin an enemy piece.
    pub(crate) pinners: [Bitboard; COLOR_NB],
    /// Squares from which each piece kind would attack the enemy king.
    pub(crate) check_squares: [Bitboard; PIECE_TYPE_NB],
    /// Piece captured by the move that produced this state.
    pub(crate) captured: Option<Piece>,
    /// Side-to-move pieces the last move started chasing.
    pub(crate) chased: Bitboard,
    /// The move that produced this state (`Move::NONE` for the root and
    /// after null moves).
    pub(crate) mv: Move,
    /// Evaluator delta for this ply.
    pub(crate) dirty: DirtyPiece,
    /// Evaluator freshness flags.
    pub(crate) accumulator: Accumulator,
}

impl StateInfo {
    pub(crate) fn new() -> Self {
        StateInfo {
            non_pawn_material: [0; COLOR_NB],
            plies_from_null: 0,
            key: 0,
            checkers: Bitboard::EMPTY,
            blockers_for_king: [Bitboard::EMPTY; COLOR_NB],
            pinners: [Bitboard::EMPTY; COLOR_NB],
            check_squares: [Bitboard::EMPTY; PIECE_TYPE_NB],
            captured: None,
            chased: Bitboard::EMPTY,
            mv: Move::NONE,
            dirty: DirtyPiece::default(),
            accumulator: Accumulator::default(),
        }
    }
}
