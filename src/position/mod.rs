//! Position state and the analysers built on it.

pub mod attack_tables;
mod chase;
#[cfg(debug_assertions)]
mod debug;
mod error;
mod fen;
mod legality;
mod make_unmake;
mod repetition;
mod see;
mod state;
mod types;

#[cfg(test)]
mod tests;

use std::fmt;

pub use error::{FenError, MoveParseError, SquareError};
pub use state::{
    Accumulator, DirtyPiece, Key, PieceMove, StateInfo, Value, MAX_PLY, VALUE_DRAW, VALUE_MATE,
};
pub use types::{
    Bitboard, BitboardIter, Color, Move, Piece, PieceType, Square, COLOR_NB, FILE_NB,
    PIECE_TYPE_NB, RANK_NB, SQUARE_NB,
};

use crate::sync::NodeCounter;

/// A xiangqi position: board state, side to move, and the per-ply stack of
/// derived state the search and the analysers read.
///
/// The per-ply records live in a pre-reserved stack owned by the position,
/// so `do_move`/`undo_move` never allocate once the stack has grown to the
/// search depth.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: [Option<Piece>; SQUARE_NB],
    pub(crate) by_kind: [Bitboard; PIECE_TYPE_NB],
    pub(crate) by_color: [Bitboard; COLOR_NB],
    pub(crate) piece_count: [[u8; PIECE_TYPE_NB]; COLOR_NB],
    pub(crate) side_to_move: Color,
    pub(crate) game_ply: i32,
    pub(crate) states: Vec<StateInfo>,
    pub(crate) nodes: NodeCounter,
}

impl Position {
    /// FEN of the standard starting position.
    pub const START_FEN: &'static str =
        "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

    /// Create the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_fen(Self::START_FEN)
    }

    pub(crate) fn empty() -> Self {
        let mut states = Vec::with_capacity(2 * MAX_PLY);
        states.push(StateInfo::new());
        Position {
            board: [None; SQUARE_NB],
            by_kind: [Bitboard::EMPTY; PIECE_TYPE_NB],
            by_color: [Bitboard::EMPTY; COLOR_NB],
            piece_count: [[0; PIECE_TYPE_NB]; COLOR_NB],
            side_to_move: Color::White,
            game_ply: 0,
            states,
            nodes: NodeCounter::new(),
        }
    }

    /// Attach the owning worker's node counter. `do_move` increments it.
    pub fn set_node_counter(&mut self, nodes: NodeCounter) {
        self.nodes = nodes;
    }

    /// Side to move.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Half-moves played since the start of the game.
    #[inline]
    #[must_use]
    pub fn game_ply(&self) -> i32 {
        self.game_ply
    }

    /// Zobrist key of the current position.
    #[inline]
    #[must_use]
    pub fn key(&self) -> Key {
        self.st().key
    }

    /// Enemy pieces currently giving check to the side to move.
    #[inline]
    #[must_use]
    pub fn checkers(&self) -> Bitboard {
        self.st().checkers
    }

    /// Piece captured by the last move, if any.
    #[inline]
    #[must_use]
    pub fn captured_piece(&self) -> Option<Piece> {
        self.st().captured
    }

    /// Pieces shielding `color`'s king from a sniper behind them.
    #[inline]
    #[must_use]
    pub fn blockers_for_king(&self, color: Color) -> Bitboard {
        self.st().blockers_for_king[color.index()]
    }

    /// `color`'s snipers that currently pin an enemy piece.
    #[inline]
    #[must_use]
    pub fn pinners(&self, color: Color) -> Bitboard {
        self.st().pinners[color.index()]
    }

    /// Squares from which a piece of `kind` would attack the enemy king.
    #[inline]
    #[must_use]
    pub fn check_squares(&self, kind: PieceType) -> Bitboard {
        self.st().check_squares[kind.index()]
    }

    /// Evaluator delta of the last move.
    #[inline]
    #[must_use]
    pub fn dirty_piece(&self) -> &DirtyPiece {
        &self.st().dirty
    }

    /// Material excluding pawns and kings for one side.
    #[inline]
    #[must_use]
    pub fn non_pawn_material(&self, color: Color) -> Value {
        self.st().non_pawn_material[color.index()]
    }

    /// All occupied squares.
    #[inline]
    #[must_use]
    pub fn pieces(&self) -> Bitboard {
        self.by_color[0] | self.by_color[1]
    }

    /// Squares occupied by one side.
    #[inline]
    #[must_use]
    pub fn pieces_by_color(&self, color: Color) -> Bitboard {
        self.by_color[color.index()]
    }

    /// Squares occupied by a piece kind of either color.
    #[inline]
    #[must_use]
    pub fn pieces_by_kind(&self, kind: PieceType) -> Bitboard {
        self.by_kind[kind.index()]
    }

    /// Squares occupied by one side's pieces of one kind.
    #[inline]
    #[must_use]
    pub fn pieces_of(&self, color: Color, kind: PieceType) -> Bitboard {
        self.by_color[color.index()] & self.by_kind[kind.index()]
    }

    /// The piece standing on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    /// Whether a square is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.board[sq.index()].is_none()
    }

    /// The square of `color`'s king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        debug_assert!(!self.pieces_of(color, PieceType::King).is_empty());
        self.pieces_of(color, PieceType::King).lsb()
    }

    /// The piece a move would displace.
    #[inline]
    #[must_use]
    pub fn moved_piece(&self, m: Move) -> Option<Piece> {
        self.piece_on(m.from())
    }

    /// Whether a move captures.
    #[inline]
    #[must_use]
    pub fn is_capture(&self, m: Move) -> bool {
        !self.is_empty(m.to())
    }

    /// Nodes counted by the attached worker counter.
    #[inline]
    #[must_use]
    pub fn nodes_searched(&self) -> u64 {
        self.nodes.get()
    }

    #[inline]
    pub(crate) fn st(&self) -> &StateInfo {
        self.states.last().expect("state stack is never empty")
    }

    #[inline]
    pub(crate) fn st_mut(&mut self) -> &mut StateInfo {
        self.states.last_mut().expect("state stack is never empty")
    }

    /// The state `back` plies behind the current one.
    #[inline]
    pub(crate) fn state_at(&self, back: usize) -> &StateInfo {
        &self.states[self.states.len() - 1 - back]
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = " +---+---+---+---+---+---+---+---+---+";
        writeln!(f)?;
        writeln!(f, "{sep}")?;
        for rank in (0..RANK_NB).rev() {
            for file in 0..FILE_NB {
                let c = self
                    .piece_on(Square::new(rank, file))
                    .map_or(' ', Piece::to_char);
                write!(f, " | {c}")?;
            }
            writeln!(f, " | {rank}")?;
            writeln!(f, "{sep}")?;
        }
        writeln!(f, "   a   b   c   d   e   f   g   h   i")?;
        writeln!(f)?;
        writeln!(f, "Fen: {}", self.fen())?;
        writeln!(f, "Key: {:016X}", self.key())?;
        write!(f, "Checkers:")?;
        for sq in self.checkers() {
            write!(f, " {sq}")?;
        }
        Ok(())
    }
}
