//! Core value types: squares, pieces, bitboards, moves.

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::Move;
pub use piece::{Color, Piece, PieceType, COLOR_NB, PIECE_TYPE_NB};
pub use square::{Square, FILE_NB, RANK_NB, SQUARE_NB};
