//! Piece and color types.

use std::fmt;
use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::state::Value;

/// Number of colors.
pub const COLOR_NB: usize = 2;
/// Number of piece kinds.
pub const PIECE_TYPE_NB: usize = 7;

/// Side colors. White plays up the board from rank 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1).
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Xiangqi piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Rook,
    Advisor,
    Cannon,
    Pawn,
    Knight,
    Bishop,
    King,
}

impl PieceType {
    /// All piece kinds in index order.
    pub const ALL: [PieceType; 7] = [
        PieceType::Rook,
        PieceType::Advisor,
        PieceType::Cannon,
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::King,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PieceType::Rook => 0,
            PieceType::Advisor => 1,
            PieceType::Cannon => 2,
            PieceType::Pawn => 3,
            PieceType::Knight => 4,
            PieceType::Bishop => 5,
            PieceType::King => 6,
        }
    }

    /// Parse a piece kind from a lowercase character (r, a, c, p, n, b, k).
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'r' => Some(PieceType::Rook),
            'a' => Some(PieceType::Advisor),
            'c' => Some(PieceType::Cannon),
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    /// Convert to lowercase character.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Rook => 'r',
            PieceType::Advisor => 'a',
            PieceType::Cannon => 'c',
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::King => 'k',
        }
    }

    /// Middlegame material value in centipawns.
    ///
    /// The king carries no material value: it is incapturable.
    #[inline]
    #[must_use]
    pub const fn mg_value(self) -> Value {
        match self {
            PieceType::Rook => 1213,
            PieceType::Advisor => 188,
            PieceType::Cannon => 697,
            PieceType::Pawn => 139,
            PieceType::Knight => 688,
            PieceType::Bishop => 205,
            PieceType::King => 0,
        }
    }
}

/// A colored piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    color: Color,
    kind: PieceType,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: PieceType) -> Self {
        Piece { color, kind }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceType {
        self.kind
    }

    /// Parse a piece from a FEN character; case selects the color.
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        PieceType::from_char(c).map(|kind| Piece::new(color, kind))
    }

    /// Convert to a FEN character (uppercase for White).
    #[inline]
    #[must_use]
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_not() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn test_piece_type_index_order() {
        for (i, pt) in PieceType::ALL.iter().enumerate() {
            assert_eq!(pt.index(), i);
        }
    }

    #[test]
    fn test_piece_type_char_round_trip() {
        for pt in PieceType::ALL {
            assert_eq!(PieceType::from_char(pt.to_char()), Some(pt));
        }
        assert_eq!(PieceType::from_char('q'), None);
    }

    #[test]
    fn test_piece_from_char_color() {
        let wr = Piece::from_char('R').unwrap();
        assert_eq!(wr.color(), Color::White);
        assert_eq!(wr.kind(), PieceType::Rook);
        assert_eq!(wr.to_char(), 'R');

        let bc = Piece::from_char('c').unwrap();
        assert_eq!(bc.color(), Color::Black);
        assert_eq!(bc.kind(), PieceType::Cannon);
        assert_eq!(bc.to_char(), 'c');
    }

    #[test]
    fn test_value_ordering() {
        assert!(PieceType::Pawn.mg_value() < PieceType::Advisor.mg_value());
        assert!(PieceType::Advisor.mg_value() < PieceType::Knight.mg_value());
        assert!(PieceType::Bishop.mg_value() < PieceType::Knight.mg_value());
        assert!(PieceType::Knight.mg_value() < PieceType::Cannon.mg_value());
        assert!(PieceType::Cannon.mg_value() < PieceType::Rook.mg_value());
        assert_eq!(PieceType::King.mg_value(), 0);
    }
}
