//! Debug-build consistency checks.

use super::types::{Bitboard, Color, PieceType};
use super::Position;

impl Position {
    /// Full self-check of the position invariants. Compiled into debug
    /// builds only and run after every state transition; the release hot
    /// path carries no checks.
    pub(crate) fn assert_ok(&self) {
        // Kings present, on the board arrays and in their palaces.
        for color in Color::BOTH {
            let kings = self.pieces_of(color, PieceType::King);
            assert_eq!(kings.popcount(), 1, "{color} must have exactly one king");
            let ksq = self.king_square(color);
            assert!(
                Bitboard::palace(color).contains(ksq),
                "{color} king outside its palace"
            );
            assert_eq!(
                self.piece_on(ksq).map(|pc| (pc.color(), pc.kind())),
                Some((color, PieceType::King))
            );
        }

        // The side that just moved may not be left in check.
        assert!(
            self.checkers_to(
                self.side_to_move,
                self.king_square(!self.side_to_move),
                self.pieces()
            )
            .is_empty(),
            "side not to move is in check"
        );

        // Bitboard views agree with each other and with the board array.
        assert!((self.by_color[0] & self.by_color[1]).is_empty());
        let mut union = Bitboard::EMPTY;
        for kind in PieceType::ALL {
            for other in PieceType::ALL {
                if kind != other {
                    assert!(
                        (self.pieces_by_kind(kind) & self.pieces_by_kind(other)).is_empty(),
                        "piece kind bitboards overlap"
                    );
                }
            }
            union |= self.pieces_by_kind(kind);
        }
        assert_eq!(union, self.pieces());
        for sq in self.pieces() {
            assert!(self.piece_on(sq).is_some(), "occupancy disagrees with board");
        }

        // Piece counts and tallies.
        for color in Color::BOTH {
            assert!(self.pieces_by_color(color).popcount() <= 16);
            assert!(self.pieces_of(color, PieceType::Pawn).popcount() <= 5);
            for kind in PieceType::ALL {
                assert_eq!(
                    u32::from(self.piece_count[color.index()][kind.index()]),
                    self.pieces_of(color, kind).popcount(),
                    "piece count disagrees with bitboards"
                );
            }
        }

        // The incrementally maintained state must match a recomputation.
        let st = self.st();
        assert_eq!(st.key, self.computed_key(), "incremental key drifted");
        assert_eq!(
            st.non_pawn_material,
            self.computed_non_pawn_material(),
            "incremental material drifted"
        );
        assert_eq!(
            st.checkers,
            self.checkers_to(
                !self.side_to_move,
                self.king_square(self.side_to_move),
                self.pieces()
            ),
            "checkers bitboard drifted"
        );
        let (white_blockers, black_pinners) = self.king_blockers(
            self.pieces_by_color(Color::Black),
            self.king_square(Color::White),
        );
        let (black_blockers, white_pinners) = self.king_blockers(
            self.pieces_by_color(Color::White),
            self.king_square(Color::Black),
        );
        assert_eq!(st.blockers_for_king, [white_blockers, black_blockers]);
        assert_eq!(st.pinners, [white_pinners, black_pinners]);
    }
}
