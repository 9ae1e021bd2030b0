//! FEN parsing and emission, UCI move parsing.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::types::{Color, Move, Piece, PieceType, Square, FILE_NB, RANK_NB};
use super::Position;

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The grammar is the 9x10 variant: ten rank records (rank 9 first)
    /// separated by `/`, digits 1-9 for empty runs, piece letters `RACPNBK`
    /// (uppercase white, lowercase black), then the side letter. Two filler
    /// fields and the halfmove clock are read and discarded; the fullmove
    /// number seeds the game ply.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut pos = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        for (i, rank_str) in parts[0].split('/').enumerate() {
            if i >= RANK_NB {
                return Err(FenError::TooManyRanks { ranks: i + 1 });
            }
            let rank = RANK_NB - 1 - i;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { ch: c })?;
                    if file >= FILE_NB {
                        return Err(FenError::TooManyFiles {
                            rank,
                            files: file + 1,
                        });
                    }
                    pos.put_piece(piece, Square::new(rank, file));
                    file += 1;
                }
            }
        }

        for color in Color::BOTH {
            let kings = pos.pieces_of(color, PieceType::King).popcount() as usize;
            if kings != 1 {
                return Err(FenError::BadKingCount { kings });
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Fields 3-5 (two fillers and the halfmove clock) are read and
        // discarded; only the fullmove number reaches the ply counter.
        let fullmove: i32 = parts
            .get(5)
            .and_then(|s| s.parse().ok())
            .unwrap_or(1);
        pos.game_ply =
            (2 * (fullmove - 1)).max(0) + i32::from(pos.side_to_move == Color::Black);

        pos.set_state();

        #[cfg(feature = "logging")]
        log::debug!("position set: {}", pos.fen());

        #[cfg(debug_assertions)]
        pos.assert_ok();

        Ok(pos)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Emit the position as FEN.
    #[must_use]
    pub fn fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..RANK_NB).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..FILE_NB {
                if let Some(piece) = self.piece_on(Square::new(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = if self.side_to_move == Color::White {
            "w"
        } else {
            "b"
        };
        let fullmove = 1 + (self.game_ply - i32::from(self.side_to_move == Color::Black)) / 2;

        format!("{} {side} - - 0 {fullmove}", rows.join("/"))
    }

    /// Parse a move in coordinate notation (e.g. "h2e2") and validate it
    /// against the current position.
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        let m = Move::from_str(uci)?;
        if self.pseudo_legal(m) && self.legal(m) {
            Ok(m)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
        }
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
