//! Xiangqi (Chinese chess) position core.
//!
//! Provides the board-state layer of a xiangqi engine:
//! - Bitboard-based board representation over the 9x10 board
//! - Incremental move make/unmake with Zobrist hashing
//! - Legality and check testing (flying general, pins, horse legs, cannon screens)
//! - Static exchange evaluation (`see_ge`)
//! - Repetition, perpetual-check and perpetual-chase adjudication under Asian rules
//!
//! # Quick Start
//!
//! ```
//! use xiangqi_engine::position::Position;
//!
//! // Create a new game from the starting position
//! let mut pos = Position::new();
//!
//! // Parse and make a move (cannon h2 slides to the center file)
//! let mv = pos.parse_move("h2e2").unwrap();
//! let gives_check = pos.gives_check(mv);
//! pos.do_move(mv, gives_check);
//!
//! // Take it back; the position round-trips exactly
//! pos.undo_move(mv);
//! assert_eq!(pos.fen(), Position::START_FEN);
//! ```
//!
//! # Building Positions
//!
//! ```
//! use xiangqi_engine::position::Position;
//!
//! // From FEN notation (ranks 9..0, files a..i)
//! let pos = Position::from_fen("3k3r1/9/9/9/9/9/9/7c1/7R1/4K4 w - - 0 1");
//! assert!(!pos.see_ge(pos.parse_move("h1h2").unwrap(), 0));
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Color`, `PieceType`, `Piece`, `Square` and `Move`
//! - `logging` - Enable optional debug logging via the `log` crate

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Engines have intentionally similar names (chase_us/chase_them, etc.)
#![allow(clippy::similar_names)]
// Index casts are ubiquitous and safe here (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod position;
pub mod sync;
pub mod zobrist;
