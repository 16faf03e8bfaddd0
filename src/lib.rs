//! A library for chess board state, piece movement legality and check
//! detection.
//!
//! The [`Board`] owns an 8×8 grid of pieces, tracks the side to move
//! and logs every accepted move. Each [`Piece`] answers whether its
//! movement rules allow a destination, with the board passed in for
//! occupancy queries; the board itself performs all mutation.
//!
//! # Examples
//!
//! Play moves from the starting position:
//!
//! ```
//! use xadrez::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! assert!(board.move_piece(Square::E2, Square::E4));
//! assert!(board.piece_at(Square::E2).is_none());
//! assert_eq!(board.turn(), Color::Black);
//! ```
//!
//! Enumerate the moves of a single piece:
//!
//! ```
//! use xadrez::{Board, Color, Piece, Role, Square};
//!
//! let mut board = Board::empty();
//! let bishop = Piece::new(Color::White, Role::Bishop, Square::D4);
//! board.place_piece(bishop);
//! assert_eq!(bishop.possible_moves(&board).len(), 13);
//! ```
//!
//! Detect check:
//!
//! ```
//! use xadrez::{Board, Color, Piece, Role, Square};
//!
//! let mut board = Board::empty();
//! board.place_piece(Piece::new(Color::White, Role::King, Square::E1));
//! board.place_piece(Piece::new(Color::Black, Role::Rook, Square::E8));
//! assert!(board.is_in_check(Color::White));
//! ```
//!
//! Squares parse from and render to algebraic notation:
//!
//! ```
//! use xadrez::Square;
//!
//! let sq: Square = "e4".parse()?;
//! assert_eq!(sq.to_string(), "e4");
//! # Ok::<_, xadrez::ParseSquareError>(())
//! ```
//!
//! Movement legality is the whole of move validation: [`Board::move_piece`]
//! accepts a move even when it leaves the mover's own king attacked.
//! [`Board::move_piece_safe`] layers that rejection on top.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   the value types.

#![warn(missing_debug_implementations)]

mod board;
mod color;
mod piece;
mod role;
mod square;

pub use board::{Board, MoveRecord, PieceList};
pub use color::{Color, ParseColorError};
pub use piece::{Piece, SquareList};
pub use role::Role;
pub use square::{ParseSquareError, Square};
