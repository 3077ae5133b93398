//! Rules engine for standard chess.
//!
//! This crate provides:
//! - [`Board`] - 64 cells, the side to move, the en-passant target and a single undo snapshot
//! - Path geometry ([`tiles_between`], [`Board::clear_path`]) and attack detection
//! - Move legality and execution, including castling, en passant and promotion
//! - Check, checkmate, stalemate and insufficient-material detection
//! - JSON serialization of the board state
//! - [`Game`] - a session that tracks the result and refuses moves once it is over
//!
//! The engine decides whether moves are legal and whether the game is over.
//! It never evaluates how good a move is.
//!
//! # Example
//!
//! ```
//! use chess_engine::{Board, GameResult};
//! use chess_core::{Color, Square};
//!
//! let mut board = Board::new();
//! for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
//!     let from = Square::from_algebraic(from).unwrap();
//!     let to = Square::from_algebraic(to).unwrap();
//!     board.make_move(from, to).unwrap();
//! }
//! assert_eq!(board.game_result(), Some(GameResult::Checkmate { winner: Color::Black }));
//! ```

mod attacks;
mod board;
mod game;
mod geometry;
pub mod rules;
mod serialize;

pub use board::{Board, Snapshot};
pub use game::{Game, GameError};
pub use geometry::{tiles_between, Path};
pub use rules::{DrawReason, GameResult, MoveError, MoveOutcome};
pub use serialize::SerializeError;
