//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Color`] for the two players
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`PieceKind`] and [`Piece`] with their move-offset tables
//! - [`Move`] for move requests handed to the engine
//! - [`CoreError`] for malformed coordinates and piece records

mod color;
mod error;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use error::CoreError;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{File, Rank, Square};
