//! Move legality, move execution and end-of-game evaluation.
//!
//! The board only decides whether a move is allowed and whether the game is
//! over; it never judges how good a move is.

mod execute;
mod legality;
mod terminal;

pub use execute::MoveOutcome;

use chess_core::{Color, Square};
use std::fmt;
use thiserror::Error;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The side to move is in check and has no move that escapes it.
    Checkmate { winner: Color },
    /// The side to move gave up.
    Resignation { winner: Color },
    /// Draw with a specific reason.
    Draw(DrawReason),
}

impl GameResult {
    /// Returns the winning color, or `None` for a draw.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::Checkmate { winner } | GameResult::Resignation { winner } => Some(winner),
            GameResult::Draw(_) => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "Checkmate. The winner is: {}", winner),
            GameResult::Resignation { winner } => {
                write!(f, "Resignation. The winner is: {}", winner)
            }
            GameResult::Draw(DrawReason::Stalemate) => write!(f, "Stalemate."),
            GameResult::Draw(DrawReason::InsufficientMaterial) => {
                write!(f, "Insufficient material. It's a draw.")
            }
        }
    }
}

/// Reason for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// The side to move is not in check but every move would leave it in check.
    Stalemate,
    /// Only kings, or kings and a single knight, remain.
    InsufficientMaterial,
}

/// A move the board refused to make. The board is left unchanged.
///
/// Moves that break the movement rules and moves that would leave the
/// mover's own king in check are reported the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Illegal move: {from} => {to}")]
    Illegal { from: Square, to: Square },
}
