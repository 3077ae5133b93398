//! Board state as JSON, for saving games and restoring them.
//!
//! ```json
//! {"tiles":{"a1":{"color":"white","kind":"rook","moved":false}},
//!  "enpassant":null,"current_player":"white"}
//! ```
//!
//! Only occupied tiles are written, in tile order, so serializing a
//! deserialized board reproduces the input byte for byte.

use std::collections::BTreeMap;

use chess_core::{Color, Piece, Rank, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::Board;

/// Error raised while reading or writing a board state.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("malformed board state: {0}")]
    Json(#[from] serde_json::Error),

    #[error("en-passant target must be on rank 3 or 6: {0}")]
    InvalidEnPassant(String),
}

#[derive(Serialize, Deserialize)]
struct BoardRecord {
    tiles: BTreeMap<Square, Piece>,
    enpassant: Option<Square>,
    current_player: Color,
}

impl Board {
    /// Writes the board as a JSON string.
    ///
    /// The undo snapshot is not part of the output.
    pub fn serialize(&self) -> Result<String, SerializeError> {
        let record = BoardRecord {
            tiles: self
                .cells()
                .filter_map(|(square, piece)| piece.map(|p| (square, p)))
                .collect(),
            enpassant: self.en_passant,
            current_player: self.current_player,
        };
        Ok(serde_json::to_string(&record)?)
    }

    /// Builds a board from a JSON string produced by [`Board::serialize`].
    ///
    /// The returned board has no undo snapshot.
    pub fn deserialize(state: &str) -> Result<Board, SerializeError> {
        let record: BoardRecord = serde_json::from_str(state)?;

        if let Some(square) = record.enpassant {
            if !matches!(square.rank(), Rank::R3 | Rank::R6) {
                return Err(SerializeError::InvalidEnPassant(square.to_algebraic()));
            }
        }

        let mut board = Board::empty();
        for (square, piece) in record.tiles {
            *board.cell_mut(square) = Some(piece);
        }
        board.en_passant = record.enpassant;
        board.current_player = record.current_player;
        debug!(pieces = board.occupied_count(), "board state loaded");
        Ok(board)
    }

    /// Replaces this board with the state in `state`.
    ///
    /// On error the board is left untouched.
    pub fn load(&mut self, state: &str) -> Result<(), SerializeError> {
        *self = Board::deserialize(state)?;
        Ok(())
    }
}
