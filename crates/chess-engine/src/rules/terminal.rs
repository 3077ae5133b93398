//! Check, checkmate, stalemate and insufficient-material detection.

use chess_core::{Color, PieceKind};
use tracing::{debug, info, trace};

use super::{DrawReason, GameResult};
use crate::Board;

impl Board {
    /// Returns true if `color`'s king is attacked by the other side.
    /// A board without that king is never in check.
    pub fn is_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_under_attack(king, color.opposite()))
    }

    /// Returns true if the side to move is not in check but has no move
    /// that keeps its king safe.
    ///
    /// Every candidate is tried on the board and undone; the observable
    /// state is the same afterwards.
    ///
    /// Castling moves are searched along with the ordinary ones. This never
    /// changes the verdict: a legal castle leaves the king's first step and
    /// the rook's move to that square available too.
    pub fn is_stalemate(&mut self) -> bool {
        let mover = self.current_player;
        !self.is_check(mover) && !self.has_escape(mover)
    }

    /// Returns true if no move of `color` leaves its king out of check.
    ///
    /// This answers "has no escaping move" whether or not `color` is in
    /// check right now; [`Board::game_result`] combines it with
    /// [`Board::is_check`].
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        !self.has_escape(color)
    }

    /// Returns true if only kings remain (at most two pieces), or exactly
    /// three pieces remain and one of them is a knight.
    pub fn is_insufficient_material(&self) -> bool {
        let pieces = self.pieces(None, None);
        match pieces.len() {
            0..=2 => pieces.iter().all(|(_, p)| p.is(PieceKind::King)),
            3 => pieces.iter().any(|(_, p)| p.is(PieceKind::Knight)),
            _ => false,
        }
    }

    /// Evaluates whether the game has ended, from the side to move's view.
    ///
    /// Insufficient material is checked first, then checkmate, then
    /// stalemate.
    pub fn game_result(&mut self) -> Option<GameResult> {
        let mover = self.current_player;
        let result = if self.is_insufficient_material() {
            Some(GameResult::Draw(DrawReason::InsufficientMaterial))
        } else if self.is_check(mover) && self.is_checkmate(mover) {
            Some(GameResult::Checkmate {
                winner: mover.opposite(),
            })
        } else if self.is_stalemate() {
            Some(GameResult::Draw(DrawReason::Stalemate))
        } else {
            None
        };

        if let Some(result) = result {
            info!(%result, "game over");
        }
        result
    }

    /// Searches `color`'s candidate moves, castling included, for one that
    /// leaves its king out of check. Stops at the first one found.
    fn has_escape(&mut self, color: Color) -> bool {
        for (from, piece) in self.pieces(None, Some(color)) {
            let candidates = piece
                .move_set(from)
                .into_iter()
                .chain(piece.castling_move_set(from));
            for to in candidates {
                let safe = self.with_speculative_move(from, to, |board| !board.is_check(color));
                trace!(%from, %to, ?safe, "trial move");
                if safe == Some(true) {
                    debug!(%color, %from, %to, "escape found");
                    return true;
                }
            }
        }
        debug!(%color, "no escaping move");
        false
    }
}
