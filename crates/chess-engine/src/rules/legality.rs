//! Structural move legality, including the castling preconditions.

use chess_core::{Color, File, PieceKind, Square};

use crate::geometry::tiles_between;
use crate::Board;

/// Returns the rook's origin and destination for a castling king move.
pub(crate) fn castling_rook_squares(king_from: Square, king_to: Square) -> (Square, Square) {
    let rank = king_from.rank();
    if king_to.file() < king_from.file() {
        (Square::new(File::A, rank), Square::new(File::D, rank))
    } else {
        (Square::new(File::H, rank), Square::new(File::F, rank))
    }
}

impl Board {
    /// Returns true if the side to move may move the piece on `from` to `to`
    /// under the movement rules.
    ///
    /// Whether the move would leave the mover in check is not considered
    /// here; [`Board::make_move`] rejects such moves after trying them.
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        self.is_legal_for(self.current_player, from, to)
    }

    /// Movement-rule legality with an explicit mover.
    pub(crate) fn is_legal_for(&self, mover: Color, from: Square, to: Square) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        if piece.color != mover {
            return false;
        }
        let target = self.piece_at(to);
        if target.is_some_and(|t| t.color == mover) {
            return false;
        }

        let mut diagonal_capture = false;
        match piece.kind {
            PieceKind::Pawn => {
                let changes_file = from.file() != to.file();
                if target.is_none() {
                    let en_passant = changes_file && self.en_passant == Some(to);
                    if !en_passant {
                        if changes_file {
                            return false;
                        }
                        let distance = (to.rank().index() as i8 - from.rank().index() as i8).abs();
                        if distance != 1 && (piece.has_moved || distance != 2) {
                            return false;
                        }
                    }
                } else if !changes_file {
                    return false;
                }
                diagonal_capture = changes_file;
            }
            PieceKind::King if self.is_castling(from, to) => {
                return self.can_castle(mover, from, to);
            }
            _ => {}
        }

        if piece.kind != PieceKind::Knight
            && !diagonal_capture
            && self.clear_path(from, to) != Some(true)
        {
            return false;
        }

        piece.move_set(from).contains(&to)
    }

    /// Returns true if moving the piece on `from` to `to` is a castling
    /// attempt: a king moving two files.
    pub fn is_castling(&self, from: Square, to: Square) -> bool {
        self.piece_at(from).is_some_and(|p| p.kind == PieceKind::King)
            && (to.file().index() as i8 - from.file().index() as i8).abs() == 2
    }

    /// Checks every castling precondition for `mover`'s king on `from`.
    ///
    /// The king must never have moved, and the squares it crosses and lands
    /// on must not be attacked. Its starting square is not checked, so a king
    /// in check may still castle. The rook on that side must be the mover's own,
    /// never moved, with nothing between it and the king.
    pub(crate) fn can_castle(&self, mover: Color, from: Square, to: Square) -> bool {
        let Some(king) = self.piece_at(from) else {
            return false;
        };
        if king.kind != PieceKind::King || king.color != mover || king.has_moved {
            return false;
        }
        if !king.castling_move_set(from).contains(&to) {
            return false;
        }

        let opponent = mover.opposite();
        let Some(transit) = tiles_between(from, to, true).tiles().map(|t| t.to_vec()) else {
            return false;
        };
        let attacked = transit
            .iter()
            .filter(|&&sq| sq != from)
            .any(|&sq| self.is_under_attack(sq, opponent));
        if attacked {
            return false;
        }

        let (rook_from, _) = castling_rook_squares(from, to);
        let rook_ok = self.piece_at(rook_from).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == mover && !rook.has_moved
        });
        rook_ok && self.clear_path(from, rook_from) == Some(true)
    }
}
