//! Attack detection.

use chess_core::{Color, PieceKind, Square};

use crate::Board;

impl Board {
    /// Returns true if any piece of color `by` attacks `square`.
    ///
    /// A piece attacks a square that is in its candidate move set and can be
    /// reached over a clear path (knights jump). Pawns threaten only their
    /// capture diagonals, never the squares straight ahead that they can
    /// move to.
    pub fn is_under_attack(&self, square: Square, by: Color) -> bool {
        self.pieces(None, Some(by)).into_iter().any(|(from, piece)| {
            if !piece.move_set(from).contains(&square) {
                return false;
            }
            match piece.kind {
                PieceKind::Knight => true,
                PieceKind::Pawn => from.file() != square.file(),
                _ => self.clear_path(from, square) == Some(true),
            }
        })
    }

    /// Returns every square attacked by color `by`, in square index order.
    pub fn attacked_squares(&self, by: Color) -> Vec<Square> {
        Square::all()
            .filter(|&sq| self.is_under_attack(sq, by))
            .collect()
    }
}
