//! Move execution: normal relocation, castling, en passant, promotion,
//! self-check rollback and speculative trial moves.

use chess_core::{Color, Piece, PieceKind, Square};
use tracing::{debug, warn};

use super::legality::castling_rook_squares;
use super::MoveError;
use crate::Board;

/// What happened when a move was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    /// The piece that was taken, including a pawn captured en passant.
    pub captured: Option<Piece>,
    /// True if the move was castling; the rook moved as well.
    pub castled: bool,
    /// The kind a pawn was promoted to, if it reached the far rank.
    pub promoted: Option<PieceKind>,
    /// True if the move puts the opponent in check.
    pub gives_check: bool,
}

impl Board {
    /// Makes a move for the side to move, promoting to a queen if a pawn
    /// reaches the far rank.
    ///
    /// See [`Board::make_move_with`].
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        self.make_move_with(from, to, |_, _| None)
    }

    /// Makes a move for the side to move.
    ///
    /// `choose_promotion` is called only when a pawn reaches the far rank;
    /// `None`, or a kind a pawn cannot become, promotes to a queen.
    ///
    /// On success the state before the move is kept as the undo snapshot,
    /// the en-passant target is updated and the turn passes. On error the
    /// board is exactly as it was, including moves that would leave the
    /// mover's own king in check.
    pub fn make_move_with<F>(
        &mut self,
        from: Square,
        to: Square,
        choose_promotion: F,
    ) -> Result<MoveOutcome, MoveError>
    where
        F: FnOnce(Square, Color) -> Option<PieceKind>,
    {
        let mover = self.current_player;
        let Some(piece) = self.piece_at(from).filter(|_| self.is_legal_for(mover, from, to)) else {
            debug!(%from, %to, %mover, "illegal move");
            return Err(MoveError::Illegal { from, to });
        };

        let previous_backup = self.backup.replace(self.snapshot());
        let (castled, captured) = self.execute(from, to);

        if self.is_check(mover) {
            debug!(%from, %to, %mover, "move leaves own king in check, rolled back");
            self.undo_last_move();
            self.backup = previous_backup;
            return Err(MoveError::Illegal { from, to });
        }

        let mut promoted = None;
        if piece.reached_far_rank(to) {
            let kind = match choose_promotion(to, mover) {
                Some(kind) if kind.is_promotion_target() => kind,
                Some(kind) => {
                    warn!(%kind, "pawn cannot promote to this kind, using queen");
                    PieceKind::Queen
                }
                None => PieceKind::Queen,
            };
            *self.cell_mut(to) = Some(Piece::new(mover, kind));
            promoted = Some(kind);
        }

        let rank_distance = to.rank().index() as i8 - from.rank().index() as i8;
        self.en_passant = if piece.kind == PieceKind::Pawn && rank_distance.abs() == 2 {
            from.offset(0, rank_distance / 2)
        } else {
            None
        };

        self.current_player = mover.opposite();
        let gives_check = self.is_check(self.current_player);
        debug!(%from, %to, %mover, castled, gives_check, "move made");

        Ok(MoveOutcome {
            from,
            to,
            captured,
            castled,
            promoted,
            gives_check,
        })
    }

    /// Tries a move, hands the resulting board to `body`, then puts every
    /// square back the way it was.
    ///
    /// The move is checked against the movement rules for the color of the
    /// piece on `from`; if it fails them `body` is not called and `None` is
    /// returned. The turn, the en-passant target, promotion and the undo
    /// snapshot are left alone. `body` only gets a shared borrow, so trials
    /// cannot nest.
    pub fn with_speculative_move<R>(
        &mut self,
        from: Square,
        to: Square,
        body: impl FnOnce(&Board) -> R,
    ) -> Option<R> {
        let mover = self.piece_at(from)?.color;
        if !self.is_legal_for(mover, from, to) {
            return None;
        }

        let snapshot = self.snapshot();
        self.execute(from, to);
        let result = body(self);
        self.restore(&snapshot);
        Some(result)
    }

    /// Moves pieces for an already validated move. Returns whether it was
    /// castling and what was captured.
    fn execute(&mut self, from: Square, to: Square) -> (bool, Option<Piece>) {
        if self.is_castling(from, to) {
            let (rook_from, rook_to) = castling_rook_squares(from, to);
            self.relocate(from, to);
            self.relocate(rook_from, rook_to);
            (true, None)
        } else {
            (false, self.relocate(from, to))
        }
    }

    /// Moves the piece on `from` to `to` and marks it as moved. A pawn
    /// landing on the en-passant target also removes the pawn it passed.
    /// Only pawns capture this way; any other piece landing on the target
    /// leaves the passed pawn in place.
    fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.remove_piece(from)?;
        piece.has_moved = true;
        let mut captured = self.cell_mut(to).replace(piece);

        if piece.kind == PieceKind::Pawn && captured.is_none() && self.en_passant == Some(to) {
            captured = self.remove_piece(Square::new(to.file(), from.rank()));
        }
        captured
    }
}
