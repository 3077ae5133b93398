//! Board state: 64 cells, the side to move, the en-passant target and a
//! single-slot undo snapshot.

use chess_core::{Color, File, Piece, PieceKind, Rank, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A plain copy of everything a move can change.
///
/// Taken before a move is tried and written back to undo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    cells: [Option<Piece>; 64],
    current_player: Color,
    en_passant: Option<Square>,
}

/// Complete board state.
///
/// Every square always has a cell, occupied or not. The board assumes a
/// well-formed starting position and only legal transitions afterwards; it
/// does not check, for example, that each side has exactly one king.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [Option<Piece>; 64],
    pub(crate) current_player: Color,
    pub(crate) en_passant: Option<Square>,
    pub(crate) backup: Option<Snapshot>,
}

impl Board {
    /// Creates the standard starting position, white to move.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (file, &kind) in File::ALL.iter().zip(BACK_RANK.iter()) {
            board.place_piece(Square::new(*file, Rank::R1), Color::White, kind);
            board.place_piece(Square::new(*file, Rank::R2), Color::White, PieceKind::Pawn);
            board.place_piece(Square::new(*file, Rank::R7), Color::Black, PieceKind::Pawn);
            board.place_piece(Square::new(*file, Rank::R8), Color::Black, kind);
        }
        board
    }

    /// Creates a board with no pieces, white to move.
    pub fn empty() -> Self {
        Board {
            cells: [None; 64],
            current_player: Color::White,
            en_passant: None,
            backup: None,
        }
    }

    /// Returns the side to move.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Sets the side to move. Intended for setting up positions.
    pub fn set_current_player(&mut self, color: Color) {
        self.current_player = color;
    }

    /// Returns the square a pawn could capture onto en passant, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Sets the en-passant target. Intended for setting up positions.
    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.en_passant = square;
    }

    /// Returns the piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index() as usize]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.cells[square.index() as usize]
    }

    /// Puts a fresh, unmoved piece on `square`, replacing whatever was there.
    pub fn place_piece(&mut self, square: Square, color: Color, kind: PieceKind) -> Piece {
        let piece = Piece::new(color, kind);
        *self.cell_mut(square) = Some(piece);
        piece
    }

    /// Empties `square`, returning the piece that stood there.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.cell_mut(square).take()
    }

    /// Returns true if no piece stands on `square`.
    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Returns true if `square` holds a piece of the side to move.
    pub fn is_own_piece(&self, square: Square) -> bool {
        self.piece_at(square)
            .is_some_and(|p| p.color == self.current_player)
    }

    /// Returns true if `square` holds a piece of the side not to move.
    pub fn is_opponents_piece(&self, square: Square) -> bool {
        self.piece_at(square)
            .is_some_and(|p| p.color != self.current_player)
    }

    /// Returns all pieces matching the optional kind and color filters,
    /// in square index order.
    pub fn pieces(&self, kind: Option<PieceKind>, color: Option<Color>) -> Vec<(Square, Piece)> {
        Square::all()
            .filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
            .filter(|(_, p)| kind.map_or(true, |k| p.kind == k))
            .filter(|(_, p)| color.map_or(true, |c| p.color == c))
            .collect()
    }

    /// Returns the square of `color`'s king, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.piece_at(sq)
                .is_some_and(|p| p.color == color && p.kind == PieceKind::King)
        })
    }

    /// Returns the number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterates over all 64 cells in square index order.
    pub fn cells(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(|sq| (sq, self.piece_at(sq)))
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells,
            current_player: self.current_player,
            en_passant: self.en_passant,
        }
    }

    /// Writes a previously captured state back.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.cells = snapshot.cells;
        self.current_player = snapshot.current_player;
        self.en_passant = snapshot.en_passant;
    }

    /// Returns the state saved before the last executed move, if any.
    pub fn last_snapshot(&self) -> Option<&Snapshot> {
        self.backup.as_ref()
    }

    /// Restores the state saved before the last executed move.
    ///
    /// There is a single undo slot: calling this twice restores the same
    /// state twice. Returns false if no move has been made yet.
    pub fn undo_last_move(&mut self) -> bool {
        match self.backup.clone() {
            Some(snapshot) => {
                self.restore(&snapshot);
                true
            }
            None => false,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
