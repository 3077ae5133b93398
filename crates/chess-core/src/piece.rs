//! Chess piece representation and per-kind move-offset tables.

use serde::{Deserialize, Serialize};

use crate::{Color, CoreError, Square};

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KING_CASTLING_OFFSETS: [(i8, i8); 2] = [(2, 0), (-2, 0)];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Returns the (file delta, rank delta) offset table for this kind.
    ///
    /// The table is a superset of what the piece can actually play: sliders
    /// list every distance up to the board span and pawns list their capture
    /// diagonals next to the straight advances. Occupancy, path clearance and
    /// check safety are decided by the engine.
    pub fn offsets(self, color: Color) -> Vec<(i8, i8)> {
        match self {
            PieceKind::Pawn => {
                let dir = color.pawn_direction();
                vec![(-1, dir), (0, dir), (1, dir), (0, 2 * dir)]
            }
            PieceKind::Knight => KNIGHT_OFFSETS.to_vec(),
            PieceKind::Bishop => diagonal_rays().collect(),
            PieceKind::Rook => straight_rays().collect(),
            PieceKind::Queen => straight_rays().chain(diagonal_rays()).collect(),
            PieceKind::King => KING_OFFSETS.to_vec(),
        }
    }

    /// Returns the castling offsets; only kings have any.
    pub fn castling_offsets(self) -> &'static [(i8, i8)] {
        match self {
            PieceKind::King => &KING_CASTLING_OFFSETS,
            _ => &[],
        }
    }

    /// Returns true if a pawn may promote to this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Returns the ASCII letter for this kind (uppercase for white).
    pub const fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a piece letter or name ("q", "Queen", ...) into a kind.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "p" | "pawn" => Some(PieceKind::Pawn),
            "n" | "knight" => Some(PieceKind::Knight),
            "b" | "bishop" => Some(PieceKind::Bishop),
            "r" | "rook" => Some(PieceKind::Rook),
            "q" | "queen" => Some(PieceKind::Queen),
            "k" | "king" => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

fn straight_rays() -> impl Iterator<Item = (i8, i8)> {
    (-7i8..=7)
        .filter(|&d| d != 0)
        .flat_map(|d| [(d, 0), (0, d)])
}

fn diagonal_rays() -> impl Iterator<Item = (i8, i8)> {
    (1i8..=7).flat_map(|d| [(d, d), (d, -d), (-d, d), (-d, -d)])
}

/// A piece on the board: who owns it, what it is, and whether it has moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    #[serde(rename = "moved")]
    pub has_moved: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            has_moved: false,
        }
    }

    /// Returns true if this piece is of the given kind.
    #[inline]
    pub fn is(&self, kind: PieceKind) -> bool {
        self.kind == kind
    }

    /// Candidate destinations from `from`: the offset table projected onto
    /// the board, with off-board results dropped.
    pub fn move_set(&self, from: Square) -> Vec<Square> {
        self.kind
            .offsets(self.color)
            .into_iter()
            .filter_map(|(df, dr)| from.offset(df, dr))
            .collect()
    }

    /// Castling destinations from `from`; empty for anything but a king.
    pub fn castling_move_set(&self, from: Square) -> Vec<Square> {
        self.kind
            .castling_offsets()
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .collect()
    }

    /// Returns true if this is a pawn standing on its promotion rank.
    pub fn reached_far_rank(&self, square: Square) -> bool {
        self.kind == PieceKind::Pawn && square.rank() == self.color.far_rank()
    }

    /// Returns the display glyph for this piece.
    pub const fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '\u{265f}',
            (Color::White, PieceKind::Rook) => '\u{265c}',
            (Color::White, PieceKind::Knight) => '\u{265e}',
            (Color::White, PieceKind::Bishop) => '\u{265d}',
            (Color::White, PieceKind::Queen) => '\u{265b}',
            (Color::White, PieceKind::King) => '\u{265a}',
            (Color::Black, PieceKind::Pawn) => '\u{2659}',
            (Color::Black, PieceKind::Rook) => '\u{2656}',
            (Color::Black, PieceKind::Knight) => '\u{2658}',
            (Color::Black, PieceKind::Bishop) => '\u{2657}',
            (Color::Black, PieceKind::Queen) => '\u{2655}',
            (Color::Black, PieceKind::King) => '\u{2654}',
        }
    }

    /// Serializes this piece as a standalone JSON record.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a piece from a standalone JSON record.
    pub fn from_json(s: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, Rank};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn sorted(mut squares: Vec<Square>) -> Vec<String> {
        squares.sort();
        squares.iter().map(|s| s.to_algebraic()).collect()
    }

    #[test]
    fn offset_table_sizes() {
        assert_eq!(PieceKind::King.offsets(Color::White).len(), 8);
        assert_eq!(PieceKind::Knight.offsets(Color::White).len(), 8);
        assert_eq!(PieceKind::Rook.offsets(Color::White).len(), 28);
        assert_eq!(PieceKind::Bishop.offsets(Color::White).len(), 28);
        assert_eq!(PieceKind::Queen.offsets(Color::White).len(), 56);
        assert_eq!(PieceKind::Pawn.offsets(Color::White).len(), 4);
    }

    #[test]
    fn no_zero_offsets() {
        for kind in PieceKind::ALL {
            for color in Color::ALL {
                assert!(!kind.offsets(color).contains(&(0, 0)), "{kind}");
            }
        }
    }

    #[test]
    fn pawn_offsets_follow_color() {
        assert_eq!(
            PieceKind::Pawn.offsets(Color::White),
            vec![(-1, 1), (0, 1), (1, 1), (0, 2)]
        );
        assert_eq!(
            PieceKind::Pawn.offsets(Color::Black),
            vec![(-1, -1), (0, -1), (1, -1), (0, -2)]
        );
    }

    #[test]
    fn knight_move_set_in_corner() {
        let knight = Piece::new(Color::White, PieceKind::Knight);
        assert_eq!(sorted(knight.move_set(Square::A1)), vec!["b3", "c2"]);
    }

    #[test]
    fn king_move_set_on_edge() {
        let king = Piece::new(Color::Black, PieceKind::King);
        assert_eq!(
            sorted(king.move_set(Square::E8)),
            vec!["d7", "d8", "e7", "f7", "f8"]
        );
    }

    #[test]
    fn rook_move_set_covers_lines() {
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let moves = rook.move_set(sq("d4"));
        assert_eq!(moves.len(), 14);
        assert!(moves.contains(&sq("d8")));
        assert!(moves.contains(&sq("a4")));
        assert!(!moves.contains(&sq("e5")));
    }

    #[test]
    fn bishop_move_set_covers_diagonals() {
        let bishop = Piece::new(Color::White, PieceKind::Bishop);
        let moves = bishop.move_set(sq("d4"));
        assert_eq!(moves.len(), 13);
        assert!(moves.contains(&Square::A1));
        assert!(moves.contains(&Square::H8));
        assert!(moves.contains(&sq("a7")));
        assert!(!moves.contains(&sq("d5")));
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let queen = Piece::new(Color::White, PieceKind::Queen);
        assert_eq!(queen.move_set(sq("d4")).len(), 27);
    }

    #[test]
    fn pawn_move_set() {
        let white = Piece::new(Color::White, PieceKind::Pawn);
        assert_eq!(sorted(white.move_set(sq("a2"))), vec!["a3", "a4", "b3"]);
        let black = Piece::new(Color::Black, PieceKind::Pawn);
        assert_eq!(
            sorted(black.move_set(sq("e7"))),
            vec!["d6", "e5", "e6", "f6"]
        );
    }

    #[test]
    fn castling_move_set_only_for_king() {
        let king = Piece::new(Color::White, PieceKind::King);
        assert_eq!(sorted(king.castling_move_set(Square::E1)), vec!["c1", "g1"]);
        let rook = Piece::new(Color::White, PieceKind::Rook);
        assert!(rook.castling_move_set(Square::A1).is_empty());
        assert_eq!(sorted(king.castling_move_set(Square::H1)), vec!["f1"]);
    }

    #[test]
    fn reached_far_rank() {
        let white = Piece::new(Color::White, PieceKind::Pawn);
        assert!(white.reached_far_rank(Square::new(File::B, Rank::R8)));
        assert!(!white.reached_far_rank(Square::new(File::B, Rank::R7)));
        let black = Piece::new(Color::Black, PieceKind::Pawn);
        assert!(black.reached_far_rank(Square::new(File::B, Rank::R1)));
        let rook = Piece::new(Color::White, PieceKind::Rook);
        assert!(!rook.reached_far_rank(Square::H8));
    }

    #[test]
    fn symbols_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                assert!(seen.insert(Piece::new(color, kind).symbol()));
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn kind_names() {
        assert_eq!(PieceKind::from_name("Q"), Some(PieceKind::Queen));
        assert_eq!(PieceKind::from_name("knight"), Some(PieceKind::Knight));
        assert_eq!(PieceKind::from_name("x"), None);
        assert_eq!(PieceKind::Knight.to_char(Color::White), 'N');
        assert_eq!(PieceKind::Knight.to_char(Color::Black), 'n');
        assert!(PieceKind::Rook.is_promotion_target());
        assert!(!PieceKind::King.is_promotion_target());
        assert!(!PieceKind::Pawn.is_promotion_target());
    }

    #[test]
    fn piece_json_record() {
        let mut rook = Piece::new(Color::Black, PieceKind::Rook);
        rook.has_moved = true;
        let json = rook.to_json().unwrap();
        assert_eq!(json, r#"{"color":"black","kind":"rook","moved":true}"#);
        assert_eq!(Piece::from_json(&json).unwrap(), rook);
    }

    #[test]
    fn piece_json_rejects_garbage() {
        assert!(matches!(
            Piece::from_json(r#"{"color":"white","kind":"wizard","moved":false}"#),
            Err(CoreError::InvalidPieceRecord(_))
        ));
    }
}
