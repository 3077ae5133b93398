//! Move requests.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, Square};

/// A request to move whatever stands on `from` to `to`.
///
/// A `Move` only says *where*; whether it is castling, an en-passant
/// capture or a promotion is worked out by the engine from the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move request.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns coordinate notation for this move (e.g., "e2e4").
    pub fn to_coordinate(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from coordinate notation: "e2e4" or "e2 e4".
    pub fn from_coordinate(s: &str) -> Option<Self> {
        let compact: String = s.split_whitespace().collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return None;
        }
        let from = Square::from_algebraic(&compact[0..2])?;
        let to = Square::from_algebraic(&compact[2..4])?;
        Some(Move::new(from, to))
    }
}

impl FromStr for Move {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_coordinate(s).ok_or_else(|| CoreError::InvalidMove(s.to_string()))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coordinate())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, Rank};

    #[test]
    fn move_new() {
        let e2 = Square::new(File::E, Rank::R2);
        let e4 = Square::new(File::E, Rank::R4);
        let m = Move::new(e2, e4);
        assert_eq!(m.from(), e2);
        assert_eq!(m.to(), e4);
    }

    #[test]
    fn coordinate_roundtrip() {
        let m = Move::from_coordinate("g1f3").unwrap();
        assert_eq!(m.from(), Square::G1);
        assert_eq!(m.to_coordinate(), "g1f3");
    }

    #[test]
    fn coordinate_with_space() {
        let m = Move::from_coordinate("e1 g1").unwrap();
        assert_eq!(m.from(), Square::E1);
        assert_eq!(m.to(), Square::G1);
    }

    #[test]
    fn invalid_coordinates() {
        assert!(Move::from_coordinate("e2").is_none());
        assert!(Move::from_coordinate("e2e9").is_none());
        assert!(Move::from_coordinate("z2e4").is_none());
        assert!(Move::from_coordinate("e2e4q").is_none());
        assert!(Move::from_coordinate("é2e4").is_none());
        assert!(matches!(
            "x1y2".parse::<Move>(),
            Err(CoreError::InvalidMove(_))
        ));
    }

    #[test]
    fn display() {
        let m = Move::new(Square::A1, Square::A8);
        assert_eq!(format!("{}", m), "a1 => a8");
        assert_eq!(format!("{:?}", m), "Move(a1a8)");
    }
}
