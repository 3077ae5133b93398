//! Straight-line paths between squares.

use chess_core::Square;

use crate::Board;

/// Result of walking from one square to another along a rank, file or
/// diagonal.
///
/// `Path::None` means the squares are not aligned (or are the same square);
/// `Path::Tiles(vec![])` means they are aligned and adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    None,
    Tiles(Vec<Square>),
}

impl Path {
    /// Returns true if there is no straight-line path.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Path::None)
    }

    /// Returns the squares on the path, if there is one.
    pub fn tiles(&self) -> Option<&[Square]> {
        match self {
            Path::None => None,
            Path::Tiles(tiles) => Some(tiles),
        }
    }
}

/// Returns the squares between `a` and `b` on a shared rank, file or
/// diagonal, walking from the lower to the higher square in
/// (file, rank) order. Endpoints are included only when `inclusive`.
///
/// The result does not depend on argument order.
pub fn tiles_between(a: Square, b: Square, inclusive: bool) -> Path {
    if a == b {
        return Path::None;
    }
    let (first, last) = if a < b { (a, b) } else { (b, a) };

    let df = last.file().index() as i8 - first.file().index() as i8;
    let dr = last.rank().index() as i8 - first.rank().index() as i8;
    let step = if df == 0 {
        (0, dr.signum())
    } else if dr == 0 {
        (1, 0)
    } else if df == dr.abs() {
        (1, dr.signum())
    } else {
        return Path::None;
    };

    let mut path = vec![first];
    let mut current = first;
    while current != last {
        match current.offset(step.0, step.1) {
            Some(next) if path.len() < 8 => {
                path.push(next);
                current = next;
            }
            _ => return Path::None,
        }
    }

    if !inclusive {
        path.retain(|&sq| sq != first && sq != last);
    }
    Path::Tiles(path)
}

impl Board {
    /// Returns `Some(true)` if every square strictly between `a` and `b` is
    /// empty, `Some(false)` if one is occupied, and `None` if the squares
    /// are not on a shared line.
    pub fn clear_path(&self, a: Square, b: Square) -> Option<bool> {
        tiles_between(a, b, false)
            .tiles()
            .map(|tiles| tiles.iter().all(|&sq| self.is_empty_at(sq)))
    }
}
