//! Text rendering of the board.

use chess_core::{File, Rank, Square};
use chess_engine::Board;

const FILES: &str = "   a b c d e f g h";

/// Draws the board as a box-drawing grid with rank 8 at the top.
///
/// Pieces are shown as chess glyphs, or as letters (uppercase for white)
/// when `ascii` is set. File letters run above and below the grid and rank
/// numbers down both sides.
pub fn render(board: &Board, ascii: bool) -> String {
    let top = format!("  \u{250c}{}\u{2510}", grid_line('\u{252c}'));
    let separator = format!("\n  \u{251c}{}\u{2524}\n", grid_line('\u{253c}'));
    let bottom = format!("  \u{2514}{}\u{2518}", grid_line('\u{2534}'));

    let rows: Vec<String> = Rank::ALL
        .iter()
        .rev()
        .map(|&rank| {
            let cells: Vec<String> = File::ALL
                .iter()
                .map(|&file| {
                    let glyph = board.piece_at(Square::new(file, rank)).map_or(' ', |p| {
                        if ascii {
                            p.kind.to_char(p.color)
                        } else {
                            p.symbol()
                        }
                    });
                    glyph.to_string()
                })
                .collect();
            format!("{rank} \u{2502}{}\u{2502} {rank}", cells.join("\u{2502}"))
        })
        .collect();

    [
        FILES.to_string(),
        top,
        rows.join(separator.as_str()),
        bottom,
        FILES.to_string(),
    ]
    .join("\n")
}

/// Eight horizontal strokes joined by `joint`.
fn grid_line(joint: char) -> String {
    let joint = joint.to_string();
    ["\u{2500}"; 8].join(joint.as_str())
}
