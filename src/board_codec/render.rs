//! Terminal-oriented Unicode board renderer.
//!
//! Draws the board from the point of view of the player to move: their pieces
//! use the white glyphs and sit on the bottom rows.

use std::fmt;

use crate::board_codec::board::Board;
use crate::board_codec::piece_codes::{is_empty, CODE_MASK};

/// Indexed by `value & 0xF`; the last two entries are empty dark/light squares.
const GLYPHS: [char; 16] = [
    '⌛', '‼', '♝', '♗', '♚', '♔', '♞', '♘', '♟', '♙', '♛', '♕', '♜', '♖', '▪', '▫',
];

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for (y, row) in board.rows().iter().enumerate() {
        let rank = char::from(b'8' - y as u8);
        out.push(rank);
        out.push(' ');

        for (x, &value) in row.iter().enumerate() {
            out.push(glyph(value, x, y));
            if x < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn glyph(value: u8, x: usize, y: usize) -> char {
    if is_empty(value) {
        GLYPHS[14 + (x + y) % 2]
    } else {
        GLYPHS[(value & CODE_MASK) as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::board_codec::board::Board;

    #[test]
    fn initial_board_renders_active_pieces_at_the_bottom() {
        let text = render_board(&Board::INITIAL);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[3], "6 ▪ ▫ ▪ ▫ ▪ ▫ ▪ ▫ 6");
    }

    #[test]
    fn display_matches_render() {
        assert_eq!(Board::INITIAL.to_string(), render_board(&Board::INITIAL));
    }
}
