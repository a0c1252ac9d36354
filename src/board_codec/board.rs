//! Immutable 8x8 board value in canonical form.
//!
//! Row 0 is the far side, row 7 the near side. The player to move always owns
//! the pieces carrying the active bit and starts on rows 6-7. Turn tracking is
//! implicit: after every move the grid is rotated 180 degrees and every
//! ownership bit flipped (`canonicalize`).

use crate::board_codec::move_tables::Offset;
use crate::board_codec::piece_codes::*;

pub const BOARD_SIZE: i8 = 8;

/// Pawns on this row may still take the double step.
pub const PAWN_START_ROW: i8 = 6;

/// Pawns arriving on this row promote.
pub const PROMOTION_ROW: i8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    squares: [[SquareValue; 8]; 8],
}

/// An active piece with its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub value: SquareValue,
    pub x: i8,
    pub y: i8,
}

const R0: SquareValue = ROOK | FIRST_MOVE_FLAG;
const K0: SquareValue = KING | FIRST_MOVE_FLAG;
const R1: SquareValue = ROOK | FIRST_MOVE_FLAG | ACTIVE_FLAG;
const K1: SquareValue = KING | FIRST_MOVE_FLAG | ACTIVE_FLAG;
const P1: SquareValue = PAWN | ACTIVE_FLAG;

impl Board {
    /// Opening position, first player to move.
    pub const INITIAL: Board = Board {
        squares: [
            [R0, KNIGHT, BISHOP, QUEEN, K0, BISHOP, KNIGHT, R0],
            [PAWN; 8],
            [EMPTY; 8],
            [EMPTY; 8],
            [EMPTY; 8],
            [EMPTY; 8],
            [P1; 8],
            [
                R1,
                KNIGHT | ACTIVE_FLAG,
                BISHOP | ACTIVE_FLAG,
                QUEEN | ACTIVE_FLAG,
                K1,
                BISHOP | ACTIVE_FLAG,
                KNIGHT | ACTIVE_FLAG,
                R1,
            ],
        ],
    };

    pub const EMPTY: Board = Board {
        squares: [[EMPTY; 8]; 8],
    };

    /// Build a board from raw rows. Values are trusted; use
    /// `Board::from_hex_rows` for untrusted input.
    #[inline]
    pub const fn from_rows(squares: [[SquareValue; 8]; 8]) -> Self {
        Self { squares }
    }

    /// Raw squares indexed `[y][x]`, row 0 on the opponent's side.
    #[inline]
    pub const fn rows(&self) -> &[[SquareValue; 8]; 8] {
        &self.squares
    }

    /// Square value at file `x`, row `y`.
    ///
    /// Coordinates must be on the board; use `get_offset` when they may not
    /// be.
    #[inline]
    pub fn get(&self, x: i8, y: i8) -> SquareValue {
        debug_assert!(on_board(x, y), "square ({x},{y}) is off the board");
        self.squares[y as usize][x as usize]
    }

    /// Value at `(x, y) + offset`, `None` when that lands off the board.
    #[inline]
    pub fn get_offset(&self, x: i8, y: i8, (dx, dy): Offset) -> Option<SquareValue> {
        let (tx, ty) = (x + dx, y + dy);
        on_board(tx, ty).then(|| self.get(tx, ty))
    }

    /// Overwrite one square in place. Same coordinate contract as `get`.
    #[inline]
    pub fn set(&mut self, x: i8, y: i8, value: SquareValue) {
        debug_assert!(on_board(x, y), "square ({x},{y}) is off the board");
        self.squares[y as usize][x as usize] = value;
    }

    /// Copy of this board with one square replaced.
    #[inline]
    pub fn with(mut self, x: i8, y: i8, value: SquareValue) -> Self {
        self.set(x, y, value);
        self
    }

    /// Rotate 180 degrees and flip every ownership bit. An involution.
    pub fn canonicalize(&self) -> Board {
        let mut out = Board::EMPTY;
        for (y, row) in self.squares.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                out.squares[7 - y][7 - x] = flip_owner(value);
            }
        }
        out
    }

    /// True when some square holds `code`, ignoring first-move flags.
    pub fn contains(&self, code: SquareValue) -> bool {
        let wanted = strip_first_move(code);
        self.squares
            .iter()
            .flatten()
            .any(|&value| value != EMPTY && strip_first_move(value) == wanted)
    }

    /// Both players still have a king.
    #[inline]
    pub fn has_kings(&self) -> bool {
        self.contains(PieceKind::King.active()) && self.contains(PieceKind::King.inactive())
    }

    /// Occupied squares of both players.
    pub fn piece_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|&&value| !is_empty(value))
            .count()
    }

    /// Pieces of the player to move, row-major.
    pub fn active_pieces(&self) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.squares.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, &value)| {
                is_active(value).then_some(PlacedPiece {
                    value,
                    x: x as i8,
                    y: y as i8,
                })
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::INITIAL
    }
}

/// True when `(x, y)` is a square of the board.
#[inline]
pub const fn on_board(x: i8, y: i8) -> bool {
    0 <= x && x < BOARD_SIZE && 0 <= y && y < BOARD_SIZE
}

/// True when `(x, y) + offset` stays on the board.
#[inline]
pub const fn is_on_board(x: i8, y: i8, offset: Offset) -> bool {
    on_board(x + offset.0, y + offset.1)
}
