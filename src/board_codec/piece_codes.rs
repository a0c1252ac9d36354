//! Square value encoding.
//!
//! Each square is one byte:
//! - bit 0: active-ownership flag (set = belongs to the player to move)
//! - bits 1-3: piece type (0 = empty)
//! - bit 4: first-move flag (castling and pawn double step)
//!
//! The numbering is part of the wire format and must not change.

pub type SquareValue = u8;

pub const EMPTY: SquareValue = 0;
pub const ACTIVE_FLAG: SquareValue = 0x01;
pub const TYPE_MASK: SquareValue = 0x0E;
/// Type plus ownership, first-move flag stripped.
pub const CODE_MASK: SquareValue = 0x0F;
pub const FIRST_MOVE_FLAG: SquareValue = 0x10;

pub const BISHOP: SquareValue = 2;
pub const KING: SquareValue = 4;
pub const KNIGHT: SquareValue = 6;
pub const PAWN: SquareValue = 8;
pub const QUEEN: SquareValue = 10;
pub const ROOK: SquareValue = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Bishop,
    King,
    Knight,
    Pawn,
    Queen,
    Rook,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Bishop,
        PieceKind::King,
        PieceKind::Knight,
        PieceKind::Pawn,
        PieceKind::Queen,
        PieceKind::Rook,
    ];

    /// Every pawn promotion is emitted; the queen is not privileged.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Queen,
        PieceKind::Rook,
    ];

    #[inline]
    pub const fn code(self) -> SquareValue {
        match self {
            PieceKind::Bishop => BISHOP,
            PieceKind::King => KING,
            PieceKind::Knight => KNIGHT,
            PieceKind::Pawn => PAWN,
            PieceKind::Queen => QUEEN,
            PieceKind::Rook => ROOK,
        }
    }

    /// Decode the type field of a square value.
    #[inline]
    pub const fn from_value(value: SquareValue) -> Option<Self> {
        match value & TYPE_MASK {
            BISHOP => Some(PieceKind::Bishop),
            KING => Some(PieceKind::King),
            KNIGHT => Some(PieceKind::Knight),
            PAWN => Some(PieceKind::Pawn),
            QUEEN => Some(PieceKind::Queen),
            ROOK => Some(PieceKind::Rook),
            _ => None,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.code() / 2 - 1) as usize
    }

    #[inline]
    pub const fn active(self) -> SquareValue {
        self.code() | ACTIVE_FLAG
    }

    #[inline]
    pub const fn inactive(self) -> SquareValue {
        self.code()
    }
}

/// Piece kind of a square, `None` when empty or undecodable.
#[inline]
pub const fn piece_kind(value: SquareValue) -> Option<PieceKind> {
    PieceKind::from_value(value)
}

#[inline]
pub const fn is_empty(value: SquareValue) -> bool {
    value & TYPE_MASK == 0
}

#[inline]
pub const fn is_active(value: SquareValue) -> bool {
    value & ACTIVE_FLAG != 0 && value & TYPE_MASK != 0
}

#[inline]
pub const fn is_inactive(value: SquareValue) -> bool {
    value & ACTIVE_FLAG == 0 && value & TYPE_MASK != 0
}

#[inline]
pub const fn has_first_move(value: SquareValue) -> bool {
    value & FIRST_MOVE_FLAG != 0
}

#[inline]
pub const fn strip_first_move(value: SquareValue) -> SquareValue {
    value & CODE_MASK
}

/// Hand the square to the other player. Empty stays empty.
#[inline]
pub const fn flip_owner(value: SquareValue) -> SquareValue {
    if value == EMPTY {
        EMPTY
    } else {
        value ^ ACTIVE_FLAG
    }
}

/// True for 0 and for any byte with a real type field and no stray bits.
#[inline]
pub const fn is_valid_value(value: SquareValue) -> bool {
    if value == EMPTY {
        return true;
    }
    value & !(CODE_MASK | FIRST_MOVE_FLAG) == 0 && piece_kind(value).is_some()
}

/// Sign of an offset component, used to walk a sliding path one step at a time.
#[inline]
pub const fn unit(i: i8) -> i8 {
    if i < 0 {
        -1
    } else if i == 0 {
        0
    } else {
        1
    }
}
