//! Piece values and piece-square tables.
//!
//! Tables are indexed `[row][file]` on a board shown from the scoring
//! player's side: own pieces carry the active bit, own back rank is row 7.
//! Piece-square data after the chessbin.com tables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board_codec::piece_codes::{is_active, piece_kind, PieceKind, SquareValue};
use crate::chess_errors::{ChessError, ChessResult};

pub type SquareTable = [[i32; 8]; 8];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceWeights {
    pub value: i32,
    pub squares: SquareTable,
}

impl PieceWeights {
    pub const fn new(value: i32, squares: SquareTable) -> Self {
        Self { value, squares }
    }

    /// Piece value plus the table entry, widened so extreme configs cannot wrap.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> i64 {
        i64::from(self.value) + i64::from(self.squares[y][x])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideWeights {
    pub bishop: PieceWeights,
    pub king: PieceWeights,
    pub knight: PieceWeights,
    pub pawn: PieceWeights,
    pub queen: PieceWeights,
    pub rook: PieceWeights,
}

impl SideWeights {
    #[inline]
    pub fn for_kind(&self, kind: PieceKind) -> &PieceWeights {
        match kind {
            PieceKind::Bishop => &self.bishop,
            PieceKind::King => &self.king,
            PieceKind::Knight => &self.knight,
            PieceKind::Pawn => &self.pawn,
            PieceKind::Queen => &self.queen,
            PieceKind::Rook => &self.rook,
        }
    }
}

/// Everything a weighted scorer needs. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub own: SideWeights,
    pub opp: SideWeights,
    /// Contribution of an empty square ("center control").
    pub empty: PieceWeights,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self::balance()
    }
}

impl WeightConfig {
    /// Contribution of one square to a leaf score.
    #[inline]
    pub fn square_weight(&self, value: SquareValue, x: usize, y: usize) -> i64 {
        match piece_kind(value) {
            Some(kind) if is_active(value) => self.own.for_kind(kind).at(x, y),
            Some(kind) => self.opp.for_kind(kind).at(x, y),
            None => self.empty.at(x, y),
        }
    }

    /// Preset by name: `balance`, `positive` or `base`.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "balance" => Some(Self::balance()),
            "positive" => Some(Self::positive()),
            "base" | "zero" => Some(Self::zero()),
            _ => None,
        }
    }

    /// Parse the serde JSON form: `own`, `opp` and `empty`, each piece a
    /// `value` plus an 8x8 `squares` table.
    pub fn from_json_str(json: &str) -> ChessResult<Self> {
        serde_json::from_str(json).map_err(|e| ChessError::Config(format!("weights: {e}")))
    }

    pub fn from_toml_str(text: &str) -> ChessResult<Self> {
        toml::from_str(text).map_err(|e| ChessError::Config(format!("weights: {e}")))
    }

    /// Loads `.toml` as TOML and anything else as JSON.
    pub fn from_file(path: &Path) -> ChessResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ChessError::Config(format!("{}: {e}", path.display())))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            _ => Self::from_json_str(&text),
        }
    }

    /// All zero. Every board scores the same.
    pub fn zero() -> Self {
        let zero = PieceWeights::new(0, [[0; 8]; 8]);
        let side = SideWeights {
            bishop: zero.clone(),
            king: zero.clone(),
            knight: zero.clone(),
            pawn: zero.clone(),
            queen: zero.clone(),
            rook: zero.clone(),
        };
        Self {
            own: side.clone(),
            opp: side,
            empty: zero,
        }
    }

    /// Own material counts positive, the opponent's negative.
    pub fn balance() -> Self {
        Self {
            own: SideWeights {
                bishop: PieceWeights::new(330, BALANCE_OWN_BISHOP),
                king: PieceWeights::new(20000, BALANCE_OWN_KING),
                knight: PieceWeights::new(320, BALANCE_OWN_KNIGHT),
                pawn: PieceWeights::new(100, BALANCE_OWN_PAWN),
                queen: PieceWeights::new(9000, BALANCE_OWN_QUEEN),
                rook: PieceWeights::new(500, BALANCE_OWN_ROOK),
            },
            opp: SideWeights {
                bishop: PieceWeights::new(-330, BALANCE_OPP_BISHOP),
                king: PieceWeights::new(-20000, BALANCE_OPP_KING),
                knight: PieceWeights::new(-320, BALANCE_OPP_KNIGHT),
                pawn: PieceWeights::new(-100, BALANCE_OPP_PAWN),
                queen: PieceWeights::new(-9000, BALANCE_OPP_QUEEN),
                rook: PieceWeights::new(-500, BALANCE_OPP_ROOK),
            },
            empty: PieceWeights::new(50, [[0; 8]; 8]),
        }
    }

    /// Every square contributes a positive amount, so harmonic-mean
    /// reductions stay meaningful.
    pub fn positive() -> Self {
        Self {
            own: SideWeights {
                bishop: PieceWeights::new(20330, POSITIVE_OWN_BISHOP),
                king: PieceWeights::new(40000, POSITIVE_OWN_KING),
                knight: PieceWeights::new(20320, POSITIVE_OWN_KNIGHT),
                pawn: PieceWeights::new(20100, POSITIVE_OWN_PAWN),
                queen: PieceWeights::new(29000, POSITIVE_OWN_QUEEN),
                rook: PieceWeights::new(20500, POSITIVE_OWN_ROOK),
            },
            opp: SideWeights {
                bishop: PieceWeights::new(19670, POSITIVE_OPP_BISHOP),
                king: PieceWeights::new(0, POSITIVE_OPP_KING),
                knight: PieceWeights::new(19680, POSITIVE_OPP_KNIGHT),
                pawn: PieceWeights::new(19900, POSITIVE_OPP_PAWN),
                queen: PieceWeights::new(11000, POSITIVE_OPP_QUEEN),
                rook: PieceWeights::new(19500, POSITIVE_OPP_ROOK),
            },
            empty: PieceWeights::new(50, [[50; 8]; 8]),
        }
    }
}

const BALANCE_OWN_PAWN: SquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const BALANCE_OWN_KNIGHT: SquareTable = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -20, -30, -30, -20, -40, -50],
];

const BALANCE_OWN_BISHOP: SquareTable = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -40, -10, -10, -40, -10, -20],
];

const BALANCE_OWN_ROOK: SquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const BALANCE_OWN_QUEEN: SquareTable = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const BALANCE_OWN_KING: SquareTable = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

const BALANCE_OPP_PAWN: SquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [-5, -10, -10, 20, 20, -10, -10, -5],
    [-5, 5, 10, 0, 0, 10, 5, -5],
    [0, 0, 0, -20, -20, 0, 0, 0],
    [-5, -5, -10, -25, -25, -10, -5, -5],
    [-10, -10, -20, -30, -30, -20, -10, -10],
    [-50, -50, -50, -50, -50, -50, -50, -50],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const BALANCE_OPP_KNIGHT: SquareTable = [
    [50, 40, 20, 30, 30, 20, 40, 50],
    [40, 20, 0, -5, -5, 0, 20, 40],
    [30, -5, -10, -15, -15, -10, -5, 30],
    [30, 0, -15, -20, -20, -15, 0, 30],
    [30, -5, -15, -20, -20, -15, -5, 30],
    [30, 0, -10, -15, -15, -10, 0, 30],
    [40, 20, 0, 0, 0, 0, 20, 40],
    [50, -40, -20, -30, -30, -20, -40, 50],
];

const BALANCE_OPP_BISHOP: SquareTable = [
    [20, 10, 40, 10, 10, 40, 10, 20],
    [10, -5, 0, 0, 0, 0, -5, 10],
    [10, -10, -10, -10, -10, -10, -10, 10],
    [10, 0, -10, -10, -10, -10, 0, 10],
    [10, -5, -5, -10, -10, -5, -5, 10],
    [10, 0, -5, -10, -10, -5, 0, 10],
    [10, 0, 0, 0, 0, 0, 0, 10],
    [20, 10, 40, 10, 10, 40, 10, 20],
];

const BALANCE_OPP_ROOK: SquareTable = [
    [0, 0, 0, -5, -5, 0, 0, 0],
    [5, 0, 0, 0, 0, 0, 0, 5],
    [5, 0, 0, 0, 0, 0, 0, 5],
    [5, 0, 0, 0, 0, 0, 0, 5],
    [5, 0, 0, 0, 0, 0, 0, 5],
    [5, 0, 0, 0, 0, 0, 0, 5],
    [-5, -10, -10, -10, -10, -10, -10, -5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const BALANCE_OPP_QUEEN: SquareTable = [
    [20, 10, 10, 5, 5, 10, 10, 20],
    [10, 0, 0, 0, 0, -5, 0, 10],
    [10, 0, -5, -5, -5, -5, -5, 10],
    [0, 0, -5, -5, -5, -5, 0, 5],
    [5, 0, -5, -5, -5, -5, 0, 5],
    [10, 0, -5, -5, -5, -5, 0, 10],
    [10, 0, 0, 0, 0, 0, 0, 10],
    [20, 10, 10, 5, 5, 10, 10, 20],
];

const BALANCE_OPP_KING: SquareTable = [
    [-20, -30, -10, 0, 0, -10, -30, -20],
    [-20, -20, 0, 0, 0, 0, -20, -20],
    [10, 20, 20, 20, 20, 20, 20, 10],
    [20, 30, 30, 40, 40, 30, 30, 20],
    [30, 40, 40, 50, 50, 40, 40, 30],
    [30, 40, 40, 50, 50, 40, 40, 30],
    [30, 40, 40, 50, 50, 40, 40, 30],
    [30, 40, 40, 50, 50, 40, 40, 30],
];

const POSITIVE_OWN_PAWN: SquareTable = [
    [50, 50, 50, 50, 50, 50, 50, 50],
    [100, 100, 100, 100, 100, 100, 100, 100],
    [60, 60, 70, 80, 80, 70, 60, 60],
    [55, 55, 60, 75, 75, 60, 55, 55],
    [50, 50, 50, 70, 70, 50, 50, 50],
    [55, 45, 40, 50, 50, 40, 45, 55],
    [55, 60, 60, 30, 30, 60, 60, 55],
    [50, 50, 50, 50, 50, 50, 50, 50],
];

const POSITIVE_OWN_KNIGHT: SquareTable = [
    [0, 10, 20, 20, 20, 20, 10, 0],
    [10, 30, 50, 50, 50, 50, 30, 10],
    [20, 50, 60, 65, 65, 60, 50, 20],
    [20, 55, 65, 70, 70, 65, 55, 20],
    [20, 50, 65, 70, 70, 65, 50, 20],
    [20, 55, 60, 65, 65, 60, 55, 20],
    [10, 30, 50, 55, 55, 50, 30, 10],
    [0, 10, 30, 20, 20, 30, 10, 0],
];

const POSITIVE_OWN_BISHOP: SquareTable = [
    [30, 40, 40, 40, 40, 40, 40, 30],
    [40, 50, 50, 50, 50, 50, 50, 40],
    [40, 50, 55, 60, 60, 55, 50, 40],
    [40, 55, 55, 60, 60, 55, 55, 40],
    [40, 50, 60, 60, 60, 60, 50, 40],
    [40, 60, 60, 60, 60, 60, 60, 40],
    [40, 55, 50, 50, 50, 50, 55, 40],
    [30, 40, 10, 40, 40, 10, 40, 30],
];

const POSITIVE_OWN_ROOK: SquareTable = [
    [50, 50, 50, 50, 50, 50, 50, 50],
    [55, 60, 60, 60, 60, 60, 60, 55],
    [45, 50, 50, 50, 50, 50, 50, 45],
    [45, 50, 50, 50, 50, 50, 50, 45],
    [45, 50, 50, 50, 50, 50, 50, 45],
    [45, 50, 50, 50, 50, 50, 50, 45],
    [45, 50, 50, 50, 50, 50, 50, 45],
    [50, 50, 50, 55, 55, 50, 50, 50],
];

const POSITIVE_OWN_QUEEN: SquareTable = [
    [30, 40, 40, 45, 45, 40, 40, 30],
    [40, 50, 50, 50, 50, 50, 50, 40],
    [40, 50, 55, 55, 55, 55, 50, 40],
    [45, 50, 55, 55, 55, 55, 50, 45],
    [50, 50, 55, 55, 55, 55, 50, 45],
    [40, 55, 55, 55, 55, 55, 50, 40],
    [40, 50, 55, 50, 50, 50, 50, 40],
    [30, 40, 40, 45, 45, 40, 40, 30],
];

const POSITIVE_OWN_KING: SquareTable = [
    [20, 10, 10, 0, 0, 10, 10, 20],
    [20, 10, 10, 0, 0, 10, 10, 20],
    [20, 10, 10, 0, 0, 10, 10, 20],
    [20, 10, 10, 0, 0, 10, 10, 20],
    [30, 20, 20, 10, 10, 20, 20, 30],
    [40, 30, 30, 30, 30, 30, 30, 40],
    [70, 70, 50, 50, 50, 50, 70, 70],
    [70, 80, 60, 50, 50, 60, 80, 70],
];

const POSITIVE_OPP_PAWN: SquareTable = [
    [50, 50, 50, 50, 50, 50, 50, 50],
    [45, 40, 40, 70, 70, 40, 40, 45],
    [45, 55, 60, 50, 50, 60, 55, 45],
    [50, 50, 50, 30, 30, 50, 50, 50],
    [45, 45, 40, 25, 25, 40, 45, 45],
    [40, 40, 30, 20, 20, 30, 40, 40],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
];

const POSITIVE_OPP_KNIGHT: SquareTable = [
    [100, 90, 70, 80, 80, 70, 90, 100],
    [90, 70, 50, 45, 45, 50, 70, 90],
    [80, 45, 40, 35, 35, 40, 45, 80],
    [80, 50, 35, 30, 30, 35, 50, 80],
    [80, 45, 35, 30, 30, 35, 45, 80],
    [80, 50, 40, 35, 35, 40, 50, 80],
    [90, 70, 50, 50, 50, 50, 70, 90],
    [100, 10, 30, 20, 20, 30, 10, 100],
];

const POSITIVE_OPP_BISHOP: SquareTable = [
    [70, 60, 90, 60, 60, 90, 60, 70],
    [60, 45, 50, 50, 50, 50, 45, 60],
    [60, 40, 40, 40, 40, 40, 40, 60],
    [60, 50, 40, 40, 40, 40, 50, 60],
    [60, 45, 45, 40, 40, 45, 45, 60],
    [60, 50, 45, 40, 40, 45, 50, 60],
    [60, 50, 50, 50, 50, 50, 50, 60],
    [70, 60, 90, 60, 60, 90, 60, 70],
];

const POSITIVE_OPP_ROOK: SquareTable = [
    [50, 50, 50, 45, 45, 50, 50, 50],
    [55, 50, 50, 50, 50, 50, 50, 55],
    [55, 50, 50, 50, 50, 50, 50, 55],
    [55, 50, 50, 50, 50, 50, 50, 55],
    [55, 50, 50, 50, 50, 50, 50, 55],
    [55, 50, 50, 50, 50, 50, 50, 55],
    [45, 40, 40, 40, 40, 40, 40, 45],
    [50, 50, 50, 50, 50, 50, 50, 50],
];

const POSITIVE_OPP_QUEEN: SquareTable = [
    [70, 60, 60, 55, 55, 60, 60, 70],
    [60, 50, 50, 50, 50, 45, 50, 60],
    [60, 50, 45, 45, 45, 45, 45, 60],
    [50, 50, 45, 45, 45, 45, 50, 55],
    [55, 50, 45, 45, 45, 45, 50, 55],
    [60, 50, 45, 45, 45, 45, 50, 60],
    [60, 50, 50, 50, 50, 50, 50, 60],
    [70, 60, 60, 55, 55, 60, 60, 70],
];

const POSITIVE_OPP_KING: SquareTable = [
    [30, 20, 40, 50, 50, 40, 20, 30],
    [30, 30, 50, 50, 50, 50, 30, 30],
    [60, 70, 70, 70, 70, 70, 70, 60],
    [70, 80, 80, 90, 90, 80, 80, 70],
    [80, 90, 90, 100, 100, 90, 90, 80],
    [80, 90, 90, 100, 100, 90, 90, 80],
    [80, 90, 90, 100, 100, 90, 90, 80],
    [80, 90, 90, 100, 100, 90, 90, 80],
];
