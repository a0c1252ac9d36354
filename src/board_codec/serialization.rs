//! Board wire format.
//!
//! A rank is 8 bytes, one square value per file, hex encoded. A board is 8
//! such strings, far rank first. In JSON it is an array of 8 strings.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::board_codec::board::Board;
use crate::board_codec::piece_codes::{is_valid_value, SquareValue};
use crate::chess_errors::FormatError;

pub fn encode_rank(rank: &[SquareValue; 8]) -> String {
    hex::encode(rank)
}

pub fn decode_rank(rank_index: usize, encoded: &str) -> Result<[SquareValue; 8], FormatError> {
    let bytes = hex::decode(encoded).map_err(|source| FormatError::Hex {
        rank: rank_index,
        source,
    })?;
    let rank: [SquareValue; 8] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| FormatError::RowLength {
            rank: rank_index,
            len: bytes.len(),
        })?;
    if let Some(file) = rank.iter().position(|&value| !is_valid_value(value)) {
        return Err(FormatError::BadSquareValue {
            rank: rank_index,
            file,
            value: rank[file],
        });
    }
    Ok(rank)
}

impl Board {
    pub fn to_hex_rows(&self) -> [String; 8] {
        let rows = self.rows();
        std::array::from_fn(|i| encode_rank(&rows[i]))
    }

    pub fn from_hex_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, FormatError> {
        if rows.len() != 8 {
            return Err(FormatError::RowCount(rows.len()));
        }
        let mut squares = [[0; 8]; 8];
        for (i, row) in rows.iter().enumerate() {
            squares[i] = decode_rank(i, row.as_ref())?;
        }
        Ok(Board::from_rows(squares))
    }

    pub fn to_json(&self) -> String {
        // An array of strings always serializes.
        serde_json::to_string(&self.to_hex_rows()).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Board, FormatError> {
        let rows: Vec<String> = serde_json::from_str(json)?;
        Board::from_hex_rows(&rows)
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_hex_rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        Board::from_hex_rows(&rows).map_err(D::Error::custom)
    }
}
