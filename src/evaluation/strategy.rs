//! Reductions from many continuation scores to one root score.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reduction {
    /// Score of the first continuation.
    #[default]
    First,
    Min,
    Max,
    /// Harmonic mean over the values; zero if any value is not positive.
    HarmonicMean,
}

impl Reduction {
    pub const ALL: [Reduction; 4] = [
        Reduction::First,
        Reduction::Min,
        Reduction::Max,
        Reduction::HarmonicMean,
    ];

    /// `None` for an empty slice.
    pub fn reduce(self, values: &[i64]) -> Option<i64> {
        let first = *values.first()?;
        let reduced = match self {
            Reduction::First => first,
            Reduction::Min => values.iter().copied().min().unwrap_or(first),
            Reduction::Max => values.iter().copied().max().unwrap_or(first),
            Reduction::HarmonicMean => harmonic_mean(values),
        };
        Some(reduced)
    }

    pub fn name(self) -> &'static str {
        match self {
            Reduction::First => "first",
            Reduction::Min => "min",
            Reduction::Max => "max",
            Reduction::HarmonicMean => "harmonic-mean",
        }
    }
}

fn harmonic_mean(values: &[i64]) -> i64 {
    if values.iter().any(|&v| v <= 0) {
        return 0;
    }
    let reciprocal_sum: f64 = values.iter().map(|&v| 1.0 / v as f64).sum();
    (values.len() as f64 / reciprocal_sum).round() as i64
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Reduction {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reduction::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| ChessError::Config(format!("unknown strategy `{s}`")))
    }
}

/// Root score as reported: the reduction divided by 100, rounded.
#[inline]
pub fn root_score(reduced: i64) -> i64 {
    (reduced as f64 / 100.0).round() as i64
}
