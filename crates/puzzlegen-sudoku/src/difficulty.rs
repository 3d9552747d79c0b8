use std::{fmt, ops::RangeInclusive};

use serde::Serialize;

use crate::CELL_COUNT;

/// Named Sudoku difficulty, derived from the 1-5 numeric difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SudokuDifficulty {
    /// 37-46 givens.
    Easy,
    /// 27-36 givens.
    Medium,
    /// 17-26 givens.
    Hard,
    /// 12-16 givens.
    Expert,
}

impl SudokuDifficulty {
    /// Maps a numeric difficulty to a tier: 1 and 2 are easy, 3 medium, 4 hard
    /// and 5 expert. Anything else is treated as medium.
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        match level {
            1 | 2 => Self::Easy,
            4 => Self::Hard,
            5 => Self::Expert,
            _ => Self::Medium,
        }
    }

    /// Range the number of emptied cells is drawn from.
    #[must_use]
    pub const fn removal_range(self) -> RangeInclusive<usize> {
        match self {
            Self::Easy => 35..=44,
            Self::Medium => 45..=54,
            Self::Hard => 55..=64,
            Self::Expert => 65..=69,
        }
    }

    /// Range of the number of given cells a puzzle of this tier has.
    #[must_use]
    pub fn given_range(self) -> RangeInclusive<usize> {
        let removals = self.removal_range();
        CELL_COUNT - removals.end()..=CELL_COUNT - removals.start()
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for SudokuDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
