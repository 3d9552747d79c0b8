use std::collections::HashMap;

use puzzlegen_core::{GridPos, LetterGrid, PuzzleSeed};
use serde::Serialize;

/// Orientation of a crossword entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right; listed under "across".
    Horizontal,
    /// Top to bottom; listed under "down".
    Vertical,
}

impl Direction {
    /// Returns the other orientation.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Cell holding letter `i` of a word starting at `start`.
    ///
    /// Horizontal words advance the column, vertical words the row.
    #[must_use]
    pub const fn cell(self, start: GridPos, i: usize) -> GridPos {
        match self {
            Self::Horizontal => GridPos::new(start.row, start.col + i),
            Self::Vertical => GridPos::new(start.row + i, start.col),
        }
    }
}

/// A word fixed in the crossword grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    /// The answer as supplied.
    pub word: String,
    /// Clue text.
    pub clue: String,
    /// Row of the first letter.
    pub start_row: usize,
    /// Column of the first letter.
    pub start_col: usize,
    /// Orientation.
    pub direction: Direction,
    /// Clue number, assigned in placement order starting from 1.
    pub number: usize,
    /// Number of grid cells the word occupies.
    pub length: usize,
}

impl PlacedWord {
    /// Position of the first letter.
    #[must_use]
    pub const fn start(&self) -> GridPos {
        GridPos::new(self.start_row, self.start_col)
    }

    /// Upper-cased letters as written into the grid.
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.word.to_uppercase().chars().collect()
    }

    /// Cells covered by the word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + use<> {
        let (start, direction) = (self.start(), self.direction);
        (0..self.length).map(move |i| direction.cell(start, i))
    }

    /// Returns `true` if the word covers `pos`.
    #[must_use]
    pub fn covers(&self, pos: GridPos) -> bool {
        self.cells().any(|cell| cell == pos)
    }
}

/// A numbered clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clue {
    /// Number of the word this clue belongs to.
    pub number: usize,
    /// Clue text.
    pub clue: String,
}

/// Clue lists, each sorted by number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Clues {
    /// Clues of horizontal words.
    pub across: Vec<Clue>,
    /// Clues of vertical words.
    pub down: Vec<Clue>,
}

impl Clues {
    /// Splits placed words into across and down clues.
    #[must_use]
    pub fn from_words(words: &[PlacedWord]) -> Self {
        let mut clues = Self::default();
        for word in words {
            let clue = Clue {
                number: word.number,
                clue: word.clue.clone(),
            };
            match word.direction {
                Direction::Horizontal => clues.across.push(clue),
                Direction::Vertical => clues.down.push(clue),
            }
        }
        clues.across.sort_by_key(|clue| clue.number);
        clues.down.sort_by_key(|clue| clue.number);
        clues
    }
}

/// A generated crossword.
///
/// Every filled grid cell belongs to at least one placed word, and every placed
/// word's letters can be read back from the grid along its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosswordPuzzle {
    /// Letters, `None` for blocked cells.
    pub grid: LetterGrid,
    /// Words in placement order.
    pub placed_words: Vec<PlacedWord>,
    /// Across and down clue lists.
    pub clues: Clues,
    /// Seed that reproduces this puzzle from the same word pool.
    pub seed: PuzzleSeed,
}

impl CrosswordPuzzle {
    /// Number printed in each cell that starts a word.
    ///
    /// A cell starting both an across and a down word shows the lower number.
    #[must_use]
    pub fn cell_numbers(&self) -> HashMap<GridPos, usize> {
        let mut numbers = HashMap::new();
        for word in &self.placed_words {
            numbers
                .entry(word.start())
                .and_modify(|number: &mut usize| *number = (*number).min(word.number))
                .or_insert(word.number);
        }
        numbers
    }
}
