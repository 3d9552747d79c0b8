use puzzlegen_core::{GridPos, LetterGrid, PuzzleSeed};
use serde::Serialize;

/// One of the six reading directions of a hidden word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordSearchDirection {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Right to left.
    ReverseHorizontal,
    /// Bottom to top.
    ReverseVertical,
    /// Bottom-right to top-left.
    ReverseDiagonal,
}

impl WordSearchDirection {
    /// All directions.
    pub const ALL: [Self; 6] = [
        Self::Horizontal,
        Self::Vertical,
        Self::Diagonal,
        Self::ReverseHorizontal,
        Self::ReverseVertical,
        Self::ReverseDiagonal,
    ];

    /// Draw pool for random placement; both diagonals appear twice.
    pub const WEIGHTED: [Self; 8] = [
        Self::Horizontal,
        Self::Vertical,
        Self::Diagonal,
        Self::Diagonal,
        Self::ReverseHorizontal,
        Self::ReverseVertical,
        Self::ReverseDiagonal,
        Self::ReverseDiagonal,
    ];

    /// Returns `true` if the word spans several rows.
    #[must_use]
    pub const fn spans_rows(self) -> bool {
        !matches!(self, Self::Horizontal | Self::ReverseHorizontal)
    }

    /// Returns `true` if the word spans several columns.
    #[must_use]
    pub const fn spans_cols(self) -> bool {
        !matches!(self, Self::Vertical | Self::ReverseVertical)
    }

    /// Cell holding letter `i` of a `len`-letter word anchored at `start`.
    ///
    /// The anchor is always the top-left end of the path; reverse directions
    /// write their first letter at the far end.
    #[must_use]
    pub const fn cell(self, start: GridPos, i: usize, len: usize) -> GridPos {
        let back = len - 1 - i;
        match self {
            Self::Horizontal => GridPos::new(start.row, start.col + i),
            Self::Vertical => GridPos::new(start.row + i, start.col),
            Self::Diagonal => GridPos::new(start.row + i, start.col + i),
            Self::ReverseHorizontal => GridPos::new(start.row, start.col + back),
            Self::ReverseVertical => GridPos::new(start.row + back, start.col),
            Self::ReverseDiagonal => GridPos::new(start.row + back, start.col + back),
        }
    }
}

/// A word hidden in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSearchEntry {
    /// The word as supplied.
    pub word: String,
    /// Row of the path's top-left end.
    pub start_row: usize,
    /// Column of the path's top-left end.
    pub start_col: usize,
    /// Reading direction.
    pub direction: WordSearchDirection,
}

impl WordSearchEntry {
    /// Upper-cased letters in reading order.
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.word.to_uppercase().chars().collect()
    }

    /// Cells of the word in reading order.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + use<> {
        let start = GridPos::new(self.start_row, self.start_col);
        let direction = self.direction;
        let len = self.letters().len();
        (0..len).map(move |i| direction.cell(start, i, len))
    }
}

/// A generated word search.
///
/// The grid is fully filled. Replaying each entry's direction from its start
/// reproduces the entry's letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSearchPuzzle {
    /// Hidden words plus noise letters.
    pub grid: LetterGrid,
    /// Words in placement order.
    pub placed_words: Vec<WordSearchEntry>,
    /// Words to find, in placement order.
    pub word_list: Vec<String>,
    /// Seed that reproduces this puzzle from the same word pool.
    pub seed: PuzzleSeed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(direction: WordSearchDirection, len: usize) -> Vec<(usize, usize)> {
        let start = GridPos::new(2, 3);
        (0..len)
            .map(|i| direction.cell(start, i, len))
            .map(|pos| (pos.row, pos.col))
            .collect()
    }

    #[test]
    fn test_direction_offsets() {
        use WordSearchDirection as D;
        assert_eq!(cells(D::Horizontal, 3), [(2, 3), (2, 4), (2, 5)]);
        assert_eq!(cells(D::Vertical, 3), [(2, 3), (3, 3), (4, 3)]);
        assert_eq!(cells(D::Diagonal, 3), [(2, 3), (3, 4), (4, 5)]);
        assert_eq!(cells(D::ReverseHorizontal, 3), [(2, 5), (2, 4), (2, 3)]);
        assert_eq!(cells(D::ReverseVertical, 3), [(4, 3), (3, 3), (2, 3)]);
        assert_eq!(cells(D::ReverseDiagonal, 3), [(4, 5), (3, 4), (2, 3)]);
    }

    #[test]
    fn test_weighted_pool_doubles_diagonals() {
        for direction in WordSearchDirection::ALL {
            let weight = WordSearchDirection::WEIGHTED
                .iter()
                .filter(|&&d| d == direction)
                .count();
            let expected = match direction {
                WordSearchDirection::Diagonal | WordSearchDirection::ReverseDiagonal => 2,
                _ => 1,
            };
            assert_eq!(weight, expected, "{direction:?}");
        }
    }

    #[test]
    fn test_entry_cells_run_from_first_letter() {
        let entry = WordSearchEntry {
            word: "owl".to_owned(),
            start_row: 0,
            start_col: 0,
            direction: WordSearchDirection::ReverseDiagonal,
        };
        let cells: Vec<_> = entry.cells().collect();
        assert_eq!(
            cells,
            [GridPos::new(2, 2), GridPos::new(1, 1), GridPos::new(0, 0)]
        );
        assert_eq!(entry.letters(), ['O', 'W', 'L']);
    }
}
