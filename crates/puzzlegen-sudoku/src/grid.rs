use std::fmt::{self, Display};

use puzzlegen_core::GridPos;
use serde::{Serialize, Serializer};

use crate::{Digit, House};

/// Number of cells in a Sudoku grid.
pub const CELL_COUNT: usize = 81;

/// A 9×9 grid of optional digits.
///
/// Serializes as nine rows of numbers, with `0` for an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudokuGrid {
    cells: [Option<Digit>; CELL_COUNT],
}

impl Default for SudokuGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SudokuGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Position of cell `index` in row-major order.
    #[must_use]
    pub const fn position(index: usize) -> GridPos {
        GridPos::new(index / 9, index % 9)
    }

    /// All positions in row-major order.
    pub fn positions() -> impl Iterator<Item = GridPos> {
        (0..CELL_COUNT).map(Self::position)
    }

    /// Digit at `pos`; `None` if the cell is empty or outside the grid.
    #[must_use]
    pub fn get(&self, pos: GridPos) -> Option<Digit> {
        if pos.row < 9 && pos.col < 9 {
            self.cells[pos.row * 9 + pos.col]
        } else {
            None
        }
    }

    /// Sets or clears the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    pub fn set(&mut self, pos: GridPos, digit: Option<Digit>) {
        assert!(
            pos.row < 9 && pos.col < 9,
            "position {pos:?} outside 9x9 grid"
        );
        self.cells[pos.row * 9 + pos.col] = digit;
    }

    /// Returns `true` if `digit` does not already appear in any house of `pos`,
    /// ignoring the cell itself.
    #[must_use]
    pub fn can_place(&self, pos: GridPos, digit: Digit) -> bool {
        House::containing(pos).into_iter().all(|house| {
            house
                .positions()
                .all(|other| other == pos || self.get(other) != Some(digit))
        })
    }

    /// Returns `true` if no house contains the same digit twice. Empty cells are ignored.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        House::ALL.into_iter().all(|house| {
            let mut seen = [false; 10];
            house.positions().filter_map(|pos| self.get(pos)).all(|digit| {
                let slot = &mut seen[usize::from(digit.value())];
                !std::mem::replace(slot, true)
            })
        })
    }

    /// Returns `true` if every cell is filled and the grid is valid.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some) && self.is_valid()
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Rows as numbers, `0` for empty cells.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 9]; 9] {
        let mut rows = [[0; 9]; 9];
        for pos in Self::positions() {
            rows[pos.row][pos.col] = self.get(pos).map_or(0, Digit::value);
        }
        rows
    }

    /// Builds a grid from rows of numbers; `0` (or any value outside 1-9) is empty.
    #[must_use]
    pub fn from_rows(rows: &[[u8; 9]; 9]) -> Self {
        let mut grid = Self::new();
        for pos in Self::positions() {
            grid.set(pos, Digit::from_value(rows[pos.row][pos.col]));
        }
        grid
    }
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(9).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}

impl Serialize for SudokuGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A well-known complete solution.
    pub(crate) const SOLVED: [[u8; 9]; 9] = [
        [5, 3, 4, 6, 7, 8, 9, 1, 2],
        [6, 7, 2, 1, 9, 5, 3, 4, 8],
        [1, 9, 8, 3, 4, 2, 5, 6, 7],
        [8, 5, 9, 7, 6, 1, 4, 2, 3],
        [4, 2, 6, 8, 5, 3, 7, 9, 1],
        [7, 1, 3, 9, 2, 4, 8, 5, 6],
        [9, 6, 1, 5, 3, 7, 2, 8, 4],
        [2, 8, 7, 4, 1, 9, 6, 3, 5],
        [3, 4, 5, 2, 8, 6, 1, 7, 9],
    ];

    #[test]
    fn test_complete_grid_is_valid() {
        let grid = SudokuGrid::from_rows(&SOLVED);
        assert!(grid.is_valid());
        assert!(grid.is_complete());
        assert_eq!(grid.filled_count(), CELL_COUNT);
        assert_eq!(grid.to_rows(), SOLVED);
    }

    #[test]
    fn test_duplicates_are_detected() {
        let mut rows = SOLVED;
        rows[0].swap(0, 1);
        let grid = SudokuGrid::from_rows(&rows);
        assert!(!grid.is_valid());
        assert!(!grid.is_complete());

        // same digit twice in one box but in different rows and columns
        let mut grid = SudokuGrid::new();
        grid.set(GridPos::new(0, 0), Some(Digit::D4));
        grid.set(GridPos::new(1, 1), Some(Digit::D4));
        assert!(!grid.is_valid());
    }

    #[test]
    fn test_partial_grid_is_valid_but_incomplete() {
        let mut rows = SOLVED;
        rows[4][4] = 0;
        let grid = SudokuGrid::from_rows(&rows);
        assert!(grid.is_valid());
        assert!(!grid.is_complete());
        assert!(grid.can_place(GridPos::new(4, 4), Digit::D5));
        assert!(!grid.can_place(GridPos::new(4, 4), Digit::D3));
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let mut grid = SudokuGrid::new();
        grid.set(GridPos::new(0, 2), Some(Digit::D7));
        let text = grid.to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "..7......");
        assert_eq!(text.lines().count(), 9);
    }
}
