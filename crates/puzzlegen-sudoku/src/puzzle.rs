use puzzlegen_core::{GridPos, PuzzleSeed};
use serde::{Serialize, Serializer, ser::SerializeStruct as _};

use crate::{Digit, SudokuDifficulty, SudokuGrid};

/// One cell of a Sudoku puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SudokuCell {
    /// Revealed digit; `None` (serialized as `0`) for cells the solver fills in.
    pub value: Option<Digit>,
    /// Whether the digit is revealed from the start.
    pub is_given: bool,
}

/// Serializes as `{"value": 0-9, "isGiven": bool}`.
impl Serialize for SudokuCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut cell = serializer.serialize_struct("SudokuCell", 2)?;
        cell.serialize_field("value", &self.value.map_or(0, Digit::value))?;
        cell.serialize_field("isGiven", &self.is_given)?;
        cell.end()
    }
}

/// A generated Sudoku: the carved puzzle plus its solution.
///
/// Given cells hold the solution's digit; every other cell is empty. Uniqueness
/// of the solution is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SudokuPuzzle {
    /// Cells in row-major order, nine rows of nine.
    pub grid: [[SudokuCell; 9]; 9],
    /// Tier the carving was drawn from.
    pub difficulty: SudokuDifficulty,
    /// The complete solution.
    pub solved_grid: SudokuGrid,
    /// Seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

impl SudokuPuzzle {
    /// Cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the 9×9 grid.
    #[must_use]
    pub fn cell(&self, pos: GridPos) -> SudokuCell {
        self.grid[pos.row][pos.col]
    }

    /// Number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.is_given)
            .count()
    }

    /// Number of cells left for the solver.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.value.is_none())
            .count()
    }

    /// The puzzle as a grid of givens.
    #[must_use]
    pub fn givens(&self) -> SudokuGrid {
        let mut grid = SudokuGrid::new();
        for pos in SudokuGrid::positions() {
            grid.set(pos, self.cell(pos).value);
        }
        grid
    }

    /// Returns `true` if the solution is complete and every given agrees with it.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.solved_grid.is_complete()
            && SudokuGrid::positions().all(|pos| {
                let cell = self.cell(pos);
                if cell.is_given {
                    cell.value.is_some() && cell.value == self.solved_grid.get(pos)
                } else {
                    cell.value.is_none()
                }
            })
    }
}
