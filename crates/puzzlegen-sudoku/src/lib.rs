//! Sudoku engine.
//!
//! A puzzle is made in two steps. A complete solution is built by randomized
//! backtracking over the cells in row-major order, then a tier-dependent number
//! of randomly chosen cells is emptied. The carving does not check that the
//! remaining givens have a unique solution.
//!
//! The crate also exposes [`SudokuGrid`] with the validity checks used by the
//! engine ([`SudokuGrid::is_valid`], [`SudokuGrid::is_complete`]).

pub use self::{
    difficulty::SudokuDifficulty,
    digit::Digit,
    generator::SudokuGenerator,
    grid::{CELL_COUNT, SudokuGrid},
    house::House,
    puzzle::{SudokuCell, SudokuPuzzle},
};

mod difficulty;
mod digit;
mod fill;
mod generator;
mod grid;
mod house;
mod puzzle;
