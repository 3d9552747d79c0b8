use log::debug;
use puzzlegen_core::{GenerationConfig, GenerationError, PuzzleSeed};
use rand::{Rng, seq::SliceRandom as _};

use crate::{SudokuCell, SudokuDifficulty, SudokuGrid, SudokuPuzzle, fill::fill_solution};

/// Builds Sudoku puzzles for one configuration.
///
/// Only the configuration's difficulty is used; Sudoku grids are always 9×9 and
/// take no words.
///
/// # Examples
///
/// ```
/// use puzzlegen_core::{GenerationConfig, PuzzleSeed};
/// use puzzlegen_sudoku::{SudokuDifficulty, SudokuGenerator};
///
/// let config = GenerationConfig {
///     difficulty: 5,
///     ..GenerationConfig::default()
/// };
/// let puzzle = SudokuGenerator::new(&config)
///     .generate_with_seed(PuzzleSeed::from_phrase("expert"))
///     .unwrap();
/// assert_eq!(puzzle.difficulty, SudokuDifficulty::Expert);
/// assert!((12..=16).contains(&puzzle.given_count()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SudokuGenerator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> SudokuGenerator<'a> {
    /// Creates a generator for `config`.
    #[must_use]
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Generates a puzzle with a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_seed`](Self::generate_with_seed).
    pub fn generate(&self) -> Result<SudokuPuzzle, GenerationError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates a puzzle whose random choices are driven by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::SolutionGenerationFailed`] if the fill search
    /// runs out of candidates, which does not happen for an empty 9×9 grid.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<SudokuPuzzle, GenerationError> {
        let mut rng = seed.rng();
        let solved_grid =
            fill_solution(&mut rng).ok_or(GenerationError::SolutionGenerationFailed)?;

        let difficulty = SudokuDifficulty::from_level(self.config.difficulty);
        let removals = rng.random_range(difficulty.removal_range());
        debug!("carving {removals} cells for a {difficulty} sudoku");

        let mut order: Vec<_> = SudokuGrid::positions().collect();
        order.shuffle(&mut rng);

        let mut grid = [[SudokuCell::default(); 9]; 9];
        for (i, pos) in order.into_iter().enumerate() {
            if i >= removals {
                grid[pos.row][pos.col] = SudokuCell {
                    value: solved_grid.get(pos),
                    is_given: true,
                };
            }
        }

        Ok(SudokuPuzzle {
            grid,
            difficulty,
            solved_grid,
            seed,
        })
    }
}
