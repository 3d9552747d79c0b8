use log::info;
use puzzlegen_core::{GameType, GenerationConfig, GenerationError, PuzzleSeed};
use puzzlegen_crossword::{CrosswordGenerator, CrosswordPuzzle};
use puzzlegen_sudoku::{SudokuGenerator, SudokuPuzzle};
use puzzlegen_words::WordSupply;
use puzzlegen_wordsearch::{WordSearchGenerator, WordSearchPuzzle};
use serde::Serialize;

use crate::PuzzleText;

/// A generated puzzle of any kind.
///
/// Serializes with a `"type"` tag naming the game (`crossword`, `wordsearch`, `sudoku`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::From, derive_more::IsVariant)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Puzzle {
    /// An interlocking crossword.
    Crossword(CrosswordPuzzle),
    /// A letter grid with hidden words.
    WordSearch(WordSearchPuzzle),
    /// A 9×9 Sudoku.
    Sudoku(SudokuPuzzle),
}

impl Puzzle {
    /// The kind of game this is.
    #[must_use]
    pub const fn game_type(&self) -> GameType {
        match self {
            Self::Crossword(_) => GameType::Crossword,
            Self::WordSearch(_) => GameType::WordSearch,
            Self::Sudoku(_) => GameType::Sudoku,
        }
    }

    /// Seed the puzzle was generated from.
    #[must_use]
    pub const fn seed(&self) -> PuzzleSeed {
        match self {
            Self::Crossword(puzzle) => puzzle.seed,
            Self::WordSearch(puzzle) => puzzle.seed,
            Self::Sudoku(puzzle) => puzzle.seed,
        }
    }

    /// Plain-text rendering for a terminal: the puzzle, or its answer key when
    /// `answers` is set.
    #[must_use]
    pub const fn display(&self, answers: bool) -> PuzzleText<'_> {
        PuzzleText::new(self, answers)
    }
}

/// Generates a puzzle of the configured game type.
///
/// Word games await `supply` for their word pool; Sudoku never touches it.
/// The configuration is assumed to be valid (see [`GenerationConfig::validate`]).
///
/// # Errors
///
/// Returns the engine's [`GenerationError`] unchanged.
pub async fn generate_puzzle<S: WordSupply>(
    config: &GenerationConfig,
    supply: &S,
    seed: PuzzleSeed,
) -> Result<Puzzle, GenerationError> {
    info!("generating {} puzzle with seed {seed}", config.game_type);
    let puzzle: Puzzle = match config.game_type {
        GameType::Crossword => CrosswordGenerator::new(config)
            .generate_with_seed(supply, seed)
            .await?
            .into(),
        GameType::WordSearch => WordSearchGenerator::new(config)
            .generate_with_seed(supply, seed)
            .await?
            .into(),
        GameType::Sudoku => SudokuGenerator::new(config)
            .generate_with_seed(seed)?
            .into(),
    };
    Ok(puzzle)
}

#[cfg(test)]
mod tests {
    use puzzlegen_core::{WordEntry, block_on};
    use puzzlegen_words::StaticWordSupply;

    use super::*;

    #[test]
    fn test_sudoku_ignores_supply() {
        let config = GenerationConfig {
            game_type: GameType::Sudoku,
            ..GenerationConfig::default()
        };
        let seed = PuzzleSeed::from_phrase("facade");
        let supply = StaticWordSupply::default();
        let puzzle = block_on(generate_puzzle(&config, &supply, seed)).unwrap();
        assert!(puzzle.is_sudoku());
        assert_eq!(puzzle.game_type(), GameType::Sudoku);
        assert_eq!(puzzle.seed(), seed);
    }

    #[test]
    fn test_word_games_report_empty_supply() {
        for game_type in [GameType::Crossword, GameType::WordSearch] {
            let config = GenerationConfig {
                game_type,
                ..GenerationConfig::default()
            };
            let supply: StaticWordSupply = [WordEntry::new("OTTER", "River swimmer", 1)]
                .into_iter()
                .collect();
            let seed = PuzzleSeed::from_phrase("x");
            let result = block_on(generate_puzzle(&config, &supply, seed));
            assert_eq!(result, Err(GenerationError::InsufficientWords { found: 1 }));
        }
    }
}
