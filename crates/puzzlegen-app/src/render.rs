//! Plain-text rendering of puzzles and answer keys.

use std::{
    collections::HashSet,
    fmt::{self, Display, Write as _},
};

use puzzlegen_core::GridPos;
use puzzlegen_crossword::{Clue, CrosswordPuzzle};
use puzzlegen_sudoku::SudokuPuzzle;
use puzzlegen_wordsearch::{WordSearchEntry, WordSearchPuzzle};

use crate::Puzzle;

/// Blocked crossword cell.
const BLOCKED: char = '#';
/// Crossword cell the player fills in.
const OPEN: char = '_';
/// Empty Sudoku cell, or a word-search cell outside every answer.
const EMPTY: char = '.';

/// Helper returned by [`Puzzle::display`].
#[derive(Debug, Clone, Copy)]
pub struct PuzzleText<'a> {
    puzzle: &'a Puzzle,
    answers: bool,
}

impl<'a> PuzzleText<'a> {
    pub(crate) const fn new(puzzle: &'a Puzzle, answers: bool) -> Self {
        Self { puzzle, answers }
    }
}

impl Display for PuzzleText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.puzzle {
            Puzzle::Crossword(puzzle) => crossword(f, puzzle, self.answers),
            Puzzle::WordSearch(puzzle) => word_search(f, puzzle, self.answers),
            Puzzle::Sudoku(puzzle) => sudoku(f, puzzle, self.answers),
        }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: impl IntoIterator<Item = char>) -> fmt::Result {
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        f.write_char(cell)?;
    }
    writeln!(f)
}

/// Crossword cells are two characters wide so clue numbers fit.
fn crossword(f: &mut fmt::Formatter<'_>, puzzle: &CrosswordPuzzle, answers: bool) -> fmt::Result {
    let numbers = puzzle.cell_numbers();
    for (row, cells) in puzzle.grid.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if col > 0 {
                f.write_char(' ')?;
            }
            match (cell, numbers.get(&GridPos::new(row, col))) {
                (None, _) => write!(f, "{BLOCKED}{BLOCKED}")?,
                (Some(letter), _) if answers => write!(f, "{letter:>2}")?,
                (Some(_), Some(number)) => write!(f, "{number:>2}")?,
                (Some(_), None) => write!(f, "{OPEN:>2}")?,
            }
        }
        writeln!(f)?;
    }

    let sections = [("Across", &puzzle.clues.across), ("Down", &puzzle.clues.down)];
    for (title, clues) in sections {
        if clues.is_empty() {
            continue;
        }
        writeln!(f)?;
        writeln!(f, "{title}")?;
        for clue in clues {
            clue_line(f, puzzle, clue, answers)?;
        }
    }
    Ok(())
}

fn clue_line(
    f: &mut fmt::Formatter<'_>,
    puzzle: &CrosswordPuzzle,
    clue: &Clue,
    answers: bool,
) -> fmt::Result {
    let word = puzzle.placed_words.iter().find(|w| w.number == clue.number);
    write!(f, "  {:>2}. {}", clue.number, clue.clue)?;
    if let Some(word) = word {
        write!(f, " ({})", word.length)?;
        if answers {
            write!(f, ": {}", word.word.to_uppercase())?;
        }
    }
    writeln!(f)
}

fn word_search(
    f: &mut fmt::Formatter<'_>,
    puzzle: &WordSearchPuzzle,
    answers: bool,
) -> fmt::Result {
    let answer_cells: HashSet<_> = puzzle
        .placed_words
        .iter()
        .flat_map(WordSearchEntry::cells)
        .collect();
    for (row, cells) in puzzle.grid.rows().enumerate() {
        write_row(
            f,
            cells.iter().enumerate().map(|(col, cell)| match cell {
                Some(letter) if !answers || answer_cells.contains(&GridPos::new(row, col)) => {
                    *letter
                }
                _ => EMPTY,
            }),
        )?;
    }

    writeln!(f)?;
    writeln!(f, "Words")?;
    let mut words: Vec<_> = puzzle.word_list.iter().map(|w| w.to_uppercase()).collect();
    words.sort();
    for word in words {
        writeln!(f, "  {word}")?;
    }
    Ok(())
}

fn sudoku(f: &mut fmt::Formatter<'_>, puzzle: &SudokuPuzzle, answers: bool) -> fmt::Result {
    let grid = if answers {
        puzzle.solved_grid.clone()
    } else {
        puzzle.givens()
    };
    writeln!(f, "Sudoku ({})", puzzle.difficulty)?;
    for (row, values) in grid.to_rows().iter().enumerate() {
        if row > 0 && row % 3 == 0 {
            writeln!(f, "------+-------+------")?;
        }
        for (col, &value) in values.iter().enumerate() {
            if col > 0 {
                f.write_str(if col % 3 == 0 { " | " } else { " " })?;
            }
            match value {
                0 => f.write_char(EMPTY)?,
                value => write!(f, "{value}")?,
            }
        }
        writeln!(f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use puzzlegen_core::{GameType, GenerationConfig, LetterGrid, PuzzleSeed, block_on};
    use puzzlegen_crossword::{Clues, Direction, PlacedWord};
    use puzzlegen_words::{StaticWordSupply, parse_word_list};

    use super::*;
    use crate::generate_puzzle;

    const SIZE: usize = 15;

    fn supply() -> StaticWordSupply {
        parse_word_list(include_str!("../../../data/en/general-knowledge.txt"))
            .into_iter()
            .collect()
    }

    fn generate(game_type: GameType, phrase: &str) -> Puzzle {
        let config = GenerationConfig {
            game_type,
            grid_size: SIZE,
            word_count: 10,
            ..GenerationConfig::default()
        };
        let seed = PuzzleSeed::from_phrase(phrase);
        block_on(generate_puzzle(&config, &supply(), seed)).unwrap()
    }

    #[test]
    fn test_sudoku_text() {
        let puzzle = generate(GameType::Sudoku, "render");
        let text = puzzle.display(false).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].starts_with("Sudoku ("));
        assert_eq!(lines.len(), 1 + 9 + 2);
        assert_eq!(lines[4], "------+-------+------");
        assert!(text.contains('.'));

        let answers = puzzle.display(true).to_string();
        assert!(!answers.contains('.'));
    }

    #[test]
    fn test_word_search_answer_key_masks_noise() {
        let puzzle = generate(GameType::WordSearch, "render");
        let Puzzle::WordSearch(inner) = &puzzle else {
            panic!("expected a word search");
        };
        let text = puzzle.display(false).to_string();
        let grid_lines: Vec<_> = text.lines().take(SIZE).collect();
        assert!(grid_lines.iter().all(|line| !line.contains(EMPTY)));
        assert_eq!(grid_lines[0].split(' ').count(), SIZE);
        for word in &inner.word_list {
            assert!(text.contains(&format!("  {word}")));
        }

        let key = puzzle.display(true).to_string();
        let letters = key
            .lines()
            .take(SIZE)
            .flat_map(|line| line.split(' '))
            .filter(|cell| *cell != ".")
            .count();
        let answer_cells: HashSet<_> = inner
            .placed_words
            .iter()
            .flat_map(WordSearchEntry::cells)
            .collect();
        assert_eq!(letters, answer_cells.len());
    }

    #[test]
    fn test_crossword_hides_letters_until_answers() {
        let puzzle = generate(GameType::Crossword, "render");
        let Puzzle::Crossword(inner) = &puzzle else {
            panic!("expected a crossword");
        };
        let text = puzzle.display(false).to_string();
        assert!(text.contains(BLOCKED));
        assert!(text.contains("Across"));
        let grid: String = text.lines().take(SIZE).collect();
        let is_grid_char = |c: char| matches!(c, '#' | '_' | ' ') || c.is_ascii_digit();
        assert!(grid.chars().all(is_grid_char));
        for number in inner.cell_numbers().values() {
            assert!(grid.contains(&format!("{number:>2}")));
        }

        let key = puzzle.display(true).to_string();
        let anchor = &inner.placed_words[0];
        let line = format!(" 1. {} ({}): {}", anchor.clue, anchor.length, anchor.word);
        assert!(key.contains(&line));
    }

    #[test]
    fn test_crossword_grid_shows_start_numbers() {
        fn word(
            word: &str,
            row: usize,
            col: usize,
            direction: Direction,
            number: usize,
        ) -> PlacedWord {
            PlacedWord {
                word: word.to_owned(),
                clue: format!("clue {number}"),
                start_row: row,
                start_col: col,
                direction,
                number,
                length: word.len(),
            }
        }

        let placed_words = vec![
            word("COW", 0, 0, Direction::Vertical, 1),
            word("CAT", 0, 0, Direction::Horizontal, 2),
            word("WE", 2, 0, Direction::Horizontal, 3),
        ];
        let mut grid = LetterGrid::new(4);
        for placed in &placed_words {
            for (pos, letter) in placed.cells().zip(placed.letters()) {
                grid[pos] = Some(letter);
            }
        }
        let puzzle = Puzzle::from(CrosswordPuzzle {
            grid,
            clues: Clues::from_words(&placed_words),
            placed_words,
            seed: PuzzleSeed::from_phrase("numbers"),
        });

        let text = puzzle.display(false).to_string();
        let rows: Vec<_> = text.lines().take(4).collect();
        assert_eq!(
            rows,
            [" 1  _  _ ##", " _ ## ## ##", " 3  _ ## ##", "## ## ## ##"]
        );

        let key = puzzle.display(true).to_string();
        assert_eq!(key.lines().next(), Some(" C  A  T ##"));
    }
}
