use std::cmp::Reverse;

use log::{debug, warn};
use puzzlegen_core::{
    GenerationConfig, GenerationError, GridPos, LetterGrid, MIN_CANDIDATE_WORDS, PuzzleSeed,
    WordEntry,
};
use puzzlegen_words::{WordRequest, WordSupply};
use rand::Rng;

use crate::{WordSearchDirection, WordSearchEntry, WordSearchPuzzle};

/// Random placements tried per word before it is skipped.
const MAX_ATTEMPTS_PER_WORD: usize = 100;

/// Builds word searches for one configuration.
///
/// # Examples
///
/// ```
/// use puzzlegen_core::{GameType, GenerationConfig, PuzzleSeed, WordEntry, block_on};
/// use puzzlegen_words::StaticWordSupply;
/// use puzzlegen_wordsearch::WordSearchGenerator;
///
/// let supply: StaticWordSupply = ["OTTER", "EAGLE", "ZEBRA", "TIGER", "WHALE", "HORSE"]
///     .into_iter()
///     .map(|word| WordEntry::new(word, "animal", 1))
///     .collect();
/// let config = GenerationConfig {
///     game_type: GameType::WordSearch,
///     word_count: 8,
///     ..GenerationConfig::default()
/// };
///
/// let seed = PuzzleSeed::from_phrase("zoo");
/// let generator = WordSearchGenerator::new(&config);
/// let puzzle = block_on(generator.generate_with_seed(&supply, seed)).unwrap();
/// assert!(puzzle.grid.is_full());
/// assert_eq!(puzzle.word_list.len(), puzzle.placed_words.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordSearchGenerator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> WordSearchGenerator<'a> {
    /// Creates a generator for `config`.
    #[must_use]
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Generates a word search with a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_seed`](Self::generate_with_seed).
    pub async fn generate<S: WordSupply>(
        &self,
        supply: &S,
    ) -> Result<WordSearchPuzzle, GenerationError> {
        self.generate_with_seed(supply, PuzzleSeed::random()).await
    }

    /// Generates a word search whose random choices are driven by `seed`.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::InsufficientWords`] if the supply returns fewer than five words.
    /// - [`GenerationError::InsufficientPlacement`] if fewer than five words were hidden.
    pub async fn generate_with_seed<S: WordSupply>(
        &self,
        supply: &S,
        seed: PuzzleSeed,
    ) -> Result<WordSearchPuzzle, GenerationError> {
        let config = self.config;
        let request = WordRequest::from_config(config, config.word_count * 2);
        let mut entries = supply.words_for_generation(&request).await;
        if entries.len() < MIN_CANDIDATE_WORDS {
            return Err(GenerationError::InsufficientWords {
                found: entries.len(),
            });
        }
        entries.sort_by_key(|entry| Reverse(entry.letters().len()));
        entries.truncate(config.word_count);

        let mut rng = seed.rng();
        let mut board = Board::new(config.grid_size);
        for entry in &entries {
            if !board.hide(entry, &mut rng) {
                warn!(
                    "skipping {}: no free path after {MAX_ATTEMPTS_PER_WORD} attempts",
                    entry.word
                );
            }
        }
        board.fill_noise(&mut rng);

        let placed = board.placed.len();
        debug!("hid {placed} of {} words", entries.len());
        if placed < MIN_CANDIDATE_WORDS {
            return Err(GenerationError::InsufficientPlacement { placed });
        }
        Ok(board.into_puzzle(seed))
    }
}

/// Grid and hidden words threaded through one word-search build.
#[derive(Debug)]
struct Board {
    grid: LetterGrid,
    placed: Vec<WordSearchEntry>,
}

impl Board {
    fn new(size: usize) -> Self {
        Self {
            grid: LetterGrid::new(size),
            placed: Vec::new(),
        }
    }

    /// Tries random directions and anchors until the word fits.
    fn hide<R: Rng>(&mut self, entry: &WordEntry, rng: &mut R) -> bool {
        let letters = entry.letters();
        for _ in 0..MAX_ATTEMPTS_PER_WORD {
            let pool = &WordSearchDirection::WEIGHTED;
            let direction = pool[rng.random_range(0..pool.len())];
            let Some(start) = self.random_start(letters.len(), direction, rng) else {
                continue;
            };
            if self.fits(&letters, start, direction) {
                self.write(&letters, start, direction);
                self.placed.push(WordSearchEntry {
                    word: entry.word.clone(),
                    start_row: start.row,
                    start_col: start.col,
                    direction,
                });
                return true;
            }
        }
        false
    }

    /// Picks an anchor that keeps the whole path on the grid, if one exists.
    fn random_start<R: Rng>(
        &self,
        len: usize,
        direction: WordSearchDirection,
        rng: &mut R,
    ) -> Option<GridPos> {
        let size = self.grid.size();
        let span = (size + 1).checked_sub(len).filter(|&n| n > 0)?;
        let max_row = if direction.spans_rows() { span } else { size };
        let max_col = if direction.spans_cols() { span } else { size };
        Some(GridPos::new(
            rng.random_range(0..max_row),
            rng.random_range(0..max_col),
        ))
    }

    /// Every cell on the path is blank or already holds the required letter.
    fn fits(&self, letters: &[char], start: GridPos, direction: WordSearchDirection) -> bool {
        let len = letters.len();
        letters.iter().enumerate().all(|(i, &letter)| {
            let pos = direction.cell(start, i, len);
            pos.row < self.grid.size()
                && pos.col < self.grid.size()
                && self.grid.get(pos).is_none_or(|existing| existing == letter)
        })
    }

    fn write(&mut self, letters: &[char], start: GridPos, direction: WordSearchDirection) {
        let len = letters.len();
        for (i, &letter) in letters.iter().enumerate() {
            self.grid[direction.cell(start, i, len)] = Some(letter);
        }
    }

    fn fill_noise<R: Rng>(&mut self, rng: &mut R) {
        for pos in self.grid.positions() {
            if self.grid.is_blank(pos) {
                self.grid[pos] = Some(char::from(rng.random_range(b'A'..=b'Z')));
            }
        }
    }

    fn into_puzzle(self, seed: PuzzleSeed) -> WordSearchPuzzle {
        let word_list = self.placed.iter().map(|entry| entry.word.clone()).collect();
        WordSearchPuzzle {
            grid: self.grid,
            placed_words: self.placed,
            word_list,
            seed,
        }
    }
}
