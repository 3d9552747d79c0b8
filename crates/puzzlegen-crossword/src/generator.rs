use std::{cmp::Reverse, collections::HashSet};

use log::debug;
use puzzlegen_core::{GenerationConfig, GenerationError, MIN_CANDIDATE_WORDS, PuzzleSeed};
use puzzlegen_words::{WordRequest, WordSupply};

use crate::{
    CrosswordPuzzle,
    layout::{Candidate, Layout},
};

/// Builds crosswords for one configuration.
///
/// Each call to [`generate`](Self::generate) runs a fresh, independent build; the
/// generator itself holds no mutable state.
///
/// # Examples
///
/// ```
/// use puzzlegen_core::{GenerationConfig, PuzzleSeed, WordEntry, block_on};
/// use puzzlegen_crossword::CrosswordGenerator;
/// use puzzlegen_words::StaticWordSupply;
///
/// let supply: StaticWordSupply = [
///     ("PLANET", "Orbits a star"),
///     ("ANCHOR", "Holds a ship"),
///     ("TENNIS", "Racket sport"),
///     ("LEMON", "Sour fruit"),
///     ("PIANO", "Keyboard instrument"),
///     ("OCEAN", "Salt water"),
/// ]
/// .into_iter()
/// .map(|(word, clue)| WordEntry::new(word, clue, 1))
/// .collect();
///
/// let config = GenerationConfig::default();
/// let generator = CrosswordGenerator::new(&config);
/// match block_on(generator.generate(&supply)) {
///     Ok(puzzle) => assert!(!puzzle.placed_words.is_empty()),
///     Err(e) => println!("try again: {e}"),
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CrosswordGenerator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> CrosswordGenerator<'a> {
    /// Creates a generator for `config`.
    #[must_use]
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Generates a crossword with a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_seed`](Self::generate_with_seed).
    pub async fn generate<S: WordSupply>(
        &self,
        supply: &S,
    ) -> Result<CrosswordPuzzle, GenerationError> {
        self.generate_with_seed(supply, PuzzleSeed::random()).await
    }

    /// Generates a crossword whose random choices are driven by `seed`.
    ///
    /// With the same seed and the same supplied words the result is identical.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::InsufficientWords`] if the supply returns fewer than five words.
    /// - [`GenerationError::PlacementShortfall`] if too few words could be interlocked.
    /// - [`GenerationError::GenerationFailed`] if no selected word fits the grid.
    pub async fn generate_with_seed<S: WordSupply>(
        &self,
        supply: &S,
        seed: PuzzleSeed,
    ) -> Result<CrosswordPuzzle, GenerationError> {
        let config = self.config;
        let request = WordRequest::from_config(config, config.word_count * 3);
        let entries = supply.words_for_generation(&request).await;
        if entries.len() < MIN_CANDIDATE_WORDS {
            return Err(GenerationError::InsufficientWords {
                found: entries.len(),
            });
        }

        let mut candidates: Vec<_> = entries.into_iter().map(Candidate::new).collect();
        candidates.sort_by_key(|candidate| Reverse(candidate.len()));
        let candidates = select_balanced(&candidates, config.word_count);

        let mut rng = seed.rng();
        let mut layout = Layout::new(config.grid_size);
        let anchored = candidates
            .iter()
            .any(|candidate| layout.place_anchor(candidate));
        if !anchored {
            return Err(GenerationError::failed(format!(
                "no selected word fits a {size}x{size} grid",
                size = config.grid_size
            )));
        }

        let max_attempts = (candidates.len() * 10).min(200);
        let mut attempts = 0;
        for candidate in &candidates {
            if layout.placed_count() >= config.word_count || attempts >= max_attempts {
                break;
            }
            if layout.contains_word(candidate) {
                continue;
            }
            if !layout.try_place(candidate, &mut rng) {
                debug!("no legal intersection for {}", candidate.entry.word);
            }
            attempts += 1;
        }

        let placed = layout.placed_count();
        let required = required_words(config.word_count);
        debug!(
            "placed {placed} of {} crossword words ({} candidates, {attempts} attempts)",
            config.word_count,
            candidates.len()
        );
        if placed < required {
            return Err(GenerationError::PlacementShortfall { placed, required });
        }
        Ok(layout.into_puzzle(seed))
    }
}

/// Fewest placed words a crossword may have: `max(2, min(0.6 × word_count, 5))`,
/// rounded up.
#[must_use]
pub fn required_words(word_count: usize) -> usize {
    (word_count * 3).div_ceil(5).clamp(2, 5)
}

/// Picks a length-balanced subset of length-sorted candidates.
///
/// Roughly 30% long words (6+ letters), 50% medium (4-7) and 30% short (3-5),
/// de-duplicated case-insensitively and capped at `2 × word_count`.
pub(crate) fn select_balanced(candidates: &[Candidate], word_count: usize) -> Vec<Candidate> {
    let max_words = candidates.len().min(word_count * 2);
    let quota = |tenths: usize| (max_words * tenths).div_ceil(10);

    let long = candidates.iter().filter(|c| c.len() >= 6).take(quota(3));
    let medium = candidates
        .iter()
        .filter(|c| (4..=7).contains(&c.len()))
        .take(quota(5));
    let short = candidates
        .iter()
        .filter(|c| (3..=5).contains(&c.len()))
        .take(quota(3));

    let mut seen = HashSet::new();
    long.chain(medium)
        .chain(short)
        .filter(|c| seen.insert(c.entry.dedup_key()))
        .take(max_words)
        .cloned()
        .collect()
}
