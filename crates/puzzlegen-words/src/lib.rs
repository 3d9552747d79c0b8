//! Word supply for the crossword and word-search engines.
//!
//! Engines never read word lists themselves. They ask a [`WordSupply`] for a
//! de-duplicated, shuffled pool of [`WordEntry`] values and await the answer
//! before any placement work begins.
//!
//! Two implementations are provided:
//!
//! - [`WordDatabase`]: loads `<root>/<language>/<theme>.txt` files, caches them per
//!   `(language, theme)`, and filters/de-duplicates/shuffles on request.
//! - [`StaticWordSupply`]: hands back a fixed list in a fixed order.
//!
//! # Examples
//!
//! ```
//! use puzzlegen_core::{LanguageId, ThemeId, WordEntry, block_on};
//! use puzzlegen_words::{StaticWordSupply, WordRequest, WordSupply as _};
//!
//! let supply = StaticWordSupply::new(vec![WordEntry::new("otter", "River swimmer", 1)]);
//! let request = WordRequest {
//!     themes: vec![ThemeId::Animals],
//!     difficulty: 2,
//!     min_words: 10,
//!     language: LanguageId::En,
//! };
//! let words = block_on(supply.words_for_generation(&request));
//! assert_eq!(words.len(), 1);
//! ```

use std::future::Future;

use puzzlegen_core::{GenerationConfig, LanguageId, ThemeId, WordEntry};

pub use self::{database::WordDatabase, parse::parse_word_list};

mod database;
mod parse;

/// Parameters of one word-pool lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRequest {
    /// Themes to draw from, in priority order.
    pub themes: Vec<ThemeId>,
    /// Requested difficulty (1-5).
    pub difficulty: u8,
    /// How many words the caller would like; a hint, not a cap.
    pub min_words: usize,
    /// Word-list language.
    pub language: LanguageId,
}

impl WordRequest {
    /// Builds a request from a generation config, asking for `min_words` words.
    #[must_use]
    pub fn from_config(config: &GenerationConfig, min_words: usize) -> Self {
        Self {
            themes: config.themes.clone(),
            difficulty: config.difficulty,
            min_words,
            language: config.language,
        }
    }
}

/// Asynchronous source of candidate words.
///
/// Implementations never fail: an internal problem (a missing or unreadable list)
/// yields fewer words, possibly none, and the engine reports the shortfall.
pub trait WordSupply {
    /// Returns the candidate pool for `request`.
    fn words_for_generation(&self, request: &WordRequest) -> impl Future<Output = Vec<WordEntry>>;
}

impl<S: WordSupply + ?Sized> WordSupply for &S {
    fn words_for_generation(&self, request: &WordRequest) -> impl Future<Output = Vec<WordEntry>> {
        (**self).words_for_generation(request)
    }
}

/// A supply that always returns the same words in the same order.
///
/// The request is ignored. Useful when the caller already has its word list,
/// and for reproducible runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticWordSupply {
    words: Vec<WordEntry>,
}

impl StaticWordSupply {
    /// Creates a supply over `words`.
    #[must_use]
    pub fn new(words: Vec<WordEntry>) -> Self {
        Self { words }
    }
}

impl FromIterator<WordEntry> for StaticWordSupply {
    fn from_iter<T: IntoIterator<Item = WordEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl WordSupply for StaticWordSupply {
    fn words_for_generation(&self, _request: &WordRequest) -> impl Future<Output = Vec<WordEntry>> {
        std::future::ready(self.words.clone())
    }
}
