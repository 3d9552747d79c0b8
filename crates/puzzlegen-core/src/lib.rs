//! Core data structures shared by the puzzlegen engines.
//!
//! This crate holds the pieces every generator needs but none of them owns:
//!
//! - [`config`]: the declarative [`GenerationConfig`] and its identifier types
//!   ([`GameType`], [`ThemeId`], [`LanguageId`]).
//! - [`word`]: the [`WordEntry`] records handed out by a word supply.
//! - [`grid`]: [`LetterGrid`], the square character grid used by the crossword and
//!   word-search engines, addressed by [`GridPos`].
//! - [`seed`]: [`PuzzleSeed`], the reproducible random source behind every generator.
//! - [`error`]: the [`GenerationError`] taxonomy returned at every engine boundary.
//! - [`poll`]: a tiny [`block_on`] for driving word-supply futures from synchronous code.
//!
//! # Examples
//!
//! ```
//! use puzzlegen_core::{GameType, GenerationConfig, ThemeId};
//!
//! let config = GenerationConfig {
//!     game_type: GameType::WordSearch,
//!     themes: vec![ThemeId::Animals],
//!     ..GenerationConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod poll;
pub mod seed;
pub mod word;

pub use self::{
    config::{ConfigError, GameType, GenerationConfig, LanguageId, ParseIdError, ThemeId},
    error::GenerationError,
    grid::{GridPos, LetterGrid},
    poll::block_on,
    seed::{ParseSeedError, PuzzleSeed},
    word::WordEntry,
};

/// Fewest candidate words a word game accepts from its supply before giving up.
pub const MIN_CANDIDATE_WORDS: usize = 5;
