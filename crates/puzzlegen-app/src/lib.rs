//! Facade over the puzzle engines, used by the `puzzlegen` command.
//!
//! [`generate_puzzle`] dispatches a [`GenerationConfig`] to the crossword,
//! word-search or Sudoku engine and wraps the result in a [`Puzzle`], which can
//! be serialized with serde or rendered as text with [`Puzzle::display`].
//!
//! # Examples
//!
//! ```
//! use puzzlegen_app::generate_puzzle;
//! use puzzlegen_core::{GameType, GenerationConfig, PuzzleSeed, block_on};
//! use puzzlegen_words::StaticWordSupply;
//!
//! let config = GenerationConfig {
//!     game_type: GameType::Sudoku,
//!     difficulty: 4,
//!     ..GenerationConfig::default()
//! };
//! let seed = PuzzleSeed::from_phrase("tuesday");
//! let puzzle = block_on(generate_puzzle(&config, &StaticWordSupply::default(), seed)).unwrap();
//! println!("{}", puzzle.display(false));
//! ```

use std::{fs, path::Path, str::FromStr as _};

use puzzlegen_core::{GenerationConfig, PuzzleSeed};

pub use self::{
    error::AppError,
    puzzle::{Puzzle, generate_puzzle},
    render::PuzzleText,
};

mod error;
mod puzzle;
mod render;

/// Reads a JSON [`GenerationConfig`]. Missing fields take their defaults.
///
/// The result is not validated; see [`GenerationConfig::validate`].
///
/// # Errors
///
/// Returns [`AppError::ReadConfig`] or [`AppError::ParseConfig`].
pub fn load_config(path: &Path) -> Result<GenerationConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AppError::ParseConfig {
        path: path.to_owned(),
        source,
    })
}

/// Interprets a seed argument: 64 hex digits are used as-is, anything else is
/// hashed into a seed.
#[must_use]
pub fn seed_from_arg(arg: &str) -> PuzzleSeed {
    PuzzleSeed::from_str(arg).unwrap_or_else(|_| PuzzleSeed::from_phrase(arg))
}

#[cfg(test)]
mod tests {
    use puzzlegen_core::{GameType, LanguageId, ThemeId};

    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path =
            std::env::temp_dir().join(format!("puzzlegen-{name}-{}.json", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_config_fills_defaults() {
        let path = write_temp(
            "partial",
            r#"{ "gameType": "wordsearch", "themes": ["animals", "sports"], "language": "pt" }"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.game_type, GameType::WordSearch);
        assert_eq!(config.themes, [ThemeId::Animals, ThemeId::Sports]);
        assert_eq!(config.language, LanguageId::Pt);
        assert_eq!(config.grid_size, GenerationConfig::default().grid_size);
    }

    #[test]
    fn test_load_config_errors() {
        let missing = std::env::temp_dir().join("puzzlegen-does-not-exist.json");
        assert!(load_config(&missing).unwrap_err().is_read_config());

        let path = write_temp("broken", r#"{ "gridSize": "big" }"#);
        let err = load_config(&path).unwrap_err();
        assert!(err.is_parse_config());
        assert!(err.to_string().starts_with("failed to parse "));
    }

    #[test]
    fn test_seed_from_arg() {
        let hex = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
        assert_eq!(seed_from_arg(hex).to_string(), hex);
        assert_eq!(seed_from_arg("monday"), PuzzleSeed::from_phrase("monday"));
        assert_ne!(seed_from_arg("monday"), seed_from_arg("tuesday"));
    }
}
