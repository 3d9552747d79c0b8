use std::{io, path::PathBuf};

use puzzlegen_core::{ConfigError, GenerationError};

/// Failure of a command-line run.
#[derive(
    Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant,
)]
pub enum AppError {
    /// The configuration file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    #[from(ignore)]
    ReadConfig {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The configuration file is not valid JSON for a
    /// [`GenerationConfig`](puzzlegen_core::GenerationConfig).
    #[display("failed to parse {}: {source}", path.display())]
    #[from(ignore)]
    ParseConfig {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The merged configuration is out of range.
    #[display("invalid configuration: {_0}")]
    Config(ConfigError),
    /// The engine produced no puzzle.
    #[display("{_0}")]
    Generation(GenerationError),
    /// The puzzle could not be written as JSON.
    #[display("failed to write JSON: {_0}")]
    WriteJson(serde_json::Error),
}
