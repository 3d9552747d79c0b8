//! Command-line puzzle generator.
//!
//! Prints a crossword, word search or Sudoku built from the word lists under
//! `--words-dir`.
//!
//! # Usage
//!
//! ```sh
//! cargo run -- --game crossword --theme animals --theme sports --size 15 --words 12
//! cargo run -- --game sudoku --difficulty 5 --seed "monday puzzle" --answers
//! cargo run -- --config puzzle.json --format json
//! ```
//!
//! Set `RUST_LOG=debug` to see placement progress.

use std::{path::PathBuf, process};

use clap::{Parser, ValueEnum};
use puzzlegen_app::{AppError, Puzzle, generate_puzzle, load_config, seed_from_arg};
use puzzlegen_core::{GameType, GenerationConfig, LanguageId, PuzzleSeed, ThemeId, block_on};
use puzzlegen_words::WordDatabase;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON configuration file; other flags override its values.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Game to generate: crossword, wordsearch or sudoku.
    #[arg(short, long, value_name = "GAME")]
    game: Option<GameType>,

    /// Grid side length (10-21), ignored for Sudoku.
    #[arg(short, long, value_name = "SIZE")]
    size: Option<usize>,

    /// Number of words to place (8-30), ignored for Sudoku.
    #[arg(short, long, value_name = "COUNT")]
    words: Option<usize>,

    /// Theme id to draw words from. Repeatable.
    #[arg(short, long = "theme", value_name = "THEME")]
    themes: Vec<ThemeId>,

    /// Difficulty from 1 (easiest) to 5.
    #[arg(short, long, value_name = "LEVEL")]
    difficulty: Option<u8>,

    /// Word-list language: en, pt or es.
    #[arg(short, long, value_name = "LANG")]
    language: Option<LanguageId>,

    /// Directory holding `<language>/<theme>.txt` word lists.
    #[arg(long, value_name = "DIR", default_value = "data")]
    words_dir: PathBuf,

    /// Seed as 64 hex digits, or any phrase to hash into one.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the answer key instead of the puzzle (text format only).
    #[arg(short, long)]
    answers: bool,

    /// List the available themes and exit.
    #[arg(long)]
    list_themes: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.list_themes {
        for theme in ThemeId::ALL {
            println!(
                "{:<20} {}: {}",
                theme.id(),
                theme.name(),
                theme.description()
            );
        }
        return;
    }

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    };
    let seed = args
        .seed
        .as_deref()
        .map_or_else(PuzzleSeed::random, seed_from_arg);

    let words = WordDatabase::new(args.words_dir.clone());
    let puzzle = match block_on(generate_puzzle(&config, &words, seed)) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("seed: {seed}");
            process::exit(1);
        }
    };

    if let Err(e) = print_puzzle(&puzzle, &config, args.format, args.answers) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn build_config(args: &Args) -> Result<GenerationConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GenerationConfig::default(),
    };
    if let Some(game) = args.game {
        config.game_type = game;
    }
    if let Some(size) = args.size {
        config.grid_size = size;
    }
    if let Some(count) = args.words {
        config.word_count = count;
    }
    if !args.themes.is_empty() {
        config.themes.clone_from(&args.themes);
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(language) = args.language {
        config.language = language;
    }
    config.validate()?;
    Ok(config)
}

fn print_puzzle(
    puzzle: &Puzzle,
    config: &GenerationConfig,
    format: Format,
    answers: bool,
) -> Result<(), AppError> {
    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(puzzle).map_err(AppError::WriteJson)?;
            println!("{json}");
        }
        Format::Text => {
            let game = puzzle.game_type();
            if game.uses_words() {
                let themes: Vec<_> = config.themes.iter().map(|theme| theme.name()).collect();
                println!(
                    "{game} {size}x{size} ({}, {})",
                    themes.join(", "),
                    config.language.name(),
                    size = config.grid_size,
                );
            }
            println!("Seed: {}", puzzle.seed());
            println!();
            print!("{}", puzzle.display(answers));
        }
    }
    Ok(())
}
