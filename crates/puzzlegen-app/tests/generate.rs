//! End-to-end generation against the word lists shipped in `data/`.

use std::path::PathBuf;

use puzzlegen_app::{Puzzle, generate_puzzle};
use puzzlegen_core::{
    GameType, GenerationConfig, GenerationError, LanguageId, PuzzleSeed, ThemeId, block_on,
};
use puzzlegen_words::{WordDatabase, WordRequest, WordSupply as _};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn database() -> WordDatabase {
    WordDatabase::with_seed(data_dir(), PuzzleSeed::from_phrase("integration"))
}

fn config(game_type: GameType) -> GenerationConfig {
    GenerationConfig {
        game_type,
        themes: vec![ThemeId::GeneralKnowledge, ThemeId::Animals],
        ..GenerationConfig::default()
    }
}

#[test]
fn test_database_serves_both_themes() {
    let db = database();
    let request = WordRequest::from_config(&config(GameType::Crossword), 45);
    let words = block_on(db.words_for_generation(&request));
    assert!(words.len() >= 45, "only {} words", words.len());
    assert!(words.iter().all(|w| (1..=3).contains(&w.difficulty)));
    assert_eq!(db.cached_lists(), 2);
}

#[test]
fn test_crossword_from_files() {
    let db = database();
    let puzzle = block_on(generate_puzzle(
        &config(GameType::Crossword),
        &db,
        PuzzleSeed::from_phrase("crossword"),
    ))
    .unwrap();
    let Puzzle::Crossword(crossword) = puzzle else {
        panic!("expected a crossword");
    };
    assert!(crossword.placed_words.len() >= 5);
    for word in &crossword.placed_words {
        for (pos, letter) in word.cells().zip(word.letters()) {
            assert_eq!(crossword.grid.get(pos), Some(letter));
        }
    }
}

#[test]
fn test_word_search_in_portuguese() {
    let mut config = config(GameType::WordSearch);
    config.language = LanguageId::Pt;
    config.themes = vec![ThemeId::Animals];
    config.word_count = 10;

    let puzzle = block_on(generate_puzzle(
        &config,
        &database(),
        PuzzleSeed::from_phrase("palavras"),
    ))
    .unwrap();
    let Puzzle::WordSearch(search) = puzzle else {
        panic!("expected a word search");
    };
    assert!(search.grid.is_full());
    assert!(search.placed_words.len() >= 5);
    for entry in &search.placed_words {
        for (pos, letter) in entry.cells().zip(entry.letters()) {
            assert_eq!(search.grid.get(pos), Some(letter));
        }
    }
}

#[test]
fn test_missing_theme_reports_insufficient_words() {
    let mut config = config(GameType::WordSearch);
    config.themes = vec![ThemeId::Transportation];
    let result = block_on(generate_puzzle(
        &config,
        &database(),
        PuzzleSeed::from_phrase("empty"),
    ));
    assert_eq!(result, Err(GenerationError::InsufficientWords { found: 0 }));
}

#[test]
fn test_json_output_is_tagged() {
    let puzzle = block_on(generate_puzzle(
        &config(GameType::Sudoku),
        &database(),
        PuzzleSeed::from_phrase("json"),
    ))
    .unwrap();
    let json = serde_json::to_value(&puzzle).unwrap();
    assert_eq!(json["type"], "sudoku");
    assert_eq!(json["seed"], puzzle.seed().to_string());
    assert_eq!(json["grid"].as_array().unwrap().len(), 9);
}

#[test]
fn test_same_seed_same_puzzle() {
    let config = config(GameType::Crossword);
    let seed = PuzzleSeed::from_phrase("again");
    let a = block_on(generate_puzzle(&config, &database(), seed));
    let b = block_on(generate_puzzle(&config, &database(), seed));
    assert_eq!(a, b);
}
