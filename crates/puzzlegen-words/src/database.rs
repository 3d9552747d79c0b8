use std::{
    collections::{HashMap, HashSet},
    fs,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};

use log::{debug, error, warn};
use puzzlegen_core::{LanguageId, PuzzleSeed, ThemeId, WordEntry};
use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;

use crate::{WordRequest, WordSupply, parse::parse_word_list};

/// Difficulty ceiling applied to every request, whatever level it asks for.
const LENIENT_DIFFICULTY: u8 = 3;

type CacheKey = (LanguageId, ThemeId);

/// File-backed word supply with a per-`(language, theme)` cache.
///
/// Lists are read from `<root>/<language>/<theme>.txt`. When a language has no
/// file for a theme, the English list is used instead. Loaded lists stay cached
/// for the lifetime of the database or until [`clear_cache`](Self::clear_cache).
///
/// Construct one per process and pass it by reference to every engine.
#[derive(Debug)]
pub struct WordDatabase {
    root: PathBuf,
    cache: Mutex<HashMap<CacheKey, Arc<[WordEntry]>>>,
    rng: Mutex<Pcg64>,
}

impl WordDatabase {
    /// Creates a database rooted at `root`, shuffling with a random seed.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_seed(root, PuzzleSeed::random())
    }

    /// Creates a database whose shuffles are driven by `seed`.
    #[must_use]
    pub fn with_seed(root: impl Into<PathBuf>, seed: PuzzleSeed) -> Self {
        Self {
            root: root.into(),
            cache: Mutex::new(HashMap::new()),
            rng: Mutex::new(seed.rng()),
        }
    }

    /// Drops every cached list; the next lookup reads the files again.
    pub fn clear_cache(&self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of `(language, theme)` lists currently cached.
    #[must_use]
    pub fn cached_lists(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns the word list for one theme, loading it on first use.
    ///
    /// Files are read synchronously on the calling thread. A list that cannot be
    /// read is logged and returned empty; failures are not cached.
    pub fn theme_words(&self, theme: ThemeId, language: LanguageId) -> Arc<[WordEntry]> {
        let key = (language, theme);
        if let Some(words) = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(words);
        }

        let Some(content) = self.read_list(theme, language) else {
            return Arc::from([]);
        };
        let words: Arc<[WordEntry]> = parse_word_list(&content).into();
        debug!(
            "loaded {} words for theme {theme} ({language})",
            words.len()
        );
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::clone(&words));
        words
    }

    fn list_path(&self, theme: ThemeId, language: LanguageId) -> PathBuf {
        self.root
            .join(language.id())
            .join(format!("{}.txt", theme.id()))
    }

    fn read_list(&self, theme: ThemeId, language: LanguageId) -> Option<String> {
        let path = self.list_path(theme, language);
        match fs::read_to_string(&path) {
            Ok(content) => return Some(content),
            Err(e) if language != LanguageId::En => {
                warn!(
                    "no {language} word list for theme {theme} ({}: {e}), falling back to English",
                    path.display()
                );
            }
            Err(e) => {
                error!("failed to load theme {theme} from {}: {e}", path.display());
                return None;
            }
        }

        let fallback = self.list_path(theme, LanguageId::En);
        fs::read_to_string(&fallback)
            .inspect_err(|e| {
                error!(
                    "failed to load theme {theme} from {}: {e}",
                    fallback.display()
                );
            })
            .ok()
    }
}

impl WordSupply for WordDatabase {
    async fn words_for_generation(&self, request: &WordRequest) -> Vec<WordEntry> {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for &theme in &request.themes {
            let theme_words = self.theme_words(theme, request.language);
            words.extend(
                theme_words
                    .iter()
                    .filter(|entry| (1..=LENIENT_DIFFICULTY).contains(&entry.difficulty))
                    .filter(|entry| seen.insert(entry.dedup_key()))
                    .cloned(),
            );
        }

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        words.shuffle(&mut *rng);
        if words.len() < request.min_words {
            debug!(
                "word pool has {} words, {} requested",
                words.len(),
                request.min_words
            );
        }
        words
    }
}
