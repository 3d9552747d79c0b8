//! Word records supplied to the word games.

use serde::{Deserialize, Serialize};

/// One word with its clue, as read from a themed word list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    /// The answer word as written in the list.
    pub word: String,
    /// Clue shown to the solver.
    pub clue: String,
    /// Difficulty rating, 1 being easiest.
    pub difficulty: u8,
}

impl WordEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(word: impl Into<String>, clue: impl Into<String>, difficulty: u8) -> Self {
        Self {
            word: word.into(),
            clue: clue.into(),
            difficulty,
        }
    }

    /// Returns the upper-cased letters written into a grid.
    ///
    /// ```
    /// use puzzlegen_core::WordEntry;
    ///
    /// let entry = WordEntry::new("Coração", "Heart", 1);
    /// assert_eq!(entry.letters(), vec!['C', 'O', 'R', 'A', 'Ç', 'Ã', 'O']);
    /// ```
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.word.to_uppercase().chars().collect()
    }

    /// Key under which two entries count as the same word.
    #[must_use]
    pub fn dedup_key(&self) -> String {
        self.word.to_lowercase()
    }
}
