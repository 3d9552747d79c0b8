//! Declarative generation settings.

use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// The kind of puzzle to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    /// An intersecting crossword with numbered across/down clues.
    Crossword,
    /// A letter grid hiding words along six directions.
    WordSearch,
    /// A 9×9 number-place puzzle.
    Sudoku,
}

impl GameType {
    /// All game types.
    pub const ALL: [Self; 3] = [Self::Crossword, Self::WordSearch, Self::Sudoku];

    /// Returns the identifier used in configuration files.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Crossword => "crossword",
            Self::WordSearch => "wordsearch",
            Self::Sudoku => "sudoku",
        }
    }

    /// Returns `true` if this game draws words from a word supply.
    #[must_use]
    pub const fn uses_words(self) -> bool {
        matches!(self, Self::Crossword | Self::WordSearch)
    }
}

impl Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GameType {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|game| game.id() == s)
            .ok_or_else(|| ParseIdError::UnknownGameType(s.to_owned()))
    }
}

/// Language of a themed word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    /// English. Also the fallback for missing translations.
    #[default]
    En,
    /// Portuguese.
    Pt,
    /// Spanish.
    Es,
}

impl LanguageId {
    /// All supported languages.
    pub const ALL: [Self; 3] = [Self::En, Self::Pt, Self::Es];

    /// Returns the two-letter identifier, which is also the word-list directory name.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
            Self::Es => "es",
        }
    }

    /// Returns the language's own name for itself.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Pt => "Português",
            Self::Es => "Español",
        }
    }
}

impl Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LanguageId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.id() == s)
            .ok_or_else(|| ParseIdError::UnknownLanguage(s.to_owned()))
    }
}

macro_rules! themes {
    ($($variant:ident => $id:literal, $name:literal, $description:literal;)*) => {
        /// A theme whose word list feeds the word games.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ThemeId {
            $(
                #[doc = $description]
                #[serde(rename = $id)]
                $variant,
            )*
        }

        impl ThemeId {
            /// All themes in catalog order.
            pub const ALL: [Self; 16] = [$(Self::$variant),*];

            /// Returns the kebab-case identifier, which is also the word-list file stem.
            #[must_use]
            pub const fn id(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)*
                }
            }

            /// Returns the display name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Returns a one-line description.
            #[must_use]
            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)*
                }
            }
        }
    };
}

themes! {
    GeneralKnowledge => "general-knowledge", "General Knowledge", "Common knowledge and facts";
    ScienceNature => "science-nature", "Science & Nature", "Scientific concepts and natural world";
    HistoryGeography => "history-geography", "History & Geography", "Historical events and world geography";
    Literature => "literature", "Literature", "Books, authors, and literary terms";
    Mathematics => "mathematics", "Mathematics", "Numbers, calculations, and geometric concepts";
    Sports => "sports", "Sports", "Athletic activities and competitions";
    Animals => "animals", "Animals", "Wildlife and domestic animals";
    Technology => "technology", "Technology", "Computers, internet, and modern devices";
    ArtsCulture => "arts-culture", "Arts & Culture", "Visual arts, music, and cultural topics";
    Health => "health", "Health", "Human body, medicine, and wellness";
    FoodCooking => "food-cooking", "Food & Cooking", "Culinary terms, ingredients, and cooking methods";
    Entertainment => "entertainment", "Entertainment", "Movies, TV shows, music, and celebrities";
    TravelPlaces => "travel-places", "Travel & Places", "Countries, cities, landmarks, and travel terms";
    BusinessWork => "business-work", "Business & Work", "Professional terms, careers, and workplace concepts";
    FamilyHome => "family-home", "Family & Home", "Household items, family relationships, and daily life";
    Transportation => "transportation", "Transportation", "Vehicles, travel methods, and transportation systems";
}

impl Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.id() == s)
            .ok_or_else(|| ParseIdError::UnknownTheme(s.to_owned()))
    }
}

/// Error returned when parsing an unknown identifier.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseIdError {
    /// Not one of the catalog themes.
    #[display("unknown theme: {_0}")]
    UnknownTheme(#[error(not(source))] String),
    /// Not one of the supported languages.
    #[display("unknown language: {_0}")]
    UnknownLanguage(#[error(not(source))] String),
    /// Not one of the game types.
    #[display("unknown game type: {_0}")]
    UnknownGameType(#[error(not(source))] String),
}

/// Complete input of one generation request.
///
/// Word games read every field; Sudoku only reads `difficulty`
/// (the grid is always 9×9).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Side length of the square letter grid.
    pub grid_size: usize,
    /// Number of words the puzzle should contain.
    pub word_count: usize,
    /// Themes to draw words from.
    pub themes: Vec<ThemeId>,
    /// Difficulty from 1 (easiest) to 5.
    pub difficulty: u8,
    /// Word-list language.
    pub language: LanguageId,
    /// Which puzzle to build.
    pub game_type: GameType,
}

impl GenerationConfig {
    /// Accepted grid sizes for word games.
    pub const GRID_SIZES: RangeInclusive<usize> = 10..=21;
    /// Accepted word counts for word games.
    pub const WORD_COUNTS: RangeInclusive<usize> = 8..=30;
    /// Accepted difficulty levels.
    pub const DIFFICULTIES: RangeInclusive<u8> = 1..=5;

    /// Checks every field the configured game reads against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Self::DIFFICULTIES.contains(&self.difficulty) {
            return Err(ConfigError::Difficulty {
                difficulty: self.difficulty,
            });
        }
        if !self.game_type.uses_words() {
            return Ok(());
        }
        if !Self::GRID_SIZES.contains(&self.grid_size) {
            return Err(ConfigError::GridSize {
                size: self.grid_size,
            });
        }
        if !Self::WORD_COUNTS.contains(&self.word_count) {
            return Err(ConfigError::WordCount {
                count: self.word_count,
            });
        }
        if self.themes.is_empty() {
            return Err(ConfigError::NoThemes);
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            word_count: 15,
            themes: vec![ThemeId::GeneralKnowledge],
            difficulty: 2,
            language: LanguageId::En,
            game_type: GameType::Crossword,
        }
    }
}

/// A configuration value outside its accepted range.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// Grid size outside [`GenerationConfig::GRID_SIZES`].
    #[display("grid size {size} is outside 10..=21")]
    GridSize {
        /// The rejected size.
        size: usize,
    },
    /// Word count outside [`GenerationConfig::WORD_COUNTS`].
    #[display("word count {count} is outside 8..=30")]
    WordCount {
        /// The rejected count.
        count: usize,
    },
    /// Difficulty outside [`GenerationConfig::DIFFICULTIES`].
    #[display("difficulty {difficulty} is outside 1..=5")]
    Difficulty {
        /// The rejected difficulty.
        difficulty: u8,
    },
    /// A word game was configured without any theme.
    #[display("word games need at least one theme")]
    NoThemes,
}
