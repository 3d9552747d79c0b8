//! Failures reported at the generation boundary.

/// Why a generation request produced no puzzle.
///
/// Every engine returns this instead of panicking; callers decide whether to retry
/// with the same or adjusted settings.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerationError {
    /// The word supply returned fewer usable words than a word game needs.
    #[display(
        "not enough words available: found {found}, need at least {}",
        crate::MIN_CANDIDATE_WORDS
    )]
    InsufficientWords {
        /// Number of candidates the supply returned.
        found: usize,
    },
    /// The crossword engine placed fewer words than the viable minimum.
    #[display("could only place {placed} of at least {required} words, try different settings")]
    PlacementShortfall {
        /// Words actually placed.
        placed: usize,
        /// Minimum the configuration requires.
        required: usize,
    },
    /// The word-search engine placed fewer words than the viable minimum.
    #[display(
        "could only place {placed} words, minimum required: {}",
        crate::MIN_CANDIDATE_WORDS
    )]
    InsufficientPlacement {
        /// Words actually placed.
        placed: usize,
    },
    /// The Sudoku fill search ended without a complete solution.
    #[display("failed to generate a valid sudoku solution")]
    SolutionGenerationFailed,
    /// Any other internal fault.
    #[display("generation failed: {reason}")]
    GenerationFailed {
        /// Human-readable description.
        reason: String,
    },
}

impl GenerationError {
    /// Wraps an unanticipated fault.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::GenerationFailed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GenerationError::InsufficientWords { found: 4 }.to_string(),
            "not enough words available: found 4, need at least 5"
        );
        assert_eq!(
            GenerationError::InsufficientPlacement { placed: 3 }.to_string(),
            "could only place 3 words, minimum required: 5"
        );
        assert_eq!(
            GenerationError::failed("boom").to_string(),
            "generation failed: boom"
        );
    }
}
