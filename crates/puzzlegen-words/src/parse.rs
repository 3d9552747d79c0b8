use puzzlegen_core::WordEntry;

/// Parses a themed word list.
///
/// Each line holds `word|clue|difficulty`. Blank lines and `#` comments are
/// skipped, as are lines with fewer than three fields or an empty word. A
/// difficulty that does not parse as a number counts as 1.
///
/// ```
/// use puzzlegen_words::parse_word_list;
///
/// let words = parse_word_list("# animals\nOTTER|River swimmer|2\n\nbroken line\n");
/// assert_eq!(words.len(), 1);
/// assert_eq!(words[0].word, "OTTER");
/// assert_eq!(words[0].difficulty, 2);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<WordEntry> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split('|');
            let word = fields.next()?.trim();
            let clue = fields.next()?.trim();
            let difficulty = fields.next()?.trim();
            if word.is_empty() {
                return None;
            }
            Some(WordEntry::new(word, clue, difficulty.parse().unwrap_or(1)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_fields() {
        let words = parse_word_list("  PLANET | Orbits a star |3  \r\n");
        assert_eq!(words, vec![WordEntry::new("PLANET", "Orbits a star", 3)]);
    }

    #[test]
    fn test_parse_skips_comments_and_short_lines() {
        let content = "\
# header
OCEAN|Large body of salt water|1

RIVER|Flowing water
#MOUNTAIN|Commented out|1
DESERT|Dry region|2|extra
";
        let words = parse_word_list(content);
        let names: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(names, ["OCEAN", "DESERT"]);
    }

    #[test]
    fn test_parse_skips_empty_words() {
        let words = parse_word_list("|Nothing to hide|1\n  |blank|2\nCOMET|Icy visitor|2\n");
        assert_eq!(words, vec![WordEntry::new("COMET", "Icy visitor", 2)]);
    }

    #[test]
    fn test_parse_defaults_bad_difficulty_to_one() {
        let words = parse_word_list("ATOM|Smallest unit|hard\nION|Charged atom|");
        assert_eq!(words[0].difficulty, 1);
        assert_eq!(words[1].difficulty, 1);
    }
}
