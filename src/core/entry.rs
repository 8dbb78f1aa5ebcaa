//! Word list entry representation
//!
//! A `WordEntry` pairs a word with its free-form definition. The alphagram is
//! derived from the word on demand and never stored.

use std::fmt;

/// Sort the characters of `word` by code point and join them back together.
///
/// Case is preserved, so `"Cat"` and `"CAT"` have different alphagrams.
///
/// # Examples
/// ```
/// use alphagram_quiz::core::alphagram;
///
/// assert_eq!(alphagram("CAT"), "ACT");
/// assert_eq!(alphagram(""), "");
/// ```
#[must_use]
pub fn alphagram(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// A single word and its definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    name: String,
    definition: String,
}

impl WordEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
        }
    }

    /// Parse one line of a word file
    ///
    /// The word ends at the first run of ASCII whitespace; everything after that run
    /// is the definition, kept verbatim. A line without whitespace gives an
    /// empty definition. Returns `None` for blank lines.
    ///
    /// # Examples
    /// ```
    /// use alphagram_quiz::core::WordEntry;
    ///
    /// let entry = WordEntry::parse_line("CAT  A small feline").unwrap();
    /// assert_eq!(entry.name(), "CAT");
    /// assert_eq!(entry.definition(), "A small feline");
    /// assert!(WordEntry::parse_line("   ").is_none());
    /// ```
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_start_matches(|c: char| c.is_ascii_whitespace());
        if line.is_empty() {
            return None;
        }

        let entry = match line.split_once(|c: char| c.is_ascii_whitespace()) {
            Some((name, rest)) => Self::new(
                name,
                rest.trim_start_matches(|c: char| c.is_ascii_whitespace()),
            ),
            None => Self::new(line, ""),
        };
        Some(entry)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The word's letters in ascending code point order
    #[must_use]
    pub fn alphagram(&self) -> String {
        alphagram(&self.name)
    }

    /// Check an upper-cased guess against the word
    #[must_use]
    pub fn matches(&self, normalized_guess: &str) -> bool {
        self.name.to_uppercase() == normalized_guess
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphagram_sorts_letters() {
        assert_eq!(alphagram("CAT"), "ACT");
        assert_eq!(alphagram("QUIZ"), "IQUZ");
        assert_eq!(alphagram("ZYZZYVA"), "AVYYZZZ");
    }

    #[test]
    fn alphagram_empty() {
        assert_eq!(alphagram(""), "");
    }

    #[test]
    fn alphagram_is_case_sensitive() {
        // Upper case sorts before lower case by code point
        assert_eq!(alphagram("Cat"), "Cat");
        assert_eq!(alphagram("caT"), "Tac");
    }

    #[test]
    fn alphagram_ignores_input_order() {
        let word = "RETAINS";
        for permutation in ["NASTIER", "STAINER", "ANESTRI", "SNIRTAE"] {
            assert_eq!(alphagram(permutation), alphagram(word));
        }
    }

    #[test]
    fn alphagram_is_idempotent() {
        for word in ["", "A", "PIZZAZZ", "queue", "Éclair"] {
            let once = alphagram(word);
            assert_eq!(alphagram(&once), once);
        }
    }

    #[test]
    fn alphagram_handles_multibyte_chars() {
        assert_eq!(alphagram("ÉTÉ"), "TÉÉ");
    }

    #[test]
    fn parse_line_splits_at_first_whitespace_run() {
        let entry = WordEntry::parse_line("CAT A small feline").unwrap();
        assert_eq!(entry.name(), "CAT");
        assert_eq!(entry.definition(), "A small feline");
        assert_eq!(entry.alphagram(), "ACT");
    }

    #[test]
    fn parse_line_collapses_separator_only() {
        let entry = WordEntry::parse_line("AA\t \trough, cindery lava  ").unwrap();
        assert_eq!(entry.name(), "AA");
        // Inner and trailing whitespace of the definition is kept verbatim
        assert_eq!(entry.definition(), "rough, cindery lava  ");
    }

    #[test]
    fn parse_line_without_definition() {
        let entry = WordEntry::parse_line("XU").unwrap();
        assert_eq!(entry.name(), "XU");
        assert_eq!(entry.definition(), "");

        let entry = WordEntry::parse_line("XU   ").unwrap();
        assert_eq!(entry.name(), "XU");
        assert_eq!(entry.definition(), "");
    }

    #[test]
    fn parse_line_ignores_leading_whitespace() {
        let entry = WordEntry::parse_line("  JO a sweetheart").unwrap();
        assert_eq!(entry.name(), "JO");
        assert_eq!(entry.definition(), "a sweetheart");
    }

    #[test]
    fn parse_line_splits_only_on_ascii_whitespace() {
        let entry = WordEntry::parse_line("CAF\u{a0}E a coffee house").unwrap();
        assert_eq!(entry.name(), "CAF\u{a0}E");
        assert_eq!(entry.definition(), "a coffee house");

        let entry = WordEntry::parse_line("\u{3000}JO a sweetheart").unwrap();
        assert_eq!(entry.name(), "\u{3000}JO");
    }

    #[test]
    fn parse_line_blank() {
        assert!(WordEntry::parse_line("").is_none());
        assert!(WordEntry::parse_line(" \t ").is_none());
    }

    #[test]
    fn matches_is_case_insensitive_on_stored_name() {
        let entry = WordEntry::new("Qi", "vital force");
        assert!(entry.matches("QI"));
        assert!(!entry.matches("Qi"));
        assert!(!entry.matches("QIS"));
    }

    #[test]
    fn display_uses_stored_casing() {
        let entry = WordEntry::new("Qi", "vital force");
        assert_eq!(entry.to_string(), "Qi: vital force");
    }
}
