//! Obscured word representation
//!
//! An obscured word is the secret word as the guesser sees it: revealed
//! letters in place, every other position replaced by a placeholder.

use std::fmt;

/// Placeholder shown for letters that have not been revealed yet
pub const PLACEHOLDER: char = '.';

/// The secret word with unrevealed positions hidden
///
/// Rendered as a pattern string such as `s.s...ea.`, where each `.` stands
/// for a hidden letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObscuredWord {
    slots: Vec<Option<char>>,
}

impl ObscuredWord {
    /// Build an obscured word from its slots
    #[must_use]
    pub const fn new(slots: Vec<Option<char>>) -> Self {
        Self { slots }
    }

    /// A fully hidden word of the given length
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Parse a pattern string, treating `.` as a hidden letter
    ///
    /// # Examples
    /// ```
    /// use hangman_guessers::core::ObscuredWord;
    ///
    /// let word = ObscuredWord::parse("s.s...ea.");
    /// assert_eq!(word.len(), 9);
    /// assert_eq!(word.first_hidden(), Some(1));
    /// assert_eq!(word.to_string(), "s.s...ea.");
    /// ```
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let slots = pattern
            .chars()
            .map(|c| if c == PLACEHOLDER { None } else { Some(c) })
            .collect();
        Self { slots }
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the word has no letters at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Position of the first hidden letter, if any
    #[must_use]
    pub fn first_hidden(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Letters revealed before the first hidden position
    ///
    /// Empty when the first letter is still hidden. When nothing is hidden the
    /// whole word is returned.
    #[must_use]
    pub fn revealed_prefix(&self) -> Vec<char> {
        self.slots.iter().map_while(|slot| *slot).collect()
    }

    /// Whether every position has been revealed
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Whether `word` is consistent with this pattern
    ///
    /// The word must have the same length and carry every revealed letter at
    /// its position. Hidden positions accept any letter.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let mut letters = word.chars();
        for slot in &self.slots {
            match (letters.next(), slot) {
                (None, _) => return false,
                (Some(letter), Some(revealed)) if letter != *revealed => return false,
                _ => {}
            }
        }
        letters.next().is_none()
    }
}

impl fmt::Display for ObscuredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_round_trip() {
        let word = ObscuredWord::parse("ant....a....");
        assert_eq!(word.to_string(), "ant....a....");
        assert_eq!(word.len(), 12);
    }

    #[test]
    fn hidden_word_is_all_placeholders() {
        let word = ObscuredWord::hidden(5);
        assert_eq!(word.to_string(), ".....");
        assert_eq!(word.first_hidden(), Some(0));
        assert!(!word.is_revealed());
    }

    #[test]
    fn first_hidden_finds_gap() {
        assert_eq!(ObscuredWord::parse("antici.atory").first_hidden(), Some(6));
        assert_eq!(ObscuredWord::parse("....sory").first_hidden(), Some(0));
        assert_eq!(ObscuredWord::parse("done").first_hidden(), None);
    }

    #[test]
    fn revealed_prefix_stops_at_gap() {
        assert_eq!(
            ObscuredWord::parse("ant....a....").revealed_prefix(),
            vec!['a', 'n', 't']
        );
        assert!(ObscuredWord::parse("....sory").revealed_prefix().is_empty());
    }

    #[test]
    fn matches_respects_revealed_letters() {
        let pattern = ObscuredWord::parse("....otic");
        assert!(pattern.matches("quixotic"));
        assert!(pattern.matches("neurotic"));
        assert!(!pattern.matches("aberration"));
        assert!(!pattern.matches("exotic"));
    }

    #[test]
    fn matches_requires_same_length() {
        let pattern = ObscuredWord::parse("...");
        assert!(pattern.matches("cat"));
        assert!(!pattern.matches("cats"));
        assert!(!pattern.matches("ca"));
    }
}
