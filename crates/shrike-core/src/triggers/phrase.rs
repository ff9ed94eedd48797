//! Phrase normalization and contiguous matching.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Split text into normalized words.
///
/// Case-folds the text, then replaces each ASCII punctuation character
/// with a space and splits on whitespace. `"U.S. Fed"` becomes
/// `["u", "s", "fed"]` - punctuation never joins words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// A multi-word phrase, normalized once at construction.
///
/// Matching locates each phrase word by its *first* occurrence in the
/// candidate text's token list and requires those positions to be
/// strictly consecutive. A phrase whose match would run through a later
/// occurrence of a repeated word is therefore not detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phrase {
    words: Vec<String>,
}

impl Phrase {
    /// Normalize `raw` into a phrase.
    pub fn new(raw: &str) -> Self {
        Self {
            words: tokenize(raw),
        }
    }

    /// Words of the normalized phrase.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether normalization left no words. An empty phrase matches any text.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether the phrase occurs in `text` as a contiguous word run.
    pub fn matches(&self, text: &str) -> bool {
        let tokens = tokenize(text);
        let mut positions = Vec::with_capacity(self.words.len());
        for word in &self.words {
            match tokens.iter().position(|token| token == word) {
                Some(index) => positions.push(index),
                None => return false,
            }
        }
        // First-occurrence positions are not monotonic, so compare with
        // addition rather than subtracting adjacent indices.
        positions.windows(2).all(|pair| pair[1] == pair[0] + 1)
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_case_folds_and_splits() {
        assert_eq!(tokenize("Purple COW"), vec!["purple", "cow"]);
    }

    #[test]
    fn test_tokenize_punctuation_becomes_space() {
        assert_eq!(tokenize("U.S. Fed"), vec!["u", "s", "fed"]);
        assert_eq!(tokenize("well-known"), vec!["well", "known"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  purple \t cow  "), vec!["purple", "cow"]);
    }

    #[test]
    fn test_new_normalizes_words() {
        let phrase = Phrase::new("Well-Known U.S. issues");
        assert_eq!(phrase.words(), ["well", "known", "u", "s", "issues"]);
        assert!(!phrase.is_empty());
    }

    #[test]
    fn test_single_word_match() {
        let phrase = Phrase::new("purple");
        assert!(phrase.matches("The purple cow jumped"));
        assert!(!phrase.matches("The purplecow jumped"));
    }

    #[test]
    fn test_match_requires_whole_words() {
        let phrase = Phrase::new("cow");
        assert!(!phrase.matches("cowboy hats on sale"));
    }

    #[test]
    fn test_contiguous_match() {
        let phrase = Phrase::new("purple cow");
        assert!(phrase.matches("Have you seen the PURPLE COW today?"));
        assert!(!phrase.matches("purple spotted cow"));
    }

    #[test]
    fn test_order_matters() {
        let phrase = Phrase::new("purple cow");
        assert!(!phrase.matches("cow purple"));
    }

    #[test]
    fn test_punctuation_in_text_splits_words() {
        let phrase = Phrase::new("purple cow");
        assert!(phrase.matches("purple.cow"));
        assert!(phrase.matches("purple, cow"));
    }

    #[test]
    fn test_dotted_abbreviation_matches_spaced_phrase() {
        let phrase = Phrase::new("u s fed");
        assert!(phrase.matches("The U.S. Fed raises rates"));
    }

    #[test]
    fn test_first_occurrence_limitation() {
        // "new" first occurs at position 0, "york" at position 3; the
        // run through the second "new" is not considered.
        let phrase = Phrase::new("new york");
        assert!(!phrase.matches("new jersey and new york"));
        assert!(phrase.matches("new york and new jersey"));
    }

    #[test]
    fn test_first_occurrence_indices_can_decrease() {
        // "u" first occurs after "fed" does; positions [3, 1, 2] must
        // not panic and must not match.
        let phrase = Phrase::new("fed u s");
        assert!(!phrase.matches("the u s fed rate"));
    }

    #[test]
    fn test_repeated_phrase_word_never_matches() {
        // Both occurrences of "cow" resolve to the same first position,
        // so the run can never be consecutive.
        let phrase = Phrase::new("cow cow");
        assert!(!phrase.matches("one cow saw another cow"));
        assert!(!phrase.matches("cow cow"));
    }

    #[test]
    fn test_empty_phrase_matches_anything() {
        let phrase = Phrase::new("...");
        assert!(phrase.is_empty());
        assert!(phrase.matches("any text at all"));
        assert!(phrase.matches(""));
    }

    #[test]
    fn test_display_joins_normalized_words() {
        assert_eq!(Phrase::new("U.S. Fed").to_string(), "u s fed");
    }
}
