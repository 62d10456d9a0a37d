//! Pronoun-exclusion filtering
//!
//! A pattern match whose adjacent word is a pronoun, demonstrative, or
//! wh-word is presumed to reference an anaphor rather than a real noun
//! phrase and is discarded. This module provides the fixed exclusion set
//! and the filter queried by the matcher.

use rustc_hash::FxHashSet;

/// Demonstrative determiners.
const DEMONSTRATIVES: &[&str] = &["that", "this", "these", "those"];

/// Possessive pronouns.
const POSSESSIVES: &[&str] = &["mine", "yours", "his", "hers", "its", "ours", "theirs"];

/// Personal pronouns.
const PERSONALS: &[&str] = &["i", "you", "he", "she", "it", "we", "they"];

/// Interrogatives / wh-words.
const QUESTIONS: &[&str] = &["where", "who", "when", "what", "why", "whose", "which", "how"];

/// A filter for words that disqualify an adjacent pattern match.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    /// Set of excluded words (lowercase).
    words: FxHashSet<String>,
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExclusionFilter {
    /// Create the built-in filter: demonstratives, possessives, personal
    /// pronouns, wh-words, and existential "there".
    pub fn new() -> Self {
        let mut filter = Self::empty();
        filter.add_words(DEMONSTRATIVES);
        filter.add_words(POSSESSIVES);
        filter.add_words(PERSONALS);
        filter.add_words(QUESTIONS);
        filter.add_words(&["there"]);
        filter
    }

    /// Create an empty filter (no exclusions).
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        let mut filter = Self::empty();
        filter.add_words(words);
        filter
    }

    /// Add words to the filter.
    pub fn add_words(&mut self, words: &[&str]) {
        for word in words {
            self.words.insert(word.to_lowercase());
        }
    }

    /// Check whether a word is excluded. The check is case-insensitive.
    pub fn is_excluded(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of words in the filter.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the filter contains no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
