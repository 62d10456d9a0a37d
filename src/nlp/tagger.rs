//! POS tagger seam
//!
//! The extraction engine consumes part-of-speech tagging as a pure function
//! behind the [`Tagger`] trait: token sequence in, tagged token sequence of
//! the same length out. Callers with a real model implement the trait; the
//! built-in [`HeuristicTagger`] is a deterministic zero-config default good
//! enough for tests and for corpora where no model is available.

use thiserror::Error;

use crate::types::TaggedToken;

/// Failure reported by a tagger collaborator.
///
/// The engine treats this as "no extraction for this match" and continues
/// with the next match; it never aborts a whole document.
#[derive(Debug, Clone, Error)]
#[error("tagging failed: {0}")]
pub struct TaggingError(pub String);

/// A part-of-speech tagger.
///
/// The output must have the same length as the input, order-preserving,
/// using a Penn-Treebank-compatible inventory (`NN`, `NNS`, `NNP`, `JJ`,
/// `VBN`, `VBG`, `IN`, `CD`, `DT`, and anything else for the "other"
/// bucket). Thread-safety is the implementor's responsibility; a single
/// tagger shared across parallel extraction calls must serialize access
/// internally or be pooled per worker.
pub trait Tagger {
    /// Tag a tokenized sentence.
    fn tag(&self, words: &[&str]) -> Result<Vec<TaggedToken>, TaggingError>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, words: &[&str]) -> Result<Vec<TaggedToken>, TaggingError> {
        (**self).tag(words)
    }
}

/// Deterministic rule-based tagger: closed-class lexicon, digit and suffix
/// rules, capitalization for proper nouns, noun fallback.
///
/// Trailing and leading punctuation is ignored for classification but kept
/// in the token text (the chunker reads trailing commas as coordination
/// boundaries).
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    /// Create a new tagger.
    pub fn new() -> Self {
        Self
    }

    fn classify(stripped: &str, lower: &str, capitalized: bool, first: bool) -> &'static str {
        if stripped.is_empty() {
            return "SYM";
        }
        if stripped.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
            && stripped.chars().any(|c| c.is_ascii_digit())
        {
            return "CD";
        }
        if let Some(tag) = Self::closed_class(lower) {
            return tag;
        }
        if capitalized && !first {
            return "NNP";
        }
        if lower.len() > 4 && lower.ends_with("ing") {
            return "VBG";
        }
        if lower.len() > 3 && lower.ends_with("ed") {
            return "VBN";
        }
        if lower.len() > 3 && lower.ends_with("ly") {
            return "RB";
        }
        if ["ous", "ful", "ive", "less", "ish", "est"]
            .iter()
            .any(|suffix| lower.len() > 4 && lower.ends_with(suffix))
        {
            return "JJ";
        }
        if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 2 {
            return "NNS";
        }
        "NN"
    }

    fn closed_class(lower: &str) -> Option<&'static str> {
        let tag = match lower {
            "a" | "an" | "the" | "this" | "that" | "these" | "those" | "some" | "any" | "no"
            | "every" | "each" => "DT",
            "of" | "in" | "on" | "at" | "by" | "for" | "with" | "from" | "as" | "into" | "over"
            | "under" | "between" | "among" | "during" | "through" | "about" | "against"
            | "within" | "without" | "like" => "IN",
            "to" => "TO",
            "and" | "or" | "but" | "nor" | "&" => "CC",
            "i" | "you" | "he" | "she" | "it" | "we" | "they" | "them" | "him" | "her" | "us"
            | "me" => "PRP",
            "is" | "has" | "does" => "VBZ",
            "are" | "am" | "have" | "do" => "VBP",
            "was" | "were" | "had" | "did" => "VBD",
            "be" => "VB",
            "been" => "VBN",
            "being" => "VBG",
            "will" | "would" | "can" | "could" | "should" | "shall" | "must" | "may" | "might" => {
                "MD"
            }
            "not" => "RB",
            "other" | "small" | "big" | "large" | "little" | "old" | "young" | "new" | "good"
            | "bad" | "great" | "high" | "low" | "long" | "short" | "own" | "same" | "common"
            | "rare" | "wild" | "many" | "few" | "several" | "such" | "most" => "JJ",
            _ => return None,
        };
        Some(tag)
    }
}

impl Tagger for HeuristicTagger {
    fn tag(&self, words: &[&str]) -> Result<Vec<TaggedToken>, TaggingError> {
        let tagged = words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let stripped = word.trim_matches(|c: char| !c.is_alphanumeric());
                let lower = stripped.to_lowercase();
                let capitalized = stripped.chars().next().is_some_and(|c| c.is_uppercase());
                let tag = Self::classify(stripped, &lower, capitalized, i == 0);
                TaggedToken::new(*word, tag)
            })
            .collect();
        Ok(tagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(sentence: &str) -> Vec<String> {
        let words: Vec<&str> = sentence.split(' ').collect();
        HeuristicTagger::new()
            .tag(&words)
            .unwrap()
            .into_iter()
            .map(|t| t.tag)
            .collect()
    }

    #[test]
    fn test_simple_copula_sentence() {
        assert_eq!(
            tags("A sparrow is a bird."),
            vec!["DT", "NN", "VBZ", "DT", "NN"]
        );
    }

    #[test]
    fn test_plural_and_coordination() {
        assert_eq!(
            tags("Cats, dogs and birds are animals."),
            vec!["NNS", "NNS", "CC", "NNS", "VBP", "NNS"]
        );
    }

    #[test]
    fn test_token_text_keeps_punctuation() {
        let words = vec!["Cats,", "dogs"];
        let tagged = HeuristicTagger::new().tag(&words).unwrap();
        assert_eq!(tagged[0].text, "Cats,");
        assert!(tagged[0].ends_with_comma());
    }

    #[test]
    fn test_capitalized_mid_sentence_is_proper_noun() {
        assert_eq!(tags("the Amazon river"), vec!["DT", "NNP", "NN"]);
    }

    #[test]
    fn test_numbers_and_suffixes() {
        assert_eq!(tags("3 wounded wings"), vec!["CD", "VBN", "NNS"]);
        assert_eq!(tags("a running dog"), vec!["DT", "VBG", "NN"]);
        assert_eq!(tags("famous birds"), vec!["JJ", "NNS"]);
    }

    #[test]
    fn test_output_length_matches_input() {
        let words = vec!["", "x", "??", "word"];
        let tagged = HeuristicTagger::new().tag(&words).unwrap();
        assert_eq!(tagged.len(), words.len());
    }
}
