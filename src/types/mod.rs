//! Core data types shared across the extraction pipeline.

use serde::{Deserialize, Serialize};

/// A word paired with its part-of-speech tag.
///
/// Tags follow the Penn-Treebank-style inventory produced by the
/// [`Tagger`](crate::nlp::tagger::Tagger) collaborator (`NN*`, `JJ*`, `VBN`,
/// `VBG`, `IN`, `CD`, `DT`, …). The chunker classifies tokens through the
/// tag-family methods below; anything outside the recognized families falls
/// into the generic "other" bucket and matches none of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Surface form, including any trailing punctuation from tokenization.
    pub text: String,
    /// Part-of-speech tag.
    pub tag: String,
}

impl TaggedToken {
    /// Create a new tagged token.
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }

    /// Noun family: `NN`, `NNS`, `NNP`, `NNPS`.
    pub fn is_noun(&self) -> bool {
        self.tag.starts_with("NN")
    }

    /// Adjective family: `JJ`, `JJR`, `JJS`.
    pub fn is_adjective(&self) -> bool {
        self.tag.starts_with("JJ")
    }

    /// Past participle (`VBN`).
    pub fn is_past_participle(&self) -> bool {
        self.tag == "VBN"
    }

    /// Gerund (`VBG`).
    pub fn is_gerund(&self) -> bool {
        self.tag == "VBG"
    }

    /// Preposition (`IN`).
    pub fn is_preposition(&self) -> bool {
        self.tag == "IN"
    }

    /// Cardinal number (`CD`).
    pub fn is_cardinal(&self) -> bool {
        self.tag == "CD"
    }

    /// Determiner (`DT`).
    pub fn is_determiner(&self) -> bool {
        self.tag == "DT"
    }

    /// Literal coordination word: `and`, `or`, `&` (case-insensitive).
    pub fn is_coordination(&self) -> bool {
        let w = self.text.to_lowercase();
        w == "and" || w == "or" || w == "&"
    }

    /// Whether the surface form ends with a comma. A trailing comma acts as
    /// a hard coordination boundary during chunking.
    pub fn ends_with_comma(&self) -> bool {
        self.text.ends_with(',')
    }
}

/// Quote characters that attach to plural/possessive `s` forms.
const PLURAL_QUOTES: [char; 6] = [
    '\u{201A}', '\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}', '\u{0022}',
];

/// Force tag `JJ` on any token whose surface form carries a quotation mark
/// directly before or after the letter `s`.
///
/// Disambiguation heuristic for quoted plurals: the tagger tends to misread
/// forms like `birds"` as noun cores, which would anchor a phrase on the
/// quote-carrying token. Applied once, right after tagging.
pub fn force_adjective_for_quoted_plurals(tokens: &mut [TaggedToken]) {
    for token in tokens.iter_mut() {
        if has_quote_adjacent_to_s(&token.text) {
            token.tag = "JJ".to_string();
        }
    }
}

fn has_quote_adjacent_to_s(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars.windows(2).any(|pair| {
        (pair[0] == 's' && PLURAL_QUOTES.contains(&pair[1]))
            || (PLURAL_QUOTES.contains(&pair[0]) && pair[1] == 's')
    })
}

/// Configuration for noun-phrase chunking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Maximum number of tokens in a phrase (pre-modifiers + core +
    /// post-modifiers). Insertions beyond the bound evict the farthest
    /// modifier, never the core.
    pub max_phrase_len: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self { max_phrase_len: 4 }
    }
}

impl ChunkerConfig {
    /// Create a config with the default bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum phrase length.
    pub fn with_max_phrase_len(mut self, max_phrase_len: usize) -> Self {
        self.max_phrase_len = max_phrase_len;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_families() {
        assert!(TaggedToken::new("birds", "NNS").is_noun());
        assert!(TaggedToken::new("Paris", "NNP").is_noun());
        assert!(TaggedToken::new("big", "JJ").is_adjective());
        assert!(TaggedToken::new("bigger", "JJR").is_adjective());
        assert!(TaggedToken::new("broken", "VBN").is_past_participle());
        assert!(TaggedToken::new("running", "VBG").is_gerund());
        assert!(TaggedToken::new("of", "IN").is_preposition());
        assert!(TaggedToken::new("three", "CD").is_cardinal());
        assert!(TaggedToken::new("the", "DT").is_determiner());
        assert!(!TaggedToken::new("quickly", "RB").is_noun());
    }

    #[test]
    fn test_coordination_words() {
        assert!(TaggedToken::new("and", "CC").is_coordination());
        assert!(TaggedToken::new("Or", "CC").is_coordination());
        assert!(TaggedToken::new("&", "CC").is_coordination());
        // A trailing comma defeats the exact-word check.
        assert!(!TaggedToken::new("and,", "CC").is_coordination());
    }

    #[test]
    fn test_quoted_plural_override() {
        let mut tokens = vec![
            TaggedToken::new("birds\u{201D}", "NNS"),
            TaggedToken::new("\u{201C}park", "NN"),
            TaggedToken::new("plain", "JJ"),
        ];
        force_adjective_for_quoted_plurals(&mut tokens);
        assert_eq!(tokens[0].tag, "JJ");
        // Quote not adjacent to `s` is left alone.
        assert_eq!(tokens[1].tag, "NN");
        assert_eq!(tokens[2].tag, "JJ");
    }

    #[test]
    fn test_chunker_config_default() {
        let cfg = ChunkerConfig::default();
        assert_eq!(cfg.max_phrase_len, 4);
        let cfg = ChunkerConfig::new().with_max_phrase_len(6);
        assert_eq!(cfg.max_phrase_len, 6);
    }
}
