//! Token windowing
//!
//! Converts a match's character span into the "before" and "after" tagged
//! token windows fed to the chunker, according to the pattern's structural
//! kind. Token-to-character alignment accumulates token lengths plus one
//! separating space per token, which is exact because the matcher runs on
//! the same space-joined normalized sentence the tokens came from.

use crate::pattern::catalog::{CustomPattern, PatternKind};
use crate::types::TaggedToken;

/// Tokens whose accumulated character end position falls inside
/// `[onset, offset]`.
pub fn token_subset(tokens: &[TaggedToken], onset: usize, offset: usize) -> Vec<TaggedToken> {
    let mut subset = Vec::new();
    let mut counter = 0;
    for token in tokens {
        counter += token.text.len();
        if counter >= onset && counter <= offset {
            subset.push(token.clone());
        }
        counter += 1;
    }
    subset
}

/// The token window preceding the pattern anchor.
pub fn window_before(
    pattern: &CustomPattern,
    sentence: &str,
    onset: usize,
    tokens: &[TaggedToken],
) -> Vec<TaggedToken> {
    match pattern.kind {
        PatternKind::Compact => token_subset(tokens, 0, onset + 1),
        // Starts after the first keyword and ends before the second.
        PatternKind::SplitNoPrefix => {
            let Some(first) = pattern.first_keyword else {
                return Vec::new();
            };
            let Some(second) = pattern.second_keyword else {
                return Vec::new();
            };
            match find_keyword_lowercase(sentence, second, onset) {
                Some(end) => token_subset(tokens, onset + first.len() + 1, end),
                None => Vec::new(),
            }
        }
        // Starts at sentence start, ends before the anchor.
        PatternKind::Split | PatternKind::SplitNoSuffix => token_subset(tokens, 0, onset),
    }
}

/// The token window following the pattern anchor.
pub fn window_after(
    pattern: &CustomPattern,
    sentence: &str,
    onset: usize,
    offset: usize,
    tokens: &[TaggedToken],
) -> Vec<TaggedToken> {
    match pattern.kind {
        PatternKind::Compact => token_subset(tokens, offset, sentence.len()),
        // Starts after the second keyword.
        PatternKind::SplitNoPrefix => token_subset(tokens, offset, sentence.len()),
        // Starts at the anchor and ends with the second keyword.
        PatternKind::SplitNoSuffix => {
            let Some(second) = pattern.second_keyword else {
                return Vec::new();
            };
            match sentence.get(onset..).and_then(|tail| tail.find(second)) {
                Some(pos) => token_subset(tokens, onset, onset + pos),
                None => Vec::new(),
            }
        }
        // Starts after the first keyword.
        PatternKind::Split => {
            let Some(first) = pattern.first_keyword else {
                return Vec::new();
            };
            token_subset(tokens, onset + first.len(), sentence.len())
        }
    }
}

/// First occurrence of `keyword` at or after `from`, searched over the
/// lowercased sentence (the keyword anchors are lowercase).
fn find_keyword_lowercase(sentence: &str, keyword: &str, from: usize) -> Option<usize> {
    let lower = sentence.to_lowercase();
    lower.get(from..)?.find(keyword).map(|pos| from + pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::catalog::PatternCatalog;

    fn tokens_for(sentence: &str) -> Vec<TaggedToken> {
        sentence
            .split(' ')
            .map(|w| TaggedToken::new(w, "NN"))
            .collect()
    }

    fn texts(tokens: &[TaggedToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_token_subset_alignment() {
        let tokens = tokens_for("A sparrow is a bird.");
        // "A sparrow" covers characters 0..9.
        assert_eq!(texts(&token_subset(&tokens, 0, 9)), vec!["A", "sparrow"]);
        // Suffix starting at "bird.".
        assert_eq!(texts(&token_subset(&tokens, 15, 20)), vec!["bird."]);
        assert!(token_subset(&tokens, 50, 60).is_empty());
    }

    #[test]
    fn test_compact_windows() {
        let catalog = PatternCatalog::builtin();
        let pattern = &catalog.all_patterns()[0];
        let sentence = "A sparrow is a bird.";
        let tokens = tokens_for(sentence);
        // Usable span of " is a " is 9..15.
        let before = window_before(pattern, sentence, 9, &tokens);
        let after = window_after(pattern, sentence, 9, 15, &tokens);
        assert_eq!(texts(&before), vec!["A", "sparrow"]);
        assert_eq!(texts(&after), vec!["bird."]);
    }

    #[test]
    fn test_split_no_prefix_windows() {
        let catalog = PatternCatalog::with_patterns(&["p10"]).unwrap();
        let pattern = &catalog.all_patterns()[0];
        let sentence = "He saw such birds as sparrows and crows.";
        let tokens = tokens_for(sentence);
        let m = pattern.regex.find(sentence).unwrap();
        // Embedded placeholder between the keywords.
        let before = window_before(pattern, sentence, m.start(), &tokens);
        assert_eq!(texts(&before), vec!["birds"]);
        // After window starts at the match end; the token the suffix anchor
        // landed in is still included.
        let after = window_after(pattern, sentence, m.start(), m.end(), &tokens);
        assert_eq!(texts(&after), vec!["sparrows", "and", "crows."]);
    }

    #[test]
    fn test_missing_second_keyword_yields_empty_window() {
        let catalog = PatternCatalog::with_patterns(&["p10"]).unwrap();
        let pattern = &catalog.all_patterns()[0];
        let sentence = "such birds whatever";
        let tokens = tokens_for(sentence);
        // No "as" occurrence after the onset.
        let before = window_before(pattern, sentence, 0, &tokens);
        assert!(before.is_empty());
    }
}
