//! Per-sentence pattern matching
//!
//! Scans a normalized sentence against a catalog, yielding match spans and
//! applying the pronoun-exclusion check on the words adjacent to each span.

use crate::nlp::exclusions::ExclusionFilter;
use crate::pattern::catalog::{CustomPattern, PatternCatalog, PatternKind};

/// A raw pattern match inside a normalized sentence.
///
/// Offsets are byte offsets into the sentence. For [`PatternKind::Compact`]
/// patterns the usable onset/offset have already been shrunk by one
/// character on each side to drop the boundary anchor characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Identifier of the matching pattern.
    pub pattern_id: &'static str,
    /// Start of the usable span.
    pub onset: usize,
    /// End of the usable span.
    pub offset: usize,
    /// The raw matched text (before the compact trim).
    pub matched_text: String,
}

/// Scans sentences against a pattern catalog.
#[derive(Debug, Clone)]
pub struct PatternMatcher<'c> {
    catalog: &'c PatternCatalog,
    exclusions: &'c ExclusionFilter,
}

impl<'c> PatternMatcher<'c> {
    /// Create a matcher over `catalog` with the given exclusion filter.
    pub fn new(catalog: &'c PatternCatalog, exclusions: &'c ExclusionFilter) -> Self {
        Self {
            catalog,
            exclusions,
        }
    }

    /// Find all accepted matches of every catalog pattern in `sentence`,
    /// in catalog order, left to right per pattern.
    ///
    /// Matches whose adjacent word (up to the nearest space on either side
    /// of the span) is in the exclusion set are discarded: they are presumed
    /// to reference an anaphor rather than a real noun phrase.
    pub fn find_matches(&self, sentence: &str) -> Vec<(&'c CustomPattern, PatternMatch)> {
        let mut matches = Vec::new();
        for pattern in self.catalog.all_patterns() {
            for found in pattern.regex.find_iter(sentence) {
                let mut onset = found.start();
                let mut offset = found.end();

                // Compact patterns still contain the one-character boundary
                // anchors on each side; drop them from the usable span.
                if pattern.kind == PatternKind::Compact {
                    onset += sentence[onset..]
                        .chars()
                        .next()
                        .map_or(0, |c| c.len_utf8());
                    offset -= sentence[..offset]
                        .chars()
                        .next_back()
                        .map_or(0, |c| c.len_utf8());
                }

                if self.adjacent_word_excluded(sentence, onset, offset) {
                    continue;
                }

                matches.push((
                    pattern,
                    PatternMatch {
                        pattern_id: pattern.id,
                        onset,
                        offset,
                        matched_text: found.as_str().to_string(),
                    },
                ));
            }
        }
        matches
    }

    fn adjacent_word_excluded(&self, sentence: &str, onset: usize, offset: usize) -> bool {
        let front = &sentence[..onset];
        let word_front = match front.rfind(' ') {
            Some(pos) => &front[pos + 1..],
            None => front,
        };
        let back = &sentence[offset..];
        let word_back = match back.find(' ') {
            Some(pos) => &back[..pos],
            None => back,
        };
        self.exclusions.is_excluded(word_front) || self.exclusions.is_excluded(word_back)
    }
}
