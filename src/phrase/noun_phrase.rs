//! Bounded noun phrase
//!
//! A phrase is a core noun plus ordered pre- and post-modifier lists, kept
//! within a fixed total length. Insertions past the bound evict the
//! farthest modifier, never the core.

use std::fmt;

use crate::types::TaggedToken;

/// Punctuation stripped one character at a time from modifier tails.
const TAIL_PUNCTUATION: &[char] = &['.', ',', ';', ':', '?', '!'];

/// Punctuation and bracket characters stripped in runs from the core.
const CORE_PUNCTUATION: &[char] =
    &['.', ',', ';', ':', '?', '!', '(', ')', '[', ']', '{', '}'];

/// A chunked noun phrase: core noun, pre-modifiers, post-modifiers.
///
/// Invariant: `pre.len() + 1 + post.len() <= max_length` after every
/// insertion. The phrase is complete once the bound is reached.
#[derive(Debug, Clone)]
pub struct NounPhrase {
    core: TaggedToken,
    pre_modifiers: Vec<TaggedToken>,
    post_modifiers: Vec<TaggedToken>,
    max_length: usize,
    complete: bool,
}

impl NounPhrase {
    /// Create a phrase around a core token. The chunker only calls this for
    /// noun-family tokens.
    pub fn new(core: TaggedToken, max_length: usize) -> Self {
        let complete = max_length == 1;
        Self {
            core,
            pre_modifiers: Vec::new(),
            post_modifiers: Vec::new(),
            max_length,
            complete,
        }
    }

    /// Insert a pre-modifier at the outermost position. If the pre list
    /// alone reaches the bound, the innermost element is dropped.
    pub fn add_pre_modifier(&mut self, token: TaggedToken) {
        self.pre_modifiers.insert(0, token);
        if self.pre_modifiers.len() == self.max_length {
            self.pre_modifiers.pop();
        }
    }

    /// Append a post-modifier. When the total bound is exceeded, the
    /// outermost pre-modifier is evicted if there is one; otherwise the
    /// phrase is complete.
    pub fn add_post_modifier(&mut self, token: TaggedToken) {
        self.post_modifiers.push(token);
        if self.post_modifiers.len() + 1 + self.pre_modifiers.len() > self.max_length {
            if !self.pre_modifiers.is_empty() {
                self.pre_modifiers.remove(0);
            } else {
                self.complete = true;
            }
        }
    }

    /// The core noun token.
    pub fn core(&self) -> &TaggedToken {
        &self.core
    }

    /// Pre-modifiers, in stored order.
    pub fn pre_modifiers(&self) -> &[TaggedToken] {
        &self.pre_modifiers
    }

    /// Post-modifiers, in stored order.
    pub fn post_modifiers(&self) -> &[TaggedToken] {
        &self.post_modifiers
    }

    /// The phrase-length bound.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Whether the bound has been reached.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Total token count (pre + core + post).
    pub fn len(&self) -> usize {
        self.pre_modifiers.len() + 1 + self.post_modifiers.len()
    }

    /// A phrase always holds at least its core.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Best-effort cleanup of a closed phrase.
    ///
    /// Strips one trailing sentence-terminal punctuation character from the
    /// last post-modifier, then trims trailing post-modifiers that are
    /// neither noun-family nor cardinal, trims leading pre-modifiers that
    /// are neither adjective-family nor past-participle, and finally strips
    /// leading/trailing punctuation runs from the core's surface text. An
    /// un-cleanable phrase is returned as-is rather than failing the
    /// extraction.
    pub fn clean(&mut self) {
        if let Some(last) = self.post_modifiers.last_mut() {
            last.text = strip_one_tail_char(last.text.trim());
        }
        while let Some(last) = self.post_modifiers.last() {
            if last.is_noun() || last.is_cardinal() {
                break;
            }
            self.post_modifiers.pop();
        }

        if let Some(last) = self.pre_modifiers.last_mut() {
            last.text = strip_one_tail_char(last.text.trim());
        }
        while let Some(first) = self.pre_modifiers.first() {
            if first.is_adjective() || first.is_past_participle() {
                break;
            }
            self.pre_modifiers.remove(0);
        }

        let trimmed = self
            .core
            .text
            .trim()
            .trim_end_matches(CORE_PUNCTUATION)
            .trim_start_matches(CORE_PUNCTUATION)
            .to_string();
        self.core.text = trimmed;
    }

    /// The tag sequence of the phrase, space-joined.
    pub fn tags_to_string(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.len());
        parts.extend(self.pre_modifiers.iter().map(|t| t.tag.as_str()));
        parts.push(&self.core.tag);
        parts.extend(self.post_modifiers.iter().map(|t| t.tag.as_str()));
        parts.join(" ")
    }
}

fn strip_one_tail_char(text: &str) -> String {
    let mut out = text.to_string();
    if out.ends_with(TAIL_PUNCTUATION) {
        out.pop();
    }
    out
}

impl fmt::Display for NounPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::with_capacity(self.len());
        parts.extend(self.pre_modifiers.iter().map(|t| t.text.as_str()));
        parts.push(&self.core.text);
        parts.extend(self.post_modifiers.iter().map(|t| t.text.as_str()));
        write!(f, "{}", parts.join(" "))
    }
}
