//! Noun-phrase chunking
//!
//! Two mirrored traversals over a tagged-token window, producing an ordered
//! list of sibling [`NounPhrase`]s split at coordinations and commas. Both
//! are restart-on-boundary procedures: whenever a phrase closes, the scan
//! restarts on the remainder of the window. The restarts are driven by an
//! explicit worklist loop rather than recursion, which bounds stack depth
//! on windows with no phrase terminator.
//!
//! The forward direction reads the window left to right. The reverse
//! direction expects a window that the caller has already reversed
//! end-to-end, with the roles of the pre- and post-modifier searches
//! swapped relative to the scan direction.

use crate::phrase::noun_phrase::NounPhrase;
use crate::types::{ChunkerConfig, TaggedToken};

/// Outcome of the reverse pre-modifier search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreModOutcome {
    /// No coordination boundary found; the current phrase ends the search.
    NoCoordination,
    /// Boundary at the carried scan position; the next phrase search
    /// resumes relative to it.
    Boundary(usize),
    /// A second noun-family token turned up while pre-modifiers were being
    /// collected: the scanner mis-identified a modifier chain as terminal.
    /// The phrase is abandoned and the search restarts one position later.
    FalseCore,
}

/// Bounded forward/reverse noun-phrase chunker.
#[derive(Debug, Clone, Default)]
pub struct NounPhraseChunker {
    config: ChunkerConfig,
}

impl NounPhraseChunker {
    /// Create a chunker with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chunker with a custom config.
    pub fn with_config(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// The phrase-length bound in effect.
    pub fn max_phrase_len(&self) -> usize {
        self.config.max_phrase_len
    }

    /// Discover noun phrases scanning left to right.
    ///
    /// A token that is not a determiner, noun, adjective, past participle,
    /// or coordination word terminates the scan once at least one phrase
    /// has been found; before that, the first phrase may begin anywhere in
    /// the window.
    pub fn chunk_forward(&self, tokens: &[TaggedToken]) -> Vec<NounPhrase> {
        let max = self.config.max_phrase_len;
        let mut phrases = Vec::new();
        let mut offset = 0;

        while offset < tokens.len() {
            let mut restart = None;
            let mut i = offset;
            while i < tokens.len() {
                let token = &tokens[i];
                if !token.is_determiner()
                    && !token.is_noun()
                    && !token.is_adjective()
                    && !token.is_past_participle()
                    && !token.is_coordination()
                    && !phrases.is_empty()
                {
                    return phrases;
                }

                if token.is_noun() {
                    let mut phrase = NounPhrase::new(token.clone(), max);
                    self.collect_pre_modifiers(i, tokens, &mut phrase);
                    if token.ends_with_comma() {
                        // Comma on the core is a hard coordination boundary.
                        phrase.clean();
                        phrases.push(phrase);
                        restart = Some(i + 1);
                        break;
                    }
                    match self.find_post_modifiers(i, tokens, &mut phrase) {
                        Some(split_at) => {
                            phrase.clean();
                            phrases.push(phrase);
                            restart = Some(split_at + 1);
                            break;
                        }
                        None => {
                            phrase.clean();
                            phrases.push(phrase);
                            return phrases;
                        }
                    }
                }
                i += 1;
            }
            match restart {
                Some(next) => offset = next,
                None => break,
            }
        }
        phrases
    }

    /// Discover noun phrases over a pre-reversed window.
    ///
    /// Mirrors [`chunk_forward`](Self::chunk_forward) with the modifier
    /// searches swapped, plus the false-core restart: a second noun seen
    /// while pre-modifiers are being collected aborts the current phrase
    /// and re-seeks one position later.
    pub fn chunk_reverse(&self, tokens: &[TaggedToken]) -> Vec<NounPhrase> {
        let max = self.config.max_phrase_len;
        let mut phrases = Vec::new();
        let mut offset = 0;

        while offset < tokens.len() {
            let mut restart = None;
            let mut i = offset;
            while i < tokens.len() {
                let token = &tokens[i];
                if !token.is_noun()
                    && !token.is_gerund()
                    && !token.is_preposition()
                    && !token.is_cardinal()
                    && !token.is_determiner()
                    && !phrases.is_empty()
                {
                    return phrases;
                }

                if token.is_noun() {
                    let mut phrase = NounPhrase::new(token.clone(), max);
                    if token.ends_with_comma() {
                        match self.seek_pre_modifiers_reverse(i, tokens, &mut phrase) {
                            PreModOutcome::FalseCore => {
                                restart = Some(i + 1);
                                break;
                            }
                            PreModOutcome::Boundary(position) => {
                                phrase.clean();
                                phrases.push(phrase);
                                restart = Some(position + 1);
                                break;
                            }
                            PreModOutcome::NoCoordination => {
                                phrase.clean();
                                phrases.push(phrase);
                                return phrases;
                            }
                        }
                    } else {
                        match self.seek_pre_modifiers_reverse(i, tokens, &mut phrase) {
                            PreModOutcome::FalseCore => {
                                restart = Some(i + 1);
                                break;
                            }
                            PreModOutcome::Boundary(position) => {
                                self.collect_post_modifiers_reverse(i, tokens, &mut phrase);
                                phrase.clean();
                                phrases.push(phrase);
                                restart = Some(position);
                                break;
                            }
                            PreModOutcome::NoCoordination => {
                                self.collect_post_modifiers_reverse(i, tokens, &mut phrase);
                                phrase.clean();
                                phrases.push(phrase);
                                return phrases;
                            }
                        }
                    }
                }
                i += 1;
            }
            match restart {
                Some(next) => offset = next,
                None => break,
            }
        }
        phrases
    }

    /// Bounded backward search for contiguous adjective/past-participle
    /// pre-modifiers (forward direction). Stops at the first rejection.
    fn collect_pre_modifiers(
        &self,
        nn_offset: usize,
        tokens: &[TaggedToken],
        phrase: &mut NounPhrase,
    ) {
        let bound = self.config.max_phrase_len.saturating_sub(1);
        for i in (0..nn_offset).rev().take(bound) {
            let token = &tokens[i];
            if (token.is_adjective() || token.is_past_participle()) && !token.ends_with_comma() {
                phrase.add_pre_modifier(token.clone());
            } else {
                return;
            }
        }
    }

    /// Bounded forward search for post-modifiers and coordination points
    /// (forward direction).
    ///
    /// Returns the index of the coordination/comma token that closed the
    /// phrase, or `None` when the phrase closed without a coordination (no
    /// further phrases are expected). If the bound itself lands exactly on
    /// a coordination word, that is the split point too.
    fn find_post_modifiers(
        &self,
        nn_offset: usize,
        tokens: &[TaggedToken],
        phrase: &mut NounPhrase,
    ) -> Option<usize> {
        let max = self.config.max_phrase_len;
        let mut i = nn_offset + 1;
        while i < nn_offset + max && i < tokens.len() {
            let token = &tokens[i];
            let accepted = token.is_adjective()
                || token.is_past_participle()
                || token.is_gerund()
                || token.is_noun()
                || token.is_preposition()
                || token.is_cardinal()
                || token.is_determiner();
            if accepted {
                phrase.add_post_modifier(token.clone());
            }
            if token.is_coordination() {
                return Some(i);
            }
            if !accepted {
                return None;
            }
            if token.ends_with_comma() {
                return Some(i);
            }
            i += 1;
        }
        if tokens.len() > nn_offset + max && tokens[nn_offset + max].is_coordination() {
            return Some(nn_offset + max);
        }
        None
    }

    /// Bounded pre-modifier search for the reverse direction, walking away
    /// from the core over the reversed window.
    ///
    /// Gerund/preposition/cardinal/determiner tokens are skipped without
    /// closing the search: they may belong to the post-modifier chain of an
    /// earlier phrase. A second noun after that point means the core was
    /// mis-identified.
    fn seek_pre_modifiers_reverse(
        &self,
        nn_offset: usize,
        tokens: &[TaggedToken],
        phrase: &mut NounPhrase,
    ) -> PreModOutcome {
        let max = self.config.max_phrase_len;
        let mut premod_finished = false;
        let mut i = nn_offset + 1;
        while i < nn_offset + max && i < tokens.len() {
            let token = &tokens[i];
            if (token.is_adjective() || token.is_past_participle())
                && !token.ends_with_comma()
                && !premod_finished
            {
                phrase.add_pre_modifier(token.clone());
            } else if token.is_gerund()
                || token.is_preposition()
                || token.is_cardinal()
                || token.is_determiner()
            {
                premod_finished = true;
            } else if token.is_noun() && !token.ends_with_comma() {
                return PreModOutcome::FalseCore;
            } else if token.ends_with_comma() {
                return PreModOutcome::Boundary(i);
            } else if token.is_coordination() {
                return PreModOutcome::Boundary(i + 1);
            } else {
                return PreModOutcome::NoCoordination;
            }
            i += 1;
        }
        if tokens.len() > nn_offset + max && tokens[nn_offset + max].is_coordination() {
            return PreModOutcome::Boundary(nn_offset + max + 1);
        }
        PreModOutcome::NoCoordination
    }

    /// Bounded post-modifier collection for the reverse direction, walking
    /// back toward the window start. Coordination or a trailing comma ends
    /// the collection.
    fn collect_post_modifiers_reverse(
        &self,
        nn_offset: usize,
        tokens: &[TaggedToken],
        phrase: &mut NounPhrase,
    ) {
        let bound = self.config.max_phrase_len.saturating_sub(1);
        for i in (0..nn_offset).rev().take(bound) {
            let token = &tokens[i];
            if token.is_coordination() {
                return;
            }
            if token.is_adjective()
                || token.is_past_participle()
                || token.is_gerund()
                || token.is_noun()
                || token.is_preposition()
                || token.is_cardinal()
                || token.is_determiner()
            {
                phrase.add_post_modifier(token.clone());
            }
            if token.ends_with_comma() {
                return;
            }
        }
    }
}
