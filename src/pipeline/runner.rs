//! Extraction runner — orchestrates the per-document pipeline.
//!
//! [`HearstExtractor`] threads a document through segmentation,
//! normalization, pattern matching, tagging, windowing, chunking, and
//! assembly, notifying an optional [`ExtractionObserver`] at stage
//! boundaries. The engine is purely functional over its inputs per call:
//! the only shared state is the write-once catalog and the exclusion set.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::nlp::exclusions::ExclusionFilter;
use crate::nlp::normalizer::TextNormalizer;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::tagger::{HeuristicTagger, Tagger};
use crate::pattern::catalog::{CustomPattern, PatternCatalog};
use crate::pattern::matcher::{PatternMatch, PatternMatcher};
use crate::pattern::window::{window_after, window_before};
use crate::phrase::chunker::NounPhraseChunker;
use crate::phrase::isa::IsaPattern;
use crate::phrase::noun_phrase::NounPhrase;
use crate::pipeline::observer::{
    ExtractionObserver, NoopObserver, StageClock, StageReport, STAGE_EXTRACT, STAGE_SEGMENT,
};
use crate::pipeline::spec::ExtractorSpec;
use crate::pipeline::validation::ValidationEngine;
use crate::types::{force_adjective_for_quoted_plurals, ChunkerConfig};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("extraction_stage", stage = $name).entered();
    };
}

/// Hearst-pattern relation extractor.
///
/// Generic over the [`Tagger`] collaborator. Construction is cheap; the
/// pattern catalog is compiled once per process and shared.
#[derive(Debug, Clone)]
pub struct HearstExtractor<T> {
    tagger: T,
    catalog: PatternCatalog,
    exclusions: ExclusionFilter,
    segmenter: SentenceSegmenter,
    normalizer: TextNormalizer,
    chunker: NounPhraseChunker,
}

impl HearstExtractor<HeuristicTagger> {
    /// Extractor with the built-in catalog and the deterministic
    /// [`HeuristicTagger`].
    pub fn with_heuristic_tagger() -> Self {
        Self::new(HeuristicTagger::new())
    }
}

impl<T: Tagger> HearstExtractor<T> {
    /// Extractor with the built-in catalog and default chunker config.
    pub fn new(tagger: T) -> Self {
        Self {
            tagger,
            catalog: PatternCatalog::builtin().clone(),
            exclusions: ExclusionFilter::new(),
            segmenter: SentenceSegmenter::new(),
            normalizer: TextNormalizer::new(),
            chunker: NounPhraseChunker::new(),
        }
    }

    /// Replace the pattern catalog.
    pub fn with_catalog(mut self, catalog: PatternCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the chunker config.
    pub fn with_config(mut self, config: ChunkerConfig) -> Self {
        self.chunker = NounPhraseChunker::with_config(config);
        self
    }

    /// Build an extractor from a validated [`ExtractorSpec`].
    ///
    /// Returns [`Error::Spec`] when validation reports errors; warnings are
    /// tolerated.
    pub fn from_spec(spec: &ExtractorSpec, tagger: T) -> Result<Self> {
        let report = ValidationEngine::with_defaults().validate(spec);
        if report.has_errors() {
            let messages: Vec<String> = report.errors().map(|e| e.to_string()).collect();
            return Err(Error::spec(messages.join("; ")));
        }

        let catalog = match &spec.patterns {
            Some(ids) => {
                let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
                PatternCatalog::with_patterns(&ids)?
            }
            None => PatternCatalog::builtin().clone(),
        };
        let config = spec
            .runtime
            .max_phrase_len
            .map(|len| ChunkerConfig::new().with_max_phrase_len(len))
            .unwrap_or_default();
        Ok(Self::new(tagger).with_catalog(catalog).with_config(config))
    }

    /// Extract all is-a relations from a document, in sentence order then
    /// catalog order.
    ///
    /// There is no user-visible failure mode: tagging failures and
    /// no-extraction matches are skipped, and the worst case is an empty
    /// result.
    pub fn extract(&self, text: &str) -> Vec<IsaPattern> {
        self.extract_with_observer(text, &mut NoopObserver)
    }

    /// [`extract`](Self::extract) with stage-boundary callbacks.
    pub fn extract_with_observer(
        &self,
        text: &str,
        observer: &mut impl ExtractionObserver,
    ) -> Vec<IsaPattern> {
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = self.segmenter.segment(text);
        let report = StageReport::new(clock.elapsed()).with_items(sentences.len());
        observer.on_stage_end(STAGE_SEGMENT, &report);

        trace_stage!(STAGE_EXTRACT);
        observer.on_stage_start(STAGE_EXTRACT);
        let clock = StageClock::start();
        let matcher = PatternMatcher::new(&self.catalog, &self.exclusions);
        let mut extracted = Vec::new();
        for raw in &sentences {
            let sentence = self.normalizer.normalize(raw);
            observer.on_sentence(&sentence);
            for (pattern, matched) in matcher.find_matches(&sentence) {
                observer.on_match(pattern.id, &matched);
                if let Some(isa) = self.extract_from_match(&sentence, pattern, &matched) {
                    observer.on_pattern(&isa);
                    extracted.push(isa);
                }
            }
        }
        let report = StageReport::new(clock.elapsed()).with_items(extracted.len());
        observer.on_stage_end(STAGE_EXTRACT, &report);

        extracted
    }

    /// Scan the extracted relations for the first instance phrase sharing a
    /// lowercase token with `gold_instance_label` and return its paired
    /// class phrase.
    pub fn extract_one(&self, text: &str, gold_instance_label: &str) -> Option<NounPhrase> {
        let gold = gold_instance_label.to_lowercase();
        let gold_tokens: FxHashSet<&str> = gold.split(' ').collect();
        for isa in self.extract(text) {
            for instance in isa.instance() {
                let rendered = instance.to_string().to_lowercase();
                if rendered.split(' ').any(|token| gold_tokens.contains(token)) {
                    return isa.clazz().first().cloned();
                }
            }
        }
        None
    }

    /// Tag, window, and chunk one accepted match. `None` is the normal
    /// no-extraction outcome (tagging failure or an empty side).
    fn extract_from_match(
        &self,
        sentence: &str,
        pattern: &CustomPattern,
        matched: &PatternMatch,
    ) -> Option<IsaPattern> {
        let words: Vec<&str> = sentence.split(' ').collect();
        let mut tagged = self.tagger.tag(&words).ok()?;
        if tagged.len() != words.len() {
            return None;
        }
        force_adjective_for_quoted_plurals(&mut tagged);

        let mut before = window_before(pattern, sentence, matched.onset, &tagged);
        let after = window_after(pattern, sentence, matched.onset, matched.offset, &tagged);

        before.reverse();
        let before_phrases = self.chunker.chunk_reverse(&before);
        let after_phrases = self.chunker.chunk_forward(&after);
        if before_phrases.is_empty() || after_phrases.is_empty() {
            return None;
        }
        Some(IsaPattern::assemble(
            pattern.instance_first,
            before_phrases,
            after_phrases,
        ))
    }
}

impl<T: Tagger + Sync> HearstExtractor<T> {
    /// Extract from many documents in parallel, preserving input order.
    ///
    /// Documents are independent; each rayon worker drives its own
    /// extraction. The tagger is shared across workers, hence the `Sync`
    /// bound — a tagger that is not internally synchronized must be wrapped
    /// or pooled by the caller.
    pub fn extract_batch(&self, documents: &[&str]) -> Vec<Vec<IsaPattern>> {
        documents
            .par_iter()
            .map(|document| self.extract(document))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> HearstExtractor<HeuristicTagger> {
        HearstExtractor::with_heuristic_tagger()
    }

    #[test]
    fn test_end_to_end_is_a() {
        let patterns = extractor().extract("A sparrow is a bird.");
        assert_eq!(patterns.len(), 1);
        let isa = &patterns[0];
        assert_eq!(isa.instance()[0].core().text, "sparrow");
        assert_eq!(isa.clazz()[0].core().text, "bird");
        assert_eq!(isa.to_string(), "{_sparrow_} --isa--> {_bird_}");
    }

    #[test]
    fn test_pronoun_subject_yields_nothing() {
        assert!(extractor().extract("It is a bird.").is_empty());
        assert!(extractor().extract("There is a bird.").is_empty());
    }

    #[test]
    fn test_was_a_pattern_extracts() {
        let patterns = extractor().extract("Rex was a dog.");
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].clazz()[0].core().text, "dog");
    }

    #[test]
    fn test_abbreviation_segmentation_end_to_end() {
        let patterns = extractor().extract("Dr. Smith is a doctor. He lives in NY.");
        // One relation from the first sentence; the second sentence's
        // pronoun subject never matches.
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].clazz()[0].core().text, "doctor");
    }

    #[test]
    fn test_coordination_split_on_instance_side() {
        let spec: ExtractorSpec =
            serde_json::from_str(r#"{ "v": 1, "patterns": ["p8c"] }"#).unwrap();
        let extractor = HearstExtractor::from_spec(&spec, HeuristicTagger::new()).unwrap();
        let patterns = extractor.extract("Cats, dogs and birds are a threat.");
        assert_eq!(patterns.len(), 1);
        let instance = patterns[0].instance();
        assert!(instance.len() >= 2, "expected sibling phrases, got {instance:?}");
        let cores: Vec<_> = instance.iter().map(|p| p.core().text.as_str()).collect();
        assert_eq!(cores, vec!["birds", "dogs", "Cats"]);
        assert_eq!(patterns[0].clazz()[0].core().text, "threat");
    }

    #[test]
    fn test_parenthetical_is_ignored() {
        let patterns = extractor().extract("A sparrow (Passer domesticus) is a bird.");
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].instance()[0].core().text, "sparrow");
    }

    #[test]
    fn test_bound_invariant_on_output() {
        let patterns = extractor()
            .extract("The large old migratory sparrow is a small brown bird of the north.");
        for isa in &patterns {
            for phrase in isa.instance().iter().chain(isa.clazz()) {
                assert!(
                    phrase.pre_modifiers().len() + 1 + phrase.post_modifiers().len()
                        <= phrase.max_length()
                );
            }
        }
    }

    #[test]
    fn test_extract_one_finds_class_by_gold_label() {
        let extractor = extractor();
        let class = extractor.extract_one("A sparrow is a bird.", "small sparrow");
        assert_eq!(class.unwrap().core().text, "bird");
        assert!(extractor
            .extract_one("A sparrow is a bird.", "unrelated words")
            .is_none());
    }

    #[test]
    fn test_from_spec_rejects_invalid() {
        let spec: ExtractorSpec =
            serde_json::from_str(r#"{ "v": 1, "patterns": ["p999"] }"#).unwrap();
        assert!(HearstExtractor::from_spec(&spec, HeuristicTagger::new()).is_err());

        let spec: ExtractorSpec =
            serde_json::from_str(r#"{ "v": 1, "runtime": { "max_phrase_len": 1 } }"#).unwrap();
        assert!(HearstExtractor::from_spec(&spec, HeuristicTagger::new()).is_err());
    }

    #[test]
    fn test_extract_batch_matches_sequential() {
        let extractor = extractor();
        let documents = ["A sparrow is a bird.", "Rex was a dog.", "It is a bird."];
        let batch = extractor.extract_batch(&documents);
        assert_eq!(batch.len(), documents.len());
        for (document, patterns) in documents.iter().zip(&batch) {
            let sequential = extractor.extract(document);
            assert_eq!(patterns.len(), sequential.len());
            for (a, b) in patterns.iter().zip(&sequential) {
                assert_eq!(a.to_string(), b.to_string());
            }
        }
    }

    #[test]
    fn test_observer_sees_stages_and_matches() {
        #[derive(Default)]
        struct Recorder {
            stages: Vec<String>,
            matches: usize,
            patterns: usize,
        }
        impl ExtractionObserver for Recorder {
            fn on_stage_start(&mut self, stage: &str) {
                self.stages.push(stage.to_string());
            }
            fn on_match(&mut self, _pattern_id: &str, _matched: &PatternMatch) {
                self.matches += 1;
            }
            fn on_pattern(&mut self, _pattern: &IsaPattern) {
                self.patterns += 1;
            }
        }

        let mut recorder = Recorder::default();
        let patterns =
            extractor().extract_with_observer("A sparrow is a bird.", &mut recorder);
        assert_eq!(recorder.stages, vec![STAGE_SEGMENT, STAGE_EXTRACT]);
        assert_eq!(recorder.matches, 1);
        assert_eq!(recorder.patterns, patterns.len());
    }
}
