//! # rapid-hearst
//!
//! Hearst-pattern extraction of is-a relations from free text.
//!
//! The engine matches fixed lexico-syntactic surface patterns ("X is a Y",
//! "X, such as Y") against normalized sentences and chunks the noun phrases
//! adjacent to each match into structured instance/class pairs.
//!
//! ## Quick start
//!
//! ```rust
//! use rapid_hearst::HearstExtractor;
//!
//! let extractor = HearstExtractor::with_heuristic_tagger();
//! let patterns = extractor.extract("A sparrow is a bird.");
//! assert_eq!(patterns[0].instance()[0].core().text, "sparrow");
//! assert_eq!(patterns[0].clazz()[0].core().text, "bird");
//! ```
//!
//! ## Custom tagger
//!
//! Part-of-speech tagging is consumed through the [`Tagger`] trait. The
//! built-in [`HeuristicTagger`] is a deterministic rule-based default;
//! callers with a real model implement the trait themselves:
//!
//! ```rust,ignore
//! struct MyTagger(/* model handle */);
//!
//! impl rapid_hearst::Tagger for MyTagger {
//!     fn tag(&self, words: &[&str]) -> Result<Vec<TaggedToken>, TaggingError> {
//!         /* call the model */
//!     }
//! }
//! ```
//!
//! ## Spec-driven configuration
//!
//! Pattern selection and runtime limits can come from a JSON spec, checked
//! by a validation engine that reports every problem at once:
//!
//! ```rust
//! use rapid_hearst::{ExtractorSpec, HearstExtractor, HeuristicTagger};
//!
//! let spec: ExtractorSpec = serde_json::from_str(
//!     r#"{ "v": 1, "patterns": ["p8a", "p8b"], "runtime": { "max_phrase_len": 4 } }"#,
//! ).unwrap();
//! let extractor = HearstExtractor::from_spec(&spec, HeuristicTagger::new()).unwrap();
//! assert!(extractor.extract("It is a bird.").is_empty());
//! ```
//!
//! ## Design notes
//!
//! - The pattern catalog is a fixed data table compiled once per process;
//!   matching order is declaration order.
//! - Extraction never fails: tagging errors and no-extraction matches are
//!   skipped, and the worst case is an empty result.
//! - Documents are independent; [`HearstExtractor::extract_batch`] fans
//!   them out over rayon.

pub mod error;
pub mod nlp;
pub mod pattern;
pub mod phrase;
pub mod pipeline;
pub mod types;

pub use error::{Error, Result};
pub use nlp::exclusions::ExclusionFilter;
pub use nlp::normalizer::{expand_contractions, TextNormalizer};
pub use nlp::segmenter::SentenceSegmenter;
pub use nlp::tagger::{HeuristicTagger, Tagger, TaggingError};
pub use pattern::catalog::{CustomPattern, PatternCatalog, PatternKind};
pub use pattern::matcher::{PatternMatch, PatternMatcher};
pub use phrase::chunker::NounPhraseChunker;
pub use phrase::isa::IsaPattern;
pub use phrase::noun_phrase::NounPhrase;
pub use pipeline::errors::{ErrorCode, ExtractorSpecError};
pub use pipeline::observer::{ExtractionObserver, NoopObserver, StageClock, StageReport};
pub use pipeline::runner::HearstExtractor;
pub use pipeline::spec::{ExtractorSpec, RuntimeSpec};
pub use pipeline::validation::{ValidationEngine, ValidationReport};
pub use types::{ChunkerConfig, TaggedToken};
