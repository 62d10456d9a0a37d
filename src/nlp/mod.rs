//! Natural Language Processing components
//!
//! This module provides sentence segmentation, text normalization,
//! pronoun-exclusion filtering, and the POS tagger seam.

pub mod exclusions;
pub mod normalizer;
pub mod segmenter;
pub mod tagger;
