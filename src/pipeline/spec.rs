//! Extractor specification types.
//!
//! An [`ExtractorSpec`] describes which catalog patterns to run and the
//! chunker's runtime limits. These types are the input to the
//! [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "patterns": ["p8a", "p8b"],
//!   "runtime": { "max_phrase_len": 4 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level extractor specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Explicit pattern selection by id, in any order; the catalog keeps
    /// table order. Omitted → the built-in enabled set.
    #[serde(default)]
    pub patterns: Option<Vec<String>>,

    /// Runtime limits.
    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Runtime execution limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Maximum phrase length (pre-modifiers + core + post-modifiers).
    /// Omitted → the built-in default of 4.
    #[serde(default)]
    pub max_phrase_len: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_spec() {
        let json = r#"{
            "v": 1,
            "patterns": ["p8a", "p8c"],
            "runtime": { "max_phrase_len": 5 },
            "strict": true
        }"#;
        let spec: ExtractorSpec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec.patterns.as_deref(),
            Some(&["p8a".to_string(), "p8c".to_string()][..])
        );
        assert_eq!(spec.runtime.max_phrase_len, Some(5));
        assert!(spec.strict);
    }

    #[test]
    fn test_minimal_spec_defaults() {
        let spec: ExtractorSpec = serde_json::from_str(r#"{ "v": 1 }"#).unwrap();
        assert!(spec.patterns.is_none());
        assert!(spec.runtime.max_phrase_len.is_none());
        assert!(!spec.strict);
        assert!(spec.unknown_fields.is_empty());
    }

    #[test]
    fn test_unknown_fields_captured() {
        let json = r#"{
            "v": 1,
            "bogus_top_level": 42,
            "runtime": { "bogus_limit": 7 }
        }"#;
        let spec: ExtractorSpec = serde_json::from_str(json).unwrap();
        assert!(spec.unknown_fields.contains_key("bogus_top_level"));
        assert!(spec.runtime.unknown_fields.contains_key("bogus_limit"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = r#"{"v":1,"patterns":["p8a"],"runtime":{"max_phrase_len":4}}"#;
        let spec: ExtractorSpec = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&spec).unwrap();
        assert_eq!(back["patterns"][0], "p8a");
        assert_eq!(back["runtime"]["max_phrase_len"], 4);
    }
}
