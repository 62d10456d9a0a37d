//! Validation engine for extractor specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against an
//! [`ExtractorSpec`](super::spec::ExtractorSpec) and collects every
//! diagnostic into a [`ValidationReport`] — it never short-circuits on the
//! first error, so users see all problems at once.

use serde::Serialize;

use super::errors::{ErrorCode, ExtractorSpecError};
use super::spec::ExtractorSpec;
use crate::pattern::catalog::PatternCatalog;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding — an error or warning attached to an
/// [`ExtractorSpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: ExtractorSpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: ExtractorSpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: ExtractorSpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &ExtractorSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &ExtractorSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects an [`ExtractorSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads (e.g., in a long-lived validation engine).
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"known_patterns"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &ExtractorSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against an [`ExtractorSpec`] and
/// collects all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(KnownPatternsRule));
        engine.add_rule(Box::new(PhraseLenRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &ExtractorSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. selected pattern ids must exist ─────────────────────────────────────

struct KnownPatternsRule;

impl ValidationRule for KnownPatternsRule {
    fn name(&self) -> &str {
        "known_patterns"
    }

    fn validate(&self, spec: &ExtractorSpec) -> Vec<ValidationDiagnostic> {
        let Some(ids) = &spec.patterns else {
            return Vec::new();
        };
        ids.iter()
            .filter(|id| !PatternCatalog::knows(id))
            .map(|id| {
                ValidationDiagnostic::error(
                    ExtractorSpecError::new(
                        ErrorCode::UnknownPattern,
                        "/patterns",
                        format!("unknown pattern id {id:?}"),
                    )
                    .with_hint("ids follow the built-in table, e.g. p8a, p8b, p8c, p5, p10"),
                )
            })
            .collect()
    }
}

// ─── 2. phrase-length bound must be sane ────────────────────────────────────

struct PhraseLenRule;

impl ValidationRule for PhraseLenRule {
    fn name(&self) -> &str {
        "phrase_len"
    }

    fn validate(&self, spec: &ExtractorSpec) -> Vec<ValidationDiagnostic> {
        let Some(len) = spec.runtime.max_phrase_len else {
            return Vec::new();
        };
        if len < 2 {
            vec![ValidationDiagnostic::error(
                ExtractorSpecError::new(
                    ErrorCode::InvalidPhraseLen,
                    "/runtime/max_phrase_len",
                    format!("max_phrase_len must be at least 2, got {len}"),
                )
                .with_hint("a phrase needs room for its core plus one modifier"),
            )]
        } else if len > 8 {
            vec![ValidationDiagnostic::warning(ExtractorSpecError::new(
                ErrorCode::InvalidPhraseLen,
                "/runtime/max_phrase_len",
                format!("max_phrase_len {len} is unusually large; extraction quality degrades past 8"),
            ))]
        } else {
            Vec::new()
        }
    }
}

// ─── 3. unknown fields: warnings, errors in strict mode ─────────────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn check_unknowns(
        path_prefix: &str,
        unknowns: &std::collections::HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        unknowns
            .keys()
            .map(|field| {
                let err = ExtractorSpecError::new(
                    ErrorCode::UnknownField,
                    format!("{path_prefix}/{field}"),
                    format!("unrecognized field {field:?}"),
                );
                if strict {
                    ValidationDiagnostic::error(err)
                } else {
                    ValidationDiagnostic::warning(err)
                }
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &ExtractorSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/runtime",
            &spec.runtime.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build an ExtractorSpec from JSON.
    fn spec(json: &str) -> ExtractorSpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    #[test]
    fn test_minimal_spec_is_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_known_patterns_are_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1, "patterns": ["p8a", "p8c", "p10"] }"#));
        assert!(report.is_valid());
    }

    #[test]
    fn test_unknown_pattern_is_error() {
        let report = engine().validate(&spec(r#"{ "v": 1, "patterns": ["p8a", "p999"] }"#));
        assert!(report.has_errors());
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::UnknownPattern);
        assert_eq!(err.path, "/patterns");
    }

    #[test]
    fn test_phrase_len_too_small_is_error() {
        let report = engine().validate(&spec(r#"{ "v": 1, "runtime": { "max_phrase_len": 1 } }"#));
        assert!(report.has_errors());
    }

    #[test]
    fn test_phrase_len_large_is_warning() {
        let report = engine().validate(&spec(r#"{ "v": 1, "runtime": { "max_phrase_len": 12 } }"#));
        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_unknown_field_is_warning_by_default() {
        let report = engine().validate(&spec(r#"{ "v": 1, "bogus": true }"#));
        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_unknown_field_is_error_in_strict_mode() {
        let report = engine().validate(&spec(r#"{ "v": 1, "strict": true, "bogus": true }"#));
        assert!(report.has_errors());
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::UnknownField);
        assert_eq!(err.path, "/bogus");
    }

    #[test]
    fn test_report_serializes() {
        let report = engine().validate(&spec(r#"{ "v": 1, "patterns": ["p999"] }"#));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["diagnostics"][0]["severity"], "error");
        assert_eq!(json["diagnostics"][0]["code"], "unknown_pattern");
    }
}
