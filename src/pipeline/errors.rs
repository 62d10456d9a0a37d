//! Extractor-spec diagnostics
//!
//! A diagnostic carries a stable code, a JSON-pointer-style path into the
//! offending spec field, a human-readable message, and an optional hint.

use std::fmt;

use serde::Serialize;

/// Stable diagnostic codes for spec validation findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A selected pattern id is not in the built-in table.
    UnknownPattern,
    /// The phrase-length bound is out of range.
    InvalidPhraseLen,
    /// A field not recognized by the schema.
    UnknownField,
}

/// A single spec diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractorSpecError {
    /// Diagnostic code.
    pub code: ErrorCode,
    /// JSON-pointer-style path to the offending field.
    pub path: String,
    /// Human-readable message.
    pub message: String,
    /// Optional remediation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ExtractorSpecError {
    /// Create a diagnostic without a hint.
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ExtractorSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_hint() {
        let err = ExtractorSpecError::new(ErrorCode::UnknownPattern, "/patterns", "no such id")
            .with_hint("try p8a");
        assert_eq!(err.to_string(), "/patterns: no such id (try p8a)");
    }

    #[test]
    fn test_code_serializes_snake_case() {
        let json = serde_json::to_value(ErrorCode::InvalidPhraseLen).unwrap();
        assert_eq!(json, "invalid_phrase_len");
    }
}
