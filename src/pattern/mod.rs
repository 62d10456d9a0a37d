//! Surface-pattern components
//!
//! This module provides the fixed Hearst pattern catalog, the per-sentence
//! pattern matcher with pronoun exclusion, and the character-range to
//! token-window alignment used before chunking.

pub mod catalog;
pub mod matcher;
pub mod window;
