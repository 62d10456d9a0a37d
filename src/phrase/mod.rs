//! Noun-phrase components
//!
//! This module provides the bounded noun phrase, the forward/reverse
//! restart-on-boundary chunker, and the assembled instance/class pair.

pub mod chunker;
pub mod isa;
pub mod noun_phrase;
