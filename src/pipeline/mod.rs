//! Extraction pipeline
//!
//! This module provides the JSON extractor spec and its validation engine,
//! the stage-boundary observer hooks, and the runner that orchestrates
//! segmentation, normalization, matching, tagging, chunking, and assembly.

pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;
