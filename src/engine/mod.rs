//! Pipeline module wiring relation spans to argument extraction
//!
//! This module is organized into the following submodules:
//! - `config`: pipeline configuration types (PipelineConfig)
//! - `core`: TripleExtractor, Pipeline facade and the RelationExtractor seam

pub mod config;
pub mod core;

// Re-export main types for convenience
pub use config::PipelineConfig;
pub use core::{triples_to_json, Pipeline, RelationExtractor, TripleExtractor};
