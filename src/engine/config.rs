//! Pipeline configuration types

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Configuration of the extraction pipeline, loaded from YAML.
#[derive(Debug, Default, Deserialize)]
pub struct PipelineConfig {
    /// Path to the morphological case lexicon. Absent or unloadable:
    /// case filtering is disabled.
    pub lexicon: Option<PathBuf>,
    /// Keep coordination subtrees inside object spans instead of
    /// splitting one span per conjunct.
    #[serde(default)]
    pub keep_conjunctions: bool,
    /// Reduce subject candidates to the closest nominative one.
    #[serde(default)]
    pub reduce_subjects: bool,
}

impl PipelineConfig {
    /// Load a configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml_str = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("failed to read config file {}: {}", path.display(), e))?;
        serde_yaml::from_str(&yaml_str)
            .map_err(|e| anyhow!("invalid YAML config in {}: {}", path.display(), e))
    }
}
