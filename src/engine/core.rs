//! Triple assembly and the batch pipeline facade.

use std::sync::Arc;

use anyhow::Result;
use rayon::prelude::*;

use crate::engine::config::PipelineConfig;
use crate::errors::ExtractionError;
use crate::extractor::{closest_nominative, Extractor, ObjectExtractor, SubjectExtractor};
use crate::morphology::{self, CaseResolver};
use crate::tree::{DependencyParseTree, TreeParser};
use crate::types::{TreeSpan, TreeTriple};

/// External collaborator seam: the relation (verb phrase) extractor.
/// Relation spans are produced outside this core and fed in here.
pub trait RelationExtractor: Send + Sync {
    fn extract(&self, tree: &DependencyParseTree) -> Result<Vec<TreeSpan>, ExtractionError>;
}

/// Combines one relation with all surviving subject and object
/// candidates into binary extractions.
pub struct TripleExtractor {
    arg1: SubjectExtractor,
    arg2: ObjectExtractor,
}

impl TripleExtractor {
    pub fn new() -> Self {
        Self {
            arg1: SubjectExtractor::new(),
            arg2: ObjectExtractor::new(),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut arg1 = SubjectExtractor::new();
        if config.reduce_subjects {
            let resolver: Arc<CaseResolver> = match &config.lexicon {
                Some(path) => Arc::new(CaseResolver::load(path)),
                None => morphology::default_resolver(),
            };
            arg1.add_mapper(closest_nominative(resolver));
        }
        Self {
            arg1,
            arg2: ObjectExtractor::with_options(config.keep_conjunctions),
        }
    }

    /// All triples for a single relation span: subject candidates and
    /// object candidates crossed with the relation. No further ranking
    /// happens here; every surviving combination is reported.
    pub fn extract_for_relation(
        &self,
        tree: &DependencyParseTree,
        relation: &TreeSpan,
    ) -> Result<Vec<TreeTriple>, ExtractionError> {
        let arg1s = self.arg1.extract(tree, relation)?;
        let arg2s = self.arg2.extract(tree, relation)?;
        Ok(TreeTriple::product_of_args(relation, &arg1s, &arg2s))
    }
}

impl Default for TripleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Batch facade: relation extraction wired to argument extraction over
/// one or many sentences.
pub struct Pipeline<R: RelationExtractor> {
    relations: R,
    triples: TripleExtractor,
}

impl<R: RelationExtractor> Pipeline<R> {
    pub fn new(relations: R) -> Self {
        Self {
            relations,
            triples: TripleExtractor::new(),
        }
    }

    pub fn with_config(relations: R, config: &PipelineConfig) -> Self {
        Self {
            relations,
            triples: TripleExtractor::from_config(config),
        }
    }

    /// Extract every triple from one sentence tree. Zero relations
    /// yield zero triples.
    pub fn extract_tree(
        &self,
        tree: &DependencyParseTree,
    ) -> Result<Vec<TreeTriple>, ExtractionError> {
        let mut out = Vec::new();
        for relation in self.relations.extract(tree)? {
            out.extend(self.triples.extract_for_relation(tree, &relation)?);
        }
        Ok(out)
    }

    /// Sequential batch over parsed sentences. A failing sentence is
    /// logged and skipped; it never aborts the batch.
    pub fn extract_trees(&self, trees: &[DependencyParseTree]) -> Vec<TreeTriple> {
        trees
            .iter()
            .flat_map(|tree| match self.extract_tree(tree) {
                Ok(triples) => triples,
                Err(e) => {
                    log::warn!("skipping sentence: {}", e);
                    Vec::new()
                }
            })
            .collect()
    }

    /// Parallel batch over parsed sentences. Each worker owns its own
    /// tree and candidate state; only the read-only lexicon is shared.
    pub fn extract_trees_parallel(&self, trees: &[DependencyParseTree]) -> Vec<TreeTriple> {
        trees
            .par_iter()
            .flat_map(|tree| match self.extract_tree(tree) {
                Ok(triples) => triples,
                Err(e) => {
                    log::warn!("skipping sentence: {}", e);
                    Vec::new()
                }
            })
            .collect()
    }

    /// Parse bracketed sentence encodings and extract from each.
    /// Malformed sentences are logged and skipped.
    pub fn extract_encoded(&self, sentences: &[String]) -> Vec<TreeTriple> {
        let mut out = Vec::new();
        for sentence in sentences {
            let tree = match TreeParser::parse(sentence) {
                Ok(tree) => tree,
                Err(e) => {
                    log::warn!("skipping malformed sentence: {}", e);
                    continue;
                }
            };
            match self.extract_tree(&tree) {
                Ok(triples) => out.extend(triples),
                Err(e) => log::warn!("skipping sentence: {}", e),
            }
        }
        out
    }
}

/// Serialize triples for downstream consumers.
pub fn triples_to_json(triples: &[TreeTriple]) -> Result<String> {
    Ok(serde_json::to_string_pretty(triples)?)
}
