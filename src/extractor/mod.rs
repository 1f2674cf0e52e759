//! Candidate extraction framework and the concrete argument extractors.
//!
//! This module is organized into the following submodules:
//! - `mapper`: mapper chain (filter / sort / select-best) and scorers
//! - `argument1`: subject extractor
//! - `argument2`: object/complement extractor family
//!
//! The contract mirrors a two-phase pipeline: `extract_candidates`
//! generates zero or more candidates, then `extract` applies every
//! registered mapper in order. An empty candidate list at any stage is
//! a valid empty result, not an error.

pub mod argument1;
pub mod argument2;
pub mod mapper;

#[cfg(test)]
mod tests;

pub use argument1::SubjectExtractor;
pub use argument2::{Argument2, ArgumentKind, ObjectExtractor, Role};
pub use mapper::{closest_nominative, contains_noun_filter, Mapper, Score, MIN_SCORE};

use std::collections::HashSet;

use crate::errors::ExtractionError;
use crate::tree::labels::{
    CLAUSE_LABELS, LABEL_APPOSITION, LABEL_CONJUNCT, LABEL_COORDINATION, LABEL_PP, MAX_PP_SIZE,
    POS_PRONOMINAL_ADVERB,
};
use crate::tree::{DependencyParseTree, NodeId};

/// Generic candidate extractor: generate candidates, then run them
/// through the mapper chain.
pub trait Extractor {
    type Input;
    type Output;

    /// Produce the raw candidate list for the given input.
    fn extract_candidates(
        &self,
        tree: &DependencyParseTree,
        input: &Self::Input,
    ) -> Result<Vec<Self::Output>, ExtractionError>;

    /// The mapper chain applied after candidate generation, in order.
    fn mappers(&self) -> &[Mapper<Self::Input, Self::Output>];

    /// Generate candidates and apply every mapper in order.
    fn extract(
        &self,
        tree: &DependencyParseTree,
        input: &Self::Input,
    ) -> Result<Vec<Self::Output>, ExtractionError> {
        let mut candidates = self.extract_candidates(tree, input)?;
        for mapper in self.mappers() {
            if candidates.is_empty() {
                return Ok(candidates);
            }
            candidates = mapper.apply(tree, input, candidates);
        }
        Ok(candidates)
    }
}

/// Build the id set of an argument span rooted at `root`.
///
/// Starts from the full subtree and removes, at every depth:
/// - coordination-conjunct subtrees (when `remove_kon` is set),
/// - prepositional phrases headed by a pronominal adverb or larger
///   than [`MAX_PP_SIZE`] nodes (when `prune_pp` is set),
/// - appositive subtrees preceded by a comma,
/// - relative-, object- and adverbial-clause subtrees.
pub(crate) fn pruned_subtree_ids(
    tree: &DependencyParseTree,
    root: NodeId,
    remove_kon: bool,
    prune_pp: bool,
) -> Vec<usize> {
    let all = tree.subtree(root);
    let mut removed: HashSet<usize> = HashSet::new();

    for &n in &all {
        if n == root || removed.contains(&n) {
            continue;
        }
        let label = tree.label_to_parent(n);
        if remove_kon && (label == LABEL_COORDINATION || label == LABEL_CONJUNCT) {
            removed.extend(tree.subtree(n));
            continue;
        }
        if prune_pp && label == LABEL_PP {
            let pp_subtree = tree.subtree(n);
            if tree.pos(n) == POS_PRONOMINAL_ADVERB || pp_subtree.len() > MAX_PP_SIZE {
                removed.extend(pp_subtree);
                continue;
            }
        }
        if label == LABEL_APPOSITION && tree.comma_between(root, n) {
            removed.extend(tree.subtree(n));
            continue;
        }
        if CLAUSE_LABELS.contains(&label) {
            removed.extend(tree.subtree(n));
        }
    }

    all.into_iter().filter(|n| !removed.contains(n)).collect()
}
