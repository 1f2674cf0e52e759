//! Object/complement (second argument) extractor family.

use crate::errors::ExtractionError;
use crate::extractor::mapper::contains_noun_filter;
use crate::extractor::{pruned_subtree_ids, Extractor, Mapper};
use crate::tree::labels::{
    LABEL_OBJECT_ACC, LABEL_OBJECT_DAT, LABEL_OBJECT_GEN, LABEL_OBJECT_PREP, LABEL_PREDICATE,
    PREPOSITION_TAGS,
};
use crate::tree::{DependencyParseTree, NodeId};
use crate::types::TreeSpan;

/// Grammatical role an argument plays relative to its relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Subject,
    Complement,
    Object,
    PrepositionalObject,
    Both,
}

/// The second-argument variants. Each supplies its own role and
/// preposition lookup; span building and validity are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    Accusative,
    Dative,
    Genitive,
    Prepositional,
    Predicative,
}

impl ArgumentKind {
    /// Map a grammatical relation label to the argument kind it carries.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            l if l == LABEL_OBJECT_ACC => Some(ArgumentKind::Accusative),
            l if l == LABEL_OBJECT_DAT => Some(ArgumentKind::Dative),
            l if l == LABEL_OBJECT_GEN => Some(ArgumentKind::Genitive),
            l if l == LABEL_OBJECT_PREP => Some(ArgumentKind::Prepositional),
            l if l == LABEL_PREDICATE => Some(ArgumentKind::Predicative),
            _ => None,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            ArgumentKind::Accusative | ArgumentKind::Genitive => Role::Object,
            ArgumentKind::Dative => Role::Both,
            ArgumentKind::Prepositional => Role::PrepositionalObject,
            ArgumentKind::Predicative => Role::Complement,
        }
    }
}

/// A candidate for the second argument: a role-tagged wrapper around the
/// candidate root node, matched against a relation span.
#[derive(Debug, Clone)]
pub struct Argument2 {
    pub root: NodeId,
    pub kind: ArgumentKind,
}

impl Argument2 {
    pub fn new(root: NodeId, kind: ArgumentKind) -> Self {
        Self { root, kind }
    }

    /// The designated preposition node: for prepositional objects, the
    /// first leaf under the candidate carrying a preposition tag.
    pub fn preposition(&self, tree: &DependencyParseTree) -> Option<NodeId> {
        match self.kind {
            ArgumentKind::Prepositional => tree
                .subtree(self.root)
                .into_iter()
                .find(|&n| tree.node(n).match_pos_tag(&PREPOSITION_TAGS)),
            _ => None,
        }
    }

    /// Distance between the candidate root and the leftmost node of the
    /// relation phrase.
    pub fn distance_to_relation(&self, relation: &TreeSpan) -> usize {
        self.root.abs_diff(relation.min_id())
    }

    /// One span per conjunct: the main candidate plus every node in its
    /// coordination chain, each built independently and all sharing the
    /// main candidate's preposition node.
    pub fn tree_spans(
        &self,
        tree: &DependencyParseTree,
        keep_conjunctions: bool,
    ) -> Vec<TreeSpan> {
        let preposition = self.preposition(tree);

        let mut roots = vec![self.root];
        if !keep_conjunctions {
            tree.coordination_chain(self.root, &mut roots);
        }

        roots
            .into_iter()
            .filter_map(|root| {
                let ids = pruned_subtree_ids(tree, root, !keep_conjunctions, true);
                if ids.is_empty() {
                    None
                } else {
                    Some(TreeSpan::with_preposition(root, ids, preposition))
                }
            })
            .collect()
    }
}

/// Locates object/complement span(s) for a relation, polymorphic over
/// the argument kinds.
pub struct ObjectExtractor {
    mappers: Vec<Mapper<TreeSpan, TreeSpan>>,
    keep_conjunctions: bool,
}

impl ObjectExtractor {
    pub fn new() -> Self {
        Self::with_options(false)
    }

    /// `keep_conjunctions` leaves coordination subtrees inside the main
    /// span instead of splitting one span per conjunct.
    pub fn with_options(keep_conjunctions: bool) -> Self {
        Self {
            // Spans without a letter-bearing noun token are never valid
            // arguments
            mappers: vec![contains_noun_filter()],
            keep_conjunctions,
        }
    }

    pub fn add_mapper(&mut self, mapper: Mapper<TreeSpan, TreeSpan>) {
        self.mappers.push(mapper);
    }
}

impl Default for ObjectExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for ObjectExtractor {
    type Input = TreeSpan;
    type Output = TreeSpan;

    fn extract_candidates(
        &self,
        tree: &DependencyParseTree,
        relation: &TreeSpan,
    ) -> Result<Vec<TreeSpan>, ExtractionError> {
        let mut spans = Vec::new();
        for &rel_node in &tree.find(&relation.ids) {
            for &child in tree.children(rel_node) {
                if let Some(kind) = ArgumentKind::from_label(tree.label_to_parent(child)) {
                    let argument = Argument2::new(child, kind);
                    spans.extend(argument.tree_spans(tree, self.keep_conjunctions));
                }
            }
        }
        Ok(spans)
    }

    fn mappers(&self) -> &[Mapper<TreeSpan, TreeSpan>] {
        &self.mappers
    }
}
