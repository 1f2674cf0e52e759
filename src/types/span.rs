use serde::{Deserialize, Serialize};

use crate::tree::{DependencyParseTree, NodeId};

/// A relation or argument span: a set of node ids inside one sentence
/// tree, plus the id of the span's root node and, for prepositional
/// arguments, the designated preposition node.
///
/// Spans are created once per extraction call and immutable thereafter.
/// They hold no tree state; every tree-dependent operation borrows the
/// sentence tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSpan {
    /// Root node of the span (the candidate head), used for distance.
    pub head: NodeId,
    /// The span's node ids, sorted ascending. Never empty.
    pub ids: Vec<usize>,
    /// Preposition node, set only for prepositional arguments.
    pub preposition: Option<NodeId>,
}

impl TreeSpan {
    pub fn new(head: NodeId, mut ids: Vec<usize>) -> Self {
        ids.sort_unstable();
        Self {
            head,
            ids,
            preposition: None,
        }
    }

    pub fn with_preposition(head: NodeId, ids: Vec<usize>, preposition: Option<NodeId>) -> Self {
        let mut span = Self::new(head, ids);
        span.preposition = preposition;
        span
    }

    /// Leftmost position of the span.
    pub fn min_id(&self) -> usize {
        self.ids.first().copied().unwrap_or(self.head)
    }

    /// Absolute distance between this span's head and the leftmost
    /// node of `relation`.
    pub fn distance_to(&self, relation: &TreeSpan) -> usize {
        self.head.abs_diff(relation.min_id())
    }

    pub fn contains(&self, id: usize) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    /// Surface text of the span, in sentence order. The preposition is
    /// part of the rendering even when its node sits outside the id set.
    pub fn text(&self, tree: &DependencyParseTree) -> String {
        let body = tree.span_text(&self.ids);
        match self.preposition {
            Some(p) if !self.contains(p) => match tree.token(p) {
                Some(prep) => format!("{} {}", prep, body),
                None => body,
            },
            _ => body,
        }
    }
}
