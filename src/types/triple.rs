use serde::{Deserialize, Serialize};

use crate::tree::DependencyParseTree;
use crate::types::span::TreeSpan;

/// A binary extraction: one relation span combined with a subject span
/// and an object span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeTriple {
    pub rel: TreeSpan,
    pub arg1: TreeSpan,
    pub arg2: TreeSpan,
}

impl TreeTriple {
    pub fn new(rel: TreeSpan, arg1: TreeSpan, arg2: TreeSpan) -> Self {
        Self { rel, arg1, arg2 }
    }

    /// Combine one relation with all surviving subject and object
    /// candidates: the full cross product, in subject-major order.
    /// Zero candidates on either side yields zero triples.
    pub fn product_of_args(
        rel: &TreeSpan,
        arg1s: &[TreeSpan],
        arg2s: &[TreeSpan],
    ) -> Vec<TreeTriple> {
        let mut triples = Vec::with_capacity(arg1s.len() * arg2s.len());
        for arg1 in arg1s {
            for arg2 in arg2s {
                triples.push(TreeTriple::new(rel.clone(), arg1.clone(), arg2.clone()));
            }
        }
        triples
    }

    /// Human-readable `(arg1; rel; arg2)` rendering.
    pub fn render(&self, tree: &DependencyParseTree) -> String {
        format!(
            "({}; {}; {})",
            self.arg1.text(tree),
            self.rel.text(tree),
            self.arg2.text(tree)
        )
    }
}
