//! Dependency parse tree model.
//!
//! This module is organized into the following submodules:
//! - `node`: node arena entries and the leaf/inner data sum type
//! - `labels`: grammatical label and POS constants
//! - `parser`: pest-based parser for the bracketed tree encoding
//!
//! The tree itself is an arena of nodes indexed by stable pre-order id.
//! Children are index lists owned by their parent entry; parent and
//! coordination links are plain indices, so the structure has no cyclic
//! ownership. Trees are immutable after construction.

pub mod labels;
pub mod node;
pub mod parser;

pub use node::{Node, NodeData, NodeId};
pub use parser::TreeParser;

use labels::{LABEL_CONJUNCT, LABEL_COORDINATION};

/// A sentence's dependency parse tree.
#[derive(Debug, Clone)]
pub struct DependencyParseTree {
    nodes: Vec<Node>,
}

impl DependencyParseTree {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node in pre-order. Its id is its arena index.
    pub(crate) fn push_node(
        &mut self,
        label_to_parent: String,
        parent: Option<NodeId>,
        data: NodeData,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            id,
            label_to_parent,
            parent,
            children: Vec::new(),
            data,
        });
        if let Some(p) = parent {
            self.nodes[p].children.push(id);
        }
        id
    }

    /// The sentence root. Exactly one per tree, always at index 0.
    pub fn root(&self) -> NodeId {
        0
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn label_to_parent(&self, id: NodeId) -> &str {
        &self.nodes[id].label_to_parent
    }

    /// Children connected to `id` by the given grammatical relation.
    pub fn children_of_type(&self, id: NodeId, label: &str) -> Vec<NodeId> {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .filter(|&c| self.nodes[c].label_to_parent == label)
            .collect()
    }

    /// Constituent (inner-node) children of `id`: the node's dependents,
    /// as opposed to its own surface material.
    pub fn constituent_children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .filter(|&c| self.nodes[c].is_inner())
            .collect()
    }

    /// Pre-order flatten of `id` and all its descendants.
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            out.push(n);
            // Push in reverse so children come out left to right
            for &c in self.nodes[n].children.iter().rev() {
                stack.push(c);
            }
        }
        out
    }

    /// Map a set of ids back to the ids that exist in this tree,
    /// preserving input order.
    pub fn find(&self, ids: &[usize]) -> Vec<NodeId> {
        ids.iter().copied().filter(|&i| i < self.nodes.len()).collect()
    }

    /// True if a comma token occurs strictly between positions `a` and `b`.
    /// Used for the apposition pruning rule.
    pub fn comma_between(&self, a: usize, b: usize) -> bool {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        self.nodes.iter().any(|n| {
            n.id > lo
                && n.id < hi
                && matches!(&n.data, NodeData::Leaf { word, .. } if word == ",")
        })
    }

    /// Collect every node connected to `id` by a coordination relation,
    /// transitively, into `out`. A kon edge leads either to a
    /// conjunction word whose cj child is the conjunct, or directly to
    /// the next conjunct.
    pub fn coordination_chain(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for kon in self.children_of_type(id, LABEL_COORDINATION) {
            let cj = self.children_of_type(kon, LABEL_CONJUNCT);
            let conjunct = cj.first().copied().unwrap_or(kon);
            out.push(conjunct);
            self.coordination_chain(conjunct, out);
        }
    }

    /// POS tag of a node: the tag itself for a leaf, the tag of the
    /// first leaf descendant for an inner node (its head word for the
    /// purposes of the extraction heuristics).
    pub fn pos(&self, id: NodeId) -> &str {
        for n in self.subtree(id) {
            if let NodeData::Leaf { tag, .. } = &self.nodes[n].data {
                return tag;
            }
        }
        ""
    }

    /// Surface form of a leaf node.
    pub fn token(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id].data {
            NodeData::Leaf { word, .. } => Some(word),
            NodeData::Inner { .. } => None,
        }
    }

    /// Surface text of a set of node ids, leaves only, in sentence order.
    pub fn span_text(&self, ids: &[usize]) -> String {
        let mut ids: Vec<usize> = self.find(ids);
        ids.sort_unstable();
        let words: Vec<&str> = ids.iter().filter_map(|&i| self.token(i)).collect();
        words.join(" ")
    }
}
