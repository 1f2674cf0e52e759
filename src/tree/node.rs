//! Node type for dependency parse trees.

use crate::errors::ExtractionError;

/// Index of a node in the tree arena. Equals the node's left-to-right
/// pre-order position, so it doubles as the ordering key for distance
/// calculations.
pub type NodeId = usize;

/// Payload of a tree node: either a terminal token or a syntactic
/// constituent described by a feature/label pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Leaf {
        word: String,
        tag: String,
        pos_group: String,
    },
    Inner {
        feature: String,
        label: String,
    },
}

/// A vertex of the sentence tree. Children are exclusively owned index
/// lists; the parent link is a plain back index used for upward
/// navigation only.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub label_to_parent: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub data: NodeData,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self.data, NodeData::Leaf { .. })
    }

    pub fn is_inner(&self) -> bool {
        matches!(self.data, NodeData::Inner { .. })
    }

    /// Check if the node's label to its parent is one of the given labels.
    pub fn match_label(&self, labels: &[&str]) -> bool {
        labels.iter().any(|l| *l == self.label_to_parent)
    }

    /// Check if the node's constituent feature is one of the given features.
    /// Leaf nodes never match.
    pub fn match_feature(&self, features: &[&str]) -> bool {
        match &self.data {
            NodeData::Inner { feature, .. } => features.iter().any(|f| f == feature),
            NodeData::Leaf { .. } => false,
        }
    }

    /// Check if the node's POS tag is one of the given tags.
    /// Inner nodes never match.
    pub fn match_pos_tag(&self, tags: &[&str]) -> bool {
        match &self.data {
            NodeData::Leaf { tag, .. } => tags.iter().any(|t| t == tag),
            NodeData::Inner { .. } => false,
        }
    }

    /// The node's data in its input encoding.
    pub fn data_string(&self) -> String {
        match &self.data {
            NodeData::Leaf { word, tag, .. } => format!("{}/{}", word, tag),
            NodeData::Inner { feature, label } => {
                if label.is_empty() {
                    feature.clone()
                } else {
                    format!("{}-{}", feature, label)
                }
            }
        }
    }
}

/// Coarse POS group for a tag: nouns collapse to "N", foreign material
/// stays "FM", everything else keeps its leading letter.
pub fn pos_group(tag: &str) -> String {
    if tag == "FM" {
        return "FM".to_string();
    }
    tag.chars().take(1).collect()
}

/// Split an inner node's data string into its feature/label pair.
///
/// The encoding is `feature-label` with an optional disambiguation
/// suffix after a slash, which is discarded. A missing feature makes
/// the node malformed.
pub fn parse_inner_data(data: &str, position: usize) -> Result<(String, String), ExtractionError> {
    let data = data.trim();
    let mut parts = data.splitn(2, '-');
    let feature = parts.next().unwrap_or("").to_string();
    if feature.is_empty() {
        return Err(ExtractionError::MalformedNode {
            data: data.to_string(),
            position,
        });
    }
    let label = parts
        .next()
        .map(|l| l.split('/').next().unwrap_or("").to_string())
        .unwrap_or_default();
    Ok((feature, label))
}
