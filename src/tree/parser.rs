//! Parser for the bracketed tree encoding.
//!
//! Sentences arrive from the external dependency parser serialized as a
//! simple bracketed recursive grammar: inner nodes as
//! `(feature-label child ...)`, leaves as `word/TAG`. Ids are assigned
//! in pre-order, so every node's id equals its left-to-right position.

use anyhow::{anyhow, Result};
use pest::Parser;
use pest_derive::Parser;

use crate::errors::ExtractionError;
use crate::tree::node::{parse_inner_data, pos_group, NodeData, NodeId};
use crate::tree::DependencyParseTree;

#[derive(Parser)]
#[grammar = "tree.pest"]
struct PestTreeParser;

/// Front end turning bracketed sentence encodings into trees.
pub struct TreeParser;

impl TreeParser {
    /// Parse a single sentence.
    ///
    /// Fails with a syntax error for unbalanced input, or with
    /// [`ExtractionError::MalformedNode`] when an inner node's data
    /// string has no feature part. Either failure is scoped to this
    /// sentence; batch callers log and continue.
    pub fn parse(input: &str) -> Result<DependencyParseTree> {
        let mut pairs = PestTreeParser::parse(Rule::tree, input)
            .map_err(|e| anyhow!("tree syntax error: {}", e))?;
        let tree_pair = pairs
            .next()
            .ok_or_else(|| anyhow!("empty parse result for '{}'", input))?;

        let mut tree = DependencyParseTree::new();
        for pair in tree_pair.into_inner() {
            if pair.as_rule() == Rule::node {
                build_node(&mut tree, None, pair)?;
            }
        }
        if tree.is_empty() {
            return Err(anyhow!("no nodes in '{}'", input));
        }
        Ok(tree)
    }
}

fn build_node(
    tree: &mut DependencyParseTree,
    parent: Option<NodeId>,
    pair: pest::iterators::Pair<Rule>,
) -> Result<NodeId, ExtractionError> {
    match pair.as_rule() {
        Rule::node => {
            let inner = pair.into_inner().next().expect("node has exactly one child");
            build_node(tree, parent, inner)
        }
        Rule::inner => {
            let mut inner_pairs = pair.into_inner();
            let data_pair = inner_pairs.next().expect("inner node has a data string");
            let position = tree.len();
            let (feature, label) = parse_inner_data(data_pair.as_str(), position)?;
            let id = tree.push_node(
                label.clone(),
                parent,
                NodeData::Inner { feature, label },
            );
            for child in inner_pairs {
                if child.as_rule() == Rule::node {
                    build_node(tree, Some(id), child)?;
                }
            }
            Ok(id)
        }
        Rule::leaf => {
            let raw = pair.as_str();
            // Split off the tag after the last slash; a bare token
            // becomes a leaf with an empty tag.
            let (word, tag) = match raw.rsplit_once('/') {
                Some((w, t)) if !w.is_empty() => (w, t),
                _ => (raw, ""),
            };
            let id = tree.push_node(
                String::new(),
                parent,
                NodeData::Leaf {
                    word: word.to_string(),
                    tag: tag.to_string(),
                    pos_group: pos_group(tag),
                },
            );
            Ok(id)
        }
        other => unreachable!("unexpected rule in tree: {:?}", other),
    }
}
