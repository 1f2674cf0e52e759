//! Subject (first argument) extractor.

use crate::errors::ExtractionError;
use crate::extractor::{pruned_subtree_ids, Extractor, Mapper};
use crate::tree::labels::{LABEL_RELATIVE_CLAUSE, LABEL_SUBJECT, POS_PROPER_NOUN};
use crate::tree::{DependencyParseTree, NodeId};
use crate::types::TreeSpan;

/// Locates the subject span(s) of a relation.
pub struct SubjectExtractor {
    mappers: Vec<Mapper<TreeSpan, TreeSpan>>,
}

impl SubjectExtractor {
    pub fn new() -> Self {
        Self {
            mappers: Vec::new(),
        }
    }

    pub fn add_mapper(&mut self, mapper: Mapper<TreeSpan, TreeSpan>) {
        self.mappers.push(mapper);
    }
}

impl Default for SubjectExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for SubjectExtractor {
    type Input = TreeSpan;
    type Output = TreeSpan;

    fn extract_candidates(
        &self,
        tree: &DependencyParseTree,
        relation: &TreeSpan,
    ) -> Result<Vec<TreeSpan>, ExtractionError> {
        // First check if there is a subject on the relation itself
        let relation_nodes = tree.find(&relation.ids);
        let mut subject_nodes: Vec<NodeId> = relation_nodes
            .iter()
            .flat_map(|&n| tree.children_of_type(n, LABEL_SUBJECT))
            .collect();

        // If the relation has no direct subject, take a look at the root.
        // This can happen if a conjunction of verbs shares one subject.
        if subject_nodes.is_empty() {
            subject_nodes = tree.children_of_type(tree.root(), LABEL_SUBJECT);
        }

        // A subject which is not a proper noun and has a relative clause
        // as child node is not a valid subject: it is a dummy antecedent
        // introducing its own defining clause.
        // Example: Zahlungstag ist der Tag, an dem alle Mitarbeiter ihr
        // Geld bekommen.
        subject_nodes.retain(|&s| {
            tree.constituent_children(s).len() > 2
                || tree.children_of_type(s, LABEL_RELATIVE_CLAUSE).is_empty()
                || is_proper_noun(tree, s)
        });

        if subject_nodes.is_empty() {
            return Ok(Vec::new());
        }

        let subject_root = if subject_nodes.len() == 1 {
            subject_nodes[0]
        } else {
            // More than one surviving subject root violates the
            // one-subject expectation; recover deterministically.
            let err = ExtractionError::AmbiguousSubject {
                count: subject_nodes.len(),
            };
            log::warn!("{}; keeping the candidate closest to the relation", err);
            let rel_start = relation.min_id();
            subject_nodes
                .into_iter()
                .min_by_key(|&s| (s.abs_diff(rel_start), s))
                .expect("subject_nodes is non-empty")
        };

        // Every conjunct of the subject becomes its own span
        let mut conjuncts = Vec::new();
        tree.coordination_chain(subject_root, &mut conjuncts);

        let mut spans = Vec::with_capacity(1 + conjuncts.len());
        spans.push(build_subject_span(tree, subject_root));
        spans.extend(conjuncts.iter().map(|&c| build_subject_span(tree, c)));
        Ok(spans)
    }

    fn mappers(&self) -> &[Mapper<TreeSpan, TreeSpan>] {
        &self.mappers
    }
}

/// Span of a single subject root: its subtree minus conjuncts,
/// comma-delimited appositions and subordinate clauses.
fn build_subject_span(tree: &DependencyParseTree, root: NodeId) -> TreeSpan {
    let ids = pruned_subtree_ids(tree, root, true, false);
    TreeSpan::new(root, ids)
}

/// A phrase counts as a proper noun when the node itself, or one of its
/// direct leaf children, carries the proper-noun tag.
fn is_proper_noun(tree: &DependencyParseTree, id: NodeId) -> bool {
    tree.node(id).match_pos_tag(&[POS_PROPER_NOUN])
        || tree
            .children(id)
            .iter()
            .any(|&c| tree.node(c).match_pos_tag(&[POS_PROPER_NOUN]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeParser;

    fn extract(tree: &DependencyParseTree, relation: &TreeSpan) -> Vec<TreeSpan> {
        SubjectExtractor::new().extract(tree, relation).unwrap()
    }

    #[test]
    fn test_subject_on_relation() {
        let tree = TreeParser::parse(
            "(sent (vp-aux schläft/VVFIN (np-subj der/ART Hund/NN)))",
        )
        .unwrap();
        // relation is the vp node and its verb
        let rel = TreeSpan::new(1, vec![1, 2]);
        let spans = extract(&tree, &rel);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].head, 3);
        assert_eq!(spans[0].ids, vec![3, 4, 5]);
    }

    #[test]
    fn test_root_fallback_for_shared_subject() {
        // Verb coordination sharing one subject hanging off the root
        let tree = TreeParser::parse(
            "(sent (np-subj Hunde/NN) bellen/VVFIN und/KON beißen/VVFIN)",
        )
        .unwrap();
        let rel = TreeSpan::new(5, vec![5]); // beißen, no subject of its own
        let spans = extract(&tree, &rel);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].head, 1);
    }

    #[test]
    fn test_no_subject_yields_empty() {
        let tree = TreeParser::parse("(sent regnet/VVFIN es/PPER)").unwrap();
        let rel = TreeSpan::new(1, vec![1]);
        assert!(extract(&tree, &rel).is_empty());
    }

    #[test]
    fn test_dummy_antecedent_rejected_proper_noun_kept() {
        // Zahlungstag ist der Tag, an dem alle Mitarbeiter ihr Geld bekommen
        // Two subject candidates: "Zahlungstag" (NE) and "der Tag" with a
        // relative clause and <= 2 children.
        let tree = TreeParser::parse(
            "(sent (np-subj Zahlungstag/NE) ist/VAFIN \
             (np-subj der/ART Tag/NN (s-rel ,/$, an/APPR dem/PRELS \
             (np-subj alle/PIAT Mitarbeiter/NN) (np-obja ihr/PPOSAT Geld/NN) bekommen/VVFIN)))",
        )
        .unwrap();
        // "der Tag": one constituent child (the relative clause), not a
        // proper noun -> rejected by the dummy-antecedent filter.
        let rel = TreeSpan::new(3, vec![3]); // ist
        let spans = extract(&tree, &rel);
        assert_eq!(spans.len(), 1, "only Zahlungstag survives");
        assert_eq!(tree.span_text(&spans[0].ids), "Zahlungstag");
    }

    #[test]
    fn test_coordination_yields_one_span_per_conjunct() {
        // Hunde und Katzen schlafen
        let tree = TreeParser::parse(
            "(sent (np-subj Hunde/NN (kon-kon und/KON (np-cj Katzen/NN))) schlafen/VVFIN)",
        )
        .unwrap();
        let rel = TreeSpan::new(7, vec![7]);
        let spans = extract(&tree, &rel);
        assert_eq!(spans.len(), 2);
        // Pairwise disjoint id sets
        for id in &spans[0].ids {
            assert!(!spans[1].contains(*id));
        }
        assert_eq!(tree.span_text(&spans[0].ids), "Hunde");
        assert_eq!(tree.span_text(&spans[1].ids), "Katzen");
    }

    #[test]
    fn test_apposition_after_comma_removed() {
        // Herr Müller, der Direktor, schläft
        let tree = TreeParser::parse(
            "(sent (np-subj Herr/NN Müller/NE ,/$, (np-app der/ART Direktor/NN) ,/$,) \
             schläft/VVFIN)",
        )
        .unwrap();
        let rel = TreeSpan::new(9, vec![9]);
        let spans = extract(&tree, &rel);
        assert_eq!(spans.len(), 1);
        let text = tree.span_text(&spans[0].ids);
        assert!(!text.contains("Direktor"), "apposition kept: {}", text);
        assert!(text.contains("Müller"));
    }

    #[test]
    fn test_apposition_without_comma_kept() {
        let tree = TreeParser::parse(
            "(sent (np-subj Direktor/NN (np-app Müller/NE)) schläft/VVFIN)",
        )
        .unwrap();
        let rel = TreeSpan::new(5, vec![5]);
        let spans = extract(&tree, &rel);
        assert_eq!(spans.len(), 1);
        assert!(tree.span_text(&spans[0].ids).contains("Müller"));
    }

    #[test]
    fn test_ambiguous_subjects_resolved_by_distance() {
        // Two well-formed subject candidates; the one closer to the
        // relation survives, deterministically.
        let tree = TreeParser::parse(
            "(sent (np-subj Hund/NN) (np-subj Katze/NN) schläft/VVFIN)",
        )
        .unwrap();
        let rel = TreeSpan::new(5, vec![5]);
        let spans = extract(&tree, &rel);
        assert_eq!(spans.len(), 1);
        assert_eq!(tree.span_text(&spans[0].ids), "Katze");
    }
}
