//! Scenario tests for the extraction pipeline properties.

use crate::extractor::{Extractor, Mapper, ObjectExtractor, SubjectExtractor};
use crate::tree::TreeParser;
use crate::types::{TreeSpan, TreeTriple};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_coordination_completeness_three_conjuncts() {
    init_logging();
    // k conjuncts -> k+1 spans, pairwise disjoint.
    // Hunde, Katzen und Vögel schlafen
    let tree = TreeParser::parse(
        "(sent (np-subj Hunde/NN (kon-kon ,/$, (np-cj Katzen/NN \
         (kon-kon und/KON (np-cj Vögel/NN))))) schlafen/VVFIN)",
    )
    .unwrap();
    let rel = TreeSpan::new(11, vec![11]);
    let spans = SubjectExtractor::new().extract(&tree, &rel).unwrap();
    assert_eq!(spans.len(), 3);
    for (i, a) in spans.iter().enumerate() {
        for b in spans.iter().skip(i + 1) {
            for id in &a.ids {
                assert!(!b.contains(*id), "spans overlap on node {}", id);
            }
        }
    }
    let texts: Vec<String> = spans.iter().map(|s| tree.span_text(&s.ids)).collect();
    assert_eq!(texts, vec!["Hunde", "Katzen", "Vögel"]);
}

#[test]
fn test_clause_exclusion_property() {
    // No span node's path to the span root may pass through a clause edge.
    let tree = TreeParser::parse(
        "(sent (vp-x sah/VVFIN (np-obja den/ART Mann/NN \
         (s-objc dass/KOUS er/PPER (np-obja Geld/NN) hat/VAFIN) \
         (s-neb weil/KOUS es/PPER regnete/VVFIN))))",
    )
    .unwrap();
    let rel = TreeSpan::new(1, vec![1, 2]);
    let spans = ObjectExtractor::new().extract(&tree, &rel).unwrap();
    assert_eq!(spans.len(), 1);
    for &id in &spans[0].ids {
        // walk up to the span root checking labels
        let mut cur = id;
        while cur != spans[0].head {
            let label = tree.label_to_parent(cur);
            assert!(
                !["rel", "objc", "neb"].contains(&label),
                "node {} reached through clause edge '{}'",
                id,
                label
            );
            cur = tree.parent(cur).expect("span nodes stay under the span root");
        }
    }
    assert_eq!(tree.span_text(&spans[0].ids), "den Mann");
}

#[test]
fn test_cross_product_counts() {
    // Two subject conjuncts and two object conjuncts -> four triples.
    let tree = TreeParser::parse(
        "(sent (np-subj Hunde/NN (kon-kon und/KON (np-cj Katzen/NN))) \
         (vp-x jagen/VVFIN (np-obja Mäuse/NN (kon-kon und/KON (np-cj Vögel/NN)))))",
    )
    .unwrap();
    let rel = TreeSpan::new(8, vec![7, 8]);
    let arg1s = SubjectExtractor::new().extract(&tree, &rel).unwrap();
    let arg2s = ObjectExtractor::new().extract(&tree, &rel).unwrap();
    assert_eq!(arg1s.len(), 2);
    assert_eq!(arg2s.len(), 2);
    let triples = TreeTriple::product_of_args(&rel, &arg1s, &arg2s);
    assert_eq!(triples.len(), 4);
}

#[test]
fn test_empty_after_mapper_is_not_an_error() {
    let tree = TreeParser::parse("(sent (np-subj Hunde/NN) bellen/VVFIN)").unwrap();
    let rel = TreeSpan::new(3, vec![3]);
    let mut extractor = SubjectExtractor::new();
    extractor.add_mapper(Mapper::Filter(Box::new(|_t, _r, _s: &TreeSpan| false)));
    let spans = extractor.extract(&tree, &rel).unwrap();
    assert!(spans.is_empty());
}

#[test]
fn test_mapper_chain_applies_in_order() {
    // A sort followed by a filter sees the sorted order; the chain is
    // explicit iteration, stage by stage.
    let tree = TreeParser::parse(
        "(sent (vp-x gibt/VVFIN (np-obja Geld/NN) (np-objd Kindern/NN)))",
    )
    .unwrap();
    let rel = TreeSpan::new(1, vec![1, 2]);
    let mut extractor = ObjectExtractor::new();
    extractor.add_mapper(Mapper::Sort(Box::new(|_t, r: &TreeSpan, s: &TreeSpan| {
        -(s.distance_to(r) as i64)
    })));
    let spans = extractor.extract(&tree, &rel).unwrap();
    assert_eq!(spans.len(), 2);
    // closest first after the sort stage
    assert!(spans[0].distance_to(&rel) <= spans[1].distance_to(&rel));
}
