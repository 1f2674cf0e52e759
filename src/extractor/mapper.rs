//! Mapper chain: scoring and filtering transforms over candidate lists.

use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::morphology::CaseResolver;
use crate::tree::labels::{NOUN_GROUPS, POS_NOUN, POS_PROPER_NOUN};
use crate::tree::{DependencyParseTree, NodeData};
use crate::types::TreeSpan;

/// Ordering key assigned by scoring mappers. Total order; higher wins.
pub type Score = i64;

/// Sentinel meaning "exclude unless nothing else qualifies". A
/// candidate carrying this score loses to any candidate with a real
/// score, and ties among sentinel-scored candidates fall back to the
/// reducer's first-wins order.
pub const MIN_SCORE: Score = Score::MIN;

type FilterFn<I, O> = Box<dyn Fn(&DependencyParseTree, &I, &O) -> bool + Send + Sync>;
type ScoreFn<I, O> = Box<dyn Fn(&DependencyParseTree, &I, &O) -> Score + Send + Sync>;

/// One stage of a mapper chain.
pub enum Mapper<I, O> {
    /// Drop every candidate for which the predicate is false.
    Filter(FilterFn<I, O>),
    /// Stable sort, best score first. Keeps all candidates.
    Sort(ScoreFn<I, O>),
    /// Keep only the maximum-scoring candidate. Stable: the first
    /// candidate encountered among maximal-score ties wins.
    SelectBest(ScoreFn<I, O>),
}

impl<I, O> Mapper<I, O> {
    pub fn apply(
        &self,
        tree: &DependencyParseTree,
        input: &I,
        candidates: Vec<O>,
    ) -> Vec<O> {
        match self {
            Mapper::Filter(pred) => candidates
                .into_iter()
                .filter(|c| pred(tree, input, c))
                .collect(),
            Mapper::Sort(score) => {
                let mut scored: Vec<(Score, O)> = candidates
                    .into_iter()
                    .map(|c| (score(tree, input, &c), c))
                    .collect();
                scored.sort_by(|a, b| b.0.cmp(&a.0));
                scored.into_iter().map(|(_, c)| c).collect()
            }
            Mapper::SelectBest(score) => {
                let mut best: Option<(Score, O)> = None;
                for c in candidates {
                    let s = score(tree, input, &c);
                    match &best {
                        // Strictly greater replaces, so first-wins on ties
                        Some((bs, _)) if s <= *bs => {}
                        _ => best = Some((s, c)),
                    }
                }
                best.map(|(_, c)| vec![c]).unwrap_or_default()
            }
        }
    }
}

fn letter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[A-Za-zäöüßÄÖÜ]").expect("valid letter pattern"))
}

/// True if the span contains at least one noun-group token whose
/// surface form includes a letter. Rejects pure-punctuation and
/// numeral spans.
pub(crate) fn span_contains_noun(tree: &DependencyParseTree, span: &TreeSpan) -> bool {
    tree.find(&span.ids).into_iter().any(|id| {
        match &tree.node(id).data {
            NodeData::Leaf {
                word, pos_group, ..
            } => {
                NOUN_GROUPS.contains(&pos_group.as_str()) && letter_regex().is_match(word)
            }
            NodeData::Inner { .. } => false,
        }
    })
}

/// Filtering mapper keeping only spans that pass [`span_contains_noun`].
pub fn contains_noun_filter() -> Mapper<TreeSpan, TreeSpan> {
    Mapper::Filter(Box::new(|tree, _relation, span| {
        span_contains_noun(tree, span)
    }))
}

/// Reducing mapper selecting the candidate that is nominative and
/// closest to the relation.
///
/// Score is the negated distance between the candidate head and the
/// relation's leftmost node, so closer candidates score higher. If any
/// noun token inside the span is judged non-nominative by the resolver,
/// the score collapses to [`MIN_SCORE`] regardless of distance: a
/// nominative candidate always outranks a non-nominative one. With a
/// degraded resolver the case check is skipped and only distance ranks.
pub fn closest_nominative(resolver: Arc<CaseResolver>) -> Mapper<TreeSpan, TreeSpan> {
    Mapper::SelectBest(Box::new(move |tree, relation: &TreeSpan, span| {
        if resolver.enabled() {
            for id in tree.find(&span.ids) {
                if let NodeData::Leaf { word, tag, .. } = &tree.node(id).data {
                    if (tag == POS_NOUN || tag == POS_PROPER_NOUN)
                        && !resolver.is_nominative(word)
                    {
                        return MIN_SCORE;
                    }
                }
            }
        }
        -(span.distance_to(relation) as Score)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::lexicon::{Case, MorphLexicon};
    use crate::tree::TreeParser;

    fn tree_and_relation() -> (DependencyParseTree, TreeSpan) {
        // "Der Hund beißt den Mann" shaped tree; relation is the verb.
        let tree = TreeParser::parse(
            "(sent (np-subj der/ART Hund/NN) beißt/VVFIN (np-obja den/ART Mann/NN))",
        )
        .unwrap();
        let rel = TreeSpan::new(4, vec![4]);
        (tree, rel)
    }

    #[test]
    fn test_filter_mapper() {
        let (tree, rel) = tree_and_relation();
        let keep_even = Mapper::Filter(Box::new(|_t, _r, s: &TreeSpan| s.head % 2 == 0));
        let spans = vec![TreeSpan::new(1, vec![1]), TreeSpan::new(2, vec![2])];
        let out = keep_even.apply(&tree, &rel, spans);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].head, 2);
    }

    #[test]
    fn test_select_best_first_wins_on_ties() {
        let (tree, rel) = tree_and_relation();
        let constant = Mapper::SelectBest(Box::new(|_t, _r, _s: &TreeSpan| 7));
        let spans = vec![TreeSpan::new(1, vec![1]), TreeSpan::new(2, vec![2])];
        let out = constant.apply(&tree, &rel, spans);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].head, 1);
    }

    #[test]
    fn test_contains_noun_filter_rejects_punctuation() {
        let tree = TreeParser::parse("(sent (np-subj ,/$, 42/CARD) steht/VVFIN)").unwrap();
        let rel = TreeSpan::new(4, vec![4]);
        let filter = contains_noun_filter();
        let out = filter.apply(&tree, &rel, vec![TreeSpan::new(1, vec![1, 2, 3])]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_case_dominance_over_distance() {
        // A (nominative, far) must beat B (non-nominative, near).
        let (tree, rel) = tree_and_relation();
        let lexicon = MorphLexicon::from_entries(vec![
            ("Hund".to_string(), vec![Case::Nominative]),
            ("Mann".to_string(), vec![Case::Accusative]),
        ]);
        let resolver = Arc::new(CaseResolver::new(Some(lexicon)));
        let mapper = closest_nominative(resolver);

        let near_non_nominative = TreeSpan::new(5, vec![5, 6, 7]); // den Mann
        let far_nominative = TreeSpan::new(1, vec![1, 2, 3]); // der Hund
        let out = mapper.apply(&tree, &rel, vec![near_non_nominative, far_nominative]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].head, 1);
    }

    #[test]
    fn test_distance_tie_break_between_nominatives() {
        let (tree, rel) = tree_and_relation();
        let lexicon = MorphLexicon::from_entries(vec![
            ("Hund".to_string(), vec![Case::Nominative]),
            ("Mann".to_string(), vec![Case::Nominative]),
        ]);
        let resolver = Arc::new(CaseResolver::new(Some(lexicon)));
        let mapper = closest_nominative(resolver);

        let far = TreeSpan::new(1, vec![1, 2, 3]);
        let near = TreeSpan::new(5, vec![5, 6, 7]);
        let out = mapper.apply(&tree, &rel, vec![far, near]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].head, 5);
    }

    #[test]
    fn test_degraded_resolver_ranks_by_distance_only() {
        let (tree, rel) = tree_and_relation();
        let mapper = closest_nominative(Arc::new(CaseResolver::disabled()));
        let far = TreeSpan::new(1, vec![1, 2, 3]);
        let near = TreeSpan::new(5, vec![5, 6, 7]);
        let out = mapper.apply(&tree, &rel, vec![far, near]);
        assert_eq!(out[0].head, 5);
    }
}
