use crate::common::{fruit_veg, survey_replies};
use reply_matcher::similarity::score;
use reply_matcher::{
    Assignment, CategoryDefinitions, Classifier, MatcherConfig, SimilarityAlgo, VariantIndex,
};

#[test]
fn output_is_parallel_to_input() {
    let mut engine = fruit_veg();
    let replies = survey_replies();
    let out = engine.run(&replies).unwrap();
    assert_eq!(out.len(), replies.len());
    for (r, q) in out.iter().zip(&replies) {
        assert_eq!(&r.query, q);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let mut engine = fruit_veg();
    let replies = survey_replies();
    let first = engine.run(&replies).unwrap().clone();
    let second = engine.run(&replies).unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(first.to_json_string().unwrap(), second.to_json_string().unwrap());
}

#[test]
fn raising_threshold_only_rejects_more() {
    let mut engine = fruit_veg();
    let replies = survey_replies();
    let mut previous: Option<Vec<Assignment>> = None;
    for threshold in (0..=100).step_by(5) {
        let current: Vec<Assignment> = engine
            .run_with(&replies, 1, threshold)
            .unwrap()
            .iter()
            .map(|r| r.assignment.clone())
            .collect();
        if let Some(prev) = &previous {
            for (before, after) in prev.iter().zip(&current) {
                if *before == Assignment::NoMatch {
                    assert_eq!(*after, Assignment::NoMatch, "threshold {threshold}");
                } else if after.is_match() {
                    assert_eq!(before, after);
                }
            }
        }
        previous = Some(current);
    }
}

#[test]
fn threshold_zero_accepts_everything_when_variants_exist() {
    let mut engine = fruit_veg();
    let out = engine.run_with(&survey_replies(), 1, 0).unwrap();
    assert_eq!(out.unmatched_count(), 0);
}

#[test]
fn scorer_is_reflexive_and_symmetric_on_replies() {
    let replies = survey_replies();
    for algo in [
        SimilarityAlgo::Ratio,
        SimilarityAlgo::Levenshtein,
        SimilarityAlgo::JaroWinkler,
        SimilarityAlgo::SorensenDice,
        SimilarityAlgo::TokenSortRatio,
        SimilarityAlgo::TokenSetRatio,
        SimilarityAlgo::WeightedRatio,
    ] {
        for a in &replies {
            assert_eq!(score(algo, a, a), 100);
            for b in &replies {
                assert_eq!(score(algo, a, b), score(algo, b, a), "{algo:?} {a:?} {b:?}");
            }
        }
    }
}

#[test]
fn resolve_follows_last_writer() {
    let defs = CategoryDefinitions::from_json_str(
        r#"{"drinks": ["tea", "coffee"], "snacks": ["crisps"]}"#,
    )
    .unwrap();
    let mut index = VariantIndex::from_definitions(&defs).unwrap();
    for (variant, category) in [("tea", "drinks"), ("coffee", "drinks"), ("crisps", "snacks")] {
        assert_eq!(index.resolve(variant), Some(category));
    }
    assert_eq!(index.resolve("juice"), None);

    index.add_variants("snacks", &["Coffee"]).unwrap();
    assert_eq!(index.resolve("coffee"), Some("snacks"));
    assert_eq!(index.resolve("tea"), Some("drinks"));
    assert!(index.is_consistent());
}

#[test]
fn resolve_follows_definition_order_for_shared_variants() {
    let defs = CategoryDefinitions::from_json_str(
        r#"{"veg": ["tomato", "carrot"], "fruit": ["apple", "Tomato"]}"#,
    )
    .unwrap();
    let index = VariantIndex::from_definitions(&defs).unwrap();
    assert_eq!(index.resolve("tomato"), Some("fruit"));
    assert_eq!(index.resolve("carrot"), Some("veg"));
    assert!(index.is_consistent());

    let mut engine = Classifier::new(&defs, MatcherConfig::default()).unwrap();
    let out = engine.run(&["tomato"]).unwrap();
    assert_eq!(out.pairs(), vec![("tomato", "fruit")]);
}
