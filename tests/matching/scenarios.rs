use crate::common::{fruit_veg, survey_replies, with_collector};
use reply_matcher::{Assignment, Classifier, DiagnosticKind, MatcherConfig, ResultFilter, NO_MATCH};
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

#[test]
fn typo_within_tolerance_is_matched() {
    let mut engine = fruit_veg();
    let out = engine.run(&["appel"]).unwrap();
    assert_eq!(out.results[0].assignment, Assignment::Matched("fruit".into()));
    assert_eq!(out.results[0].score, Some(80));
}

#[test]
fn unrelated_text_is_no_match() {
    let mut engine = fruit_veg();
    let out = engine.run(&["xyz123"]).unwrap();
    assert_eq!(out.pairs(), vec![("xyz123", NO_MATCH)]);
}

#[test]
fn removed_category_no_longer_matches() {
    let mut engine = fruit_veg();
    assert_eq!(engine.run(&["carrot"]).unwrap().pairs(), vec![("carrot", "veg")]);
    assert!(engine.remove_category("veg"));
    assert_eq!(engine.run(&["carrot"]).unwrap().pairs(), vec![("carrot", NO_MATCH)]);
}

#[test]
fn added_variant_is_normalized_and_deduplicated() {
    let mut engine = fruit_veg();
    let added = engine.add_variants("fruit", &["APPLE "]).unwrap();
    assert_eq!(added, 0);
    assert_eq!(engine.resolve("apple"), Some("fruit"));
    assert_eq!(engine.variants_of("fruit").unwrap(), vec!["apple", "banana"]);
}

#[test]
fn report_samples_only_rejected_replies() {
    let mut engine = fruit_veg();
    let accepted = ["apple", "banana", "carrot", "Apple", "BANANA", "carot"];
    let rejected = ["xyz123", "qwerty", "", "zzzz"];
    let queries: Vec<&str> = accepted.iter().chain(rejected.iter()).copied().collect();
    let out = engine.run(&queries).unwrap();
    assert_eq!(out.unmatched_count(), 4);

    let report = engine.report_with(2);
    assert!(report.has_data);
    assert_eq!(report.total, 10);
    assert!((report.no_match_ratio - 0.4).abs() < 1e-12);
    assert_eq!(report.samples.len(), 2);
    let distinct: HashSet<&str> = report.samples.iter().map(String::as_str).collect();
    assert_eq!(distinct.len(), 2);
    assert!(distinct.iter().all(|s| rejected.contains(s)));
}

#[test]
fn seeded_reports_are_reproducible() {
    let mut engine = fruit_veg();
    engine.run(&survey_replies()).unwrap();
    assert_eq!(engine.report().samples, engine.report().samples);
}

#[test]
fn filters_split_matched_and_unmatched() {
    let mut engine = fruit_veg();
    let replies = survey_replies();
    let out = engine.run(&replies).unwrap();
    let matched = out.filter(ResultFilter::Matched);
    let unmatched = out.filter(ResultFilter::Unmatched);
    assert_eq!(matched.len() + unmatched.len(), replies.len());
    assert!(matched.iter().all(|r| r.is_match()));
    assert!(unmatched.iter().any(|r| r.query.is_empty()));
    assert!((out.match_ratio() + out.no_match_ratio() - 1.0).abs() < 1e-12);
}

#[test]
fn limit_above_one_keeps_ranked_candidates() {
    let mut engine = fruit_veg();
    let out = engine.run_with(&["appel"], 3, 80).unwrap();
    let r = &out.results[0];
    assert_eq!(r.candidates.len(), 3);
    assert_eq!(r.candidates[0].category, "fruit");
    assert!(r.candidates.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(r.assignment, Assignment::Matched("fruit".into()));
}

#[test]
fn unknown_category_removal_is_reported_not_raised() {
    let (mut engine, seen) = with_collector(fruit_veg());
    assert!(!engine.remove_category("dairy"));
    assert_eq!(engine.categories(), vec!["fruit", "veg"]);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, DiagnosticKind::NotFound);
}

#[test]
fn engine_can_be_shared_behind_rwlock() {
    let engine = Arc::new(RwLock::new(fruit_veg()));
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                let guard = engine.read().unwrap();
                guard.match_one("bananna")[0].category.clone()
            })
        })
        .collect();
    engine
        .write()
        .unwrap()
        .add_variants("grain", &["rice"])
        .unwrap();
    for r in readers {
        assert_eq!(r.join().unwrap(), "fruit");
    }
    assert_eq!(engine.read().unwrap().resolve("rice"), Some("grain"));
}

#[test]
fn token_algorithms_handle_reordered_phrases() {
    let cfg = MatcherConfig::from_json_str(r#"{"threshold": 90, "algo": "token_set_ratio"}"#)
        .unwrap();
    let mut engine =
        Classifier::from_json_str(r#"{"transport": ["public bus"], "car": ["own car"]}"#, cfg)
            .unwrap();
    let out = engine.run(&["Bus public", "car own my"]).unwrap();
    assert_eq!(
        out.pairs(),
        vec![("Bus public", "transport"), ("car own my", "car")]
    );
}
