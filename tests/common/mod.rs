//! Common test utilities and helpers.

use reply_matcher::{Classifier, Diagnostic, MatcherConfig};
use std::sync::{Arc, Mutex};

/// Category definitions used across the end-to-end scenarios.
pub const FRUIT_VEG: &str = r#"{"fruit": ["apple", "banana"], "veg": ["carrot"]}"#;

/// Engine over [`FRUIT_VEG`] with threshold 80 and a fixed report seed.
pub fn fruit_veg() -> Classifier {
    Classifier::from_json_str(FRUIT_VEG, MatcherConfig::default().with_seed(11))
        .expect("fruit/veg definitions are valid")
}

/// Collected diagnostics shared with a hook installed on the engine.
pub type Collected = Arc<Mutex<Vec<Diagnostic>>>;

/// Install a hook that records every diagnostic the engine emits.
pub fn with_collector(engine: Classifier) -> (Classifier, Collected) {
    let seen: Collected = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let engine = engine.with_diagnostic_hook(move |d| sink.lock().unwrap().push(d.clone()));
    (engine, seen)
}

/// A mixed bag of survey replies: typos, exact hits, noise and blanks.
pub fn survey_replies() -> Vec<String> {
    [
        "Apple", "appel", "bananna", "carot", "CARROT ", "xyz123", "", "   ", "banana split",
        "apples and carrots", "no idea", "aple",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
