#![no_main]
use libfuzzer_sys::fuzz_target;
use reply_matcher::{Classifier, MatcherConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(mut engine) = Classifier::from_json_str(text, MatcherConfig::default()) {
        assert!(engine.index().is_consistent());
        let _ = engine.run(&["apple", "", text]);
    }
});
