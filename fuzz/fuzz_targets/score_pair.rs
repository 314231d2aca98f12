#![no_main]
use libfuzzer_sys::fuzz_target;
use reply_matcher::similarity::score;
use reply_matcher::SimilarityAlgo;

const ALGOS: [SimilarityAlgo; 7] = [
    SimilarityAlgo::Ratio,
    SimilarityAlgo::Levenshtein,
    SimilarityAlgo::JaroWinkler,
    SimilarityAlgo::SorensenDice,
    SimilarityAlgo::TokenSortRatio,
    SimilarityAlgo::TokenSetRatio,
    SimilarityAlgo::WeightedRatio,
];

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mid = text
        .char_indices()
        .nth(text.chars().count() / 2)
        .map_or(text.len(), |(i, _)| i);
    let (a, b) = text.split_at(mid);
    for algo in ALGOS {
        let s = score(algo, a, b);
        assert!(s <= 100);
        assert_eq!(s, score(algo, b, a));
        assert_eq!(score(algo, a, a), 100);
    }
});
