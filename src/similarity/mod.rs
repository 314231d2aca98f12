//! String similarity scoring powered by `strsim`.
//!
//! Every algorithm maps two strings to an integer score in `0..=100`
//! (higher is more similar). Scores are symmetric, and identical strings
//! score 100 after normalization.

mod text;

pub use text::{normalize, PreparedText};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Weight applied to token-based ratios inside [`SimilarityAlgo::WeightedRatio`].
const TOKEN_SCALE: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityAlgo {
    /// Normalized Damerau-Levenshtein over the whole string
    Ratio,
    /// Normalized Levenshtein (no transpositions)
    Levenshtein,
    JaroWinkler,
    SorensenDice, // bigram-based dice coefficient
    /// [`SimilarityAlgo::Ratio`] over lexically sorted tokens
    TokenSortRatio,
    /// Ratio over token intersection and differences; ignores word order and
    /// repeated words
    TokenSetRatio,
    /// Best of `Ratio` and the scaled token ratios for multi-word input
    #[default]
    WeightedRatio,
}

/// Score two raw strings. Both sides are normalized first.
pub fn score(algo: SimilarityAlgo, a: &str, b: &str) -> u8 {
    score_prepared(algo, &PreparedText::new(a), &PreparedText::new(b))
}

/// Score two prepared strings.
pub fn score_prepared(algo: SimilarityAlgo, a: &PreparedText, b: &PreparedText) -> u8 {
    use SimilarityAlgo::*;
    let s = match algo {
        Ratio => ratio(a.as_str(), b.as_str()),
        Levenshtein => strsim::normalized_levenshtein(a.as_str(), b.as_str()),
        JaroWinkler => strsim::jaro_winkler(a.as_str(), b.as_str()),
        SorensenDice => strsim::sorensen_dice(a.as_str(), b.as_str()),
        TokenSortRatio => token_sort_ratio(a, b),
        TokenSetRatio => token_set_ratio(a, b),
        WeightedRatio => weighted_ratio(a, b),
    };
    to_percent(s)
}

fn to_percent(s: f64) -> u8 {
    (s.clamp(0.0, 1.0) * 100.0).round() as u8
}

fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_damerau_levenshtein(a, b)
}

fn token_sort_ratio(a: &PreparedText, b: &PreparedText) -> f64 {
    ratio(a.sorted_joined(), b.sorted_joined())
}

fn token_set_ratio(a: &PreparedText, b: &PreparedText) -> f64 {
    let mut sa: Vec<&str> = a.sorted_tokens().iter().map(String::as_str).collect();
    let mut sb: Vec<&str> = b.sorted_tokens().iter().map(String::as_str).collect();
    sa.dedup();
    sb.dedup();
    match (sa.is_empty(), sb.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    // Merge two sorted token lists into intersection and one-sided diffs.
    let (mut common, mut only_a, mut only_b) = (Vec::new(), Vec::new(), Vec::new());
    let (mut i, mut j) = (0, 0);
    while i < sa.len() && j < sb.len() {
        match sa[i].cmp(sb[j]) {
            Ordering::Equal => {
                common.push(sa[i]);
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                only_a.push(sa[i]);
                i += 1;
            }
            Ordering::Greater => {
                only_b.push(sb[j]);
                j += 1;
            }
        }
    }
    only_a.extend_from_slice(&sa[i..]);
    only_b.extend_from_slice(&sb[j..]);

    let t0 = common.join(" ");
    let combine = |rest: &[&str]| -> String {
        let tail = rest.join(" ");
        match (t0.is_empty(), tail.is_empty()) {
            (true, _) => tail,
            (_, true) => t0.clone(),
            _ => format!("{t0} {tail}"),
        }
    };
    let t1 = combine(&only_a);
    let t2 = combine(&only_b);

    ratio(&t0, &t1).max(ratio(&t0, &t2)).max(ratio(&t1, &t2))
}

fn weighted_ratio(a: &PreparedText, b: &PreparedText) -> f64 {
    let base = ratio(a.as_str(), b.as_str());
    if a.token_count() <= 1 && b.token_count() <= 1 {
        return base;
    }
    let sort = token_sort_ratio(a, b) * TOKEN_SCALE;
    let set = token_set_ratio(a, b) * TOKEN_SCALE;
    base.max(sort).max(set)
}

/// Find the best match among candidates. Earlier candidates win ties.
pub fn best_match<'a, I>(query: &str, candidates: I, algo: SimilarityAlgo) -> Option<(&'a str, u8)>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = PreparedText::new(query);
    let mut best: Option<(&'a str, u8)> = None;
    for cand in candidates {
        let s = score_prepared(algo, &query, &PreparedText::new(cand));
        match best {
            None => best = Some((cand, s)),
            Some((_, bs)) if s > bs => best = Some((cand, s)),
            _ => {}
        }
    }
    best
}

/// Return the positions and scores of the `k` best candidates, highest score
/// first. Ties keep candidate order.
pub fn top_k(
    query: &PreparedText,
    candidates: &[PreparedText],
    algo: SimilarityAlgo,
    k: usize,
) -> Vec<(usize, u8)> {
    let mut scored: Vec<(usize, u8)> = candidates
        .iter()
        .enumerate()
        .map(|(pos, cand)| (pos, score_prepared(algo, query, cand)))
        .collect();
    // stable sort: equal scores stay in candidate order
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SimilarityAlgo; 7] = [
        SimilarityAlgo::Ratio,
        SimilarityAlgo::Levenshtein,
        SimilarityAlgo::JaroWinkler,
        SimilarityAlgo::SorensenDice,
        SimilarityAlgo::TokenSortRatio,
        SimilarityAlgo::TokenSetRatio,
        SimilarityAlgo::WeightedRatio,
    ];

    #[test]
    fn identical_strings_score_100() {
        for algo in ALL {
            for s in ["apple", "Green Apple", "  carrot cake ", "x"] {
                assert_eq!(score(algo, s, s), 100, "{algo:?} on {s:?}");
            }
        }
        assert_eq!(score(SimilarityAlgo::WeightedRatio, "", ""), 100);
        assert_eq!(score(SimilarityAlgo::WeightedRatio, "APPLE ", "apple"), 100);
        for algo in ALL {
            assert_eq!(score(algo, "ǅ", "ǅ "), 100, "{algo:?}");
        }
    }

    #[test]
    fn scores_are_symmetric() {
        let pairs = [
            ("appel", "apple"),
            ("red apple", "apple red pie"),
            ("banana", "bananas"),
            ("", "carrot"),
            ("new york mets", "mets new york vs braves"),
        ];
        for algo in ALL {
            for (a, b) in pairs {
                assert_eq!(score(algo, a, b), score(algo, b, a), "{algo:?} {a:?} {b:?}");
            }
        }
    }

    #[test]
    fn transposition_typo_keeps_high_score() {
        assert_eq!(score(SimilarityAlgo::Ratio, "appel", "apple"), 80);
        assert_eq!(score(SimilarityAlgo::WeightedRatio, "appel", "apple"), 80);
        assert_eq!(score(SimilarityAlgo::Levenshtein, "appel", "apple"), 60);
    }

    #[test]
    fn score_degrades_with_edit_distance() {
        let base = "carrot";
        let edits = ["carrot", "carrat", "carrax", "cabrax", "xabrax"];
        let scores: Vec<u8> = edits
            .iter()
            .map(|e| score(SimilarityAlgo::WeightedRatio, base, e))
            .collect();
        for w in scores.windows(2) {
            assert!(w[0] > w[1], "{scores:?}");
        }
    }

    #[test]
    fn token_ratios_ignore_word_order() {
        assert_eq!(score(SimilarityAlgo::TokenSortRatio, "pie apple", "apple pie"), 100);
        assert_eq!(score(SimilarityAlgo::TokenSetRatio, "apple apple pie", "pie apple"), 100);
        assert_eq!(score(SimilarityAlgo::WeightedRatio, "pie apple", "apple pie"), 95);
        assert_eq!(score(SimilarityAlgo::TokenSetRatio, "", "apple"), 0);
    }

    #[test]
    fn best_match_basic() {
        let dict = ["banana", "apple", "carrot"];
        let best = best_match("Aple", dict.iter().copied(), SimilarityAlgo::Ratio).unwrap();
        assert_eq!(best.0, "apple");
        assert_eq!(best.1, 80);
        assert!(best_match("x", std::iter::empty(), SimilarityAlgo::Ratio).is_none());
    }

    #[test]
    fn top_k_breaks_ties_by_position() {
        let cands: Vec<PreparedText> = ["abd", "abc", "abe", "zzz"]
            .iter()
            .map(|s| PreparedText::new(s))
            .collect();
        let q = PreparedText::new("abx");
        let top = top_k(&q, &cands, SimilarityAlgo::Ratio, 3);
        assert_eq!(top, vec![(0, 67), (1, 67), (2, 67)]);
        assert!(top_k(&q, &[], SimilarityAlgo::Ratio, 3).is_empty());
    }
}
