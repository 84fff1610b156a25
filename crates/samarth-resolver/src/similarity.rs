//! Pluggable string-similarity scorers.
//!
//! Scores are integers in `0..=100`; 100 means identical. Inputs are expected
//! to be normalized (trimmed, lowercase) by the caller.

use samarth_config::ScorerKind;

/// A string-similarity function on the 0..=100 scale.
pub trait Similarity: Send + Sync {
    fn score(&self, a: &str, b: &str) -> u8;

    fn name(&self) -> &'static str;
}

/// Normalized Levenshtein similarity: `100 * (1 - distance / max_len)`, rounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl Similarity for LevenshteinRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        to_percent(strsim::normalized_levenshtein(a, b))
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Jaro-Winkler similarity scaled to 0..=100, rounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl Similarity for JaroWinkler {
    fn score(&self, a: &str, b: &str) -> u8 {
        to_percent(strsim::jaro_winkler(a, b))
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

/// Build the scorer selected in configuration.
#[must_use]
pub fn scorer_for(kind: ScorerKind) -> Box<dyn Similarity> {
    match kind {
        ScorerKind::Levenshtein => Box::new(LevenshteinRatio),
        ScorerKind::JaroWinkler => Box::new(JaroWinkler),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=100
fn to_percent(ratio: f64) -> u8 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("gujarat", "gujarat", 100)]
    #[case("wheet", "wheat", 80)]
    #[case("maharastra", "maharashtra", 91)]
    #[case("abcdefghijklmn", "abcdefghijkxyz", 79)]
    #[case("rice", "cotton", 0)]
    #[case("", "", 100)]
    fn levenshtein_scores(#[case] a: &str, #[case] b: &str, #[case] expected: u8) {
        assert_eq!(LevenshteinRatio.score(a, b), expected);
    }

    #[test]
    fn jaro_winkler_rewards_shared_prefix() {
        let close = JaroWinkler.score("karnatak", "karnataka");
        let far = JaroWinkler.score("karnatak", "kerala");
        assert!(close > far, "{close} <= {far}");
        assert_eq!(JaroWinkler.score("maize", "maize"), 100);
    }

    #[test]
    fn scorer_for_maps_kinds() {
        assert_eq!(scorer_for(ScorerKind::Levenshtein).name(), "levenshtein");
        assert_eq!(scorer_for(ScorerKind::JaroWinkler).name(), "jaro_winkler");
    }
}
