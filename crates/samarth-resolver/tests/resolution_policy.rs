//! Resolution policy: exact-first precedence, threshold boundary, tie-break order.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;
use samarth_core::{AliasEntry, Domain};
use samarth_resolver::{AliasTable, NameResolver, Resolution, Similarity};

/// Scorer returning fixed scores per alias, for boundary tests.
struct FixedScores(HashMap<&'static str, u8>);

impl Similarity for FixedScores {
    fn score(&self, _a: &str, b: &str) -> u8 {
        self.0.get(b).copied().unwrap_or(0)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

fn resolver_with(aliases: &[(&str, &str)], scores: &[(&'static str, u8)]) -> NameResolver {
    let table = AliasTable::from_entries(
        aliases.iter().map(|(c, a)| AliasEntry::new(*c, *a)),
        [],
    );
    NameResolver::new(table).with_scorer(Box::new(FixedScores(scores.iter().copied().collect())))
}

#[rstest]
#[case(80, Some("GJ"))]
#[case(79, None)]
#[case(100, Some("GJ"))]
#[case(0, None)]
fn threshold_boundary(#[case] score: u8, #[case] expected: Option<&str>) {
    let resolver = resolver_with(&[("GJ", "gujarat")], &[("gujarat", score)]);
    assert_eq!(resolver.resolve("gujrat", Domain::State).as_deref(), expected);
}

#[test]
fn exact_match_beats_higher_fuzzy_scores() {
    // The stub gives the non-exact alias a perfect score; exact must still win.
    let resolver = resolver_with(
        &[("XX", "gujarath"), ("GJ", "gujarat")],
        &[("gujarath", 100), ("gujarat", 0)],
    );
    assert_eq!(
        resolver.resolve_detailed("Gujarat", Domain::State),
        Resolution::Exact {
            canonical_code: "GJ".into(),
            alias: "gujarat".into()
        }
    );
}

#[test]
fn fuzzy_ties_go_to_first_alias_in_table() {
    let resolver = resolver_with(
        &[("AA", "alpha"), ("BB", "beta"), ("CC", "gamma")],
        &[("alpha", 85), ("beta", 90), ("gamma", 90)],
    );
    for _ in 0..3 {
        assert_eq!(resolver.resolve("delta", Domain::State).as_deref(), Some("BB"));
    }
}

#[test]
fn not_found_reports_best_candidate() {
    let resolver = resolver_with(&[("GJ", "gujarat"), ("MH", "maharashtra")], &[("gujarat", 40), ("maharashtra", 60)]);
    match resolver.resolve_detailed("atlantis", Domain::State) {
        Resolution::NotFound { best: Some(best) } => {
            assert_eq!(best.canonical_code, "MH");
            assert_eq!(best.score, 60);
        }
        other => panic!("expected NotFound with candidate, got {other:?}"),
    }
}

#[test]
fn lowered_threshold_admits_weaker_matches() {
    let resolver = resolver_with(&[("GJ", "gujarat")], &[("gujarat", 70)])
        .with_threshold(70)
        .unwrap();
    assert_eq!(resolver.resolve("gjarat", Domain::State).as_deref(), Some("GJ"));
}

#[test]
fn levenshtein_boundary_with_real_scorer() {
    let table = AliasTable::from_entries(
        [],
        [
            AliasEntry::new("WHEAT", "wheat"),
            AliasEntry::new("LONG", "abcdefghijklmn"),
        ],
    );
    let resolver = NameResolver::new(table);
    // one edit over five characters scores exactly 80
    assert_eq!(resolver.resolve("wheet", Domain::Crop).as_deref(), Some("WHEAT"));
    // three edits over fourteen characters scores 79
    assert_eq!(resolver.resolve("abcdefghijkxyz", Domain::Crop), None);
}
