//! Property-based checks of the quantified invariants.
//!
//! Keywords and phrases are drawn from a tiny 4-symbol alphabet on purpose:
//! it keeps collisions (shared prefixes, overlapping matches, repeated
//! substrings) common, which is exactly the part of the automaton that's
//! easy to get subtly wrong.

use std::collections::BTreeSet;

use ac_index::Index;
use proptest::prelude::*;

fn naive_matches(keywords: &[Vec<u8>], phrase: &[u8]) -> BTreeSet<(usize, usize, usize)> {
    let mut out = BTreeSet::new();
    for (ki, kw) in keywords.iter().enumerate() {
        if kw.is_empty() {
            for i in 0..=phrase.len() {
                out.insert((i, i, ki));
            }
            continue;
        }
        if kw.len() > phrase.len() {
            continue;
        }
        for start in 0..=(phrase.len() - kw.len()) {
            if &phrase[start..start + kw.len()] == kw.as_slice() {
                out.insert((start, start + kw.len(), ki));
            }
        }
    }
    out
}

fn build(keywords: &[Vec<u8>]) -> Index<usize, usize> {
    let mut index = Index::new();
    for (ki, kw) in keywords.iter().enumerate() {
        index.insert(kw, ki).unwrap();
    }
    index.finalize().unwrap();
    index
}

fn keyword_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..4)
}

proptest! {
    #[test]
    fn match_completeness_and_span_correctness(
        keywords in prop::collection::vec(keyword_strategy(), 0..6),
        phrase in prop::collection::vec(0u8..4, 0..24),
    ) {
        let index = build(&keywords);

        let mut out = Vec::new();
        index.query_into_vec(&phrase, &mut out).unwrap();

        let got: BTreeSet<(usize, usize, usize)> = out
            .iter()
            .map(|m| (m.start(), m.end(), *m.payload()))
            .collect();
        let want = naive_matches(&keywords, &phrase);
        prop_assert_eq!(got, want);

        for m in &out {
            let kw = &keywords[*m.payload()];
            prop_assert!(m.start() <= m.end());
            prop_assert!(m.end() <= phrase.len());
            prop_assert_eq!(m.end() - m.start(), kw.len());
            prop_assert_eq!(&phrase[m.start()..m.end()], kw.as_slice());
        }
    }

    #[test]
    fn ordering_is_ascending_by_end(
        keywords in prop::collection::vec(prop::collection::vec(0u8..4, 1..4), 1..6),
        phrase in prop::collection::vec(0u8..4, 0..24),
    ) {
        let index = build(&keywords);
        let mut out = Vec::new();
        index.query_into_vec(&phrase, &mut out).unwrap();

        let ends: Vec<usize> = out.iter().map(|m| m.end()).collect();
        let mut sorted = ends.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ends, sorted);
    }

    #[test]
    fn requerying_a_finalized_index_is_idempotent(
        keywords in prop::collection::vec(prop::collection::vec(0u8..4, 1..4), 1..6),
        phrase in prop::collection::vec(0u8..4, 0..24),
    ) {
        let index = build(&keywords);

        let mut first = Vec::new();
        index.query_into_vec(&phrase, &mut first).unwrap();
        let first: Vec<_> = first.iter().map(|m| (m.start(), m.end(), *m.payload())).collect();

        let mut second = Vec::new();
        index.query_into_vec(&phrase, &mut second).unwrap();
        let second: Vec<_> = second.iter().map(|m| (m.start(), m.end(), *m.payload())).collect();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn payload_round_trip(
        keywords in prop::collection::vec(prop::collection::vec(0u8..4, 1..4), 1..6),
        phrase in prop::collection::vec(0u8..4, 0..24),
    ) {
        let index = build(&keywords);
        let mut out = Vec::new();
        index.query_into_vec(&phrase, &mut out).unwrap();

        let reported: BTreeSet<usize> = out.iter().map(|m| *m.payload()).collect();

        for (ki, kw) in keywords.iter().enumerate() {
            let occurs = kw.len() <= phrase.len() && phrase.windows(kw.len()).any(|w| w == kw.as_slice());
            prop_assert_eq!(reported.contains(&ki), occurs);
        }
    }

    #[test]
    fn teardown_releases_exactly_one_payload_per_insert(
        keywords in prop::collection::vec(keyword_strategy(), 0..8),
    ) {
        let index = build(&keywords);

        let mut released = Vec::new();
        index.destroy(|payload| released.push(payload));
        released.sort_unstable();

        let expected: Vec<usize> = (0..keywords.len()).collect();
        prop_assert_eq!(released, expected);
    }
}
