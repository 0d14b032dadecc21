use std::collections::{BTreeSet, HashMap};

use kmer_clumps::{Error, find_clumps, frequent_words};
use proptest::prelude::*;

/// Recount every window from scratch.
fn naive_clumps(seq: &[u8], k: usize, window: usize, t: usize) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    if seq.len() < window {
        return out;
    }
    for w in seq.windows(window) {
        let mut counts = HashMap::<&[u8], usize>::new();
        for kmer in w.windows(k) {
            *counts.entry(kmer).or_default() += 1;
        }
        for (kmer, c) in counts {
            if c >= t {
                out.insert(String::from_utf8(kmer.to_vec()).unwrap());
            }
        }
    }
    out
}

fn set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

const REPEATS: &[u8] = b"CGGACTCGACAGATGTGAAGAACGAAAATGTGACGACGAACGAACGACGAACGACGACGACGACGACGAACGAACGAACGACGACGACGACGACGACGACGACGACGACGACGACGACGACGACGACGACGACGACG";

#[test]
fn test_finds_repeated_clump() {
    let clumps = find_clumps(REPEATS, 5, 50, 4).unwrap();
    assert!(clumps.contains("CGACG"));
    assert_eq!(
        clumps,
        set(&["AACGA", "ACGAA", "ACGAC", "CGAAC", "CGACG", "GAACG", "GACGA"])
    );
}

#[test]
fn test_textbook_sample() {
    let genome = b"CGGACTCGACAGATGTGAAGAACGACAATGTGAAGACTCGACACGACAGAGTGAAGAGAAGAGGAAACATTGTAA";
    assert_eq!(
        find_clumps(genome, 5, 50, 4).unwrap(),
        set(&["CGACA", "GAAGA"])
    );
    assert_eq!(
        find_clumps(genome, 5, 50, 3).unwrap(),
        set(&["CGACA", "GAAGA", "GTGAA", "TGAAG"])
    );
}

#[test]
fn test_sequence_shorter_than_window_is_empty() {
    assert!(find_clumps(b"ACGTACGT", 2, 50, 1).unwrap().is_empty());
    assert!(find_clumps(b"", 3, 10, 1).unwrap().is_empty());
}

#[test]
fn test_invalid_input_is_rejected() {
    assert_eq!(
        find_clumps(b"ACGTNACGT", 2, 4, 2),
        Err(Error::InvalidSymbol {
            symbol: b'N',
            position: 4
        })
    );
    assert_eq!(
        find_clumps(b"ACGT", 3, 2, 1),
        Err(Error::WindowTooSmall { window: 2, k: 3 })
    );
    assert_eq!(find_clumps(b"ACGT", 2, 4, 0), Err(Error::ZeroThreshold));
    assert!(matches!(
        find_clumps(b"ACGT", 0, 4, 1),
        Err(Error::InvalidK { k: 0, .. })
    ));
    assert!(matches!(
        find_clumps(b"ACGT", 16, 20, 1),
        Err(Error::Capacity { k: 16, .. })
    ));
}

#[test]
fn test_threshold_one_is_every_kmer() {
    let seq = b"ACGTTGCAAGCT";
    let every: BTreeSet<String> = seq
        .windows(3)
        .map(|w| String::from_utf8(w.to_vec()).unwrap())
        .collect();
    assert_eq!(find_clumps(seq, 3, 5, 1).unwrap(), every);
}

#[test]
fn test_frequent_words() {
    let (words, count) = frequent_words(b"ACGTTGCATGTCGCATGATGCATGAGAGCT", 4).unwrap();
    assert_eq!(count, 3);
    assert_eq!(words, set(&["CATG", "GCAT"]));
}

proptest! {
    #[test]
    fn prop_incremental_scan_matches_naive(
        seq in prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), 0..250),
        k in 1usize..=4,
        extra in 0usize..30,
        t in 1usize..5,
    ) {
        let window = k + extra;
        prop_assert_eq!(
            find_clumps(&seq, k, window, t).unwrap(),
            naive_clumps(&seq, k, window, t)
        );
    }
}
