//! Dense k-mer frequency tables indexed by encoded k-mer.

use std::collections::BTreeSet;

use crate::dna::DnaSeq;
use crate::encode::{decode_unchecked, encode_kmer, table_len};
use crate::error::{Error, Result};

/// Occurrence count for every one of the `4^k` k-mers.
///
/// Slot `i` holds the count of the k-mer whose encoding is `i`; every slot is
/// always present, zero or not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    k: usize,
    counts: Vec<u32>,
}

impl FrequencyTable {
    /// All-zero table for k-mers of length `k`.
    pub fn zeroed(k: usize) -> Result<Self> {
        let slots = table_len(k)?;
        tracing::trace!(k, slots, "allocating frequency table");
        Ok(FrequencyTable {
            k,
            counts: vec![0; slots],
        })
    }

    pub(crate) fn from_seq(seq: DnaSeq<'_>, k: usize) -> Result<Self> {
        check_countable(seq.num_kmers(k), seq.len())?;
        let mut table = Self::zeroed(k)?;
        for code in seq.kmer_codes(k)? {
            table.increment(code);
        }
        Ok(table)
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of slots, `4^k`.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false; a table has at least four slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn into_counts(self) -> Vec<u32> {
        self.counts
    }

    /// Count stored at `index`, `None` past `4^k`.
    #[inline]
    pub fn get(&self, index: u64) -> Option<u32> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.counts.get(i))
            .copied()
    }

    /// Count of a k-mer given as text.
    pub fn count_of(&self, pattern: &[u8]) -> Result<u32> {
        if pattern.len() != self.k {
            return Err(Error::PatternLength {
                expected: self.k,
                found: pattern.len(),
            });
        }
        let index = encode_kmer(pattern)?;
        Ok(self.counts[index as usize])
    }

    /// Sum of all counts; equals the number of windows scanned.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Non-zero `(index, count)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (i as u64, c))
    }

    /// Highest count in the table.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Every k-mer sharing the highest count, with that count.
    ///
    /// An all-zero table has no frequent words.
    pub fn most_frequent(&self) -> (BTreeSet<String>, u32) {
        let max = self.max_count();
        if max == 0 {
            return (BTreeSet::new(), 0);
        }
        let words = self
            .iter()
            .filter(|&(_, c)| c == max)
            .map(|(i, _)| decode_unchecked(i, self.k))
            .collect();
        (words, max)
    }

    /// Add one occurrence, returning the new count.
    #[inline]
    pub(crate) fn increment(&mut self, code: u64) -> u32 {
        let slot = &mut self.counts[code as usize];
        *slot += 1;
        *slot
    }

    /// Remove one occurrence of a k-mer previously added.
    #[inline]
    pub(crate) fn decrement(&mut self, code: u64) {
        let slot = &mut self.counts[code as usize];
        debug_assert!(*slot > 0, "decrement of an absent k-mer");
        *slot -= 1;
    }
}

/// Counters are `u32`; a text with more than `u32::MAX` k-mers fails with
/// [`Error::SequenceTooLong`].
fn check_countable(kmers: usize, len: usize) -> Result<()> {
    if kmers > u32::MAX as usize {
        return Err(Error::SequenceTooLong { len });
    }
    Ok(())
}

/// Count every k-mer of `text` into a table of size `4^k`.
///
/// Overlapping occurrences all count. A text shorter than `k` yields an
/// all-zero table. Counters are `u32`, so a text with more than `u32::MAX`
/// k-mers is rejected with [`Error::SequenceTooLong`].
pub fn compute_frequencies(text: &[u8], k: usize) -> Result<FrequencyTable> {
    let seq = DnaSeq::new(text)?;
    FrequencyTable::from_seq(seq, k)
}

/// Most frequent k-mers of `text` and their shared count.
pub fn frequent_words(text: &[u8], k: usize) -> Result<(BTreeSet<String>, u32)> {
    Ok(compute_frequencies(text, k)?.most_frequent())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_windows_are_counted() {
        let t = compute_frequencies(b"ACGCGGCTCTGAAA", 2).unwrap();
        assert_eq!(t.len(), 16);
        assert_eq!(t.total(), 13);
        assert_eq!(t.count_of(b"CG").unwrap(), 2);
        assert_eq!(t.count_of(b"AA").unwrap(), 2);
        assert_eq!(t.count_of(b"TT").unwrap(), 0);
    }

    #[test]
    fn short_text_gives_zero_table() {
        let t = compute_frequencies(b"AC", 3).unwrap();
        assert_eq!(t.len(), 64);
        assert_eq!(t.total(), 0);
        assert_eq!(t.most_frequent(), (BTreeSet::new(), 0));
    }

    #[test]
    fn get_is_bounded() {
        let t = compute_frequencies(b"AAAA", 1).unwrap();
        assert_eq!(t.get(0), Some(4));
        assert_eq!(t.get(3), Some(0));
        assert_eq!(t.get(4), None);
    }

    #[test]
    fn count_of_checks_length() {
        let t = compute_frequencies(b"ACGT", 2).unwrap();
        assert_eq!(
            t.count_of(b"ACG"),
            Err(Error::PatternLength {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn count_width_limits_sequence_length() {
        let max = u32::MAX as usize;
        assert_eq!(check_countable(max, max), Ok(()));
        assert_eq!(
            check_countable(max + 1, max + 1),
            Err(Error::SequenceTooLong { len: max + 1 })
        );
    }

    #[test]
    fn rejects_oversized_tables() {
        assert!(matches!(
            compute_frequencies(b"ACGT", 15),
            Err(Error::Capacity { k: 15, .. })
        ));
        assert!(matches!(
            compute_frequencies(b"ACGT", 0),
            Err(Error::InvalidK { k: 0, .. })
        ));
    }
}
