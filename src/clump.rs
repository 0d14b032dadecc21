//! Clump finding: k-mers that reach a count threshold inside some window.
//!
//! The first window is counted with the table builder; after that the window
//! slides one base at a time and the table is patched in place (one k-mer
//! leaves, one enters), so a scan over `n` bases costs O(n + 4^k) rather than
//! recounting every window.

use std::collections::BTreeSet;

use crate::dna::DnaSeq;
use crate::encode::{decode_unchecked, table_len};
use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// Clump search parameters: k-mer length, window length `L`, threshold `t`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClumpConfig {
    k: usize,
    window: usize,
    threshold: usize,
}

impl Default for ClumpConfig {
    fn default() -> Self {
        Self {
            k: 9,
            window: 500,
            threshold: 3,
        }
    }
}

impl ClumpConfig {
    pub fn new(k: usize, window: usize, threshold: usize) -> Self {
        Self {
            k,
            window,
            threshold,
        }
    }
    /// Set the k-mer length.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }
    /// Set the window length `L`.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }
    /// Set the minimum number of occurrences `t` inside one window.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }
    pub fn window(&self) -> usize {
        self.window
    }
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Check the parameters without touching a sequence.
    pub fn validate(&self) -> Result<()> {
        table_len(self.k)?;
        if self.window < self.k {
            return Err(Error::WindowTooSmall {
                window: self.window,
                k: self.k,
            });
        }
        if self.threshold == 0 {
            return Err(Error::ZeroThreshold);
        }
        Ok(())
    }

    /// Every k-mer occurring at least `threshold` times in some window.
    ///
    /// A sequence shorter than the window has no windows and yields an empty
    /// set.
    pub fn find(&self, sequence: &[u8]) -> Result<BTreeSet<String>> {
        self.validate()?;
        let seq = DnaSeq::new(sequence)?;
        if seq.len() < self.window {
            tracing::debug!(
                len = seq.len(),
                window = self.window,
                "sequence shorter than window, no clumps"
            );
            return Ok(BTreeSet::new());
        }

        tracing::debug!(
            len = seq.len(),
            k = self.k,
            window = self.window,
            threshold = self.threshold,
            "scanning for clumps"
        );

        let first = FrequencyTable::from_seq(seq.slice(0, self.window), self.k)?;
        let threshold = u32::try_from(self.threshold).unwrap_or(u32::MAX);
        let mut scanner = ClumpScanner::new(first, threshold);

        // Window starting at s drops the k-mer at s-1 and gains the one at s+L-k.
        let leaving = seq.kmer_codes(self.k)?;
        let entering = seq.kmer_codes(self.k)?.skip(self.window - self.k + 1);
        for (out, inn) in leaving.zip(entering) {
            scanner.slide(out, inn)?;
        }

        tracing::debug!(clumps = scanner.marked(), "clump scan finished");
        Ok(scanner.into_clumps())
    }
}

/// Sliding-window state: the current window's counts plus a sticky
/// "reached the threshold" flag per k-mer.
#[derive(Clone, Debug)]
pub struct ClumpScanner {
    table: FrequencyTable,
    qualifies: Vec<bool>,
    threshold: u32,
    marked: usize,
}

impl ClumpScanner {
    /// Start from the counts of the first window, marking everything already
    /// at or above `threshold`.
    pub fn new(table: FrequencyTable, threshold: u32) -> Self {
        let qualifies: Vec<bool> = table.counts().iter().map(|&c| c >= threshold).collect();
        let marked = qualifies.iter().filter(|&&q| q).count();
        ClumpScanner {
            table,
            qualifies,
            threshold,
            marked,
        }
    }

    /// Move the window one base to the right.
    ///
    /// Marks are never cleared: a k-mer that reached the threshold in an
    /// earlier window stays a clump.
    ///
    /// Both codes must name k-mers of this table's k, and `leaving` must be
    /// present in the current window; otherwise the table is left untouched.
    #[inline]
    pub fn slide(&mut self, leaving: u64, entering: u64) -> Result<()> {
        let k = self.table.k();
        match self.table.get(leaving) {
            None => return Err(Error::IndexOutOfRange { index: leaving, k }),
            Some(0) => return Err(Error::AbsentKmer { index: leaving, k }),
            Some(_) => {}
        }
        if self.table.get(entering).is_none() {
            return Err(Error::IndexOutOfRange { index: entering, k });
        }
        self.table.decrement(leaving);
        let count = self.table.increment(entering);
        if count >= self.threshold {
            let flag = &mut self.qualifies[entering as usize];
            if !*flag {
                *flag = true;
                self.marked += 1;
            }
        }
        Ok(())
    }

    /// Counts of the current window.
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn is_marked(&self, index: u64) -> bool {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.qualifies.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// Number of distinct k-mers marked so far.
    pub fn marked(&self) -> usize {
        self.marked
    }

    /// Decode every marked index.
    pub fn into_clumps(self) -> BTreeSet<String> {
        let k = self.table.k();
        self.qualifies
            .iter()
            .enumerate()
            .filter(|&(_, &q)| q)
            .map(|(i, _)| decode_unchecked(i as u64, k))
            .collect()
    }
}

/// Find every k-mer occurring at least `threshold` times within some window of
/// length `window` in `sequence`.
pub fn find_clumps(
    sequence: &[u8],
    k: usize,
    window: usize,
    threshold: usize,
) -> Result<BTreeSet<String>> {
    ClumpConfig::new(k, window, threshold).find(sequence)
}
