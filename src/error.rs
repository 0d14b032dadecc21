//! Error type shared by every operation in the crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned by encoding, counting, clump finding and search.
pub enum Error {
    /// A byte outside `{A, C, G, T}` where a DNA symbol was required.
    #[error("invalid DNA symbol {:?} at position {position}", symbol_char(.symbol))]
    InvalidSymbol {
        /// Offending byte.
        symbol: u8,
        /// 0-based offset in the input.
        position: usize,
    },
    /// A digit outside `0..=3`.
    #[error("invalid base-4 digit {0}")]
    InvalidDigit(u8),
    /// `k` is zero or wider than the 64-bit encoding allows.
    #[error("k must be in 1..={max}, got {k}")]
    InvalidK {
        /// Requested k.
        k: usize,
        /// Largest accepted k.
        max: usize,
    },
    /// A 4^k table would be too large to allocate.
    #[error("a frequency table for k={k} exceeds capacity (k <= {max})")]
    Capacity {
        /// Requested k.
        k: usize,
        /// Largest k a table may be built for.
        max: usize,
    },
    /// The clump window cannot hold a single k-mer.
    #[error("window length {window} is shorter than k={k}")]
    WindowTooSmall {
        /// Window length L.
        window: usize,
        /// k-mer length.
        k: usize,
    },
    /// A threshold of zero would qualify every k-mer.
    #[error("clump threshold must be at least 1")]
    ZeroThreshold,
    /// Encoded index does not name a k-mer of this length.
    #[error("index {index} is out of range for k={k}")]
    IndexOutOfRange {
        /// Encoded index.
        index: u64,
        /// k-mer length.
        k: usize,
    },
    /// A k-mer removed from a window that does not contain it.
    #[error("k-mer {index} (k={k}) is not in the current window")]
    AbsentKmer {
        /// Encoded index.
        index: u64,
        /// k-mer length.
        k: usize,
    },
    /// Pattern length differs from the table's k.
    #[error("pattern of length {found} does not match k={expected}")]
    PatternLength {
        /// The table's k.
        expected: usize,
        /// Length of the queried pattern.
        found: usize,
    },
    /// Sequence has more k-mers than a `u32` counter can hold.
    #[error("sequence of length {len} is too long to count")]
    SequenceTooLong {
        /// Sequence length.
        len: usize,
    },
    /// Substring search with an empty pattern.
    #[error("search pattern must not be empty")]
    EmptyPattern,
}

fn symbol_char(b: &u8) -> char {
    char::from(*b)
}
