//! Dense k-mer counting and clump finding over DNA sequences.
//!
//! - Bijective k-mer <-> `u64` encoding (A=0, C=1, G=2, T=3, MSB first)
//! - Dense `4^k` frequency tables built with a rolling 2-bit encoder
//! - Sliding-window clump finding with an incrementally patched table
//! - Reverse complement and overlapping literal search as supporting primitives
//!
//! Inputs are validated at each public entry point: any byte outside
//! `{A, C, G, T}` is reported as [`Error::InvalidSymbol`] rather than mapped to a
//! sentinel.
//!
//! ```
//! use kmer_clumps::{decode_kmer, encode_kmer, find_clumps};
//!
//! assert_eq!(encode_kmer(b"TT").unwrap(), 15);
//! assert_eq!(decode_kmer(0, 2).unwrap(), "AA");
//!
//! let clumps = find_clumps(b"ACACACGT", 2, 6, 3).unwrap();
//! assert!(clumps.contains("AC"));
//! ```

pub mod clump;
pub mod dna;
pub mod encode;
mod error;
pub mod freq;
pub mod search;

pub use clump::{ClumpConfig, ClumpScanner, find_clumps};
pub use dna::{DnaSeq, KmerCodes, reverse_complement};
pub use encode::{MAX_K, MAX_TABLE_K, decode_kmer, digit_to_symbol, encode_kmer, symbol_to_digit};
pub use error::{Error, Result};
pub use freq::{FrequencyTable, compute_frequencies, frequent_words};
pub use search::{Occurrences, count_occurrences, find_all_occurrences, occurrences};
