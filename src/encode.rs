//! K-mer encoding: 2-bit symbol mapping and the k-mer <-> index bijection.
//!
//! Conventions
//! - A=0, C=1, G=2, T=3; only uppercase symbols are accepted.
//! - A k-mer is read as a base-4 numeral, most significant symbol first, so
//!   codes are **LSB-aligned** (lower `2k` bits) and sort lexicographically.
//! - `4^k` codes fit in a `u64` for `k <= MAX_K`.

use crate::error::{Error, Result};

/// Longest k-mer the 64-bit encoding supports.
pub const MAX_K: usize = 31;

/// Largest k a dense frequency table is built for (4^14 `u32` counters = 1 GiB).
pub const MAX_TABLE_K: usize = 14;

/// 256-entry LUT: ASCII -> 2-bit (A=0, C=1, G=2, T=3), 0xFF for anything else.
pub static MAP_LUT: [u8; 256] = {
    const X: u8 = 0xFF;
    let mut t = [X; 256];
    t[b'A' as usize] = 0;
    t[b'C' as usize] = 1;
    t[b'G' as usize] = 2;
    t[b'T' as usize] = 3;
    t
};

/// Digit -> symbol.
pub const SYMBOLS: [u8; 4] = *b"ACGT";

/// 2-bit encoding via LUT. `None` for bytes outside `{A, C, G, T}`.
#[inline]
pub fn map_base(b: u8) -> Option<u8> {
    let v = MAP_LUT[b as usize];
    if v <= 3 { Some(v) } else { None }
}

/// Map a DNA symbol to its digit.
pub fn symbol_to_digit(symbol: u8) -> Result<u8> {
    map_base(symbol).ok_or(Error::InvalidSymbol {
        symbol,
        position: 0,
    })
}

/// Map a digit in `0..=3` back to its DNA symbol.
pub fn digit_to_symbol(digit: u8) -> Result<u8> {
    SYMBOLS
        .get(digit as usize)
        .copied()
        .ok_or(Error::InvalidDigit(digit))
}

/// Mask selecting the lower `2k` bits.
#[inline]
pub fn kmer_mask(k: usize) -> u64 {
    debug_assert!(k <= 32);
    if k == 32 {
        u64::MAX
    } else {
        (1u64 << (2 * k)) - 1
    }
}

pub(crate) fn check_k(k: usize) -> Result<()> {
    if k == 0 || k > MAX_K {
        return Err(Error::InvalidK { k, max: MAX_K });
    }
    Ok(())
}

/// Number of slots in a dense table over all k-mers, i.e. `4^k`.
///
/// Fails with [`Error::Capacity`] when `k > MAX_TABLE_K` or `4^k` does not
/// fit the platform's `usize`.
pub fn table_len(k: usize) -> Result<usize> {
    check_k(k)?;
    if k > MAX_TABLE_K {
        return Err(Error::Capacity { k, max: MAX_TABLE_K });
    }
    4usize
        .checked_pow(k as u32)
        .ok_or(Error::Capacity { k, max: MAX_TABLE_K })
}

/// Encode a k-mer to its **LSB-aligned** index in `[0, 4^k)`.
///
/// The empty pattern encodes to 0. Fails on symbols outside `{A, C, G, T}`
/// and on patterns longer than [`MAX_K`].
pub fn encode_kmer(pattern: &[u8]) -> Result<u64> {
    if pattern.len() > MAX_K {
        return Err(Error::InvalidK {
            k: pattern.len(),
            max: MAX_K,
        });
    }
    let mut code: u64 = 0;
    for (position, &symbol) in pattern.iter().enumerate() {
        let v = map_base(symbol).ok_or(Error::InvalidSymbol { symbol, position })?;
        code = (code << 2) | v as u64;
    }
    Ok(code)
}

/// Decode an index back into its k-mer, left-padded with `A` to length `k`.
pub fn decode_kmer(index: u64, k: usize) -> Result<String> {
    check_k(k)?;
    if index > kmer_mask(k) {
        return Err(Error::IndexOutOfRange { index, k });
    }
    Ok(decode_unchecked(index, k))
}

/// Decode without range checks; `index` must be below `4^k` and `1 <= k <= MAX_K`.
pub(crate) fn decode_unchecked(index: u64, k: usize) -> String {
    if k == 1 {
        return char::from(SYMBOLS[(index & 0b11) as usize]).to_string();
    }
    let mut out = vec![SYMBOLS[0]; k];
    let mut rest = index;
    for slot in out.iter_mut().rev() {
        *slot = SYMBOLS[(rest & 0b11) as usize];
        rest >>= 2;
    }
    out.into_iter().map(char::from).collect()
}
