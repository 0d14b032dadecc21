//! Validated DNA views, rolling k-mer codes and reverse complement.

use crate::encode::{MAP_LUT, SYMBOLS, check_k, kmer_mask, map_base};
use crate::error::{Error, Result};

/// Borrowed sequence known to contain only `A`, `C`, `G` and `T`.
///
/// Every public entry point validates its input into a `DnaSeq` first, so the
/// scanning code below never sees an unmapped byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DnaSeq<'a> {
    bytes: &'a [u8],
}

impl<'a> DnaSeq<'a> {
    /// Validate `bytes`, reporting the first symbol outside `{A, C, G, T}`.
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        match bytes.iter().position(|&b| map_base(b).is_none()) {
            Some(position) => Err(Error::InvalidSymbol {
                symbol: bytes[position],
                position,
            }),
            None => Ok(Self { bytes }),
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of k-mer start positions, `len - k + 1`, or 0 when `len < k`.
    #[inline]
    pub fn num_kmers(&self, k: usize) -> usize {
        if self.bytes.len() < k {
            0
        } else {
            self.bytes.len() - k + 1
        }
    }

    /// Sub-view `[start, end)`; the range must lie within the view.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> DnaSeq<'a> {
        DnaSeq {
            bytes: &self.bytes[start..end],
        }
    }

    /// Codes of every k-mer in order of start position.
    pub fn kmer_codes(&self, k: usize) -> Result<KmerCodes<'a>> {
        check_k(k)?;
        Ok(KmerCodes::new(self.bytes, k))
    }

    /// Reverse complement; cannot fail on a validated view.
    pub fn reverse_complement(&self) -> String {
        self.bytes
            .iter()
            .rev()
            .map(|&b| char::from(SYMBOLS[(MAP_LUT[b as usize] ^ 0b11) as usize]))
            .collect()
    }
}

/// Rolling 2-bit encoder over a validated sequence.
///
/// Yields the LSB-aligned code of the k-mer starting at 0, 1, ..., `len - k`,
/// each in O(1): shift in the entering symbol and mask to `2k` bits.
#[derive(Clone, Debug)]
pub struct KmerCodes<'a> {
    seq: &'a [u8],
    mask: u64,
    code: u64,
    pos: usize,
}

impl<'a> KmerCodes<'a> {
    fn new(seq: &'a [u8], k: usize) -> Self {
        let mut code = 0u64;
        let primed = (k - 1).min(seq.len());
        for &b in &seq[..primed] {
            code = (code << 2) | MAP_LUT[b as usize] as u64;
        }
        // Short sequences start exhausted.
        let pos = if seq.len() < k { seq.len() } else { k - 1 };
        KmerCodes {
            seq,
            mask: kmer_mask(k),
            code,
            pos,
        }
    }
}

impl Iterator for KmerCodes<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        let &b = self.seq.get(self.pos)?;
        let v = MAP_LUT[b as usize];
        debug_assert!(v <= 3, "unvalidated byte in DnaSeq");
        self.code = ((self.code << 2) | v as u64) & self.mask;
        self.pos += 1;
        Some(self.code)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.seq.len() - self.pos;
        (n, Some(n))
    }
}

impl ExactSizeIterator for KmerCodes<'_> {}

/// Reverse-complement a DNA string.
///
/// Fails with [`Error::InvalidSymbol`] on the first byte outside
/// `{A, C, G, T}`.
pub fn reverse_complement(text: &[u8]) -> Result<String> {
    Ok(DnaSeq::new(text)?.reverse_complement())
}
