//! Literal substring search reporting overlapping matches.

use memchr::memmem::Finder;

use crate::error::{Error, Result};

/// Lazy iterator over 0-based start positions of `pattern` in `text`.
///
/// After a hit at `p` the search resumes at `p + 1`, so overlapping matches
/// are all reported.
pub struct Occurrences<'t, 'p> {
    text: &'t [u8],
    finder: Finder<'p>,
    pos: usize,
}

impl Iterator for Occurrences<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let hay = self.text.get(self.pos..)?;
        match self.finder.find(hay) {
            Some(offset) => {
                let at = self.pos + offset;
                self.pos = at + 1;
                Some(at)
            }
            None => {
                self.pos = self.text.len() + 1;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Occurrences<'_, '_> {}

/// Start a lazy search. Fails on an empty pattern.
pub fn occurrences<'t, 'p>(text: &'t [u8], pattern: &'p [u8]) -> Result<Occurrences<'t, 'p>> {
    if pattern.is_empty() {
        return Err(Error::EmptyPattern);
    }
    Ok(Occurrences {
        text,
        finder: Finder::new(pattern),
        pos: 0,
    })
}

/// All start positions of `pattern` in `text`, overlaps included.
pub fn find_all_occurrences(text: &[u8], pattern: &[u8]) -> Result<Vec<usize>> {
    Ok(occurrences(text, pattern)?.collect())
}

/// Number of (possibly overlapping) occurrences of `pattern` in `text`.
pub fn count_occurrences(text: &[u8], pattern: &[u8]) -> Result<usize> {
    Ok(occurrences(text, pattern)?.count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_matches() {
        assert_eq!(find_all_occurrences(b"AAAA", b"AA").unwrap(), vec![0, 1, 2]);
        assert_eq!(count_occurrences(b"GCGCG", b"GCG").unwrap(), 2);
    }

    #[test]
    fn pattern_longer_than_text() {
        assert!(find_all_occurrences(b"ACG", b"ACGT").unwrap().is_empty());
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert_eq!(count_occurrences(b"ACGT", b""), Err(Error::EmptyPattern));
    }

    #[test]
    fn iterator_stays_exhausted() {
        let mut it = occurrences(b"ACGT", b"T").unwrap();
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
