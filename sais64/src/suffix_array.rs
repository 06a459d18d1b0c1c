// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{
    error::{SaisError, try_alloc},
    histogram::ALPHABET_SIZE,
    lcp, plcp, sais,
};

/// A suffix array for a byte string.
///
/// This owns the suffix array buffer and borrows the text it was built for, so derived arrays can
/// be computed without passing the text around.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuffixArray<'a> {
    data: &'a [u8],
    inner: Vec<i64>,
}

impl<'a> SuffixArray<'a> {
    /// Creates a new `SuffixArray` for `data`.
    ///
    /// This operation is *O*(*n*).
    ///
    /// # Errors
    ///
    /// Returns [`SaisError::OutOfMemory`] if the suffix array or the construction scratch cannot
    /// be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use sais64::SuffixArray;
    ///
    /// let data = b"Hello, world!";
    /// let sa = SuffixArray::new(data)?;
    ///
    /// assert_eq!(sa.len(), data.len());
    /// # Ok::<(), sais64::SaisError>(())
    /// ```
    pub fn new(data: &'a [u8]) -> Result<Self, SaisError> {
        let mut inner = try_alloc(data.len())?;
        sais::sais64(data, &mut inner, None)?;

        Ok(Self { data, inner })
    }

    /// Creates a new `SuffixArray` for `data` along with the number of occurrences of each byte
    /// value in `data`.
    ///
    /// # Errors
    ///
    /// Returns [`SaisError::OutOfMemory`] if an allocation fails.
    pub fn with_frequencies(data: &'a [u8]) -> Result<(Self, [i64; ALPHABET_SIZE]), SaisError> {
        let mut inner = try_alloc(data.len())?;
        let mut freq = [0; ALPHABET_SIZE];
        sais::sais64(data, &mut inner, Some(&mut freq))?;

        Ok((Self { data, inner }, freq))
    }

    /// Returns the text this suffix array was built for.
    #[must_use]
    pub fn text(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the positions of all suffixes in sorted order.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.inner
    }

    /// Consumes the suffix array and returns the underlying buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<i64> {
        self.inner
    }

    /// Returns the number of suffixes, which is the length of the text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Computes the permuted longest-common-prefix array, indexed by text position.
    ///
    /// See [`plcp()`](crate::plcp()) for details.
    ///
    /// # Errors
    ///
    /// Returns [`SaisError::OutOfMemory`] if the array cannot be allocated.
    pub fn plcp(&self) -> Result<Vec<i64>, SaisError> {
        let mut plcp = try_alloc(self.len())?;
        plcp::plcp(self.data, &self.inner, &mut plcp)?;

        Ok(plcp)
    }

    /// Computes the longest-common-prefix array, indexed by rank.
    ///
    /// This operation is *O*(*n*).
    ///
    /// # Errors
    ///
    /// Returns [`SaisError::OutOfMemory`] if an allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use sais64::SuffixArray;
    ///
    /// let sa = SuffixArray::new(b"banana")?;
    ///
    /// assert_eq!(sa.lcp()?, [0, 1, 3, 0, 0, 2]);
    /// # Ok::<(), sais64::SaisError>(())
    /// ```
    pub fn lcp(&self) -> Result<Vec<i64>, SaisError> {
        let plcp = self.plcp()?;
        let mut lcp = try_alloc(self.len())?;
        lcp::lcp(&plcp, &self.inner, &mut lcp)?;

        Ok(lcp)
    }
}

impl AsRef<[i64]> for SuffixArray<'_> {
    fn as_ref(&self) -> &[i64] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banana() {
        let sa = SuffixArray::new(b"banana").unwrap();

        assert_eq!(sa.as_slice(), [5, 3, 1, 0, 4, 2]);
        assert_eq!(sa.plcp().unwrap(), [0, 3, 2, 1, 0, 0]);
        assert_eq!(sa.lcp().unwrap(), [0, 1, 3, 0, 0, 2]);
    }

    #[test]
    fn no_sentinel_needed() {
        let with_zero = SuffixArray::new(b"Hello, world!\0").unwrap();
        let without_zero = SuffixArray::new(b"Hello, world!").unwrap();

        // The trailing zero is the smallest suffix and shifts nothing else
        assert_eq!(with_zero.as_slice()[0], 13);
        assert_eq!(&with_zero.as_slice()[1..], without_zero.as_slice());
    }

    #[test]
    fn frequencies_sum_to_length() {
        let data = b"The quick brown fox jumped over the lazy dog because the fox was quick";
        let (sa, freq) = SuffixArray::with_frequencies(data).unwrap();

        assert_eq!(freq.iter().sum::<i64>(), sa.len() as i64);
        assert_eq!(freq[usize::from(b'q')], 2);
    }

    #[test]
    fn empty() {
        let sa = SuffixArray::new(b"").unwrap();

        assert!(sa.is_empty());
        assert!(sa.lcp().unwrap().is_empty());
    }

    #[test]
    fn single_byte() {
        let sa = SuffixArray::new(b"z").unwrap();

        assert_eq!(sa.as_slice(), [0]);
        assert_eq!(sa.lcp().unwrap(), [0]);
    }
}
