// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{iter, num::NonZeroU8};

use blake3::{Hash, Hasher};
use log::debug;
use sais64::{SaisError, SuffixArray};

/// The number of entries converted to bytes at once while hashing
const CHECKSUM_CHUNK: usize = 8192;

/// A suffix array, possibly sampled, with an optional LCP array
///
/// An `Index` is built from a text with [`Index::build()`] and can be stored with
/// [`write_index()`](crate::write_index()). The text itself is not part of the index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Index {
    pub(crate) text_len: u64,
    pub(crate) sample_rate: NonZeroU8,
    pub(crate) suffix_array: Vec<i64>,
    pub(crate) lcp: Option<Vec<i64>>,
}

impl Index {
    /// Builds an index over `text`.
    ///
    /// If `options` requests an LCP array, it is computed over the full suffix array before
    /// sampling, so every kept LCP value describes the suffix's predecessor in the full order.
    ///
    /// # Errors
    ///
    /// Returns an error if an allocation fails during construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use saidx::{BuildOptions, Index};
    ///
    /// # fn main() -> Result<(), sais64::SaisError> {
    /// let index = Index::build(b"banana", BuildOptions::new().lcp(true))?;
    ///
    /// assert_eq!(index.suffix_array(), [5, 3, 1, 0, 4, 2]);
    /// assert_eq!(index.lcp(), Some([0, 1, 3, 0, 0, 2].as_slice()));
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(text: &[u8], options: &BuildOptions) -> Result<Self, SaisError> {
        let sa = SuffixArray::new(text)?;
        let lcp = if options.lcp { Some(sa.lcp()?) } else { None };
        let mut suffix_array = sa.into_vec();
        debug!("built suffix array over {} bytes", text.len());

        let lcp = match lcp {
            Some(mut lcp) => {
                sais64::sample_with_lcp(&mut suffix_array, &mut lcp, options.sample_rate);
                Some(lcp)
            }
            None => {
                sais64::sample(&mut suffix_array, options.sample_rate);
                None
            }
        };
        if options.sample_rate.get() > 1 {
            debug!(
                "sampled {} of {} suffixes at rate {}",
                suffix_array.len(),
                text.len(),
                options.sample_rate,
            );
        }

        Ok(Self {
            text_len: text.len() as u64,
            sample_rate: options.sample_rate,
            suffix_array,
            lcp,
        })
    }

    /// Returns the length of the indexed text.
    #[must_use]
    pub fn text_len(&self) -> u64 {
        self.text_len
    }

    /// Returns the rate the suffix array was sampled at.
    #[must_use]
    pub fn sample_rate(&self) -> NonZeroU8 {
        self.sample_rate
    }

    /// Returns the (possibly sampled) suffix array.
    #[must_use]
    pub fn suffix_array(&self) -> &[i64] {
        &self.suffix_array
    }

    /// Returns the LCP array, with one entry per suffix array entry, if the index has one.
    #[must_use]
    pub fn lcp(&self) -> Option<&[i64]> {
        self.lcp.as_deref()
    }

    /// Returns the number of suffix array entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suffix_array.len()
    }

    /// Returns `true` if the index holds no suffixes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suffix_array.is_empty()
    }

    /// Computes the digest of the little-endian bytes of the suffix array followed by the LCP
    /// array.
    pub(crate) fn checksum(&self) -> Hash {
        let mut hasher = Hasher::new();
        let mut bytes = Vec::with_capacity(CHECKSUM_CHUNK * 8);

        for array in iter::once(self.suffix_array.as_slice()).chain(self.lcp()) {
            for chunk in array.chunks(CHECKSUM_CHUNK) {
                bytes.clear();
                bytes.extend(chunk.iter().flat_map(|x| x.to_le_bytes()));
                hasher.update(&bytes);
            }
        }

        hasher.finalize()
    }
}

/// Options for building an [`Index`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BuildOptions {
    lcp: bool,
    sample_rate: NonZeroU8,
}

impl BuildOptions {
    /// Creates a new set of build options
    ///
    /// These options can be reused across builds.
    pub const fn new() -> Self {
        Self {
            lcp: Self::DEFAULT_LCP,
            sample_rate: Self::DEFAULT_SAMPLE_RATE,
        }
    }

    /// Sets whether to compute the LCP array.
    pub fn lcp(&mut self, lcp: bool) -> &mut Self {
        self.lcp = lcp;
        self
    }

    /// Sets the sample rate of the suffix array.
    ///
    /// Only suffixes starting at a multiple of the rate are kept. A rate of 1 keeps every suffix.
    pub fn sample_rate(&mut self, rate: NonZeroU8) -> &mut Self {
        self.sample_rate = rate;
        self
    }

    /// Whether the LCP array is computed by default
    pub const DEFAULT_LCP: bool = false;

    /// The default sample rate, which keeps every suffix
    pub const DEFAULT_SAMPLE_RATE: NonZeroU8 = NonZeroU8::MIN;
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(r: u8) -> NonZeroU8 {
        NonZeroU8::new(r).unwrap()
    }

    #[test]
    fn default_build_has_no_lcp() {
        let index = Index::build(b"mississippi", &BuildOptions::default()).unwrap();

        assert_eq!(index.text_len(), 11);
        assert_eq!(index.suffix_array(), [10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
        assert_eq!(index.lcp(), None);
    }

    #[test]
    fn sampled_build_keeps_lcp_aligned() {
        let index = Index::build(b"banana", BuildOptions::new().lcp(true).sample_rate(rate(2)))
            .unwrap();

        assert_eq!(index.sample_rate(), rate(2));
        assert_eq!(index.suffix_array(), [0, 4, 2]);
        assert_eq!(index.lcp(), Some([0, 0, 2].as_slice()));
    }

    #[test]
    fn checksum_covers_lcp() {
        let without = Index::build(b"banana", &BuildOptions::new()).unwrap();
        let with = Index::build(b"banana", BuildOptions::new().lcp(true)).unwrap();

        assert_ne!(without.checksum(), with.checksum());
        assert_eq!(with.checksum(), with.clone().checksum());
    }

    #[test]
    fn empty_text() {
        let index = Index::build(b"", BuildOptions::new().lcp(true)).unwrap();

        assert!(index.is_empty());
        assert_eq!(index.lcp().map(<[i64]>::len), Some(0));
    }
}
