// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// The size of the byte alphabet
pub(crate) const ALPHABET_SIZE: usize = 256;

/// A symbol of a text being sorted.
///
/// The top level sorts raw bytes. Recursion levels sort reduced strings whose symbols are the
/// `i64` names of LMS-substrings, which always lie in `0..alphabet`.
pub(crate) trait Symbol: Copy + Ord {
    /// Returns the index of the bucket holding suffixes that start with this symbol
    fn bucket(self) -> usize;
}

impl Symbol for u8 {
    #[inline]
    fn bucket(self) -> usize {
        usize::from(self)
    }
}

impl Symbol for i64 {
    #[inline]
    fn bucket(self) -> usize {
        self as usize
    }
}

/// Writes the number of occurrences of each symbol of `text` into `counts`.
pub(crate) fn count_symbols<S: Symbol>(text: &[S], counts: &mut [i64]) {
    counts.fill(0);

    for x in text {
        counts[x.bucket()] += 1;
    }
}

/// Computes the bucket boundaries of `text` into `bucket`.
///
/// If `end` is true, each entry is the exclusive end of its bucket. Otherwise each entry is the
/// start of its bucket.
pub(crate) fn get_buckets<S: Symbol>(text: &[S], bucket: &mut [i64], end: bool) {
    count_symbols(text, bucket);

    let mut sum: i64 = 0;
    for x in bucket.iter_mut() {
        sum += *x;
        *x = if end { sum } else { sum - *x };
    }
}
