// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::num::NonZeroU8;

/// Makes `suffix_array` sparse by keeping only the suffixes whose position is a multiple of
/// `rate`.
///
/// The kept suffixes stay in sorted order and the vector is shrunk to their count. A rate of 1
/// keeps everything.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU8;
///
/// let mut suffix_array = vec![5, 3, 1, 0, 4, 2];
/// sais64::sample(&mut suffix_array, NonZeroU8::new(2).unwrap());
///
/// assert_eq!(suffix_array, [0, 4, 2]);
/// ```
pub fn sample(suffix_array: &mut Vec<i64>, rate: NonZeroU8) {
    let rate = i64::from(rate.get());
    suffix_array.retain(|&p| p % rate == 0);
}

/// Makes `suffix_array` sparse like [`sample()`], keeping the entry of `lcp` at the same rank as
/// each kept suffix.
///
/// The kept LCP values still describe the suffix's predecessor in the full suffix array.
///
/// # Panics
///
/// Panics if `suffix_array` and `lcp` have different lengths.
pub fn sample_with_lcp(suffix_array: &mut Vec<i64>, lcp: &mut Vec<i64>, rate: NonZeroU8) {
    assert_eq!(
        suffix_array.len(),
        lcp.len(),
        "suffix array and LCP array must have the same length",
    );

    let rate = i64::from(rate.get());
    let mut kept = 0;
    for i in 0..suffix_array.len() {
        if suffix_array[i] % rate == 0 {
            suffix_array[kept] = suffix_array[i];
            lcp[kept] = lcp[i];
            kept += 1;
        }
    }

    suffix_array.truncate(kept);
    lcp.truncate(kept);
}
