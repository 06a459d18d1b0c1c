// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{
    histogram::{Symbol, get_buckets},
    types::{CharType, SuffixTypes},
};

/// The representation of an empty suffix array slot
pub(crate) const EMPTY: i64 = -1;

/// Seeds the LMS positions of `text` at the ends of their buckets in text order.
///
/// This only orders the LMS suffixes by their first symbol. The induction passes that follow sort
/// the LMS-substrings.
pub(crate) fn put_lms_substrings<S: Symbol>(
    suffix_array: &mut [i64],
    text: &[S],
    types: &SuffixTypes,
    bucket: &mut [i64],
) {
    suffix_array.fill(EMPTY);
    get_buckets(text, bucket, true);

    for i in (1..text.len()).rev() {
        if types.is_lms(i) {
            let c = text[i].bucket();
            bucket[c] -= 1;
            suffix_array[bucket[c] as usize] = i as i64;
        }
    }
}

/// Seeds the `n1` sorted LMS suffixes held in `suffix_array[..n1]` at the ends of their buckets.
///
/// Every other slot is left empty.
pub(crate) fn put_lms_suffixes<S: Symbol>(
    suffix_array: &mut [i64],
    text: &[S],
    bucket: &mut [i64],
    n1: usize,
) {
    get_buckets(text, bucket, true);

    // The i-th smallest LMS suffix never lands left of slot i, so unread entries stay intact
    for i in (0..n1).rev() {
        let j = suffix_array[i];
        suffix_array[i] = EMPTY;
        let c = text[j as usize].bucket();
        bucket[c] -= 1;
        suffix_array[bucket[c] as usize] = j;
    }
}

/// Induces the order of the L-type suffixes from the seeded suffixes.
///
/// The scan must run left to right: an L-type suffix is placed only after its successor.
pub(crate) fn induce_l<S: Symbol>(
    suffix_array: &mut [i64],
    text: &[S],
    types: &SuffixTypes,
    bucket: &mut [i64],
) {
    get_buckets(text, bucket, false);

    // The suffix preceding the sentinel is the first one induced
    let last = text.len() - 1;
    let c = text[last].bucket();
    suffix_array[bucket[c] as usize] = last as i64;
    bucket[c] += 1;

    for i in 0..text.len() {
        let j = suffix_array[i];
        if j > 0 {
            let j = j as usize - 1;
            if types.get(j) == CharType::L {
                let c = text[j].bucket();
                suffix_array[bucket[c] as usize] = j as i64;
                bucket[c] += 1;
            }
        }
    }
}

/// Induces the order of the S-type suffixes from the sorted L-type suffixes.
///
/// The scan must run right to left, filling each bucket from its end. Seeds left over from
/// [`put_lms_substrings()`] or [`put_lms_suffixes()`] are overwritten by the induced suffixes.
pub(crate) fn induce_s<S: Symbol>(
    suffix_array: &mut [i64],
    text: &[S],
    types: &SuffixTypes,
    bucket: &mut [i64],
) {
    get_buckets(text, bucket, true);

    for i in (0..text.len()).rev() {
        let j = suffix_array[i];
        if j > 0 {
            let j = j as usize - 1;
            if types.get(j) == CharType::S {
                let c = text[j].bucket();
                bucket[c] -= 1;
                suffix_array[bucket[c] as usize] = j as i64;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::ALPHABET_SIZE;

    fn induce(text: &[u8], suffix_array: &mut [i64], types: &SuffixTypes) {
        let mut bucket = [0; ALPHABET_SIZE];
        induce_l(suffix_array, text, types, &mut bucket);
        induce_s(suffix_array, text, types, &mut bucket);
    }

    #[test]
    fn seeds_fill_bucket_ends() {
        let text = b"banana";
        let types = SuffixTypes::classify(text.as_slice()).unwrap();
        let mut suffix_array = [0; 6];
        let mut bucket = [0; ALPHABET_SIZE];
        put_lms_substrings(&mut suffix_array, text.as_slice(), &types, &mut bucket);

        assert_eq!(suffix_array, [EMPTY, 1, 3, EMPTY, EMPTY, EMPTY]);
    }

    #[test]
    fn induction_from_approximate_seeds() {
        let text = b"banana";
        let types = SuffixTypes::classify(text.as_slice()).unwrap();
        let mut suffix_array = [0; 6];
        let mut bucket = [0; ALPHABET_SIZE];
        put_lms_substrings(&mut suffix_array, text.as_slice(), &types, &mut bucket);
        induce(text, &mut suffix_array, &types);

        assert_eq!(suffix_array, [5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn induction_from_exact_seeds() {
        let text = b"mississippi";
        let types = SuffixTypes::classify(text.as_slice()).unwrap();
        // Sorted LMS suffixes: "ippi", "issippi", "ississippi"
        let mut suffix_array = [7, 4, 1, 0, 0, 0, 0, 0, 0, 0, 0];
        for x in &mut suffix_array[3..] {
            *x = EMPTY;
        }
        let mut bucket = [0; ALPHABET_SIZE];
        put_lms_suffixes(&mut suffix_array, text.as_slice(), &mut bucket, 3);
        induce(text, &mut suffix_array, &types);

        assert_eq!(suffix_array, [10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
    }

    #[test]
    fn no_lms_positions() {
        let text = b"dcba";
        let types = SuffixTypes::classify(text.as_slice()).unwrap();
        let mut suffix_array = [EMPTY; 4];
        induce(text, &mut suffix_array, &types);

        assert_eq!(suffix_array, [3, 2, 1, 0]);
    }
}
