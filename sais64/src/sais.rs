// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use log::{debug, trace};

use crate::{
    error::{SaisError, try_alloc},
    histogram::{self, ALPHABET_SIZE, Symbol},
    induce, reduce,
    types::SuffixTypes,
};

/// Computes the suffix array of `text` using the SA-IS induced sorting algorithm.
///
/// The algorithm is implemented as described in the [article] Two Efficient Algorithms for Linear
/// Time Suffix Array Construction by Ge Nong, Sen Zhang and Wai Hong Chan. It runs in *O*(*n*)
/// time.
///
/// The suffix array is written to `suffix_array[..text.len()]`. Any slots beyond that are free
/// space: the construction uses them as scratch for the reduced strings and bucket tables of
/// recursion levels, and leaves them in an unspecified state. When the free space is too small
/// for a bucket table, the table is allocated instead, so supplying free space only saves
/// allocations.
///
/// If `freq` is given, the number of occurrences of each byte value is written to its first 256
/// slots.
///
/// Unlike some presentations of the algorithm, `text` does not need a sentinel. Suffixes are
/// ordered as if a unique symbol smaller than every byte followed the text, so a suffix that is a
/// prefix of another one sorts first.
///
/// # Errors
///
/// Returns [`SaisError::InvalidArgument`] without touching any buffer if `suffix_array` is shorter
/// than `text` or `freq` is shorter than 256.
///
/// Returns [`SaisError::OutOfMemory`] if a scratch allocation fails. The contents of
/// `suffix_array` are unspecified in that case.
///
/// # Examples
///
/// ```
/// let text = b"banana";
/// let mut suffix_array = [0; 6];
/// let mut freq = [0; 256];
///
/// sais64::sais64(text, &mut suffix_array, Some(&mut freq))?;
///
/// assert_eq!(suffix_array, [5, 3, 1, 0, 4, 2]);
/// assert_eq!(freq[usize::from(b'a')], 3);
/// # Ok::<(), sais64::SaisError>(())
/// ```
///
/// [article]: https://doi.org/10.1109/TC.2010.188
pub fn sais64(
    text: &[u8],
    suffix_array: &mut [i64],
    freq: Option<&mut [i64]>,
) -> Result<(), SaisError> {
    if suffix_array.len() < text.len() || i64::try_from(text.len()).is_err() {
        return Err(SaisError::InvalidArgument);
    }
    if freq.as_ref().is_some_and(|freq| freq.len() < ALPHABET_SIZE) {
        return Err(SaisError::InvalidArgument);
    }

    if let Some(freq) = freq {
        histogram::count_symbols(text, &mut freq[..ALPHABET_SIZE]);
    }

    construct(text, suffix_array, ALPHABET_SIZE, 0)
}

/// Sorts the suffixes of `text`, whose symbols all lie in `0..alphabet`, into
/// `suffix_array[..text.len()]`.
///
/// `depth` is the recursion level, where 0 is the original text.
pub(crate) fn construct<S: Symbol>(
    text: &[S],
    suffix_array: &mut [i64],
    alphabet: usize,
    depth: usize,
) -> Result<(), SaisError> {
    let n = text.len();
    match n {
        0 => return Ok(()),
        1 => {
            suffix_array[0] = 0;
            return Ok(());
        }
        _ => {}
    }

    let types = SuffixTypes::classify(text)?;

    // Stage 1: Reduce the problem by at least 1/2
    with_bucket(suffix_array, n, alphabet, depth, |suffix_array, bucket| {
        induce::put_lms_substrings(suffix_array, text, &types, bucket);
        induce::induce_l(suffix_array, text, &types, bucket);
        induce::induce_s(suffix_array, text, &types, bucket);
    })?;

    // At this point, all the LMS-substrings are sorted. Compact them into the first n1 slots and
    // name them.
    let n1 = reduce::compact_lms(&mut suffix_array[..n], &types);
    let names = reduce::name_substrings(&mut suffix_array[..n], text, &types, n1);
    debug!("level {depth}: {n} suffixes, {n1} LMS-substrings, {names} distinct names");

    // Stage 2: Solve the reduced problem
    reduce::gather_reduced_string(suffix_array, n, n1);
    reduce::sort_reduced_string(suffix_array, n1, names, depth)?;

    // Stage 3: Induce the suffix array from the exact order of the LMS suffixes
    reduce::lms_order(suffix_array, &types, n, n1);
    with_bucket(suffix_array, n, alphabet, depth, |suffix_array, bucket| {
        induce::put_lms_suffixes(suffix_array, text, bucket, n1);
        induce::induce_l(suffix_array, text, &types, bucket);
        induce::induce_s(suffix_array, text, &types, bucket);
    })?;

    Ok(())
}

/// Runs `f` on `suffix_array[..n]` and a bucket table of `alphabet` entries.
///
/// The bucket table is carved out of the free space at the end of `suffix_array` if it fits there,
/// and allocated otherwise.
fn with_bucket<F>(
    suffix_array: &mut [i64],
    n: usize,
    alphabet: usize,
    depth: usize,
    f: F,
) -> Result<(), SaisError>
where
    F: FnOnce(&mut [i64], &mut [i64]),
{
    if suffix_array.len() - n >= alphabet {
        let split = suffix_array.len() - alphabet;
        let (suffix_array, bucket) = suffix_array.split_at_mut(split);
        f(&mut suffix_array[..n], bucket);
    } else {
        trace!("level {depth}: allocating a bucket table of {alphabet} entries");
        let mut bucket = try_alloc(alphabet)?;
        f(&mut suffix_array[..n], &mut bucket);
    }

    Ok(())
}
