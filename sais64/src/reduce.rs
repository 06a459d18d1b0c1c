// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use log::trace;

use crate::{
    error::SaisError,
    histogram::Symbol,
    induce::EMPTY,
    sais,
    types::SuffixTypes,
};

/// Compacts the LMS positions of the sorted suffix array into its first `n1` slots.
///
/// Returns `n1`, the number of LMS positions.
pub(crate) fn compact_lms(suffix_array: &mut [i64], types: &SuffixTypes) -> usize {
    let mut n1 = 0;
    for i in 0..suffix_array.len() {
        let j = suffix_array[i];
        if j > 0 && types.is_lms(j as usize) {
            suffix_array[n1] = j;
            n1 += 1;
        }
    }

    n1
}

/// Returns `true` if the LMS-substrings starting at `a` and `b` are identical.
///
/// Two LMS-substrings are identical when they have the same length, symbols and types. The
/// sentinel ends exactly one LMS-substring, so reaching it always means the substrings differ.
fn lms_substrings_equal<S: Symbol>(text: &[S], types: &SuffixTypes, a: usize, b: usize) -> bool {
    let n = text.len();

    let mut d = 0;
    loop {
        if a + d == n || b + d == n {
            return false;
        }
        if text[a + d] != text[b + d] || types.get(a + d) != types.get(b + d) {
            return false;
        }
        // Types matched at d - 1 too, so b + d is an LMS position as well
        if d > 0 && types.is_lms(a + d) {
            return true;
        }

        d += 1;
    }
}

/// Names the sorted LMS-substrings held in `suffix_array[..n1]`.
///
/// Equal LMS-substrings share a name and names increase with the substring order. The name of the
/// substring at position `p` is stored sparsely at `suffix_array[n1 + p / 2]`, which never
/// collides since LMS positions are at least two apart. Every other slot of `suffix_array[n1..]`
/// is set to [`EMPTY`].
///
/// Returns the number of distinct names.
pub(crate) fn name_substrings<S: Symbol>(
    suffix_array: &mut [i64],
    text: &[S],
    types: &SuffixTypes,
    n1: usize,
) -> usize {
    suffix_array[n1..].fill(EMPTY);

    let mut name_counter = 0;
    let mut pre_pos = None;
    for i in 0..n1 {
        let pos = suffix_array[i] as usize;
        let same = pre_pos.is_some_and(|pre_pos| lms_substrings_equal(text, types, pre_pos, pos));
        if !same {
            // A new name
            name_counter += 1;
        }
        pre_pos = Some(pos);

        suffix_array[n1 + pos / 2] = name_counter as i64 - 1;
    }

    name_counter
}

/// Moves the sparsely stored names in `suffix_array[n1..n]` to the last `n1` slots of
/// `suffix_array`, forming the reduced string in text order.
pub(crate) fn gather_reduced_string(suffix_array: &mut [i64], n: usize, n1: usize) {
    let mut j = suffix_array.len();
    for i in (n1..n).rev() {
        if suffix_array[i] != EMPTY {
            j -= 1;
            suffix_array[j] = suffix_array[i];
        }
    }
}

/// Sorts the suffixes of the reduced string stored in the last `n1` slots of `suffix_array`.
///
/// On return `suffix_array[..n1]` holds the suffix array of the reduced string. If every name is
/// distinct the reduced string is its own inverse suffix array. Otherwise the full construction
/// recurses on it, using everything in front of the reduced string as its suffix array buffer.
pub(crate) fn sort_reduced_string(
    suffix_array: &mut [i64],
    n1: usize,
    names: usize,
    depth: usize,
) -> Result<(), SaisError> {
    let split = suffix_array.len() - n1;
    let (head, reduced) = suffix_array.split_at_mut(split);

    if names < n1 {
        trace!("level {depth}: recursing into {n1} LMS suffixes over {names} names");
        sais::construct(&*reduced, head, names, depth + 1)
    } else {
        for (i, &name) in reduced.iter().enumerate() {
            head[name as usize] = i as i64;
        }

        Ok(())
    }
}

/// Translates the sorted suffix array of the reduced string back into sorted LMS positions.
///
/// On return `suffix_array[..n1]` holds the LMS positions of the text in exact suffix order and
/// `suffix_array[n1..n]` is empty.
pub(crate) fn lms_order(suffix_array: &mut [i64], types: &SuffixTypes, n: usize, n1: usize) {
    let split = suffix_array.len() - n1;
    {
        let (head, reduced) = suffix_array.split_at_mut(split);

        // The reduced string is no longer needed, so reuse its space for the LMS positions
        for (slot, pos) in reduced.iter_mut().zip(types.lms_positions()) {
            *slot = pos as i64;
        }
        for x in &mut head[..n1] {
            *x = reduced[*x as usize];
        }
    }

    suffix_array[n1..n].fill(EMPTY);
}
