// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::error::SaisError;

/// Returns `true` if the first `n` entries of `suffix_array` are all valid positions of a text of
/// length `n`.
pub(crate) fn in_range(suffix_array: &[i64], n: usize) -> bool {
    suffix_array[..n].iter().all(|&p| p >= 0 && (p as u64) < n as u64)
}

/// Computes the permuted longest-common-prefix array of `text` from its suffix array.
///
/// `plcp[p]` becomes the length of the longest common prefix of the suffix at `p` and the suffix
/// sorted directly before it, or 0 for the smallest suffix. The array is indexed by text position,
/// not by rank. Only the first `text.len()` slots of `suffix_array` and `plcp` are used.
///
/// This runs in *O*(*n*) time without scratch allocations. The predecessor of each suffix is
/// first written into `plcp` itself and then replaced by the match length in a single scan over
/// the text, where each match resumes one symbol short of the previous one.
///
/// `suffix_array` must be the suffix array of `text`. Any other permutation of positions produces
/// meaningless values, though never a panic.
///
/// # Errors
///
/// Returns [`SaisError::InvalidArgument`] without touching `plcp` if `suffix_array` or `plcp` is
/// shorter than `text` or `suffix_array` holds a value outside `0..text.len()`.
///
/// # Examples
///
/// ```
/// let text = b"banana";
/// let suffix_array = [5, 3, 1, 0, 4, 2];
/// let mut plcp = [0; 6];
///
/// sais64::plcp(text, &suffix_array, &mut plcp)?;
///
/// assert_eq!(plcp, [0, 3, 2, 1, 0, 0]);
/// # Ok::<(), sais64::SaisError>(())
/// ```
pub fn plcp(text: &[u8], suffix_array: &[i64], plcp: &mut [i64]) -> Result<(), SaisError> {
    let n = text.len();
    if suffix_array.len() < n || plcp.len() < n || !in_range(suffix_array, n) {
        return Err(SaisError::InvalidArgument);
    }
    let plcp = &mut plcp[..n];

    // Store the sorted predecessor of every suffix, with -1 marking the smallest suffix
    plcp.fill(-1);
    let mut pre = -1;
    for &p in &suffix_array[..n] {
        plcp[p as usize] = pre;
        pre = p;
    }

    let mut h = 0;
    for p in 0..n {
        let q = plcp[p];
        if q < 0 {
            h = 0;
            plcp[p] = 0;
            continue;
        }

        let q = q as usize;
        while p + h < n && q + h < n && text[p + h] == text[q + h] {
            h += 1;
        }
        plcp[p] = h as i64;

        h = h.saturating_sub(1);
    }

    Ok(())
}
