// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{error::SaisError, plcp::in_range};

/// Permutes a permuted longest-common-prefix array into the longest-common-prefix array.
///
/// `lcp[i]` becomes `plcp[suffix_array[i]]`, the length of the longest common prefix of the
/// suffixes at ranks `i - 1` and `i`, and `lcp[0]` is 0. The length of the text is taken to be
/// `plcp.len()`, and only that many slots of `suffix_array` and `lcp` are used.
///
/// # Errors
///
/// Returns [`SaisError::InvalidArgument`] without touching `lcp` if `suffix_array` or `lcp` is
/// shorter than `plcp` or `suffix_array` holds a value outside `0..plcp.len()`.
///
/// # Examples
///
/// ```
/// let suffix_array = [5, 3, 1, 0, 4, 2];
/// let plcp = [0, 3, 2, 1, 0, 0];
/// let mut lcp = [0; 6];
///
/// sais64::lcp(&plcp, &suffix_array, &mut lcp)?;
///
/// assert_eq!(lcp, [0, 1, 3, 0, 0, 2]);
/// # Ok::<(), sais64::SaisError>(())
/// ```
pub fn lcp(plcp: &[i64], suffix_array: &[i64], lcp: &mut [i64]) -> Result<(), SaisError> {
    let n = plcp.len();
    if suffix_array.len() < n || lcp.len() < n || !in_range(suffix_array, n) {
        return Err(SaisError::InvalidArgument);
    }

    for (l, &p) in lcp[..n].iter_mut().zip(&suffix_array[..n]) {
        *l = plcp[p as usize];
    }
    if n > 0 {
        lcp[0] = 0;
    }

    Ok(())
}
