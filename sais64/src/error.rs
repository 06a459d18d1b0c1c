// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    collections::TryReserveError,
    error::Error,
    fmt::{self, Display, Formatter},
};

/// An error indicating that building a suffix array or one of its derived arrays failed.
///
/// Argument errors are detected before any output buffer is written. After an
/// [`OutOfMemory`](SaisError::OutOfMemory) error the output buffers hold unspecified contents and
/// must not be trusted.
///
/// # Examples
///
/// ```
/// use sais64::SaisError;
///
/// let text = b"banana";
/// // The suffix array buffer must have room for at least one entry per byte
/// let mut sa = [0; 3];
///
/// assert_eq!(sais64::sais64(text, &mut sa, None), Err(SaisError::InvalidArgument));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SaisError {
    /// A buffer is too small for the input or an input array holds an out-of-range value
    InvalidArgument,
    /// A scratch allocation failed
    OutOfMemory,
}

impl SaisError {
    /// Returns the negative status code of this error.
    ///
    /// This is the integer projection used by callers that still expect a C-style status,
    /// where `0` means success. See also [`status_code()`].
    pub const fn code(self) -> i64 {
        match self {
            SaisError::InvalidArgument => -1,
            SaisError::OutOfMemory => -2,
        }
    }
}

impl Display for SaisError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SaisError::InvalidArgument => write!(f, "invalid argument"),
            SaisError::OutOfMemory => write!(f, "out of memory"),
        }
    }
}

impl Error for SaisError {}

impl From<TryReserveError> for SaisError {
    fn from(_: TryReserveError) -> Self {
        SaisError::OutOfMemory
    }
}

/// Converts the result of a construction into a C-style status code.
///
/// Success maps to `0` and each error kind maps to its [`SaisError::code()`].
///
/// # Examples
///
/// ```
/// let mut sa = [0; 6];
/// let status = sais64::status_code(&sais64::sais64(b"banana", &mut sa, None));
///
/// assert_eq!(status, 0);
/// ```
pub fn status_code(result: &Result<(), SaisError>) -> i64 {
    match result {
        Ok(()) => 0,
        Err(e) => e.code(),
    }
}

/// Allocates a zeroed scratch buffer of `len` entries, reporting allocation failure as an error.
pub(crate) fn try_alloc<T: Clone + Default>(len: usize) -> Result<Vec<T>, SaisError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)?;
    buf.resize(len, T::default());

    Ok(buf)
}
