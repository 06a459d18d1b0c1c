// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Suffix array and longest-common-prefix array construction for byte strings.
//!
//! Suffix arrays are built in linear time with induced sorting and use 64-bit signed indices, so
//! texts of any length addressable in memory are supported. All entry points write into
//! caller-owned buffers, with [`SuffixArray`] as an owning convenience wrapper.
//!
//! # Examples
//!
//! ```
//! let text = b"banana";
//! let mut suffix_array = [0; 6];
//! let mut plcp = [0; 6];
//! let mut lcp = [0; 6];
//!
//! sais64::sais64(text, &mut suffix_array, None)?;
//! sais64::plcp(text, &suffix_array, &mut plcp)?;
//! sais64::lcp(&plcp, &suffix_array, &mut lcp)?;
//!
//! assert_eq!(suffix_array, [5, 3, 1, 0, 4, 2]);
//! assert_eq!(lcp, [0, 1, 3, 0, 0, 2]);
//! # Ok::<(), sais64::SaisError>(())
//! ```

mod error;
mod histogram;
mod induce;
mod lcp;
mod plcp;
mod reduce;
mod sais;
mod sample;
mod suffix_array;
mod types;

pub use error::{SaisError, status_code};
pub use lcp::lcp;
pub use plcp::plcp;
pub use sais::sais64;
pub use sample::{sample, sample_with_lcp};
pub use suffix_array::SuffixArray;
