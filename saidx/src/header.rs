// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

pub(crate) const MAGIC: u32 = 0x5a1d_e364;
pub(crate) const VERSION_MAJOR: u16 = 1;
pub(crate) const VERSION_MINOR: u16 = 0;
pub(crate) const VERSION: u32 = (VERSION_MAJOR as u32) << 16 | VERSION_MINOR as u32;

/// Set in the flags field when an LCP array follows the suffix array
pub(crate) const FLAG_LCP: u64 = 1;
