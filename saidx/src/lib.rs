// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Compressed on-disk suffix array indexes.
//!
//! This crate builds suffix arrays, optionally sampled and paired with an LCP array, and stores
//! them in a compact, checksummed file format. The indexed text itself is not stored.
//!
//! # Examples
//!
//! Building an index and writing it to a file:
//!
//! ```no_run
//! use std::fs::{self, File};
//! use saidx::{BuildOptions, Index};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = fs::read("corpus.txt")?;
//! let index = Index::build(&text, BuildOptions::new().lcp(true))?;
//! let mut out = File::create("corpus.saidx")?;
//!
//! saidx::write_index(&index, &mut out)?;
//!
//! # Ok(())
//! # }
//! ```
//!
//! Reading it back:
//!
//! ```no_run
//! use std::fs::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = saidx::read_index(File::open("corpus.saidx")?)?;
//!
//! println!("{} suffixes over {} bytes", index.len(), index.text_len());
//!
//! # Ok(())
//! # }
//! ```

#[cfg(any(feature = "read", feature = "write"))]
mod header;
mod index;
#[cfg(feature = "read")]
mod read;
#[cfg(feature = "write")]
mod write;

pub use index::{BuildOptions, Index};
#[cfg(feature = "read")]
pub use read::{IndexError, read_index};
#[cfg(feature = "write")]
pub use write::{WriteConfig, write_index, write_index_with_config};
