// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use integer_encoding::VarIntWriter;
use log::debug;
use zstd::Encoder;

use crate::{
    header::{FLAG_LCP, MAGIC, VERSION},
    index::Index,
};

/// Writes `index` to `out` with default options
///
/// The index can later be loaded with [`read_index()`](crate::read_index()).
///
/// This function is a shorthand for [`write_index_with_config()`] called with the default
/// options. If you want to tune compression, see that function instead.
///
/// # Errors
///
/// Returns an error if an I/O error occurs while writing the index.
///
/// # Examples
///
/// ```
/// use saidx::{BuildOptions, Index};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let index = Index::build(b"banana", &BuildOptions::new())?;
/// let mut out = Vec::new();
///
/// saidx::write_index(&index, &mut out)?;
///
/// # Ok(())
/// # }
/// ```
pub fn write_index<W>(index: &Index, out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write_index_with_config(index, out, &WriteConfig::default())
}

/// Writes `index` to `out`
///
/// The index body is compressed and ends with a checksum of the stored arrays, which
/// [`read_index()`](crate::read_index()) verifies.
///
/// # Errors
///
/// Returns an error if an I/O error occurs while writing the index.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use saidx::{BuildOptions, Index, WriteConfig};
///
/// let index = Index::build(b"banana", &BuildOptions::new())?;
/// let mut out = Vec::new();
///
/// saidx::write_index_with_config(&index, &mut out, WriteConfig::new().compression_threads(0))?;
///
/// # Ok(())
/// # }
/// ```
pub fn write_index_with_config<W>(
    index: &Index,
    out: &mut W,
    options: &WriteConfig,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    // Write the header
    out.write_u32::<LittleEndian>(MAGIC)?;
    out.write_u32::<LittleEndian>(VERSION)?;

    // Create a compressor for the index body
    let mut encoder = Encoder::new(out, options.compression_level)?;
    encoder.multithread(options.compression_threads)?;

    let flags = if index.lcp.is_some() { FLAG_LCP } else { 0 };
    encoder.write_varint(index.text_len)?;
    encoder.write_varint(u64::from(index.sample_rate.get()))?;
    encoder.write_varint(flags)?;
    encoder.write_varint(index.suffix_array.len() as u64)?;

    // Entries are never negative, so they are stored unsigned
    for &p in &index.suffix_array {
        encoder.write_varint(p as u64)?;
    }
    if let Some(lcp) = &index.lcp {
        for &l in lcp {
            encoder.write_varint(l as u64)?;
        }
    }

    encoder.write_all(index.checksum().as_bytes())?;
    encoder.finish()?;

    debug!(
        "wrote index of {} entries over {} bytes (lcp: {})",
        index.len(),
        index.text_len,
        index.lcp.is_some(),
    );

    Ok(())
}

/// Configuration for writing an index.
///
/// This struct can be used to fine-tune compression of the index body. The defaults should be
/// optimal for most use cases, but you may wish to change them in especially resource-constrained
/// or powerful computing environments for better performance.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct WriteConfig {
    compression_threads: u32,
    compression_level: i32,
}

impl WriteConfig {
    /// Creates a new configuration for writing indexes
    ///
    /// This configuration can be reused across writes.
    pub const fn new() -> Self {
        Self {
            compression_threads: Self::DEFAULT_COMPRESSION_THREADS,
            compression_level: Self::DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// Sets the number of threads to use for compressing the index.
    ///
    /// Setting this to a value more than 0 allows compression to run on a separate thread than
    /// I/O. A value of 0 means that compression will run on the same thread as I/O, reducing
    /// writing speed but slightly lowering memory usage.
    pub fn compression_threads(&mut self, threads: u32) -> &mut Self {
        self.compression_threads = threads;
        self
    }

    /// Sets the compression level to use for compressing the index.
    ///
    /// The compression level can be set to any value between -7 and 22 inclusive. Any value
    /// outside of this range will be clamped to fit inside the range.
    pub fn compression_level(&mut self, level: i32) -> &mut Self {
        self.compression_level = level;
        self
    }

    /// The default number of compression threads to create
    pub const DEFAULT_COMPRESSION_THREADS: u32 = 1;

    /// The default compression level to use
    ///
    /// Indexes are written once and read many times, so this favors ratio over speed.
    pub const DEFAULT_COMPRESSION_LEVEL: i32 = 19;
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self::new()
    }
}
