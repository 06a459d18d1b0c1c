// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io::{self, Read},
    num::NonZeroU8,
};

use byteorder::{LittleEndian, ReadBytesExt};
use integer_encoding::VarIntReader;
use log::debug;
use zstd::Decoder;

use crate::{
    header::{FLAG_LCP, MAGIC, VERSION},
    index::Index,
};

/// The most entries reserved up front, since the entry count comes from untrusted input
const MAX_PREALLOCATED_ENTRIES: u64 = 1 << 20;

/// An error indicating that reading an index failed.
///
/// This error is returned by [`read_index()`] when the index is malformed or reading it fails. For
/// more information, see that function's documentation.
///
/// # Examples
///
/// ```
/// use saidx::IndexError;
///
/// // Garbage data
/// let index: &[u8] = &[0, 0, 0, 0];
/// let result = saidx::read_index(index);
///
/// assert!(matches!(result, Err(IndexError::BadMagic(_))));
/// ```
#[derive(Debug)]
pub enum IndexError {
    /// An I/O error occurred
    Io(io::Error),
    /// The index magic is invalid
    BadMagic(u32),
    /// The index version is unsupported
    UnsupportedVersion(u32),
    /// The index body holds inconsistent values
    Corrupt(&'static str),
    /// The stored arrays do not match the stored checksum
    ChecksumMismatch,
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            IndexError::Io(e) => write!(f, "I/O error: {e}"),
            IndexError::BadMagic(magic) => {
                write!(f, "bad magic: expected {MAGIC:x}, found {magic:x}")
            }
            IndexError::UnsupportedVersion(version) => {
                write!(
                    f,
                    "unsupported version: found {version:x}, supported versions are [{VERSION:x}]",
                )
            }
            IndexError::Corrupt(reason) => write!(f, "corrupt index: {reason}"),
            IndexError::ChecksumMismatch => write!(f, "checksum mismatch"),
        }
    }
}

impl Error for IndexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IndexError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for IndexError {
    fn from(value: io::Error) -> Self {
        IndexError::Io(value)
    }
}

/// Reads an index previously written with [`write_index()`](crate::write_index())
///
/// Every stored value is validated against the header fields of the body, and the arrays are
/// verified against the stored checksum.
///
/// # Errors
///
/// Returns an error if an I/O error occurs while reading the index, if the index header is
/// invalid, or if the body is inconsistent or fails checksum verification.
///
/// # Examples
///
/// ```
/// use saidx::{BuildOptions, Index};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let index = Index::build(b"banana", BuildOptions::new().lcp(true))?;
/// let mut stored = Vec::new();
/// saidx::write_index(&index, &mut stored)?;
///
/// let loaded = saidx::read_index(stored.as_slice())?;
///
/// assert_eq!(loaded, index);
/// # Ok(())
/// # }
/// ```
pub fn read_index<R>(mut reader: R) -> Result<Index, IndexError>
where
    R: Read,
{
    let magic = reader.read_u32::<LittleEndian>()?;
    if magic != MAGIC {
        return Err(IndexError::BadMagic(magic));
    }

    let version = reader.read_u32::<LittleEndian>()?;
    if version != VERSION {
        return Err(IndexError::UnsupportedVersion(version));
    }

    let mut decoder = Decoder::new(reader)?;

    let text_len: u64 = decoder.read_varint()?;
    // Entries are stored as i64, so every position must fit
    if i64::try_from(text_len).is_err() {
        return Err(IndexError::Corrupt("text length out of range"));
    }
    let sample_rate: u64 = decoder.read_varint()?;
    let sample_rate = u8::try_from(sample_rate)
        .ok()
        .and_then(NonZeroU8::new)
        .ok_or(IndexError::Corrupt("sample rate out of range"))?;
    let flags: u64 = decoder.read_varint()?;
    if flags & !FLAG_LCP != 0 {
        return Err(IndexError::Corrupt("unknown flags"));
    }
    let count: u64 = decoder.read_varint()?;
    if count > text_len {
        return Err(IndexError::Corrupt("more entries than text positions"));
    }

    let suffix_array = read_entries(&mut decoder, count, text_len, "suffix out of range")?;
    let lcp = if flags & FLAG_LCP != 0 {
        Some(read_entries(&mut decoder, count, text_len, "LCP value out of range")?)
    } else {
        None
    };

    let mut checksum = [0; blake3::OUT_LEN];
    decoder.read_exact(&mut checksum)?;

    let index = Index {
        text_len,
        sample_rate,
        suffix_array,
        lcp,
    };
    if index.checksum() != blake3::Hash::from(checksum) {
        return Err(IndexError::ChecksumMismatch);
    }

    debug!(
        "read index of {} entries over {} bytes (lcp: {})",
        index.len(),
        text_len,
        index.lcp.is_some(),
    );

    Ok(index)
}

/// Reads `count` entries, each of which must be less than `bound`.
fn read_entries<R>(
    reader: &mut R,
    count: u64,
    bound: u64,
    error: &'static str,
) -> Result<Vec<i64>, IndexError>
where
    R: Read,
{
    let mut entries = Vec::with_capacity(count.min(MAX_PREALLOCATED_ENTRIES) as usize);
    for _ in 0..count {
        let x: u64 = reader.read_varint()?;
        if x >= bound {
            return Err(IndexError::Corrupt(error));
        }
        entries.push(x as i64);
    }

    Ok(entries)
}
