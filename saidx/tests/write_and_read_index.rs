// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use std::{
    error::Error,
    fs::{self, File},
    io::{self, BufReader},
    num::NonZeroU8,
    path::Path,
};

use blake3::Hasher;
use saidx::{BuildOptions, Index, IndexError, WriteConfig};

const INDEX_FILE_NAME: &str = "lorem.saidx";
const COPY_FILE_NAME: &str = "lorem-copy.saidx";

fn make_text() -> Vec<u8> {
    let words: [&[u8]; 8] = [
        b"lorem ", b"ipsum ", b"dolor ", b"sit ", b"amet ", b"\0", b"consectetur ", b"elit\n",
    ];
    let mut x: u32 = 99;
    let mut text = Vec::new();
    for _ in 0..20_000 {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        text.extend_from_slice(words[(x >> 16) as usize % words.len()]);
    }
    text
}

fn hash_file(path: &Path) -> io::Result<blake3::Hash> {
    let mut hasher = Hasher::new();
    io::copy(&mut File::open(path)?, &mut hasher)?;
    Ok(hasher.finalize())
}

#[test]
fn sampled_with_lcp() -> Result<(), Box<dyn Error>> {
    let workspace_dir = Path::new(env!("CARGO_TARGET_TMPDIR"));
    let text = make_text();
    let rate = NonZeroU8::new(4).ok_or("zero rate")?;

    let index = Index::build(&text, BuildOptions::new().lcp(true).sample_rate(rate))?;

    {
        let mut out = File::create(workspace_dir.join(INDEX_FILE_NAME))?;
        saidx::write_index(&index, &mut out)?;
    }

    let loaded = saidx::read_index(BufReader::new(File::open(
        workspace_dir.join(INDEX_FILE_NAME),
    )?))?;

    assert_eq!(loaded, index);
    assert_eq!(loaded.text_len(), text.len() as u64);
    assert_eq!(loaded.sample_rate(), rate);
    assert!(loaded.suffix_array().iter().all(|&p| p % 4 == 0));
    // Sampled entries keep their order from the full suffix array
    for w in loaded.suffix_array().windows(2) {
        assert!(text[w[0] as usize..] < text[w[1] as usize..]);
    }

    Ok(())
}

#[test]
fn output_is_deterministic() -> Result<(), Box<dyn Error>> {
    let workspace_dir = Path::new(env!("CARGO_TARGET_TMPDIR"));
    let text = make_text();
    let index = Index::build(&text, &BuildOptions::new())?;

    for name in [COPY_FILE_NAME, "lorem-copy-2.saidx"] {
        let mut out = File::create(workspace_dir.join(name))?;
        saidx::write_index_with_config(&index, &mut out, WriteConfig::new().compression_level(3))?;
    }

    assert_eq!(
        hash_file(&workspace_dir.join(COPY_FILE_NAME))?,
        hash_file(&workspace_dir.join("lorem-copy-2.saidx"))?,
    );

    Ok(())
}

#[test]
fn truncated_file_is_rejected() -> Result<(), Box<dyn Error>> {
    let index = Index::build(&make_text(), BuildOptions::new().lcp(true))?;
    let mut stored = Vec::new();
    saidx::write_index_with_config(&index, &mut stored, WriteConfig::new().compression_threads(0))?;

    stored.truncate(stored.len() / 2);
    let result = saidx::read_index(stored.as_slice());

    assert!(matches!(result, Err(IndexError::Io(_))));

    Ok(())
}

#[test]
fn tampered_file_is_rejected() -> Result<(), Box<dyn Error>> {
    let workspace_dir = Path::new(env!("CARGO_TARGET_TMPDIR"));
    let index = Index::build(b"mississippi", &BuildOptions::new())?;
    let path = workspace_dir.join("mississippi.saidx");
    saidx::write_index_with_config(
        &index,
        &mut File::create(&path)?,
        WriteConfig::new().compression_level(0),
    )?;

    let mut stored = fs::read(&path)?;
    let last = stored.len() - 1;
    stored[last] ^= 0xff;

    // Either the decompressor or the checksum catches the change
    assert!(saidx::read_index(stored.as_slice()).is_err());

    Ok(())
}
