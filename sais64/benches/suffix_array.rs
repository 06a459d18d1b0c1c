// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sais64::SuffixArray;

const CHUNK_SIZE: usize = 1 << 14;
const CHUNKS: usize = 8;

/// Generates text with the skewed, repetitive byte distribution of real-world data
fn make_text(len: usize) -> Vec<u8> {
    let mut x: u32 = 1_234_567;
    let mut text = Vec::with_capacity(len);
    while text.len() < len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        if x % 7 == 0 && text.len() >= 64 {
            // Copy an earlier run to create repeats
            let start = (x as usize >> 8) % (text.len() - 32);
            text.extend_from_within(start..start + 32);
        } else {
            text.push(b'a' + (x >> 16) as u8 % 12);
        }
    }
    text.truncate(len);
    text
}

fn construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    let contents = make_text(CHUNK_SIZE * CHUNKS);

    for chunks in 1..=CHUNKS {
        let size = chunks * CHUNK_SIZE;

        group
            .throughput(Throughput::Bytes(size as u64))
            .bench_with_input(
                BenchmarkId::from_parameter(size),
                &contents[..size],
                |b, data| {
                    b.iter(|| SuffixArray::new(data).unwrap());
                },
            );
    }

    group.finish();
}

fn lcp(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcp");

    let contents = make_text(CHUNK_SIZE * CHUNKS);

    for chunks in 1..=CHUNKS {
        let size = chunks * CHUNK_SIZE;
        let sa = SuffixArray::new(&contents[..size]).unwrap();

        group
            .throughput(Throughput::Bytes(size as u64))
            .bench_with_input(BenchmarkId::from_parameter(size), &sa, |b, sa| {
                b.iter(|| sa.lcp().unwrap());
            });
    }

    group.finish();
}

criterion_group!(benches, construct, lcp);
criterion_main!(benches);
