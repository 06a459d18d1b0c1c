// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    num::NonZeroU8,
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use saidx::{BuildOptions, Index, WriteConfig};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build an index over a file
    Build {
        input: PathBuf,
        output: PathBuf,
        /// Store the LCP array alongside the suffix array
        #[arg(long)]
        lcp: bool,
        /// Keep only suffixes starting at a multiple of this rate
        #[arg(long, default_value_t = BuildOptions::DEFAULT_SAMPLE_RATE)]
        sample_rate: NonZeroU8,
        /// Compression level of the index body
        #[arg(
            long,
            default_value_t = WriteConfig::DEFAULT_COMPRESSION_LEVEL,
            allow_negative_numbers = true,
        )]
        level: i32,
        /// Number of compression worker threads
        #[arg(long, default_value_t = WriteConfig::DEFAULT_COMPRESSION_THREADS)]
        threads: u32,
    },
    /// Print a summary of an index
    Inspect { index: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG takes precedence over the verbosity flag
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match args.command {
        Command::Build {
            input,
            output,
            lcp,
            sample_rate,
            level,
            threads,
        } => {
            let text = fs::read(&input)
                .with_context(|| format!("Failed to read input file '{}'", input.display()))?;
            info!("read {} bytes from '{}'", text.len(), input.display());

            let index = Index::build(&text, BuildOptions::new().lcp(lcp).sample_rate(sample_rate))
                .with_context(|| format!("Failed to build index of '{}'", input.display()))?;

            let out_file = File::create(&output)
                .with_context(|| format!("Failed to create index file '{}'", output.display()))?;
            let mut out = BufWriter::new(out_file);
            saidx::write_index_with_config(
                &index,
                &mut out,
                WriteConfig::new()
                    .compression_level(level)
                    .compression_threads(threads),
            )
            .context("I/O error occurred while writing index file")?;
            out.flush()
                .context("I/O error occurred while writing index file")?;

            info!(
                "wrote {} suffixes to '{}'",
                index.len(),
                output.display(),
            );
        }
        Command::Inspect { index } => {
            let index_file = File::open(&index)
                .with_context(|| format!("Failed to open index file '{}'", index.display()))?;
            let loaded = saidx::read_index(BufReader::new(index_file))
                .with_context(|| format!("Failed to read index file '{}'", index.display()))?;

            println!("text length: {}", loaded.text_len());
            println!("sample rate: {}", loaded.sample_rate());
            println!("suffixes:    {}", loaded.len());
            match loaded.lcp() {
                Some(lcp) => {
                    let max = lcp.iter().copied().max().unwrap_or(0);
                    println!("lcp:         yes (max {max})");
                }
                None => println!("lcp:         no"),
            }
        }
    }

    Ok(())
}
