//! Command-line interface for `sbox_sac`.

#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sbox_sac::{sac_report, SboxLayout, SboxTable, ShiftStrategy};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Strict Avalanche Criterion of an 8-bit S-box.
#[derive(Parser)]
#[command(name = "sbox-sac", version, about)]
struct Cli {
    /// S-box file.
    #[arg(value_name = "SBOX_FILE", default_value = "sbox.sbx")]
    sbox_file: PathBuf,
    /// Distance in bytes between two table entries in the file.
    #[arg(long, default_value_t = SboxLayout::INTERLEAVED.stride)]
    stride: usize,
    /// Position in bytes of the first table entry in the file.
    #[arg(long, default_value_t = SboxLayout::INTERLEAVED.offset)]
    offset: usize,
    /// How shifted functions are derived from each bit plane.
    #[arg(long, value_enum, default_value_t = Strategy::ChunkSwap)]
    strategy: Strategy,
    /// Also print the score of each output bit plane.
    #[arg(long, default_value_t = false)]
    breakdown: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Swap adjacent chunks of the bit plane.
    ChunkSwap,
    /// Evaluate the bit plane at input XOR flip distance.
    InputXor,
}

impl From<Strategy> for ShiftStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::ChunkSwap => ShiftStrategy::ChunkSwap,
            Strategy::InputXor => ShiftStrategy::InputXor,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let layout = SboxLayout {
        stride: cli.stride,
        offset: cli.offset,
    };
    run(&cli.sbox_file, layout, cli.strategy.into(), cli.breakdown)
}

fn run(path: &Path, layout: SboxLayout, strategy: ShiftStrategy, breakdown: bool) -> Result<()> {
    let table = SboxTable::load(path, layout)
        .with_context(|| format!("failed to load S-box from {}", path.display()))?;
    info!(path = %path.display(), ?strategy, "evaluating S-box");
    let report = sac_report(&table, strategy).context("SAC evaluation failed")?;

    println!("SAC for S-box: {}", report.score);
    if breakdown {
        for (output_bit, score) in report.plane_scores.iter().enumerate() {
            println!("  output bit {output_bit}: {score}");
        }
    }
    Ok(())
}
