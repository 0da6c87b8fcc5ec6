//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code day runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code puzzle days", version)]
pub struct Args {
    /// Day identifier to run (runs every registered day if omitted)
    #[arg(short, long)]
    pub day: Option<String>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=2))]
    pub part: Option<u32>,

    /// Base directory for puzzle input files
    #[arg(long, default_value = aoc_harness::DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
