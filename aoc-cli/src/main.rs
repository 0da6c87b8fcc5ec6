//! AOC CLI - Command-line interface for running puzzle days

mod cli;
mod error;
mod output;
mod runner;

// Import aoc-days to link the day plugins
use aoc_days as _;

use aoc_harness::RegistryBuilder;
use clap::Parser;
use cli::Args;
use output::OutputFormatter;
use runner::Runner;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let registry = RegistryBuilder::new().register_all_plugins()?.build();

    if registry.is_empty() {
        println!("No days registered.");
        return Ok(());
    }

    let formatter = OutputFormatter::new(args.quiet);
    let runner = Runner::new(&registry, args.input_dir, args.part);
    let outcomes = runner.run(args.day.as_deref(), &formatter)?;

    formatter.print_summary(&outcomes);
    Ok(())
}
