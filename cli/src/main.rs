//! Huffcode CLI - Command-line interface for Huffman code construction.
//!
//! This is the main entry point for the `huffcode` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{BenchmarkCommand, CodeCommand, StatsCommand, TreeCommand};

#[derive(Parser)]
#[command(name = "huffcode")]
#[command(about = "Build Huffman codes for the characters of a text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the code table of a text
    Code(CodeCommand),
    /// Print the binary tree implied by the code table
    Tree(TreeCommand),
    /// Print average code length, entropy and efficiency
    Stats(StatsCommand),
    /// Compare the merge strategies on a file
    Benchmark(BenchmarkCommand),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Code(cmd) => commands::code::run(cmd)?,
        Commands::Tree(cmd) => commands::tree::run(cmd)?,
        Commands::Stats(cmd) => commands::stats::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}
