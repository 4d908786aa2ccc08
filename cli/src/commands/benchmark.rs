//! Benchmark command implementation.

use clap::Parser;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Path to input text file for benchmarking
    #[arg(short, long)]
    pub file: String,

    /// Number of iterations to run
    #[arg(short, long, default_value_t = 100)]
    pub iterations: usize,
}

use anyhow::{ensure, Context, Result as AnyhowResult};
use huffcode_coder::{CoderConfig, EffectiveCoder, HuffmanCoder, MergeStrategy};
use std::fs;
use std::time::Instant;

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    ensure!(cmd.iterations > 0, "iterations must be at least 1");

    let text = fs::read_to_string(&cmd.file)
        .with_context(|| format!("failed to read {}", cmd.file))?;

    println!("Benchmarking code construction...");
    println!("  Text length: {} chars", text.chars().count());
    println!("  Iterations: {}", cmd.iterations);
    println!();

    let mut tables = Vec::new();

    for strategy in MergeStrategy::ALL {
        let mut coder = HuffmanCoder::with_config(CoderConfig {
            merge_strategy: strategy,
            ..Default::default()
        });

        // Warmup
        coder.create_code(&text);

        let start = Instant::now();
        for _ in 0..cmd.iterations {
            coder.invalidate();
            coder.create_code(&text);
        }
        let elapsed = start.elapsed();

        let avg_time_ms = elapsed.as_secs_f64() * 1000.0 / cmd.iterations as f64;
        let symbols = coder.result().map_or(0, |table| table.len());

        println!("{}:", strategy);
        println!("  Total time: {:.2}s", elapsed.as_secs_f64());
        println!("  Average time: {:.3}ms", avg_time_ms);
        println!("  Symbols: {}", symbols);

        tables.push(coder.result().cloned());
    }

    let identical = tables.windows(2).all(|pair| pair[0] == pair[1]);
    println!();
    println!("Strategies agree: {}", if identical { "yes" } else { "NO" });

    Ok(())
}
