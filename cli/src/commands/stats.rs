//! Stats command implementation.

use super::input::InputArgs;
use clap::Parser;

/// Stats command arguments.
#[derive(Parser)]
pub struct StatsCommand {
    #[command(flatten)]
    pub source: InputArgs,

    /// Print the statistics as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use anyhow::Result as AnyhowResult;
use huffcode_coder::{CodeStats, EffectiveCoder};

pub fn run(cmd: StatsCommand) -> AnyhowResult<()> {
    let coder = cmd.source.load()?;

    let Some(table) = coder.result() else {
        println!("Empty text, no statistics.");
        return Ok(());
    };

    let stats = CodeStats::from_code_words(table);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Code statistics:");
    println!("  Symbols: {}", stats.symbol_count);
    println!("  Average length: {:.4} bits", stats.average_length);
    println!("  Entropy: {:.4} bits", stats.entropy);
    println!("  Efficiency: {:.2}%", stats.efficiency * 100.0);
    println!("  Redundancy: {:.4} bits", stats.redundancy);
    println!("  Longest code: {} bits", stats.max_length);

    Ok(())
}
