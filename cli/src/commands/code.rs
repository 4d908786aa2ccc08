//! Code command implementation.

use super::input::InputArgs;
use clap::Parser;

/// Code command arguments.
#[derive(Parser)]
pub struct CodeCommand {
    #[command(flatten)]
    pub source: InputArgs,

    /// Print the table as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use anyhow::Result as AnyhowResult;
use huffcode_coder::EffectiveCoder;
use log::warn;

pub fn run(cmd: CodeCommand) -> AnyhowResult<()> {
    let coder = cmd.source.load()?;

    let table = match coder.result() {
        Some(table) => table,
        None => {
            if cmd.json {
                println!("null");
            } else {
                println!("Empty text, no code.");
            }
            return Ok(());
        }
    };

    if table.is_degenerate() {
        warn!("single-character alphabet: its code is empty and cannot be decoded from a bit stream");
    }

    if cmd.json {
        println!("{}", table.to_json()?);
        return Ok(());
    }

    println!("{:<8} {:>12}  code", "char", "probability");
    for word in table {
        println!(
            "{:<8} {:>12.6}  {}",
            format!("{:?}", word.character),
            word.probability,
            word.code
        );
    }

    Ok(())
}
