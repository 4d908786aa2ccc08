//! Tree command implementation.

use super::input::InputArgs;
use clap::Parser;

/// Tree command arguments.
#[derive(Parser)]
pub struct TreeCommand {
    #[command(flatten)]
    pub source: InputArgs,
}

use anyhow::Result as AnyhowResult;
use huffcode_coder::{CodeTree, EffectiveCoder};

pub fn run(cmd: TreeCommand) -> AnyhowResult<()> {
    let coder = cmd.source.load()?;

    match coder.result() {
        Some(table) => {
            let tree = CodeTree::from_code_words(table);
            print!("{}", tree.render_ascii());
            println!();
            println!("Depth: {}", tree.depth());
            println!("Max children: {}", tree.max_child_count());
        }
        None => println!("Empty text, no tree."),
    }

    Ok(())
}
