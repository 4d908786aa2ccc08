//! Text source and coder configuration shared by the commands.

use anyhow::{bail, Context, Result as AnyhowResult};
use clap::Args;
use huffcode_coder::{CoderConfig, EffectiveCoder, HuffmanCoder, MergeStrategy};
use log::info;
use std::io::Read;
use std::path::PathBuf;

/// Where the text comes from and how it is coded.
#[derive(Args)]
pub struct InputArgs {
    /// Text to code ("-" reads stdin)
    #[arg(short, long, conflicts_with = "file")]
    pub input: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Merge strategy: heap or sorted
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// JSON coder configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl InputArgs {
    /// Coder configuration: the config file if given, then the strategy flag.
    pub fn coder_config(&self) -> AnyhowResult<CoderConfig> {
        let mut config = match &self.config {
            Some(path) => CoderConfig::from_json_file(path)?,
            None => CoderConfig::default(),
        };

        if let Some(strategy) = &self.strategy {
            config.merge_strategy = strategy.parse::<MergeStrategy>()?;
        }

        Ok(config)
    }

    /// Build a coder and feed it the selected text.
    pub fn load(&self) -> AnyhowResult<HuffmanCoder> {
        let config = self.coder_config()?;
        info!("using {} merging", config.merge_strategy);
        let mut coder = HuffmanCoder::with_config(config);

        match (&self.input, &self.file) {
            (Some(input), _) if input == "-" => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read stdin")?;
                coder.create_code(&buffer);
            }
            (Some(input), _) => {
                coder.create_code(input);
            }
            (None, Some(path)) => {
                coder.create_code_from_file(path)?;
            }
            (None, None) => bail!("no text given; use --input TEXT, --input - or --file PATH"),
        }

        Ok(coder)
    }
}
