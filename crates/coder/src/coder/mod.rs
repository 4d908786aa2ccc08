//! Effective-coder façade.
//!
//! An effective coder owns the last text it was asked about and the code
//! table computed for it. Submitting the same text again is a no-op, which
//! lets callers such as a tree viewer skip redrawing when nothing changed.

pub mod batch;
pub mod shared;

pub use batch::code_batch;
pub use shared::SharedCoder;

use crate::utils::{MemoSlot, MemoStats};
use huffcode_core::{
    analyze, count_chars, included_chars, CodeStrategy, CodeTable, HuffcodeError, HuffmanBuilder,
    MergeStrategy, Result,
};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Contract shared by every code construction family.
pub trait EffectiveCoder {
    /// Compute the code table for `text`.
    ///
    /// # Returns
    /// `false` if `text` equals the last text and the previous result is
    /// still valid, `true` if the result was recomputed. The empty text
    /// always returns `true` and leaves no result.
    fn create_code(&mut self, text: &str) -> bool;

    /// The last computed table, `None` before any text or after the empty text.
    fn result(&self) -> Option<&CodeTable>;

    /// The text the current result belongs to.
    fn last_text(&self) -> Option<&str>;

    /// Drop the remembered text and result.
    fn invalidate(&mut self);

    /// Distinct characters of `text` in first-occurrence order.
    fn included_chars(&self, text: &str) -> Vec<char> {
        included_chars(text)
    }

    /// Number of occurrences of `ch` in `text`.
    fn count_chars(&self, text: &str, ch: char) -> usize {
        count_chars(text, ch)
    }
}

/// Build a fresh code table for `text` with the given strategy.
///
/// Returns `None` for the empty text.
pub fn build_table<S: CodeStrategy + ?Sized>(text: &str, strategy: &S) -> Option<CodeTable> {
    let mut words = analyze(text);
    if words.is_empty() {
        return None;
    }
    strategy.build(&mut words);
    Some(CodeTable::new(words))
}

/// Configuration for a Huffman coder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoderConfig {
    /// How the merge reduction is executed
    pub merge_strategy: MergeStrategy,
    /// Log every code word at debug level after a recomputation
    pub log_tables: bool,
}

impl CoderConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|err| HuffcodeError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        Self::from_json(&data)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

/// Builder for creating a Huffman coder.
#[derive(Debug, Clone, Default)]
pub struct CoderBuilder {
    config: CoderConfig,
}

impl CoderBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the merge strategy.
    pub fn merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.config.merge_strategy = strategy;
        self
    }

    /// Log code tables after each recomputation.
    pub fn log_tables(mut self, enabled: bool) -> Self {
        self.config.log_tables = enabled;
        self
    }

    /// Build the coder.
    pub fn build(self) -> HuffmanCoder {
        HuffmanCoder::with_config(self.config)
    }
}

/// Memoizing coder over any code construction strategy.
#[derive(Debug, Clone)]
pub struct Coder<S: CodeStrategy> {
    /// Construction algorithm
    strategy: S,
    /// Log tables after recomputation
    log_tables: bool,
    /// Last text and its table
    memo: MemoSlot<CodeTable>,
}

/// The Huffman coder.
pub type HuffmanCoder = Coder<HuffmanBuilder>;

impl<S: CodeStrategy> Coder<S> {
    /// Create a coder around a strategy.
    pub fn with_strategy(strategy: S) -> Self {
        Self {
            strategy,
            log_tables: false,
            memo: MemoSlot::new(),
        }
    }

    /// The construction strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Read `path` as UTF-8 text and compute its code table.
    pub fn create_code_from_file(&mut self, path: &Path) -> Result<bool> {
        let text = fs::read_to_string(path).map_err(|err| HuffcodeError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        Ok(self.create_code(&text))
    }

    /// Memo hit/miss counts.
    pub fn memo_stats(&self) -> MemoStats {
        self.memo.stats()
    }
}

impl HuffmanCoder {
    /// Create a Huffman coder with default configuration.
    pub fn new() -> Self {
        Self::with_config(CoderConfig::default())
    }

    /// Create a Huffman coder with the given configuration.
    pub fn with_config(config: CoderConfig) -> Self {
        let mut coder = Self::with_strategy(HuffmanBuilder::new(config.merge_strategy));
        coder.log_tables = config.log_tables;
        coder
    }

    /// Create a coder builder.
    pub fn builder() -> CoderBuilder {
        CoderBuilder::new()
    }

    /// The configuration this coder runs with.
    pub fn config(&self) -> CoderConfig {
        CoderConfig {
            merge_strategy: self.strategy.strategy(),
            log_tables: self.log_tables,
        }
    }
}

impl Default for HuffmanCoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CodeStrategy> EffectiveCoder for Coder<S> {
    fn create_code(&mut self, text: &str) -> bool {
        if text.is_empty() {
            debug!("empty text, clearing {} code table", self.strategy.name());
            self.memo.clear();
            return true;
        }

        let strategy = &self.strategy;
        let recomputed = self.memo.refresh(text, |text| build_table(text, strategy));

        if !recomputed {
            trace!("text unchanged, keeping previous code table");
            return false;
        }

        if let Some(table) = self.memo.get() {
            debug!(
                "built {} code for {} distinct characters",
                self.strategy.name(),
                table.len()
            );
            if self.log_tables {
                for word in table {
                    debug!(
                        "  {:?} p={:.6} code={}",
                        word.character, word.probability, word.code
                    );
                }
            }
        }

        true
    }

    fn result(&self) -> Option<&CodeTable> {
        self.memo.get()
    }

    fn last_text(&self) -> Option<&str> {
        self.memo.key()
    }

    fn invalidate(&mut self) {
        self.memo.clear();
    }
}
