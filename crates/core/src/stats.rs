//! Quality measures for a finished code.

use crate::core::CodeWord;
use serde::Serialize;

/// Summary statistics of a code table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodeStats {
    /// Number of coded characters
    pub symbol_count: usize,
    /// Expected bits per character: Σ p·|code|
    pub average_length: f64,
    /// Shannon entropy of the source in bits: −Σ p·log2 p
    pub entropy: f64,
    /// entropy / average_length (1.0 for an empty average length)
    pub efficiency: f64,
    /// average_length − entropy
    pub redundancy: f64,
    /// Longest code in bits
    pub max_length: usize,
}

impl CodeStats {
    /// Compute the statistics for a list of code words.
    pub fn from_code_words(words: &[CodeWord]) -> Self {
        let average_length: f64 = words
            .iter()
            .map(|w| w.probability * w.code_len() as f64)
            .sum();

        let entropy: f64 = words
            .iter()
            .filter(|w| w.probability > 0.0)
            .map(|w| w.probability * (1.0 / w.probability).log2())
            .sum();

        let efficiency = if average_length > 0.0 {
            entropy / average_length
        } else {
            1.0
        };

        Self {
            symbol_count: words.len(),
            average_length,
            entropy,
            efficiency,
            redundancy: average_length - entropy,
            max_length: words.iter().map(CodeWord::code_len).max().unwrap_or(0),
        }
    }
}
