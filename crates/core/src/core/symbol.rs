//! Code words and finished code tables.
//!
//! A [`CodeWord`] pairs one distinct character with its relative frequency and
//! the bit string assigned to it. A [`CodeTable`] is the ordered list of code
//! words produced for one input text.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One distinct character together with its probability and code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeWord {
    /// The character this word encodes
    pub character: char,
    /// Relative frequency in the analyzed text, in (0, 1]
    pub probability: f64,
    /// Assigned bits as a string over `{'0', '1'}`, read left to right
    pub code: String,
}

impl CodeWord {
    /// Create a code word with an empty code.
    pub fn new(character: char, probability: f64) -> Self {
        Self {
            character,
            probability,
            code: String::new(),
        }
    }

    /// Append a single bit to the code.
    #[inline]
    pub fn push_bit(&mut self, bit: bool) {
        self.code.push(if bit { '1' } else { '0' });
    }

    /// Append a run of bits to the code.
    #[inline]
    pub fn append_code(&mut self, bits: &str) {
        self.code.push_str(bits);
    }

    /// Number of bits in the code.
    #[inline]
    pub fn code_len(&self) -> usize {
        self.code.len()
    }
}

/// Ordered list of code words for one text.
///
/// Words are ordered by descending probability; equal probabilities keep the
/// order in which their characters first occur in the text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    words: Vec<CodeWord>,
}

impl CodeTable {
    /// Wrap an already built list of code words.
    pub fn new(words: Vec<CodeWord>) -> Self {
        Self { words }
    }

    /// Get the code word for a character.
    pub fn get(&self, character: char) -> Option<&CodeWord> {
        self.words.iter().find(|w| w.character == character)
    }

    /// Get the code for a character.
    pub fn code_of(&self, character: char) -> Option<&str> {
        self.get(character).map(|w| w.code.as_str())
    }

    /// Borrow the code words.
    pub fn words(&self) -> &[CodeWord] {
        &self.words
    }

    /// Consume the table and return its code words.
    pub fn into_words(self) -> Vec<CodeWord> {
        self.words
    }

    /// A single-symbol alphabet carries the empty code.
    ///
    /// Such a table cannot be used to transmit a bit stream unambiguously,
    /// so consumers have to special-case it.
    pub fn is_degenerate(&self) -> bool {
        self.words.len() == 1
    }

    /// Check that no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.words.iter().map(|w| w.code.as_str()).collect();
        // After sorting, a prefix always sorts directly before some word it prefixes.
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Number of bits `text` would occupy under this table.
    ///
    /// Returns `None` if the text contains a character the table has no code for.
    pub fn encoded_len(&self, text: &str) -> Option<usize> {
        text.chars()
            .map(|c| self.get(c).map(CodeWord::code_len))
            .sum()
    }

    /// Render the table as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Deref for CodeTable {
    type Target = [CodeWord];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl From<Vec<CodeWord>> for CodeTable {
    fn from(words: Vec<CodeWord>) -> Self {
        Self::new(words)
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = &'a CodeWord;
    type IntoIter = std::slice::Iter<'a, CodeWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
