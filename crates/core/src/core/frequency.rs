//! Character frequency analysis.
//!
//! This module scans a text once and records each distinct character in
//! first-occurrence order together with its occurrence count. Lengths are
//! measured in Unicode scalar values.

use super::symbol::CodeWord;
use ahash::AHashMap;

/// Occurrence counts for the distinct characters of a text.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Distinct characters in first-occurrence order
    order: Vec<char>,
    /// Character -> occurrence count
    counts: AHashMap<char, u64>,
    /// Total number of characters seen
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every character of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        table.add_text(text);
        table
    }

    /// Add all characters of `text` to the counts.
    pub fn add_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.add_char(ch);
        }
    }

    /// Add a single character occurrence.
    pub fn add_char(&mut self, ch: char) {
        let count = self.counts.entry(ch).or_insert(0);
        if *count == 0 {
            self.order.push(ch);
        }
        *count += 1;
        self.total += 1;
    }

    /// Distinct characters in first-occurrence order.
    pub fn chars(&self) -> &[char] {
        &self.order
    }

    /// Occurrence count of a character (0 if absent).
    pub fn count(&self, ch: char) -> u64 {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Total number of counted characters.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Probability of a character: count / total.
    pub fn probability(&self, ch: char) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(ch) as f64 / self.total as f64
    }

    /// One code word (with empty code) per distinct character, in
    /// first-occurrence order.
    pub fn code_words(&self) -> Vec<CodeWord> {
        self.order
            .iter()
            .map(|&ch| CodeWord::new(ch, self.probability(ch)))
            .collect()
    }
}

/// Distinct characters of `text` in first-occurrence order.
pub fn included_chars(text: &str) -> Vec<char> {
    FrequencyTable::from_text(text).chars().to_vec()
}

/// Number of occurrences of `ch` in `text`.
pub fn count_chars(text: &str, ch: char) -> usize {
    text.chars().filter(|&c| c == ch).count()
}

/// Probability list for `text`, ready to be handed to a code builder.
///
/// Returns an empty list for the empty text.
pub fn analyze(text: &str) -> Vec<CodeWord> {
    FrequencyTable::from_text(text).code_words()
}
