//! Code construction strategies.
//!
//! A strategy receives the probability list of a text and writes a code into
//! every word. Huffman coding is the strategy implemented here; other
//! effective-coding families plug in through the same trait.

pub mod huffman;

pub use huffman::{HuffmanBuilder, MergeStrategy};

use crate::core::CodeWord;

/// A code construction algorithm.
pub trait CodeStrategy: Send + Sync {
    /// Short name of the algorithm family.
    fn name(&self) -> &'static str;

    /// Assign codes to `words` in place.
    ///
    /// Implementations may reorder the slice; the order they leave behind is
    /// the order of the finished code table.
    fn build(&self, words: &mut [CodeWord]);
}
