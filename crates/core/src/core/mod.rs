//! Core data structures for Huffman code construction.
//!
//! This module contains the symbol model, frequency analysis, the merge
//! queue and the explicit merge tree, independent of any specific strategy.

pub mod frequency;
pub mod priority;
pub mod symbol;
pub mod tree;

pub use frequency::{analyze, count_chars, included_chars, FrequencyTable};
pub use priority::{MergeCandidate, MergeQueue};
pub use symbol::{CodeTable, CodeWord};
pub use tree::{MergeNode, MergeTree};
