//! Huffcode-core - Huffman code construction
//!
//! This crate provides the data structures and algorithms that turn a text
//! into a minimum-redundancy prefix code for its distinct characters.
//!
//! # Features
//!
//! - Single-pass frequency analysis in first-occurrence order
//! - Explicit merge tree with deterministic tie-breaking
//! - Heap-driven and sort-driven reductions that yield identical codes
//! - Display tree and quality statistics for finished code tables
//!
//! # Example
//!
//! ```rust
//! use huffcode_core::{analyze, CodeStrategy, HuffmanBuilder};
//!
//! let mut words = analyze("aaaabbbcc");
//! HuffmanBuilder::default().build(&mut words);
//!
//! let codes: Vec<_> = words.iter().map(|w| (w.character, w.code.as_str())).collect();
//! assert_eq!(codes, vec![('a', "1"), ('b', "00"), ('c', "01")]);
//! ```

pub mod error;
pub use error::{HuffcodeError, Result};

// Core data structures
pub mod core;
pub use crate::core::{
    analyze, count_chars, included_chars, CodeTable, CodeWord, FrequencyTable, MergeCandidate,
    MergeNode, MergeQueue, MergeTree,
};

// Construction strategies
pub mod coding;
pub use coding::{CodeStrategy, HuffmanBuilder, MergeStrategy};

// Views over finished tables
pub mod code_tree;
pub use code_tree::CodeTree;

pub mod stats;
pub use stats::CodeStats;
