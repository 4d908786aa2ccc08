//! Huffcode-coder - High-level effective-coder API
//!
//! This crate wraps the construction algorithms of `huffcode-core` in a
//! memoizing façade: a coder remembers the last text it saw and the code
//! table built for it, and reports whether a submission caused a
//! recomputation.
//!
//! # Features
//!
//! - `EffectiveCoder` contract shared by every code construction family
//! - Huffman coder with a builder for its configuration
//! - Thread-safe wrapper publishing results as `Arc` snapshots
//! - Parallel batch coding of independent texts
//!
//! # Example
//!
//! ```rust
//! use huffcode_coder::{EffectiveCoder, HuffmanCoder};
//!
//! let mut coder = HuffmanCoder::new();
//! assert!(coder.create_code("aaab"));
//! assert!(!coder.create_code("aaab"));
//!
//! let table = coder.result().unwrap();
//! assert_eq!(table.code_of('a'), Some("0"));
//! assert_eq!(table.code_of('b'), Some("1"));
//! ```

// Re-export core types
pub use huffcode_core::{
    CodeStats, CodeStrategy, CodeTable, CodeTree, CodeWord, HuffcodeError, HuffmanBuilder,
    MergeStrategy, Result,
};

// Coder API
pub mod coder;
pub use coder::{
    build_table, code_batch, Coder, CoderBuilder, CoderConfig, EffectiveCoder, HuffmanCoder,
    SharedCoder,
};

// Utilities
pub mod utils;
pub use utils::{MemoSlot, MemoStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
