//! Utility types for the coder crate.

pub mod memo;

pub use memo::{MemoSlot, MemoStats};
