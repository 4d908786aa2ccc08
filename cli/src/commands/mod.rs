//! CLI commands for huffcode.

pub mod benchmark;
pub mod code;
pub mod input;
pub mod stats;
pub mod tree;

pub use benchmark::BenchmarkCommand;
pub use code::CodeCommand;
pub use stats::StatsCommand;
pub use tree::TreeCommand;
