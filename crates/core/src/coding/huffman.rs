//! Huffman code construction.
//!
//! The list is first sorted by descending probability (stable, so equal
//! probabilities keep their first-occurrence order). The two last entries,
//! the smallest and the next-smallest, are merged into one node that joins
//! the list again, until a single root remains. The higher of each merged
//! pair sits on the `0` branch and the lower on the `1` branch.
//!
//! Two ways of running the reduction are provided and produce identical
//! codes, ties included:
//!
//! - [`MergeStrategy::SortedReduction`] re-sorts the working list before every
//!   merge, O(n² log n) for an alphabet of n characters.
//! - [`MergeStrategy::Heap`] keeps the nodes in a [`MergeQueue`] whose ordering
//!   matches the position a stable sort would give them, O(n log n).

use super::CodeStrategy;
use crate::core::{CodeWord, MergeNode, MergeQueue, MergeTree};
use crate::{HuffcodeError, Result};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the merge reduction is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Priority-queue driven merging
    #[default]
    Heap,
    /// Re-sort the whole working list before every merge
    SortedReduction,
}

impl MergeStrategy {
    /// Every available strategy.
    pub const ALL: [MergeStrategy; 2] = [MergeStrategy::Heap, MergeStrategy::SortedReduction];

    /// Name used on the command line and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeStrategy::Heap => "heap",
            MergeStrategy::SortedReduction => "sorted",
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeStrategy {
    type Err = HuffcodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "heap" => Ok(MergeStrategy::Heap),
            "sorted" | "sorted-reduction" | "reduction" => Ok(MergeStrategy::SortedReduction),
            other => Err(HuffcodeError::InvalidConfig(format!(
                "Unknown merge strategy '{}' (expected 'heap' or 'sorted')",
                other
            ))),
        }
    }
}

/// Huffman code builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanBuilder {
    strategy: MergeStrategy,
}

impl HuffmanBuilder {
    /// Create a builder using the given merge strategy.
    pub fn new(strategy: MergeStrategy) -> Self {
        Self { strategy }
    }

    /// The merge strategy in use.
    pub fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// Build the merge tree for a list already sorted by descending
    /// probability.
    ///
    /// Returns `None` for an empty list.
    pub fn merge_tree(&self, sorted: &[CodeWord]) -> Option<MergeTree> {
        let leaves = sorted
            .iter()
            .enumerate()
            .map(|(index, word)| MergeNode::leaf(index, word.probability));

        match self.strategy {
            MergeStrategy::Heap => Self::reduce_with_queue(leaves),
            MergeStrategy::SortedReduction => Self::reduce_by_sorting(leaves.collect()),
        }
    }

    fn reduce_with_queue(leaves: impl ExactSizeIterator<Item = MergeNode>) -> Option<MergeTree> {
        let mut queue = MergeQueue::with_capacity(leaves.len());
        queue.extend(leaves);

        while let Some(lower) = queue.pop() {
            match queue.pop() {
                Some(higher) => {
                    trace!(
                        "merge {:.6} + {:.6}",
                        higher.probability(),
                        lower.probability()
                    );
                    queue.push(MergeNode::merge(higher, lower));
                }
                None => return Some(MergeTree::new(lower)),
            }
        }

        None
    }

    fn reduce_by_sorting(mut level: Vec<MergeNode>) -> Option<MergeTree> {
        while level.len() > 1 {
            sort_descending(&mut level, MergeNode::probability);

            let mut pair = level.split_off(level.len() - 2).into_iter();
            if let (Some(higher), Some(lower)) = (pair.next(), pair.next()) {
                trace!(
                    "merge {:.6} + {:.6}",
                    higher.probability(),
                    lower.probability()
                );
                level.push(MergeNode::merge(higher, lower));
            }
        }

        level.pop().map(MergeTree::new)
    }
}

impl CodeStrategy for HuffmanBuilder {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn build(&self, words: &mut [CodeWord]) {
        if words.len() <= 1 {
            return;
        }

        debug_assert!(
            words.iter().all(|w| !w.probability.is_nan()),
            "NaN probability handed to the Huffman builder"
        );

        sort_descending(words, |w| w.probability);

        if let Some(tree) = self.merge_tree(words) {
            trace!(
                "{} merge tree: {} leaves, depth {}",
                self.strategy,
                tree.leaf_count(),
                tree.depth()
            );
            tree.assign_codes(words);
        }
    }
}

/// Stable sort by descending probability.
fn sort_descending<T>(items: &mut [T], probability: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| probability(b).total_cmp(&probability(a)));
}
