//! Priority queue for Huffman merge candidates.
//!
//! The queue pops nodes in exactly the order a stable descending sort would
//! leave them at the tail of the list: smallest probability first, and among
//! equal probabilities the node that entered the queue last. Leaves enter in
//! list order, merged nodes after all of them, so repeated pops reproduce the
//! sort-and-take-the-last-two reduction without re-sorting.

use super::tree::MergeNode;
use dary_heap::OctonaryHeap;
use std::cmp::Ordering;

/// A node waiting to be merged.
#[derive(Debug, Clone)]
pub struct MergeCandidate {
    /// Probability mass of the node
    pub probability: f64,
    /// Insertion sequence number
    pub sequence: usize,
    /// The node itself
    pub node: MergeNode,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(node: MergeNode, sequence: usize) -> Self {
        Self {
            probability: node.probability(),
            sequence,
            node,
        }
    }
}

// Lower probability = higher priority; ties go to the newest entry.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .probability
            .total_cmp(&self.probability)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MergeCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MergeCandidate {}

/// Priority queue of merge candidates.
///
/// Uses an 8-ary heap for better cache locality than a binary heap.
pub struct MergeQueue {
    /// The heap storing merge candidates
    heap: OctonaryHeap<MergeCandidate>,
    /// Next sequence number to hand out
    next_sequence: usize,
}

impl MergeQueue {
    /// Create a new queue with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: OctonaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Create a new empty queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Push a node, stamping it with the next sequence number.
    pub fn push(&mut self, node: MergeNode) {
        let candidate = MergeCandidate::new(node, self.next_sequence);
        self.next_sequence += 1;
        self.heap.push(candidate);
    }

    /// Pop the node that has to be merged next.
    pub fn pop(&mut self) -> Option<MergeNode> {
        self.heap.pop().map(|candidate| candidate.node)
    }

    /// Peek at the next candidate without removing it.
    pub fn peek(&self) -> Option<&MergeCandidate> {
        self.heap.peek()
    }

    /// Number of queued nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Default for MergeQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<MergeNode> for MergeQueue {
    fn extend<I: IntoIterator<Item = MergeNode>>(&mut self, iter: I) {
        for node in iter {
            self.push(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_index(node: Option<MergeNode>) -> usize {
        match node {
            Some(MergeNode::Leaf { index, .. }) => index,
            other => panic!("expected a leaf, got {:?}", other),
        }
    }

    #[test]
    fn test_pops_lowest_probability_first() {
        let mut queue = MergeQueue::new();
        queue.push(MergeNode::leaf(0, 0.5));
        queue.push(MergeNode::leaf(1, 0.2));
        queue.push(MergeNode::leaf(2, 0.3));

        assert_eq!(leaf_index(queue.pop()), 1);
        assert_eq!(leaf_index(queue.pop()), 2);
        assert_eq!(leaf_index(queue.pop()), 0);
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_ties_pop_newest_first() {
        let mut queue = MergeQueue::new();
        queue.extend((0..4).map(|i| MergeNode::leaf(i, 0.25)));

        assert_eq!(leaf_index(queue.pop()), 3);
        assert_eq!(leaf_index(queue.pop()), 2);
        assert_eq!(leaf_index(queue.pop()), 1);
        assert_eq!(leaf_index(queue.pop()), 0);
    }

    #[test]
    fn test_merged_node_loses_ties_against_leaves() {
        let mut queue = MergeQueue::new();
        queue.push(MergeNode::leaf(0, 0.5));
        queue.push(MergeNode::merge(
            MergeNode::leaf(1, 0.25),
            MergeNode::leaf(2, 0.25),
        ));

        // The merged node entered last, so it sits lowest among equals.
        let first = queue.peek().unwrap();
        assert_eq!(first.sequence, 1);
        assert!(matches!(queue.pop(), Some(MergeNode::Internal { .. })));
        assert_eq!(leaf_index(queue.pop()), 0);
    }

    #[test]
    fn test_len() {
        let mut queue = MergeQueue::with_capacity(2);
        assert!(queue.is_empty());

        queue.push(MergeNode::leaf(0, 1.0));
        assert_eq!(queue.len(), 1);
        queue.pop();
        assert!(queue.is_empty());
    }
}
