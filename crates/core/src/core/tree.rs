//! Explicit binary merge tree.
//!
//! Every merge of two nodes produces an internal node that owns both inputs:
//! the higher-probability input on the `0` branch and the lower-probability
//! input on the `1` branch. Leaves refer back to the code word they stand for
//! by index, so codes are written in a single root-to-leaf pass once the tree
//! is complete.

use super::symbol::CodeWord;

/// A node of the merge tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeNode {
    /// An original symbol
    Leaf {
        /// Index of the code word in the list the tree was built from
        index: usize,
        probability: f64,
    },
    /// The merge of two nodes
    Internal {
        probability: f64,
        /// Higher-probability child, reached with bit `0`
        zero: Box<MergeNode>,
        /// Lower-probability child, reached with bit `1`
        one: Box<MergeNode>,
    },
}

impl MergeNode {
    /// Create a leaf for the code word at `index`.
    pub fn leaf(index: usize, probability: f64) -> Self {
        MergeNode::Leaf { index, probability }
    }

    /// Merge two nodes. `higher` takes the `0` branch, `lower` the `1` branch.
    pub fn merge(higher: Self, lower: Self) -> Self {
        MergeNode::Internal {
            probability: higher.probability() + lower.probability(),
            zero: Box::new(higher),
            one: Box::new(lower),
        }
    }

    /// Probability mass below this node.
    pub fn probability(&self) -> f64 {
        match self {
            MergeNode::Leaf { probability, .. } => *probability,
            MergeNode::Internal { probability, .. } => *probability,
        }
    }

    /// Height of the subtree; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            MergeNode::Leaf { .. } => 0,
            MergeNode::Internal { zero, one, .. } => 1 + zero.depth().max(one.depth()),
        }
    }

    /// Number of leaves below this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            MergeNode::Leaf { .. } => 1,
            MergeNode::Internal { zero, one, .. } => zero.leaf_count() + one.leaf_count(),
        }
    }
}

/// A complete merge tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeTree {
    root: MergeNode,
}

impl MergeTree {
    /// Wrap a finished root node.
    pub fn new(root: MergeNode) -> Self {
        Self { root }
    }

    /// The root node.
    pub fn root(&self) -> &MergeNode {
        &self.root
    }

    /// Height of the tree, which is also the longest code length.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Append each leaf's path bits to the code of the word it refers to.
    ///
    /// Bits are written root first. A tree that is a single leaf leaves the
    /// code untouched.
    pub fn assign_codes(&self, words: &mut [CodeWord]) {
        let mut stack: Vec<(&MergeNode, String)> = vec![(&self.root, String::new())];

        while let Some((node, path)) = stack.pop() {
            match node {
                MergeNode::Leaf { index, .. } => {
                    debug_assert!(*index < words.len(), "leaf index {} out of range", index);
                    if let Some(word) = words.get_mut(*index) {
                        word.append_code(&path);
                    }
                }
                MergeNode::Internal { zero, one, .. } => {
                    let mut one_path = path.clone();
                    one_path.push('1');
                    let mut zero_path = path;
                    zero_path.push('0');
                    stack.push((one.as_ref(), one_path));
                    stack.push((zero.as_ref(), zero_path));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sums_probabilities() {
        let node = MergeNode::merge(MergeNode::leaf(0, 0.375), MergeNode::leaf(1, 0.125));
        assert_eq!(node.probability(), 0.5);
        assert_eq!(node.depth(), 1);
        assert_eq!(node.leaf_count(), 2);
    }

    #[test]
    fn test_assign_codes() {
        // ((b, c), a) with b/c merged first
        let bc = MergeNode::merge(MergeNode::leaf(1, 3.0 / 9.0), MergeNode::leaf(2, 2.0 / 9.0));
        let tree = MergeTree::new(MergeNode::merge(bc, MergeNode::leaf(0, 4.0 / 9.0)));

        let mut words = vec![
            CodeWord::new('a', 4.0 / 9.0),
            CodeWord::new('b', 3.0 / 9.0),
            CodeWord::new('c', 2.0 / 9.0),
        ];
        tree.assign_codes(&mut words);

        assert_eq!(words[0].code, "1");
        assert_eq!(words[1].code, "00");
        assert_eq!(words[2].code, "01");
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.leaf_count(), 3);
    }

    #[test]
    fn test_single_leaf_assigns_empty_code() {
        let tree = MergeTree::new(MergeNode::leaf(0, 1.0));
        let mut words = vec![CodeWord::new('z', 1.0)];
        tree.assign_codes(&mut words);

        assert_eq!(words[0].code, "");
        assert_eq!(tree.depth(), 0);
    }
}
