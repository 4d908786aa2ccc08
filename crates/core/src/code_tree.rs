//! Display tree derived from a finished code table.
//!
//! Tree viewers only get the code list, so they rebuild the binary tree from
//! the codes themselves: at every depth the words still below a node are split
//! by their bit at that depth. A child holding a single word is labelled
//! `'c':code`, every other node carries an empty label.

use crate::core::CodeWord;
use std::fmt::Write;

/// A node of the derived code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    /// Bit on the edge leading to this node, `None` for the root
    bit: Option<char>,
    /// Node text
    label: String,
    /// Children, the `0` branch first
    children: Vec<CodeTree>,
}

impl CodeTree {
    /// Derive the tree for a list of code words.
    ///
    /// A single word with the empty code yields a lone root.
    pub fn from_code_words(words: &[CodeWord]) -> Self {
        let mut root = Self::node(None, String::new());
        let words: Vec<&CodeWord> = words.iter().collect();
        root.grow(&words, 0);
        root
    }

    fn node(bit: Option<char>, label: String) -> Self {
        Self {
            bit,
            label,
            children: Vec::new(),
        }
    }

    fn grow(&mut self, words: &[&CodeWord], depth: usize) {
        let mut zeros = Vec::new();
        let mut ones = Vec::new();

        for &word in words {
            match word.code.as_bytes().get(depth) {
                Some(b'0') => zeros.push(word),
                Some(_) => ones.push(word),
                None => {}
            }
        }

        for (bit, group) in [('0', zeros), ('1', ones)] {
            if group.is_empty() {
                continue;
            }
            let label = match group.as_slice() {
                [only] => format!("'{}':{}", only.character, only.code),
                _ => String::new(),
            };
            let mut child = Self::node(Some(bit), label);
            child.grow(&group, depth + 1);
            self.children.push(child);
        }
    }

    /// Node text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Bit on the incoming edge.
    pub fn bit(&self) -> Option<char> {
        self.bit
    }

    /// Child nodes.
    pub fn children(&self) -> &[CodeTree] {
        &self.children
    }

    /// Check if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels, counting this node.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(CodeTree::depth).max().unwrap_or(0)
    }

    /// Largest number of children any node in this tree has.
    pub fn max_child_count(&self) -> usize {
        self.children
            .iter()
            .map(CodeTree::max_child_count)
            .fold(self.children.len(), usize::max)
    }

    /// Indented text dump, one node per line.
    pub fn render_ascii(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let edge = self.bit.map(String::from).unwrap_or_else(|| "root".to_string());
        if self.label.is_empty() {
            let _ = writeln!(out, "{}{}", indent, edge);
        } else {
            let _ = writeln!(out, "{}{} -> {}", indent, edge, self.label);
        }
        for child in &self.children {
            child.render_into(out, depth + 1);
        }
    }
}
