//! Tree node and value contract
//!
//! Node = value + ordered children
//! Child order is significant: position i is branch i.

use std::fmt;

use super::NodePath;

/// Capability every value stored in a drawable tree provides
///
/// Producers (BST keys, Huffman weights, random-structure markers)
/// implement this independently; nothing else is required of them.
pub trait TreeValue {
    /// Display label, or `None` for a ghost that occupies layout space
    /// but is never drawn.
    fn label(&self) -> Option<String>;

    /// Logical equivalence, used for containment queries only.
    fn equivalent(&self, other: &Self) -> bool;

    /// Ghost nodes keep fixed-arity trees symmetric
    #[inline]
    fn is_ghost(&self) -> bool {
        self.label().is_none()
    }
}

/// Rooted, ordered tree node
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<V> {
    /// Payload
    pub value: V,

    /// Ordered children (index = branch number)
    pub children: Vec<TreeNode<V>>,
}

impl<V> TreeNode<V> {
    /// Create childless node
    pub fn leaf(value: V) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Create node with the given children, order preserved
    pub fn with_children(value: V, children: Vec<TreeNode<V>>) -> Self {
        Self { value, children }
    }

    /// Check if leaf
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, ghosts included
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::subtree_size)
            .sum::<usize>()
    }

    /// Height of this subtree (a leaf has height 0)
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Follow `path` down from this node
    ///
    /// Out-of-range indices yield `None`.
    pub fn descendant(&self, path: &NodePath) -> Option<&TreeNode<V>> {
        let mut node = self;
        for &index in path.indices() {
            node = node.children.get(index)?;
        }
        Some(node)
    }
}

impl<V: TreeValue> TreeNode<V> {
    /// Number of drawn nodes in this subtree
    ///
    /// A ghost hides its whole subtree: it contributes nothing, and neither
    /// does anything hanging off it. Projection follows the same rule.
    pub fn rendered_size(&self) -> usize {
        if self.value.is_ghost() {
            return 0;
        }
        1 + self
            .children
            .iter()
            .map(TreeNode::rendered_size)
            .sum::<usize>()
    }
}

impl<V: TreeValue> fmt::Display for TreeNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.label() {
            Some(label) => write!(f, "({label}")?,
            None => write!(f, "(_")?,
        }
        for child in &self.children {
            write!(f, " {child}")?;
        }
        write!(f, ")")
    }
}
