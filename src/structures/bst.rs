//! Binary search tree with ghost children
//!
//! Every keyed node carries exactly two children; an absent child is a
//! ghost leaf. The layout engine gives ghosts real slots, so the drawing
//! keeps a clean binary skeleton whichever branches are populated.

use std::cmp::Ordering;

use crate::tree::{Tree, TreeNode, TreeValue};

const LEFT: usize = 0;
const RIGHT: usize = 1;

/// BST slot: a key, or `None` for an absent child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct BstValue(pub Option<i64>);

impl TreeValue for BstValue {
    fn label(&self) -> Option<String> {
        self.0.map(|key| key.to_string())
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Integer BST that ignores duplicates
#[derive(Debug, Clone, Default)]
pub struct Bst {
    tree: Tree<BstValue>,
}

fn ghost() -> TreeNode<BstValue> {
    TreeNode::leaf(BstValue(None))
}

fn keyed(key: i64) -> TreeNode<BstValue> {
    TreeNode::with_children(BstValue(Some(key)), vec![ghost(), ghost()])
}

impl Bst {
    /// Empty tree
    pub fn new() -> Self {
        Self { tree: Tree::empty() }
    }

    /// Tree holding `keys`, inserted in order
    pub fn from_keys<I: IntoIterator<Item = i64>>(keys: I) -> Self {
        let mut bst = Self::new();
        for key in keys {
            bst.insert(key);
        }
        bst
    }

    /// Underlying tree, ghosts included
    pub fn tree(&self) -> &Tree<BstValue> {
        &self.tree
    }

    /// Give up the underlying tree
    pub fn into_tree(self) -> Tree<BstValue> {
        self.tree
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.tree.rendered_size()
    }

    /// Check if no keys are held
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Insert `key`; duplicates are ignored
    pub fn insert(&mut self, key: i64) {
        match self.tree.root.as_mut() {
            Some(root) => insert_at(root, key),
            None => self.tree.root = Some(keyed(key)),
        }
    }

    /// Remove `key`, returning whether it was present
    ///
    /// The left subtree takes the removed node's place; the right subtree
    /// hangs off the left subtree's rightmost node.
    pub fn remove(&mut self, key: i64) -> bool {
        let Some(root) = self.tree.root.as_mut() else {
            return false;
        };
        let removed = remove_at(root, key);
        if root.value.0.is_none() {
            self.tree.root = None;
        }
        removed
    }

    /// Ordered lookup
    pub fn contains(&self, key: i64) -> bool {
        let mut node = self.tree.root.as_ref();
        while let Some(current) = node {
            let Some(here) = current.value.0 else {
                return false;
            };
            node = match key.cmp(&here) {
                Ordering::Less => current.children.get(LEFT),
                Ordering::Greater => current.children.get(RIGHT),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Keys in ascending order
    pub fn keys(&self) -> Vec<i64> {
        let mut keys = Vec::with_capacity(self.len());
        if let Some(root) = &self.tree.root {
            collect_in_order(root, &mut keys);
        }
        keys
    }
}

fn insert_at(node: &mut TreeNode<BstValue>, key: i64) {
    match node.value.0 {
        None => *node = keyed(key),
        Some(here) => match key.cmp(&here) {
            Ordering::Less => insert_at(&mut node.children[LEFT], key),
            Ordering::Greater => insert_at(&mut node.children[RIGHT], key),
            Ordering::Equal => {}
        },
    }
}

fn remove_at(node: &mut TreeNode<BstValue>, key: i64) -> bool {
    let Some(here) = node.value.0 else {
        return false;
    };
    match key.cmp(&here) {
        Ordering::Less => remove_at(&mut node.children[LEFT], key),
        Ordering::Greater => remove_at(&mut node.children[RIGHT], key),
        Ordering::Equal => {
            let mut children = std::mem::take(&mut node.children);
            let right = children.pop().unwrap_or_else(ghost);
            let mut left = children.pop().unwrap_or_else(ghost);
            *node = if left.value.0.is_none() {
                right
            } else {
                graft_rightmost(&mut left, right);
                left
            };
            true
        }
    }
}

fn graft_rightmost(node: &mut TreeNode<BstValue>, subtree: TreeNode<BstValue>) {
    let right = &mut node.children[RIGHT];
    if right.value.0.is_some() {
        graft_rightmost(right, subtree);
    } else {
        *right = subtree;
    }
}

fn collect_in_order(node: &TreeNode<BstValue>, keys: &mut Vec<i64>) {
    let Some(key) = node.value.0 else {
        return;
    };
    collect_in_order(&node.children[LEFT], keys);
    keys.push(key);
    collect_in_order(&node.children[RIGHT], keys);
}
