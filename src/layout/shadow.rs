//! Layout shadow of an input tree
//!
//! Same shape as the input, one `LayoutRecord` per node. The shadow
//! borrows the input values and never writes back to them.

use crate::tree::{NodePath, Tree, TreeNode, TreeValue};

/// Per-node layout state
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRecord<'a, V> {
    /// Horizontal position (relative while solving, absolute afterwards)
    pub x: f64,

    /// Level while solving, absolute vertical position afterwards
    pub y: f64,

    /// Deferred shift for every descendant; zero once solved
    pub modifier: f64,

    /// Occupies space but is not drawn
    pub ghost: bool,

    /// Input value, borrowed
    pub value: &'a V,
}

/// Node of the shadow tree
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode<'a, V> {
    /// Layout state
    pub record: LayoutRecord<'a, V>,

    /// Shadows of the input children, same order and count
    pub children: Vec<LayoutNode<'a, V>>,
}

impl<'a, V: TreeValue> LayoutNode<'a, V> {
    fn shadow(node: &'a TreeNode<V>) -> Self {
        Self {
            record: LayoutRecord {
                x: 0.0,
                y: 0.0,
                modifier: 0.0,
                ghost: node.value.is_ghost(),
                value: &node.value,
            },
            children: node.children.iter().map(LayoutNode::shadow).collect(),
        }
    }
}

impl<'a, V> LayoutNode<'a, V> {
    /// Check if leaf
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Where this node's children would centre it
    ///
    /// Midpoint of first and last child, the only child's x, or 0 for a leaf.
    pub fn children_midpoint(&self) -> f64 {
        match (self.children.first(), self.children.last()) {
            (Some(first), Some(last)) => (first.record.x + last.record.x) / 2.0,
            _ => 0.0,
        }
    }
}

/// Shadow tree handed through solve, bounds and projection
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTree<'a, V> {
    /// Root (`None` for an empty input)
    pub root: Option<LayoutNode<'a, V>>,
}

impl<'a, V: TreeValue> LayoutTree<'a, V> {
    /// Mirror `tree` with fresh records at `(0, 0)`, mod 0
    pub fn shadow(tree: &'a Tree<V>) -> Self {
        Self {
            root: tree.root.as_ref().map(LayoutNode::shadow),
        }
    }
}

impl<'a, V> LayoutTree<'a, V> {
    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Every record in preorder, with its path
    pub fn records(&self) -> Vec<(NodePath, &LayoutRecord<'a, V>)> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            collect_records(root, NodePath::root(), &mut out);
        }
        out
    }

    /// Record at `path`
    pub fn record(&self, path: &NodePath) -> Option<&LayoutRecord<'a, V>> {
        let mut node = self.root.as_ref()?;
        for &index in path.indices() {
            node = node.children.get(index)?;
        }
        Some(&node.record)
    }
}

fn collect_records<'t, 'a, V>(
    node: &'t LayoutNode<'a, V>,
    path: NodePath,
    out: &mut Vec<(NodePath, &'t LayoutRecord<'a, V>)>,
) {
    out.push((path.clone(), &node.record));
    for (index, child) in node.children.iter().enumerate() {
        collect_records(child, path.child(index), out);
    }
}

impl<'a, V> LayoutNode<'a, V> {
    /// Number of nodes in this subtree
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::subtree_len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Slot(Option<u8>);

    impl TreeValue for Slot {
        fn label(&self) -> Option<String> {
            self.0.map(|v| v.to_string())
        }

        fn equivalent(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    #[test]
    fn test_shadow_preserves_shape_and_ghosts() {
        let tree = Tree::new(TreeNode::with_children(
            Slot(Some(1)),
            vec![
                TreeNode::leaf(Slot(None)),
                TreeNode::with_children(Slot(Some(2)), vec![TreeNode::leaf(Slot(None))]),
            ],
        ));

        let shadow = LayoutTree::shadow(&tree);
        let root = shadow.root.as_ref().unwrap();
        assert_eq!(root.children.len(), 2);
        assert!(root.children[0].record.ghost);
        assert!(!root.children[1].record.ghost);
        assert_eq!(root.children[1].children.len(), 1);
        assert_eq!(root.subtree_len(), tree.size());

        for (_, record) in shadow.records() {
            assert_eq!((record.x, record.y, record.modifier), (0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_records_are_preorder() {
        let tree = Tree::new(TreeNode::with_children(
            Slot(Some(0)),
            vec![
                TreeNode::with_children(Slot(Some(1)), vec![TreeNode::leaf(Slot(Some(2)))]),
                TreeNode::leaf(Slot(Some(3))),
            ],
        ));
        let shadow = LayoutTree::shadow(&tree);
        let order: Vec<_> = shadow
            .records()
            .into_iter()
            .map(|(path, record)| (path.to_string(), record.value.0))
            .collect();
        assert_eq!(
            order,
            vec![
                ("[]".to_string(), Some(0)),
                ("[0]".to_string(), Some(1)),
                ("[0,0]".to_string(), Some(2)),
                ("[1]".to_string(), Some(3)),
            ]
        );
    }

    #[test]
    fn test_empty_shadow() {
        let tree: Tree<Slot> = Tree::empty();
        let shadow = LayoutTree::shadow(&tree);
        assert!(shadow.is_empty());
        assert!(shadow.records().is_empty());
    }
}
