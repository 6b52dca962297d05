//! Preorder traversal with path tracking
//!
//! The path stack grows by one index per level; each visited node is
//! reported together with a snapshot of the stack.

use super::{NodePath, TreeNode};

/// One entry of a tree's location map
#[derive(Debug, Clone, PartialEq)]
pub struct Location<'a, V> {
    /// Where the node sits
    pub path: NodePath,

    /// The node's value
    pub value: &'a V,
}

/// Explicit-stack preorder walk yielding `(path, node)` pairs
///
/// Children are visited left to right.
#[derive(Debug)]
pub struct PreorderWalk<'a, V> {
    /// Pending nodes, rightmost sibling at the bottom
    stack: Vec<(NodePath, &'a TreeNode<V>)>,
}

impl<'a, V> PreorderWalk<'a, V> {
    /// Start walking at `root` (or yield nothing)
    pub fn new(root: Option<&'a TreeNode<V>>) -> Self {
        Self {
            stack: root
                .map(|node| vec![(NodePath::root(), node)])
                .unwrap_or_default(),
        }
    }

    /// Nodes still pending
    pub fn pending(&self) -> usize {
        self.stack.len()
    }
}

impl<'a, V> Iterator for PreorderWalk<'a, V> {
    type Item = (NodePath, &'a TreeNode<V>);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        for (index, child) in node.children.iter().enumerate().rev() {
            self.stack.push((path.child(index), child));
        }
        Some((path, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preorder_paths() {
        // 0 -> (1 -> (3), 2)
        let root = TreeNode::with_children(
            0,
            vec![
                TreeNode::with_children(1, vec![TreeNode::leaf(3)]),
                TreeNode::leaf(2),
            ],
        );

        let visited: Vec<_> = PreorderWalk::new(Some(&root))
            .map(|(path, node)| (path.indices().to_vec(), node.value))
            .collect();

        assert_eq!(
            visited,
            vec![(vec![], 0), (vec![0], 1), (vec![0, 0], 3), (vec![1], 2)]
        );
    }

    #[test]
    fn test_empty_walk() {
        let mut walk: PreorderWalk<'_, u8> = PreorderWalk::new(None);
        assert_eq!(walk.pending(), 0);
        assert!(walk.next().is_none());
    }
}
