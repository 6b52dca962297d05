//! Generic rooted, ordered tree
//!
//! Pure data: a value plus ordered children per node, and integer paths
//! that address nodes by branch index. Producers build these once; the
//! layout engine only ever reads them.

mod node;
mod path;
mod traversal;

pub use node::{TreeNode, TreeValue};
pub use path::{NodePath, PathSet};
pub use traversal::{Location, PreorderWalk};

/// Possibly-empty rooted tree
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<V> {
    /// Root node (`None` = empty tree)
    pub root: Option<TreeNode<V>>,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V> Tree<V> {
    /// Tree with no nodes
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Tree rooted at `root`
    pub fn new(root: TreeNode<V>) -> Self {
        Self { root: Some(root) }
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes, ghosts included
    pub fn size(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::subtree_size)
    }

    /// Number of levels (0 for the empty tree)
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height() + 1)
    }

    /// Preorder walk with paths
    pub fn walk(&self) -> PreorderWalk<'_, V> {
        PreorderWalk::new(self.root.as_ref())
    }

    /// All values in preorder
    pub fn values(&self) -> Vec<&V> {
        self.walk().map(|(_, node)| &node.value).collect()
    }

    /// Every node's path paired with its value, in preorder
    ///
    /// E.g. in a binary tree `[0, 0, 1]` is left-left-right.
    pub fn location_map(&self) -> Vec<Location<'_, V>> {
        self.walk()
            .map(|(path, node)| Location {
                path,
                value: &node.value,
            })
            .collect()
    }

    /// Paths of every node whose value satisfies `predicate`
    pub fn paths_where<F>(&self, mut predicate: F) -> PathSet
    where
        F: FnMut(&V) -> bool,
    {
        self.walk()
            .filter(|(_, node)| predicate(&node.value))
            .map(|(path, _)| path)
            .collect()
    }

    /// Node at `path`, if the shape has one there
    pub fn get(&self, path: &NodePath) -> Option<&TreeNode<V>> {
        self.root.as_ref()?.descendant(path)
    }
}

impl<V: TreeValue> Tree<V> {
    /// Number of drawn nodes (ghost subtrees excluded)
    pub fn rendered_size(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::rendered_size)
    }

    /// Full search for an equivalent value
    ///
    /// No ordering is assumed; ordered producers may search faster themselves.
    pub fn contains(&self, value: &V) -> bool {
        self.walk().any(|(_, node)| node.value.equivalent(value))
    }
}

impl<V> From<TreeNode<V>> for Tree<V> {
    fn from(root: TreeNode<V>) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Letter(char);

    impl TreeValue for Letter {
        fn label(&self) -> Option<String> {
            (self.0 != '_').then(|| self.0.to_string())
        }

        fn equivalent(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    fn sample() -> Tree<Letter> {
        Tree::new(TreeNode::with_children(
            Letter('a'),
            vec![
                TreeNode::with_children(Letter('b'), vec![TreeNode::leaf(Letter('h'))]),
                TreeNode::leaf(Letter('_')),
                TreeNode::leaf(Letter('e')),
            ],
        ))
    }

    #[test]
    fn test_empty_tree() {
        let tree: Tree<Letter> = Tree::empty();
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.rendered_size(), 0);
        assert_eq!(tree.depth(), 0);
        assert!(tree.location_map().is_empty());
        assert!(!tree.contains(&Letter('a')));
    }

    #[test]
    fn test_location_map_is_preorder() {
        let tree = sample();
        let map: Vec<_> = tree
            .location_map()
            .into_iter()
            .map(|loc| (loc.path.to_string(), loc.value.0))
            .collect();

        assert_eq!(
            map,
            vec![
                ("[]".to_string(), 'a'),
                ("[0]".to_string(), 'b'),
                ("[0,0]".to_string(), 'h'),
                ("[1]".to_string(), '_'),
                ("[2]".to_string(), 'e'),
            ]
        );
    }

    #[test]
    fn test_paths_where_and_contains() {
        let tree = sample();
        let h = tree.paths_where(|v| v.0 == 'h');
        assert!(h.contains_exact(&NodePath::from(vec![0, 0])));
        assert_eq!(h.len(), 1);
        assert!(tree.contains(&Letter('e')));
        assert!(!tree.contains(&Letter('z')));
        assert_eq!(tree.size(), 5);
        assert_eq!(tree.rendered_size(), 4);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.get(&NodePath::from(vec![2])).map(|n| n.value.0), Some('e'));
    }
}
