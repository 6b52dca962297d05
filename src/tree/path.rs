//! Integer path addressing
//!
//! Root = empty path, i-th child appends `i`.
//! Path length equals depth; for a fixed shape a path names exactly one node.

use std::fmt;

/// Location of a node as a sequence of child indices
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// The root's path
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of this node's `index`-th child
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// Path of the parent (`None` at the root)
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// Depth of the addressed node
    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root's path
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Branch index taken into the addressed node (`None` at the root)
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Raw indices
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Element-wise prefix test (every path is a prefix of itself)
    pub fn is_prefix_of(&self, other: &NodePath) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for NodePath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "]")
    }
}

/// Set of paths queried by highlight predicates
///
/// Paths that point past the real child count are kept as-is; they simply
/// never match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    paths: Vec<NodePath>,
}

impl PathSet {
    /// Empty set (matches nothing)
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Add a path
    pub fn insert(&mut self, path: NodePath) {
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
    }

    /// Number of paths held
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no paths are held
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate held paths
    pub fn iter(&self) -> impl Iterator<Item = &NodePath> {
        self.paths.iter()
    }

    /// `path` equals some member
    pub fn contains_exact(&self, path: &NodePath) -> bool {
        self.paths.iter().any(|member| member == path)
    }

    /// `path` is a prefix of some member
    ///
    /// Marks every node on the way from the root down to a target.
    pub fn contains_prefix_of(&self, path: &NodePath) -> bool {
        self.paths.iter().any(|member| path.is_prefix_of(member))
    }

    /// Some member is a prefix of `path`
    ///
    /// Marks every node of a subtree given the subtree root's path.
    pub fn is_ancestor_in(&self, path: &NodePath) -> bool {
        self.paths.iter().any(|member| member.is_prefix_of(path))
    }
}

impl FromIterator<NodePath> for PathSet {
    fn from_iter<I: IntoIterator<Item = NodePath>>(iter: I) -> Self {
        let mut set = PathSet::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

impl From<Vec<Vec<usize>>> for PathSet {
    fn from(paths: Vec<Vec<usize>>) -> Self {
        paths.into_iter().map(NodePath::from).collect()
    }
}
