//! Highlight sets for nodes, routes and subtrees
//!
//! Highlighting is best-effort annotation: a path that does not exist in
//! the tree simply matches nothing.

use crate::tree::{NodePath, PathSet};

/// Which parts of a drawing are emphasised
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    /// Individual nodes, matched exactly
    pub nodes: PathSet,

    /// Targets whose whole route from the root is marked
    pub paths: PathSet,

    /// Roots of subtrees marked in full
    pub subtrees: PathSet,
}

impl Highlights {
    /// Nothing highlighted
    pub fn none() -> Self {
        Self::default()
    }

    /// Mark single nodes
    pub fn with_nodes(mut self, nodes: PathSet) -> Self {
        self.nodes = nodes;
        self
    }

    /// Mark routes from the root to each target
    pub fn with_paths(mut self, paths: PathSet) -> Self {
        self.paths = paths;
        self
    }

    /// Mark whole subtrees
    pub fn with_subtrees(mut self, subtrees: PathSet) -> Self {
        self.subtrees = subtrees;
        self
    }

    /// Whether the node at `path` is emphasised
    pub fn node(&self, path: &NodePath) -> bool {
        self.nodes.contains_exact(path)
            || self.paths.contains_prefix_of(path)
            || self.subtrees.is_ancestor_in(path)
    }

    /// Whether the edge `parent -> child` is emphasised
    ///
    /// Edges follow routes and subtree interiors; an edge entering a
    /// highlighted subtree from outside stays plain, as do edges next to
    /// single highlighted nodes.
    pub fn edge(&self, parent: &NodePath, child: &NodePath) -> bool {
        self.paths.contains_prefix_of(child) || self.subtrees.is_ancestor_in(parent)
    }
}
