#![allow(dead_code)]

use proptest::prelude::*;
use treescape::layout::{LayoutNode, LayoutTree};
use treescape::{LayoutConfig, NodePath, Tree, TreeNode, TreeValue};

/// Test value: numbered node, optionally a ghost
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub id: usize,
    pub ghost: bool,
}

impl TreeValue for Mark {
    fn label(&self) -> Option<String> {
        (!self.ghost).then(|| self.id.to_string())
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Tree shape without values
#[derive(Debug, Clone)]
pub struct Shape {
    pub ghost: bool,
    pub children: Vec<Shape>,
}

impl Shape {
    pub fn leaf() -> Self {
        Self {
            ghost: false,
            children: Vec::new(),
        }
    }

    pub fn ghost() -> Self {
        Self {
            ghost: true,
            children: Vec::new(),
        }
    }

    pub fn node(children: Vec<Shape>) -> Self {
        Self {
            ghost: false,
            children,
        }
    }

    /// Number values in preorder
    pub fn build(&self) -> Tree<Mark> {
        let mut next = 0;
        Tree::new(self.grow(&mut next))
    }

    fn grow(&self, next: &mut usize) -> TreeNode<Mark> {
        let value = Mark {
            id: *next,
            ghost: self.ghost,
        };
        *next += 1;
        let children = self.children.iter().map(|child| child.grow(next)).collect();
        TreeNode::with_children(value, children)
    }
}

/// Arbitrary shapes up to a few levels deep; ghosts may carry children
pub fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![4 => Just(Shape::leaf()), 1 => Just(Shape::ghost())];
    leaf.prop_recursive(5, 64, 5, |inner| {
        (prop::bool::weighted(0.2), prop::collection::vec(inner, 0..5))
            .prop_map(|(ghost, children)| Shape { ghost, children })
    })
}

/// Complete binary tree with `levels` levels
pub fn complete_binary(levels: usize) -> Shape {
    match levels {
        0 | 1 => Shape::leaf(),
        _ => Shape::node(vec![complete_binary(levels - 1), complete_binary(levels - 1)]),
    }
}

/// (min x, max x) per depth below `node`, absolute coordinates
fn extents<V>(node: &LayoutNode<'_, V>, depth: usize, out: &mut Vec<(f64, f64)>) {
    let x = node.record.x;
    match out.get_mut(depth) {
        Some((lo, hi)) => {
            *lo = lo.min(x);
            *hi = hi.max(x);
        }
        None => out.push((x, x)),
    }
    for child in &node.children {
        extents(child, depth + 1, out);
    }
}

/// Check every pair of sibling subtrees keeps their centres apart on each
/// shared level: `config.sibling_step()` on the siblings' own level and
/// `config.subtree_step()` on every level below it
pub fn check_no_overlap<V>(layout: &LayoutTree<'_, V>, config: &LayoutConfig) -> Result<(), String> {
    match &layout.root {
        Some(root) => check_node(root, config),
        None => Ok(()),
    }
}

fn check_node<V>(node: &LayoutNode<'_, V>, config: &LayoutConfig) -> Result<(), String> {
    let outlines: Vec<Vec<(f64, f64)>> = node
        .children
        .iter()
        .map(|child| {
            let mut out = Vec::new();
            extents(child, 0, &mut out);
            out
        })
        .collect();

    for (a, left) in outlines.iter().enumerate() {
        for (b, right) in outlines.iter().enumerate().skip(a + 1) {
            for (depth, ((_, left_max), (right_min, _))) in left.iter().zip(right.iter()).enumerate() {
                let min_gap = match depth {
                    0 => config.sibling_step(),
                    _ => config.subtree_step(),
                };
                if left_max + min_gap > right_min + 1e-9 {
                    return Err(format!(
                        "children {a} and {b} of node at ({}, {}) closer than {min_gap} at depth {depth}: {left_max} vs {right_min}",
                        node.record.x, node.record.y
                    ));
                }
            }
        }
    }

    node.children
        .iter()
        .try_for_each(|child| check_node(child, config))
}

/// Nodes reachable from the root without passing through a ghost
pub fn drawn_nodes<V: TreeValue>(tree: &Tree<V>) -> usize {
    tree.walk()
        .filter(|(path, _)| !behind_ghost(tree, path))
        .filter(|(_, node)| !node.value.is_ghost())
        .count()
}

/// Edges the projection should emit: every child slot of a drawn node,
/// minus slots holding a ghost when those are hidden
pub fn drawn_edges<V: TreeValue>(tree: &Tree<V>, hide_ghost_branches: bool) -> usize {
    tree.walk()
        .filter(|(path, node)| !node.value.is_ghost() && !behind_ghost(tree, path))
        .map(|(_, node)| {
            node.children
                .iter()
                .filter(|child| !hide_ghost_branches || !child.value.is_ghost())
                .count()
        })
        .sum()
}

/// Some proper ancestor of `path` is a ghost
fn behind_ghost<V: TreeValue>(tree: &Tree<V>, path: &NodePath) -> bool {
    let mut ancestor = path.parent();
    while let Some(current) = ancestor {
        if tree.get(&current).is_some_and(|node| node.value.is_ghost()) {
            return true;
        }
        ancestor = current.parent();
    }
    false
}
