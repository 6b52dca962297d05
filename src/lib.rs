//! # Tidy drawings of arbitrary ordered trees
//!
//! This library lays out any rooted, ordered, n-ary tree with a
//! Reingold-Tilford style algorithm and hands back plain geometry.
//!
//! ## Core Algorithm
//!
//! 1. **Shadow**: mirror the input as a layout tree, one record per node
//! 2. **Postorder placement**: centre parents over children via deferred modifiers
//! 3. **Contour conflicts**: push each subtree clear of every earlier sibling,
//!    then re-centre the siblings in between
//! 4. **Preorder fold**: apply modifiers, scale levels vertically
//! 5. **Bounds + rotation**: tight bounding box, optional rotation about its corner
//!
//! Ghost nodes (values without a label) take part in every step but are never
//! drawn, so fixed-arity trees such as a BST keep a symmetric skeleton.
//!
//! ## Usage Example
//!
//! ```
//! use treescape::{RenderOptions, Visualizer, LayoutConfig};
//! use treescape::structures::Bst;
//!
//! let mut bst = Bst::new();
//! for key in [5, 3, 8] {
//!     bst.insert(key);
//! }
//!
//! let visualizer = Visualizer::new(LayoutConfig::default())?;
//! let scene = visualizer.render(bst.tree(), &RenderOptions::default());
//! assert_eq!(scene.nodes.len(), 3);
//! # Ok::<(), treescape::LayoutError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod tree;       // Generic tree model + path addressing
pub mod layout;     // Shadow tree, contours, position solver
pub mod geometry;   // Bounds and rotation
pub mod render;     // Shapes for the drawing collaborator
pub mod structures; // Tree producers: BST, Huffman, random

// Re-exports for convenience
pub use tree::{NodePath, PathSet, Tree, TreeNode, TreeValue};
pub use layout::{LayoutConfig, LayoutTree, PositionSolver, SolveReport};
pub use geometry::{rotate_around, Orientation, RotatedView, TreeBounds, PHONE_BREAKPOINT};
pub use render::{EdgeShape, Highlights, NodeShape, RenderOptions, Scene};

use thiserror::Error;
use tracing::debug;

/// Errors raised before any layout work starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Geometry the solver cannot work with
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

/// Shadow -> solve -> bounds/rotate -> project, as one synchronous call
///
/// Holds only the validated geometry; every call allocates a fresh shadow
/// tree, so calls are independent of each other.
#[derive(Debug, Clone)]
pub struct Visualizer {
    config: LayoutConfig,
}

/// Solved layout together with its geometry
#[derive(Debug)]
pub struct Layout<'a, V> {
    /// Shadow tree with absolute coordinates
    pub tree: LayoutTree<'a, V>,

    /// Tight bounds of every node
    pub bounds: TreeBounds,

    /// Solver counters
    pub report: SolveReport,
}

impl Visualizer {
    /// Create visualizer, rejecting unusable geometry
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Geometry in use
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Solve coordinates and bounds without projecting
    pub fn layout<'a, V: TreeValue>(&self, tree: &'a Tree<V>) -> Layout<'a, V> {
        let (layout, report) = layout::solve(tree, &self.config);
        let bounds = TreeBounds::of(&layout, self.config.node_radius());
        Layout {
            tree: layout,
            bounds,
            report,
        }
    }

    /// Run the whole pipeline and return drawable shapes
    pub fn render<V: TreeValue>(&self, tree: &Tree<V>, options: &RenderOptions) -> Scene {
        let solved = self.layout(tree);
        let view = rotate_around(&solved.bounds, options.rotation_degrees);
        let scene = render::project(&solved.tree, &self.config, options, solved.bounds, view);

        debug!(
            nodes = scene.nodes.len(),
            edges = scene.edges.len(),
            width = scene.bounds.width(),
            height = scene.bounds.height(),
            degrees = options.rotation_degrees,
            "rendered tree scene"
        );
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_geometry() {
        let config = LayoutConfig::default().with_node_diameter(-2.0);
        assert!(matches!(
            Visualizer::new(config),
            Err(LayoutError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_tree_renders_empty_scene() {
        let visualizer = Visualizer::new(LayoutConfig::default()).unwrap();
        let tree: Tree<structures::BstValue> = Tree::empty();
        let scene = visualizer.render(&tree, &RenderOptions::default());

        assert!(scene.nodes.is_empty());
        assert!(scene.edges.is_empty());
        assert_eq!(scene.bounds, TreeBounds::ZERO);
        assert_eq!(scene.view.bounds, TreeBounds::ZERO);
    }

    #[test]
    fn test_scene_reuses_layout_bounds() {
        let visualizer = Visualizer::new(LayoutConfig::default()).unwrap();
        let bst = structures::Bst::from_keys([4, 2, 6, 1, 3]);
        let layout = visualizer.layout(bst.tree());
        let scene = visualizer.render(bst.tree(), &RenderOptions::default().with_rotation(90.0));

        assert_eq!(scene.bounds, layout.bounds);
        assert_eq!(scene.view, rotate_around(&layout.bounds, 90.0));
    }
}
