//! Projection of a solved layout into drawable shapes
//!
//! One shape per drawn node, one connector per drawn parent -> child pair.
//! Coordinates stay in layout units; pixel mapping belongs to the caller.

mod highlight;

pub use highlight::Highlights;

use std::fmt;

use glam::DVec2;

use crate::geometry::{RotatedView, TreeBounds};
use crate::layout::{LayoutConfig, LayoutNode, LayoutTree};
use crate::tree::{NodePath, TreeValue};

/// How a layout is turned into shapes
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Emphasised nodes, routes and subtrees
    pub highlights: Highlights,

    /// Number each edge with its branch index
    pub label_branches: bool,

    /// Skip edges that lead to a ghost
    pub hide_ghost_branches: bool,

    /// Rotation applied to the finished drawing
    pub rotation_degrees: f64,

    /// Branch label nudge: x away from the edge, y upward
    pub branch_label_offset: DVec2,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            highlights: Highlights::none(),
            label_branches: false,
            hide_ghost_branches: false,
            rotation_degrees: 0.0,
            branch_label_offset: DVec2::new(0.25, 0.25),
        }
    }
}

impl RenderOptions {
    /// Set highlights
    pub fn with_highlights(mut self, highlights: Highlights) -> Self {
        self.highlights = highlights;
        self
    }

    /// Toggle branch numbering
    pub fn with_branch_labels(mut self, enabled: bool) -> Self {
        self.label_branches = enabled;
        self
    }

    /// Toggle suppression of edges into ghosts
    pub fn with_hidden_ghost_branches(mut self, enabled: bool) -> Self {
        self.hide_ghost_branches = enabled;
        self
    }

    /// Set rotation in degrees
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_degrees = degrees;
        self
    }
}

/// A drawn node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct NodeShape {
    /// Location in the input tree
    pub path: NodePath,

    /// Centre in layout units
    pub center: DVec2,

    /// Circle radius
    pub radius: f64,

    /// Text inside the node
    pub label: String,

    /// Emphasised
    pub highlighted: bool,
}

/// Branch number drawn beside an edge
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct BranchLabel {
    /// Child index under the parent
    pub index: usize,

    /// Text anchor
    pub anchor: DVec2,
}

/// A drawn parent -> child connector
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct EdgeShape {
    /// Parent's path
    pub parent: NodePath,

    /// Child's path
    pub child: NodePath,

    /// Start point, on the parent's lower rim
    pub from: DVec2,

    /// End point, on the child's upper rim
    pub to: DVec2,

    /// Emphasised
    pub highlighted: bool,

    /// Present when branch numbering is on
    pub branch: Option<BranchLabel>,
}

/// Everything the drawing collaborator needs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Scene {
    /// Drawn nodes, preorder
    pub nodes: Vec<NodeShape>,

    /// Drawn edges, preorder by child
    pub edges: Vec<EdgeShape>,

    /// Unrotated layout bounds
    pub bounds: TreeBounds,

    /// Rotation transform and rotated viewport
    pub view: RotatedView,
}

impl Scene {
    /// Scene with nothing to draw
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            bounds: TreeBounds::ZERO,
            view: RotatedView::identity(TreeBounds::ZERO),
        }
    }

    /// Node drawn for `path`, if any
    pub fn node(&self, path: &NodePath) -> Option<&NodeShape> {
        self.nodes.iter().find(|node| &node.path == path)
    }

    /// Edge ending at `child`, if drawn
    pub fn edge_to(&self, child: &NodePath) -> Option<&EdgeShape> {
        self.edges.iter().find(|edge| &edge.child == child)
    }
}

/// Walk a solved layout and emit shapes
///
/// `bounds` are the layout's own bounds and `view` their rotation; both are
/// passed through untouched. A ghost is never drawn and hides its subtree,
/// so the drawn nodes are exactly those counted by `Tree::rendered_size`.
pub fn project<V: TreeValue>(
    layout: &LayoutTree<'_, V>,
    config: &LayoutConfig,
    options: &RenderOptions,
    bounds: TreeBounds,
    view: RotatedView,
) -> Scene {
    let mut scene = Scene {
        bounds,
        view,
        ..Scene::empty()
    };
    if let Some(root) = &layout.root {
        let projector = Projector { config, options };
        projector.visit(root, NodePath::root(), &mut scene);
    }
    scene
}

struct Projector<'o> {
    config: &'o LayoutConfig,
    options: &'o RenderOptions,
}

impl Projector<'_> {
    fn visit<V: TreeValue>(&self, node: &LayoutNode<'_, V>, path: NodePath, scene: &mut Scene) {
        if node.record.ghost {
            return;
        }
        let center = DVec2::new(node.record.x, node.record.y);
        scene.nodes.push(NodeShape {
            path: path.clone(),
            center,
            radius: self.config.node_radius(),
            label: node.record.value.label().unwrap_or_default(),
            highlighted: self.options.highlights.node(&path),
        });

        for (index, child) in node.children.iter().enumerate() {
            let child_path = path.child(index);
            if !self.options.hide_ghost_branches || !child.record.ghost {
                scene.edges.push(self.edge(center, child, &path, &child_path, index));
            }
            self.visit(child, child_path, scene);
        }
    }

    fn edge<V>(
        &self,
        parent_center: DVec2,
        child: &LayoutNode<'_, V>,
        parent: &NodePath,
        child_path: &NodePath,
        index: usize,
    ) -> EdgeShape {
        let radius = self.config.node_radius();
        let child_center = DVec2::new(child.record.x, child.record.y);

        let branch = self.options.label_branches.then(|| {
            let midpoint = (parent_center + child_center) / 2.0;
            // label sits on the side the edge leans toward
            let side = if child_center.x <= parent_center.x { -1.0 } else { 1.0 };
            let offset = self.options.branch_label_offset;
            BranchLabel {
                index,
                anchor: midpoint + DVec2::new(offset.x * side, -offset.y),
            }
        });

        EdgeShape {
            parent: parent.clone(),
            child: child_path.clone(),
            from: parent_center + DVec2::new(0.0, radius),
            to: child_center - DVec2::new(0.0, radius),
            highlighted: self.options.highlights.edge(parent, child_path),
            branch,
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "bounds ({:.3}, {:.3}) .. ({:.3}, {:.3})",
            self.bounds.min.x, self.bounds.min.y, self.bounds.max.x, self.bounds.max.y
        )?;
        writeln!(
            f,
            "view {:.1}deg ({:.3}, {:.3}) .. ({:.3}, {:.3})",
            self.view.degrees,
            self.view.bounds.min.x,
            self.view.bounds.min.y,
            self.view.bounds.max.x,
            self.view.bounds.max.y
        )?;
        for node in &self.nodes {
            writeln!(
                f,
                "node {} ({:.3}, {:.3}) {:?}{}",
                node.path,
                node.center.x,
                node.center.y,
                node.label,
                if node.highlighted { " *" } else { "" }
            )?;
        }
        for edge in &self.edges {
            write!(
                f,
                "edge {} -> {} ({:.3}, {:.3}) -> ({:.3}, {:.3})",
                edge.parent, edge.child, edge.from.x, edge.from.y, edge.to.x, edge.to.y
            )?;
            if let Some(branch) = &edge.branch {
                write!(f, " #{}", branch.index)?;
            }
            writeln!(f, "{}", if edge.highlighted { " *" } else { "" })?;
        }
        Ok(())
    }
}
