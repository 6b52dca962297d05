//! Layout engine: shadow tree, contours and the position solver
//!
//! Pipeline per call:
//! 1. `LayoutTree::shadow` mirrors the input with fresh records
//! 2. `PositionSolver::solve` assigns absolute coordinates
//!
//! Nothing is cached between calls; each layout is an independent snapshot.

mod config;
mod contour;
mod shadow;
mod solver;

pub use config::LayoutConfig;
pub use contour::{ContourMap, Side, SubtreeContour};
pub use shadow::{LayoutNode, LayoutRecord, LayoutTree};
pub use solver::{PositionSolver, SolveReport};

use crate::tree::{Tree, TreeValue};

/// Shadow `tree` and solve it under `config`
pub fn solve<'a, V: TreeValue>(tree: &'a Tree<V>, config: &LayoutConfig) -> (LayoutTree<'a, V>, SolveReport) {
    let mut layout = LayoutTree::shadow(tree);
    let report = PositionSolver::new(*config).solve(&mut layout);
    (layout, report)
}
