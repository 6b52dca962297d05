//! Reingold-Tilford position solver
//!
//! 1. Postorder: place each node after its left sibling, centre it over its
//!    children through a deferred modifier, and push its subtree clear of
//!    every earlier sibling subtree.
//! 2. Preorder: fold modifiers down into absolute x, scale levels into y.
//!
//! Works for any fan-out. Ghost nodes are laid out exactly like drawn ones.

use tracing::{debug, trace};

use super::config::LayoutConfig;
use super::contour::SubtreeContour;
use super::shadow::{LayoutNode, LayoutTree};

/// Counters gathered during one solve
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveReport {
    /// Nodes placed (ghosts included)
    pub nodes: usize,

    /// Levels spanned
    pub levels: usize,

    /// Subtrees pushed right to clear a sibling
    pub conflict_shifts: usize,

    /// Interior siblings moved while re-centering
    pub recentered: usize,
}

/// Solver bound to one geometry
#[derive(Debug, Clone, Copy)]
pub struct PositionSolver {
    config: LayoutConfig,
}

impl PositionSolver {
    /// Create solver for `config`
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Geometry in use
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Assign final coordinates to every record of `tree`
    ///
    /// Afterwards `x`/`y` are absolute and every modifier is zero.
    pub fn solve<V>(&self, tree: &mut LayoutTree<'_, V>) -> SolveReport {
        let mut report = SolveReport::default();
        let Some(root) = tree.root.as_mut() else {
            return report;
        };

        self.first_walk(std::slice::from_mut(root), 0, &mut report);
        self.second_walk(root, 0.0, &mut report);

        debug!(
            nodes = report.nodes,
            levels = report.levels,
            conflict_shifts = report.conflict_shifts,
            recentered = report.recentered,
            "solved tree layout"
        );
        report
    }

    /// Postorder placement of one sibling group sitting at `level`
    fn first_walk<V>(&self, siblings: &mut [LayoutNode<'_, V>], level: usize, report: &mut SolveReport) {
        if siblings.is_empty() {
            return;
        }
        report.levels = report.levels.max(level + 1);

        // contours[i] describes siblings[i] as currently placed
        let mut contours: Vec<SubtreeContour> = Vec::with_capacity(siblings.len());

        for index in 0..siblings.len() {
            self.first_walk(&mut siblings[index].children, level + 1, report);

            let base_x = match index {
                0 => 0.0,
                _ => siblings[index - 1].record.x + self.config.sibling_step(),
            };

            let node = &mut siblings[index];
            let desired_x = node.children_midpoint();
            node.record.y = level as f64;
            if index == 0 {
                node.record.x = desired_x;
            } else {
                node.record.x = base_x;
                node.record.modifier = base_x - desired_x;
            }

            contours.push(SubtreeContour::trace(node, level));

            if index > 0 && !node.is_leaf() {
                self.resolve_conflicts(siblings, &mut contours, index, level, report);
            }
        }
    }

    /// Push `siblings[index]` right until it clears every earlier sibling
    ///
    /// Only the largest required shift is applied; translating right can
    /// only widen the other distances, so one pass settles the group.
    fn resolve_conflicts<V>(
        &self,
        siblings: &mut [LayoutNode<'_, V>],
        contours: &mut [SubtreeContour],
        index: usize,
        level: usize,
        report: &mut SolveReport,
    ) {
        let gap = self.config.subtree_step();
        let mine = &contours[index];

        let mut shift = 0.0;
        let mut driver = None;
        for (j, sibling) in contours[..index].iter().enumerate() {
            let needed = mine.left.clearance_shift(&sibling.right, level + 1, gap);
            if needed > shift {
                shift = needed;
                driver = Some(j);
            }
        }

        let Some(driver) = driver else {
            return;
        };

        let record = &mut siblings[index].record;
        record.x += shift;
        record.modifier += shift;
        contours[index].shift(shift);
        report.conflict_shifts += 1;
        trace!(level, index, driver, shift, "shifted subtree clear of left sibling");

        if index - driver > 1 {
            self.center_between(siblings, contours, driver, index, level, report);
        }
    }

    /// Spread the siblings strictly between `left` and `right` evenly
    ///
    /// Each move is clamped so it never closes a gap below the minimum
    /// against any sibling already placed.
    fn center_between<V>(
        &self,
        siblings: &mut [LayoutNode<'_, V>],
        contours: &mut [SubtreeContour],
        left: usize,
        right: usize,
        level: usize,
        report: &mut SolveReport,
    ) {
        let left_x = siblings[left].record.x;
        let right_x = siblings[right].record.x;
        let span = (right - left) as f64;
        let gap_at = |at: usize| {
            if at == level {
                self.config.sibling_step()
            } else {
                self.config.subtree_step()
            }
        };

        for k in (left + 1..right).rev() {
            let target = left_x + (right_x - left_x) * (k - left) as f64 / span;
            let wanted = target - siblings[k].record.x;

            let delta = if wanted > 0.0 {
                let room = contours[k + 1..=right]
                    .iter()
                    .map(|neighbour| contours[k].room_before(neighbour, &gap_at))
                    .fold(f64::INFINITY, f64::min);
                wanted.min(room.max(0.0))
            } else if wanted < 0.0 {
                let room = contours[..k]
                    .iter()
                    .map(|neighbour| neighbour.room_before(&contours[k], &gap_at))
                    .fold(f64::INFINITY, f64::min);
                -(-wanted).min(room.max(0.0))
            } else {
                0.0
            };

            if delta.abs() > f64::EPSILON {
                let record = &mut siblings[k].record;
                record.x += delta;
                record.modifier += delta;
                contours[k].shift(delta);
                report.recentered += 1;
                trace!(level, sibling = k, delta, "re-centered interior sibling");
            }
        }
    }

    /// Preorder: absolute x from the running modifier sum, y from the level
    fn second_walk<V>(&self, node: &mut LayoutNode<'_, V>, mod_sum: f64, report: &mut SolveReport) {
        node.record.x += mod_sum;
        node.record.y *= self.config.vertical_spacing;
        let below = mod_sum + node.record.modifier;
        node.record.modifier = 0.0;
        report.nodes += 1;

        for child in &mut node.children {
            self.second_walk(child, below, report);
        }
    }
}
