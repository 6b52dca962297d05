//! Subtree contours
//!
//! Contour = per level, the extreme x reached inside one subtree
//! Left contour keeps the minimum, right contour the maximum.
//! Ancestor modifiers are folded in, starting below the subtree root.

use super::shadow::LayoutNode;

/// Which extreme a contour tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Minimum x per level
    Left,

    /// Maximum x per level
    Right,
}

/// Partial map level -> x over a contiguous run of levels
///
/// Every subtree reaches each level from its root down to its deepest
/// leaf, so a dense vector suffices.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourMap {
    /// Level of the subtree root
    top: usize,

    /// Extreme x for levels `top..top + extents.len()`
    extents: Vec<f64>,
}

impl ContourMap {
    /// Trace the `side` contour of `node`, which sits at `level`
    ///
    /// A childless node yields the single-level contour `[level, level]`.
    pub fn trace<V>(node: &LayoutNode<'_, V>, level: usize, side: Side) -> Self {
        let mut contour = Self {
            top: level,
            extents: Vec::new(),
        };
        contour.visit(node, 0, 0.0, side);
        contour
    }

    fn visit<V>(&mut self, node: &LayoutNode<'_, V>, depth: usize, sum_mods: f64, side: Side) {
        let x = node.record.x + sum_mods;
        match self.extents.get_mut(depth) {
            None => self.extents.push(x),
            Some(extent) => {
                *extent = match side {
                    Side::Left => extent.min(x),
                    Side::Right => extent.max(x),
                }
            }
        }

        let below = sum_mods + node.record.modifier;
        for child in &node.children {
            self.visit(child, depth + 1, below, side);
        }
    }

    /// Level of the subtree root
    pub fn top(&self) -> usize {
        self.top
    }

    /// Deepest level reached
    pub fn bottom(&self) -> usize {
        self.top + self.extents.len().saturating_sub(1)
    }

    /// Extreme x at `level`, if the subtree reaches it
    pub fn get(&self, level: usize) -> Option<f64> {
        level
            .checked_sub(self.top)
            .and_then(|offset| self.extents.get(offset))
            .copied()
    }

    /// Translate every level by `delta`
    pub fn shift(&mut self, delta: f64) {
        for extent in &mut self.extents {
            *extent += delta;
        }
    }

    /// Levels both contours reach, restricted to `from..`
    fn shared_levels(&self, other: &ContourMap, from: usize) -> std::ops::RangeInclusive<usize> {
        let start = self.top.max(other.top).max(from);
        let end = self.bottom().min(other.bottom());
        start..=end
    }

    /// Rightward shift `self` (a left contour) needs to stay `gap` clear of
    /// `other` (a right contour) on every shared level from `from` down
    ///
    /// Zero when nothing is shared or nothing overlaps.
    pub fn clearance_shift(&self, other: &ContourMap, from: usize, gap: f64) -> f64 {
        let mut shift: f64 = 0.0;
        for level in self.shared_levels(other, from) {
            if let (Some(mine), Some(theirs)) = (self.get(level), other.get(level)) {
                shift = shift.max(gap - (mine - theirs));
            }
        }
        shift
    }
}

/// Both contours of one subtree
#[derive(Debug, Clone, PartialEq)]
pub struct SubtreeContour {
    /// Minimum x per level
    pub left: ContourMap,

    /// Maximum x per level
    pub right: ContourMap,
}

impl SubtreeContour {
    /// Trace both sides of `node` at `level`
    pub fn trace<V>(node: &LayoutNode<'_, V>, level: usize) -> Self {
        Self {
            left: ContourMap::trace(node, level, Side::Left),
            right: ContourMap::trace(node, level, Side::Right),
        }
    }

    /// Translate the whole subtree outline
    pub fn shift(&mut self, delta: f64) {
        self.left.shift(delta);
        self.right.shift(delta);
    }

    /// How far `self` may still move right before touching `neighbour`
    ///
    /// `gap_at` gives the required centre distance per level. Returns
    /// `f64::INFINITY` when the two never share a level.
    pub fn room_before<F>(&self, neighbour: &SubtreeContour, gap_at: F) -> f64
    where
        F: Fn(usize) -> f64,
    {
        let mut room = f64::INFINITY;
        for level in self.right.shared_levels(&neighbour.left, 0) {
            if let (Some(mine), Some(theirs)) = (self.right.get(level), neighbour.left.get(level)) {
                room = room.min(theirs - mine - gap_at(level));
            }
        }
        room
    }
}
