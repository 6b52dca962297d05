//! Axis-aligned bounds of a solved layout

use glam::DVec2;

use crate::layout::{LayoutNode, LayoutTree};

/// Rectangle enclosing every node centre ± the node radius
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TreeBounds {
    /// Smallest x and y
    pub min: DVec2,

    /// Largest x and y
    pub max: DVec2,
}

impl TreeBounds {
    /// Degenerate bounds of an empty layout
    pub const ZERO: Self = Self {
        min: DVec2::ZERO,
        max: DVec2::ZERO,
    };

    /// Bounds from two corners (any order)
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Square of side `2 * radius` around `center`
    pub fn around(center: DVec2, radius: f64) -> Self {
        let half = DVec2::splat(radius);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Tight bounds of a solved layout
    ///
    /// Ghost nodes count: they hold space in the drawing.
    pub fn of<V>(tree: &LayoutTree<'_, V>, radius: f64) -> Self {
        tree.root
            .as_ref()
            .map_or(Self::ZERO, |root| fold_bounds(root, radius))
    }

    /// Smallest bounds holding both
    pub fn union(&self, other: &TreeBounds) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extent as a vector (the min -> max diagonal)
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Corner the rotation pivots on
    pub fn corner(&self) -> DVec2 {
        self.min
    }

    /// The four corners, counter-clockwise from `min`
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }

    /// Whether `point` lies inside (edges included)
    pub fn contains_point(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

fn fold_bounds<V>(node: &LayoutNode<'_, V>, radius: f64) -> TreeBounds {
    let own = TreeBounds::around(DVec2::new(node.record.x, node.record.y), radius);
    node.children
        .iter()
        .fold(own, |acc, child| acc.union(&fold_bounds(child, radius)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_extent() {
        let a = TreeBounds::around(DVec2::new(0.0, 0.0), 1.0);
        let b = TreeBounds::around(DVec2::new(4.0, 6.0), 1.0);
        let both = a.union(&b);

        assert_eq!(both.min, DVec2::new(-1.0, -1.0));
        assert_eq!(both.max, DVec2::new(5.0, 7.0));
        assert_eq!(both.width(), 6.0);
        assert_eq!(both.height(), 8.0);
        assert!(both.contains_point(DVec2::new(5.0, -1.0)));
        assert!(!both.contains_point(DVec2::new(5.1, 0.0)));
    }

    #[test]
    fn test_corners_normalised() {
        let bounds = TreeBounds::from_corners(DVec2::new(3.0, -2.0), DVec2::new(-1.0, 4.0));
        assert_eq!(bounds.min, DVec2::new(-1.0, -2.0));
        assert_eq!(bounds.corners()[2], DVec2::new(3.0, 4.0));
    }
}
