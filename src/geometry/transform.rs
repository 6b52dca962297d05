//! Rotation of a whole layout about its bounds corner
//!
//! Used to flip between landscape and portrait presentation without
//! touching node coordinates: the drawing collaborator applies the
//! transform, and sizes its viewport from the rotated bounds.

use glam::{DAffine2, DVec2};

use super::TreeBounds;

/// Viewport width at or below which portrait presentation is chosen
pub const PHONE_BREAKPOINT: f64 = 500.0;

/// Presentation orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Orientation {
    /// Root on top, levels grow downward
    Landscape,

    /// Rotated a quarter turn for narrow viewports
    Portrait,
}

impl Orientation {
    /// Pick an orientation from the caller's viewport width
    pub fn for_viewport(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    /// Rotation in degrees
    pub fn degrees(self) -> f64 {
        match self {
            Orientation::Landscape => 0.0,
            Orientation::Portrait => 90.0,
        }
    }
}

/// Transform and resulting viewport of a rotated layout
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct RotatedView {
    /// Requested rotation
    pub degrees: f64,

    /// Maps layout coordinates to presentation coordinates
    pub transform: DAffine2,

    /// Bounds of the layout after `transform`
    pub bounds: TreeBounds,
}

impl RotatedView {
    /// Unrotated view of `bounds`
    pub fn identity(bounds: TreeBounds) -> Self {
        Self {
            degrees: 0.0,
            transform: DAffine2::IDENTITY,
            bounds,
        }
    }

    /// Apply the transform to a layout point
    pub fn project(&self, point: DVec2) -> DVec2 {
        self.transform.transform_point2(point)
    }
}

/// Rotate by `degrees` about the bounds' corner
///
/// The corner is moved to the origin, rotated, and moved back, so 0° is the
/// exact identity. The new bounds come from rotating the rectangle's corners
/// rather than re-walking the tree.
pub fn rotate_around(bounds: &TreeBounds, degrees: f64) -> RotatedView {
    let pivot = bounds.corner();
    let transform = DAffine2::from_translation(pivot)
        * DAffine2::from_angle(degrees.to_radians())
        * DAffine2::from_translation(-pivot);

    let rotated = bounds
        .corners()
        .map(|corner| transform.transform_point2(corner));
    let bounds = rotated[1..]
        .iter()
        .fold(TreeBounds::from_corners(rotated[0], rotated[0]), |acc, &p| {
            acc.union(&TreeBounds::from_corners(p, p))
        });

    RotatedView {
        degrees,
        transform,
        bounds,
    }
}
