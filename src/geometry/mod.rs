//! Bounds and orientation of a solved layout
//!
//! Purely geometric; independent of the tree's shape once coordinates exist.

mod bounds;
mod transform;

pub use bounds::TreeBounds;
pub use transform::{rotate_around, Orientation, RotatedView, PHONE_BREAKPOINT};
