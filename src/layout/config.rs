//! Layout geometry parameters
//!
//! Passed explicitly into every solve; nothing is global, so two
//! geometries can be laid out side by side.

use crate::LayoutError;

/// Spacing parameters for the position solver
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct LayoutConfig {
    /// Diameter of every node
    pub node_diameter: f64,

    /// Gap between adjacent siblings on one level
    pub sibling_gap: f64,

    /// Gap between neighbouring subtrees below the sibling level
    pub subtree_gap: f64,

    /// Distance between consecutive levels
    pub vertical_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_diameter: 2.0,
            sibling_gap: 0.5,
            subtree_gap: 1.0,
            vertical_spacing: 3.0,
        }
    }
}

impl LayoutConfig {
    /// Set node diameter
    pub fn with_node_diameter(mut self, node_diameter: f64) -> Self {
        self.node_diameter = node_diameter;
        self
    }

    /// Set sibling gap
    pub fn with_sibling_gap(mut self, sibling_gap: f64) -> Self {
        self.sibling_gap = sibling_gap;
        self
    }

    /// Set subtree gap
    pub fn with_subtree_gap(mut self, subtree_gap: f64) -> Self {
        self.subtree_gap = subtree_gap;
        self
    }

    /// Set vertical spacing
    pub fn with_vertical_spacing(mut self, vertical_spacing: f64) -> Self {
        self.vertical_spacing = vertical_spacing;
        self
    }

    /// Half the node diameter
    #[inline]
    pub fn node_radius(&self) -> f64 {
        self.node_diameter / 2.0
    }

    /// Centre-to-centre distance between adjacent siblings
    #[inline]
    pub fn sibling_step(&self) -> f64 {
        self.node_diameter + self.sibling_gap
    }

    /// Minimum centre distance between subtrees on a shared lower level
    #[inline]
    pub fn subtree_step(&self) -> f64 {
        self.node_diameter + self.subtree_gap
    }

    /// Reject values the solver cannot lay out
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("node_diameter", self.node_diameter),
            ("sibling_gap", self.sibling_gap),
            ("subtree_gap", self.subtree_gap),
            ("vertical_spacing", self.vertical_spacing),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.node_diameter <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "node_diameter must be > 0, got {}",
                self.node_diameter
            )));
        }
        if self.vertical_spacing <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "vertical_spacing must be > 0, got {}",
                self.vertical_spacing
            )));
        }
        if self.sibling_gap < 0.0 || self.subtree_gap < 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "gaps must be >= 0, got sibling {} / subtree {}",
                self.sibling_gap, self.subtree_gap
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_steps() {
        let config = LayoutConfig::default();
        assert_eq!(config.sibling_step(), 2.5);
        assert_eq!(config.subtree_step(), 3.0);
        assert_eq!(config.node_radius(), 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let base = LayoutConfig::default();
        assert!(base.with_node_diameter(0.0).validate().is_err());
        assert!(base.with_vertical_spacing(-1.0).validate().is_err());
        assert!(base.with_sibling_gap(-0.1).validate().is_err());
        assert!(base.with_subtree_gap(f64::NAN).validate().is_err());
        assert!(base.with_sibling_gap(0.0).validate().is_ok());
    }
}
