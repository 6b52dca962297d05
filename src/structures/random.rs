//! Seeded random tree shapes
//!
//! Reproducible from `(max_children, levels, seed)`: each child derives
//! its own seed from its parent's generator, so a subtree never depends
//! on how its siblings were generated.

use crate::tree::{Tree, TreeNode, TreeValue};

/// Linear congruential generator (Numerical Recipes constants)
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
}

impl SeededRandom {
    const MULTIPLIER: u64 = 1_664_525;
    const INCREMENT: u64 = 1_013_904_223;
    const MODULUS: u64 = 1 << 32;

    /// Generator starting from `seed`
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Next value in `[0, 1)`
    pub fn next_float(&mut self) -> f64 {
        let next = (u128::from(Self::MULTIPLIER) * u128::from(self.seed) + u128::from(Self::INCREMENT))
            % u128::from(Self::MODULUS);
        // next < 2^32, the narrowing is lossless
        self.seed = next as u64;
        self.seed as f64 / Self::MODULUS as f64
    }

    /// Next integer in `[min, max]`
    pub fn next_int(&mut self, min: u64, max: u64) -> u64 {
        let span = max.saturating_sub(min).saturating_add(1);
        min + (self.next_float() * span as f64).floor() as u64
    }
}

/// Node of a random tree; drawn as an unlabelled circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct RandomValue {
    /// Position among its siblings
    pub index: usize,
}

impl TreeValue for RandomValue {
    fn label(&self) -> Option<String> {
        Some(String::new())
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

/// Builder for random trees
#[derive(Debug, Clone, Copy)]
pub struct RandomTree;

impl RandomTree {
    const CHILD_SALT: u64 = 33_601;
    const LEVEL_SALT: u64 = 924_773;

    /// Tree of at most `levels` levels below the root, each node holding
    /// up to `max_children` children
    pub fn build(max_children: u64, levels: u64, seed: u64) -> Tree<RandomValue> {
        Tree::new(Self::grow(0, max_children, levels, seed))
    }

    fn grow(index: usize, max_children: u64, levels: u64, seed: u64) -> TreeNode<RandomValue> {
        let value = RandomValue { index };
        if levels == 0 {
            return TreeNode::leaf(value);
        }

        let mut rng = SeededRandom::new(seed);
        let count = rng.next_int(0, max_children);
        let children = (0..count)
            .map(|i| {
                let child_seed = rng
                    .next_int(0, seed)
                    .wrapping_add(i.wrapping_mul(Self::CHILD_SALT))
                    .wrapping_add(levels.wrapping_mul(Self::LEVEL_SALT));
                // count <= max_children, which came from the caller as u64
                Self::grow(i as usize, max_children, levels - 1, child_seed)
            })
            .collect();
        TreeNode::with_children(value, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcg_sequence() {
        let mut rng = SeededRandom::new(0);
        let first = rng.next_float();
        assert_eq!(first, 1_013_904_223.0 / 4_294_967_296.0);
        for _ in 0..1000 {
            let value = rng.next_float();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_next_int_in_range() {
        let mut rng = SeededRandom::new(42);
        for _ in 0..1000 {
            let value = rng.next_int(3, 7);
            assert!((3..=7).contains(&value));
        }
    }

    #[test]
    fn test_build_is_reproducible() {
        let a = RandomTree::build(4, 4, 1234);
        let b = RandomTree::build(4, 4, 1234);
        assert_eq!(a, b);
        assert!(a.depth() <= 5);
    }

    #[test]
    fn test_zero_levels_is_single_node() {
        let tree = RandomTree::build(5, 0, 99);
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.rendered_size(), 1);
    }

    #[test]
    fn test_fan_out_is_bounded() {
        let tree = RandomTree::build(3, 5, 7);
        assert!(tree.walk().all(|(_, node)| node.children.len() <= 3));
    }
}
