//! Huffman coding tree
//!
//! Internal nodes carry the combined weight of their leaves, leaves carry
//! a symbol too. Branch 0 is a `0` bit, branch 1 a `1` bit, so a leaf's
//! path spells out its code word.
//!
//! Ties in the priority queue are broken by creation order, which makes
//! the tree (and therefore every code) a pure function of the input text.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use bitvec::prelude::*;
use thiserror::Error;

use crate::tree::{NodePath, PathSet, Tree, TreeNode, TreeValue};

/// Failures when encoding or decoding against a built tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// Symbol that never occurred in the source text
    #[error("Symbol {0:?} has no code word")]
    UnknownSymbol(char),

    /// Bit with no matching branch
    #[error("Bit {offset} does not follow any branch")]
    InvalidCode {
        /// Position of the offending bit
        offset: usize,
    },

    /// Input stopped part-way through a code word
    #[error("Input ends inside a code word ({pending} bits pending)")]
    IncompleteCode {
        /// Bits consumed since the last complete symbol
        pending: usize,
    },
}

/// Weight, plus the symbol on leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct HuffmanValue {
    /// Occurrences covered by this subtree
    pub count: usize,

    /// Leaf symbol
    pub symbol: Option<char>,
}

impl TreeValue for HuffmanValue {
    fn label(&self) -> Option<String> {
        Some(match self.symbol {
            Some(symbol) => format!("{} | {}", self.count, symbol),
            None => self.count.to_string(),
        })
    }

    fn equivalent(&self, other: &Self) -> bool {
        self == other
    }
}

/// Occurrences of each character
pub fn frequency_map(text: &str) -> BTreeMap<char, usize> {
    let mut frequencies = BTreeMap::new();
    for symbol in text.chars() {
        *frequencies.entry(symbol).or_insert(0) += 1;
    }
    frequencies
}

/// Render bits as `0`/`1` text
pub fn bits_to_string(bits: &BitSlice) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

/// Huffman tree and its code table
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    tree: Tree<HuffmanValue>,
    codes: BTreeMap<char, BitVec>,
}

impl HuffmanTree {
    /// Build the coding tree for `text`
    ///
    /// Empty text yields an empty tree. A single distinct symbol still
    /// gets a one-bit code: the root is an internal node with one child.
    pub fn build(text: &str) -> Self {
        let frequencies = frequency_map(text);

        // Slot i holds the node created i-th; the heap orders (weight, i)
        let mut slots: Vec<Option<TreeNode<HuffmanValue>>> =
            Vec::with_capacity(frequencies.len() * 2);
        let mut queue = BinaryHeap::with_capacity(frequencies.len());
        for (&symbol, &count) in &frequencies {
            queue.push(Reverse((count, slots.len())));
            slots.push(Some(TreeNode::leaf(HuffmanValue {
                count,
                symbol: Some(symbol),
            })));
        }

        let root = loop {
            let Some(Reverse((count, first))) = queue.pop() else {
                break None;
            };
            let first = slots[first].take();
            match queue.pop() {
                Some(Reverse((other, second))) => {
                    let second = slots[second].take();
                    let merged = TreeNode::with_children(
                        HuffmanValue {
                            count: count + other,
                            symbol: None,
                        },
                        first.into_iter().chain(second).collect(),
                    );
                    queue.push(Reverse((count + other, slots.len())));
                    slots.push(Some(merged));
                }
                None => {
                    break first.map(|node| match node.value.symbol {
                        Some(_) => TreeNode::with_children(
                            HuffmanValue {
                                count,
                                symbol: None,
                            },
                            vec![node],
                        ),
                        None => node,
                    });
                }
            }
        };

        let tree = Tree { root };
        let codes: BTreeMap<char, BitVec> = tree
            .walk()
            .filter_map(|(path, node)| {
                let symbol = node.value.symbol?;
                Some((symbol, path.indices().iter().map(|&branch| branch == 1).collect()))
            })
            .collect();

        Self { tree, codes }
    }

    /// The coding tree
    pub fn tree(&self) -> &Tree<HuffmanValue> {
        &self.tree
    }

    /// Code word of every symbol
    pub fn codes(&self) -> &BTreeMap<char, BitVec> {
        &self.codes
    }

    /// Code word of one symbol
    pub fn encode_char(&self, symbol: char) -> Result<&BitSlice, HuffmanError> {
        self.codes
            .get(&symbol)
            .map(BitVec::as_bitslice)
            .ok_or(HuffmanError::UnknownSymbol(symbol))
    }

    /// Concatenated code words of `text`
    pub fn encode(&self, text: &str) -> Result<BitVec, HuffmanError> {
        let mut bits = BitVec::new();
        for symbol in text.chars() {
            bits.extend_from_bitslice(self.encode_char(symbol)?);
        }
        Ok(bits)
    }

    /// Walk the tree bit by bit, emitting a symbol at every leaf
    pub fn decode(&self, bits: &BitSlice) -> Result<String, HuffmanError> {
        let Some(root) = &self.tree.root else {
            if bits.is_empty() {
                return Ok(String::new());
            }
            return Err(HuffmanError::InvalidCode { offset: 0 });
        };

        let mut text = String::new();
        let mut node = root;
        let mut pending = 0;
        for (offset, bit) in bits.iter().by_vals().enumerate() {
            node = node
                .children
                .get(usize::from(bit))
                .ok_or(HuffmanError::InvalidCode { offset })?;
            pending += 1;
            if let Some(symbol) = node.value.symbol {
                text.push(symbol);
                node = root;
                pending = 0;
            }
        }

        match pending {
            0 => Ok(text),
            pending => Err(HuffmanError::IncompleteCode { pending }),
        }
    }

    /// Path of the leaf holding `symbol`
    pub fn leaf_path(&self, symbol: char) -> Option<NodePath> {
        self.codes.get(&symbol).map(|code| {
            code.iter()
                .by_vals()
                .map(usize::from)
                .collect::<Vec<_>>()
                .into()
        })
    }

    /// Paths of every leaf whose symbol satisfies `predicate`
    pub fn leaves_where<F>(&self, mut predicate: F) -> PathSet
    where
        F: FnMut(char) -> bool,
    {
        self.tree
            .paths_where(|value| value.symbol.is_some_and(&mut predicate))
    }
}
