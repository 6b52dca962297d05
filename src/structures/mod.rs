//! Tree producers
//!
//! Each builds a plain [`Tree`](crate::tree::Tree) once and hands it to the
//! layout engine. None of them know anything about coordinates.

pub mod ascii;
pub mod bst;
pub mod huffman;
pub mod random;

pub use ascii::{ascii_bit_count, string_to_ascii};
pub use bst::{Bst, BstValue};
pub use huffman::{bits_to_string, frequency_map, HuffmanError, HuffmanTree, HuffmanValue};
pub use random::{RandomTree, RandomValue, SeededRandom};
