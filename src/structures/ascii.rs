//! Fixed-width character encoding, the baseline Huffman is compared to

/// Each character's code point as (at least) eight binary digits
///
/// Characters past U+00FF produce longer groups.
pub fn string_to_ascii(text: &str) -> String {
    text.chars().map(|c| format!("{:08b}", u32::from(c))).collect()
}

/// Bits needed to store `text` at eight bits per character
pub fn ascii_bit_count(text: &str) -> usize {
    text.chars().count() * 8
}
