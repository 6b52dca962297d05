use bitvec::prelude::*;
use proptest::prelude::*;
use treescape::structures::{ascii_bit_count, HuffmanError, HuffmanTree};
use treescape::{Highlights, LayoutConfig, PathSet, RenderOptions, TreeValue, Visualizer};

#[test]
fn huffman_beats_fixed_width_on_skewed_text() {
    let text = "aaaaaaaabbbbccd";
    let huffman = HuffmanTree::build(text);
    let bits = huffman.encode(text).expect("every symbol has a code");

    assert!(bits.len() < ascii_bit_count(text));
    assert_eq!(huffman.decode(&bits).expect("decodes"), text);
}

#[test]
fn corrupt_stream_aborts_instead_of_returning_partial_text() {
    let huffman = HuffmanTree::build("abc");
    let mut bits = huffman.encode("abcb").expect("encodes");
    bits.truncate(bits.len() - 1);

    let err = huffman.decode(&bits).unwrap_err();
    assert!(matches!(err, HuffmanError::IncompleteCode { .. }), "{err}");
}

#[test]
fn highlighted_route_ends_at_the_symbol_leaf() {
    let huffman = HuffmanTree::build("hello world");
    let leaf = huffman.leaf_path('l').expect("l occurs");
    let highlights = Highlights::none().with_paths(PathSet::from_iter([leaf.clone()]));

    let visualizer = Visualizer::new(LayoutConfig::default()).expect("valid geometry");
    let scene = visualizer.render(huffman.tree(), &RenderOptions::default().with_highlights(highlights));

    let lit: Vec<_> = scene.nodes.iter().filter(|node| node.highlighted).collect();
    assert_eq!(lit.len(), leaf.depth() + 1);
    assert_eq!(lit.last().map(|node| node.label.as_str()), Some("3 | l"));
    // every Huffman node is drawn
    assert_eq!(scene.nodes.len(), huffman.tree().size());
    assert!(huffman.tree().walk().all(|(_, node)| !node.value.is_ghost()));
}

#[test]
fn stray_bit_after_single_symbol_code_is_rejected() {
    let huffman = HuffmanTree::build("zzz");
    assert_eq!(
        huffman.decode(bits![0, 0, 1]),
        Err(HuffmanError::InvalidCode { offset: 2 })
    );
}

proptest! {
    #[test]
    fn round_trip(text in "[a-f ]{1,64}") {
        let huffman = HuffmanTree::build(&text);
        let bits = huffman.encode(&text).expect("every symbol has a code");
        prop_assert_eq!(huffman.decode(&bits).expect("decodes"), text.clone());

        let root = huffman.tree().root.as_ref().expect("non-empty text");
        prop_assert_eq!(root.value.count, text.chars().count());
    }
}
