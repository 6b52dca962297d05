//! Build a Huffman tree, compare it against fixed-width ASCII, and
//! highlight the route to each symbol in turn.

use treescape::structures::{ascii_bit_count, bits_to_string, HuffmanTree};
use treescape::{Highlights, LayoutConfig, PathSet, RenderOptions, Visualizer};

fn main() -> anyhow::Result<()> {
    let text = "abracadabra";
    let huffman = HuffmanTree::build(text);
    let bits = huffman.encode(text)?;

    println!("{text:?}: {} ascii bits, {} huffman bits", ascii_bit_count(text), bits.len());
    println!("decoded: {}", huffman.decode(&bits)?);

    let visualizer = Visualizer::new(LayoutConfig::default())?;
    for (symbol, code) in huffman.codes() {
        let Some(leaf) = huffman.leaf_path(*symbol) else {
            continue;
        };
        let highlights = Highlights::none().with_paths(PathSet::from_iter([leaf]));
        let scene = visualizer.render(
            huffman.tree(),
            &RenderOptions::default()
                .with_highlights(highlights)
                .with_branch_labels(true),
        );
        let route: Vec<_> = scene
            .nodes
            .iter()
            .filter(|node| node.highlighted)
            .map(|node| node.label.as_str())
            .collect();
        println!("{symbol:?} = {}: {}", bits_to_string(code), route.join(" -> "));
    }

    Ok(())
}
