use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use treescape::geometry::PHONE_BREAKPOINT;
use treescape::structures::{
    ascii_bit_count, bits_to_string, string_to_ascii, Bst, HuffmanError, HuffmanTree, RandomTree,
};
use treescape::{Highlights, LayoutConfig, Orientation, PathSet, RenderOptions, Tree, TreeValue, Visualizer};

#[derive(Parser, Debug)]
#[command(name = "treescape", about = "Tidy tree layouts for BSTs, Huffman codes and random trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lay out a binary search tree built from a sequence of operations.
    Bst {
        /// Keys to insert, in order.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        insert: Vec<i64>,
        /// Keys to remove after all insertions.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        remove: Vec<i64>,
        /// Do not draw edges that lead only to absent children.
        #[arg(long)]
        hide_null_branches: bool,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Build the Huffman tree of a text and lay it out.
    Huffman {
        /// Text to encode.
        text: String,
        /// Highlight the route from the root to this symbol's leaf.
        #[arg(long)]
        highlight_path: Option<char>,
        /// Highlight only this symbol's leaf.
        #[arg(long)]
        highlight_node: Option<char>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Lay out a reproducible random tree.
    Random {
        /// Upper bound on children per node.
        #[arg(long, default_value_t = 3)]
        max_children: u64,
        /// Levels below the root.
        #[arg(long, default_value_t = 3)]
        levels: u64,
        /// Generator seed.
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Rotation in degrees; overrides --viewport-width.
    #[arg(long, allow_negative_numbers = true)]
    rotate: Option<f64>,
    /// Caller viewport width in pixels; narrow viewports get portrait orientation.
    #[arg(long)]
    viewport_width: Option<f64>,
    /// Number every edge with its branch index.
    #[arg(long)]
    label_branches: bool,
    /// Node circle diameter.
    #[arg(long, default_value_t = 2.0)]
    node_diameter: f64,
    /// Gap between neighbouring siblings.
    #[arg(long, default_value_t = 0.5)]
    sibling_gap: f64,
    /// Gap between neighbouring subtrees.
    #[arg(long, default_value_t = 1.0)]
    subtree_gap: f64,
    /// Distance between levels.
    #[arg(long, default_value_t = 3.0)]
    vertical_spacing: f64,
}

impl LayoutArgs {
    fn config(&self) -> LayoutConfig {
        LayoutConfig::default()
            .with_node_diameter(self.node_diameter)
            .with_sibling_gap(self.sibling_gap)
            .with_subtree_gap(self.subtree_gap)
            .with_vertical_spacing(self.vertical_spacing)
    }

    fn rotation(&self) -> f64 {
        match (self.rotate, self.viewport_width) {
            (Some(degrees), _) => degrees,
            (None, Some(width)) => Orientation::for_viewport(width, PHONE_BREAKPOINT).degrees(),
            (None, None) => 0.0,
        }
    }

    fn options(&self) -> RenderOptions {
        RenderOptions::default()
            .with_branch_labels(self.label_branches)
            .with_rotation(self.rotation())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bst {
            insert,
            remove,
            hide_null_branches,
            layout,
        } => run_bst(&insert, &remove, hide_null_branches, &layout)?,
        Commands::Huffman {
            text,
            highlight_path,
            highlight_node,
            layout,
        } => run_huffman(&text, highlight_path, highlight_node, &layout)?,
        Commands::Random {
            max_children,
            levels,
            seed,
            layout,
        } => run_random(max_children, levels, seed, &layout)?,
    }

    Ok(())
}

fn run_bst(insert: &[i64], remove: &[i64], hide_null_branches: bool, layout: &LayoutArgs) -> Result<()> {
    let mut bst = Bst::from_keys(insert.iter().copied());
    for &key in remove {
        if !bst.remove(key) {
            info!(key, "key not present, nothing removed");
        }
    }
    println!("keys: {:?}", bst.keys());

    let options = layout.options().with_hidden_ghost_branches(hide_null_branches);
    render(bst.tree(), layout, &options)
}

fn run_huffman(
    text: &str,
    highlight_path: Option<char>,
    highlight_node: Option<char>,
    layout: &LayoutArgs,
) -> Result<()> {
    let huffman = HuffmanTree::build(text);

    let mut highlights = Highlights::none();
    if let Some(symbol) = highlight_path {
        highlights = highlights.with_paths(leaf_set(&huffman, symbol)?);
    }
    if let Some(symbol) = highlight_node {
        highlights = highlights.with_nodes(leaf_set(&huffman, symbol)?);
    }

    let bits = huffman.encode(text).context("failed to encode input text")?;
    let decoded = huffman.decode(&bits).context("failed to decode encoded text")?;

    println!("ascii: {} bits", ascii_bit_count(text));
    println!("  {}", string_to_ascii(text));
    println!("huffman: {} bits", bits.len());
    println!("  {}", bits_to_string(&bits));
    for (symbol, code) in huffman.codes() {
        println!("  {:?}\t{}", symbol, bits_to_string(code));
    }
    println!("round trip: {}", if decoded == text { "ok" } else { "MISMATCH" });

    let options = layout.options().with_highlights(highlights);
    render(huffman.tree(), layout, &options)
}

fn run_random(max_children: u64, levels: u64, seed: u64, layout: &LayoutArgs) -> Result<()> {
    let tree = RandomTree::build(max_children, levels, seed);
    println!("nodes: {}, depth: {}", tree.size(), tree.depth());
    render(&tree, layout, &layout.options())
}

fn leaf_set(huffman: &HuffmanTree, symbol: char) -> Result<PathSet> {
    let path = huffman
        .leaf_path(symbol)
        .ok_or(HuffmanError::UnknownSymbol(symbol))
        .with_context(|| format!("cannot highlight {symbol:?}"))?;
    Ok(PathSet::from_iter([path]))
}

fn render<V: TreeValue>(tree: &Tree<V>, layout: &LayoutArgs, options: &RenderOptions) -> Result<()> {
    let visualizer = Visualizer::new(layout.config()).context("invalid layout geometry")?;
    let scene = visualizer.render(tree, options);
    print!("{scene}");
    Ok(())
}
