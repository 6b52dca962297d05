//! Grow and prune a BST, printing the layout after each step.

use treescape::structures::Bst;
use treescape::{LayoutConfig, Orientation, RenderOptions, Visualizer, PHONE_BREAKPOINT};

fn main() -> anyhow::Result<()> {
    let visualizer = Visualizer::new(LayoutConfig::default())?;
    let mut bst = Bst::new();

    // A phone-sized viewport gets the portrait view.
    let degrees = Orientation::for_viewport(390.0, PHONE_BREAKPOINT).degrees();
    let options = RenderOptions::default()
        .with_hidden_ghost_branches(true)
        .with_rotation(degrees);

    for key in [50, 25, 75, 12, 37, 62, 87, 30] {
        bst.insert(key);
        let scene = visualizer.render(bst.tree(), &options);
        println!(
            "insert {key}: {} nodes, {} edges, viewport {:.1} x {:.1}",
            scene.nodes.len(),
            scene.edges.len(),
            scene.view.bounds.width(),
            scene.view.bounds.height()
        );
    }

    for key in [25, 50] {
        bst.remove(key);
        println!("remove {key}: keys {:?}", bst.keys());
    }

    print!("{}", visualizer.render(bst.tree(), &options));
    Ok(())
}
