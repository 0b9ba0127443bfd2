use anyhow::Result;
use graph_scan::{bfs, Graph};

fn main() -> Result<()> {
    let graph = Graph::sample();
    let scan = bfs(&graph, "A")?;

    println!("bfs test: ");
    println!("{scan}");
    Ok(())
}
