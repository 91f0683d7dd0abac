//! Walkthrough of the four containers.
//!
//! Run with `RUST_LOG=trace cargo run --example basic_usage --features tracing`
//! to see the library's own trace events alongside the demo output.

use anyhow::{Context, Result};
use keel::{BinarySearchTree, Graph, LinkedList, MinHeap};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("keel Basic Usage Example");
    println!("========================");

    linked_list_demo();
    bst_demo();
    heap_demo();
    graph_demo().context("graph walkthrough failed")?;

    Ok(())
}

fn linked_list_demo() {
    println!("\nLinkedList:");
    let mut list = LinkedList::new();
    for v in [1, 2, 3] {
        list.append(v);
    }
    println!("  after append 1,2,3: {:?} (len {})", list.to_list(), list.len());

    let removed = list.delete(&2);
    println!("  delete(2) -> {removed}: {:?}", list.to_list());

    let removed = list.delete(&5);
    println!("  delete(5) -> {removed}: len stays {}", list.len());

    list.prepend(0);
    info!(len = list.len(), "linked list ready");
    println!("  prepend(0): {list:?}");
}

fn bst_demo() {
    println!("\nBinarySearchTree:");
    let mut tree = BinarySearchTree::new();
    for v in [5, 3, 7, 1, 9, 4] {
        tree.insert(v);
    }
    let duplicate_inserted = tree.insert(5);

    println!("  inorder: {:?}", tree.inorder_traversal());
    println!("  min: {:?}, max: {:?}", tree.find_min(), tree.find_max());
    println!("  search(4): {}, search(10): {}", tree.search(&4), tree.search(&10));
    println!("  insert(5) again -> {duplicate_inserted}, height {}", tree.height());
}

fn heap_demo() {
    println!("\nMinHeap:");
    let mut heap = MinHeap::new();
    for v in [5, 3, 7, 1, 9, 4] {
        heap.insert(v);
    }
    println!("  peek: {:?}, size: {}", heap.peek(), heap.size());

    let mut drained = Vec::with_capacity(heap.size());
    while let Some(v) = heap.extract_min() {
        drained.push(v);
    }
    println!("  extraction order: {drained:?}");
    println!("  empty peek: {:?}", heap.peek());
}

fn graph_demo() -> Result<()> {
    println!("\nGraph:");
    let mut graph = Graph::new();
    for (u, v) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")] {
        graph.add_edge(u, v);
    }
    println!("  undirected: {graph:?}");
    println!("  bfs(A): {:?}", graph.bfs(&"A")?);
    println!("  dfs(A): {:?}", graph.dfs(&"A")?);

    let mut directed = Graph::directed();
    directed.add_edge("A", "B");
    println!(
        "  directed A->B: has_edge(A, B) = {}, has_edge(B, A) = {}",
        directed.has_edge(&"A", &"B"),
        directed.has_edge(&"B", &"A")
    );

    match directed.bfs(&"Z") {
        Ok(order) => println!("  bfs(Z): {order:?}"),
        Err(err) => println!("  bfs(Z): {err}"),
    }
    info!(vertices = graph.vertex_count(), edges = graph.edge_count(), "graph ready");
    Ok(())
}
