//! Fuzz target for Kruskal spanning forests.
//!
//! Builds arbitrary multigraphs (self-loops, parallel edges, odd weights)
//! and checks forest invariants on the result.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spanforest::{
    connected_components, get_path, kruskal, CsrGraph, DisjointSet, GraphError, MstConfig, NodeId,
};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    size: u8,
    edges: Vec<(u8, u8, f64)>,
    dedup: bool,
}

fuzz_target!(|input: FuzzInput| {
    if input.edges.len() > 1000 {
        return;
    }

    let n = input.size as usize;
    let edges: Vec<_> = input
        .edges
        .iter()
        .map(|&(i, j, w)| (i as u32, j as u32, w))
        .collect();

    let graph = match CsrGraph::from_weighted_edges(n, &edges) {
        Ok(g) => g,
        Err(GraphError::InvalidNodeId { .. }) | Err(GraphError::InvalidWeight { .. }) => return,
        Err(e) => panic!("unexpected build error: {}", e),
    };
    graph.validate().unwrap();

    let config = if input.dedup {
        MstConfig::new().with_dedup()
    } else {
        MstConfig::new()
    };
    let forest = kruskal(&graph, &config).unwrap();

    // Acyclic, ascending
    let mut sets = DisjointSet::new(n).unwrap();
    for e in &forest.edges {
        assert!(sets.union(e.i, e.j).unwrap(), "cycle through {:?}", e);
    }
    assert!(forest.edges.windows(2).all(|w| w[0] <= w[1]));

    // One tree per component
    let components = connected_components(&graph).unwrap();
    let trees = components.iter().map(|c| c.0).max().map_or(0, |m| m as usize + 1);
    assert_eq!(forest.num_trees, trees);
    assert_eq!(forest.edges.len(), n - trees);

    // Every accepted edge's endpoints are joined by a tree path
    let tree: spanforest::AdjacencyListGraph = forest.to_graph().unwrap();
    if let Some(e) = forest.edges.first() {
        let path = get_path(&tree, e.i, e.j).unwrap();
        assert_eq!(path, vec![e.i, e.j]);
    }
    if n > 0 {
        let _ = get_path(&tree, NodeId(0), NodeId(n as u32 - 1));
    }
});
