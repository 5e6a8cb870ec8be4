//! Union-find and the graph algorithms built on it.
//!
//! This crate provides:
//!
//! - **DisjointSet**: union-find with iterative path compression and union by rank
//! - **Kruskal**: minimum spanning tree (forest, for disconnected input)
//! - **Path extraction**: the unique path between two vertices of a tree via BFS
//! - **Graph containers**: adjacency list, dense weight matrix and CSR storage
//!   behind small read/write capability traits
//!
//! # Example
//!
//! ```
//! use spanforest::{get_path, minimum_spanning_tree, NodeId, WeightedMatrixGraph};
//! use spanforest::{Graph, WeightedGraphMut};
//!
//! let mut g = WeightedMatrixGraph::new(4)?;
//! g.set_edge_weight(NodeId(0), NodeId(1), 1.0)?;
//! g.set_edge_weight(NodeId(1), NodeId(2), 2.0)?;
//! g.set_edge_weight(NodeId(2), NodeId(3), 1.0)?;
//! g.set_edge_weight(NodeId(0), NodeId(3), 4.0)?;
//!
//! let tree = minimum_spanning_tree(&g)?;
//! assert_eq!(tree.edge_count()?, 3);
//!
//! let path = get_path(&tree, NodeId(0), NodeId(3))?;
//! assert_eq!(path, vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]);
//! # Ok::<(), spanforest::GraphError>(())
//! ```

pub mod algorithms;
pub mod models;

// Re-export main types
pub use algorithms::disjoint_set::{connected_components, DisjointSet};
pub use algorithms::mst::{
    kruskal, minimum_spanning_tree, minimum_spanning_tree_into, MstConfig, SpanningForest,
    TieBreak,
};
pub use algorithms::path::{
    bfs_parents, bfs_parents_with_config, get_path, ParentMap, PathConfig,
};
pub use models::adjacency::AdjacencyListGraph;
pub use models::csr::{CsrGraph, CsrGraphBuilder};
pub use models::edge::WeightedEdge;
pub use models::graph::{Graph, GraphMut, WeightedGraph, WeightedGraphMut};
pub use models::matrix::WeightedMatrixGraph;
pub use models::node::{ComponentId, Distance, NodeId};

/// Graph algorithm error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Vertex count cannot be addressed by [`NodeId`].
    #[error("Invalid vertex count: {0} exceeds the addressable node range")]
    InvalidSize(usize),

    /// Vertex id outside `[0, len)`.
    #[error("Invalid node ID: {node} (vertex count {len})")]
    InvalidNodeId { node: u64, len: usize },

    /// Edge weight that cannot be ordered.
    #[error("Invalid weight {weight} for edge ({i}, {j})")]
    InvalidWeight { i: NodeId, j: NodeId, weight: f64 },

    /// No path connects the two vertices.
    #[error("Target {target} is unreachable from {from}")]
    Unreachable { from: NodeId, target: NodeId },

    /// Invalid CSR format.
    #[error("Invalid CSR format: {0}")]
    InvalidCsr(String),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Validate `node` against a vertex count, returning its array index.
pub(crate) fn check_node(node: NodeId, len: usize) -> Result<usize> {
    let idx = node.index();
    if !node.is_valid() || idx >= len {
        return Err(GraphError::InvalidNodeId {
            node: node.0 as u64,
            len,
        });
    }
    Ok(idx)
}

/// Validate a vertex count.
pub(crate) fn check_size(n: usize) -> Result<()> {
    if n > u32::MAX as usize {
        return Err(GraphError::InvalidSize(n));
    }
    Ok(())
}
