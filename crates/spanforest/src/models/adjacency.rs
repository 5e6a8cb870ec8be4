//! Unweighted adjacency-list graph.

use super::graph::{Graph, GraphMut};
use super::node::NodeId;
use crate::{check_node, check_size, Result};

/// Undirected, unweighted graph stored as one neighbor list per vertex.
///
/// Each inserted edge is recorded in both endpoints' lists, so parallel
/// edges show up repeatedly in [`Graph::adjacent_vertices`]. This is the
/// default container for spanning-tree results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyListGraph {
    adjacency: Vec<Vec<NodeId>>,
}

impl AdjacencyListGraph {
    /// Create a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Result<Self> {
        check_size(n)?;
        Ok(Self {
            adjacency: vec![Vec::new(); n],
        })
    }

    /// Create a graph from an edge list.
    ///
    /// ```
    /// use spanforest::{AdjacencyListGraph, Graph, NodeId};
    ///
    /// let tree = AdjacencyListGraph::from_edges(4, &[(0, 1), (1, 2), (1, 3)])?;
    /// assert_eq!(tree.degree_of(NodeId(1))?, 3);
    /// # Ok::<(), spanforest::GraphError>(())
    /// ```
    pub fn from_edges(n: usize, edges: &[(u32, u32)]) -> Result<Self> {
        let mut graph = Self::new(n)?;
        for &(i, j) in edges {
            graph.add_edge(NodeId(i), NodeId(j))?;
        }
        Ok(graph)
    }

    /// Borrow the neighbor list of `node`.
    pub fn neighbors(&self, node: NodeId) -> Result<&[NodeId]> {
        let idx = check_node(node, self.adjacency.len())?;
        Ok(&self.adjacency[idx])
    }

    /// Iterate over every undirected edge once, as `(min, max)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, list)| {
            let i = NodeId::from(i);
            let mut seen_self_loop = false;
            list.iter().filter_map(move |&j| {
                if i < j {
                    Some((i, j))
                } else if i == j {
                    // A self-loop is stored twice in its own list.
                    seen_self_loop = !seen_self_loop;
                    seen_self_loop.then_some((i, j))
                } else {
                    None
                }
            })
        })
    }
}

impl Graph for AdjacencyListGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn adjacent_vertices(&self, node: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.neighbors(node)?.to_vec())
    }

    fn degree_of(&self, node: NodeId) -> Result<usize> {
        Ok(self.neighbors(node)?.len())
    }

    fn total_degree(&self) -> Result<usize> {
        Ok(self.adjacency.iter().map(Vec::len).sum())
    }
}

impl GraphMut for AdjacencyListGraph {
    fn with_vertices(n: usize) -> Result<Self> {
        Self::new(n)
    }

    fn add_edge(&mut self, i: NodeId, j: NodeId) -> Result<()> {
        let n = self.adjacency.len();
        let a = check_node(i, n)?;
        let b = check_node(j, n)?;
        self.adjacency[a].push(j);
        self.adjacency[b].push(i);
        Ok(())
    }
}
