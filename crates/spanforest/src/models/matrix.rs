//! Dense weight-matrix graph.

use super::graph::{Graph, GraphMut, WeightedGraph, WeightedGraphMut};
use super::node::NodeId;
use crate::{check_node, check_size, GraphError, Result};

/// Undirected weighted graph backed by an `n × n` weight matrix.
///
/// Every cell starts at `f64::INFINITY` (no edge). The matrix is kept
/// symmetric: setting `(i, j)` also sets `(j, i)`. Suited to small, dense
/// inputs; memory is `O(n²)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedMatrixGraph {
    n: usize,
    /// Row-major weights, `weights[i * n + j]`.
    weights: Vec<f64>,
}

impl WeightedMatrixGraph {
    /// Create a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Result<Self> {
        check_size(n)?;
        let cells = n.checked_mul(n).ok_or(GraphError::InvalidSize(n))?;
        Ok(Self {
            n,
            weights: vec![f64::INFINITY; cells],
        })
    }

    /// Create a graph from `(i, j, weight)` triples.
    pub fn from_weighted_edges(n: usize, edges: &[(u32, u32, f64)]) -> Result<Self> {
        let mut graph = Self::new(n)?;
        for &(i, j, w) in edges {
            graph.set_edge_weight(NodeId(i), NodeId(j), w)?;
        }
        Ok(graph)
    }

    /// Weight row of `node`.
    fn row(&self, node: NodeId) -> Result<&[f64]> {
        let i = check_node(node, self.n)?;
        Ok(&self.weights[i * self.n..(i + 1) * self.n])
    }
}

impl Graph for WeightedMatrixGraph {
    fn vertex_count(&self) -> usize {
        self.n
    }

    /// Columns with a weight below `+inf`, in ascending order.
    fn adjacent_vertices(&self, node: NodeId) -> Result<Vec<NodeId>> {
        Ok(self
            .row(node)?
            .iter()
            .enumerate()
            .filter(|(_, w)| **w != f64::INFINITY)
            .map(|(j, _)| NodeId::from(j))
            .collect())
    }

    fn has_edge(&self, i: NodeId, j: NodeId) -> Result<bool> {
        Ok(self.edge_weight(i, j)? != f64::INFINITY)
    }

    fn degree_of(&self, node: NodeId) -> Result<usize> {
        Ok(self.row(node)?.iter().filter(|w| **w != f64::INFINITY).count())
    }

    fn total_degree(&self) -> Result<usize> {
        Ok(self.weights.iter().filter(|w| **w != f64::INFINITY).count())
    }
}

impl WeightedGraph for WeightedMatrixGraph {
    fn edge_weight(&self, i: NodeId, j: NodeId) -> Result<f64> {
        let a = check_node(i, self.n)?;
        let b = check_node(j, self.n)?;
        Ok(self.weights[a * self.n + b])
    }
}

impl GraphMut for WeightedMatrixGraph {
    fn with_vertices(n: usize) -> Result<Self> {
        Self::new(n)
    }

    /// Inserts the edge with unit weight.
    fn add_edge(&mut self, i: NodeId, j: NodeId) -> Result<()> {
        self.set_edge_weight(i, j, 1.0)
    }
}

impl WeightedGraphMut for WeightedMatrixGraph {
    fn set_edge_weight(&mut self, i: NodeId, j: NodeId, weight: f64) -> Result<()> {
        let a = check_node(i, self.n)?;
        let b = check_node(j, self.n)?;
        if weight.is_nan() {
            return Err(GraphError::InvalidWeight { i, j, weight });
        }
        self.weights[a * self.n + b] = weight;
        self.weights[b * self.n + a] = weight;
        Ok(())
    }
}
