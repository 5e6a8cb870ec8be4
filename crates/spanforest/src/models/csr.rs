//! Compressed Sparse Row (CSR) graph storage.
//!
//! CSR keeps every vertex's neighbors in one contiguous slice:
//! - O(1) access to row start/end positions
//! - O(degree) iteration over neighbors
//! - Cache-friendly sequential access patterns
//!
//! Memory layout:
//! - `row_ptr[i]` = starting index in col_idx for row i
//! - `col_idx[row_ptr[i]..row_ptr[i+1]]` = neighbors of vertex i
//! - `values[row_ptr[i]..row_ptr[i+1]]` = weights of those edges
//!
//! The graph is undirected, so every edge occupies one slot in each
//! endpoint's row.

use super::graph::{Graph, WeightedGraph};
use super::node::NodeId;
use crate::{check_node, check_size, GraphError, Result};

/// Immutable undirected weighted graph in CSR layout.
///
/// For a graph with N vertices and M edges:
/// - `row_ptr`: N+1 elements
/// - `col_idx`: 2M elements
/// - `values`: 2M elements
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CsrGraph {
    /// Number of vertices.
    pub num_nodes: usize,
    /// Row pointers (length = num_nodes + 1).
    pub row_ptr: Vec<u64>,
    /// Column indices (neighbor node IDs).
    pub col_idx: Vec<u32>,
    /// Edge weights, parallel to `col_idx`.
    pub values: Vec<f64>,
}

impl CsrGraph {
    /// Create a graph with no edges.
    pub fn empty(num_nodes: usize) -> Result<Self> {
        check_size(num_nodes)?;
        Ok(Self {
            num_nodes,
            row_ptr: vec![0; num_nodes + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        })
    }

    /// Create CSR from an undirected weighted edge list.
    ///
    /// # Example
    ///
    /// ```
    /// use spanforest::{CsrGraph, Graph};
    ///
    /// // 0 - 1 - 2
    /// let csr = CsrGraph::from_weighted_edges(3, &[(0, 1, 1.0), (1, 2, 2.0)])?;
    /// assert_eq!(csr.num_nonzeros(), 4);
    /// assert_eq!(csr.edge_count()?, 2);
    /// # Ok::<(), spanforest::GraphError>(())
    /// ```
    pub fn from_weighted_edges(num_nodes: usize, edges: &[(u32, u32, f64)]) -> Result<Self> {
        CsrGraphBuilder::new(num_nodes)
            .with_weighted_edges(edges)
            .build()
    }

    /// Number of stored adjacency entries (twice the edge count).
    pub fn num_nonzeros(&self) -> usize {
        self.col_idx.len()
    }

    /// Check if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.col_idx.is_empty()
    }

    /// Slot range of `node`'s row.
    ///
    /// Fails with [`GraphError::InvalidCsr`] when `row_ptr` points outside
    /// `col_idx` or `values`.
    fn row(&self, node: NodeId) -> Result<std::ops::Range<usize>> {
        let i = check_node(node, self.num_nodes)?;
        let (start, end) = match (self.row_ptr.get(i), self.row_ptr.get(i + 1)) {
            (Some(&start), Some(&end)) => (start as usize, end as usize),
            _ => {
                return Err(GraphError::InvalidCsr(format!(
                    "row_ptr length {} too short for node {}",
                    self.row_ptr.len(),
                    i
                )))
            }
        };
        if start > end || end > self.col_idx.len() || end > self.values.len() {
            return Err(GraphError::InvalidCsr(format!(
                "row {} spans {}..{} outside {} slots",
                i,
                start,
                end,
                self.col_idx.len().min(self.values.len())
            )));
        }
        Ok(start..end)
    }

    /// Neighbor ids of a node.
    pub fn neighbors(&self, node: NodeId) -> Result<&[u32]> {
        let range = self.row(node)?;
        Ok(&self.col_idx[range])
    }

    /// Neighbors paired with edge weights.
    pub fn weighted_neighbors(&self, node: NodeId) -> Result<Vec<(NodeId, f64)>> {
        let range = self.row(node)?;
        Ok(self.col_idx[range.clone()]
            .iter()
            .zip(&self.values[range])
            .map(|(&col, &w)| (NodeId(col), w))
            .collect())
    }

    /// Validate CSR structure.
    pub fn validate(&self) -> Result<()> {
        // Check row_ptr length
        if self.row_ptr.len() != self.num_nodes + 1 {
            return Err(GraphError::InvalidCsr(format!(
                "row_ptr length {} != num_nodes + 1 = {}",
                self.row_ptr.len(),
                self.num_nodes + 1
            )));
        }

        // Check row_ptr is non-decreasing
        for i in 0..self.num_nodes {
            if self.row_ptr[i] > self.row_ptr[i + 1] {
                return Err(GraphError::InvalidCsr(format!(
                    "row_ptr not monotonic at index {}",
                    i
                )));
            }
        }

        // Check final row_ptr matches col_idx length
        let nnz = *self.row_ptr.last().unwrap_or(&0) as usize;
        if nnz != self.col_idx.len() {
            return Err(GraphError::InvalidCsr(format!(
                "row_ptr[-1] = {} != col_idx.len() = {}",
                nnz,
                self.col_idx.len()
            )));
        }

        if self.values.len() != self.col_idx.len() {
            return Err(GraphError::InvalidCsr(format!(
                "values.len() = {} != col_idx.len() = {}",
                self.values.len(),
                self.col_idx.len()
            )));
        }

        for &col in &self.col_idx {
            if col as usize >= self.num_nodes {
                return Err(GraphError::InvalidCsr(format!(
                    "col_idx {} >= num_nodes {}",
                    col, self.num_nodes
                )));
            }
        }

        if let Some(w) = self.values.iter().find(|w| w.is_nan()) {
            return Err(GraphError::InvalidCsr(format!("edge weight {}", w)));
        }

        Ok(())
    }
}

impl Graph for CsrGraph {
    fn vertex_count(&self) -> usize {
        self.num_nodes
    }

    fn adjacent_vertices(&self, node: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.neighbors(node)?.iter().map(|&c| NodeId(c)).collect())
    }

    fn has_edge(&self, i: NodeId, j: NodeId) -> Result<bool> {
        check_node(j, self.num_nodes)?;
        Ok(self.neighbors(i)?.contains(&j.0))
    }

    fn degree_of(&self, node: NodeId) -> Result<usize> {
        Ok(self.row(node)?.len())
    }

    fn total_degree(&self) -> Result<usize> {
        Ok(self.col_idx.len())
    }
}

impl WeightedGraph for CsrGraph {
    /// Lightest weight among edges joining `i` and `j`.
    fn edge_weight(&self, i: NodeId, j: NodeId) -> Result<f64> {
        check_node(j, self.num_nodes)?;
        let range = self.row(i)?;
        Ok(self.col_idx[range.clone()]
            .iter()
            .zip(&self.values[range])
            .filter(|(col, _)| **col == j.0)
            .map(|(_, &w)| w)
            .fold(f64::INFINITY, f64::min))
    }
}

/// Builder for CSR graphs.
#[derive(Debug, Default)]
pub struct CsrGraphBuilder {
    num_nodes: usize,
    edges: Vec<(u32, u32, f64)>,
}

impl CsrGraphBuilder {
    /// Create new builder with given number of nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edges: Vec::new(),
        }
    }

    /// Add unit-weight edges from slice.
    pub fn with_edges(mut self, edges: &[(u32, u32)]) -> Self {
        for &(src, dst) in edges {
            self.edges.push((src, dst, 1.0));
        }
        self
    }

    /// Add weighted edges from slice.
    pub fn with_weighted_edges(mut self, edges: &[(u32, u32, f64)]) -> Self {
        self.edges.extend_from_slice(edges);
        self
    }

    /// Add a single unit-weight edge.
    pub fn add_edge(&mut self, src: u32, dst: u32) {
        self.edges.push((src, dst, 1.0));
    }

    /// Add a weighted edge.
    pub fn add_weighted_edge(&mut self, src: u32, dst: u32, weight: f64) {
        self.edges.push((src, dst, weight));
    }

    /// Build the CSR graph.
    ///
    /// Fails on an endpoint outside `0..num_nodes` or a `NaN` weight.
    /// Infinite weights mean "no edge" and are dropped.
    pub fn build(self) -> Result<CsrGraph> {
        check_size(self.num_nodes)?;
        let n = self.num_nodes;

        // Each undirected edge lands in both endpoints' rows
        let mut slots: Vec<(u32, u32, f64)> = Vec::with_capacity(self.edges.len() * 2);
        for &(src, dst, w) in &self.edges {
            check_node(NodeId(src), n)?;
            check_node(NodeId(dst), n)?;
            if w.is_nan() {
                return Err(GraphError::InvalidWeight {
                    i: NodeId(src),
                    j: NodeId(dst),
                    weight: w,
                });
            }
            if w == f64::INFINITY {
                continue;
            }
            slots.push((src, dst, w));
            slots.push((dst, src, w));
        }

        // Stable sort keeps insertion order within a row
        slots.sort_by_key(|e| e.0);

        // Build row_ptr
        let mut row_ptr = vec![0u64; n + 1];
        for &(src, _, _) in &slots {
            row_ptr[src as usize + 1] += 1;
        }

        // Cumulative sum
        for i in 1..=n {
            row_ptr[i] += row_ptr[i - 1];
        }

        Ok(CsrGraph {
            num_nodes: n,
            row_ptr,
            col_idx: slots.iter().map(|e| e.1).collect(),
            values: slots.iter().map(|e| e.2).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::empty(5).unwrap();
        assert_eq!(csr.vertex_count(), 5);
        assert_eq!(csr.num_nonzeros(), 0);
        assert!(csr.is_empty());
        assert!(csr.validate().is_ok());
    }

    #[test]
    fn test_edges_stored_in_both_rows() {
        //  0 - 1 - 2
        //      |
        //      3
        let csr = CsrGraphBuilder::new(4)
            .with_edges(&[(0, 1), (1, 2), (1, 3)])
            .build()
            .unwrap();

        assert_eq!(csr.num_nonzeros(), 6);
        assert_eq!(csr.edge_count().unwrap(), 3);
        assert_eq!(csr.neighbors(NodeId(1)).unwrap(), &[0, 2, 3]);
        assert_eq!(csr.neighbors(NodeId(3)).unwrap(), &[1]);
        assert!(csr.validate().is_ok());
    }

    #[test]
    fn test_degree() {
        let csr = CsrGraphBuilder::new(4)
            .with_edges(&[(0, 1), (0, 2), (0, 3), (1, 2)])
            .build()
            .unwrap();

        assert_eq!(csr.degree_of(NodeId(0)).unwrap(), 3);
        assert_eq!(csr.degree_of(NodeId(1)).unwrap(), 2);
        assert_eq!(csr.degree_of(NodeId(3)).unwrap(), 1);
        assert_eq!(csr.total_degree().unwrap(), 8);
    }

    #[test]
    fn test_has_edge() {
        let csr = CsrGraph::from_weighted_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();

        assert!(csr.has_edge(NodeId(0), NodeId(1)).unwrap());
        assert!(csr.has_edge(NodeId(1), NodeId(0)).unwrap());
        assert!(!csr.has_edge(NodeId(0), NodeId(2)).unwrap());
        assert!(csr.has_edge(NodeId(0), NodeId(7)).is_err());
    }

    #[test]
    fn test_weights() {
        let csr =
            CsrGraph::from_weighted_edges(3, &[(0, 1, 1.5), (0, 2, 2.5), (1, 0, 0.5)]).unwrap();

        // Parallel edges report the lightest weight
        assert_eq!(csr.edge_weight(NodeId(1), NodeId(0)).unwrap(), 0.5);
        assert_eq!(csr.edge_weight(NodeId(2), NodeId(0)).unwrap(), 2.5);
        assert_eq!(csr.edge_weight(NodeId(1), NodeId(2)).unwrap(), f64::INFINITY);

        let neighbors = csr.weighted_neighbors(NodeId(0)).unwrap();
        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.contains(&(NodeId(2), 2.5)));
    }

    #[test]
    fn test_builder() {
        let mut builder = CsrGraphBuilder::new(4);
        builder.add_edge(0, 1);
        builder.add_edge(0, 2);
        builder.add_weighted_edge(1, 3, 2.5);
        builder.add_weighted_edge(2, 3, f64::INFINITY);

        let csr = builder.build().unwrap();
        assert_eq!(csr.edge_count().unwrap(), 3);
        assert_eq!(csr.edge_weight(NodeId(3), NodeId(1)).unwrap(), 2.5);
    }

    #[test]
    fn test_builder_rejects_bad_input() {
        let out_of_range = CsrGraphBuilder::new(2).with_edges(&[(0, 2)]).build();
        assert!(matches!(
            out_of_range,
            Err(GraphError::InvalidNodeId { node: 2, len: 2 })
        ));

        let nan = CsrGraph::from_weighted_edges(2, &[(0, 1, f64::NAN)]);
        assert!(matches!(nan, Err(GraphError::InvalidWeight { .. })));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_unaddressable_size() {
        let n = u32::MAX as usize + 1;
        assert_eq!(CsrGraphBuilder::new(n).build(), Err(GraphError::InvalidSize(n)));
        assert_eq!(CsrGraph::empty(n), Err(GraphError::InvalidSize(n)));
    }

    #[test]
    fn test_malformed_rows_are_errors() {
        // row_ptr runs past col_idx
        let long_rows = CsrGraph {
            num_nodes: 2,
            row_ptr: vec![0, 5, 5],
            col_idx: vec![1],
            values: vec![1.0],
        };
        assert!(matches!(
            long_rows.neighbors(NodeId(0)),
            Err(GraphError::InvalidCsr(_))
        ));
        assert!(matches!(
            long_rows.edge_weight(NodeId(0), NodeId(1)),
            Err(GraphError::InvalidCsr(_))
        ));
        assert!(matches!(
            crate::kruskal(&long_rows, &crate::MstConfig::default()),
            Err(GraphError::InvalidCsr(_))
        ));

        // row_ptr shorter than num_nodes + 1
        let short_row_ptr = CsrGraph {
            num_nodes: 3,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            values: Vec::new(),
        };
        assert!(matches!(
            crate::get_path(&short_row_ptr, NodeId(0), NodeId(2)),
            Err(GraphError::InvalidCsr(_))
        ));
        assert!(matches!(
            crate::connected_components(&short_row_ptr),
            Err(GraphError::InvalidCsr(_))
        ));

        // Decreasing row_ptr and values shorter than col_idx
        let reversed = CsrGraph {
            num_nodes: 2,
            row_ptr: vec![0, 2, 1],
            col_idx: vec![1, 0],
            values: vec![1.0, 1.0],
        };
        assert!(reversed.degree_of(NodeId(1)).is_err());
        let short_values = CsrGraph {
            num_nodes: 2,
            row_ptr: vec![0, 1, 2],
            col_idx: vec![1, 0],
            values: vec![1.0],
        };
        assert!(short_values.weighted_neighbors(NodeId(1)).is_err());
        assert!(short_values.neighbors(NodeId(0)).is_ok());
    }

    #[test]
    fn test_validation() {
        let invalid = CsrGraph {
            num_nodes: 3,
            row_ptr: vec![0, 1, 2, 2],
            col_idx: vec![1, 10], // 10 is out of bounds
            values: vec![1.0, 1.0],
        };
        assert!(matches!(invalid.validate(), Err(GraphError::InvalidCsr(_))));

        let short_values = CsrGraph {
            num_nodes: 2,
            row_ptr: vec![0, 1, 2],
            col_idx: vec![1, 0],
            values: vec![1.0],
        };
        assert!(short_values.validate().is_err());
    }
}
