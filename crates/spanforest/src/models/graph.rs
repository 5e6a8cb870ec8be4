//! Graph capability traits.
//!
//! Algorithms depend only on the capability they need:
//!
//! - [`Graph`]: vertex enumeration and adjacency (path extraction input)
//! - [`WeightedGraph`]: adds weight lookup (MST input)
//! - [`GraphMut`]: empty construction and edge insertion (MST output)
//! - [`WeightedGraphMut`]: weighted edge insertion
//!
//! All graphs are undirected. A missing edge has weight `f64::INFINITY`.

use super::node::NodeId;
use crate::Result;

/// Read-only view of an undirected graph over vertices `0..vertex_count()`.
pub trait Graph {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Neighbors of `node`, once per incident edge.
    ///
    /// Parallel edges make a neighbor appear repeatedly. Order carries no
    /// meaning for the algorithms in this crate.
    fn adjacent_vertices(&self, node: NodeId) -> Result<Vec<NodeId>>;

    /// Check if an edge joins `i` and `j`.
    fn has_edge(&self, i: NodeId, j: NodeId) -> Result<bool> {
        crate::check_node(j, self.vertex_count())?;
        Ok(self.adjacent_vertices(i)?.contains(&j))
    }

    /// Number of edge endpoints at `node`.
    fn degree_of(&self, node: NodeId) -> Result<usize> {
        Ok(self.adjacent_vertices(node)?.len())
    }

    /// Sum of degrees over all vertices.
    ///
    /// The first failing [`degree_of`](Graph::degree_of) is returned.
    fn total_degree(&self) -> Result<usize> {
        crate::check_size(self.vertex_count())?;
        (0..self.vertex_count())
            .map(|v| self.degree_of(NodeId::from(v)))
            .sum()
    }

    /// Number of undirected edges.
    fn edge_count(&self) -> Result<usize> {
        Ok(self.total_degree()? / 2)
    }
}

/// Graph with a weight per edge.
pub trait WeightedGraph: Graph {
    /// Weight of the edge `(i, j)`, or `f64::INFINITY` if there is none.
    fn edge_weight(&self, i: NodeId, j: NodeId) -> Result<f64>;
}

/// Graph that can be built edge by edge.
pub trait GraphMut: Graph + Sized {
    /// Create a graph with `n` vertices and no edges.
    fn with_vertices(n: usize) -> Result<Self>;

    /// Insert the undirected edge `(i, j)`.
    fn add_edge(&mut self, i: NodeId, j: NodeId) -> Result<()>;
}

/// Graph whose edge weights can be assigned.
pub trait WeightedGraphMut: WeightedGraph {
    /// Set the weight of the undirected edge `(i, j)`.
    ///
    /// `f64::INFINITY` removes the edge. `NaN` is rejected.
    fn set_edge_weight(&mut self, i: NodeId, j: NodeId, weight: f64) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;

    /// Star around vertex 0 whose last vertex cannot be read.
    struct BrokenStar;

    impl Graph for BrokenStar {
        fn vertex_count(&self) -> usize {
            4
        }

        fn adjacent_vertices(&self, node: NodeId) -> Result<Vec<NodeId>> {
            match node.0 {
                0 => Ok(vec![NodeId(1), NodeId(2), NodeId(3)]),
                3 => Err(GraphError::InvalidCsr("row 3 missing".into())),
                _ => Ok(vec![NodeId(0)]),
            }
        }
    }

    #[test]
    fn test_default_degrees() {
        assert_eq!(BrokenStar.degree_of(NodeId(0)).unwrap(), 3);
        assert!(BrokenStar.has_edge(NodeId(2), NodeId(0)).unwrap());
        assert!(!BrokenStar.has_edge(NodeId(1), NodeId(2)).unwrap());
    }

    #[test]
    fn test_total_degree_propagates_errors() {
        let expected = Err(GraphError::InvalidCsr("row 3 missing".into()));
        assert_eq!(BrokenStar.total_degree(), expected);
        assert_eq!(BrokenStar.edge_count(), expected);
    }
}
