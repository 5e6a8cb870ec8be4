//! Minimum spanning tree via Kruskal's algorithm.
//!
//! Candidate edges are sorted once by weight and scanned in order; an edge
//! is accepted iff its endpoints are still in different disjoint sets.
//! Disconnected input yields a minimum spanning forest, not an error.
//!
//! Time: O(E log E) for sorting + O(E α(V)) for union-find.

use tracing::{debug, trace};

use super::disjoint_set::DisjointSet;
use crate::models::{
    AdjacencyListGraph, GraphMut, NodeId, WeightedEdge, WeightedGraph, WeightedGraphMut,
};
use crate::{check_size, GraphError, Result};

/// Order among candidate edges of equal weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Equal weights ordered by `(i, j)`; output is independent of how the
    /// graph enumerates its adjacency.
    #[default]
    Lexicographic,
    /// Equal weights keep the order in which adjacency reported them.
    Discovery,
}

/// Kruskal configuration.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MstConfig {
    /// Tie-break rule for equal weights.
    pub tie_break: TieBreak,
    /// Keep only the `i <= j` orientation of each reported edge.
    ///
    /// Symmetric adjacency reports every undirected edge twice; the second
    /// copy is always rejected by the cycle check, so this only halves the
    /// candidate count and sort cost.
    pub dedup_symmetric: bool,
}

impl MstConfig {
    /// Create new Kruskal configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Drop the mirrored copy of symmetric edges before sorting.
    pub fn with_dedup(mut self) -> Self {
        self.dedup_symmetric = true;
        self
    }
}

/// Outcome of a Kruskal run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningForest {
    /// Accepted edges in acceptance (ascending weight) order.
    pub edges: Vec<WeightedEdge>,
    /// Sum of accepted edge weights.
    pub total_weight: f64,
    /// Number of trees in the forest (1 for connected non-empty input).
    pub num_trees: usize,
    /// Vertex count of the input graph.
    pub num_nodes: usize,
}

impl SpanningForest {
    /// Number of accepted edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the forest is a single tree spanning every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        self.num_nodes <= 1 || self.edges.len() == self.num_nodes - 1
    }

    /// Materialize the forest as an unweighted graph over the input's vertices.
    pub fn to_graph<G: GraphMut>(&self) -> Result<G> {
        let mut graph = G::with_vertices(self.num_nodes)?;
        for edge in &self.edges {
            graph.add_edge(edge.i, edge.j)?;
        }
        Ok(graph)
    }

    /// Materialize the forest keeping edge weights.
    pub fn to_weighted_graph<G: GraphMut + WeightedGraphMut>(&self) -> Result<G> {
        let mut graph = G::with_vertices(self.num_nodes)?;
        for edge in &self.edges {
            graph.set_edge_weight(edge.i, edge.j, edge.w)?;
        }
        Ok(graph)
    }
}

/// Enumerate candidate edges from adjacency.
fn collect_candidates<G: WeightedGraph + ?Sized>(
    graph: &G,
    dedup_symmetric: bool,
) -> Result<Vec<WeightedEdge>> {
    check_size(graph.vertex_count())?;
    let mut edges = Vec::new();

    for i in 0..graph.vertex_count() {
        let i = NodeId::from(i);
        for j in graph.adjacent_vertices(i)? {
            if dedup_symmetric && j < i {
                continue;
            }
            let w = graph.edge_weight(i, j)?;
            if w.is_nan() {
                return Err(GraphError::InvalidWeight { i, j, weight: w });
            }
            if w == f64::INFINITY {
                continue;
            }
            edges.push(WeightedEdge::new(i, j, w));
        }
    }

    Ok(edges)
}

/// Kruskal's algorithm with configuration.
///
/// Returns the accepted edges together with the forest's total weight and
/// tree count. Callers needing a single tree check
/// [`SpanningForest::is_spanning_tree`].
pub fn kruskal<G: WeightedGraph + ?Sized>(
    graph: &G,
    config: &MstConfig,
) -> Result<SpanningForest> {
    let n = graph.vertex_count();
    let mut candidates = collect_candidates(graph, config.dedup_symmetric)?;

    // Both sorts are stable; Discovery relies on that for its tie order
    match config.tie_break {
        TieBreak::Lexicographic => candidates.sort(),
        TieBreak::Discovery => candidates.sort_by(WeightedEdge::cmp_weight),
    }

    debug!(
        "Kruskal over {} vertices, {} candidate edges",
        n,
        candidates.len()
    );

    let mut sets = DisjointSet::new(n)?;
    let mut accepted = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0.0;

    for edge in candidates {
        if sets.set_count() <= 1 {
            break;
        }

        if sets.differ(edge.i, edge.j)? {
            sets.union(edge.i, edge.j)?;
            trace!("accepted edge ({}, {}) w={}", edge.i, edge.j, edge.w);
            total_weight += edge.w;
            accepted.push(edge);
        }
    }

    let forest = SpanningForest {
        edges: accepted,
        total_weight,
        num_trees: sets.set_count(),
        num_nodes: n,
    };

    debug!(
        "Kruskal accepted {} edges, total weight {}, {} tree(s)",
        forest.edges.len(),
        forest.total_weight,
        forest.num_trees
    );

    Ok(forest)
}

/// Minimum spanning tree (or forest) of `graph` as an adjacency-list graph.
///
/// The result has the same vertex ids as the input and contains exactly the
/// accepted edges, without weights.
pub fn minimum_spanning_tree<G: WeightedGraph + ?Sized>(
    graph: &G,
) -> Result<AdjacencyListGraph> {
    minimum_spanning_tree_into(graph)
}

/// Minimum spanning tree (or forest) materialized into any writable graph.
pub fn minimum_spanning_tree_into<O, G>(graph: &G) -> Result<O>
where
    O: GraphMut,
    G: WeightedGraph + ?Sized,
{
    kruskal(graph, &MstConfig::default())?.to_graph()
}
