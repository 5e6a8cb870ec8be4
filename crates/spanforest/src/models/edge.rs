//! Weighted edge value type.

use std::cmp::Ordering;

use super::node::NodeId;

/// An undirected edge `(i, j)` with weight `w`.
///
/// Edges are totally ordered by weight ascending, then by `(i, j)`
/// lexicographically, so sorting a candidate list is reproducible regardless
/// of how the graph enumerated it. Weights compare with [`f64::total_cmp`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge {
    /// First endpoint.
    pub i: NodeId,
    /// Second endpoint.
    pub j: NodeId,
    /// Edge weight.
    pub w: f64,
}

impl WeightedEdge {
    /// Create a new edge.
    pub const fn new(i: NodeId, j: NodeId, w: f64) -> Self {
        Self { i, j, w }
    }

    /// Endpoints as `(min, max)`, the orientation-independent identity of the edge.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        if self.i <= self.j {
            (self.i, self.j)
        } else {
            (self.j, self.i)
        }
    }

    /// Compare by weight only.
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.w.total_cmp(&other.w)
    }
}

impl PartialEq for WeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WeightedEdge {}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeightedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_weight(other)
            .then_with(|| self.i.cmp(&other.i))
            .then_with(|| self.j.cmp(&other.j))
    }
}

impl From<(u32, u32, f64)> for WeightedEdge {
    fn from((i, j, w): (u32, u32, f64)) -> Self {
        Self::new(NodeId(i), NodeId(j), w)
    }
}
