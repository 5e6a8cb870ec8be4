//! Disjoint set (union-find) data structure.
//!
//! Maintains a partition of `{0..n-1}`. Supports:
//! - `find(x)`: representative of x's set
//! - `union(x, y)`: merge the sets containing x and y
//! - `differ(x, y)`: whether x and y are in different sets
//!
//! Uses path compression and union by rank for amortized O(α(n))
//! operations. Both `find` passes are loops, so chain length never
//! translates into call-stack depth.

use crate::models::{ComponentId, Graph, NodeId};
use crate::{check_node, check_size, Result};

/// Union-find over dense indices with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointers (parent[i] = parent of node i, or i if root).
    parent: Vec<u32>,
    /// Rank (tree height upper bound) for union by rank.
    rank: Vec<u32>,
    /// Number of disjoint sets.
    num_sets: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets.
    ///
    /// `n == 0` is valid; every operation on such a set then fails with
    /// [`GraphError::InvalidNodeId`](crate::GraphError::InvalidNodeId).
    pub fn new(n: usize) -> Result<Self> {
        check_size(n)?;
        Ok(Self {
            parent: (0..n).map(|i| i as u32).collect(),
            rank: vec![0; n],
            num_sets: n,
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.num_sets
    }

    /// Rank recorded for `x`'s entry.
    ///
    /// Only meaningful for representatives, where it bounds tree height.
    pub fn rank(&self, x: NodeId) -> Result<u32> {
        let i = check_node(x, self.len())?;
        Ok(self.rank[i])
    }

    /// Find representative of `x`'s set, compressing the path to it.
    pub fn find(&mut self, x: NodeId) -> Result<NodeId> {
        check_node(x, self.len())?;
        Ok(NodeId(self.find_root(x.0)))
    }

    /// Two-pass find on a checked index.
    fn find_root(&mut self, x: u32) -> u32 {
        let mut root = x;

        // Find root
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // Path compression: point all nodes on path directly to root
        let mut node = x;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y` by rank.
    ///
    /// Returns true if a merge occurred (x and y were in different sets).
    pub fn union(&mut self, x: NodeId, y: NodeId) -> Result<bool> {
        let root_x = self.find(x)?.0 as usize;
        let root_y = self.find(y)?.0 as usize;

        if root_x == root_y {
            return Ok(false);
        }

        // Union by rank: attach smaller tree under larger tree
        let rx = self.rank[root_x];
        let ry = self.rank[root_y];

        if rx < ry {
            self.parent[root_x] = root_y as u32;
        } else if rx > ry {
            self.parent[root_y] = root_x as u32;
        } else {
            // Same rank: x's root stays on top
            self.parent[root_y] = root_x as u32;
            self.rank[root_x] += 1;
        }

        self.num_sets -= 1;
        Ok(true)
    }

    /// Check if `x` and `y` are in different sets.
    pub fn differ(&mut self, x: NodeId, y: NodeId) -> Result<bool> {
        Ok(self.find(x)? != self.find(y)?)
    }

    /// Check if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: NodeId, y: NodeId) -> Result<bool> {
        Ok(!self.differ(x, y)?)
    }

    /// Dense set label for each element.
    ///
    /// Labels are assigned 0, 1, 2, ... in order of each set's first member.
    pub fn component_ids(&mut self) -> Vec<ComponentId> {
        let n = self.parent.len();
        let mut comp_id = vec![ComponentId::UNASSIGNED; n];
        let mut next_id = 0u32;

        for i in 0..n {
            let root = self.find_root(i as u32) as usize;

            if !comp_id[root].is_assigned() {
                comp_id[root] = ComponentId::new(next_id);
                next_id += 1;
            }

            comp_id[i] = comp_id[root];
        }

        comp_id
    }

    /// Number of elements in `x`'s set.
    pub fn set_size(&mut self, x: NodeId) -> Result<usize> {
        let root = self.find(x)?.0;
        Ok((0..self.parent.len() as u32)
            .filter(|&i| self.find_root(i) == root)
            .count())
    }
}

/// Label the connected components of a graph.
///
/// Returns one [`ComponentId`] per vertex; vertices share a label iff a
/// path joins them.
pub fn connected_components<G: Graph + ?Sized>(graph: &G) -> Result<Vec<ComponentId>> {
    let mut sets = DisjointSet::new(graph.vertex_count())?;

    for u in 0..graph.vertex_count() {
        let u = NodeId::from(u);
        for v in graph.adjacent_vertices(u)? {
            sets.union(u, v)?;
        }
    }

    Ok(sets.component_ids())
}
