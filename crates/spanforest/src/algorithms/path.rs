//! Path extraction on trees via breadth-first search.
//!
//! One BFS from the source records each reached vertex's parent; the path to
//! any target is recovered by walking parents back until the source is hit.
//! In a tree this is the unique simple path. On a graph with cycles it is a
//! path with the fewest edges.

use std::collections::VecDeque;

use tracing::trace;

use crate::models::{Distance, Graph, NodeId};
use crate::{check_node, check_size, GraphError, Result};

/// Path extraction configuration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathConfig {
    /// Maximum depth to explore; deeper vertices count as unreachable.
    pub max_depth: u32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            max_depth: u32::MAX - 1,
        }
    }
}

impl PathConfig {
    /// Create new path configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum depth.
    pub fn with_max_depth(mut self, max: u32) -> Self {
        self.max_depth = max;
        self
    }
}

/// BFS parent pointers from a single source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentMap {
    source: NodeId,
    /// `parents[v]` is v's predecessor, the source for itself, or `INVALID`.
    parents: Vec<NodeId>,
    depths: Vec<Distance>,
}

impl ParentMap {
    /// Vertex the traversal started from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Check if the traversal reached `node`.
    pub fn is_reached(&self, node: NodeId) -> Result<bool> {
        let i = check_node(node, self.parents.len())?;
        Ok(self.parents[i].is_valid())
    }

    /// Predecessor of `node` on its path from the source.
    ///
    /// `None` for the source itself and for unreached vertices.
    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>> {
        let i = check_node(node, self.parents.len())?;
        let parent = self.parents[i];
        Ok((parent.is_valid() && node != self.source).then_some(parent))
    }

    /// Hop count from the source, `Distance::INFINITY` if unreached.
    pub fn depth(&self, node: NodeId) -> Result<Distance> {
        let i = check_node(node, self.depths.len())?;
        Ok(self.depths[i])
    }

    /// Vertices from the source to `target`, both inclusive.
    pub fn path_to(&self, target: NodeId) -> Result<Vec<NodeId>> {
        if !self.is_reached(target)? {
            return Err(GraphError::Unreachable {
                from: self.source,
                target,
            });
        }

        let mut path = vec![target];
        let mut current = target;

        // Walk back to source
        while current != self.source {
            current = self.parents[current.index()];
            path.push(current);
        }

        path.reverse();
        Ok(path)
    }
}

/// BFS from `source` recording parent pointers.
pub fn bfs_parents<G: Graph + ?Sized>(graph: &G, source: NodeId) -> Result<ParentMap> {
    bfs_parents_with_config(graph, source, &PathConfig::default())
}

/// BFS parent pointers with configuration.
pub fn bfs_parents_with_config<G: Graph + ?Sized>(
    graph: &G,
    source: NodeId,
    config: &PathConfig,
) -> Result<ParentMap> {
    let n = graph.vertex_count();
    check_size(n)?;
    let src = check_node(source, n)?;

    let mut parents = vec![NodeId::INVALID; n];
    let mut depths = vec![Distance::INFINITY; n];
    let mut queue = VecDeque::new();

    // The source is its own parent
    parents[src] = source;
    depths[src] = Distance::ZERO;
    queue.push_back(source);

    let mut reached = 1usize;

    // BFS traversal
    while let Some(node) = queue.pop_front() {
        let current_depth = depths[node.index()];

        if current_depth.get() >= config.max_depth {
            continue;
        }

        for neighbor in graph.adjacent_vertices(node)? {
            let next = check_node(neighbor, n)?;
            if !parents[next].is_valid() {
                parents[next] = node;
                depths[next] = current_depth.increment();
                reached += 1;
                queue.push_back(neighbor);
            }
        }
    }

    trace!("BFS from {} reached {} of {} vertices", source, reached, n);

    Ok(ParentMap {
        source,
        parents,
        depths,
    })
}

/// Path from `source` to `target` in a tree, both inclusive.
///
/// # Errors
///
/// - [`GraphError::InvalidNodeId`] if either endpoint is out of range
/// - [`GraphError::Unreachable`] if no path joins them
///
/// # Example
///
/// ```
/// use spanforest::{get_path, AdjacencyListGraph, NodeId};
///
/// let tree = AdjacencyListGraph::from_edges(4, &[(0, 1), (1, 2), (1, 3)])?;
/// let path = get_path(&tree, NodeId(0), NodeId(3))?;
/// assert_eq!(path, vec![NodeId(0), NodeId(1), NodeId(3)]);
/// # Ok::<(), spanforest::GraphError>(())
/// ```
pub fn get_path<G: Graph + ?Sized>(
    tree: &G,
    source: NodeId,
    target: NodeId,
) -> Result<Vec<NodeId>> {
    check_node(target, tree.vertex_count())?;
    bfs_parents(tree, source)?.path_to(target)
}
