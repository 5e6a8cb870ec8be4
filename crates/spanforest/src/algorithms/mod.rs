//! Graph algorithms.
//!
//! This module provides:
//! - [`disjoint_set`]: union-find data structure
//! - [`mst`]: Kruskal's minimum spanning tree
//! - [`path`]: BFS path extraction on trees

pub mod disjoint_set;
pub mod mst;
pub mod path;

pub use disjoint_set::{connected_components, DisjointSet};
pub use mst::{
    kruskal, minimum_spanning_tree, minimum_spanning_tree_into, MstConfig, SpanningForest,
    TieBreak,
};
pub use path::{bfs_parents, bfs_parents_with_config, get_path, ParentMap, PathConfig};
