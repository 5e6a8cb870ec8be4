//! Graph data models.
//!
//! This module provides the capability traits and the containers behind them:
//! - [`Graph`], [`WeightedGraph`], [`GraphMut`], [`WeightedGraphMut`]: capability traits
//! - [`AdjacencyListGraph`]: unweighted neighbor lists (spanning-tree output)
//! - [`WeightedMatrixGraph`]: dense weight matrix
//! - [`CsrGraph`]: immutable Compressed Sparse Row storage
//! - [`NodeId`], [`Distance`], [`ComponentId`], [`WeightedEdge`]: value types

pub mod adjacency;
pub mod csr;
pub mod edge;
pub mod graph;
pub mod matrix;
pub mod node;

pub use adjacency::AdjacencyListGraph;
pub use csr::{CsrGraph, CsrGraphBuilder};
pub use edge::WeightedEdge;
pub use graph::{Graph, GraphMut, WeightedGraph, WeightedGraphMut};
pub use matrix::WeightedMatrixGraph;
pub use node::{ComponentId, Distance, NodeId};
