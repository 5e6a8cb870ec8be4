//! Vertex-level value types.
//!
//! - [`NodeId`]: dense vertex identifier in `0..vertex_count`
//! - [`Distance`]: hop count from a traversal source
//! - [`ComponentId`]: dense label of a disjoint set / tree in a forest

use std::fmt;

/// Vertex identifier.
///
/// Vertices are dense indices, so a `NodeId` doubles as an index into the
/// `parent`/`rank` arrays of a disjoint set and into graph adjacency tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Largest addressable vertex.
    pub const MAX: NodeId = NodeId(u32::MAX - 1);

    /// Sentinel for "no vertex" (e.g. the parent of an unreached vertex).
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Check if this is a valid node ID.
    pub const fn is_valid(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Position of this vertex in dense per-vertex arrays.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId(id as u32)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0 as usize
    }
}

/// Hop count from a BFS source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Distance(pub u32);

impl Distance {
    /// Infinity (unreachable).
    pub const INFINITY: Distance = Distance(u32::MAX);

    /// Zero distance (source node).
    pub const ZERO: Distance = Distance(0);

    /// Create a new distance.
    pub const fn new(d: u32) -> Self {
        Distance(d)
    }

    /// Check if node is reachable.
    pub const fn is_reachable(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Increment distance by 1, saturating at infinity.
    pub const fn increment(&self) -> Self {
        Distance(self.0.saturating_add(1))
    }
}

/// Dense label of a set in a partition (or a tree in a spanning forest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// Unassigned component.
    pub const UNASSIGNED: ComponentId = ComponentId(u32::MAX);

    /// Create a new component ID.
    pub const fn new(id: u32) -> Self {
        ComponentId(id)
    }

    /// Check if component is assigned.
    pub const fn is_assigned(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_basics() {
        let node = NodeId::new(42);
        assert_eq!(node.get(), 42);
        assert_eq!(node.index(), 42);
        assert!(node.is_valid());
        assert!(!NodeId::INVALID.is_valid());
        assert!(NodeId::MAX.is_valid());
    }

    #[test]
    fn test_node_id_conversions() {
        let node: NodeId = 100u32.into();
        assert_eq!(node.get(), 100);

        let idx: usize = node.into();
        assert_eq!(idx, 100);

        assert_eq!(NodeId::from(7usize), NodeId(7));
        assert_eq!(node.to_string(), "100");
    }

    #[test]
    fn test_distance_increment() {
        let d = Distance::new(5);
        assert_eq!(d.increment().get(), 6);
        assert!(d.is_reachable());

        // Saturates at infinity
        assert_eq!(Distance::INFINITY.increment(), Distance::INFINITY);
        assert!(!Distance::INFINITY.is_reachable());
    }

    #[test]
    fn test_component_id_basics() {
        let c = ComponentId::new(3);
        assert_eq!(c.get(), 3);
        assert!(c.is_assigned());
        assert!(!ComponentId::UNASSIGNED.is_assigned());
    }
}
