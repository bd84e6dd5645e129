//! Stable indexing for algorithm integration.
//!
//! Provides a bidirectional mapping between stable node ids and contiguous
//! storage slots (0..N). Edges reference ids, so removing a node only
//! invalidates entries in this map.

use std::collections::HashMap;

use gk_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::Node;

/// Index map providing contiguous slots for graph nodes.
///
/// Algorithms map ids to slots to work on dense arrays/matrices, then map
/// slots back to ids when reporting results. Lookup is O(1) both ways.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexMap {
    /// Contiguous list of node ids (slot -> NodeId).
    node_ids: Vec<NodeId>,

    /// Reverse lookup: NodeId -> slot.
    /// Keyed by id so sparse snapshot ids cost nothing.
    node_to_slot: HashMap<NodeId, usize>,
}

impl IndexMap {
    /// Build an index map from nodes in storage order.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut map = Self::default();
        for node in nodes {
            map.push(node.id);
        }
        map
    }

    /// Register `id` at the next free slot.
    pub(crate) fn push(&mut self, id: NodeId) {
        self.node_to_slot.insert(id, self.node_ids.len());
        self.node_ids.push(id);
    }

    /// Number of nodes in the index.
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    /// True if no nodes are indexed.
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// True if `id` has a slot.
    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    /// Get the slot for a node id, if the node exists.
    pub fn slot(&self, id: NodeId) -> Option<usize> {
        self.node_to_slot.get(&id).copied()
    }

    /// Get the slot for a node id, failing with `InvalidNode`.
    pub fn try_slot(&self, id: NodeId) -> GraphResult<usize> {
        self.slot(id).ok_or(GraphError::InvalidNode { id })
    }

    /// Get the node id stored at a slot (panics if out of bounds).
    pub fn node_id(&self, slot: usize) -> NodeId {
        self.node_ids[slot]
    }

    /// All node ids in slot order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(i: u32) -> Node {
        Node {
            id: NodeId::from_index(i),
            x: 0.0,
            y: 0.0,
        }
    }

    #[test]
    fn index_map_contiguous() {
        let map = IndexMap::from_nodes(&[node(0), node(1), node(2)]);
        assert_eq!(map.len(), 3);
        for i in 0..3 {
            let id = NodeId::from_index(i);
            assert_eq!(map.slot(id), Some(i as usize));
            assert_eq!(map.node_id(i as usize), id);
        }
    }

    #[test]
    fn index_map_sparse_ids() {
        let map = IndexMap::from_nodes(&[node(0), node(4), node(9)]);
        assert_eq!(map.slot(NodeId::from_index(4)), Some(1));
        assert_eq!(map.slot(NodeId::from_index(9)), Some(2));
        assert_eq!(map.slot(NodeId::from_index(5)), None);
        assert_eq!(map.node_ids().len(), 3);
    }

    #[test]
    fn index_map_invalid_id() {
        let map = IndexMap::from_nodes(&[node(0)]);
        let bogus = NodeId::from_index(999);
        assert!(!map.contains(bogus));
        assert_eq!(
            map.try_slot(bogus),
            Err(GraphError::InvalidNode { id: bogus })
        );
    }

    #[test]
    fn index_map_far_ids() {
        let map = IndexMap::from_nodes(&[node(3), node(4_000_000_000), node(u32::MAX - 1)]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.slot(NodeId::from_index(4_000_000_000)), Some(1));
        assert_eq!(map.slot(NodeId::from_index(u32::MAX - 1)), Some(2));
        assert_eq!(map.slot(NodeId::from_index(4)), None);
    }

    #[test]
    fn empty_index() {
        let map = IndexMap::default();
        assert!(map.is_empty());
        assert_eq!(map.slot(NodeId::from_index(0)), None);
    }
}
