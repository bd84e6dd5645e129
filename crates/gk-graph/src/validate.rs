//! Structural validation for batch construction.

use std::collections::HashSet;

use gk_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Node, finite};
use crate::indexing::IndexMap;

/// Validate a node list: coordinates are finite and ids are unique.
pub(crate) fn validate_nodes(nodes: &[Node]) -> GraphResult<()> {
    let mut seen: HashSet<NodeId> = HashSet::with_capacity(nodes.len());
    for node in nodes {
        finite(node.x, "node x")?;
        finite(node.y, "node y")?;
        if !seen.insert(node.id) {
            return Err(GraphError::DuplicateNode { id: node.id });
        }
    }
    Ok(())
}

/// Validate edges against the node index.
pub(crate) fn validate_edges(index: &IndexMap, edges: &[Edge]) -> GraphResult<()> {
    for edge in edges {
        // Each endpoint must reference an existing node
        index.try_slot(edge.u)?;
        index.try_slot(edge.v)?;

        if edge.u == edge.v {
            return Err(GraphError::SelfLoop { id: edge.u });
        }
        finite(edge.weight, "edge weight")?;
    }
    Ok(())
}
