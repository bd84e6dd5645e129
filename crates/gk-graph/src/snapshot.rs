//! Flat node/edge snapshot used for persistence and undo.
//!
//! The record layout is the editor's file format:
//!
//! ```json
//! { "nodes": [ { "id": 0, "x": 10.0, "y": 20.0 } ],
//!   "edges": [ { "u": 0, "v": 1, "w": 2.5, "d": false } ] }
//! ```

use gk_core::{NodeId, Real};
use serde::{Deserialize, Serialize};

use crate::builder::GraphBuilder;
use crate::error::GraphResult;
use crate::graph::Graph;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NodeRecord {
    pub id: NodeId,
    pub x: Real,
    pub y: Real,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EdgeRecord {
    pub u: NodeId,
    pub v: NodeId,
    pub w: Real,
    /// Older files predate directed edges.
    #[serde(default)]
    pub d: bool,
}

impl Graph {
    /// Capture every node and edge.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            nodes: self
                .nodes
                .iter()
                .map(|n| NodeRecord {
                    id: n.id,
                    x: n.x,
                    y: n.y,
                })
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|e| EdgeRecord {
                    u: e.u,
                    v: e.v,
                    w: e.weight,
                    d: e.directed,
                })
                .collect(),
        }
    }

    /// Build a graph from a snapshot (nodes sorted by id, edges in file order).
    pub fn from_snapshot(snapshot: &Snapshot) -> GraphResult<Graph> {
        let mut builder = GraphBuilder::new();
        for n in &snapshot.nodes {
            builder.node(n.id, n.x, n.y);
        }
        for e in &snapshot.edges {
            builder.add_edge(e.u, e.v, e.w, e.d);
        }
        builder.build()
    }

    /// Replace the whole graph with the snapshot's contents.
    ///
    /// On error the current graph is left untouched.
    pub fn restore(&mut self, snapshot: &Snapshot) -> GraphResult<()> {
        let restored = Graph::from_snapshot(snapshot)?;
        tracing::debug!(
            nodes = restored.node_count(),
            edges = restored.edge_count(),
            "restored graph from snapshot"
        );
        *self = restored;
        Ok(())
    }
}
