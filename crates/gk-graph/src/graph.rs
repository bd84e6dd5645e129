//! Core graph data structures and the mutation API.

use std::collections::BTreeMap;

use gk_core::{NodeId, Real, ensure_finite};
use nalgebra::DMatrix;

use crate::error::{GraphError, GraphResult};
use crate::indexing::IndexMap;

/// A node of the graph.
///
/// `x`/`y` are layout coordinates owned by the editor; no algorithm reads them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub x: Real,
    pub y: Real,
}

/// A weighted edge, either directed (`u -> v` only) or undirected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
    pub weight: Real,
    pub directed: bool,
}

impl Edge {
    /// True if `id` is one of the endpoints.
    pub fn touches(&self, id: NodeId) -> bool {
        self.u == id || self.v == id
    }

    /// True if this edge is the one `add_edge(u, v, _, directed)` would update.
    pub fn matches(&self, u: NodeId, v: NodeId, directed: bool) -> bool {
        (self.u == u && self.v == v)
            || (!directed && !self.directed && self.u == v && self.v == u)
    }
}

/// Adjacency view: every node maps to its `(neighbor, weight)` entries.
pub type Adjacency = BTreeMap<NodeId, Vec<(NodeId, Real)>>;

/// The mutable graph owned by the editor.
///
/// Nodes are kept in id order. Ids are handed out sequentially and are never
/// reused or renumbered, so a graph built without removals has the dense ids
/// `0..n`. Edges reference nodes by id; [`IndexMap`] translates ids to the
/// contiguous slots algorithms work on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) index: IndexMap,
    /// Id handed to the next `add_node`.
    pub(crate) next_id: u32,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return all nodes, in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The id <-> slot map for the current node set.
    pub fn index(&self) -> &IndexMap {
        &self.index
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.index.contains(id)
    }

    /// Get a node by id (returns None if it doesn't exist).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index.slot(id).map(|slot| &self.nodes[slot])
    }

    /// Get the edge stored as `u -> v`, or an undirected edge stored as `v - u`.
    pub fn edge(&self, u: NodeId, v: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.matches(u, v, false))
    }

    /// True if any edge is directed.
    pub fn has_directed_edges(&self) -> bool {
        self.edges.iter().any(|e| e.directed)
    }

    /// True if any edge carries a negative weight.
    pub fn has_negative_weights(&self) -> bool {
        self.edges.iter().any(|e| e.weight < 0.0)
    }

    /// Number of edges with `id` as an endpoint.
    pub fn incident_edge_count(&self, id: NodeId) -> usize {
        self.edges.iter().filter(|e| e.touches(id)).count()
    }

    /// Append a node with the next sequential id.
    ///
    /// Fails with `IdsExhausted` once the id after `u32::MAX - 1` is needed.
    pub fn add_node(&mut self, x: Real, y: Real) -> GraphResult<NodeId> {
        let x = finite(x, "node x")?;
        let y = finite(y, "node y")?;
        let id = NodeId::from_index(self.next_id);
        if id.index() != self.next_id {
            return Err(GraphError::IdsExhausted);
        }
        self.next_id += 1;
        self.nodes.push(Node { id, x, y });
        self.index.push(id);
        tracing::trace!(node = %id, "added node");
        Ok(id)
    }

    /// Update a node's layout position.
    pub fn move_node(&mut self, id: NodeId, x: Real, y: Real) -> GraphResult<()> {
        let slot = self.index.try_slot(id)?;
        let x = finite(x, "node x")?;
        let y = finite(y, "node y")?;
        let node = &mut self.nodes[slot];
        node.x = x;
        node.y = y;
        Ok(())
    }

    /// Insert an edge, or update the existing one in place.
    ///
    /// An existing `u -> v` edge (directed or not) takes the new weight and
    /// direction. When both the new and an existing edge are undirected, the
    /// stored `v - u` edge also counts as a match and takes the new weight.
    pub fn add_edge(
        &mut self,
        u: NodeId,
        v: NodeId,
        weight: Real,
        directed: bool,
    ) -> GraphResult<()> {
        self.index.try_slot(u)?;
        self.index.try_slot(v)?;
        if u == v {
            return Err(GraphError::SelfLoop { id: u });
        }
        let weight = finite(weight, "edge weight")?;
        upsert_edge(&mut self.edges, Edge { u, v, weight, directed });
        Ok(())
    }

    /// Remove the edge `add_edge(u, v, _, directed)` would have updated.
    ///
    /// Returns whether an edge was removed.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId, directed: bool) -> GraphResult<bool> {
        self.index.try_slot(u)?;
        self.index.try_slot(v)?;
        let before = self.edges.len();
        self.edges.retain(|e| !e.matches(u, v, directed));
        Ok(self.edges.len() != before)
    }

    /// Remove a node and every edge incident to it.
    ///
    /// Remaining nodes keep their ids; only the slot map is rebuilt.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node> {
        let slot = self.index.try_slot(id)?;
        let node = self.nodes.remove(slot);
        self.edges.retain(|e| !e.touches(id));
        self.index = IndexMap::from_nodes(&self.nodes);
        tracing::trace!(node = %id, "removed node");
        Ok(node)
    }

    /// Remove all nodes and edges. Ids restart at 0.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.index = IndexMap::default();
        self.next_id = 0;
    }

    /// Adjacency lists keyed by node id.
    ///
    /// A directed edge contributes only `u -> v`. An undirected edge
    /// contributes both directions unless `directed_view` is set, in which
    /// case it contributes only `u -> v` as well.
    pub fn adjacency(&self, directed_view: bool) -> Adjacency {
        let mut adj: Adjacency = self.nodes.iter().map(|n| (n.id, Vec::new())).collect();
        for e in &self.edges {
            adj.entry(e.u).or_default().push((e.v, e.weight));
            if !directed_view && !e.directed {
                adj.entry(e.v).or_default().push((e.u, e.weight));
            }
        }
        adj
    }

    /// Weight matrix over node slots (see [`Graph::index`]); `0` means no edge.
    ///
    /// Undirected edges are written symmetrically.
    pub fn matrix(&self) -> DMatrix<Real> {
        let n = self.nodes.len();
        let mut mat = DMatrix::zeros(n, n);
        for e in &self.edges {
            let (Some(i), Some(j)) = (self.index.slot(e.u), self.index.slot(e.v)) else {
                continue;
            };
            mat[(i, j)] = e.weight;
            if !e.directed {
                mat[(j, i)] = e.weight;
            }
        }
        mat
    }
}

/// Insert `edge` or overwrite the edge it matches.
pub(crate) fn upsert_edge(edges: &mut Vec<Edge>, edge: Edge) {
    for e in edges.iter_mut() {
        if e.u == edge.u && e.v == edge.v {
            e.weight = edge.weight;
            e.directed = edge.directed;
            return;
        }
        if !edge.directed && !e.directed && e.u == edge.v && e.v == edge.u {
            e.weight = edge.weight;
            return;
        }
    }
    edges.push(edge);
}

pub(crate) fn finite(v: Real, what: &'static str) -> GraphResult<Real> {
    ensure_finite(v, what).map_err(|_| GraphError::NonFinite { what, value: v })
}
