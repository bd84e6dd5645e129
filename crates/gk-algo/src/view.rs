//! Dense, slot-indexed snapshot of a graph.
//!
//! Algorithms copy what they need out of the [`Graph`] once, work on slots
//! `0..n`, and translate back to ids when reporting.

use std::cmp::Ordering;

use gk_core::{NodeId, Real};
use gk_graph::{Graph, IndexMap};

use crate::error::{AlgoError, AlgoResult};

/// An edge with both endpoints resolved to slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DenseEdge {
    pub u: usize,
    pub v: usize,
    pub weight: Real,
    pub directed: bool,
}

pub(crate) struct DenseView<'g> {
    index: &'g IndexMap,
    pub edges: Vec<DenseEdge>,
}

impl<'g> DenseView<'g> {
    pub fn of(graph: &'g Graph) -> Self {
        let index = graph.index();
        let edges = graph
            .edges()
            .iter()
            .filter_map(|e| {
                Some(DenseEdge {
                    u: index.slot(e.u)?,
                    v: index.slot(e.v)?,
                    weight: e.weight,
                    directed: e.directed,
                })
            })
            .collect();
        Self { index, edges }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn slot(&self, id: NodeId) -> AlgoResult<usize> {
        self.index.slot(id).ok_or(AlgoError::InvalidNode { id })
    }

    pub fn id(&self, slot: usize) -> NodeId {
        self.index.node_id(slot)
    }

    pub fn ids(&self, slots: &[usize]) -> Vec<NodeId> {
        slots.iter().map(|&s| self.id(s)).collect()
    }

    /// Per-slot `(neighbor, weight)` lists with [`Graph::adjacency`] semantics.
    pub fn neighbors(&self, directed_view: bool) -> Vec<Vec<(usize, Real)>> {
        let mut adj = vec![Vec::new(); self.len()];
        for e in &self.edges {
            adj[e.u].push((e.v, e.weight));
            if !directed_view && !e.directed {
                adj[e.v].push((e.u, e.weight));
            }
        }
        adj
    }

    /// Per-slot neighbor lists ignoring every edge direction.
    pub fn undirected_neighbors(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.len()];
        for e in &self.edges {
            adj[e.u].push(e.v);
            adj[e.v].push(e.u);
        }
        adj
    }
}

/// Min-heap entry for `BinaryHeap`: smallest key first, ties by item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MinEntry<T> {
    pub key: Real,
    pub item: T,
}

impl<T: Ord> Ord for MinEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.item.cmp(&self.item))
    }
}

impl<T: Ord> PartialOrd for MinEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> PartialEq for MinEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for MinEntry<T> {}
