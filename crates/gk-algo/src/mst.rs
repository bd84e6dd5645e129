//! Minimum spanning trees (Prim, Kruskal) for undirected graphs.
//!
//! On a disconnected graph Prim spans only the component holding the first
//! node, while Kruskal returns a spanning forest.

use std::collections::BinaryHeap;

use gk_core::{NodeId, Real};
use gk_graph::Graph;

use crate::error::{AlgoError, AlgoResult};
use crate::union_find::UnionFind;
use crate::view::{DenseView, MinEntry};

/// An edge selected into a spanning tree, oriented as discovered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEdge {
    pub u: NodeId,
    pub v: NodeId,
    pub weight: Real,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpanningTree {
    pub edges: Vec<TreeEdge>,
    pub total_weight: Real,
}

impl SpanningTree {
    fn push(&mut self, u: NodeId, v: NodeId, weight: Real) {
        self.edges.push(TreeEdge { u, v, weight });
        self.total_weight += weight;
    }
}

fn ensure_undirected(graph: &Graph) -> AlgoResult<()> {
    if graph.has_directed_edges() {
        return Err(AlgoError::PreconditionViolated {
            what: "spanning trees require an undirected graph",
        });
    }
    Ok(())
}

/// Prim's algorithm grown from the first node in storage order.
pub fn prim(graph: &Graph) -> AlgoResult<SpanningTree> {
    ensure_undirected(graph)?;
    let view = DenseView::of(graph);
    let mut tree = SpanningTree::default();
    if view.len() == 0 {
        return Ok(tree);
    }

    let adj = view.neighbors(false);
    let mut in_tree = vec![false; view.len()];
    let mut reached = 1;
    in_tree[0] = true;

    // candidates keyed by weight, ties broken by (from, to)
    let mut heap = BinaryHeap::new();
    for &(v, w) in &adj[0] {
        heap.push(MinEntry { key: w, item: (0, v) });
    }

    while reached < view.len() {
        let Some(MinEntry { key: w, item: (u, v) }) = heap.pop() else {
            break;
        };
        if in_tree[v] {
            continue;
        }
        in_tree[v] = true;
        reached += 1;
        tree.push(view.id(u), view.id(v), w);
        for &(next, nw) in &adj[v] {
            if !in_tree[next] {
                heap.push(MinEntry {
                    key: nw,
                    item: (v, next),
                });
            }
        }
    }

    tracing::debug!(
        edges = tree.edges.len(),
        weight = tree.total_weight,
        "prim finished"
    );
    Ok(tree)
}

/// Kruskal's algorithm: edges by ascending weight (stable for ties),
/// accepted when they join two components.
pub fn kruskal(graph: &Graph) -> AlgoResult<SpanningTree> {
    ensure_undirected(graph)?;
    let view = DenseView::of(graph);

    let mut sorted = view.edges.clone();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut components = UnionFind::new(view.len());
    let mut tree = SpanningTree::default();
    for edge in sorted {
        if components.union(edge.u, edge.v) {
            tree.push(view.id(edge.u), view.id(edge.v), edge.weight);
        }
    }

    tracing::debug!(
        edges = tree.edges.len(),
        weight = tree.total_weight,
        "kruskal finished"
    );
    Ok(tree)
}
