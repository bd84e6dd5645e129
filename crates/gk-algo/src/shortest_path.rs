//! Single-pair shortest paths: Dijkstra (non-negative weights) and
//! Bellman-Ford (signed weights, negative-cycle detection).

use std::collections::BinaryHeap;

use gk_core::{NodeId, Real};
use gk_graph::Graph;

use crate::config::SearchConfig;
use crate::error::{AlgoError, AlgoResult};
use crate::view::{DenseView, MinEntry};

/// A shortest path and its length.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Nodes from start to end, inclusive.
    pub nodes: Vec<NodeId>,
    pub total_weight: Real,
}

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    Found(ShortestPath),
    /// The end node cannot be reached from the start node.
    Unreachable,
    /// A negative cycle is reachable from the start node, so no shortest
    /// path is defined.
    NegativeCycle,
}

impl PathOutcome {
    /// Path length; `+inf` when unreachable and `-inf` on a negative cycle.
    pub fn total_weight(&self) -> Real {
        match self {
            PathOutcome::Found(p) => p.total_weight,
            PathOutcome::Unreachable => Real::INFINITY,
            PathOutcome::NegativeCycle => Real::NEG_INFINITY,
        }
    }

    pub fn path(&self) -> Option<&[NodeId]> {
        match self {
            PathOutcome::Found(p) => Some(&p.nodes),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }
}

/// Dijkstra's algorithm over the undirected adjacency view.
///
/// Fails with `PreconditionViolated` if any edge weight is negative.
pub fn dijkstra(graph: &Graph, start: NodeId, end: NodeId) -> AlgoResult<PathOutcome> {
    let view = DenseView::of(graph);
    let s = view.slot(start)?;
    let e = view.slot(end)?;
    if graph.has_negative_weights() {
        return Err(AlgoError::PreconditionViolated {
            what: "Dijkstra requires non-negative edge weights",
        });
    }

    let adj = view.neighbors(false);
    let mut dist = vec![Real::INFINITY; view.len()];
    let mut parent: Vec<Option<usize>> = vec![None; view.len()];
    let mut heap = BinaryHeap::new();
    dist[s] = 0.0;
    heap.push(MinEntry { key: 0.0, item: s });

    while let Some(MinEntry { key: d, item: u }) = heap.pop() {
        if d > dist[u] {
            continue; // stale entry
        }
        if u == e {
            break;
        }
        for &(v, w) in &adj[u] {
            let candidate = dist[u] + w;
            if candidate < dist[v] {
                dist[v] = candidate;
                parent[v] = Some(u);
                heap.push(MinEntry {
                    key: candidate,
                    item: v,
                });
            }
        }
    }

    let outcome = finish(&view, &dist, &parent, e);
    tracing::debug!(start = %start, end = %end, weight = outcome.total_weight(), "dijkstra finished");
    Ok(outcome)
}

/// Bellman-Ford with the default [`SearchConfig`].
pub fn bellman_ford(graph: &Graph, start: NodeId, end: NodeId) -> AlgoResult<PathOutcome> {
    bellman_ford_with(graph, start, end, &SearchConfig::default())
}

/// Bellman-Ford: `|V| - 1` relaxation rounds over every edge (directed edges
/// forward only, undirected edges both ways), then one detection pass.
///
/// The cancellation flag in `config` is checked before every pass.
pub fn bellman_ford_with(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    config: &SearchConfig,
) -> AlgoResult<PathOutcome> {
    let view = DenseView::of(graph);
    let s = view.slot(start)?;
    let e = view.slot(end)?;
    let n = view.len();

    let mut dist = vec![Real::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    dist[s] = 0.0;

    for round in 0..n.saturating_sub(1) {
        config.check_cancelled()?;
        let mut changed = false;
        for edge in &view.edges {
            changed |= relax(&mut dist, &mut parent, edge.u, edge.v, edge.weight);
            if !edge.directed {
                changed |= relax(&mut dist, &mut parent, edge.v, edge.u, edge.weight);
            }
        }
        tracing::trace!(round, changed, "bellman-ford pass");
        if !changed {
            break;
        }
    }

    config.check_cancelled()?;
    let improvable = |a: usize, b: usize, w: Real| dist[a] != Real::INFINITY && dist[a] + w < dist[b];
    let negative_cycle = view.edges.iter().any(|edge| {
        improvable(edge.u, edge.v, edge.weight)
            || (!edge.directed && improvable(edge.v, edge.u, edge.weight))
    });
    if negative_cycle {
        tracing::debug!(start = %start, "bellman-ford found a negative cycle");
        return Ok(PathOutcome::NegativeCycle);
    }

    let outcome = finish(&view, &dist, &parent, e);
    tracing::debug!(start = %start, end = %end, weight = outcome.total_weight(), "bellman-ford finished");
    Ok(outcome)
}

fn relax(dist: &mut [Real], parent: &mut [Option<usize>], a: usize, b: usize, w: Real) -> bool {
    if dist[a] != Real::INFINITY && dist[a] + w < dist[b] {
        dist[b] = dist[a] + w;
        parent[b] = Some(a);
        true
    } else {
        false
    }
}

/// Walk the parent table back from `e` and package the outcome.
fn finish(view: &DenseView<'_>, dist: &[Real], parent: &[Option<usize>], e: usize) -> PathOutcome {
    if dist[e] == Real::INFINITY {
        return PathOutcome::Unreachable;
    }
    let mut slots = vec![e];
    let mut current = e;
    while let Some(p) = parent[current] {
        slots.push(p);
        current = p;
    }
    slots.reverse();
    PathOutcome::Found(ShortestPath {
        nodes: view.ids(&slots),
        total_weight: dist[e],
    })
}
