//! Maximum flow (Edmonds-Karp) over edge weights as capacities.

use std::collections::VecDeque;

use gk_core::{NodeId, Real, Tolerances};
use gk_graph::Graph;
use nalgebra::DMatrix;

use crate::error::{AlgoError, AlgoResult};
use crate::view::DenseView;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxFlow {
    pub value: Real,
    pub source: NodeId,
    pub sink: NodeId,
}

/// Maximum flow from `source` to `sink`.
///
/// A directed edge adds its weight as capacity `u -> v`; an undirected edge
/// adds it both ways. Parallel edges between the same pair add up. Each
/// round pushes the bottleneck along a shortest augmenting path found by
/// BFS in the residual matrix.
pub fn max_flow(graph: &Graph, source: NodeId, sink: NodeId) -> AlgoResult<MaxFlow> {
    let view = DenseView::of(graph);
    let s = view.slot(source)?;
    let t = view.slot(sink)?;
    if s == t {
        return Err(AlgoError::PreconditionViolated {
            what: "source and sink must differ",
        });
    }
    if graph.has_negative_weights() {
        return Err(AlgoError::PreconditionViolated {
            what: "capacities must be non-negative",
        });
    }

    let n = view.len();
    let mut residual = DMatrix::<Real>::zeros(n, n);
    for e in &view.edges {
        residual[(e.u, e.v)] += e.weight;
        if !e.directed {
            residual[(e.v, e.u)] += e.weight;
        }
    }

    let mut value = 0.0;
    let mut rounds = 0usize;
    while let Some(parent) = augmenting_path(&residual, s, t) {
        let mut bottleneck = Real::INFINITY;
        let mut v = t;
        while v != s {
            let u = parent[v];
            bottleneck = bottleneck.min(residual[(u, v)]);
            v = u;
        }

        let mut v = t;
        while v != s {
            let u = parent[v];
            residual[(u, v)] -= bottleneck;
            residual[(v, u)] += bottleneck;
            v = u;
        }

        value += bottleneck;
        rounds += 1;
        tracing::trace!(round = rounds, bottleneck, "augmented");
    }

    tracing::debug!(source = %source, sink = %sink, value, rounds, "max flow finished");
    Ok(MaxFlow { value, source, sink })
}

/// BFS over residual capacity above the absolute tolerance. Returns the
/// parent of every slot on the path (indexed by slot) if `t` is reachable.
fn augmenting_path(residual: &DMatrix<Real>, s: usize, t: usize) -> Option<Vec<usize>> {
    let n = residual.nrows();
    let eps = Tolerances::default().abs;
    let mut parent = vec![usize::MAX; n];
    parent[s] = s;
    let mut queue = VecDeque::from([s]);

    while let Some(u) = queue.pop_front() {
        for v in 0..n {
            if parent[v] == usize::MAX && residual[(u, v)] > eps {
                parent[v] = u;
                if v == t {
                    return Some(parent);
                }
                queue.push_back(v);
            }
        }
    }
    None
}
