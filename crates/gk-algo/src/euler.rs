//! Eulerian trails and circuits: classification, Fleury and Hierholzer
//! construction, and walk verification.
//!
//! Walks consume edges, not neighbor entries: every edge carries a `used`
//! flag, so an undirected edge is spent once whichever way it is crossed.

use std::fmt;

use gk_core::NodeId;
use gk_graph::Graph;

use crate::error::{AlgoError, AlgoResult};
use crate::union_find::UnionFind;
use crate::view::{DenseEdge, DenseView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EulerKind {
    NotEulerian,
    /// An open trail exists.
    Path,
    /// A closed trail exists.
    Circuit,
}

impl fmt::Display for EulerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EulerKind::NotEulerian => write!(f, "not eulerian"),
            EulerKind::Path => write!(f, "eulerian path"),
            EulerKind::Circuit => write!(f, "eulerian circuit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerStatus {
    pub kind: EulerKind,
    /// Human-readable reason, suitable for an editor notice.
    pub description: String,
    /// Where a walk should begin; `None` when not eulerian.
    pub suggested_start: Option<NodeId>,
}

impl EulerStatus {
    fn none(description: impl Into<String>) -> Self {
        Self {
            kind: EulerKind::NotEulerian,
            description: description.into(),
            suggested_start: None,
        }
    }

    fn found(kind: EulerKind, description: impl Into<String>, start: NodeId) -> Self {
        Self {
            kind,
            description: description.into(),
            suggested_start: Some(start),
        }
    }

    pub fn is_eulerian(&self) -> bool {
        self.kind != EulerKind::NotEulerian
    }
}

/// Classify the graph as having an Euler circuit, an Euler path, or neither.
///
/// Connectivity ignores edge direction and only considers nodes with at
/// least one incident edge. If any edge is directed, in/out balance decides
/// (an undirected edge counts once in each direction at both endpoints);
/// otherwise the number of odd-degree nodes does.
pub fn euler_status(graph: &Graph) -> EulerStatus {
    let view = DenseView::of(graph);
    let n = view.len();
    if n == 0 {
        return EulerStatus::none("graph is empty");
    }

    let mut degree = vec![0usize; n];
    let mut components = UnionFind::new(n);
    for e in &view.edges {
        degree[e.u] += 1;
        degree[e.v] += 1;
        components.union(e.u, e.v);
    }
    let active: Vec<usize> = (0..n).filter(|&s| degree[s] > 0).collect();
    let Some(&first) = active.first() else {
        return EulerStatus::none("graph has no edges");
    };
    if active.iter().any(|&s| !components.connected(first, s)) {
        return EulerStatus::none("graph is not connected");
    }

    let status = if graph.has_directed_edges() {
        directed_status(&view, first)
    } else {
        undirected_status(&view, &degree, first)
    };
    tracing::debug!(kind = %status.kind, start = ?status.suggested_start, "euler status");
    status
}

fn directed_status(view: &DenseView<'_>, first: usize) -> EulerStatus {
    let mut balance = vec![0i64; view.len()];
    for e in view.edges.iter().filter(|e| e.directed) {
        balance[e.u] += 1;
        balance[e.v] -= 1;
    }

    if balance.iter().all(|&b| b == 0) {
        return EulerStatus::found(
            EulerKind::Circuit,
            "directed graph: Euler circuit",
            view.id(first),
        );
    }

    let starts: Vec<usize> = (0..view.len()).filter(|&s| balance[s] == 1).collect();
    let ends = balance.iter().filter(|&&b| b == -1).count();
    let others_balanced = balance.iter().all(|&b| (-1..=1).contains(&b));
    match starts.as_slice() {
        [start] if ends == 1 && others_balanced => EulerStatus::found(
            EulerKind::Path,
            "directed graph: Euler path",
            view.id(*start),
        ),
        _ => EulerStatus::none("directed graph: no Euler trail"),
    }
}

fn undirected_status(view: &DenseView<'_>, degree: &[usize], first: usize) -> EulerStatus {
    let odd: Vec<usize> = (0..view.len()).filter(|&s| degree[s] % 2 == 1).collect();
    match odd.as_slice() {
        [] => EulerStatus::found(
            EulerKind::Circuit,
            "undirected graph: Euler circuit",
            view.id(first),
        ),
        [start, _] => EulerStatus::found(
            EulerKind::Path,
            "undirected graph: Euler path",
            view.id(*start),
        ),
        _ => EulerStatus::none(format!(
            "undirected graph: no Euler trail ({} odd-degree nodes)",
            odd.len()
        )),
    }
}

/// Pick the node a walk should start from.
///
/// For a circuit any node with an incident edge works, so `requested` is
/// honoured when it has one; otherwise, and always for a path, the
/// suggested start is used.
pub fn choose_euler_start(
    graph: &Graph,
    status: &EulerStatus,
    requested: Option<NodeId>,
) -> AlgoResult<NodeId> {
    let suggested = status.suggested_start.ok_or(AlgoError::PreconditionViolated {
        what: "graph has no Euler trail",
    })?;

    match (status.kind, requested) {
        (EulerKind::Circuit, Some(id)) if graph.incident_edge_count(id) > 0 => Ok(id),
        (EulerKind::Circuit, Some(id)) => {
            tracing::warn!(requested = %id, start = %suggested, "requested start has no edges, using suggested start");
            Ok(suggested)
        }
        _ => Ok(suggested),
    }
}

/// Per-slot `(neighbor, edge index)` lists in walk direction.
fn walk_adjacency(view: &DenseView<'_>) -> Vec<Vec<(usize, usize)>> {
    let mut adj = vec![Vec::new(); view.len()];
    for (i, e) in view.edges.iter().enumerate() {
        adj[e.u].push((e.v, i));
        if !e.directed {
            adj[e.v].push((e.u, i));
        }
    }
    adj
}

/// Hierholzer's algorithm from `start`.
///
/// At every node the smallest-id neighbor over an unused edge is taken
/// first. The graph should have been classified eulerian with `start` as a
/// valid start; otherwise the result is a walk that misses edges.
pub fn hierholzer_walk(graph: &Graph, start: NodeId) -> AlgoResult<Vec<NodeId>> {
    let view = DenseView::of(graph);
    let s = view.slot(start)?;

    let mut adj = walk_adjacency(&view);
    for list in &mut adj {
        list.sort_unstable_by(|a, b| b.cmp(a));
    }
    let mut used = vec![false; view.edges.len()];

    let mut stack = vec![s];
    let mut walk = Vec::with_capacity(view.edges.len() + 1);
    while let Some(&top) = stack.last() {
        let mut next = None;
        while let Some((v, edge)) = adj[top].pop() {
            if !used[edge] {
                used[edge] = true;
                next = Some(v);
                break;
            }
        }
        match next {
            Some(v) => stack.push(v),
            None => {
                walk.push(top);
                stack.pop();
            }
        }
    }
    walk.reverse();

    tracing::debug!(start = %start, length = walk.len(), "hierholzer finished");
    Ok(view.ids(&walk))
}

/// Fleury's algorithm from `start`.
///
/// From the current node, take the first unused edge (smallest neighbor id)
/// after which every remaining unused edge is still reachable from the far
/// endpoint; if no edge qualifies, take the first. Same preconditions as
/// [`hierholzer_walk`].
pub fn fleury_walk(graph: &Graph, start: NodeId) -> AlgoResult<Vec<NodeId>> {
    let view = DenseView::of(graph);
    let s = view.slot(start)?;

    let mut adj = walk_adjacency(&view);
    for list in &mut adj {
        list.sort_unstable();
    }
    let mut used = vec![false; view.edges.len()];

    let mut current = s;
    let mut walk = vec![s];
    loop {
        let candidates: Vec<(usize, usize)> = adj[current]
            .iter()
            .copied()
            .filter(|&(_, edge)| !used[edge])
            .collect();
        let Some(&first) = candidates.first() else {
            break;
        };

        let chosen = if candidates.len() == 1 {
            first
        } else {
            candidates
                .iter()
                .copied()
                .find(|&(v, edge)| {
                    used[edge] = true;
                    let keeps_all = remaining_reachable(&view.edges, &adj, &used, v);
                    used[edge] = false;
                    keeps_all
                })
                .unwrap_or(first)
        };

        used[chosen.1] = true;
        walk.push(chosen.0);
        current = chosen.0;
    }

    tracing::debug!(start = %start, length = walk.len(), "fleury finished");
    Ok(view.ids(&walk))
}

/// True if every unused edge can still be entered from `from` by walking
/// unused edges.
fn remaining_reachable(
    edges: &[DenseEdge],
    adj: &[Vec<(usize, usize)>],
    used: &[bool],
    from: usize,
) -> bool {
    let mut seen = vec![false; adj.len()];
    let mut stack = vec![from];
    seen[from] = true;
    while let Some(u) = stack.pop() {
        for &(v, edge) in &adj[u] {
            if !used[edge] && !seen[v] {
                seen[v] = true;
                stack.push(v);
            }
        }
    }

    edges.iter().zip(used).all(|(e, &done)| {
        done || seen[e.u] || (!e.directed && seen[e.v])
    })
}

/// Check that `walk` crosses every edge exactly once, respecting direction.
///
/// A graph without edges accepts the empty walk and any single node.
pub fn is_euler_walk(graph: &Graph, walk: &[NodeId]) -> bool {
    let view = DenseView::of(graph);
    let Ok(slots) = walk.iter().map(|&id| view.slot(id)).collect::<AlgoResult<Vec<_>>>() else {
        return false;
    };
    if view.edges.is_empty() {
        return slots.len() <= 1;
    }
    if slots.len() != view.edges.len() + 1 {
        return false;
    }

    let mut used = vec![false; view.edges.len()];
    for pair in slots.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        // a directed a->b edge can only serve this step, so spend it first
        let directed = view
            .edges
            .iter()
            .position(|e| e.directed && e.u == a && e.v == b);
        let step = directed.filter(|&i| !used[i]).or_else(|| {
            view.edges.iter().enumerate().position(|(i, e)| {
                !used[i] && !e.directed && ((e.u == a && e.v == b) || (e.u == b && e.v == a))
            })
        });
        match step {
            Some(i) => used[i] = true,
            None => return false,
        }
    }
    true
}
