//! Hamiltonian cycle and path search.
//!
//! Exhaustive backtracking, worst-case factorial in the node count, so the
//! graph size is bounded by [`SearchConfig::max_nodes`]. The search is
//! iterative: each path position keeps a cursor to the next candidate slot,
//! and the frame stack grows at most to `|V|` entries.
//!
//! Adjacency follows the undirected view: directed edges are only usable
//! forward.

use gk_core::NodeId;
use gk_graph::Graph;

use crate::config::SearchConfig;
use crate::error::AlgoResult;
use crate::view::DenseView;

/// Find a Hamiltonian cycle with the default [`SearchConfig`].
pub fn find_hamiltonian_cycle(graph: &Graph) -> AlgoResult<Option<Vec<NodeId>>> {
    find_hamiltonian_cycle_with(graph, &SearchConfig::default())
}

/// Find a Hamiltonian cycle.
///
/// The returned cycle repeats its first node at the end. Graphs with fewer
/// than three nodes have no cycle.
pub fn find_hamiltonian_cycle_with(
    graph: &Graph,
    config: &SearchConfig,
) -> AlgoResult<Option<Vec<NodeId>>> {
    let view = DenseView::of(graph);
    config.check_size(view.len())?;
    if view.len() < 3 {
        return Ok(None);
    }

    let found = search(&view, true, config)?.map(|mut slots| {
        slots.push(slots[0]);
        view.ids(&slots)
    });
    tracing::debug!(nodes = view.len(), found = found.is_some(), "hamiltonian cycle search finished");
    Ok(found)
}

/// Find a Hamiltonian path with the default [`SearchConfig`].
pub fn find_hamiltonian_path(graph: &Graph) -> AlgoResult<Option<Vec<NodeId>>> {
    find_hamiltonian_path_with(graph, &SearchConfig::default())
}

/// Find a Hamiltonian path (not necessarily closed).
pub fn find_hamiltonian_path_with(
    graph: &Graph,
    config: &SearchConfig,
) -> AlgoResult<Option<Vec<NodeId>>> {
    let view = DenseView::of(graph);
    config.check_size(view.len())?;
    if view.len() == 0 {
        return Ok(None);
    }

    let found = search(&view, false, config)?.map(|slots| view.ids(&slots));
    tracing::debug!(nodes = view.len(), found = found.is_some(), "hamiltonian path search finished");
    Ok(found)
}

/// Re-root a closed cycle (first node repeated at the end) at `start`.
///
/// Returns `None` if `cycle` is not closed or does not contain `start`.
pub fn rotate_cycle(cycle: &[NodeId], start: NodeId) -> Option<Vec<NodeId>> {
    let (last, body) = cycle.split_last()?;
    if body.first() != Some(last) {
        return None;
    }
    let pos = body.iter().position(|&id| id == start)?;

    let mut rotated = Vec::with_capacity(cycle.len());
    rotated.extend_from_slice(&body[pos..]);
    rotated.extend_from_slice(&body[..pos]);
    rotated.push(start);
    Some(rotated)
}

/// Try every start slot in order; at each position candidates are tried in
/// slot order.
fn search(view: &DenseView<'_>, closed: bool, config: &SearchConfig) -> AlgoResult<Option<Vec<usize>>> {
    let n = view.len();
    let mut adjacent = vec![vec![false; n]; n];
    for (u, list) in view.neighbors(false).into_iter().enumerate() {
        for (v, _) in list {
            adjacent[u][v] = true;
        }
    }

    let mut expansions: u64 = 0;
    for start in 0..n {
        config.check_cancelled()?;
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut path = vec![start];
        // cursors[k]: next candidate for the position after path[k]
        let mut cursors = vec![0usize];

        while let Some(&last) = path.last() {
            let complete = path.len() == n;
            if complete && (!closed || adjacent[last][start]) {
                tracing::trace!(expansions, "hamiltonian search succeeded");
                return Ok(Some(path));
            }

            let top = path.len() - 1;
            let next = if complete {
                None
            } else {
                (cursors[top]..n).find(|&v| adjacent[last][v] && !visited[v])
            };

            match next {
                Some(v) => {
                    config.check_cancelled()?;
                    expansions += 1;
                    cursors[top] = v + 1;
                    visited[v] = true;
                    path.push(v);
                    cursors.push(0);
                }
                None => {
                    visited[last] = false;
                    path.pop();
                    cursors.pop();
                }
            }
        }
    }

    tracing::trace!(expansions, "hamiltonian search exhausted");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CancelToken;
    use crate::error::AlgoError;

    fn id(i: u32) -> NodeId {
        NodeId::from_index(i)
    }

    fn ids(v: &[u32]) -> Vec<NodeId> {
        v.iter().map(|&i| id(i)).collect()
    }

    fn graph(n: usize, edges: &[(u32, u32, bool)]) -> Graph {
        let mut g = Graph::new();
        for _ in 0..n {
            g.add_node(0.0, 0.0).unwrap();
        }
        for &(u, v, d) in edges {
            g.add_edge(id(u), id(v), 1.0, d).unwrap();
        }
        g
    }

    fn petersen() -> Graph {
        let mut edges = Vec::new();
        for i in 0..5 {
            edges.push((i, (i + 1) % 5, false));
            edges.push((i, i + 5, false));
            edges.push((i + 5, (i + 2) % 5 + 5, false));
        }
        graph(10, &edges)
    }

    #[test]
    fn square_cycle() {
        let g = graph(4, &[(0, 1, false), (1, 2, false), (2, 3, false), (3, 0, false)]);
        assert_eq!(find_hamiltonian_cycle(&g).unwrap(), Some(ids(&[0, 1, 2, 3, 0])));
        assert_eq!(find_hamiltonian_path(&g).unwrap(), Some(ids(&[0, 1, 2, 3])));
    }

    #[test]
    fn line_has_path_but_no_cycle() {
        let g = graph(3, &[(1, 0, false), (1, 2, false)]);
        assert_eq!(find_hamiltonian_cycle(&g).unwrap(), None);
        assert_eq!(find_hamiltonian_path(&g).unwrap(), Some(ids(&[0, 1, 2])));
    }

    #[test]
    fn star_has_neither() {
        let g = graph(4, &[(0, 1, false), (0, 2, false), (0, 3, false)]);
        assert_eq!(find_hamiltonian_cycle(&g).unwrap(), None);
        assert_eq!(find_hamiltonian_path(&g).unwrap(), None);
    }

    #[test]
    fn petersen_graph_is_not_hamiltonian() {
        let g = petersen();
        assert_eq!(g.edge_count(), 15);
        assert_eq!(find_hamiltonian_cycle(&g).unwrap(), None);

        let path = find_hamiltonian_path(&g).unwrap().expect("petersen has a hamiltonian path");
        assert_eq!(path.len(), 10);
        for pair in path.windows(2) {
            assert!(g.edge(pair[0], pair[1]).is_some());
        }
    }

    #[test]
    fn directed_edges_are_one_way() {
        let g = graph(3, &[(0, 1, true), (1, 2, true), (2, 0, true)]);
        assert_eq!(find_hamiltonian_cycle(&g).unwrap(), Some(ids(&[0, 1, 2, 0])));

        let g = graph(3, &[(1, 0, true), (2, 1, true)]);
        assert_eq!(find_hamiltonian_path(&g).unwrap(), Some(ids(&[2, 1, 0])));
        assert_eq!(find_hamiltonian_cycle(&g).unwrap(), None);
    }

    #[test]
    fn tiny_graphs() {
        assert_eq!(find_hamiltonian_cycle(&Graph::new()).unwrap(), None);
        assert_eq!(find_hamiltonian_path(&Graph::new()).unwrap(), None);
        assert_eq!(find_hamiltonian_path(&graph(1, &[])).unwrap(), Some(ids(&[0])));
        let pair = graph(2, &[(0, 1, false)]);
        assert_eq!(find_hamiltonian_cycle(&pair).unwrap(), None);
        assert_eq!(find_hamiltonian_path(&pair).unwrap(), Some(ids(&[0, 1])));
    }

    #[test]
    fn size_limit_is_enforced() {
        let g = graph(21, &[]);
        assert_eq!(
            find_hamiltonian_cycle(&g),
            Err(AlgoError::SearchLimit { nodes: 21, limit: 20 })
        );
        let config = SearchConfig::default().with_max_nodes(None);
        assert_eq!(find_hamiltonian_path_with(&g, &config).unwrap(), None);
    }

    #[test]
    fn cancelled_search() {
        let token = CancelToken::new();
        token.cancel();
        let config = SearchConfig::default().with_cancel(token);
        assert_eq!(
            find_hamiltonian_cycle_with(&petersen(), &config),
            Err(AlgoError::Cancelled)
        );
    }

    #[test]
    fn rotation() {
        let cycle = ids(&[0, 1, 2, 3, 0]);
        assert_eq!(rotate_cycle(&cycle, id(2)), Some(ids(&[2, 3, 0, 1, 2])));
        assert_eq!(rotate_cycle(&cycle, id(0)), Some(cycle.clone()));
        assert_eq!(rotate_cycle(&cycle, id(7)), None);
        assert_eq!(rotate_cycle(&ids(&[0, 1, 2]), id(1)), None);
        assert_eq!(rotate_cycle(&[], id(0)), None);
    }
}
