//! Breadth- and depth-first traversal with a deterministic tie-break.
//!
//! Both walks use the undirected adjacency view: undirected edges are
//! followed both ways, directed edges only forward. At every node the
//! unvisited neighbors are ordered by id, ascending unless
//! [`Order::Descending`] is requested.

use std::collections::VecDeque;

use gk_core::NodeId;
use gk_graph::Graph;

use crate::view::DenseView;

/// Neighbor visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    fn sort(self, slots: &mut [usize]) {
        match self {
            Order::Ascending => slots.sort_unstable(),
            Order::Descending => slots.sort_unstable_by(|a, b| b.cmp(a)),
        }
    }

    fn reversed(self) -> Self {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }
}

/// Breadth-first visiting order from `start`.
///
/// Returns an empty order if `start` is not in the graph.
pub fn bfs(graph: &Graph, start: NodeId, order: Order) -> Vec<NodeId> {
    let view = DenseView::of(graph);
    let Ok(s) = view.slot(start) else {
        tracing::debug!(start = %start, "bfs start not in graph");
        return Vec::new();
    };
    let adj = view.neighbors(false);

    let mut visited = vec![false; view.len()];
    let mut queue = VecDeque::from([s]);
    visited[s] = true;
    let mut visit_order = Vec::with_capacity(view.len());

    while let Some(u) = queue.pop_front() {
        visit_order.push(u);
        let mut next: Vec<usize> = adj[u]
            .iter()
            .map(|&(v, _)| v)
            .filter(|&v| !visited[v])
            .collect();
        order.sort(&mut next);
        for v in next {
            // the same neighbor can appear through two edges
            if !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }

    tracing::debug!(start = %start, visited = visit_order.len(), "bfs finished");
    view.ids(&visit_order)
}

/// Depth-first visiting order from `start`, driven by an explicit stack.
///
/// A stack pops in reverse push order, so neighbors are pushed in the
/// opposite of the requested order: for ascending visits the largest id is
/// pushed first and the smallest popped first.
///
/// Returns an empty order if `start` is not in the graph.
pub fn dfs(graph: &Graph, start: NodeId, order: Order) -> Vec<NodeId> {
    let view = DenseView::of(graph);
    let Ok(s) = view.slot(start) else {
        tracing::debug!(start = %start, "dfs start not in graph");
        return Vec::new();
    };
    let adj = view.neighbors(false);

    let mut visited = vec![false; view.len()];
    let mut stack = vec![s];
    let mut visit_order = Vec::with_capacity(view.len());

    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        visit_order.push(u);

        let mut next: Vec<usize> = adj[u]
            .iter()
            .map(|&(v, _)| v)
            .filter(|&v| !visited[v])
            .collect();
        order.reversed().sort(&mut next);
        stack.extend(next);
    }

    tracing::debug!(start = %start, visited = visit_order.len(), "dfs finished");
    view.ids(&visit_order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: u32) -> NodeId {
        NodeId::from_index(i)
    }

    fn ids(v: &[u32]) -> Vec<NodeId> {
        v.iter().map(|&i| id(i)).collect()
    }

    /// 0 - 1, 0 - 2, 1 - 3, 2 - 3, 3 - 4
    fn diamond_with_tail() -> Graph {
        let mut g = Graph::new();
        for _ in 0..5 {
            g.add_node(0.0, 0.0).unwrap();
        }
        for (u, v) in [(0, 2), (0, 1), (1, 3), (2, 3), (3, 4)] {
            g.add_edge(id(u), id(v), 1.0, false).unwrap();
        }
        g
    }

    #[test]
    fn bfs_ascending_and_descending() {
        let g = diamond_with_tail();
        assert_eq!(bfs(&g, id(0), Order::Ascending), ids(&[0, 1, 2, 3, 4]));
        assert_eq!(bfs(&g, id(0), Order::Descending), ids(&[0, 2, 1, 3, 4]));
    }

    #[test]
    fn dfs_ascending_and_descending() {
        let g = diamond_with_tail();
        assert_eq!(dfs(&g, id(0), Order::Ascending), ids(&[0, 1, 3, 2, 4]));
        assert_eq!(dfs(&g, id(0), Order::Descending), ids(&[0, 2, 3, 4, 1]));
    }

    #[test]
    fn traversal_follows_edge_direction() {
        let mut g = Graph::new();
        for _ in 0..3 {
            g.add_node(0.0, 0.0).unwrap();
        }
        g.add_edge(id(1), id(0), 1.0, true).unwrap();
        g.add_edge(id(1), id(2), 1.0, true).unwrap();

        assert_eq!(bfs(&g, id(0), Order::Ascending), ids(&[0]));
        assert_eq!(dfs(&g, id(1), Order::Ascending), ids(&[1, 0, 2]));
    }

    #[test]
    fn missing_start_yields_empty_order() {
        let g = diamond_with_tail();
        assert!(bfs(&g, id(42), Order::Ascending).is_empty());
        assert!(dfs(&g, id(42), Order::Descending).is_empty());
        assert!(bfs(&Graph::new(), id(0), Order::Ascending).is_empty());
    }
}
