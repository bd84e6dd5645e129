//! Integration tests for gk-graph.

use gk_core::NodeId;
use gk_graph::{Graph, GraphBuilder, GraphError, Snapshot};
use proptest::prelude::*;

fn id(i: u32) -> NodeId {
    NodeId::from_index(i)
}

/// Sort edges into a canonical order so edge sets can be compared.
fn edge_set(graph: &Graph) -> Vec<(u32, u32, u64, bool)> {
    let mut set: Vec<_> = graph
        .edges()
        .iter()
        .map(|e| (e.u.index(), e.v.index(), e.weight.to_bits(), e.directed))
        .collect();
    set.sort();
    set
}

#[test]
fn build_square_graph() {
    let mut graph = Graph::new();
    let ids: Vec<_> = (0..4)
        .map(|i| graph.add_node(i as f64, 0.0).unwrap())
        .collect();
    for i in 0..4 {
        graph.add_edge(ids[i], ids[(i + 1) % 4], 1.0, false).unwrap();
    }

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);

    let adj = graph.adjacency(false);
    for neighbors in adj.values() {
        assert_eq!(neighbors.len(), 2);
    }
    assert!(graph.edge(id(0), id(3)).is_some());
    assert!(graph.edge(id(0), id(2)).is_none());
}

#[test]
fn snapshot_round_trip_after_removal() {
    let mut graph = Graph::new();
    for i in 0..5 {
        graph.add_node(i as f64, -(i as f64)).unwrap();
    }
    graph.add_edge(id(0), id(1), 1.0, false).unwrap();
    graph.add_edge(id(3), id(4), 2.0, true).unwrap();
    graph.add_edge(id(2), id(4), 0.5, false).unwrap();
    graph.remove_node(id(2)).unwrap();

    let json = serde_json::to_string(&graph.to_snapshot()).unwrap();
    let snapshot: Snapshot = serde_json::from_str(&json).unwrap();
    let restored = Graph::from_snapshot(&snapshot).unwrap();

    assert_eq!(restored, graph);
    let ids: Vec<_> = restored.nodes().iter().map(|n| n.id.index()).collect();
    assert_eq!(ids, vec![0, 1, 3, 4]);
    assert_eq!(restored.index().slot(id(4)), Some(3));
}

#[test]
fn restore_replaces_everything() {
    let mut graph = Graph::new();
    graph.add_node(0.0, 0.0).unwrap();
    graph.add_node(0.0, 0.0).unwrap();
    graph.add_edge(id(0), id(1), 1.0, false).unwrap();

    let mut other = Graph::new();
    other.add_node(9.0, 9.0).unwrap();
    graph.restore(&other.to_snapshot()).unwrap();

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.node(id(0)).unwrap().x, 9.0);
}

#[test]
fn duplicate_ids_in_snapshot_rejected() {
    let json = r#"{"nodes":[{"id":0,"x":0,"y":0},{"id":0,"x":1,"y":1}],"edges":[]}"#;
    let snapshot: Snapshot = serde_json::from_str(json).unwrap();
    assert_eq!(
        Graph::from_snapshot(&snapshot),
        Err(GraphError::DuplicateNode { id: id(0) })
    );
}

#[test]
fn builder_matches_incremental_construction() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_node(0.0, 0.0);
    let b = builder.add_node(1.0, 0.0);
    let c = builder.add_node(2.0, 0.0);
    builder.add_edge(a, b, 1.0, false).add_edge(b, c, 2.0, true);
    let built = builder.build().unwrap();

    let mut graph = Graph::new();
    let a = graph.add_node(0.0, 0.0).unwrap();
    let b = graph.add_node(1.0, 0.0).unwrap();
    let c = graph.add_node(2.0, 0.0).unwrap();
    graph.add_edge(a, b, 1.0, false).unwrap();
    graph.add_edge(b, c, 2.0, true).unwrap();

    assert_eq!(built, graph);
}

#[test]
fn large_graph_indexing() {
    let mut graph = Graph::new();
    for i in 0..100 {
        graph.add_node(i as f64, 0.0).unwrap();
    }
    for i in 0..99 {
        graph.add_edge(id(i), id(i + 1), 1.0, false).unwrap();
    }
    for i in (0..100).step_by(2) {
        graph.remove_node(id(i)).unwrap();
    }

    assert_eq!(graph.node_count(), 50);
    assert_eq!(graph.edge_count(), 0);
    for (slot, node) in graph.nodes().iter().enumerate() {
        assert_eq!(graph.index().slot(node.id), Some(slot));
        assert_eq!(node.id.index() % 2, 1);
    }
}

#[test]
fn far_snapshot_ids_load_without_dense_tables() {
    let json = r#"{"nodes":[{"id":4000000000,"x":0,"y":0},{"id":2,"x":1,"y":0}],
        "edges":[{"u":2,"v":4000000000,"w":1.5}]}"#;
    let snapshot: Snapshot = serde_json::from_str(json).unwrap();
    let graph = Graph::from_snapshot(&snapshot).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.index().slot(id(2)), Some(0));
    assert_eq!(graph.index().slot(id(4_000_000_000)), Some(1));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn add_node_after_last_id_is_exhausted() {
    let mut snapshot = Snapshot::default();
    snapshot.nodes.push(gk_graph::NodeRecord {
        id: id(u32::MAX - 1),
        x: 0.0,
        y: 0.0,
    });
    let mut graph = Graph::from_snapshot(&snapshot).unwrap();

    assert_eq!(graph.add_node(1.0, 1.0), Err(GraphError::IdsExhausted));
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.index().len(), 1);
}

fn arb_edges(n: u32) -> impl Strategy<Value = Vec<(u32, u32, f64, bool)>> {
    prop::collection::vec((0..n, 0..n, -50.0_f64..50.0, any::<bool>()), 0..20)
}

proptest! {
    #[test]
    fn add_edge_twice_is_idempotent(edges in arb_edges(6)) {
        let mut once = Graph::new();
        let mut twice = Graph::new();
        for _ in 0..6 {
            once.add_node(0.0, 0.0).unwrap();
            twice.add_node(0.0, 0.0).unwrap();
        }
        for &(u, v, w, d) in edges.iter().filter(|e| e.0 != e.1) {
            once.add_edge(id(u), id(v), w, d).unwrap();
            twice.add_edge(id(u), id(v), w, d).unwrap();
            twice.add_edge(id(u), id(v), w, d).unwrap();
        }
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn undirected_matrix_is_symmetric(edges in arb_edges(6)) {
        let mut graph = Graph::new();
        for _ in 0..6 {
            graph.add_node(0.0, 0.0).unwrap();
        }
        for &(u, v, w, _) in edges.iter().filter(|e| e.0 != e.1) {
            graph.add_edge(id(u), id(v), w, false).unwrap();
        }
        let m = graph.matrix();
        for e in graph.edges() {
            let (i, j) = (e.u.index() as usize, e.v.index() as usize);
            prop_assert_eq!(m[(i, j)], e.weight);
            prop_assert_eq!(m[(j, i)], e.weight);
        }
    }

    #[test]
    fn snapshot_round_trip(
        coords in prop::collection::vec((-1e3_f64..1e3, -1e3_f64..1e3), 1..8),
        edges in arb_edges(8),
    ) {
        let mut graph = Graph::new();
        for &(x, y) in &coords {
            graph.add_node(x, y).unwrap();
        }
        let n = coords.len() as u32;
        for &(u, v, w, d) in edges.iter().filter(|e| e.0 != e.1 && e.0 < n && e.1 < n) {
            graph.add_edge(id(u), id(v), w, d).unwrap();
        }

        let json = serde_json::to_string(&graph.to_snapshot()).unwrap();
        let snapshot: Snapshot = serde_json::from_str(&json).unwrap();
        let restored = Graph::from_snapshot(&snapshot).unwrap();

        prop_assert_eq!(restored.nodes(), graph.nodes());
        prop_assert_eq!(edge_set(&restored), edge_set(&graph));
    }
}
