//! gk-algo: graph algorithms for graphkit.
//!
//! Every entry point reads a [`gk_graph::Graph`] without mutating it and
//! reports results in [`gk_core::NodeId`]s:
//! - traversal (BFS/DFS with deterministic neighbor order)
//! - shortest paths (Dijkstra, Bellman-Ford)
//! - minimum spanning trees (Prim, Kruskal)
//! - Eulerian classification and walks (Fleury, Hierholzer)
//! - Hamiltonian cycle/path search
//! - maximum flow and bipartite testing
//!
//! # Example
//!
//! ```
//! use gk_algo::dijkstra;
//! use gk_graph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(0.0, 0.0).unwrap();
//! let b = graph.add_node(1.0, 0.0).unwrap();
//! let c = graph.add_node(2.0, 0.0).unwrap();
//! graph.add_edge(a, b, 5.0, true).unwrap();
//! graph.add_edge(b, c, 3.0, true).unwrap();
//! graph.add_edge(a, c, 10.0, true).unwrap();
//!
//! let outcome = dijkstra(&graph, a, c).unwrap();
//! assert_eq!(outcome.path(), Some(&[a, b, c][..]));
//! assert_eq!(outcome.total_weight(), 8.0);
//! ```

pub mod bipartite;
pub mod config;
pub mod error;
pub mod euler;
pub mod flow;
pub mod hamilton;
pub mod mst;
pub mod shortest_path;
pub mod traversal;
pub mod union_find;
pub(crate) mod view;

pub use bipartite::{Bipartition, Side, bipartite};
pub use config::{CancelToken, SearchConfig};
pub use error::{AlgoError, AlgoResult};
pub use euler::{
    EulerKind, EulerStatus, choose_euler_start, euler_status, fleury_walk, hierholzer_walk,
    is_euler_walk,
};
pub use flow::{MaxFlow, max_flow};
pub use hamilton::{
    find_hamiltonian_cycle, find_hamiltonian_cycle_with, find_hamiltonian_path,
    find_hamiltonian_path_with, rotate_cycle,
};
pub use mst::{SpanningTree, TreeEdge, kruskal, prim};
pub use shortest_path::{PathOutcome, ShortestPath, bellman_ford, bellman_ford_with, dijkstra};
pub use traversal::{Order, bfs, dfs};
pub use union_find::UnionFind;
