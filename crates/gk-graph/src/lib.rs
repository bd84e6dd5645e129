//! gk-graph: graph model layer for graphkit.
//!
//! Provides:
//! - Core graph data structures (Node, Edge, Graph) and the mutation API
//! - Adjacency and weight-matrix views
//! - Stable id <-> slot indexing for algorithms
//! - Batch builder and the flat snapshot format
//!
//! # Example
//!
//! ```
//! use gk_graph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(0.0, 0.0).unwrap();
//! let b = graph.add_node(10.0, 0.0).unwrap();
//! graph.add_edge(a, b, 2.0, false).unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.matrix()[(1, 0)], 2.0);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod snapshot;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Adjacency, Edge, Graph, Node};
pub use indexing::IndexMap;
pub use snapshot::{EdgeRecord, NodeRecord, Snapshot};
