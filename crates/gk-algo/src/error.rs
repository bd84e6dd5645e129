//! Error types for algorithm entry points.
//!
//! "Not found" outcomes (no path, no cycle, not bipartite) are ordinary
//! results, not errors.

use gk_core::NodeId;
use thiserror::Error;

pub type AlgoResult<T> = Result<T, AlgoError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    /// An argument names a node that is not in the graph.
    #[error("Invalid node: {id}")]
    InvalidNode { id: NodeId },

    /// The graph does not satisfy what the algorithm requires.
    #[error("Precondition violated: {what}")]
    PreconditionViolated { what: &'static str },

    /// The caller raised the cancellation flag.
    #[error("Search cancelled")]
    Cancelled,

    /// The graph is larger than the configured search bound.
    #[error("Search limit exceeded: {nodes} nodes (limit {limit})")]
    SearchLimit { nodes: usize, limit: usize },
}
