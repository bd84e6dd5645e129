//! Graph-specific error types.

use gk_core::{NodeId, Real};

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph mutation and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An operation referenced a node id that is not in the graph.
    InvalidNode { id: NodeId },

    /// An edge would connect a node to itself.
    SelfLoop { id: NodeId },

    /// A snapshot lists the same node id twice.
    DuplicateNode { id: NodeId },

    /// A coordinate or weight is NaN or infinite.
    NonFinite { what: &'static str, value: Real },

    /// Every representable node id has been handed out.
    IdsExhausted,
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidNode { id } => {
                write!(f, "Node {} does not exist", id)
            }
            GraphError::SelfLoop { id } => {
                write!(f, "Edge from node {} to itself is not allowed", id)
            }
            GraphError::DuplicateNode { id } => {
                write!(f, "Node {} appears more than once", id)
            }
            GraphError::NonFinite { what, value } => {
                write!(f, "Non-finite value for {}: {}", what, value)
            }
            GraphError::IdsExhausted => {
                write!(f, "No node ids left to assign")
            }
        }
    }
}

impl std::error::Error for GraphError {}
