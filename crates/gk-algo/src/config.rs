//! Search configuration and cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{AlgoError, AlgoResult};

/// Shared cancellation flag.
///
/// Clone it, hand one copy to the search and keep the other; calling
/// [`CancelToken::cancel`] makes the search return `AlgoError::Cancelled` at
/// its next check.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Configuration for long-running searches.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Largest graph the exhaustive Hamiltonian search accepts (None = unbounded).
    pub max_nodes: Option<usize>,
    /// Checked at every search-tree expansion and every relaxation pass.
    pub cancel: Option<CancelToken>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_nodes: Some(20),
            cancel: None,
        }
    }
}

impl SearchConfig {
    /// No size bound and no cancellation.
    pub fn unbounded() -> Self {
        Self {
            max_nodes: None,
            cancel: None,
        }
    }

    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub(crate) fn check_cancelled(&self) -> AlgoResult<()> {
        match &self.cancel {
            Some(token) if token.is_cancelled() => {
                tracing::warn!("search cancelled");
                Err(AlgoError::Cancelled)
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn check_size(&self, nodes: usize) -> AlgoResult<()> {
        match self.max_nodes {
            Some(limit) if nodes > limit => {
                tracing::warn!(nodes, limit, "graph exceeds search limit");
                Err(AlgoError::SearchLimit { nodes, limit })
            }
            _ => Ok(()),
        }
    }
}
