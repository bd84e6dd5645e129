//! Batch graph builder.

use gk_core::{NodeId, Real};

use crate::error::GraphResult;
use crate::graph::{Edge, Graph, Node, upsert_edge};
use crate::indexing::IndexMap;
use crate::validate;

/// Builder for constructing a graph in one step.
///
/// Nodes may carry explicit (possibly sparse) ids, as when restoring a
/// snapshot. Nothing is validated until `build()`, which either produces a
/// complete `Graph` or fails without side effects.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_id: u32,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the next sequential id and return that id.
    pub fn add_node(&mut self, x: Real, y: Real) -> NodeId {
        let id = NodeId::from_index(self.next_id);
        self.node(id, x, y);
        id
    }

    /// Add a node with an explicit id.
    pub fn node(&mut self, id: NodeId, x: Real, y: Real) -> &mut Self {
        self.next_id = self.next_id.max(id.index() + 1);
        self.nodes.push(Node { id, x, y });
        self
    }

    /// Add an edge. Later edges update earlier ones they match.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: Real, directed: bool) -> &mut Self {
        self.edges.push(Edge {
            u,
            v,
            weight,
            directed,
        });
        self
    }

    /// Validate and build the graph.
    ///
    /// Nodes are sorted by id; edges are applied in insertion order with the
    /// same update-in-place rule as [`Graph::add_edge`].
    pub fn build(mut self) -> GraphResult<Graph> {
        self.nodes.sort_by_key(|n| n.id);
        validate::validate_nodes(&self.nodes)?;

        let index = IndexMap::from_nodes(&self.nodes);
        validate::validate_edges(&index, &self.edges)?;

        let mut edges = Vec::with_capacity(self.edges.len());
        for edge in self.edges {
            upsert_edge(&mut edges, edge);
        }

        Ok(Graph {
            nodes: self.nodes,
            edges,
            index,
            next_id: self.next_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        let n1 = builder.add_node(0.0, 0.0);
        let n2 = builder.add_node(5.0, 5.0);
        builder.add_edge(n1, n2, 2.0, false);

        let graph = builder.build().unwrap();
        assert_eq!(n1.index(), 0);
        assert_eq!(n2.index(), 1);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn builder_sorts_explicit_ids() {
        let mut builder = GraphBuilder::new();
        builder
            .node(NodeId::from_index(7), 7.0, 0.0)
            .node(NodeId::from_index(2), 2.0, 0.0);
        let mut graph = builder.build().unwrap();

        let ids: Vec<_> = graph.nodes().iter().map(|n| n.id.index()).collect();
        assert_eq!(ids, vec![2, 7]);
        // next id continues after the largest
        assert_eq!(graph.add_node(0.0, 0.0).unwrap(), NodeId::from_index(8));
    }

    #[test]
    fn builder_collapses_repeated_edges() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node(0.0, 0.0);
        let b = builder.add_node(1.0, 0.0);
        builder.add_edge(a, b, 1.0, false).add_edge(b, a, 9.0, false);

        let graph = builder.build().unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0].weight, 9.0);
    }

    #[test]
    fn builder_rejects_dangling_edge() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node(0.0, 0.0);
        builder.add_edge(a, NodeId::from_index(3), 1.0, true);
        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::InvalidNode {
                id: NodeId::from_index(3)
            }
        );
    }
}
