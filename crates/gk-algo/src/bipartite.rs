//! Two-colouring test.

use std::collections::VecDeque;

use gk_core::NodeId;
use gk_graph::Graph;

use crate::view::DenseView;

/// Colour class of a node in a bipartition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Colour number: 0 for `Left`, 1 for `Right`.
    pub fn color(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A valid two-colouring covering every node, in id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartition {
    sides: Vec<(NodeId, Side)>,
}

impl Bipartition {
    pub fn side(&self, id: NodeId) -> Option<Side> {
        self.sides
            .binary_search_by_key(&id, |&(n, _)| n)
            .ok()
            .map(|i| self.sides[i].1)
    }

    pub fn left(&self) -> Vec<NodeId> {
        self.members(Side::Left)
    }

    pub fn right(&self) -> Vec<NodeId> {
        self.members(Side::Right)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Side)> + '_ {
        self.sides.iter().copied()
    }

    fn members(&self, side: Side) -> Vec<NodeId> {
        self.sides
            .iter()
            .filter(|&&(_, s)| s == side)
            .map(|&(n, _)| n)
            .collect()
    }
}

/// Two-colour the graph, ignoring edge direction.
///
/// Every uncoloured node (in id order) seeds a BFS that starts on
/// [`Side::Left`]. Returns `None` on the first edge joining two nodes of the
/// same colour, and for the empty graph.
pub fn bipartite(graph: &Graph) -> Option<Bipartition> {
    let view = DenseView::of(graph);
    if view.len() == 0 {
        return None;
    }
    let adj = view.undirected_neighbors();

    let mut colour: Vec<Option<Side>> = vec![None; view.len()];
    for seed in 0..view.len() {
        if colour[seed].is_some() {
            continue;
        }
        colour[seed] = Some(Side::Left);
        let mut queue = VecDeque::from([seed]);
        while let Some(u) = queue.pop_front() {
            let here = colour[u]?;
            for &v in &adj[u] {
                match colour[v] {
                    None => {
                        colour[v] = Some(here.opposite());
                        queue.push_back(v);
                    }
                    Some(there) if there == here => {
                        tracing::debug!(u = %view.id(u), v = %view.id(v), "colour conflict");
                        return None;
                    }
                    Some(_) => {}
                }
            }
        }
    }

    let sides = colour
        .into_iter()
        .enumerate()
        .map(|(slot, side)| side.map(|s| (view.id(slot), s)))
        .collect::<Option<Vec<_>>>()?;
    tracing::debug!(nodes = sides.len(), "graph is bipartite");
    Some(Bipartition { sides })
}
