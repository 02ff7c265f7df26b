use std::collections::{hash_map::Entry, HashMap};

use tracing::warn;

use crate::common::error::{GraphError, SearchError};
use crate::common::position::Position;
use crate::common::traits::NodeKey;

#[derive(Debug, Clone)]
struct NodeEntry<K> {
    position: Option<Position>,
    edges: Vec<(K, f64)>,
}

impl<K> NodeEntry<K> {
    fn new(position: Option<Position>) -> Self {
        Self {
            position,
            edges: Vec::new(),
        }
    }
}

/// An immutable, simple, directed graph with non-negative edge costs.
///
/// Nodes may carry a [Position], which heuristics use to estimate remaining
/// cost. A `Graph` is never mutated by a search, so one graph can be shared
/// by reference across any number of concurrent searches.
///
/// Build one with a [GraphBuilder]:
///
/// ```rust
/// use graph_astar::data_structures::graph::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_node("S", (0.0, 0.0)).unwrap();
/// builder.add_node("T", (1.0, 0.0)).unwrap();
/// builder.add_edge("S", "T", 1.0).unwrap();
/// let graph = builder.build();
///
/// assert_eq!(graph.edge_cost(&"S", &"T"), Some(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<K: NodeKey> {
    nodes: HashMap<K, NodeEntry<K>>,
    edge_count: usize,
}

impl<K: NodeKey> Graph<K> {
    /// Returns an empty builder.
    pub fn builder() -> GraphBuilder<K> {
        GraphBuilder::new()
    }

    /// Returns the outgoing edges of `node` as `(neighbor, cost)` pairs, in
    /// the order the edges were first added.
    ///
    /// Fails with [SearchError::UnknownNode] if `node` was never added.
    pub fn neighbors(
        &self,
        node: &K,
    ) -> Result<impl Iterator<Item = (&K, f64)> + '_, SearchError<K>> {
        let entry = self.entry(node)?;
        Ok(entry.edges.iter().map(|(k, cost)| (k, *cost)))
    }

    /// Returns the position of `node`, or `None` if it was only ever
    /// referenced by an edge and never given coordinates.
    ///
    /// Fails with [SearchError::UnknownNode] if `node` was never added.
    pub fn position(&self, node: &K) -> Result<Option<Position>, SearchError<K>> {
        Ok(self.entry(node)?.position)
    }

    /// Returns the cost of the edge `from -> to`, if it exists.
    pub fn edge_cost(&self, from: &K, to: &K) -> Option<f64> {
        self.nodes
            .get(from)?
            .edges
            .iter()
            .find(|(k, _)| k == to)
            .map(|(_, cost)| *cost)
    }

    pub fn contains(&self, node: &K) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates over all node ids in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> + '_ {
        self.nodes.keys()
    }

    fn entry(&self, node: &K) -> Result<&NodeEntry<K>, SearchError<K>> {
        self.nodes
            .get(node)
            .ok_or_else(|| SearchError::UnknownNode(node.clone()))
    }
}

/// One-time bulk loader for a [Graph].
///
/// Endpoints named by [add_edge](GraphBuilder::add_edge) that were not
/// declared with [add_node](GraphBuilder::add_node) are registered without a
/// position; declaring them afterwards gives them one. Adding the same node or
/// the same ordered edge twice replaces the earlier position or cost.
#[derive(Debug, Clone)]
pub struct GraphBuilder<K: NodeKey> {
    nodes: HashMap<K, NodeEntry<K>>,
    edge_count: usize,
}

impl<K: NodeKey> Default for GraphBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: NodeKey> GraphBuilder<K> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Adds a node at `position`, or moves an existing node there.
    ///
    /// Returns an error if either coordinate is NaN or infinite.
    pub fn add_node(
        &mut self,
        node: K,
        position: impl Into<Position>,
    ) -> Result<&mut Self, GraphError<K>> {
        let position = position.into();
        if !position.is_finite() {
            return Err(GraphError::InvalidPosition {
                node,
                x: position.x,
                y: position.y,
            });
        }

        match self.nodes.entry(node) {
            Entry::Occupied(mut o) => o.get_mut().position = Some(position),
            Entry::Vacant(v) => {
                v.insert(NodeEntry::new(Some(position)));
            }
        }

        Ok(self)
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// Returns an error if `cost` is negative, NaN or infinite.
    pub fn add_edge(&mut self, from: K, to: K, cost: f64) -> Result<&mut Self, GraphError<K>> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidCost { from, to, cost });
        }

        self.nodes
            .entry(to.clone())
            .or_insert_with(|| NodeEntry::new(None));

        let edges = &mut self
            .nodes
            .entry(from.clone())
            .or_insert_with(|| NodeEntry::new(None))
            .edges;
        if let Some(existing) = edges.iter_mut().find(|(k, _)| *k == to) {
            warn!(
                from = ?from,
                to = ?to,
                old_cost = existing.1,
                new_cost = cost,
                "replacing duplicate edge"
            );
            existing.1 = cost;
        } else {
            edges.push((to, cost));
            self.edge_count += 1;
        }

        Ok(self)
    }

    pub fn build(self) -> Graph<K> {
        Graph {
            nodes: self.nodes,
            edge_count: self.edge_count,
        }
    }
}
