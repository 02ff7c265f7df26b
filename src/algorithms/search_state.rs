use std::collections::HashMap;

use crate::common::error::SearchError;
use crate::common::traits::NodeKey;

/// Which side of the search a discovered node is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    /// Discovered, but its cost may still improve.
    Frontier,
    /// Finalized; its cost is optimal and it is never revisited.
    Closed,
}

/// Per-node bookkeeping for a single search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRecord<K> {
    /// cost to reach this node from the start (the g_score in A* terminology)
    cost_to_reach: Option<f64>,
    /// lower-bound estimate of the cost remaining to the target
    heuristic: f64,
    /// the node this one was last reached from on its cheapest known path
    predecessor: Option<K>,
    status: NodeStatus,
}

impl<K> SearchRecord<K> {
    /// Best known cost from the start, or `None` if the node has not been reached yet.
    pub fn cost_to_reach(&self) -> Option<f64> {
        self.cost_to_reach
    }

    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// `cost_to_reach + heuristic`, once the node has been reached.
    pub fn f_score(&self) -> Option<f64> {
        self.cost_to_reach.map(|g| g + self.heuristic)
    }

    pub fn predecessor(&self) -> Option<&K> {
        self.predecessor.as_ref()
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }
}

/// Mutable search data for one run, kept apart from the immutable graph.
///
/// Nodes without a record are undiscovered; every record is either in the
/// frontier or closed, and a closed record never returns to the frontier.
#[derive(Debug, Clone)]
pub struct SearchState<K: NodeKey> {
    records: HashMap<K, SearchRecord<K>>,
    frontier_len: usize,
}

impl<K: NodeKey> Default for SearchState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: NodeKey> SearchState<K> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            frontier_len: 0,
        }
    }

    pub fn record(&self, node: &K) -> Option<&SearchRecord<K>> {
        self.records.get(node)
    }

    pub fn is_discovered(&self, node: &K) -> bool {
        self.records.contains_key(node)
    }

    pub fn is_closed(&self, node: &K) -> bool {
        self.records
            .get(node)
            .is_some_and(|r| r.status == NodeStatus::Closed)
    }

    pub fn in_frontier(&self, node: &K) -> bool {
        self.records
            .get(node)
            .is_some_and(|r| r.status == NodeStatus::Frontier)
    }

    /// Number of discovered nodes not yet finalized.
    pub fn frontier_len(&self) -> usize {
        self.frontier_len
    }

    /// Number of finalized nodes.
    pub fn closed_len(&self) -> usize {
        self.records.len() - self.frontier_len
    }

    /// Number of nodes ever discovered.
    pub fn discovered_len(&self) -> usize {
        self.records.len()
    }

    /// Opens the start node with a zero cost and no predecessor.
    pub(crate) fn open_start(&mut self, start: K, heuristic: f64) {
        self.insert(start, Some(0.0), heuristic);
    }

    /// Adds an undiscovered node to the frontier without a cost.
    ///
    /// Does nothing if the node already has a record.
    pub(crate) fn discover(&mut self, node: K, heuristic: f64) {
        if !self.records.contains_key(&node) {
            self.insert(node, None, heuristic);
        }
    }

    /// Lowers `node`'s cost to `candidate` if that is cheaper than what is
    /// known, recording `predecessor` as the node it was reached from.
    ///
    /// Returns the node's new f-score when the record changed. Closed and
    /// undiscovered nodes are never changed.
    pub(crate) fn relax(&mut self, node: &K, predecessor: &K, candidate: f64) -> Option<f64> {
        let record = self.records.get_mut(node)?;
        if record.status == NodeStatus::Closed {
            return None;
        }

        match record.cost_to_reach {
            Some(current) if candidate >= current => None,
            _ => {
                record.cost_to_reach = Some(candidate);
                record.predecessor = Some(predecessor.clone());
                Some(candidate + record.heuristic)
            }
        }
    }

    /// Moves `node` from the frontier to the closed set.
    pub(crate) fn close(&mut self, node: &K) {
        if let Some(record) = self.records.get_mut(node) {
            if record.status == NodeStatus::Frontier {
                record.status = NodeStatus::Closed;
                self.frontier_len -= 1;
            }
        }
    }

    fn insert(&mut self, node: K, cost_to_reach: Option<f64>, heuristic: f64) {
        self.records.insert(
            node,
            SearchRecord {
                cost_to_reach,
                heuristic,
                predecessor: None,
                status: NodeStatus::Frontier,
            },
        );
        self.frontier_len += 1;
    }
}

/// Rebuilds the path ending at `end` by following predecessor links back to
/// the node that has none, then reversing.
///
/// `end` must be closed. Fails with [SearchError::NoPredecessorChain] if it is
/// not, or if the chain is broken or longer than the number of records.
pub fn get_path_from_predecessors<K: NodeKey>(
    state: &SearchState<K>,
    end: &K,
) -> Result<Vec<K>, SearchError<K>> {
    if !state.is_closed(end) {
        return Err(SearchError::NoPredecessorChain(end.clone()));
    }

    let mut path = vec![end.clone()];
    let mut current = end;

    while let Some(parent) = state
        .record(current)
        .ok_or_else(|| SearchError::NoPredecessorChain(current.clone()))?
        .predecessor()
    {
        if path.len() > state.discovered_len() {
            return Err(SearchError::NoPredecessorChain(end.clone()));
        }
        path.push(parent.clone());
        current = parent;
    }

    path.reverse();
    Ok(path)
}
