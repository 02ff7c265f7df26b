// https://en.wikipedia.org/wiki/A*_search_algorithm

// Sample code pulled (and modified) from: https://doc.rust-lang.org/nightly/std/collections/binary_heap/index.html#examples

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, debug_span, trace};

use crate::common::error::{SearchError, SearchResult};
use crate::common::traits::{Heuristic, NodeKey};
use crate::data_structures::graph::Graph;
use crate::utils::cancel::CancelToken;
use crate::utils::heuristics::heuristic_euclidean;

use super::search_state::{get_path_from_predecessors, SearchState};

/// Where a search is in its lifecycle.
///
/// Every state except `Running` is terminal. Only `Found` carries a path;
/// none of the terminal states is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    /// The target was selected from the frontier.
    Found,
    /// The frontier ran dry without reaching the target.
    Unreachable,
    /// The [CancelToken] was triggered.
    Cancelled,
    /// The configured expansion budget ran out.
    OpsExhausted,
}

impl SearchStatus {
    pub fn is_terminal(self) -> bool {
        self != SearchStatus::Running
    }
}

/// Tunables for a single search run.
///
/// # Examples
/// ```rust
/// use graph_astar::algorithms::astar::SearchOptions;
/// use graph_astar::utils::cancel::CancelToken;
///
/// let token = CancelToken::new();
/// let options = SearchOptions::default()
///     .max_ops(10_000)
///     .cancel(token.clone());
///
/// assert_eq!(options.get_max_ops(), Some(10_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    max_ops: Option<u32>,
    cancel: Option<CancelToken>,
}

impl SearchOptions {
    /// Caps the number of node expansions. Unlimited by default.
    #[must_use]
    pub fn max_ops(mut self, max_ops: u32) -> Self {
        self.max_ops = Some(max_ops);
        self
    }

    /// Checks `token` once per iteration and stops when it is cancelled.
    #[must_use]
    pub fn cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn get_max_ops(&self) -> Option<u32> {
        self.max_ops
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

#[derive(Debug, Clone)]
pub struct AStarSearchResults<K>
where
    K: NodeKey,
{
    status: SearchStatus,
    ops_used: u32,
    cost: Option<f64>,
    frontier_len: usize,
    path: Vec<K>,
}

impl<K: NodeKey> AStarSearchResults<K> {
    /// The terminal state the search stopped in
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Whether a path to the target was found
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Whether the search stopped without a path
    pub fn incomplete(&self) -> bool {
        !self.is_found()
    }

    /// The number of expand node operations used
    pub fn ops(&self) -> u32 {
        self.ops_used
    }

    /// The total edge cost of the result path, if one was found
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    /// The number of nodes still in the frontier when the search stopped
    pub fn frontier_len(&self) -> usize {
        self.frontier_len
    }

    /// A shortest path from the start node to the target node, inclusive of
    /// both; empty unless the target was found
    pub fn path(&self) -> &[K] {
        &self.path
    }

    pub fn into_path(self) -> Vec<K> {
        self.path
    }
}

#[derive(Clone, Debug)]
struct State<K> {
    /// f_score is the sum of the known cost to reach this node (the g_score) plus the estimated cost remaining from this node in the best possible case
    f_score: f64,
    /// cost to reach this node when the entry was pushed
    g_score: f64,
    node: K,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl<K: Ord> Ord for State<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that we flip the ordering on costs.
        // Ties go to the lowest node id, which keeps the expansion order
        // deterministic regardless of hashing.
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.node.cmp(&self.node))
    }
}

// `PartialOrd` needs to be implemented as well.
impl<K: Ord> PartialOrd for State<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> PartialEq for State<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for State<K> {}

/// A single A* run from `start` to `target` over a borrowed [Graph].
///
/// The search is a small state machine: [step](AStarSearch::step) performs one
/// iteration (select the frontier node with the lowest f-score, stop if it is
/// the target, otherwise relax its neighbors and close it) and reports the
/// resulting [SearchStatus]. [run](AStarSearch::run) steps until a terminal
/// state is reached.
///
/// Ties between frontier nodes with equal f-scores are broken by choosing the
/// lowest node id according to its `Ord` implementation.
///
/// The frontier is a binary heap. A relaxed node is pushed again with its new
/// score, and entries for closed nodes or superseded costs are discarded when
/// they surface.
///
/// # Example
/// ```rust
/// use graph_astar::algorithms::astar::{AStarSearch, SearchOptions, SearchStatus};
/// use graph_astar::data_structures::graph::GraphBuilder;
/// use graph_astar::utils::heuristics::heuristic_euclidean;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_node("S", (0.0, 0.0)).unwrap();
/// builder.add_node("M", (1.0, 0.0)).unwrap();
/// builder.add_node("T", (2.0, 0.0)).unwrap();
/// builder.add_edge("S", "M", 1.0).unwrap();
/// builder.add_edge("M", "T", 1.0).unwrap();
/// builder.add_edge("S", "T", 5.0).unwrap();
/// let graph = builder.build();
///
/// let mut search = AStarSearch::new(
///     &graph,
///     "S",
///     "T",
///     heuristic_euclidean(&graph),
///     &SearchOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(search.step().unwrap(), SearchStatus::Running);
///
/// let results = search.run().unwrap();
/// assert!(results.is_found());
/// assert_eq!(results.path(), &["S", "M", "T"]);
/// assert_eq!(results.cost(), Some(2.0));
/// ```
pub struct AStarSearch<'g, K, H>
where
    K: NodeKey,
{
    graph: &'g Graph<K>,
    heuristic: H,
    start: K,
    target: K,
    options: SearchOptions,
    heap: BinaryHeap<State<K>>,
    state: SearchState<K>,
    status: SearchStatus,
    ops_used: u32,
    cost: Option<f64>,
    path: Vec<K>,
}

impl<'g, K, H> AStarSearch<'g, K, H>
where
    K: NodeKey,
    H: Heuristic<K>,
{
    /// Prepares a search with only `start` in the frontier.
    ///
    /// Fails with [SearchError::UnknownNode] if `start` or `target` is not in
    /// the graph, and with any error the heuristic raises for `start`.
    pub fn new(
        graph: &'g Graph<K>,
        start: K,
        target: K,
        heuristic: H,
        options: &SearchOptions,
    ) -> SearchResult<Self, K> {
        for node in [&start, &target] {
            if !graph.contains(node) {
                return Err(SearchError::UnknownNode(node.clone()));
            }
        }

        let h_start = checked_estimate(&heuristic, &start, &target)?;

        let mut state = SearchState::new();
        state.open_start(start.clone(), h_start);

        let mut heap = BinaryHeap::new();
        heap.push(State {
            f_score: h_start,
            g_score: 0.0,
            node: start.clone(),
        });

        Ok(Self {
            graph,
            heuristic,
            start,
            target,
            options: options.clone(),
            heap,
            state,
            status: SearchStatus::Running,
            ops_used: 0,
            cost: None,
            path: Vec::new(),
        })
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// The per-node records gathered so far.
    pub fn state(&self) -> &SearchState<K> {
        &self.state
    }

    /// The number of nodes expanded so far.
    pub fn ops(&self) -> u32 {
        self.ops_used
    }

    /// Performs one iteration and returns the resulting status.
    ///
    /// Calling this after a terminal state has been reached does nothing and
    /// returns that state again.
    pub fn step(&mut self) -> SearchResult<SearchStatus, K> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        if self.options.is_cancelled() {
            debug!(ops = self.ops_used, "search cancelled");
            self.status = SearchStatus::Cancelled;
            return Ok(self.status);
        }

        // Examine the frontier with lower f-score nodes first (min-heap)
        while let Some(entry) = self.heap.pop() {
            if self.is_stale(&entry) {
                trace!(node = ?entry.node, g_score = entry.g_score, "discarding stale frontier entry");
                continue;
            }

            // We found the target, finalize it and rebuild the path
            if entry.node == self.target {
                self.state.close(&entry.node);
                self.path = get_path_from_predecessors(&self.state, &self.target)?;
                self.cost = Some(entry.g_score);
                self.status = SearchStatus::Found;
                debug!(
                    cost = entry.g_score,
                    ops = self.ops_used,
                    path = ?self.path,
                    "found path"
                );
                return Ok(self.status);
            }

            // Stop searching if we've run out of ops we're allowed to perform
            if self
                .options
                .max_ops
                .is_some_and(|max_ops| self.ops_used >= max_ops)
            {
                self.heap.push(entry);
                self.status = SearchStatus::OpsExhausted;
                debug!(ops = self.ops_used, "expansion budget exhausted");
                return Ok(self.status);
            }

            self.expand(entry)?;
            self.ops_used += 1;
            return Ok(self.status);
        }

        // No more frontier nodes could lead to the target
        self.status = SearchStatus::Unreachable;
        debug!(ops = self.ops_used, "there is no route to the target");
        Ok(self.status)
    }

    /// Steps until a terminal state is reached and returns the results.
    pub fn run(mut self) -> SearchResult<AStarSearchResults<K>, K> {
        let span = debug_span!("astar", start = ?self.start, target = ?self.target);
        let _enter = span.enter();

        while !self.step()?.is_terminal() {}

        Ok(self.into_results())
    }

    /// Consumes the search and returns its results in whatever state it is in.
    pub fn into_results(self) -> AStarSearchResults<K> {
        AStarSearchResults {
            status: self.status,
            ops_used: self.ops_used,
            cost: self.cost,
            frontier_len: self.state.frontier_len(),
            path: self.path,
        }
    }

    fn is_stale(&self, entry: &State<K>) -> bool {
        match self.state.record(&entry.node) {
            Some(record) if !self.state.is_closed(&entry.node) => record
                .cost_to_reach()
                .map_or(true, |current| entry.g_score > current),
            _ => true,
        }
    }

    fn expand(&mut self, entry: State<K>) -> SearchResult<(), K> {
        let State {
            node: best,
            g_score,
            ..
        } = entry;
        let graph = self.graph;

        trace!(node = ?best, g_score, "expanding node");

        // For each node we can reach, see if we can find a way with
        // a lower cost going through this node
        for (neighbor, edge_cost) in graph.neighbors(&best)? {
            // Already finalized, and its cost can't improve with non-negative edges
            if self.state.is_closed(neighbor) {
                continue;
            }

            if !self.state.is_discovered(neighbor) {
                let h = checked_estimate(&self.heuristic, neighbor, &self.target)?;
                self.state.discover(neighbor.clone(), h);
                debug!(node = ?neighbor, heuristic = h, "new neighbor");
            }

            let candidate = g_score + edge_cost;

            // Relaxation, we have now found a better way
            if let Some(f_score) = self.state.relax(neighbor, &best, candidate) {
                debug!(node = ?neighbor, via = ?best, cost = candidate, "with a better path");
                self.heap.push(State {
                    f_score,
                    g_score: candidate,
                    node: neighbor.clone(),
                });
            } else {
                trace!(node = ?neighbor, "current path is already better");
            }
        }

        self.state.close(&best);
        Ok(())
    }
}

fn checked_estimate<K, H>(heuristic: &H, node: &K, target: &K) -> SearchResult<f64, K>
where
    K: NodeKey,
    H: Heuristic<K>,
{
    let estimate = heuristic.estimate(node, target)?;
    if !estimate.is_finite() || estimate < 0.0 {
        return Err(SearchError::InvalidEstimate {
            node: node.clone(),
            estimate,
        });
    }
    Ok(estimate)
}

/// Calculates a shortest path from `start` to `target` using the A* algorithm
/// with a caller-provided heuristic.
///
/// The heuristic must never overestimate the remaining cost, or the returned
/// path may not be optimal. An unreachable target is reported through
/// [SearchStatus::Unreachable], not as an error.
///
/// # Example
/// ```rust
/// use graph_astar::algorithms::astar::{shortest_path_generic, SearchOptions, SearchStatus};
/// use graph_astar::common::error::SearchError;
/// use graph_astar::data_structures::graph::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_edge(1u32, 2, 4.0).unwrap();
/// builder.add_edge(2, 3, 1.0).unwrap();
/// let graph = builder.build();
///
/// let no_estimate = |_: &u32, _: &u32| -> Result<f64, SearchError<u32>> { Ok(0.0) };
/// let search_results =
///     shortest_path_generic(&graph, 1, 3, no_estimate, &SearchOptions::default()).unwrap();
///
/// if search_results.is_found() {
///     println!("Path: {:?}", search_results.path());
/// } else {
///     println!("Could not find A* shortest path.");
/// }
/// assert_eq!(search_results.cost(), Some(5.0));
/// ```
///
/// Reference: https://en.wikipedia.org/wiki/A*_search_algorithm
pub fn shortest_path_generic<K, H>(
    graph: &Graph<K>,
    start: K,
    target: K,
    heuristic: H,
    options: &SearchOptions,
) -> SearchResult<AStarSearchResults<K>, K>
where
    K: NodeKey,
    H: Heuristic<K>,
{
    AStarSearch::new(graph, start, target, heuristic, options)?.run()
}

/// Calculates a shortest path from `start` to `target` using the straight-line
/// distance between node positions as the heuristic.
///
/// Every node the search discovers must have a position. Edge costs must be at
/// least the straight-line distance between their endpoints for the result to
/// be optimal.
pub fn shortest_path<K: NodeKey>(
    graph: &Graph<K>,
    start: K,
    target: K,
) -> SearchResult<AStarSearchResults<K>, K> {
    shortest_path_generic(
        graph,
        start,
        target,
        heuristic_euclidean(graph),
        &SearchOptions::default(),
    )
}
