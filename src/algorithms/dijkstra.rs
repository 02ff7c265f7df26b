// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm

use crate::common::error::SearchResult;
use crate::common::traits::NodeKey;
use crate::data_structures::graph::Graph;
use crate::utils::heuristics::heuristic_zero;

use super::astar::{shortest_path_generic as astar_shortest_path, AStarSearchResults, SearchOptions};

/// Calculates a shortest path from `start` to `target` using Dijkstra's Algorithm.
///
/// This is the A* search with an estimate of zero everywhere, so nodes are
/// expanded strictly in order of their cost from `start`. Node positions are
/// never consulted, which makes this the right choice for graphs without
/// coordinates or with edge costs unrelated to distance.
///
/// # Example
/// ```rust
/// use graph_astar::algorithms::astar::SearchOptions;
/// use graph_astar::data_structures::graph::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_edge("home", "shop", 4.0).unwrap();
/// builder.add_edge("home", "park", 1.0).unwrap();
/// builder.add_edge("park", "shop", 2.0).unwrap();
/// let graph = builder.build();
///
/// let search_results = graph_astar::algorithms::dijkstra::shortest_path_generic(
///     &graph,
///     "home",
///     "shop",
///     &SearchOptions::default(),
/// )
/// .unwrap();
///
/// if search_results.is_found() {
///   println!("Path: {:?}", search_results.path());
/// }
/// else {
///   println!("Could not find Dijkstra shortest path.");
///   println!("Search Results: {:?}", search_results);
/// }
/// assert_eq!(search_results.path(), &["home", "park", "shop"]);
/// ```
///
/// Reference: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
pub fn shortest_path_generic<K: NodeKey>(
    graph: &Graph<K>,
    start: K,
    target: K,
    options: &SearchOptions,
) -> SearchResult<AStarSearchResults<K>, K> {
    astar_shortest_path(graph, start, target, heuristic_zero::<K>(), options)
}

/// [shortest_path_generic] with default options.
pub fn shortest_path<K: NodeKey>(
    graph: &Graph<K>,
    start: K,
    target: K,
) -> SearchResult<AStarSearchResults<K>, K> {
    shortest_path_generic(graph, start, target, &SearchOptions::default())
}
