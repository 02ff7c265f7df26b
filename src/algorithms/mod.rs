/// Provides methods for pathfinding using the A* algorithm.
///
/// You most likely want to start with one of the following:
/// - [shortest_path](crate::algorithms::astar::shortest_path)
/// - [shortest_path_generic](crate::algorithms::astar::shortest_path_generic)
/// - [AStarSearch](crate::algorithms::astar::AStarSearch), to drive the search one step at a time
pub mod astar;

/// Provides methods for pathfinding using Dijkstra's Shortest Paths algorithm
pub mod dijkstra;

/// Per-run search records and path reconstruction
pub mod search_state;
