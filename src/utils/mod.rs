/// Heuristic closure builders for the A* search.
pub mod heuristics;

/// Helpers for working with result paths.
pub mod pathing;

/// External cancellation for long-running searches.
pub mod cancel;

/// Loading and solving serialized pathfinding problems.
pub mod problem;
