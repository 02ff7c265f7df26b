/// Provides common definitions used across the crate
pub mod common;

/// Provides the graph store searched by the algorithms
pub mod data_structures;

/// Provides individual algorithm implementations
pub mod algorithms;

/// Provides helper methods to simplify using algorithms
pub mod utils;

pub use algorithms::astar::{
    shortest_path, AStarSearch, AStarSearchResults, SearchOptions, SearchStatus,
};
pub use common::error::{GraphError, ProblemError, SearchError};
pub use data_structures::graph::{Graph, GraphBuilder};
