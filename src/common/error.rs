use std::fmt::Debug;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for search operations.
pub type SearchResult<T, K> = Result<T, SearchError<K>>;

/// Fatal errors raised while running a search.
///
/// An unreachable target is not an error; it is reported through
/// [SearchStatus::Unreachable](crate::algorithms::astar::SearchStatus::Unreachable).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError<K: Debug> {
    /// A referenced node id was never added to the graph.
    #[error("unknown node {0:?}")]
    UnknownNode(K),

    /// The heuristic was asked about a node that has no coordinates.
    #[error("node {0:?} has no position")]
    MissingPosition(K),

    /// Path reconstruction hit a node without a usable predecessor chain.
    #[error("no predecessor chain leads back to the start from node {0:?}")]
    NoPredecessorChain(K),

    /// A heuristic produced a negative or non-finite estimate.
    #[error("heuristic returned invalid estimate {estimate} for node {node:?}")]
    InvalidEstimate { node: K, estimate: f64 },
}

/// Validation errors returned while building a [Graph](crate::data_structures::graph::Graph).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError<K: Debug> {
    /// Edge costs must be finite and non-negative.
    #[error("edge {from:?} -> {to:?} has invalid cost {cost}")]
    InvalidCost { from: K, to: K, cost: f64 },

    /// Node coordinates must be finite.
    #[error("node {node:?} has invalid position ({x}, {y})")]
    InvalidPosition { node: K, x: f64, y: f64 },
}

/// Errors raised while loading or solving a problem document.
#[derive(Error, Debug)]
pub enum ProblemError {
    #[error("failed to read problem file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse problem document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError<String>),

    #[error("search failed: {0}")]
    Search(#[from] SearchError<String>),
}
