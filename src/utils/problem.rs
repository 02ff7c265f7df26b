use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::algorithms::astar::{shortest_path_generic, AStarSearchResults, SearchOptions};
use crate::common::error::{GraphError, ProblemError};
use crate::data_structures::graph::{Graph, GraphBuilder};
use crate::utils::heuristics::heuristic_euclidean;

/// A node entry in a problem document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemNode {
    pub id: String,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}

/// A directed edge entry in a problem document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemEdge {
    pub start: String,
    pub end: String,
    pub cost: f64,
}

/// A serialized pathfinding problem: a graph plus the start and target nodes.
///
/// # Examples
/// ```rust
/// use graph_astar::utils::problem::Problem;
///
/// let problem = Problem::from_json_str(r#"{
///     "nodes": [
///         {"id": "S", "X": 0, "Y": 0},
///         {"id": "T", "X": 3, "Y": 4}
///     ],
///     "edges": [{"start": "S", "end": "T", "cost": 5}],
///     "startNode": "S",
///     "targetNode": "T"
/// }"#).unwrap();
///
/// let search_results = problem.solve().unwrap();
/// assert_eq!(search_results.path(), &["S".to_string(), "T".to_string()]);
/// assert_eq!(search_results.cost(), Some(5.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub nodes: Vec<ProblemNode>,
    pub edges: Vec<ProblemEdge>,
    pub start_node: String,
    pub target_node: String,
}

impl Problem {
    pub fn from_json_str(json: &str) -> Result<Self, ProblemError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ProblemError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ProblemError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ProblemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let problem = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            nodes = problem.nodes.len(),
            edges = problem.edges.len(),
            "loaded problem"
        );
        Ok(problem)
    }

    /// Loads all nodes, then all edges, into a [Graph].
    pub fn build_graph(&self) -> Result<Graph<String>, GraphError<String>> {
        let mut builder = GraphBuilder::new();
        for node in &self.nodes {
            builder.add_node(node.id.clone(), (node.x, node.y))?;
        }
        for edge in &self.edges {
            builder.add_edge(edge.start.clone(), edge.end.clone(), edge.cost)?;
        }
        let graph = builder.build();
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built graph"
        );
        Ok(graph)
    }

    /// Builds the graph and searches it with the straight-line heuristic.
    pub fn solve(&self) -> Result<AStarSearchResults<String>, ProblemError> {
        self.solve_with(&SearchOptions::default())
    }

    pub fn solve_with(
        &self,
        options: &SearchOptions,
    ) -> Result<AStarSearchResults<String>, ProblemError> {
        let graph = self.build_graph()?;
        let search_results = shortest_path_generic(
            &graph,
            self.start_node.clone(),
            self.target_node.clone(),
            heuristic_euclidean(&graph),
            options,
        )?;
        Ok(search_results)
    }
}
