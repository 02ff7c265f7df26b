use std::fmt::Debug;

use crate::common::error::SearchError;
use crate::common::traits::{GetDistanceTo, NodeKey};
use crate::data_structures::graph::Graph;

/// Helper function to create a heuristic cost function closure over a graph's
/// node positions.
///
/// The estimate is the straight-line distance between the two nodes. It is
/// admissible whenever every edge costs at least the distance between its
/// endpoints.
///
/// The closure fails with [SearchError::MissingPosition] for a node that has
/// no coordinates, and [SearchError::UnknownNode] for one that isn't in the graph.
///
/// # Examples
/// ```rust
/// use graph_astar::common::traits::Heuristic;
/// use graph_astar::data_structures::graph::GraphBuilder;
/// use graph_astar::utils::heuristics::heuristic_euclidean;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_node("A", (5.0, 5.0)).unwrap();
/// builder.add_node("B", (8.0, 9.0)).unwrap();
/// let graph = builder.build();
///
/// let heuristic = heuristic_euclidean(&graph);
/// assert_eq!(heuristic.estimate(&"A", &"B"), Ok(5.0));
/// ```
pub fn heuristic_euclidean<K: NodeKey>(
    graph: &Graph<K>,
) -> impl Fn(&K, &K) -> Result<f64, SearchError<K>> + '_ {
    move |from: &K, to: &K| -> Result<f64, SearchError<K>> {
        let from_pos = graph
            .position(from)?
            .ok_or_else(|| SearchError::MissingPosition(from.clone()))?;
        let to_pos = graph
            .position(to)?
            .ok_or_else(|| SearchError::MissingPosition(to.clone()))?;
        Ok(from_pos.get_distance_to(&to_pos))
    }
}

/// Helper function to create a heuristic that always estimates zero.
///
/// This turns A* into uniform-cost search (Dijkstra's algorithm), and works
/// on graphs where nodes have no positions.
pub fn heuristic_zero<K: Debug>() -> impl Fn(&K, &K) -> Result<f64, SearchError<K>> {
    |_: &K, _: &K| Ok(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::traits::Heuristic;
    use crate::data_structures::graph::GraphBuilder;

    fn graph() -> Graph<&'static str> {
        let mut builder = GraphBuilder::new();
        builder.add_node("A", (5.0, 5.0)).unwrap();
        builder.add_node("B", (6.0, 7.0)).unwrap();
        builder.add_edge("A", "C", 1.0).unwrap();
        builder.build()
    }

    #[test]
    fn euclidean_is_straight_line_distance() {
        let graph = graph();
        let heuristic = heuristic_euclidean(&graph);

        let estimate = heuristic.estimate(&"A", &"B").unwrap();
        assert!((estimate - 5.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(heuristic.estimate(&"B", &"B"), Ok(0.0));
    }

    #[test]
    fn euclidean_requires_positions() {
        let graph = graph();
        let heuristic = heuristic_euclidean(&graph);

        assert_eq!(
            heuristic.estimate(&"C", &"A"),
            Err(SearchError::MissingPosition("C"))
        );
        assert_eq!(
            heuristic.estimate(&"A", &"C"),
            Err(SearchError::MissingPosition("C"))
        );
        assert_eq!(
            heuristic.estimate(&"A", &"Z"),
            Err(SearchError::UnknownNode("Z"))
        );
    }

    #[test]
    fn zero_ignores_positions() {
        let heuristic = heuristic_zero::<&str>();
        assert_eq!(heuristic.estimate(&"C", &"Z"), Ok(0.0));
    }
}
