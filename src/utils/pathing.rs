use crate::common::traits::NodeKey;
use crate::data_structures::graph::Graph;

/// Utility function for totalling the edge costs along a path.
///
/// Returns None if the path is empty or if any consecutive pair of nodes
/// in it is not joined by an edge. A single-node path costs nothing.
///
/// # Examples
/// ```rust
/// use graph_astar::data_structures::graph::GraphBuilder;
/// use graph_astar::utils::pathing::path_cost;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_edge("A", "B", 1.5).unwrap();
/// builder.add_edge("B", "C", 2.0).unwrap();
/// let graph = builder.build();
///
/// assert_eq!(path_cost(&graph, &["A", "B", "C"]), Some(3.5));
/// assert_eq!(path_cost(&graph, &["A", "C"]), None);
/// ```
pub fn path_cost<K: NodeKey>(graph: &Graph<K>, path: &[K]) -> Option<f64> {
    if path.is_empty() || !graph.contains(&path[0]) {
        return None;
    }

    path.windows(2)
        .map(|pair| graph.edge_cost(&pair[0], &pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::graph::GraphBuilder;

    fn graph() -> Graph<u8> {
        let mut builder = GraphBuilder::new();
        builder.add_edge(1, 2, 1.0).unwrap();
        builder.add_edge(2, 3, 0.5).unwrap();
        builder.add_edge(3, 1, 4.0).unwrap();
        builder.build()
    }

    #[test]
    fn sums_edges_in_order() {
        let graph = graph();
        assert_eq!(path_cost(&graph, &[1, 2, 3]), Some(1.5));
        assert_eq!(path_cost(&graph, &[3, 1, 2, 3]), Some(5.5));
    }

    #[test]
    fn single_node_costs_nothing() {
        let graph = graph();
        assert_eq!(path_cost(&graph, &[2]), Some(0.0));
        assert_eq!(path_cost(&graph, &[9]), None);
    }

    #[test]
    fn empty_or_broken_paths_have_no_cost() {
        let graph = graph();
        assert_eq!(path_cost(&graph, &[]), None);
        assert_eq!(path_cost(&graph, &[1, 3]), None);
        assert_eq!(path_cost(&graph, &[2, 1]), None);
    }
}
