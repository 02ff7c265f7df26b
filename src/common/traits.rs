use std::fmt::Debug;
use std::hash::Hash;

use super::error::SearchError;
use super::position::Position;

/// A simple trait encapsulating what other traits are needed
/// for a type to be usable as a node identifier.
///
/// Nodes are compared by `Ord` to break ties between frontier
/// entries with equal f-scores, so the ordering must be total.
pub trait NodeKey: Eq + Hash + Ord + Clone + Debug {}
impl<T> NodeKey for T where T: Eq + Hash + Ord + Clone + Debug {}

/// Trait that encapsulates getting the straight-line distance
/// from one point to another.
pub trait GetDistanceTo {
    fn get_distance_to(&self, other: &Self) -> f64;
}

impl GetDistanceTo for Position {
    fn get_distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An estimate of the remaining cost between two nodes.
///
/// Implementations must be deterministic and side-effect free, and the
/// estimate must never exceed the true minimum cost between the nodes
/// (admissibility) or the search loses its optimality guarantee.
///
/// Any closure of the form `Fn(&K, &K) -> Result<f64, SearchError<K>>`
/// is a heuristic.
pub trait Heuristic<K: Debug> {
    fn estimate(&self, from: &K, to: &K) -> Result<f64, SearchError<K>>;
}

impl<K, F> Heuristic<K> for F
where
    K: Debug,
    F: Fn(&K, &K) -> Result<f64, SearchError<K>>,
{
    fn estimate(&self, from: &K, to: &K) -> Result<f64, SearchError<K>> {
        self(from, to)
    }
}
