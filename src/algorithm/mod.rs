pub mod traits;
pub mod dijkstra;
pub mod path;

pub use traits::{DistanceMap, ShortestPathAlgorithm, ShortestPathTree};
pub use path::{reconstruct_path, reconstruct_path_with_tolerance, PATH_TOLERANCE};

use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::graph::Graph;
use crate::Result;

/// Distances from `start` to every vertex, computed with [`dijkstra::Dijkstra`]
pub fn compute_distances<V, W, G>(graph: &G, start: &V) -> Result<DistanceMap<V, W>>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    dijkstra::Dijkstra::new().compute_distances(graph, start)
}
