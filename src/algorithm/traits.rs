use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Index;
use num_traits::Float;

use crate::algorithm::path;
use crate::graph::Graph;
use crate::Result;

/// Shortest known distances from a fixed start vertex.
///
/// Holds an entry for every vertex of the graph it was computed on.
/// Unreachable vertices map to positive infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMap<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    start: V,
    distances: HashMap<V, W>,
}

impl<V, W> DistanceMap<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    pub(crate) fn new(start: V, distances: HashMap<V, W>) -> Self {
        DistanceMap { start, distances }
    }

    /// The vertex the distances are measured from
    pub fn start(&self) -> &V {
        &self.start
    }

    /// Distance to `vertex`, or `None` if it was not part of the graph
    pub fn get(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Returns true if `vertex` has a finite distance
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.get(vertex).map_or(false, |d| d.is_finite())
    }

    /// Number of vertices with a finite distance, the start included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Iterates over `(vertex, distance)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        self.distances.iter().map(|(v, d)| (v, *d))
    }
}

impl<V, W> Index<&V> for DistanceMap<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    type Output = W;

    fn index(&self, vertex: &V) -> &W {
        &self.distances[vertex]
    }
}

/// Distances plus the predecessor that last improved each vertex
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    distances: DistanceMap<V, W>,
    predecessors: HashMap<V, V>,
}

impl<V, W> ShortestPathTree<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    pub(crate) fn new(distances: DistanceMap<V, W>, predecessors: HashMap<V, V>) -> Self {
        ShortestPathTree { distances, predecessors }
    }

    pub fn distances(&self) -> &DistanceMap<V, W> {
        &self.distances
    }

    /// Predecessor of `vertex` on its shortest path, `None` for the start and unreachable vertices
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex)
    }

    /// Path from the start to `target` by following predecessors.
    ///
    /// The start itself yields a single-vertex path. Unreachable or unknown
    /// vertices yield `None`.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.distances.is_reachable(target) {
            return None;
        }

        let start = self.distances.start();
        let mut path = vec![target.clone()];
        let mut current = target;

        while current != start {
            // A chain longer than the vertex count is a predecessor cycle
            if path.len() > self.distances.len() {
                return None;
            }
            current = self.predecessors.get(current)?;
            path.push(current.clone());
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    /// Compute the distance from `start` to every vertex of the graph
    fn compute_distances(&self, graph: &G, start: &V) -> Result<DistanceMap<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Rebuild a shortest path from `start` to `end` out of a distance map.
    ///
    /// An empty vector means no path was found.
    fn reconstruct_path(&self, graph: &G, start: &V, end: &V, distances: &DistanceMap<V, W>) -> Vec<V> {
        path::reconstruct_path(graph, start, end, distances)
    }
}
