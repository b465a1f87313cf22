use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use log::debug;
use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::algorithm::path::{reconstruct_path_with_tolerance, PATH_TOLERANCE};
use crate::algorithm::{DistanceMap, ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::Frontier;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazy-deletion frontier
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Tolerance used when matching distances during path reconstruction
    path_tolerance: f64,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            path_tolerance: PATH_TOLERANCE,
        }
    }

    /// Set the tolerance for path reconstruction. Non-finite values keep the default.
    pub fn with_path_tolerance(mut self, tolerance: f64) -> Self {
        self.path_tolerance = if tolerance.is_finite() {
            tolerance.abs()
        } else {
            PATH_TOLERANCE
        };
        self
    }

    pub fn path_tolerance(&self) -> f64 {
        self.path_tolerance
    }

    /// Runs the search and also records, for every reached vertex, the
    /// predecessor through which its final distance was found
    pub fn shortest_path_tree<V, W, G>(&self, graph: &G, start: &V) -> Result<ShortestPathTree<V, W>>
    where
        V: Clone + Eq + Hash + Debug,
        W: Float + Debug,
        G: Graph<V, W>,
    {
        let mut predecessors = HashMap::new();
        let distances = search(graph, start, Some(&mut predecessors))?;
        Ok(ShortestPathTree::new(distances, predecessors))
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_distances(&self, graph: &G, start: &V) -> Result<DistanceMap<V, W>> {
        search(graph, start, None)
    }

    fn reconstruct_path(&self, graph: &G, start: &V, end: &V, distances: &DistanceMap<V, W>) -> Vec<V> {
        reconstruct_path_with_tolerance(graph, start, end, distances, self.path_tolerance)
    }
}

fn search<V, W, G>(graph: &G, start: &V, mut predecessors: Option<&mut HashMap<V, V>>) -> Result<DistanceMap<V, W>>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    if !graph.has_vertex(start) {
        return Err(Error::InvalidVertex(format!("{:?}", start)));
    }

    // Every vertex starts out unreachable except the start
    let mut distances: HashMap<V, W> = graph
        .vertices()
        .map(|v| (v.clone(), W::infinity()))
        .collect();
    distances.insert(start.clone(), W::zero());

    let mut visited: HashSet<V> = HashSet::with_capacity(graph.vertex_count());
    let mut frontier = Frontier::new();
    frontier.push(start.clone(), OrderedFloat(W::zero()));

    let mut stale_pops = 0usize;
    let mut relaxations = 0usize;

    while let Some((u, OrderedFloat(dist_u))) = frontier.pop() {
        if visited.contains(&u) {
            stale_pops += 1;
            continue;
        }
        visited.insert(u.clone());

        for (v, weight) in graph.outgoing_edges(&u)? {
            let new_dist = dist_u + weight;
            let current = distances.get(v).copied().unwrap_or_else(W::infinity);

            if new_dist < current {
                distances.insert(v.clone(), new_dist);
                if let Some(predecessors) = predecessors.as_deref_mut() {
                    predecessors.insert(v.clone(), u.clone());
                }
                frontier.push(v.clone(), OrderedFloat(new_dist));
                relaxations += 1;
            }
        }
    }

    debug!(
        "Dijkstra from {:?}: settled {} of {} vertices, {} relaxations, {} stale entries skipped",
        start,
        visited.len(),
        graph.vertex_count(),
        relaxations,
        stale_pops
    );

    Ok(DistanceMap::new(start.clone(), distances))
}
