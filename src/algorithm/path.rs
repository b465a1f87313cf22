use std::fmt::Debug;
use std::hash::Hash;
use log::trace;
use num_traits::Float;

use crate::algorithm::DistanceMap;
use crate::graph::Graph;

/// Maximum difference at which `d(p) + w(p, v)` is considered equal to `d(v)`
pub const PATH_TOLERANCE: f64 = 1e-6;

/// Rebuilds the path from `start` to `end` by walking backward over the distance map.
///
/// At each step the incoming edges of the current vertex are probed in
/// insertion order for a predecessor `p` with `d(p) + w(p, current) == d(current)`
/// within [`PATH_TOLERANCE`]; the first match is taken.
///
/// Returns an empty vector when no path is found, including for
/// `start == end`, unknown vertices and unreachable targets.
pub fn reconstruct_path<V, W, G>(graph: &G, start: &V, end: &V, distances: &DistanceMap<V, W>) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<V, W> + ?Sized,
{
    reconstruct_path_with_tolerance(graph, start, end, distances, PATH_TOLERANCE)
}

/// Same as [`reconstruct_path`] with a caller-chosen matching tolerance
pub fn reconstruct_path_with_tolerance<V, W, G>(
    graph: &G,
    start: &V,
    end: &V,
    distances: &DistanceMap<V, W>,
    tolerance: f64,
) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<V, W> + ?Sized,
{
    let tolerance = W::from(tolerance).unwrap_or_else(W::epsilon);
    let mut walk = Vec::new();
    let mut current = end.clone();

    while current != *start {
        // Zero-weight cycles can send the walk around forever
        if walk.len() >= graph.vertex_count() {
            trace!("Backward walk to {:?} exceeded the vertex count", end);
            return Vec::new();
        }

        let current_dist = match distances.get(&current) {
            Some(d) if d.is_finite() => d,
            _ => return Vec::new(),
        };

        let incoming = match graph.incoming_edges(&current) {
            Ok(edges) => edges,
            Err(_) => return Vec::new(),
        };

        let mut previous = None;
        for (source, weight) in incoming {
            // A self-loop never leads back toward the start
            if *source == current {
                continue;
            }
            if let Some(source_dist) = distances.get(source) {
                if (source_dist + weight - current_dist).abs() < tolerance {
                    previous = Some((source.clone(), source_dist));
                    break;
                }
            }
        }

        let Some((previous, previous_dist)) = previous else {
            trace!("No predecessor of {:?} matches distance {:?}", current, current_dist);
            return Vec::new();
        };

        if previous_dist > current_dist {
            return Vec::new();
        }

        walk.push(current);
        current = previous;
    }

    if walk.is_empty() {
        return walk;
    }

    walk.push(start.clone());
    walk.reverse();
    walk
}
