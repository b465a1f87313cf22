use crate::graph::{Graph, MutableGraph, WeightedDigraph};
use crate::{Error, Result};
use rand::Rng;

/// Smallest edge weight produced by [`random_digraph`]
pub const MIN_RANDOM_WEIGHT: u32 = 1;
/// Largest edge weight produced by [`random_digraph`]
pub const MAX_RANDOM_WEIGHT: u32 = 100;

/// Generates a random directed graph with vertices `0..n` and exactly `m` distinct edges.
///
/// Endpoints are drawn uniformly, so self-loops may appear. A pair that is
/// already connected is rejected and drawn again. Weights are integers in
/// `[MIN_RANDOM_WEIGHT, MAX_RANDOM_WEIGHT]`. The caller supplies the random
/// source; a seeded rng yields the same graph every time.
pub fn random_digraph<R>(n: usize, m: usize, rng: &mut R) -> Result<WeightedDigraph<usize, f64>>
where
    R: Rng,
{
    let max_edges = n.checked_mul(n).unwrap_or(usize::MAX);
    if m > max_edges {
        return Err(Error::InvalidParameters(format!(
            "cannot place {} distinct edges among {} vertices",
            m, n
        )));
    }

    let mut graph = WeightedDigraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }

    let mut count = 0;
    while count < m {
        let source = rng.gen_range(0..n);
        let target = rng.gen_range(0..n);

        if !graph.has_edge(&source, &target) {
            let weight = rng.gen_range(MIN_RANDOM_WEIGHT..=MAX_RANDOM_WEIGHT) as f64;
            graph.add_edge(&source, &target, weight)?;
            count += 1;
        }
    }

    Ok(graph)
}
