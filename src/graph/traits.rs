use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::Result;

/// Trait representing a weighted directed graph over labelled vertices
pub trait Graph<V, W>: Debug
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertices
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges `(target, weight)` of a vertex
    fn outgoing_edges(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = (&V, W)> + '_>>;

    /// Returns an iterator over the incoming edges `(source, weight)` of a vertex
    fn incoming_edges(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = (&V, W)> + '_>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool;

    /// Gets the weight of an edge
    fn edge_weight(&self, from: &V, to: &V) -> Result<W>;

    /// Returns the targets of the outgoing edges of a vertex
    fn neighbors<'a>(&'a self, vertex: &V) -> Result<Box<dyn Iterator<Item = &'a V> + 'a>>
    where
        W: 'a,
    {
        Ok(Box::new(self.outgoing_edges(vertex)?.map(|(target, _)| target)))
    }
}

/// Trait for growing a graph
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Adds a vertex if it is not present yet. Returns true if it was inserted.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds a directed edge, overwriting the weight of an existing one
    fn add_edge(&mut self, from: &V, to: &V, weight: W) -> Result<()>;
}
