use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A weighted directed graph over arbitrary vertex labels.
///
/// Labels are mapped to dense ids in insertion order, so iteration over
/// vertices and edges is deterministic.
#[derive(Debug, Clone)]
pub struct WeightedDigraph<V, W = f64>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Label -> dense id
    index: HashMap<V, usize>,

    /// Dense id -> label
    labels: Vec<V>,

    /// Outgoing edges for each vertex: id -> [(target id, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Incoming edges for each vertex: id -> [(source id, weight)]
    incoming_edges: Vec<Vec<(usize, W)>>,
}

impl<V, W> WeightedDigraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedDigraph {
            index: HashMap::new(),
            labels: Vec::new(),
            outgoing_edges: Vec::new(),
            incoming_edges: Vec::new(),
        }
    }

    /// Creates a new empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        WeightedDigraph {
            index: HashMap::with_capacity(vertices),
            labels: Vec::with_capacity(vertices),
            outgoing_edges: Vec::with_capacity(vertices),
            incoming_edges: Vec::with_capacity(vertices),
        }
    }

    /// Returns true if any edge carries a negative weight
    pub fn has_negative_weights(&self) -> bool {
        self.outgoing_edges
            .iter()
            .flatten()
            .any(|(_, weight)| *weight < W::zero())
    }

    fn id_of(&self, vertex: &V) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| Error::InvalidVertex(format!("{:?}", vertex)))
    }

    fn edges_of<'a>(&'a self, edges: &'a [(usize, W)]) -> Box<dyn Iterator<Item = (&'a V, W)> + 'a> {
        let labels = &self.labels;
        Box::new(edges.iter().map(move |&(id, weight)| (&labels[id], weight)))
    }
}

impl<V, W> Default for WeightedDigraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for WeightedDigraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.labels.iter())
    }

    fn outgoing_edges(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = (&V, W)> + '_>> {
        let id = self.id_of(vertex)?;
        Ok(self.edges_of(&self.outgoing_edges[id]))
    }

    fn incoming_edges(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = (&V, W)> + '_>> {
        let id = self.id_of(vertex)?;
        Ok(self.edges_of(&self.incoming_edges[id]))
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&from), Some(&to)) => self.outgoing_edges[from].iter().any(|(target, _)| *target == to),
            _ => false,
        }
    }

    fn edge_weight(&self, from: &V, to: &V) -> Result<W> {
        let from_id = self.id_of(from)?;
        let to_id = self.id_of(to)?;

        self.outgoing_edges[from_id]
            .iter()
            .find(|(target, _)| *target == to_id)
            .map(|(_, weight)| *weight)
            .ok_or_else(|| Error::NoSuchEdge(format!("{:?}", from), format!("{:?}", to)))
    }
}

impl<V, W> MutableGraph<V, W> for WeightedDigraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }

        let id = self.labels.len();
        self.index.insert(vertex.clone(), id);
        self.labels.push(vertex);
        self.outgoing_edges.push(Vec::new());
        self.incoming_edges.push(Vec::new());
        true
    }

    fn add_edge(&mut self, from: &V, to: &V, weight: W) -> Result<()> {
        let from = self.id_of(from)?;
        let to = self.id_of(to)?;

        // Check if edge already exists and update it if it does
        if let Some(edge) = self.outgoing_edges[from].iter_mut().find(|(target, _)| *target == to) {
            edge.1 = weight;
            if let Some(edge) = self.incoming_edges[to].iter_mut().find(|(source, _)| *source == from) {
                edge.1 = weight;
            }
            return Ok(());
        }

        self.outgoing_edges[from].push((to, weight));
        self.incoming_edges[to].push((from, weight));
        Ok(())
    }
}
