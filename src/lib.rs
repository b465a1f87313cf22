//! City Routes - single-source shortest paths with Dijkstra's algorithm
//!
//! The crate provides a weighted directed graph, a lazy-deletion Dijkstra
//! engine with two path reconstruction strategies, an edge-list loader, a
//! seeded random graph generator and a benchmark harness that compares
//! measured running times against the O((V+E) log V) bound.

pub mod algorithm;
pub mod benchmark;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    compute_distances, dijkstra::Dijkstra, reconstruct_path, DistanceMap,
    ShortestPathAlgorithm, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::weighted::WeightedDigraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex does not exist in the graph: {0}")]
    InvalidVertex(String),

    #[error("Edge does not exist in the graph: from {0} to {1}")]
    NoSuchEdge(String, String),

    #[error("Malformed edge list at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
