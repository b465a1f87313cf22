pub mod traits;
pub mod weighted;
pub mod generators;
pub mod loader;

pub use traits::{Graph, MutableGraph};
pub use weighted::WeightedDigraph;
pub use generators::random_digraph;
pub use loader::{load_edge_list, parse_edge_list, read_edge_list};
