//! Reader for the flat edge-list format.
//!
//! Each line holds `<source> <destination> <weight>`, separated by
//! whitespace. Vertices are created the first time they are mentioned and a
//! repeated pair overwrites the earlier weight. Blank lines are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::graph::{Graph, MutableGraph, WeightedDigraph};
use crate::{Error, Result};

/// Parses an edge list held in memory
pub fn parse_edge_list(input: &str) -> Result<WeightedDigraph<String, f64>> {
    read_edge_list(input.as_bytes())
}

/// Loads an edge list from a file
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<WeightedDigraph<String, f64>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = read_edge_list(BufReader::new(file))?;
    info!(
        "Loaded {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

/// Reads an edge list line by line
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<WeightedDigraph<String, f64>> {
    let mut graph = WeightedDigraph::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        let [source, target, weight] = fields.as_slice() else {
            return Err(Error::Parse {
                line: line_no,
                message: format!("expected 3 fields, found {}", fields.len()),
            });
        };

        let weight: f64 = weight.parse().map_err(|_| Error::Parse {
            line: line_no,
            message: format!("invalid weight {:?}", weight),
        })?;
        if !weight.is_finite() {
            return Err(Error::Parse {
                line: line_no,
                message: format!("weight must be finite, got {}", weight),
            });
        }

        let source = (*source).to_string();
        let target = (*target).to_string();
        graph.add_vertex(source.clone());
        graph.add_vertex(target.clone());
        graph.add_edge(&source, &target, weight)?;
    }

    Ok(graph)
}
