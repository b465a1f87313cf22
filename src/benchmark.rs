//! Scaling benchmark for the Dijkstra engine.
//!
//! For every configured size `n` a random graph with `m = edge_factor * n`
//! edges is generated and one single-source run is timed. Each sample is
//! paired with the theoretical cost `(n + m) ln n`, and consecutive samples
//! are compared through the ratio of measured times against the ratio of
//! theoretical costs.

use std::fmt;
use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::algorithm::compute_distances;
use crate::graph::{random_digraph, Graph};
use crate::{Error, Result};

/// Configuration for a benchmark sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Vertex counts to measure, in order
    pub sizes: Vec<usize>,
    /// Edges per vertex
    pub edge_factor: usize,
    /// Seed for the graph generator
    pub seed: u64,
    /// Start vertex of every run
    pub start: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![5_000, 10_000, 15_000, 20_000, 25_000, 30_000],
            edge_factor: 2,
            seed: 42,
            start: 0,
        }
    }
}

impl BenchmarkConfig {
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_edge_factor(mut self, edge_factor: usize) -> Self {
        self.edge_factor = edge_factor;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    fn validate(&self) -> Result<()> {
        let Some(&smallest) = self.sizes.iter().min() else {
            return Err(Error::InvalidParameters("no graph sizes given".to_string()));
        };
        if smallest == 0 {
            return Err(Error::InvalidParameters("graph sizes must be positive".to_string()));
        }
        if self.start >= smallest {
            return Err(Error::InvalidParameters(format!(
                "start vertex {} does not exist in a graph of {} vertices",
                self.start, smallest
            )));
        }
        // m = edge_factor * n distinct pairs must fit into n * n
        if self.edge_factor > smallest {
            return Err(Error::InvalidParameters(format!(
                "edge factor {} exceeds the smallest graph size {}",
                self.edge_factor, smallest
            )));
        }
        Ok(())
    }
}

/// Expected cost of one run, `(n + m) ln n`
pub fn theoretical_cost(n: usize, m: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    (n + m) as f64 * (n as f64).ln()
}

/// One timed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSample {
    pub vertices: usize,
    pub edges: usize,
    pub reachable: usize,
    pub elapsed_ms: f64,
    pub theoretical_cost: f64,
}

/// Comparison of two consecutive samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingRatio {
    pub previous_vertices: usize,
    pub current_vertices: usize,
    /// `None` when the previous run was too fast to measure
    pub measured: Option<f64>,
    /// `None` when the previous theoretical cost is zero (`n = 1`)
    pub theoretical: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub config: BenchmarkConfig,
    pub samples: Vec<BenchmarkSample>,
    pub ratios: Vec<ScalingRatio>,
}

impl BenchmarkReport {
    /// Builds the report, deriving the ratios from consecutive samples
    pub fn new(config: BenchmarkConfig, samples: Vec<BenchmarkSample>) -> Self {
        let ratios = samples
            .windows(2)
            .map(|pair| {
                let (prev, curr) = (&pair[0], &pair[1]);
                ScalingRatio {
                    previous_vertices: prev.vertices,
                    current_vertices: curr.vertices,
                    measured: (prev.elapsed_ms > 0.0).then(|| curr.elapsed_ms / prev.elapsed_ms),
                    theoretical: (prev.theoretical_cost > 0.0)
                        .then(|| curr.theoretical_cost / prev.theoretical_cost),
                }
            })
            .collect();

        BenchmarkReport { config, samples, ratios }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} | {:<10} | {:<10} | {:<14} | {:<16}",
            "Vertices", "Edges", "Reachable", "Time (ms)", "(n+m) ln n"
        )?;
        writeln!(f, "{}", "-".repeat(72))?;
        for sample in &self.samples {
            writeln!(
                f,
                "{:<10} | {:<10} | {:<10} | {:<14.3} | {:<16.2}",
                sample.vertices, sample.edges, sample.reachable, sample.elapsed_ms, sample.theoretical_cost
            )?;
        }

        if !self.ratios.is_empty() {
            writeln!(f)?;
            writeln!(f, "Ratio of running time\tRatio of expected time efficiency")?;
            for ratio in &self.ratios {
                writeln!(
                    f,
                    "Time of {} / Time of {}: {}\t{}",
                    ratio.current_vertices,
                    ratio.previous_vertices,
                    format_ratio(ratio.measured),
                    format_ratio(ratio.theoretical)
                )?;
            }
        }
        Ok(())
    }
}

fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2}", r),
        None => "n/a".to_string(),
    }
}

/// Runs the sweep described by `config`
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.sizes.len());

    for &n in &config.sizes {
        let m = config.edge_factor * n;
        let graph = random_digraph(n, m, &mut rng)?;

        let start = Instant::now();
        let distances = compute_distances(&graph, &config.start)?;
        let elapsed = start.elapsed();

        let sample = BenchmarkSample {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            reachable: distances.reachable_count(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            theoretical_cost: theoretical_cost(n, m),
        };
        info!(
            "n = {}, m = {}: {:.3} ms, {} reachable",
            n, m, sample.elapsed_ms, sample.reachable
        );
        samples.push(sample);
    }

    Ok(BenchmarkReport::new(config.clone(), samples))
}
