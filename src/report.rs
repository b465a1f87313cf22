//! Per-start route listings: distance and reconstructed path to every destination.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use num_traits::Float;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::Graph;
use crate::Result;

/// Separator placed between the stops of a rendered path
pub const PATH_SEPARATOR: &str = " – ";

/// Route from a start vertex to one destination
#[derive(Debug, Clone, PartialEq)]
pub struct Route<V, W> {
    pub destination: V,
    /// Positive infinity when unreachable
    pub distance: W,
    /// Empty when no path was reconstructed
    pub path: Vec<V>,
}

/// All routes leaving one start vertex
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSection<V, W> {
    pub start: V,
    pub routes: Vec<Route<V, W>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteReport<V, W> {
    pub sections: Vec<RouteSection<V, W>>,
}

/// Runs Dijkstra from every vertex and collects the route to every destination.
///
/// Starts and destinations follow the graph's vertex order.
pub fn route_report<V, W, G>(graph: &G) -> Result<RouteReport<V, W>>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    let dijkstra = Dijkstra::new();
    let mut sections = Vec::with_capacity(graph.vertex_count());

    for start in graph.vertices() {
        let distances = dijkstra.compute_distances(graph, start)?;
        let routes = graph
            .vertices()
            .map(|destination| Route {
                destination: destination.clone(),
                distance: distances.get(destination).unwrap_or_else(W::infinity),
                path: dijkstra.reconstruct_path(graph, start, destination, &distances),
            })
            .collect();

        sections.push(RouteSection {
            start: start.clone(),
            routes,
        });
    }

    Ok(RouteReport { sections })
}

/// Renders a path as `city A – city B – city C`, or `no route` when empty
pub fn format_path<V: Display>(path: &[V]) -> String {
    if path.is_empty() {
        return "no route".to_string();
    }

    path.iter()
        .map(|stop| format!("city {}", stop))
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

impl<V, W> Display for RouteSection<V, W>
where
    V: Display,
    W: Float + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The starting point location is {}", self.start)?;
        writeln!(
            f,
            "The routes from location {} to the rest of the locations are:",
            self.start
        )?;
        for route in &self.routes {
            writeln!(
                f,
                "loc. {} to loc. {}: {} --- route length: {}",
                self.start,
                route.destination,
                format_path(&route.path),
                route.distance
            )?;
        }
        Ok(())
    }
}

impl<V, W> Display for RouteReport<V, W>
where
    V: Display,
    W: Float + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "{}", section)?;
        }
        Ok(())
    }
}
