use city_routes::graph::load_edge_list;
use city_routes::report::route_report;
use colored::*;
use std::env;
use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: route_report <edge-list-file>");
        process::exit(2);
    };

    let graph = match load_edge_list(&path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{} {}", "could not load graph:".red(), e);
            process::exit(1);
        }
    };

    if graph.has_negative_weights() {
        eprintln!("{}", "warning: negative edge weights, distances are not reliable".yellow());
    }

    match route_report(&graph) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            eprintln!("{} {}", "route computation failed:".red(), e);
            process::exit(1);
        }
    }
}
