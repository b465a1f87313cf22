use city_routes::graph::{load_edge_list, parse_edge_list, Graph};
use city_routes::{compute_distances, reconstruct_path, Error};
use std::fs;

const CITIES: &str = "\
A B 4
A C 2
C B 1
B D 5
C D 8
D E 3
";

fn label(s: &str) -> String {
    s.to_string()
}

#[test]
fn test_parse_creates_vertices_on_first_mention() {
    let graph = parse_edge_list(CITIES).unwrap();

    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 6);
    let vertices: Vec<_> = graph.vertices().cloned().collect();
    assert_eq!(vertices, vec!["A", "B", "C", "D", "E"]);
    assert_eq!(graph.edge_weight(&label("C"), &label("B")).unwrap(), 1.0);
}

#[test]
fn test_loaded_graph_routes() {
    let graph = parse_edge_list(CITIES).unwrap();
    let start = label("A");
    let distances = compute_distances(&graph, &start).unwrap();

    assert_eq!(distances[&label("B")], 3.0);
    assert_eq!(distances[&label("E")], 11.0);
    assert_eq!(
        reconstruct_path(&graph, &start, &label("E"), &distances),
        vec!["A", "C", "B", "D", "E"]
    );
}

#[test]
fn test_repeated_pair_overwrites() {
    let graph = parse_edge_list("A B 4\nA B 1.5\n").unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(&label("A"), &label("B")).unwrap(), 1.5);
}

#[test]
fn test_blank_lines_and_extra_whitespace() {
    let graph = parse_edge_list("\n  A\tB   2\n\n B C 3 \n").unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge_weight(&label("B"), &label("C")).unwrap(), 3.0);
}

#[test]
fn test_wrong_field_count_reports_line() {
    let err = parse_edge_list("A B 1\nA C\n").unwrap_err();
    match err {
        Error::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_bad_weight_reports_line() {
    let err = parse_edge_list("A B 1\n\nB C heavy\n").unwrap_err();
    match err {
        Error::Parse { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("heavy"));
        }
        other => panic!("unexpected error: {}", other),
    }

    assert!(matches!(parse_edge_list("A B inf\n"), Err(Error::Parse { line: 1, .. })));
    assert!(matches!(parse_edge_list("A B NaN\n"), Err(Error::Parse { line: 1, .. })));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("city_routes_loader_{}.txt", std::process::id()));
    fs::write(&path, CITIES).unwrap();

    let graph = load_edge_list(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("city_routes_does_not_exist.txt");
    assert!(matches!(load_edge_list(&path), Err(Error::Io(_))));
}
