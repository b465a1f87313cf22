use city_routes::graph::generators::{MAX_RANDOM_WEIGHT, MIN_RANDOM_WEIGHT};
use city_routes::graph::{random_digraph, Graph};
use city_routes::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn edges(graph: &impl Graph<usize, f64>) -> Vec<(usize, usize, f64)> {
    let mut out = Vec::new();
    for &u in graph.vertices() {
        for (&v, w) in graph.outgoing_edges(&u).unwrap() {
            out.push((u, v, w));
        }
    }
    out
}

#[test]
fn test_generates_requested_size() {
    let mut rng = StdRng::seed_from_u64(1);
    let graph = random_digraph(100, 200, &mut rng).unwrap();

    assert_eq!(graph.vertex_count(), 100);
    assert_eq!(graph.edge_count(), 200);
    assert!(graph.has_vertex(&0));
    assert!(graph.has_vertex(&99));
    assert!(!graph.has_vertex(&100));
}

#[test]
fn test_weights_are_integers_in_range() {
    let mut rng = StdRng::seed_from_u64(2);
    let graph = random_digraph(50, 400, &mut rng).unwrap();

    for (_, _, w) in edges(&graph) {
        assert!(w >= MIN_RANDOM_WEIGHT as f64 && w <= MAX_RANDOM_WEIGHT as f64);
        assert_eq!(w.fract(), 0.0);
    }
}

#[test]
fn test_same_seed_same_graph() {
    let a = random_digraph(60, 150, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = random_digraph(60, 150, &mut StdRng::seed_from_u64(42)).unwrap();
    let c = random_digraph(60, 150, &mut StdRng::seed_from_u64(43)).unwrap();

    assert_eq!(edges(&a), edges(&b));
    assert_ne!(edges(&a), edges(&c));
}

#[test]
fn test_complete_graph_with_self_loops() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = random_digraph(4, 16, &mut rng).unwrap();

    for u in 0..4 {
        for v in 0..4 {
            assert!(graph.has_edge(&u, &v));
        }
    }
}

#[test]
fn test_too_many_edges_is_rejected() {
    let mut rng = StdRng::seed_from_u64(4);
    assert!(matches!(random_digraph(3, 10, &mut rng), Err(Error::InvalidParameters(_))));
    assert!(matches!(random_digraph(0, 1, &mut rng), Err(Error::InvalidParameters(_))));

    let empty = random_digraph(0, 0, &mut rng).unwrap();
    assert_eq!(empty.vertex_count(), 0);
}
