use city_routes::graph::random_digraph;
use city_routes::{compute_distances, reconstruct_path};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

criterion_group!(benches, compute_distances_scaling, path_reconstruction);
criterion_main!(benches);

fn compute_distances_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_distances");
    let mut rng = StdRng::seed_from_u64(42);

    for n in [5_000usize, 10_000, 20_000, 30_000] {
        let m = 2 * n;
        let graph = random_digraph(n, m, &mut rng).unwrap();

        group.throughput(Throughput::Elements((n + m) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| compute_distances(g, black_box(&0)).unwrap())
        });
    }
    group.finish();
}

fn path_reconstruction(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_digraph(10_000, 20_000, &mut rng).unwrap();
    let distances = compute_distances(&graph, &0).unwrap();

    // Farthest reachable vertex gives the longest walk
    let target = distances
        .iter()
        .filter(|(_, d)| d.is_finite())
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(v, _)| *v)
        .unwrap_or(0);

    c.bench_function("reconstruct_path_farthest", |b| {
        b.iter(|| reconstruct_path(&graph, &0, black_box(&target), &distances))
    });
}
