use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use graph_scan::{bfs, dfs, Graph};

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("n{i}")).collect()
}

fn chain(n: usize) -> Graph {
    let names = names(n);
    Graph::undirected(
        names.iter().map(String::as_str),
        names.windows(2).map(|w| (w[0].as_str(), w[1].as_str())),
    )
    .expect("chain endpoints are declared")
}

fn grid(side: usize) -> Graph {
    let names = names(side * side);
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            let u = r * side + c;
            if c + 1 < side {
                edges.push((names[u].as_str(), names[u + 1].as_str()));
            }
            if r + 1 < side {
                edges.push((names[u].as_str(), names[u + side].as_str()));
            }
        }
    }
    Graph::undirected(names.iter().map(String::as_str), edges).expect("grid endpoints are declared")
}

fn bench_traversal(c: &mut Criterion) {
    let workloads = [
        ("sample", Graph::sample(), "A"),
        ("chain_1000", chain(1000), "n0"),
        ("grid_32x32", grid(32), "n0"),
    ];

    for (name, graph, start) in &workloads {
        let mut group = c.benchmark_group(*name);
        group.throughput(Throughput::Elements(graph.node_count() as u64));

        group.bench_function("bfs", |b| {
            b.iter(|| black_box(bfs(black_box(graph), start)))
        });
        group.bench_function("dfs", |b| {
            b.iter(|| black_box(dfs(black_box(graph), start)))
        });

        group.finish();
    }
}

criterion_group!(benches, bench_traversal);
criterion_main!(benches);
