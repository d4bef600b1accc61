use centra_analysis::{Centrality, PowerIterationConfig};
use centra_core::Graph;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const SIZES: [usize; 3] = [16, 25, 36];

fn ring(n: usize) -> Graph {
    let mut g = Graph::with_description("ring");
    for i in 0..n {
        g.add_vertex(format!("v{i:03}")).expect("fresh id");
    }
    for i in 0..n {
        let (a, b) = (format!("v{i:03}"), format!("v{:03}", (i + 1) % n));
        g.add_unit_edge(&a, &b).expect("ring edge");
    }
    g
}

fn grid(side: usize) -> Graph {
    let mut g = Graph::with_description("grid");
    let id = |r: usize, c: usize| format!("r{r:02}c{c:02}");
    for r in 0..side {
        for c in 0..side {
            g.add_vertex(id(r, c)).expect("fresh id");
        }
    }
    for r in 0..side {
        for c in 0..side {
            if c + 1 < side {
                g.add_unit_edge(&id(r, c), &id(r, c + 1)).expect("row edge");
            }
            if r + 1 < side {
                g.add_unit_edge(&id(r, c), &id(r + 1, c)).expect("column edge");
            }
        }
    }
    g
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn bench_centralities(c: &mut Criterion) {
    let power = PowerIterationConfig::with_iterations(1e-6, 500);
    let mut group = c.benchmark_group("centrality");

    for n in SIZES {
        let side = (n as f64).sqrt() as usize;
        let shapes = [("ring", ring(n)), ("grid", grid(side))];
        for (shape, graph) in &shapes {
            for centrality in Centrality::ALL {
                group.bench_with_input(
                    BenchmarkId::new(format!("{shape}/{centrality}"), n),
                    graph,
                    |b, graph| b.iter(|| black_box(centrality.compute(graph, &power))),
                );
            }
        }
    }

    group.finish();
}

fn bench_centralization(c: &mut Criterion) {
    let power = PowerIterationConfig::with_iterations(1e-6, 500);
    let graph = grid(5);
    c.bench_function("centralization/grid/closeness", |b| {
        b.iter(|| black_box(Centrality::Closeness.centralization(&graph, &power)))
    });
}

criterion_group!(benches, bench_centralities, bench_centralization);
criterion_main!(benches);
