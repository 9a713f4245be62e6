use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use strata::{Graph, LayoutOptions, layout};

#[derive(Debug, Clone)]
struct ChainSpec {
    node_ids: Vec<String>,
    edges: Vec<(usize, usize)>,
}

impl ChainSpec {
    fn build(&self) -> Graph<String> {
        let mut g = Graph::with_capacity(self.node_ids.len(), self.edges.len());
        let ids: Vec<_> = self.node_ids.iter().map(|id| g.add_node(id.clone())).collect();
        for &(from, to) in &self.edges {
            if from >= ids.len() || to >= ids.len() || from == to {
                continue;
            }
            g.add_semantic_edge(ids[from], ids[to], ())
                .expect("bench edges join distinct known nodes");
        }
        g
    }
}

fn build_chain_spec(name: &str, node_count: usize, fanout: usize) -> ChainSpec {
    let node_ids: Vec<String> = (0..node_count).map(|i| format!("{name}_n{i}")).collect();
    let mut edges: Vec<(usize, usize)> = Vec::new();

    // A spine to guarantee connectivity.
    for i in 0..node_count.saturating_sub(1) {
        edges.push((i, i + 1));
    }

    // Extra forward edges to create crossing pressure.
    for i in 0..node_count {
        for k in 2..=(fanout + 1) {
            let to = i.saturating_add(k);
            if to >= node_count {
                break;
            }
            edges.push((i, to));
        }

        // Long edges that need dummy chains.
        let to = i.saturating_add(10);
        if to < node_count {
            edges.push((i, to));
        }
    }

    ChainSpec { node_ids, edges }
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("chain_50_f3", 50usize, 3usize),
        ("chain_200_f4", 200usize, 4usize),
        ("chain_400_f4", 400usize, 4usize),
    ];

    let opts = LayoutOptions::default();
    for (name, nodes, fanout) in cases {
        let spec = build_chain_spec(name, nodes, fanout);
        group.bench_with_input(BenchmarkId::new("layout", name), &spec, |b, spec| {
            b.iter_batched(
                || spec.build(),
                |mut g| {
                    let layering = layout(black_box(&mut g), &opts).expect("acyclic input");
                    black_box(layering.layer_count());
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
