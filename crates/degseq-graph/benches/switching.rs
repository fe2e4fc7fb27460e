use criterion::{black_box, criterion_group, criterion_main, Criterion};
use degseq_core::rng::RngHandle;
use degseq_core::DegreeSequence;
use degseq_graph::{havel_hakimi, random_realization, switch_neighbours};

fn switching_bench(c: &mut Criterion) {
    let sequence = DegreeSequence::new(vec![4, 4, 3, 3, 3, 3, 2, 2, 1, 1]);
    let graph = havel_hakimi(&sequence).unwrap();

    c.bench_function("havel_hakimi", |b| {
        b.iter(|| black_box(havel_hakimi(&sequence).unwrap()));
    });

    c.bench_function("switch_neighbours", |b| {
        b.iter(|| black_box(switch_neighbours(&graph).unwrap()));
    });

    c.bench_function("random_realization_256", |b| {
        let mut rng = RngHandle::from_seed(7);
        b.iter(|| black_box(random_realization(&sequence, 256, &mut rng).unwrap()));
    });
}

criterion_group!(benches, switching_bench);
criterion_main!(benches);
