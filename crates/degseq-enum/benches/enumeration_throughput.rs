use criterion::{black_box, criterion_group, criterion_main, Criterion};
use degseq_core::DegreeSequence;
use degseq_enum::{enumerate_with_options, is_graphical, DedupMode, EnumerateOptions, Strategy};

fn enumeration_bench(c: &mut Criterion) {
    let sequence = DegreeSequence::new(vec![3, 3, 3, 3, 2, 2, 2]);

    c.bench_function("erdos_gallai_64", |b| {
        let degrees: Vec<i64> = (0..64).map(|idx| (idx % 9) as i64).collect();
        b.iter(|| black_box(is_graphical(&degrees)));
    });

    for (label, strategy, dedup) in [
        ("exhaustive_pairwise", Strategy::Exhaustive, DedupMode::Pairwise),
        ("exhaustive_canonical", Strategy::Exhaustive, DedupMode::Canonical),
        ("switching_canonical", Strategy::Switching, DedupMode::Canonical),
    ] {
        let options = EnumerateOptions {
            strategy,
            dedup,
            ..EnumerateOptions::default()
        };
        c.bench_function(label, |b| {
            b.iter(|| black_box(enumerate_with_options(&sequence, &options, None).unwrap()));
        });
    }
}

criterion_group!(benches, enumeration_bench);
criterion_main!(benches);
