use criterion::Criterion;
use monke::{individual::Individual, random::WyRng, score};
use std::hint::black_box;

const TARGET: &[u8] = b"It was the best of times, it was the worst of times";

fn bench_score(bench: &mut Criterion) {
    let mut rng = WyRng::seeded(1);
    let ind = Individual::random(TARGET.len(), &mut rng);

    bench.bench_function("score", |b| {
        b.iter(|| score(black_box(&ind.genes), black_box(TARGET)))
    });
}

pub fn benches() {
    #[cfg(not(feature = "smol_bench"))]
    let mut criterion: criterion::Criterion<_> = Criterion::default()
        .sample_size(1000)
        .significance_level(0.1);
    #[cfg(feature = "smol_bench")]
    let mut criterion: criterion::Criterion<_> = {
        use core::time::Duration;
        Criterion::default()
            .measurement_time(Duration::from_millis(1))
            .sample_size(10)
            .nresamples(1)
            .without_plots()
            .configure_from_args()
    };
    bench_score(&mut criterion);
}

fn main() {
    benches();
    criterion::Criterion::default()
        .configure_from_args()
        .final_summary();
}
