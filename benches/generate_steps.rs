use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use spiral_engine::{
    CurveKinds, ParamOverrides, RainbowRamp, build_params, curve_algorithm_factory,
    generate_steps, generate_steps_batch_rayon,
};

fn bench_families(c: &mut Criterion) {
    let overrides = ParamOverrides::default();

    for &kind in CurveKinds::ALL {
        let params = build_params(kind, &overrides).expect("family defaults are valid");
        let algorithm = curve_algorithm_factory(params);

        c.bench_function(kind.identifier(), |b| {
            b.iter(|| generate_steps(black_box(algorithm.as_ref()), &RainbowRamp));
        });
    }
}

fn bench_batch(c: &mut Criterion) {
    let overrides = ParamOverrides::default();
    let algorithms: Vec<_> = CurveKinds::ALL
        .iter()
        .map(|&kind| {
            curve_algorithm_factory(build_params(kind, &overrides).expect("family defaults are valid"))
        })
        .collect();

    c.bench_function("all-families-batch-rayon", |b| {
        b.iter(|| generate_steps_batch_rayon(black_box(&algorithms), &RainbowRamp));
    });
}

criterion_group!(benches, bench_families, bench_batch);
criterion_main!(benches);
