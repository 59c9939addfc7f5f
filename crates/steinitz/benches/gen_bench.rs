//! Criterion microbenches for the polytope-graph generators.
//!
//! - Truncation sequences from the cube (1–8 and 16–32 truncations), next + regen.
//! - Family enumerator over prisms/bipyramids.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use steinitz::api::{
    PolytopeGenerator, Solid, SolidFamily, SolidFamilyEnumerator, SolidFamilyParams,
    TruncationGenerator, TruncationParams,
};

fn bench_truncation_gen(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_truncation");
    for (label, min, max) in [("1-8", 1usize, 8usize), ("16-32", 16, 32)] {
        let params = TruncationParams {
            base: Solid::CUBE,
            truncations_min: min,
            truncations_max: max,
        };
        group.bench_function(BenchmarkId::new("generate_single", label), |b| {
            b.iter_batched(
                || StdRng::seed_from_u64(123).gen::<u64>(),
                |seed| {
                    let _ = TruncationGenerator::generate_single(&params, seed).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(BenchmarkId::new("regen", label), |b| {
            b.iter_batched(
                || {
                    let mut gen = TruncationGenerator::new(params.clone(), 2025).unwrap();
                    let s = gen.generate_next().unwrap().unwrap();
                    (gen, s.replay)
                },
                |(gen, replay)| {
                    let _ = gen.regenerate(&replay).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_family_enum(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_families");
    let params = SolidFamilyParams {
        families: vec![SolidFamily::Prism, SolidFamily::Bipyramid],
        n_min: 3,
        n_max: 20,
    };
    group.bench_function(BenchmarkId::new("drain", "3-20"), |b| {
        b.iter_batched(
            || SolidFamilyEnumerator::new(params.clone()).unwrap(),
            |mut gen| while let Some(_s) = gen.generate_next().unwrap() {},
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_truncation_gen, bench_family_enum);
criterion_main!(benches);
