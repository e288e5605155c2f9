use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use datastructs::bit_vector::BitVector;

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, SamplingMode,
};

const SAMPLE_SIZE: usize = 30;
const WARM_UP_TIME: Duration = Duration::from_secs(3);
const MEASURE_TIME: Duration = Duration::from_secs(5);

const SEED_QUERIES: u64 = 114514;
const NUM_QUERIES: usize = 1000;
const VECTOR_LEN: usize = 1024;

fn gen_random_ints(len: usize, min: usize, max: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(min..max)).collect()
}

fn configure(group: &mut BenchmarkGroup<WallTime>) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);
}

fn criterion_bitvec_alloc(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing_bitvec_alloc");
    configure(&mut group);

    group.bench_function("allocation", |b| {
        b.iter(|| BitVector::new(VECTOR_LEN));
    });
    group.bench_function("reallocation", |b| {
        b.iter(|| {
            let mut v = BitVector::new(VECTOR_LEN);
            v.set(VECTOR_LEN + 100, true).unwrap();
            v
        });
    });
}

fn criterion_bitvec_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing_bitvec_set");
    configure(&mut group);

    let queries = gen_random_ints(NUM_QUERIES, 0, VECTOR_LEN, SEED_QUERIES);
    perform_set(&mut group, &queries, true);
    perform_set(&mut group, &queries, false);

    group.bench_function("set_all_manual", |b| {
        let mut v = BitVector::new(VECTOR_LEN);
        b.iter(|| {
            for i in 0..VECTOR_LEN {
                v.set(i, true).unwrap();
            }
        });
    });
}

fn perform_set(group: &mut BenchmarkGroup<WallTime>, queries: &[usize], bit: bool) {
    group.bench_function(format!("set_{bit}"), |b| {
        let mut v = BitVector::new(VECTOR_LEN);
        b.iter(|| {
            for &q in queries {
                v.set(q, bit).unwrap();
            }
        });
    });
}

fn criterion_bitvec_logical(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing_bitvec_logical");
    configure(&mut group);

    let mut v = BitVector::new(VECTOR_LEN);
    for q in gen_random_ints(NUM_QUERIES, 0, VECTOR_LEN, SEED_QUERIES) {
        v.set(q, true).unwrap();
    }
    let w = v.clone();

    group.bench_function("not", |b| {
        let mut x = v.clone();
        b.iter(|| x.negate());
    });
    group.bench_function("or", |b| {
        let mut x = v.clone();
        b.iter(|| x.or_with(&w));
    });
    group.bench_function("and", |b| {
        let mut x = v.clone();
        b.iter(|| x.and_with(&w));
    });
    group.bench_function("equal", |b| {
        b.iter(|| v == w);
    });
}

criterion_group!(
    benches,
    criterion_bitvec_alloc,
    criterion_bitvec_set,
    criterion_bitvec_logical
);

criterion_main!(benches);
