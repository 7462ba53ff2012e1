// Copyright (c) 2022. Sebastien Soudan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http:www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Resampling distributions benchmark
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::Distribution;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use resampling_ht::prelude::{bootstrap_distribution, permutation_null_distribution, Groups};

const REPETITIONS: usize = 10_000;

fn groups_of_size(size: usize) -> Groups<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(123);

    // group a: `size` values with mean 0 and standard deviation 1
    let normal_a = Normal::new(0., 1.0).unwrap();
    let s_a = normal_a
        .sample_iter(&mut rng)
        .take(size)
        .collect::<Vec<f64>>();

    // group b: `size` values with mean 0.5 and standard deviation 1
    let normal_b = Normal::new(0.5, 1.0).unwrap();
    let s_b = normal_b
        .sample_iter(&mut rng)
        .take(size)
        .collect::<Vec<f64>>();

    Groups::new(&s_a, &s_b).unwrap()
}

fn bootstrap_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap_distribution");
    for size in [10, 100, 200, 500, 1000] {
        let groups = groups_of_size(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &groups, |b, groups| {
            b.iter(|| bootstrap_distribution(groups, REPETITIONS, 42))
        });
    }
    group.finish();
}

fn permutation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutation_null_distribution");
    for size in [10, 100, 200, 500, 1000] {
        let groups = groups_of_size(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &groups, |b, groups| {
            b.iter(|| permutation_null_distribution(groups, REPETITIONS, 42))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(20));
    targets = bootstrap_benchmark, permutation_benchmark
}
criterion_main!(benches);
