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

use rand::Rng;

use crate::sample::Groups;
use crate::statistic::{DifferenceInMeans, Statistic};
use crate::utils::{replicate, Value};
use crate::Error;

// FUTURE(ssoudan) BCa intervals need the jackknife of the statistic

/// Draw a bootstrap resample of `groups` into `a_` and `b_`.
///
/// Each group is resampled with replacement from its own values only;
/// `a_` and `b_` must have the sizes of groups `a` and `b`.
pub fn resample_into<F: Value, R: Rng + ?Sized>(
    rng: &mut R,
    groups: &Groups<F>,
    a_: &mut [F],
    b_: &mut [F],
) {
    let a = groups.a();
    let b = groups.b();
    debug_assert_eq!(a.len(), a_.len());
    debug_assert_eq!(b.len(), b_.len());

    for a__ in a_.iter_mut() {
        *a__ = a[rng.gen_range(0..a.len())];
    }

    for b__ in b_.iter_mut() {
        *b__ = b[rng.gen_range(0..b.len())];
    }
}

/// Bootstrap distribution of the difference in means of `groups`.
///
/// See [`bootstrap_distribution_with`].
pub fn bootstrap_distribution<F: Value>(
    groups: &Groups<F>,
    n_reps: usize,
    seed: u64,
) -> Result<Vec<F>, Error> {
    bootstrap_distribution_with(groups, &DifferenceInMeans, n_reps, seed)
}

/// Bootstrap distribution of `statistic`.
///
/// # Description
///
/// For each of the `n_reps` repetitions, both groups are independently resampled
/// with replacement, each up to its original size, and `statistic` is computed on
/// the resample. The values are returned in repetition order (not sorted).
///
/// The output only depends on `groups`, `statistic`, `n_reps` and `seed`: running
/// twice with the same seed gives the same distribution, with or without the
/// `parallel` feature.
///
/// # Example
///
/// ```rust
/// use resampling_ht::prelude::*;
///
/// let groups = Groups::new(&[4.0f64, 5.0, 6.0, 5.5], &[6.0, 7.0, 6.5]).unwrap();
/// let distribution = bootstrap_distribution(&groups, 1_000, 42).unwrap();
///
/// assert_eq!(distribution.len(), 1_000);
/// assert_eq!(distribution, bootstrap_distribution(&groups, 1_000, 42).unwrap());
/// ```
pub fn bootstrap_distribution_with<F: Value, S: Statistic<F> + ?Sized>(
    groups: &Groups<F>,
    statistic: &S,
    n_reps: usize,
    seed: u64,
) -> Result<Vec<F>, Error> {
    if n_reps == 0 {
        return Err(Error::InsufficientData(
            "at least one bootstrap repetition is needed".to_string(),
        ));
    }

    tracing::debug!(
        n_reps,
        seed,
        n_a = groups.n_a(),
        n_b = groups.n_b(),
        "generating bootstrap distribution"
    );

    let n_a = groups.n_a();
    let n_b = groups.n_b();

    let t_stat_dist = replicate(
        n_reps,
        seed,
        || (vec![F::zero(); n_a], vec![F::zero(); n_b]),
        |(a_, b_): &mut (Vec<F>, Vec<F>), rng| {
            resample_into(rng, groups, a_, b_);
            statistic.compute(a_, b_)
        },
    );

    Ok(t_stat_dist)
}
