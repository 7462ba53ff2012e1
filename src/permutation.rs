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

use rand::prelude::SliceRandom;
use rand::Rng;

use crate::sample::{split_by_mask_into, Groups};
use crate::statistic::{DifferenceInMeans, Statistic};
use crate::utils::{replicate, Value};
use crate::Error;

/// Randomly reassign the group labels of `groups` into `a_` and `b_`.
///
/// The label mask of `groups` is shuffled into `in_a` and the values, taken in
/// canonical order, are dealt to `a_` (mask `true`) or `b_`. The shuffle only
/// depends on the rng and the number of values, so the same rng state relabels
/// `groups.swapped()` with the exact negation of the mask.
pub fn permute_into<F: Value, R: Rng + ?Sized>(
    rng: &mut R,
    groups: &Groups<F>,
    in_a: &mut [bool],
    a_: &mut Vec<F>,
    b_: &mut Vec<F>,
) {
    in_a.copy_from_slice(groups.in_a());
    in_a.shuffle(rng);
    split_by_mask_into(groups.pooled(), in_a, a_, b_);
}

/// Permutation null distribution of the difference in means of `groups`.
///
/// See [`permutation_null_distribution_with`].
pub fn permutation_null_distribution<F: Value>(
    groups: &Groups<F>,
    n_reps: usize,
    seed: u64,
) -> Result<Vec<F>, Error> {
    permutation_null_distribution_with(groups, &DifferenceInMeans, n_reps, seed)
}

/// Permutation null distribution of `statistic`.
///
/// # Description
///
/// The null hypothesis is that there is no association between the group label and
/// the value. Under H0 any assignment of the labels is as likely as the observed
/// one, so for each of the `n_reps` repetitions the group labels are shuffled over
/// the values (kept in their canonical order) and `statistic` is computed on the
/// relabelled sample.
///
/// Group sizes are preserved and every value is used exactly once per repetition.
/// As for the bootstrap, the output is fully determined by `seed`. With an
/// antisymmetric statistic such as [`DifferenceInMeans`], the distribution for
/// `groups.swapped()` is the exact negation of the one for `groups`.
pub fn permutation_null_distribution_with<F: Value, S: Statistic<F> + ?Sized>(
    groups: &Groups<F>,
    statistic: &S,
    n_reps: usize,
    seed: u64,
) -> Result<Vec<F>, Error> {
    if n_reps == 0 {
        return Err(Error::InsufficientData(
            "at least one permutation is needed".to_string(),
        ));
    }

    tracing::debug!(
        n_reps,
        seed,
        n_a = groups.n_a(),
        n_b = groups.n_b(),
        "generating permutation null distribution"
    );

    let t_stat_dist = replicate(
        n_reps,
        seed,
        || {
            (
                vec![false; groups.len()],
                Vec::with_capacity(groups.n_a()),
                Vec::with_capacity(groups.n_b()),
            )
        },
        |(in_a, a_, b_): &mut (Vec<bool>, Vec<F>, Vec<F>), rng| {
            permute_into(rng, groups, in_a, a_, b_);
            statistic.compute(a_, b_)
        },
    );

    Ok(t_stat_dist)
}
