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

use std::fmt;

use crate::bootstrap::bootstrap_distribution_with;
use crate::config::InferenceConfig;
use crate::interval::{confidence_interval, ConfidenceInterval};
use crate::permutation::permutation_null_distribution_with;
use crate::pvalue::{format_p_value, p_value, Direction};
use crate::sample::{Groups, Sample};
use crate::statistic::{DifferenceInMeans, Statistic};
use crate::utils::Value;
use crate::Error;

/// `mean(group_a) - mean(group_b)` on `sample`.
///
/// Fails with [`Error::InsufficientData`] if one of the groups has no observation.
pub fn observed_statistic<L, F>(sample: &Sample<L, F>, group_a: &L, group_b: &L) -> Result<F, Error>
where
    L: PartialEq + fmt::Debug,
    F: Value,
{
    observed_statistic_with(sample, group_a, group_b, &DifferenceInMeans)
}

/// `statistic` on the groups `group_a` and `group_b` of `sample`.
pub fn observed_statistic_with<L, F, S>(
    sample: &Sample<L, F>,
    group_a: &L,
    group_b: &L,
    statistic: &S,
) -> Result<F, Error>
where
    L: PartialEq + fmt::Debug,
    F: Value,
    S: Statistic<F> + ?Sized,
{
    Ok(sample.split(group_a, group_b)?.statistic(statistic))
}

/// Outcome of a two-group analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceResult<F> {
    /// Statistic on the observed sample
    pub observed: F,
    /// Percentile interval of the bootstrap distribution
    pub confidence_interval: ConfidenceInterval<F>,
    /// p-value against the permutation null distribution
    pub p_value: F,
    /// Tail(s) used for the p-value
    pub direction: Direction,
    /// Bootstrap distribution, in repetition order
    pub bootstrap_distribution: Vec<F>,
    /// Permutation null distribution, in repetition order
    pub null_distribution: Vec<F>,
}

impl<F: Value + fmt::Display> fmt::Display for InferenceResult<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = format_p_value(self.p_value, self.null_distribution.len());
        let sep = if p.starts_with('<') { "" } else { "= " };
        write!(
            f,
            "observed = {:.4}, {:.4}, p-value ({}) {}{}",
            self.observed, self.confidence_interval, self.direction, sep, p
        )
    }
}

/// Difference in means of `group_a` and `group_b`, with its bootstrap confidence
/// interval and permutation p-value.
///
/// See [`analyze_groups`].
pub fn analyze<L, F>(
    sample: &Sample<L, F>,
    group_a: &L,
    group_b: &L,
    config: &InferenceConfig,
) -> Result<InferenceResult<F>, Error>
where
    L: PartialEq + fmt::Debug,
    F: Value,
{
    let groups = sample.split(group_a, group_b)?;
    analyze_groups(&groups, &DifferenceInMeans, config)
}

/// Observed `statistic`, bootstrap confidence interval and permutation p-value.
///
/// The bootstrap stream is seeded with `config.seed` and the permutation stream
/// with [`InferenceConfig::permutation_seed`].
pub fn analyze_groups<F, S>(
    groups: &Groups<F>,
    statistic: &S,
    config: &InferenceConfig,
) -> Result<InferenceResult<F>, Error>
where
    F: Value,
    S: Statistic<F> + ?Sized,
{
    config.validate()?;
    let level = F::from(config.confidence_level).ok_or_else(|| {
        Error::InvalidParameter(format!(
            "confidence level {} is not representable",
            config.confidence_level
        ))
    })?;

    let observed = groups.statistic(statistic);

    let bootstrap_distribution =
        bootstrap_distribution_with(groups, statistic, config.bootstrap_reps, config.seed)?;
    let confidence_interval = confidence_interval(&bootstrap_distribution, level)?;

    let null_distribution = permutation_null_distribution_with(
        groups,
        statistic,
        config.permutation_reps,
        config.permutation_seed(),
    )?;
    let p_value = p_value(&null_distribution, observed, config.direction)?;

    tracing::debug!(
        ?observed,
        lower = ?confidence_interval.lower,
        upper = ?confidence_interval.upper,
        ?p_value,
        direction = %config.direction,
        "two-group analysis done"
    );

    Ok(InferenceResult {
        observed,
        confidence_interval,
        p_value,
        direction: config.direction,
        bootstrap_distribution,
        null_distribution,
    })
}
