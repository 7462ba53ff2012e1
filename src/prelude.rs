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

//! Resampling inference for two groups
//!
//! In cases where we have no idea what the distribution of the test statistic is, we
//! still want to be able to estimate an effect and test whether it is real, and we are
//! willing to make the hypothesis that the samples we have are representative of the
//! population.
//!
//! Two resampling procedures cover this:
//! - the **bootstrap** resamples each group with replacement to approximate the
//!   sampling distribution of the statistic; its percentiles give a confidence
//!   interval ([`bootstrap_distribution`], [`confidence_interval`]).
//! - the **permutation test** reshuffles the group labels to build the distribution of
//!   the statistic under H0 (no association between label and value); the fraction
//!   of permutations at least as extreme as the observed statistic is the p-value
//!   ([`permutation_null_distribution`], [`p_value`]).
//!
//! Every random procedure takes an explicit `u64` seed: the same seed always gives
//! the same distribution, including with the `parallel` feature.
//!
//! A p-value of 0 only means that none of the `n` permutations was as extreme as the
//! observed statistic: report it as `< 1/n` ([`format_p_value`]).
//!
//! # References
//! - [Bootstrapping](https://en.wikipedia.org/wiki/Bootstrapping_(statistics))
//! - [Permutation test](https://en.wikipedia.org/wiki/Permutation_test)
//! - [P-value](https://en.wikipedia.org/wiki/P-value)
//! - [Sample quantiles in statistical packages, Hyndman & Fan (1996)](https://doi.org/10.2307/2684934)
//!
//! # Example
//!
//! ```rust
//! use resampling_ht::prelude::*;
//!
//! let sample = Sample::from_groups(
//!     "Action",
//!     &[4.8f64, 5.5, 6.1, 4.2, 5.0, 5.9, 4.4, 5.3, 6.0, 4.9],
//!     "Comedy",
//!     &[6.3f64, 5.8, 7.1, 6.6, 5.9, 6.8, 7.4, 6.0, 6.5, 6.9],
//! )
//! .unwrap();
//!
//! let observed = observed_statistic(&sample, &"Action", &"Comedy").unwrap();
//! assert!((observed - (5.21 - 6.53)).abs() < 1e-9);
//!
//! let groups = sample.split(&"Action", &"Comedy").unwrap();
//!
//! let bootstrap = bootstrap_distribution(&groups, 1_000, 42).unwrap();
//! let ci = confidence_interval(&bootstrap, 0.95).unwrap();
//! assert!(ci.lower <= observed && observed <= ci.upper);
//!
//! let null = permutation_null_distribution(&groups, 5_000, 43).unwrap();
//! let p = p_value(&null, observed, "two-sided".parse().unwrap()).unwrap();
//! println!("{:.3}, p-value {}", ci, format_p_value(p, null.len()));
//!
//! // or all at once
//! let result = analyze(&sample, &"Action", &"Comedy", &InferenceConfig::default()).unwrap();
//! assert_eq!(result.observed, observed);
//! ```

pub use crate::analysis::{
    analyze, analyze_groups, observed_statistic, observed_statistic_with, InferenceResult,
};
pub use crate::bootstrap::{bootstrap_distribution, bootstrap_distribution_with};
pub use crate::config::InferenceConfig;
pub use crate::interval::{
    confidence_interval, standard_error, standard_error_interval, ConfidenceInterval,
};
pub use crate::permutation::{permutation_null_distribution, permutation_null_distribution_with};
pub use crate::pvalue::{format_p_value, p_value, Direction};
pub use crate::sample::{Groups, Observation, Sample};
pub use crate::statistic::{DifferenceInMeans, Statistic};
pub use crate::utils::Value;
pub use crate::Error;
