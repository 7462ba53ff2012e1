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

use statrs::distribution::{ContinuousCDF, Normal};

use crate::utils::{from_usize, mean, quantile_sorted, Value};
use crate::Error;

/// Two-sided confidence interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval<F> {
    /// Lower bound
    pub lower: F,
    /// Upper bound
    pub upper: F,
    /// Confidence level, e.g. 0.95
    pub level: F,
}

impl<F: Value> ConfidenceInterval<F> {
    /// `true` if `x` lies within the bounds (inclusive).
    pub fn contains(&self, x: F) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// `upper - lower`
    pub fn width(&self) -> F {
        self.upper - self.lower
    }
}

impl<F: Value + fmt::Display> fmt::Display for ConfidenceInterval<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // at most 6 decimals of percent: 0.07 prints as 7, not 7.000000000000001
        let scale = from_usize::<F>(1_000_000);
        let pct = (self.level * from_usize::<F>(100) * scale).round() / scale;
        match f.precision() {
            Some(p) => write!(
                f,
                "{}% CI [{:.p$}, {:.p$}]",
                pct,
                self.lower,
                self.upper,
                p = p
            ),
            None => write!(f, "{}% CI [{}, {}]", pct, self.lower, self.upper),
        }
    }
}

fn check_distribution<F: Value>(distribution: &[F]) -> Result<(), Error> {
    if distribution.len() < 2 {
        return Err(Error::InsufficientData(format!(
            "distribution has {} value(s), at least 2 are needed",
            distribution.len()
        )));
    }
    if distribution.iter().any(|v| v.is_nan()) {
        return Err(Error::InvalidParameter(
            "distribution contains NaN".to_string(),
        ));
    }
    Ok(())
}

/// Percentile confidence interval from an empirical distribution.
///
/// The bounds are the `(1 - level) / 2` and `1 - (1 - level) / 2` quantiles of the
/// distribution, interpolated linearly between order statistics (type 7, as R's
/// `quantile` and NumPy's default). Other quantile conventions can differ in the
/// third decimal for a few hundred values.
///
/// `level` must be in `(0, 1]`; `1` gives the full range of the distribution.
///
/// # Example
///
/// ```rust
/// use resampling_ht::prelude::*;
///
/// let distribution = (0..=100).map(|i| i as f64).collect::<Vec<_>>();
/// let ci = confidence_interval(&distribution, 0.9).unwrap();
/// assert!((ci.lower - 5.0).abs() < 1e-9);
/// assert!((ci.upper - 95.0).abs() < 1e-9);
/// ```
pub fn confidence_interval<F: Value>(
    distribution: &[F],
    level: F,
) -> Result<ConfidenceInterval<F>, Error> {
    if !(level > F::zero() && level <= F::one()) {
        return Err(Error::InvalidParameter(format!(
            "confidence level {:?} is not in (0, 1]",
            level
        )));
    }
    check_distribution(distribution)?;

    let mut sorted = distribution.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let two = F::one() + F::one();
    let alpha = (F::one() - level) / two;

    Ok(ConfidenceInterval {
        lower: quantile_sorted(&sorted, alpha),
        upper: quantile_sorted(&sorted, F::one() - alpha),
        level,
    })
}

/// Standard deviation of a bootstrap distribution (`n - 1` denominator).
pub fn standard_error<F: Value>(distribution: &[F]) -> Result<F, Error> {
    check_distribution(distribution)?;

    let m = mean(distribution);
    let ss = distribution.iter().map(|&x| (x - m) * (x - m)).sum::<F>();
    Ok((ss / from_usize::<F>(distribution.len() - 1)).sqrt())
}

/// Normal-theory confidence interval `point_estimate +/- z * se`.
///
/// `se` is the [`standard_error`] of the bootstrap distribution and `z` the
/// `1 - (1 - level) / 2` quantile of the standard normal. Only sensible when the
/// bootstrap distribution is roughly symmetric and bell-shaped. `level` must be in
/// `(0, 1)`.
pub fn standard_error_interval<F: Value>(
    distribution: &[F],
    point_estimate: F,
    level: F,
) -> Result<ConfidenceInterval<F>, Error> {
    if !(level > F::zero() && level < F::one()) {
        return Err(Error::InvalidParameter(format!(
            "confidence level {:?} is not in (0, 1)",
            level
        )));
    }
    let se = standard_error(distribution)?;

    let level_ = level
        .to_f64()
        .ok_or_else(|| Error::InvalidParameter(format!("confidence level {:?}", level)))?;
    let normal = Normal::new(0.0, 1.0).map_err(|e| Error::InvalidParameter(e.to_string()))?;
    let z = F::from(normal.inverse_cdf(1.0 - (1.0 - level_) / 2.0))
        .ok_or_else(|| Error::InvalidParameter(format!("confidence level {:?}", level)))?;

    Ok(ConfidenceInterval {
        lower: point_estimate - z * se,
        upper: point_estimate + z * se,
        level,
    })
}
