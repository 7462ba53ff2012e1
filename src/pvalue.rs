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
use std::str::FromStr;

use crate::utils::{from_usize, Value};
use crate::Error;

/// Part of the null distribution to use for the p-value
/// https://en.wikipedia.org/wiki/P-value#Probability_of_obtaining_a_real-valued_test_statistic_at_least_as_extreme_as_the_one_actually_obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// One-sided test (left tail)
    /// Pr(T <= t | H0)
    #[cfg_attr(feature = "serde", serde(alias = "less"))]
    Left,
    /// One-sided test (right tail)
    /// Pr(T >= t | H0)
    #[cfg_attr(feature = "serde", serde(alias = "greater"))]
    Right,
    /// Two-sided test - symmetric with respect to 0
    /// Pr(|T| >= |t| | H0)
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "two-sided", alias = "two_sided"))]
    Both,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "less" => Ok(Direction::Left),
            "right" | "greater" => Ok(Direction::Right),
            "both" | "two-sided" | "two_sided" => Ok(Direction::Both),
            other => Err(Error::InvalidParameter(format!(
                "unknown direction {:?}, expected \"left\", \"right\" or \"both\"",
                other
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Both => write!(f, "both"),
        }
    }
}

/// p-value of `observed` against a null distribution.
///
/// # Description
///
/// The p-value is the fraction of the null distribution at least as extreme as
/// `observed`, extreme being defined by `direction`:
/// - [`Direction::Both`]: `|v| >= |observed|`
/// - [`Direction::Right`]: `v >= observed`
/// - [`Direction::Left`]: `v <= observed`
///
/// Comparisons are inclusive, so 0 is only returned when no draw at all is as
/// extreme as `observed`.
///
/// **A p-value of 0 does not mean 0**: the resolution of the test is
/// `1 / null_distribution.len()` and the p-value must be reported as lower than
/// that (see [`format_p_value`]).
pub fn p_value<F: Value>(
    null_distribution: &[F],
    observed: F,
    direction: Direction,
) -> Result<F, Error> {
    let n_reps = null_distribution.len();
    if n_reps == 0 {
        return Err(Error::InsufficientData(
            "empty null distribution".to_string(),
        ));
    }
    if !observed.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "observed statistic {:?} is not finite",
            observed
        )));
    }
    if null_distribution.iter().any(|v| v.is_nan()) {
        return Err(Error::InvalidParameter(
            "null distribution contains NaN".to_string(),
        ));
    }

    let extreme = match direction {
        Direction::Both => {
            let t = observed.abs();
            null_distribution.iter().filter(|v| v.abs() >= t).count()
        }
        Direction::Right => null_distribution.iter().filter(|&&v| v >= observed).count(),
        Direction::Left => null_distribution.iter().filter(|&&v| v <= observed).count(),
    };

    if extreme == 0 {
        tracing::warn!(
            n_reps,
            %direction,
            "no null draw is as extreme as the observed statistic; p-value < 1/{}",
            n_reps
        );
    }

    Ok(from_usize::<F>(extreme) / from_usize::<F>(n_reps))
}

/// Format a p-value computed from `n_reps` null draws.
///
/// A p-value of 0 is written `< 1/n_reps` (e.g. `"< 0.0002"` for 5000 draws). The
/// bound is rounded up to the printed precision, never below `1/n_reps`.
pub fn format_p_value<F: Value>(p: F, n_reps: usize) -> String {
    let n = n_reps.max(1) as u128;

    // smallest number of decimals with 10^digits >= n
    let mut digits = 1;
    let mut scale: u128 = 10;
    while scale < n {
        digits += 1;
        scale *= 10;
    }

    let p = p.to_f64().unwrap_or(f64::NAN);
    if p == 0.0 {
        // ceil(scale / n) / scale
        let units = (scale + n - 1) / n;
        format!(
            "< {:.digits$}",
            units as f64 / scale as f64,
            digits = digits
        )
    } else {
        format!("{:.digits$}", p, digits = digits.max(4))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_directions() {
        let null = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0];

        assert_relative_eq!(p_value(&null, 2.0, Direction::Right).unwrap(), 3.0 / 8.0);
        assert_relative_eq!(p_value(&null, 2.0, Direction::Left).unwrap(), 6.0 / 8.0);
        // |v| >= 2: -3, -2, 2, 3, 4
        assert_relative_eq!(p_value(&null, 2.0, Direction::Both).unwrap(), 5.0 / 8.0);
        assert_relative_eq!(p_value(&null, -2.0, Direction::Both).unwrap(), 5.0 / 8.0);
    }

    #[test]
    fn test_inclusive_comparison() {
        let null = [1.0, 1.0, 1.0, 1.0];
        assert_relative_eq!(p_value(&null, 1.0, Direction::Right).unwrap(), 1.0);
        assert_relative_eq!(p_value(&null, 1.0, Direction::Both).unwrap(), 1.0);
        assert_relative_eq!(p_value(&null, 1.5, Direction::Both).unwrap(), 0.0);
    }

    #[test]
    fn test_monotonic_in_observed() {
        let null = (0..200)
            .map(|i| ((i * 37) % 101) as f64 / 10.0 - 5.0)
            .collect::<Vec<_>>();

        let mut previous = 1.0;
        for k in 0..80 {
            let t = k as f64 / 10.0;
            let p = p_value(&null, t, Direction::Both).unwrap();
            assert!(p <= previous, "p-value increased at |t| = {}", t);
            assert_eq!(p, p_value(&null, -t, Direction::Both).unwrap());
            previous = p;
        }
        assert_eq!(previous, 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            p_value::<f64>(&[], 1.0, Direction::Both),
            Err(Error::InsufficientData(_))
        ));
        assert!(matches!(
            p_value(&[1.0], f64::NAN, Direction::Both),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_nan_in_null_distribution() {
        let null = [f64::NAN, f64::NAN, 1.0, 2.0];
        for direction in [Direction::Left, Direction::Right, Direction::Both] {
            assert!(matches!(
                p_value(&null, 1.5, direction),
                Err(Error::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("greater".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("Two-Sided".parse::<Direction>().unwrap(), Direction::Both);
        assert_eq!("both".parse::<Direction>().unwrap(), Direction::Both);
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(Error::InvalidParameter(_))
        ));
        assert_eq!(Direction::default().to_string(), "both");
    }

    #[test]
    fn test_format_p_value() {
        assert_eq!(format_p_value(0.0, 5_000), "< 0.0002");
        assert_eq!(format_p_value(0.0, 1_000), "< 0.001");
        assert_eq!(format_p_value(0.0, 10_000), "< 0.0001");
        assert_eq!(format_p_value(0.0, 1), "< 1.0");
        assert_eq!(format_p_value(0.0418, 10_000), "0.0418");
        assert_eq!(format_p_value(0.5f32, 100), "0.5000");
    }

    #[test]
    fn test_format_zero_p_value_bound_not_below_resolution() {
        // 1/3 = 0.333, 1/7 = 0.143, 1/3000 = 0.000333, 1/6000 = 0.000167
        assert_eq!(format_p_value(0.0, 3), "< 0.4");
        assert_eq!(format_p_value(0.0, 7), "< 0.2");
        assert_eq!(format_p_value(0.0, 3_000), "< 0.0004");
        assert_eq!(format_p_value(0.0, 6_000), "< 0.0002");

        for n in [3, 7, 13, 999, 3_000, 6_000, 12_345, 99_999] {
            let bound = format_p_value(0.0, n)
                .trim_start_matches("< ")
                .parse::<f64>()
                .unwrap();
            assert!(bound >= 1.0 / n as f64, "n={} bound={}", n, bound);
        }
    }
}
