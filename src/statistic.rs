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

use crate::utils::{mean, Value};

/// A test statistic computed on the two groups of a (possibly resampled) sample.
///
/// Implemented for any `Fn(&[F], &[F]) -> F`, so plain closures can be used:
///
/// ```rust
/// use resampling_ht::prelude::*;
///
/// // difference of the maxima
/// let max_diff = |a: &[f64], b: &[f64]| {
///     let a_max = a.iter().copied().fold(f64::NAN, f64::max);
///     let b_max = b.iter().copied().fold(f64::NAN, f64::max);
///     a_max - b_max
/// };
/// assert_eq!(max_diff.compute(&[1.0, 4.0], &[2.0, 3.0]), 1.0);
/// ```
pub trait Statistic<F>: Sync {
    /// Value of the statistic for groups `a` and `b`.
    fn compute(&self, a: &[F], b: &[F]) -> F;
}

impl<F, T> Statistic<F> for T
where
    T: Fn(&[F], &[F]) -> F + Sync,
{
    fn compute(&self, a: &[F], b: &[F]) -> F {
        self(a, b)
    }
}

/// `mean(a) - mean(b)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifferenceInMeans;

impl<F: Value> Statistic<F> for DifferenceInMeans {
    fn compute(&self, a: &[F], b: &[F]) -> F {
        mean(a) - mean(b)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_difference_in_means() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0, 7.0];
        assert_relative_eq!(DifferenceInMeans.compute(&a, &b), 2.0 - 5.5);
        assert_relative_eq!(DifferenceInMeans.compute(&b, &a), 5.5 - 2.0);
    }

    #[test]
    fn test_fn_as_statistic() {
        fn median_of_first(a: &[f64], _b: &[f64]) -> f64 {
            a[a.len() / 2]
        }
        assert_eq!(median_of_first.compute(&[1.0, 9.0, 3.0], &[]), 9.0);
    }
}
