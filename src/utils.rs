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

use std::fmt::Debug;
use std::iter::Sum;

use num_traits::Float;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Floating point types the resampling procedures work with (`f32`, `f64`).
pub trait Value: Float + Sum + Send + Sync + Debug {}

impl<T: Float + Sum + Send + Sync + Debug> Value for T {}

/// `n` as a float. Cannot fail for the primitive float types.
pub(crate) fn from_usize<F: Float>(n: usize) -> F {
    F::from(n).unwrap_or_else(F::nan)
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean<F: Value>(values: &[F]) -> F {
    values.iter().copied().sum::<F>() / from_usize::<F>(values.len())
}

/// Quantile `p` of an already sorted, non-empty slice.
///
/// Linear interpolation between order statistics (Hyndman & Fan type 7, the
/// default of R's `quantile` and NumPy's `"linear"` method):
/// `h = (n - 1) * p`, `q = x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])`.
pub fn quantile_sorted<F: Value>(sorted: &[F], p: F) -> F {
    let n = sorted.len();
    debug_assert!(n > 0, "quantile of an empty slice");

    let h = from_usize::<F>(n - 1) * p.max(F::zero()).min(F::one());
    let lo = h.floor();
    let i = lo.to_usize().unwrap_or(0).min(n - 1);
    if i + 1 >= n {
        return sorted[n - 1];
    }

    sorted[i] + (h - lo) * (sorted[i + 1] - sorted[i])
}

/// RNG for one resampling iteration.
///
/// Every iteration reads its own ChaCha stream keyed by `seed`, so the draws of
/// iteration `i` do not depend on which thread runs it or in which order.
pub fn iteration_rng(seed: u64, iteration: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(iteration as u64);
    rng
}

/// Run `step` `n_reps` times and collect the results in iteration order.
///
/// `init` builds the per-worker scratch state. With the `parallel` feature the
/// iterations are spread over the rayon pool.
pub(crate) fn replicate<T, S, I, G>(n_reps: usize, seed: u64, init: I, step: G) -> Vec<T>
where
    T: Send,
    I: Fn() -> S + Sync + Send,
    G: Fn(&mut S, &mut ChaCha8Rng) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..n_reps)
            .into_par_iter()
            .map_init(init, |state, i| {
                let mut rng = iteration_rng(seed, i);
                step(state, &mut rng)
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        let mut state = init();
        (0..n_reps)
            .map(|i| {
                let mut rng = iteration_rng(seed, i);
                step(&mut state, &mut rng)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::Rng;

    use super::*;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_relative_eq!(mean(&[7.0f32]), 7.0);
        assert!(mean::<f64>(&[]).is_nan());
    }

    #[test]
    fn test_quantile_type7() {
        let x = [1.0, 2.0, 3.0, 4.0];
        // same as R: quantile(1:4, c(0, .25, .5, .9, 1))
        assert_relative_eq!(quantile_sorted(&x, 0.0), 1.0);
        assert_relative_eq!(quantile_sorted(&x, 0.25), 1.75);
        assert_relative_eq!(quantile_sorted(&x, 0.5), 2.5);
        assert_relative_eq!(quantile_sorted(&x, 0.9), 3.7, epsilon = 1e-12);
        assert_relative_eq!(quantile_sorted(&x, 1.0), 4.0);
    }

    #[test]
    fn test_quantile_single_value() {
        assert_relative_eq!(quantile_sorted(&[3.0], 0.3), 3.0);
    }

    #[test]
    fn test_iteration_rng_streams() {
        let mut ra = iteration_rng(42, 3);
        let mut rb = iteration_rng(42, 3);
        let a: Vec<u64> = (0..8).map(|_| ra.gen()).collect();
        let b: Vec<u64> = (0..8).map(|_| rb.gen()).collect();
        assert_eq!(a, b);

        let mut r0 = iteration_rng(42, 0);
        let mut r1 = iteration_rng(42, 1);
        let x0: [u64; 4] = r0.gen();
        let x1: [u64; 4] = r1.gen();
        assert_ne!(x0, x1);
    }

    #[test]
    fn test_replicate_in_order() {
        let out = replicate(100, 7, || 0usize, |calls, rng| {
            *calls += 1;
            rng.gen::<u32>()
        });
        assert_eq!(out.len(), 100);

        // each element only depends on (seed, iteration)
        for (i, v) in out.iter().enumerate() {
            assert_eq!(*v, iteration_rng(7, i).gen::<u32>());
        }
    }
}
