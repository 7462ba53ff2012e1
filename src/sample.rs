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

use crate::statistic::{DifferenceInMeans, Statistic};
use crate::utils::Value;
use crate::Error;

/// A single labelled measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation<L, F> {
    /// Group the observation belongs to
    pub label: L,
    /// Measured value
    pub value: F,
}

impl<L, F> Observation<L, F> {
    /// Create a new observation.
    pub fn new(label: L, value: F) -> Self {
        Self { label, value }
    }
}

impl<L, F> From<(L, F)> for Observation<L, F> {
    fn from((label, value): (L, F)) -> Self {
        Self { label, value }
    }
}

/// The observations under analysis, in input order.
///
/// A sample is read-only once built: resampling procedures work on the
/// [`Groups`] obtained with [`Sample::split`] and never touch the sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<L, F> {
    observations: Vec<Observation<L, F>>,
}

impl<L: PartialEq + Debug, F: Value> Sample<L, F> {
    /// Build a sample. Fails with [`Error::InvalidParameter`] if a value is not finite.
    pub fn new(observations: Vec<Observation<L, F>>) -> Result<Self, Error> {
        if let Some(o) = observations.iter().find(|o| !o.value.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "non-finite value {:?} for label {:?}",
                o.value, o.label
            )));
        }

        Ok(Self { observations })
    }

    /// Build a sample from the values of two groups.
    pub fn from_groups(label_a: L, a: &[F], label_b: L, b: &[F]) -> Result<Self, Error>
    where
        L: Clone,
    {
        let observations = a
            .iter()
            .map(|&v| Observation::new(label_a.clone(), v))
            .chain(b.iter().map(|&v| Observation::new(label_b.clone(), v)))
            .collect();

        Self::new(observations)
    }

    /// The observations, in input order.
    pub fn observations(&self) -> &[Observation<L, F>] {
        &self.observations
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// `true` if the sample has no observation.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Number of observations carrying `label`.
    pub fn count(&self, label: &L) -> usize {
        self.observations
            .iter()
            .filter(|o| o.label == *label)
            .count()
    }

    /// Values of the observations carrying `label`, in input order.
    pub fn values(&self, label: &L) -> Vec<F> {
        self.observations
            .iter()
            .filter(|o| o.label == *label)
            .map(|o| o.value)
            .collect()
    }

    /// Split the sample in the two groups `a` and `b`.
    ///
    /// Observations with any other label are left out. Fails with
    /// [`Error::InsufficientData`] if one of the groups is empty.
    pub fn split(&self, a: &L, b: &L) -> Result<Groups<F>, Error> {
        if a == b {
            return Err(Error::InvalidParameter(format!(
                "both groups are labelled {:?}",
                a
            )));
        }

        let (values, in_a): (Vec<F>, Vec<bool>) = self
            .observations
            .iter()
            .filter(|o| o.label == *a || o.label == *b)
            .map(|o| (o.value, o.label == *a))
            .unzip();

        if !in_a.iter().any(|&x| x) {
            return Err(Error::InsufficientData(format!("no observation in group {:?}", a)));
        }
        if in_a.iter().all(|&x| x) {
            return Err(Error::InsufficientData(format!("no observation in group {:?}", b)));
        }

        Groups::from_labelled(values, in_a)
    }
}

/// Two non-empty groups of values.
///
/// The values are kept in one canonical order together with a label mask
/// (`true` for group `a`). Swapping the groups only negates the mask, so the
/// order, and therefore every permutation drawn from a seed, is the same
/// whichever group is called `a`. The group sizes are fixed at construction and
/// shared by every resample.
#[derive(Debug, Clone, PartialEq)]
pub struct Groups<F> {
    pooled: Vec<F>,
    in_a: Vec<bool>,
    a: Vec<F>,
    b: Vec<F>,
}

impl<F: Value> Groups<F> {
    /// Build the groups from their values; the canonical order is `a` then `b`.
    pub fn new(a: &[F], b: &[F]) -> Result<Self, Error> {
        let in_a = std::iter::repeat(true)
            .take(a.len())
            .chain(std::iter::repeat(false).take(b.len()))
            .collect();

        Self::from_labelled([a, b].concat(), in_a)
    }

    /// Build the groups from values in canonical order and their label mask
    /// (`true` for group `a`).
    pub fn from_labelled(pooled: Vec<F>, in_a: Vec<bool>) -> Result<Self, Error> {
        if pooled.len() != in_a.len() {
            return Err(Error::InvalidParameter(format!(
                "{} values but {} labels",
                pooled.len(),
                in_a.len()
            )));
        }
        if pooled.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidParameter("non-finite value".to_string()));
        }

        let (a, b) = split_by_mask(&pooled, &in_a);
        if a.is_empty() || b.is_empty() {
            return Err(Error::InsufficientData(format!(
                "both groups need at least one value (got {} and {})",
                a.len(),
                b.len()
            )));
        }

        Ok(Self { pooled, in_a, a, b })
    }

    /// Values of group `a`, in canonical order.
    pub fn a(&self) -> &[F] {
        &self.a
    }

    /// Values of group `b`, in canonical order.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// All the values, in canonical order.
    pub fn pooled(&self) -> &[F] {
        &self.pooled
    }

    /// Label mask over [`Groups::pooled`]: `true` for group `a`.
    pub fn in_a(&self) -> &[bool] {
        &self.in_a
    }

    /// Size of group `a`.
    pub fn n_a(&self) -> usize {
        self.a.len()
    }

    /// Size of group `b`.
    pub fn n_b(&self) -> usize {
        self.b.len()
    }

    /// Total number of values.
    pub fn len(&self) -> usize {
        self.pooled.len()
    }

    /// Always `false`: both groups are non-empty.
    pub fn is_empty(&self) -> bool {
        self.pooled.is_empty()
    }

    /// Same values with the roles of `a` and `b` exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            pooled: self.pooled.clone(),
            in_a: self.in_a.iter().map(|x| !x).collect(),
            a: self.b.clone(),
            b: self.a.clone(),
        }
    }

    /// `statistic` evaluated on the groups.
    pub fn statistic<S: Statistic<F> + ?Sized>(&self, statistic: &S) -> F {
        statistic.compute(self.a(), self.b())
    }

    /// `mean(a) - mean(b)`
    pub fn difference_in_means(&self) -> F {
        self.statistic(&DifferenceInMeans)
    }
}

fn split_by_mask<F: Copy>(pooled: &[F], in_a: &[bool]) -> (Vec<F>, Vec<F>) {
    let mut a = Vec::new();
    let mut b = Vec::new();
    split_by_mask_into(pooled, in_a, &mut a, &mut b);
    (a, b)
}

/// Distribute `pooled` into `a` (mask `true`) and `b` (mask `false`), keeping the order.
pub(crate) fn split_by_mask_into<F: Copy>(
    pooled: &[F],
    in_a: &[bool],
    a: &mut Vec<F>,
    b: &mut Vec<F>,
) {
    a.clear();
    b.clear();
    for (&v, &is_a) in pooled.iter().zip(in_a) {
        if is_a {
            a.push(v);
        } else {
            b.push(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn movies() -> Sample<&'static str, f64> {
        Sample::new(vec![
            Observation::new("Action", 5.0),
            Observation::new("Comedy", 6.0),
            Observation::new("Drama", 8.0),
            Observation::new("Action", 6.0),
            Observation::new("Comedy", 7.5),
            Observation::new("Action", 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_split_keeps_order_and_drops_other_labels() {
        let sample = movies();
        let groups = sample.split(&"Action", &"Comedy").unwrap();
        assert_eq!(groups.a(), &[5.0, 6.0, 4.0]);
        assert_eq!(groups.b(), &[6.0, 7.5]);
        assert_eq!(groups.len(), 5);
        assert_eq!(sample.count(&"Drama"), 1);
    }

    #[test]
    fn test_split_empty_group() {
        let sample = movies();
        assert!(matches!(
            sample.split(&"Action", &"Horror"),
            Err(Error::InsufficientData(_))
        ));
        assert!(matches!(
            sample.split(&"Action", &"Action"),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let r = Sample::new(vec![Observation::new("a", 1.0), Observation::new("b", f64::NAN)]);
        assert!(matches!(r, Err(Error::InvalidParameter(_))));
        assert!(matches!(
            Groups::new(&[1.0], &[f64::INFINITY]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_split_canonical_order_does_not_depend_on_group_names() {
        let sample = movies();
        let ab = sample.split(&"Action", &"Comedy").unwrap();
        let ba = sample.split(&"Comedy", &"Action").unwrap();

        assert_eq!(ab.pooled(), &[5.0, 6.0, 6.0, 7.5, 4.0]);
        assert_eq!(ab.in_a(), &[true, false, true, false, true]);
        assert_eq!(ba.pooled(), ab.pooled());
        assert_eq!(ba, ab.swapped());
    }

    #[test]
    fn test_from_labelled() {
        let groups = Groups::from_labelled(vec![1.0, 2.0, 3.0], vec![false, true, false]).unwrap();
        assert_eq!(groups.a(), &[2.0]);
        assert_eq!(groups.b(), &[1.0, 3.0]);

        assert!(matches!(
            Groups::from_labelled(vec![1.0, 2.0], vec![true, true]),
            Err(Error::InsufficientData(_))
        ));
        assert!(matches!(
            Groups::from_labelled(vec![1.0, 2.0], vec![true]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_swapped() {
        let groups = Groups::new(&[1.0, 2.0, 3.0], &[10.0]).unwrap();
        let swapped = groups.swapped();
        assert_eq!(swapped.a(), &[10.0]);
        assert_eq!(swapped.b(), &[1.0, 2.0, 3.0]);
        assert_relative_eq!(swapped.difference_in_means(), -groups.difference_in_means());
    }

    #[test]
    fn test_from_groups() {
        let sample = Sample::from_groups("x", &[1.0, 2.0], "y", &[3.0]).unwrap();
        assert_eq!(sample.len(), 3);
        assert_eq!(sample.values(&"x"), vec![1.0, 2.0]);
        assert_eq!(sample.observations()[2], Observation::from(("y", 3.0)));
    }
}
