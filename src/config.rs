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

use crate::pvalue::Direction;
use crate::Error;

/// Parameters of a complete two-group analysis (see [`crate::prelude::analyze`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InferenceConfig {
    /// Number of bootstrap resamples for the confidence interval
    #[cfg_attr(feature = "serde", serde(default = "default_bootstrap_reps"))]
    pub bootstrap_reps: usize,

    /// Number of permutations for the null distribution
    #[cfg_attr(feature = "serde", serde(default = "default_permutation_reps"))]
    pub permutation_reps: usize,

    /// Confidence level of the interval, in (0, 1]
    #[cfg_attr(feature = "serde", serde(default = "default_confidence_level"))]
    pub confidence_level: f64,

    /// Tail(s) of the null distribution used for the p-value
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: Direction,

    /// Seed of the random streams
    #[cfg_attr(feature = "serde", serde(default = "default_seed"))]
    pub seed: u64,
}

fn default_bootstrap_reps() -> usize {
    1_000
}

fn default_permutation_reps() -> usize {
    5_000
}

fn default_confidence_level() -> f64 {
    0.95
}

fn default_seed() -> u64 {
    42
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            bootstrap_reps: default_bootstrap_reps(),
            permutation_reps: default_permutation_reps(),
            confidence_level: default_confidence_level(),
            direction: Direction::default(),
            seed: default_seed(),
        }
    }
}

impl InferenceConfig {
    /// Check the parameters without running anything.
    pub fn validate(&self) -> Result<(), Error> {
        if self.bootstrap_reps == 0 {
            return Err(Error::InsufficientData(
                "bootstrap_reps must be at least 1".to_string(),
            ));
        }
        if self.permutation_reps == 0 {
            return Err(Error::InsufficientData(
                "permutation_reps must be at least 1".to_string(),
            ));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level <= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "confidence_level {} is not in (0, 1]",
                self.confidence_level
            )));
        }
        Ok(())
    }

    /// Seed of the permutation stream, distinct from the bootstrap one.
    pub fn permutation_seed(&self) -> u64 {
        self.seed.wrapping_add(1)
    }

    /// Parse and validate a TOML document; missing keys take their default.
    ///
    /// ```toml
    /// bootstrap_reps = 1000
    /// permutation_reps = 5000
    /// confidence_level = 0.95
    /// direction = "two-sided"
    /// seed = 2023
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        let config: InferenceConfig =
            toml::from_str(s).map_err(|e| Error::InvalidParameter(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
