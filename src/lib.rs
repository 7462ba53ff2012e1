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

//! Resampling inference for two-group comparisons
//!
//! Check the [`prelude`] module for the public API.
use thiserror::Error;

/// The prelude module re-exports the most commonly used types and traits.
/// This is the public API. Enjoy!
pub mod prelude;

#[cfg(any(feature = "unstable", test))]
/// unstable sample API
pub mod sample;

#[cfg(not(any(feature = "unstable", test)))]
pub(crate) mod sample;

#[cfg(any(feature = "unstable", test))]
/// unstable statistic API
pub mod statistic;

#[cfg(not(any(feature = "unstable", test)))]
pub(crate) mod statistic;

#[cfg(any(feature = "unstable", test))]
/// unstable bootstrap API
pub mod bootstrap;

#[cfg(not(any(feature = "unstable", test)))]
pub(crate) mod bootstrap;

#[cfg(any(feature = "unstable", test))]
/// unstable permutation API
pub mod permutation;

#[cfg(not(any(feature = "unstable", test)))]
pub(crate) mod permutation;

#[cfg(any(feature = "unstable", test))]
/// unstable confidence interval API
pub mod interval;

#[cfg(not(any(feature = "unstable", test)))]
pub(crate) mod interval;

#[cfg(any(feature = "unstable", test))]
/// unstable p-value API
pub mod pvalue;

#[cfg(not(any(feature = "unstable", test)))]
pub(crate) mod pvalue;

#[cfg(any(feature = "unstable", test))]
/// unstable configuration API
pub mod config;

#[cfg(not(any(feature = "unstable", test)))]
pub(crate) mod config;

#[cfg(any(feature = "unstable", test))]
/// unstable analysis API
pub mod analysis;

#[cfg(not(any(feature = "unstable", test)))]
pub(crate) mod analysis;

#[cfg(any(feature = "unstable", test))]
/// unstable utils API
pub mod utils;

#[cfg(not(any(feature = "unstable", test)))]
pub(crate) mod utils;

/// The error type for this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A group, a distribution or a repetition count is too small to work with.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
    /// A parameter is outside of its domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
