// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Numeric backends for hit summary statistics.
//!
//! Each backend computes the same two reductions over an event's hit arrays,
//! the total photo-electron count and the mean hit time, with a different
//! numeric library:
//!
//! - **Native**: plain iterator reductions, always available
//! - **Ndarray**: `ndarray` array views, compiled in with the `ndarray` feature
//! - **Rayon**: `rayon` parallel iterators, compiled in with the `rayon` feature
//!
//! # Availability
//!
//! Which backends exist is decided once, at process start, by
//! [`BackendSet::probe`]. A backend whose feature was not compiled in is
//! dropped from the set without a word; the algorithm only ever dispatches to
//! members of the set it was given.
//!
//! ```text
//! probe() → restrict(config) → HitSummaryAlg → Backend::report per event
//! ```
//!
//! # Example
//! ```rust
//! use hit_summary::backends::{Backend, BackendSet};
//!
//! let set = BackendSet::probe();
//! assert!(set.contains(Backend::Native));
//!
//! let summary = Backend::Native.summarize(&[2, 3, 4], &[10.0, 20.0, 30.0]).unwrap();
//! assert_eq!(summary.total_pe, 9);
//! assert_eq!(summary.mean_hit_time, 20.0);
//! ```

#[cfg(feature = "ndarray")]
mod array;
mod native;
#[cfg(feature = "rayon")]
mod parallel;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ConfigError;
use crate::observability::messages::backend::{EnergyDeposition, MeanHitTime, TotalPe, TrueVertex};
use crate::observability::messages::StructuredLog;

/// The closed set of numeric backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    Native,
    Ndarray,
    Rayon,
}

/// A backend whose library was not compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendUnavailable(pub Backend);

impl fmt::Display for BackendUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "backend '{}' is not available in this build", self.0)
    }
}

impl std::error::Error for BackendUnavailable {}

/// Result of one backend's reductions over one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitSummary {
    pub total_pe: i64,
    /// `NaN` when the event has no hit times.
    pub mean_hit_time: f64,
}

/// Borrowed view of the per-event fields a backend reports on.
#[derive(Debug, Clone, Copy)]
pub struct HitArrays<'a> {
    pub vertex: [Option<f64>; 3],
    pub edep: Option<f64>,
    pub npe: &'a [i64],
    pub hittime: &'a [f64],
}

impl Backend {
    /// Canonical dispatch order.
    pub const ALL: [Backend; 3] = [Backend::Native, Backend::Ndarray, Backend::Rayon];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Native => "native",
            Backend::Ndarray => "ndarray",
            Backend::Rayon => "rayon",
        }
    }

    /// Check whether this backend's library is present in the build.
    pub fn probe(self) -> Result<Backend, BackendUnavailable> {
        let available = match self {
            Backend::Native => true,
            Backend::Ndarray => cfg!(feature = "ndarray"),
            Backend::Rayon => cfg!(feature = "rayon"),
        };

        if available {
            Ok(self)
        } else {
            Err(BackendUnavailable(self))
        }
    }

    /// Sum of `npe` and mean of `hittime`.
    ///
    /// Fails for a backend missing from the build; [`BackendSet`] never hands
    /// such a backend to the algorithm.
    pub fn summarize(self, npe: &[i64], hittime: &[f64]) -> Result<HitSummary, BackendUnavailable> {
        match self {
            Backend::Native => Ok(native::summarize(npe, hittime)),
            #[cfg(feature = "ndarray")]
            Backend::Ndarray => Ok(array::summarize(npe, hittime)),
            #[cfg(feature = "rayon")]
            Backend::Rayon => Ok(parallel::summarize(npe, hittime)),
            #[allow(unreachable_patterns)]
            _ => Err(BackendUnavailable(self)),
        }
    }

    /// Compute the summary for one event and log it tagged with this backend.
    ///
    /// The native backend also reports the true vertex and energy deposition.
    /// Nothing is logged for a backend missing from the build.
    pub fn report(self, hits: &HitArrays<'_>) -> Result<HitSummary, BackendUnavailable> {
        let summary = self.summarize(hits.npe, hits.hittime)?;

        if self == Backend::Native {
            TrueVertex {
                x: hits.vertex[0],
                y: hits.vertex[1],
                z: hits.vertex[2],
            }
            .log();
            EnergyDeposition { edep: hits.edep }.log();
        }

        TotalPe {
            backend: self.name(),
            total: summary.total_pe,
        }
        .log();
        MeanHitTime {
            backend: self.name(),
            mean: summary.mean_hit_time,
        }
        .log();
        Ok(summary)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered set of backends available to the algorithm.
///
/// Only constructible through the probe, so every member is backed by a
/// compiled-in library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSet(Vec<Backend>);

impl BackendSet {
    /// Probe every backend once. Unavailable ones are dropped silently.
    pub fn probe() -> Self {
        Self(
            Backend::ALL
                .iter()
                .filter_map(|b| b.probe().ok())
                .collect(),
        )
    }

    /// Only the always-available native backend.
    pub fn baseline() -> Self {
        Self(vec![Backend::Native])
    }

    /// Keep only the requested backends, in canonical order.
    ///
    /// Requested backends that were not probed as available are ignored; an
    /// empty result is an error since the algorithm would have nothing to run.
    pub fn restrict(self, requested: &[Backend]) -> Result<Self, ConfigError> {
        let kept: Vec<Backend> = self
            .0
            .iter()
            .copied()
            .filter(|b| requested.contains(b))
            .collect();

        if kept.is_empty() {
            return Err(ConfigError::EmptyBackendSet {
                requested: requested.iter().map(|b| b.name().to_string()).collect(),
                available: self.names().iter().map(|n| n.to_string()).collect(),
            });
        }

        Ok(Self(kept))
    }

    pub fn contains(&self, backend: Backend) -> bool {
        self.0.contains(&backend)
    }

    pub fn iter(&self) -> impl Iterator<Item = Backend> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|b| b.name()).collect()
    }
}

impl Default for BackendSet {
    fn default() -> Self {
        Self::probe()
    }
}
