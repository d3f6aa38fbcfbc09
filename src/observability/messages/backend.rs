// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for numeric backend output.
//!
//! Every result line is tagged with the backend that produced it, so several
//! backends running over the same event can be told apart.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// True primary vertex of the event.
///
/// # Log Level
/// `info!`
pub struct TrueVertex {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl Display for TrueVertex {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "True vertex: ({}, {}, {})",
            fmt_opt(self.x),
            fmt_opt(self.y),
            fmt_opt(self.z)
        )
    }
}

impl StructuredLog for TrueVertex {
    fn log(&self) {
        tracing::info!(x = ?self.x, y = ?self.y, z = ?self.z, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("true_vertex", span_name = name, x = ?self.x, y = ?self.y, z = ?self.z)
    }
}

/// Deposited energy of the event.
///
/// # Log Level
/// `info!`
pub struct EnergyDeposition {
    pub edep: Option<f64>,
}

impl Display for EnergyDeposition {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Energy deposition: {}", fmt_opt(self.edep))
    }
}

impl StructuredLog for EnergyDeposition {
    fn log(&self) {
        tracing::info!(edep = ?self.edep, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("energy_deposition", span_name = name, edep = ?self.edep)
    }
}

/// Sum of photo-electrons over all hits.
///
/// # Log Level
/// `info!`
pub struct TotalPe<'a> {
    pub backend: &'a str,
    pub total: i64,
}

impl Display for TotalPe<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Total PE ({}): {}", self.backend, self.total)
    }
}

impl StructuredLog for TotalPe<'_> {
    fn log(&self) {
        tracing::info!(backend = self.backend, total_pe = self.total, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "total_pe",
            span_name = name,
            backend = self.backend,
            total_pe = self.total,
        )
    }
}

/// Mean hit time over all hits.
///
/// # Log Level
/// `info!`
pub struct MeanHitTime<'a> {
    pub backend: &'a str,
    pub mean: f64,
}

impl Display for MeanHitTime<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Mean hit time ({}): {}", self.backend, self.mean)
    }
}

impl StructuredLog for MeanHitTime<'_> {
    fn log(&self) {
        tracing::info!(backend = self.backend, mean_hit_time = self.mean, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "mean_hit_time",
            span_name = name,
            backend = self.backend,
            mean_hit_time = self.mean,
        )
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "None".to_string(), |v| v.to_string())
}
