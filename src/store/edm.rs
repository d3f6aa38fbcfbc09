// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Simulated event model carried by the event buffer.
//!
//! One [`EventNavigator`] per event. The header and event layers are optional
//! so that incomplete records can be represented and rejected by the converter
//! rather than by the input decoder.
//!
//! # JSON form
//! ```json
//! {"sim_header": {"event": {"event_id": 7,
//!   "tracks": [{"pdg_id": 11, "init_x": 0.0, "init_y": 0.0, "init_z": 0.0, "edep": 1.2}],
//!   "hits": [{"pmtid": 1, "npe": 2, "hit_time": 10.0}]}}}
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventNavigator {
    #[serde(default)]
    pub sim_header: Option<SimHeader>,
}

impl EventNavigator {
    pub fn new(event: SimEvent) -> Self {
        Self {
            sim_header: Some(SimHeader { event: Some(event) }),
        }
    }

    /// Event id if the navigator carries a complete event.
    pub fn event_id(&self) -> Option<u64> {
        self.sim_header
            .as_ref()
            .and_then(|h| h.event.as_ref())
            .map(|e| e.event_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimHeader {
    #[serde(default)]
    pub event: Option<SimEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimEvent {
    pub event_id: u64,
    #[serde(default)]
    pub tracks: Vec<SimTrack>,
    #[serde(default)]
    pub hits: Vec<SimHit>,
}

/// Primary particle truth: production vertex and deposited energy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTrack {
    #[serde(default)]
    pub pdg_id: i32,
    pub init_x: f32,
    pub init_y: f32,
    pub init_z: f32,
    pub edep: f32,
}

/// A single central-detector PMT hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimHit {
    pub pmtid: i32,
    pub npe: i32,
    pub hit_time: f64,
}
