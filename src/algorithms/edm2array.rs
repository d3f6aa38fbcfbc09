// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::fields;
use crate::engine::TaskContext;
use crate::errors::AlgorithmError;
use crate::observability::messages::algorithm::{
    EmptyHitCollection, EventUnresolved, RegisteredToStore, ServiceUnavailable, SimEventId,
};
use crate::observability::messages::StructuredLog;
use crate::store::{DataStore, NavBuffer};
use crate::traits::Algorithm;

const NAV_BUFFER: &str = "NavBuffer";

/// Converts the current simulated event into flat arrays in the data store.
///
/// Writes the primary vertex (`x`, `y`, `z`) and energy deposition (`edep`)
/// of the last truth track, plus one entry per hit in `pmtid`, `npe` and
/// `hittime`. Events without hits are passed over successfully and write
/// nothing.
pub struct Edm2ArrayAlg {
    name: String,
    buffer: Option<NavBuffer>,
    store: Option<DataStore>,
}

impl Edm2ArrayAlg {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buffer: None,
            store: None,
        }
    }

    fn service_unavailable(&self) -> AlgorithmError {
        ServiceUnavailable {
            algorithm: &self.name,
            service: NAV_BUFFER,
        }
        .log();
        AlgorithmError::ServiceUnavailable {
            service: NAV_BUFFER,
        }
    }

    fn unresolved(&self, error: AlgorithmError) -> AlgorithmError {
        EventUnresolved {
            algorithm: &self.name,
            error: &error,
        }
        .log();
        error
    }
}

impl Algorithm for Edm2ArrayAlg {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self, ctx: &TaskContext) -> Result<(), AlgorithmError> {
        let Some(buffer) = ctx.nav_buffer() else {
            return Err(self.service_unavailable());
        };
        self.buffer = Some(buffer);
        self.store = Some(ctx.data_store());
        Ok(())
    }

    fn execute(&mut self) -> Result<(), AlgorithmError> {
        let (Some(buffer), Some(store)) = (&self.buffer, &self.store) else {
            return Err(self.service_unavailable());
        };

        let nav = buffer
            .current()
            .ok_or_else(|| self.unresolved(AlgorithmError::NavigatorMissing))?;
        let header = nav
            .sim_header
            .as_ref()
            .ok_or_else(|| self.unresolved(AlgorithmError::SimHeaderMissing))?;
        let event = header
            .event
            .as_ref()
            .ok_or_else(|| self.unresolved(AlgorithmError::SimEventMissing))?;

        SimEventId {
            event_id: event.event_id,
        }
        .log();

        if event.hits.is_empty() {
            EmptyHitCollection {
                event_id: event.event_id,
            }
            .log();
            return Ok(());
        }

        if let Some(track) = event.tracks.last() {
            store.set(fields::X, track.init_x);
            store.set(fields::Y, track.init_y);
            store.set(fields::Z, track.init_z);
            store.set(fields::EDEP, track.edep);
        }

        let pmtid: Vec<i32> = event.hits.iter().map(|h| h.pmtid).collect();
        let npe: Vec<i32> = event.hits.iter().map(|h| h.npe).collect();
        let hittime: Vec<f64> = event.hits.iter().map(|h| h.hit_time).collect();

        RegisteredToStore {
            event_id: event.event_id,
            hit_count: event.hits.len(),
        }
        .log();
        store.set(fields::PMTID, pmtid);
        store.set(fields::NPE, npe);
        store.set(fields::HITTIME, hittime);

        Ok(())
    }

    fn finalize(&mut self) -> Result<(), AlgorithmError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::edm::{EventNavigator, SimEvent, SimHeader, SimHit, SimTrack};
    use crate::store::StoreValue;
    use crate::test_support::{capture_logs, error_lines};

    fn setup() -> (Edm2ArrayAlg, NavBuffer, DataStore) {
        let buffer = NavBuffer::new();
        let store = DataStore::new();
        let ctx = TaskContext::new(store.clone(), Some(buffer.clone()));

        let mut alg = Edm2ArrayAlg::new("edm2array");
        alg.initialize(&ctx).unwrap();
        (alg, buffer, store)
    }

    fn sample_event() -> SimEvent {
        SimEvent {
            event_id: 42,
            tracks: vec![
                SimTrack {
                    pdg_id: 11,
                    init_x: 1.0,
                    init_y: 2.0,
                    init_z: 3.0,
                    edep: 0.5,
                },
                SimTrack {
                    pdg_id: 22,
                    init_x: -1.0,
                    init_y: -2.0,
                    init_z: -3.0,
                    edep: 1.5,
                },
            ],
            hits: vec![
                SimHit { pmtid: 1, npe: 2, hit_time: 10.0 },
                SimHit { pmtid: 2, npe: 3, hit_time: 20.0 },
                SimHit { pmtid: 3, npe: 4, hit_time: 30.0 },
            ],
        }
    }

    #[test]
    fn test_initialize_without_buffer_fails() {
        let ctx = TaskContext::new(DataStore::new(), None);
        let mut alg = Edm2ArrayAlg::new("edm2array");

        let (result, logs) = capture_logs(|| alg.initialize(&ctx));

        assert_eq!(
            result,
            Err(AlgorithmError::ServiceUnavailable { service: "NavBuffer" })
        );
        assert_eq!(error_lines(&logs).len(), 1);
    }

    #[test]
    fn test_registers_all_fields() {
        let (mut alg, buffer, store) = setup();
        buffer.set_current(EventNavigator::new(sample_event()));

        let (result, logs) = capture_logs(|| alg.execute());

        assert!(result.is_ok());
        assert!(logs.contains("The SimEvent ID: 42"));
        assert_eq!(
            store.keys(),
            vec!["edep", "hittime", "npe", "pmtid", "x", "y", "z"]
        );
        // Last track wins.
        assert_eq!(store.get("x"), Some(StoreValue::Scalar(-1.0)));
        assert_eq!(store.get("edep"), Some(StoreValue::Scalar(1.5)));
        assert_eq!(store.get("pmtid"), Some(StoreValue::IntArray(vec![1, 2, 3])));
        assert_eq!(store.get("npe"), Some(StoreValue::IntArray(vec![2, 3, 4])));
        assert_eq!(
            store.get("hittime"),
            Some(StoreValue::FloatArray(vec![10.0, 20.0, 30.0]))
        );
    }

    #[test]
    fn test_empty_hit_collection_is_skipped() {
        let (mut alg, buffer, store) = setup();
        let mut event = sample_event();
        event.hits.clear();
        assert!(!event.tracks.is_empty());
        buffer.set_current(EventNavigator::new(event));

        let (result, logs) = capture_logs(|| alg.execute());

        assert!(result.is_ok());
        assert!(logs.contains("Skip the event due to empty collection."));
        // Neither the vertex nor the hit arrays are written.
        assert!(store.is_empty(), "keys: {:?}", store.keys());
    }

    #[test]
    fn test_no_tracks_leaves_vertex_unset() {
        let (mut alg, buffer, store) = setup();
        let mut event = sample_event();
        event.tracks.clear();
        buffer.set_current(EventNavigator::new(event));

        assert!(alg.execute().is_ok());
        assert!(!store.contains("x"));
        assert!(!store.contains("edep"));
        assert!(store.contains("npe"));
    }

    #[test]
    fn test_unresolved_event_layers() {
        let cases = vec![
            (None, AlgorithmError::NavigatorMissing, "event navigator"),
            (
                Some(EventNavigator { sim_header: None }),
                AlgorithmError::SimHeaderMissing,
                "SimHeader",
            ),
            (
                Some(EventNavigator {
                    sim_header: Some(SimHeader { event: None }),
                }),
                AlgorithmError::SimEventMissing,
                "SimEvent",
            ),
        ];

        for (nav, expected, mention) in cases {
            let (mut alg, buffer, store) = setup();
            if let Some(nav) = nav {
                buffer.set_current(nav);
            }

            let (result, logs) = capture_logs(|| alg.execute());

            assert_eq!(result, Err(expected));
            let errors = error_lines(&logs);
            assert_eq!(errors.len(), 1, "logs: {}", logs);
            assert!(errors[0].contains(mention), "logs: {}", logs);
            assert!(store.is_empty());
        }
    }
}
