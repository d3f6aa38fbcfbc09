// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::{BackendSet, HitArrays};
use crate::config::consts::fields;
use crate::engine::TaskContext;
use crate::errors::AlgorithmError;
use crate::observability::messages::algorithm::{MissingField, ServiceUnavailable};
use crate::observability::messages::StructuredLog;
use crate::store::DataStore;
use crate::traits::Algorithm;

/// Reports the total photo-electron count and mean hit time of every event.
///
/// Reads `x`, `y`, `z`, `edep`, `pmtid`, `npe` and `hittime` from the data
/// store. `pmtid`, `npe` and `hittime` are required; the first one missing
/// fails the event with a single error log. Each backend in the set it was
/// built with then logs its own result, so backends add up rather than
/// replace each other.
///
/// The statistics are logged only; nothing is written back to the store.
pub struct HitSummaryAlg {
    name: String,
    backends: BackendSet,
    store: Option<DataStore>,

    // Per-event fields, overwritten by every execute.
    pos: [Option<f64>; 3],
    edep: Option<f64>,
    pmtid: Option<Vec<i64>>,
    npe: Option<Vec<i64>>,
    hittime: Option<Vec<f64>>,
}

impl HitSummaryAlg {
    pub fn new(name: impl Into<String>, backends: BackendSet) -> Self {
        Self {
            name: name.into(),
            backends,
            store: None,
            pos: [None; 3],
            edep: None,
            pmtid: None,
            npe: None,
            hittime: None,
        }
    }

    fn read_fields(&mut self, store: &DataStore) {
        let scalar = |key: &str| store.get(key).and_then(|v| v.as_scalar());
        let ints = |key: &str| {
            store
                .get(key)
                .and_then(|v| v.as_ints().map(<[i64]>::to_vec))
        };

        self.pos = [scalar(fields::X), scalar(fields::Y), scalar(fields::Z)];
        self.edep = scalar(fields::EDEP);
        self.pmtid = ints(fields::PMTID);
        self.npe = ints(fields::NPE);
        self.hittime = store.get(fields::HITTIME).and_then(|v| v.to_floats());
    }

    fn missing(&self, field: &'static str) -> AlgorithmError {
        MissingField {
            algorithm: &self.name,
            field,
        }
        .log();
        AlgorithmError::MissingField { field }
    }
}

impl Algorithm for HitSummaryAlg {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self, ctx: &TaskContext) -> Result<(), AlgorithmError> {
        self.store = Some(ctx.data_store());
        Ok(())
    }

    fn execute(&mut self) -> Result<(), AlgorithmError> {
        let Some(store) = self.store.clone() else {
            ServiceUnavailable {
                algorithm: &self.name,
                service: "DataStore",
            }
            .log();
            return Err(AlgorithmError::ServiceUnavailable {
                service: "DataStore",
            });
        };

        self.read_fields(&store);

        if self.pmtid.is_none() {
            return Err(self.missing(fields::PMTID));
        }
        let Some(npe) = self.npe.as_deref() else {
            return Err(self.missing(fields::NPE));
        };
        let Some(hittime) = self.hittime.as_deref() else {
            return Err(self.missing(fields::HITTIME));
        };

        let hits = HitArrays {
            vertex: self.pos,
            edep: self.edep,
            npe,
            hittime,
        };
        for backend in self.backends.iter() {
            backend
                .report(&hits)
                .map_err(|unavailable| AlgorithmError::BackendUnavailable {
                    backend: unavailable.0.name(),
                })?;
        }

        Ok(())
    }

    fn finalize(&mut self) -> Result<(), AlgorithmError> {
        Ok(())
    }
}
