// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex};

use crate::engine::TaskContext;
use crate::errors::AlgorithmError;
use crate::traits::Algorithm;

/// Shared record of lifecycle calls, in order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// An algorithm that records every lifecycle call and always succeeds
pub struct RecordingAlgorithm {
    pub id: String,
    pub calls: CallLog,
}

impl RecordingAlgorithm {
    pub fn new(id: &str, calls: CallLog) -> Self {
        Self {
            id: id.to_string(),
            calls,
        }
    }

    fn record(&self, phase: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.id, phase));
    }
}

impl Algorithm for RecordingAlgorithm {
    fn name(&self) -> &str {
        &self.id
    }

    fn initialize(&mut self, _ctx: &TaskContext) -> Result<(), AlgorithmError> {
        self.record("initialize");
        Ok(())
    }

    fn execute(&mut self) -> Result<(), AlgorithmError> {
        self.record("execute");
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), AlgorithmError> {
        self.record("finalize");
        Ok(())
    }
}

/// An algorithm that fails `execute` on the listed calls (zero-based)
pub struct FailingAlgorithm {
    pub id: String,
    pub fail_on: Vec<u64>,
    calls: u64,
}

impl FailingAlgorithm {
    pub fn new(id: &str, fail_on: Vec<u64>) -> Self {
        Self {
            id: id.to_string(),
            fail_on,
            calls: 0,
        }
    }
}

impl Algorithm for FailingAlgorithm {
    fn name(&self) -> &str {
        &self.id
    }

    fn initialize(&mut self, _ctx: &TaskContext) -> Result<(), AlgorithmError> {
        Ok(())
    }

    fn execute(&mut self) -> Result<(), AlgorithmError> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_on.contains(&call) {
            Err(AlgorithmError::MissingField { field: "pmtid" })
        } else {
            Ok(())
        }
    }

    fn finalize(&mut self) -> Result<(), AlgorithmError> {
        Ok(())
    }
}

/// An algorithm whose initialize always fails
pub struct UninitializableAlgorithm;

impl Algorithm for UninitializableAlgorithm {
    fn name(&self) -> &str {
        "uninitializable"
    }

    fn initialize(&mut self, _ctx: &TaskContext) -> Result<(), AlgorithmError> {
        Err(AlgorithmError::ServiceUnavailable { service: "NavBuffer" })
    }

    fn execute(&mut self) -> Result<(), AlgorithmError> {
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), AlgorithmError> {
        Ok(())
    }
}
