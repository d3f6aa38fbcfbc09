// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::VecDeque;

use crate::errors::ExecutionError;
use crate::store::edm::EventNavigator;
use crate::traits::EventSource;

/// In-memory event source, drained front to back.
#[derive(Debug, Default)]
pub struct VecSource {
    events: VecDeque<EventNavigator>,
}

impl VecSource {
    pub fn new(events: impl IntoIterator<Item = EventNavigator>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

#[async_trait]
impl EventSource for VecSource {
    async fn next_event(&mut self) -> Result<Option<EventNavigator>, ExecutionError> {
        Ok(self.events.pop_front())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
