// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, PoisonError, RwLock};

use crate::store::edm::EventNavigator;

/// Handle to the buffer holding the event currently being processed.
///
/// The run loop sets the current event before executing algorithms; algorithms
/// read it through a handle obtained at initialization.
#[derive(Clone, Default, Debug)]
pub struct NavBuffer {
    current: Arc<RwLock<Option<Arc<EventNavigator>>>>,
}

impl NavBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current event, if any.
    pub fn current(&self) -> Option<Arc<EventNavigator>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_current(&self, nav: EventNavigator) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(nav));
    }

    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::edm::SimEvent;

    #[test]
    fn test_current_round_trip() {
        let buffer = NavBuffer::new();
        assert!(buffer.current().is_none());

        let reader = buffer.clone();
        buffer.set_current(EventNavigator::new(SimEvent {
            event_id: 4,
            ..Default::default()
        }));
        assert_eq!(reader.current().and_then(|n| n.event_id()), Some(4));

        buffer.clear();
        assert!(reader.current().is_none());
    }
}
