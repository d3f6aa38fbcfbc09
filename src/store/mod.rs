// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Shared per-event state: the key-value data store, the event buffer, and
//! the simulated event model the buffer carries.

mod data_store;
pub mod edm;
mod nav_buffer;

pub use data_store::{DataStore, StoreValue};
pub use nav_buffer::NavBuffer;
