// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Event sources feeding the run loop.

mod json;
mod memory;

pub use json::JsonInputSource;
pub use memory::VecSource;
