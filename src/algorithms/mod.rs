// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Event-processing algorithms.
//!
//! - [`Edm2ArrayAlg`]: flattens the current simulated event into named arrays
//!   in the data store
//! - [`HitSummaryAlg`]: reads those arrays back and reports summary statistics
//!   through every available numeric backend

pub mod edm2array;
pub mod hit_summary;
#[cfg(test)]
pub mod stub;

pub use edm2array::Edm2ArrayAlg;
pub use hit_summary::HitSummaryAlg;
