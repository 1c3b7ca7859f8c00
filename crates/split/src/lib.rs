// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Split point estimation for an ordered key space.
//!
//! A region is split at the data weighted median of sampled keys rather than
//! at the midpoint of its bounds, so skewed key distributions still divide
//! into halves of similar byte size. Structural split points separate the
//! data and index ranges of a table before any data exists.

pub use combine::{SplitSample, combine};
pub use config::SplitConfig;
pub use policy::{MedianSplitPolicy, SplitPolicy};
pub use sample::sample_range;
pub use structural::structural_split_points;

mod combine;
mod config;
mod policy;
mod sample;
mod structural;
