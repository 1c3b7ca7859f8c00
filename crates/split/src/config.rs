// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
	/// Below this many samples the median policy uses the median sample
	/// instead of the weighted average.
	pub min_samples: usize,
	/// Target byte weight of one sampled segment.
	pub segment_bytes: u64,
}

impl Default for SplitConfig {
	fn default() -> Self {
		Self {
			min_samples: 1,
			segment_bytes: 64 * 1024,
		}
	}
}
