// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_split::SplitConfig;
use keystone_type::{Result, error::diagnostic::store};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
	/// Deltas applied per store commit by index backfill, index removal,
	/// truncate and drop.
	pub write_batch_size: usize,
	/// Reject inserts whose row id already has a data row. When off, the
	/// caller guarantees every inserted id is fresh. A reused id replaces
	/// the data row but leaves the old index entries and counts the row
	/// again.
	pub verify_fresh_row_ids: bool,
	pub split: SplitConfig,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			write_batch_size: 1024,
			verify_fresh_row_ids: true,
			split: SplitConfig::default(),
		}
	}
}

impl EngineConfig {
	pub fn from_json(json: &str) -> Result<Self> {
		serde_json::from_str(json)
			.map_err(|err| keystone_type::error!(store::deserialize("engine config", err.to_string())))
	}
}
