// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_core::interface::OrderedStore;
use keystone_split::SplitConfig;

use crate::{Engine, EngineConfig};

pub struct EngineBuilder<S: OrderedStore> {
	store: S,
	config: EngineConfig,
}

impl<S: OrderedStore> EngineBuilder<S> {
	pub fn new(store: S) -> Self {
		Self {
			store,
			config: EngineConfig::default(),
		}
	}

	pub fn with_config(mut self, config: EngineConfig) -> Self {
		self.config = config;
		self
	}

	pub fn write_batch_size(mut self, size: usize) -> Self {
		self.config.write_batch_size = size.max(1);
		self
	}

	/// See [`EngineConfig::verify_fresh_row_ids`]. Turning it off skips a
	/// point read per insert and makes id freshness the caller's contract.
	pub fn verify_fresh_row_ids(mut self, verify: bool) -> Self {
		self.config.verify_fresh_row_ids = verify;
		self
	}

	pub fn split(mut self, split: SplitConfig) -> Self {
		self.config.split = split;
		self
	}

	pub fn build(self) -> Engine<S> {
		Engine::with_config(self.store, self.config)
	}
}
