// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_core::{EncodedKey, EncodedKeyRange, interface::OrderedStore};
use keystone_split::{MedianSplitPolicy, SplitPolicy, sample_range, structural_split_points};
use keystone_type::Result;
use tracing::instrument;

use crate::Engine;

impl<S: OrderedStore> Engine<S> {
	/// Keys at which the table's data and index ranges begin.
	#[instrument(name = "engine::split::structural", level = "debug", skip(self))]
	pub fn split_points(&self, table: &str) -> Result<Vec<EncodedKey>> {
		let def = self.load_table(table)?;
		structural_split_points(&def)
	}

	/// Samples `range` and proposes the key that divides it into halves of
	/// similar byte size.
	#[instrument(name = "engine::split::suggest", level = "debug", skip(self))]
	pub fn suggest_split(&self, range: EncodedKeyRange) -> Result<Option<EncodedKey>> {
		let samples = sample_range(&self.store, range.clone(), self.config.split.segment_bytes)?;
		MedianSplitPolicy::from(&self.config.split).split_point(&samples, &range)
	}
}
