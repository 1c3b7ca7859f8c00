// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use keystone_core::{
	EncodedKeyRange,
	catalog::TableDef,
	interface::{Delta, OrderedStore},
};
use keystone_type::Result;
use parking_lot::Mutex;
use tracing::trace;

use crate::{EngineConfig, catalog::load_table};

mod counter;
mod index;
mod row;
mod scan;
mod split;
mod table;

/// Tables, rows and secondary indexes on an ordered store.
///
/// Reads go straight to the store. Operations that read before they write
/// (counters, unique checks, catalog changes) are serialized on one writer
/// lock; each operation's deltas are committed as one batch unless stated
/// otherwise.
pub struct Engine<S: OrderedStore>(Arc<EngineInner<S>>);

pub struct EngineInner<S: OrderedStore> {
	store: S,
	config: EngineConfig,
	writer: Mutex<()>,
}

impl<S: OrderedStore> Clone for Engine<S> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl<S: OrderedStore> Deref for Engine<S> {
	type Target = EngineInner<S>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<S: OrderedStore> Engine<S> {
	pub fn new(store: S) -> Self {
		Self::with_config(store, EngineConfig::default())
	}

	pub fn with_config(store: S, config: EngineConfig) -> Self {
		Self(Arc::new(EngineInner {
			store,
			config,
			writer: Mutex::new(()),
		}))
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	pub(crate) fn load_table(&self, name: &str) -> Result<TableDef> {
		load_table(&self.store, name)
	}

	/// Commits `deltas` in batches of the configured size.
	pub(crate) fn commit_batched(&self, deltas: Vec<Delta>) -> Result<()> {
		let batch_size = self.config.write_batch_size.max(1);
		let mut deltas = deltas.into_iter().peekable();
		while deltas.peek().is_some() {
			let batch: Vec<Delta> = deltas.by_ref().take(batch_size).collect();
			trace!(deltas = batch.len(), "commit batch");
			self.store.commit(batch)?;
		}
		Ok(())
	}

	/// Removes every key inside `range`, returning how many were removed.
	pub(crate) fn remove_range(&self, range: EncodedKeyRange) -> Result<usize> {
		let deltas: Vec<Delta> = self
			.store
			.range(range)?
			.map(|entry| Delta::Remove {
				key: entry.key,
			})
			.collect();
		let removed = deltas.len();
		self.commit_batched(deltas)?;
		Ok(removed)
	}
}
