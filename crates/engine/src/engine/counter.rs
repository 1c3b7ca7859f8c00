// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_core::{
	EncodedKey,
	catalog::TableDef,
	interface::{Delta, OrderedStore},
	key::RowKey,
};
use keystone_type::Result;
use tracing::instrument;

use crate::{
	Engine,
	catalog::{counter_delta, load_counter},
};

impl<S: OrderedStore> Engine<S> {
	#[instrument(name = "engine::counter::row_count", level = "trace", skip(self))]
	pub fn row_count(&self, table: &str) -> Result<u64> {
		let def = self.load_table(table)?;
		load_counter(&self.store, &row_count_key(&def), "row count")
	}

	/// Adds `amount` to the row count, saturating at zero, and returns the
	/// new count.
	#[instrument(name = "engine::counter::increment_row_count", level = "debug", skip(self))]
	pub fn increment_row_count(&self, table: &str, amount: i64) -> Result<u64> {
		let _guard = self.writer.lock();
		let def = self.load_table(table)?;
		let key = row_count_key(&def);
		let count = load_counter(&self.store, &key, "row count")?.saturating_add_signed(amount);
		self.store.commit(vec![counter_delta(key, count)])?;
		Ok(count)
	}

	#[instrument(name = "engine::counter::truncate_row_count", level = "debug", skip(self))]
	pub fn truncate_row_count(&self, table: &str) -> Result<()> {
		let _guard = self.writer.lock();
		let def = self.load_table(table)?;
		self.store.commit(vec![counter_delta(row_count_key(&def), 0)])
	}

	#[instrument(name = "engine::counter::auto_increment", level = "trace", skip(self))]
	pub fn auto_increment(&self, table: &str) -> Result<u64> {
		let def = self.load_table(table)?;
		load_counter(&self.store, &auto_inc_key(&def), "auto increment")
	}

	/// Advances the auto-increment counter by `amount`, saturating, and
	/// returns the new value.
	#[instrument(name = "engine::counter::increment_auto_increment", level = "debug", skip(self))]
	pub fn increment_auto_increment(&self, table: &str, amount: u64) -> Result<u64> {
		let _guard = self.writer.lock();
		let def = self.load_table(table)?;
		let key = auto_inc_key(&def);
		let value = load_counter(&self.store, &key, "auto increment")?.saturating_add(amount);
		self.store.commit(vec![counter_delta(key, value)])?;
		Ok(value)
	}

	#[instrument(name = "engine::counter::truncate_auto_increment", level = "debug", skip(self))]
	pub fn truncate_auto_increment(&self, table: &str) -> Result<()> {
		let _guard = self.writer.lock();
		let def = self.load_table(table)?;
		self.store.commit(vec![counter_delta(auto_inc_key(&def), 0)])
	}

	/// Row count update by `amount`. The caller holds the writer lock.
	pub(crate) fn row_count_delta(&self, def: &TableDef, amount: i64) -> Result<Delta> {
		let key = row_count_key(def);
		let count = load_counter(&self.store, &key, "row count")?.saturating_add_signed(amount);
		Ok(counter_delta(key, count))
	}
}

fn row_count_key(def: &TableDef) -> EncodedKey {
	RowKey::RowCount {
		table: def.id,
	}
	.encode()
}

fn auto_inc_key(def: &TableDef) -> EncodedKey {
	RowKey::AutoInc {
		table: def.id,
	}
	.encode()
}
