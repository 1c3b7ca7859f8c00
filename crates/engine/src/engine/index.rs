// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeSet;

use keystone_core::{
	Row,
	catalog::{IndexSchema, SortDirection, TableDef},
	interface::OrderedStore,
	key::RowKey,
};
use keystone_type::{
	Result,
	error::diagnostic::{catalog::index_already_exists, contract::unique_index_violation},
	return_error,
};
use tracing::{debug, instrument};

use crate::{
	Engine,
	catalog::table_deltas,
	plan::{index_keys, plan_index_delete, plan_index_insert},
};

impl<S: OrderedStore> Engine<S> {
	/// Adds an index and writes its entries for every existing row. The
	/// entries are committed in batches before the index becomes part of
	/// the schema.
	#[instrument(name = "engine::index::add", level = "debug", skip(self, index), fields(index = %index.name))]
	pub fn add_index(&self, table: &str, index: IndexSchema) -> Result<TableDef> {
		let _guard = self.writer.lock();
		let mut def = self.load_table(table)?;
		if def.schema.indices.contains_key(&index.name) {
			return_error!(index_already_exists(table, &index.name));
		}
		def.schema.validate_index(&index)?;

		let name = index.name.clone();
		let id = def.next_index_id();
		def.schema.indices.insert(name.clone(), index);
		def.indices.insert(name.clone(), id);

		if let Err(err) = self.backfill(&def, &name) {
			for direction in SortDirection::ALL {
				self.remove_range(RowKey::index_scan(def.id, id, direction))?;
			}
			self.remove_range(RowKey::null_index_scan(def.id, id))?;
			return Err(err);
		}

		self.store.commit(table_deltas(&def)?)?;
		Ok(def)
	}

	/// Removes every entry of an index, then the index itself.
	#[instrument(name = "engine::index::drop", level = "debug", skip(self))]
	pub fn drop_index(&self, table: &str, name: &str) -> Result<TableDef> {
		let _guard = self.writer.lock();
		let mut def = self.load_table(table)?;

		let mut deltas = Vec::new();
		{
			let index = def.index(name)?;
			for entry in self.store.prefix(&RowKey::data_prefix(def.id))? {
				let row = Row::from_bytes(&entry.values)?;
				deltas.extend(plan_index_delete(&def, &index, &row)?);
			}
		}
		debug!(table, index = name, deltas = deltas.len(), "removing index entries");
		self.commit_batched(deltas)?;

		def.schema.indices.shift_remove(name);
		def.indices.shift_remove(name);
		self.store.commit(table_deltas(&def)?)?;
		Ok(def)
	}

	fn backfill(&self, def: &TableDef, name: &str) -> Result<()> {
		let index = def.index(name)?;
		let mut seen = BTreeSet::new();

		let mut deltas = Vec::new();
		let mut rows = 0usize;
		for entry in self.store.prefix(&RowKey::data_prefix(def.id))? {
			let row = Row::from_bytes(&entry.values)?;
			if index.schema.unique {
				// rows with a null are in the null bucket and never conflict
				let keys = index_keys(def, &index, &row)?;
				if let Some(RowKey::Index {
					values,
					..
				}) = keys.first().map(RowKey::decode).transpose()?
				{
					if !seen.insert(values) {
						return_error!(unique_index_violation(name));
					}
				}
			}

			deltas.extend(plan_index_insert(def, &index, &row)?);
			rows += 1;
			if deltas.len() >= self.config.write_batch_size {
				self.commit_batched(std::mem::take(&mut deltas))?;
			}
		}
		self.commit_batched(deltas)?;

		debug!(table = %def.name, index = name, rows, "backfilled index");
		Ok(())
	}
}
