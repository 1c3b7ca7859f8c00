// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use keystone_core::{
	Row,
	catalog::{ColumnSchema, IndexId, SortDirection, TableDef, TableId, TableSchema},
	interface::{Delta, OrderedStore},
	key::RowKey,
};
use keystone_type::{
	Result,
	error::diagnostic::{
		catalog::{column_already_exists, column_in_use, table_already_exists, table_not_found},
		contract::{non_nullable_column_added, unknown_column},
	},
	return_error,
};
use tracing::{debug, instrument};

use crate::{
	Engine,
	catalog::{ColumnsRow, columns_delta, counter_delta, load_columns, load_tables, table_deltas, tables_delta},
};

impl<S: OrderedStore> Engine<S> {
	/// Creates a table with zeroed counters. Indexes declared in `schema`
	/// get ids in declaration order starting at 1.
	#[instrument(name = "engine::table::create", level = "debug", skip(self, schema))]
	pub fn create_table(&self, name: &str, schema: TableSchema) -> Result<TableDef> {
		schema.validate()?;

		let _guard = self.writer.lock();
		let mut tables = load_tables(&self.store)?;
		if tables.tables.contains_key(name) {
			return_error!(table_already_exists(name));
		}

		tables.last_id += 1;
		let id = TableId(tables.last_id);
		tables.tables.insert(name.to_string(), id);

		let indices: IndexMap<String, IndexId> =
			schema.indices.keys().enumerate().map(|(i, index)| (index.clone(), IndexId(i as u64 + 1))).collect();
		let table = TableDef {
			id,
			name: name.to_string(),
			schema,
			indices,
		};

		let mut deltas = vec![tables_delta(&tables)?, columns_delta(id, &ColumnsRow::from_schema(&table.schema))?];
		deltas.extend(table_deltas(&table)?);
		deltas.push(counter_delta(
			RowKey::RowCount {
				table: id,
			}
			.encode(),
			0,
		));
		deltas.push(counter_delta(
			RowKey::AutoInc {
				table: id,
			}
			.encode(),
			0,
		));
		self.store.commit(deltas)?;

		debug!(table = name, id = %id, "created table");
		Ok(table)
	}

	#[instrument(name = "engine::table::get", level = "trace", skip(self))]
	pub fn table(&self, name: &str) -> Result<TableDef> {
		self.load_table(name)
	}

	/// Names of all tables in creation order.
	pub fn tables(&self) -> Result<Vec<String>> {
		Ok(load_tables(&self.store)?.tables.into_keys().collect())
	}

	/// Stable column ids of a table.
	pub fn column_ids(&self, table: &str) -> Result<IndexMap<String, u64>> {
		let table = self.load_table(table)?;
		Ok(load_columns(&self.store, table.id)?.columns)
	}

	#[instrument(name = "engine::table::rename", level = "debug", skip(self))]
	pub fn rename_table(&self, from: &str, to: &str) -> Result<()> {
		let _guard = self.writer.lock();
		let mut tables = load_tables(&self.store)?;
		if tables.tables.contains_key(to) {
			return_error!(table_already_exists(to));
		}
		let Some(index) = tables.tables.get_index_of(from) else {
			return_error!(table_not_found(from));
		};

		let Some((_, id)) = tables.tables.shift_remove_index(index) else {
			return_error!(table_not_found(from));
		};
		tables.tables.shift_insert(index, to.to_string(), id);
		self.store.commit(vec![tables_delta(&tables)?])
	}

	/// Adds a nullable column. Existing rows read it as null.
	#[instrument(name = "engine::table::add_column", level = "debug", skip(self, column))]
	pub fn add_column(&self, table: &str, column: ColumnSchema) -> Result<TableDef> {
		column.validate()?;
		if !column.nullable {
			return_error!(non_nullable_column_added(&column.name, column.ty));
		}

		let _guard = self.writer.lock();
		let mut def = self.load_table(table)?;
		if def.schema.columns.contains_key(&column.name) {
			return_error!(column_already_exists(table, &column.name));
		}

		let mut columns = load_columns(&self.store, def.id)?;
		columns.add(&column.name);
		def.schema.columns.insert(column.name.clone(), column);

		let mut deltas = table_deltas(&def)?;
		deltas.push(columns_delta(def.id, &columns)?);
		self.store.commit(deltas)?;
		Ok(def)
	}

	/// Drops a column no index uses and strips its values from every row.
	#[instrument(name = "engine::table::drop_column", level = "debug", skip(self))]
	pub fn drop_column(&self, table: &str, column: &str) -> Result<TableDef> {
		let _guard = self.writer.lock();
		let mut def = self.load_table(table)?;
		if def.schema.columns.shift_remove(column).is_none() {
			return_error!(unknown_column(column));
		}
		if let Some(index) = def.schema.indices.values().find(|index| index.contains(column)) {
			return_error!(column_in_use(table, column, &index.name));
		}

		let mut rewrites = Vec::new();
		for entry in self.store.prefix(&RowKey::data_prefix(def.id))? {
			let mut row = Row::from_bytes(&entry.values)?;
			if row.records.remove(column).is_some() {
				rewrites.push(Delta::Set {
					key: entry.key,
					values: row.to_bytes()?,
				});
			}
		}
		debug!(table, column, rows = rewrites.len(), "stripping dropped column");
		self.commit_batched(rewrites)?;

		let mut columns = load_columns(&self.store, def.id)?;
		columns.columns.shift_remove(column);

		let mut deltas = table_deltas(&def)?;
		deltas.push(columns_delta(def.id, &columns)?);
		self.store.commit(deltas)?;
		Ok(def)
	}

	/// Removes the table with all its rows, index entries and metadata.
	#[instrument(name = "engine::table::drop", level = "debug", skip(self))]
	pub fn drop_table(&self, name: &str) -> Result<()> {
		let _guard = self.writer.lock();
		let def = self.load_table(name)?;
		let removed = self.remove_rows(&def)?;

		let mut tables = load_tables(&self.store)?;
		tables.tables.shift_remove(name);

		let mut deltas = vec![tables_delta(&tables)?];
		for key in [
			RowKey::Columns {
				table: def.id,
			},
			RowKey::Indices {
				table: def.id,
			},
			RowKey::Schema {
				table: def.id,
			},
			RowKey::AutoInc {
				table: def.id,
			},
			RowKey::RowCount {
				table: def.id,
			},
		] {
			deltas.push(Delta::Remove {
				key: key.encode(),
			});
		}
		self.store.commit(deltas)?;

		debug!(table = name, removed, "dropped table");
		Ok(())
	}

	/// Deletes every row and index entry and resets the row count. The
	/// auto-increment counter is kept.
	#[instrument(name = "engine::table::truncate", level = "debug", skip(self))]
	pub fn truncate_table(&self, name: &str) -> Result<()> {
		let _guard = self.writer.lock();
		let def = self.load_table(name)?;
		let removed = self.remove_rows(&def)?;
		self.store.commit(vec![counter_delta(
			RowKey::RowCount {
				table: def.id,
			}
			.encode(),
			0,
		)])?;

		debug!(table = name, removed, "truncated table");
		Ok(())
	}

	/// Removes data rows, both directions of every index and every null
	/// bucket of the table.
	fn remove_rows(&self, def: &TableDef) -> Result<usize> {
		let mut removed = self.remove_range(RowKey::data_scan(def.id))?;
		for index in def.indices.values() {
			for direction in SortDirection::ALL {
				removed += self.remove_range(RowKey::index_scan(def.id, *index, direction))?;
			}
			removed += self.remove_range(RowKey::null_index_scan(def.id, *index))?;
		}
		Ok(removed)
	}
}
