// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Table metadata kept in the store next to the data: the table catalog
//! under the tables key and, per table, column ids, index ids, schema and
//! the two counters.

use indexmap::IndexMap;
use keystone_core::{
	EncodedKey,
	catalog::{TableDef, TableId, TableSchema},
	interface::{Delta, OrderedGet},
	key::RowKey,
};
use keystone_type::{
	Result,
	error::diagnostic::{catalog::table_not_found, store},
	return_error,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Names of all tables and the last assigned table id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TablesRow {
	pub tables: IndexMap<String, TableId>,
	pub last_id: u64,
}

/// Column ids of a table. Ids are never reused after a column is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ColumnsRow {
	pub columns: IndexMap<String, u64>,
	pub last_id: u64,
}

impl ColumnsRow {
	pub fn from_schema(schema: &TableSchema) -> Self {
		let mut result = Self::default();
		for name in schema.columns.keys() {
			result.add(name);
		}
		result
	}

	pub fn add(&mut self, name: &str) {
		self.last_id += 1;
		self.columns.insert(name.to_string(), self.last_id);
	}
}

pub(crate) fn load_tables<S: OrderedGet>(store: &S) -> Result<TablesRow> {
	match store.get(&RowKey::Tables.encode())? {
		Some(stored) => decode("tables", &stored.values),
		None => Ok(TablesRow::default()),
	}
}

pub(crate) fn load_table<S: OrderedGet>(store: &S, name: &str) -> Result<TableDef> {
	let tables = load_tables(store)?;
	let Some(id) = tables.tables.get(name).copied() else {
		return_error!(table_not_found(name));
	};

	let schema_key = RowKey::Schema {
		table: id,
	}
	.encode();
	let Some(schema) = store.get(&schema_key)? else {
		return_error!(table_not_found(name));
	};

	let indices_key = RowKey::Indices {
		table: id,
	}
	.encode();
	let indices = match store.get(&indices_key)? {
		Some(stored) => decode("indices", &stored.values)?,
		None => IndexMap::new(),
	};

	Ok(TableDef {
		id,
		name: name.to_string(),
		schema: decode("schema", &schema.values)?,
		indices,
	})
}

pub(crate) fn load_columns<S: OrderedGet>(store: &S, table: TableId) -> Result<ColumnsRow> {
	let key = RowKey::Columns {
		table,
	}
	.encode();
	match store.get(&key)? {
		Some(stored) => decode("columns", &stored.values),
		None => Ok(ColumnsRow::default()),
	}
}

pub(crate) fn tables_delta(tables: &TablesRow) -> Result<Delta> {
	Ok(Delta::Set {
		key: RowKey::Tables.encode(),
		values: encode("tables", tables)?,
	})
}

pub(crate) fn columns_delta(table: TableId, columns: &ColumnsRow) -> Result<Delta> {
	Ok(Delta::Set {
		key: RowKey::Columns {
			table,
		}
		.encode(),
		values: encode("columns", columns)?,
	})
}

/// Schema and index ids of a table definition.
pub(crate) fn table_deltas(table: &TableDef) -> Result<Vec<Delta>> {
	Ok(vec![
		Delta::Set {
			key: RowKey::Indices {
				table: table.id,
			}
			.encode(),
			values: encode("indices", &table.indices)?,
		},
		Delta::Set {
			key: RowKey::Schema {
				table: table.id,
			}
			.encode(),
			values: encode("schema", &table.schema)?,
		},
	])
}

/// Reads an 8-byte big-endian counter. A missing counter is zero.
pub(crate) fn load_counter<S: OrderedGet>(store: &S, key: &EncodedKey, what: &str) -> Result<u64> {
	let Some(stored) = store.get(key)? else {
		return Ok(0);
	};
	let Ok(bytes) = <[u8; 8]>::try_from(stored.values.as_slice()) else {
		return_error!(store::corrupt_counter(what, stored.values.len()));
	};
	Ok(u64::from_be_bytes(bytes))
}

pub(crate) fn counter_delta(key: EncodedKey, value: u64) -> Delta {
	Delta::Set {
		key,
		values: value.to_be_bytes().to_vec(),
	}
}

fn encode<T: Serialize + ?Sized>(what: &str, value: &T) -> Result<Vec<u8>> {
	postcard::to_allocvec(value).map_err(|err| keystone_type::error!(store::serialize(what, err.to_string())))
}

fn decode<T: DeserializeOwned>(what: &str, bytes: &[u8]) -> Result<T> {
	postcard::from_bytes(bytes).map_err(|err| keystone_type::error!(store::deserialize(what, err.to_string())))
}

#[cfg(test)]
mod tests {
	use keystone_core::{
		catalog::ColumnSchema,
		interface::{OrderedCommit, OrderedSet},
	};
	use keystone_store::Memory;
	use keystone_type::{ErrorKind, Type};

	use super::*;

	#[test]
	fn test_empty_catalog() {
		let store = Memory::new();
		assert_eq!(load_tables(&store).unwrap(), TablesRow::default());
		assert_eq!(load_table(&store, "missing").unwrap_err().kind(), ErrorKind::Catalog);
	}

	#[test]
	fn test_table_round_trip() {
		let store = Memory::new();
		let schema = TableSchema::new().with_column(ColumnSchema::new("a", Type::Int8));
		let table = TableDef {
			id: TableId(4),
			name: "t".to_string(),
			schema,
			indices: IndexMap::new(),
		};

		let mut tables = TablesRow::default();
		tables.tables.insert("t".to_string(), TableId(4));
		tables.last_id = 4;

		let mut deltas = vec![tables_delta(&tables).unwrap()];
		deltas.extend(table_deltas(&table).unwrap());
		store.commit(deltas).unwrap();

		assert_eq!(load_table(&store, "t").unwrap(), table);
	}

	#[test]
	fn test_column_ids_are_not_reused() {
		let schema = TableSchema::new()
			.with_column(ColumnSchema::new("a", Type::Int8))
			.with_column(ColumnSchema::new("b", Type::Int8));
		let mut columns = ColumnsRow::from_schema(&schema);
		columns.columns.shift_remove("b");
		columns.add("c");
		assert_eq!(columns.columns.get("a"), Some(&1));
		assert_eq!(columns.columns.get("c"), Some(&3));
	}

	#[test]
	fn test_counters() {
		let store = Memory::new();
		let key = RowKey::RowCount {
			table: TableId(1),
		}
		.encode();
		assert_eq!(load_counter(&store, &key, "row count").unwrap(), 0);

		store.commit(vec![counter_delta(key.clone(), 42)]).unwrap();
		assert_eq!(load_counter(&store, &key, "row count").unwrap(), 42);

		store.set(&key, vec![1, 2, 3]).unwrap();
		let err = load_counter(&store, &key, "row count").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Store);
	}
}
