// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_core::{
	Row,
	catalog::TableDef,
	interface::{Delta, OrderedStore},
	key::RowKey,
};
use keystone_type::{
	Result, RowId, Type, Value,
	error::diagnostic::{
		catalog::row_not_found,
		contract::{row_already_exists, unique_index_violation, unknown_column},
		domain::integer_out_of_range,
	},
	return_error,
};
use tracing::instrument;

use crate::{
	Engine, IndexQuery,
	catalog::{counter_delta, load_counter},
	plan::{plan_delete, plan_index_scan, plan_insert, plan_update},
};

impl<S: OrderedStore> Engine<S> {
	/// Inserts a row under a freshly generated id.
	pub fn insert_row<'a, I>(&self, table: &str, values: I) -> Result<RowId>
	where
		I: IntoIterator<Item = (&'a str, Option<Value>)>,
	{
		self.insert_row_with_id(table, RowId::generate(), values)
	}

	/// Inserts a row under a caller supplied id. Null auto-increment columns
	/// take the next counter value; the row count grows by one.
	#[instrument(name = "engine::row::insert", level = "debug", skip(self, values))]
	pub fn insert_row_with_id<'a, I>(&self, table: &str, id: RowId, values: I) -> Result<RowId>
	where
		I: IntoIterator<Item = (&'a str, Option<Value>)>,
	{
		let _guard = self.writer.lock();
		let def = self.load_table(table)?;
		// a null auto-increment column is filled below instead of rejected
		let values = values.into_iter().filter(|(name, value)| {
			value.is_some() || !def.schema.column(name).is_some_and(|column| column.auto_increment)
		});
		let mut row = Row::encode(id, values, &def.schema)?;

		let mut deltas = Vec::new();
		if let Some(delta) = self.fill_auto_increment(&def, &mut row)? {
			deltas.push(delta);
		}

		if self.config.verify_fresh_row_ids {
			let key = RowKey::Data {
				table: def.id,
				row: id,
			}
			.encode();
			if self.store.contains(&key)? {
				return_error!(row_already_exists(&id.to_string()));
			}
		}
		self.check_unique(&def, &row)?;

		deltas.extend(plan_insert(&def, &row)?);
		deltas.push(self.row_count_delta(&def, 1)?);
		self.store.commit(deltas)?;
		Ok(id)
	}

	/// Sets the given columns of an existing row. Columns not named keep
	/// their value.
	#[instrument(name = "engine::row::update", level = "debug", skip(self, values))]
	pub fn update_row<'a, I>(&self, table: &str, id: RowId, values: I) -> Result<Row>
	where
		I: IntoIterator<Item = (&'a str, Option<Value>)>,
	{
		let _guard = self.writer.lock();
		let def = self.load_table(table)?;
		let Some(old) = self.read_row(&def, id)? else {
			return_error!(row_not_found(table, &id.to_string()));
		};

		let mut new = old.clone();
		for (name, value) in values {
			let Some(column) = def.schema.column(name) else {
				return_error!(unknown_column(name));
			};
			new.set(column, value.as_ref())?;
		}
		self.check_unique(&def, &new)?;

		self.store.commit(plan_update(&def, &old, &new)?)?;
		Ok(new)
	}

	/// Deletes a row with its index entries; the row count shrinks by one.
	#[instrument(name = "engine::row::delete", level = "debug", skip(self))]
	pub fn delete_row(&self, table: &str, id: RowId) -> Result<()> {
		let _guard = self.writer.lock();
		let def = self.load_table(table)?;
		let Some(old) = self.read_row(&def, id)? else {
			return_error!(row_not_found(table, &id.to_string()));
		};

		let mut deltas = plan_delete(&def, &old)?;
		deltas.push(self.row_count_delta(&def, -1)?);
		self.store.commit(deltas)
	}

	#[instrument(name = "engine::row::get", level = "trace", skip(self))]
	pub fn get_row(&self, table: &str, id: RowId) -> Result<Option<Row>> {
		let def = self.load_table(table)?;
		self.read_row(&def, id)
	}

	pub(crate) fn read_row(&self, def: &TableDef, id: RowId) -> Result<Option<Row>> {
		let key = RowKey::Data {
			table: def.id,
			row: id,
		}
		.encode();
		self.store.get(&key)?.map(|stored| Row::from_bytes(&stored.values)).transpose()
	}

	/// Assigns the next auto-increment value to every null auto-increment
	/// column and returns the counter update.
	fn fill_auto_increment(&self, def: &TableDef, row: &mut Row) -> Result<Option<Delta>> {
		let columns: Vec<_> = def
			.schema
			.columns
			.values()
			.filter(|column| column.auto_increment && row.is_null(&column.name))
			.collect();
		if columns.is_empty() {
			return Ok(None);
		}

		let key = RowKey::AutoInc {
			table: def.id,
		}
		.encode();
		let current = load_counter(&self.store, &key, "auto increment")?;
		let Some(next) = current.checked_add(1) else {
			let next = u128::from(current) + 1;
			return_error!(integer_out_of_range(&next.to_string(), columns[0].ty));
		};

		for column in columns {
			let value = match column.ty {
				Type::Uint8 => Value::Uint8(next),
				_ => match i64::try_from(next) {
					Ok(next) => Value::Int8(next),
					Err(_) => return_error!(integer_out_of_range(&next.to_string(), column.ty)),
				},
			};
			row.set(column, Some(&value))?;
		}
		Ok(Some(counter_delta(key, next)))
	}

	/// Rejects a row whose full value of a unique index is already taken by
	/// another row. Rows with a null in the index are never in conflict.
	fn check_unique(&self, def: &TableDef, row: &Row) -> Result<()> {
		for index in def.all_indices()? {
			if !index.schema.unique {
				continue;
			}

			let mut query = IndexQuery::exact(index.name());
			for column in &index.columns {
				match row.get(column)? {
					Some(value) => query = query.with_value(column.name.clone(), value),
					None => {
						query.values.clear();
						break;
					}
				}
			}
			if query.values.is_empty() {
				continue;
			}

			let plan = plan_index_scan(def, &query)?;
			for id in self.execute_scan(def, &plan)? {
				if id != row.id {
					return_error!(unique_index_violation(index.name()));
				}
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use keystone_core::catalog::{ColumnSchema, IndexSchema, TableSchema};
	use keystone_store::Memory;
	use keystone_type::ErrorKind;

	use super::*;

	fn engine() -> Engine<Memory> {
		let engine = Engine::new(Memory::new());
		let schema = TableSchema::new()
			.with_column(ColumnSchema::utf8("name", 16))
			.with_column(ColumnSchema::new("age", Type::Int8).with_nullable(true))
			.with_index(IndexSchema::new("by_age", ["age"]));
		engine.create_table("t", schema).unwrap();
		engine
	}

	#[test]
	fn test_insert_and_get() {
		let engine = engine();
		let id = engine.insert_row("t", [("name", Some(Value::from("ada"))), ("age", Some(Value::Int8(36)))]).unwrap();

		let row = engine.get_row("t", id).unwrap().unwrap();
		assert_eq!(row.id, id);
		let def = engine.table("t").unwrap();
		let values = row.values(&def.schema).unwrap();
		assert_eq!(values.get("name"), Some(&Some(Value::from("ada"))));
		assert_eq!(values.get("age"), Some(&Some(Value::Int8(36))));
	}

	#[test]
	fn test_get_missing_row() {
		let engine = engine();
		assert_eq!(engine.get_row("t", RowId::generate()).unwrap(), None);
	}

	#[test]
	fn test_insert_with_existing_id() {
		let engine = engine();
		let id = RowId::from_bytes([7; 16]);
		engine.insert_row_with_id("t", id, [("name", Some(Value::from("a")))]).unwrap();
		let err = engine.insert_row_with_id("t", id, [("name", Some(Value::from("b")))]).unwrap_err();
		assert_eq!(err.code, "CONTRACT_010");
	}

	#[test]
	fn test_unverified_insert_trusts_the_caller() {
		let engine = crate::EngineBuilder::new(Memory::new()).verify_fresh_row_ids(false).build();
		let schema = TableSchema::new()
			.with_column(ColumnSchema::utf8("name", 16))
			.with_column(ColumnSchema::new("age", Type::Int8).with_nullable(true))
			.with_index(IndexSchema::new("by_age", ["age"]));
		engine.create_table("t", schema).unwrap();

		// reusing an id is a caller error the engine does not detect
		let id = RowId::from_bytes([7; 16]);
		engine.insert_row_with_id("t", id, [("name", Some(Value::from("a"))), ("age", Some(Value::Int8(1)))]).unwrap();
		engine.insert_row_with_id("t", id, [("name", Some(Value::from("b"))), ("age", Some(Value::Int8(2)))]).unwrap();

		assert_eq!(engine.get_row("t", id).unwrap().unwrap().record("name"), Some(&b"b"[..]));
		assert_eq!(engine.index_scan("t", &IndexQuery::first("by_age")).unwrap(), vec![id, id]);
		assert_eq!(engine.row_count("t").unwrap(), 2);
	}

	#[test]
	fn test_update_keeps_unnamed_columns() {
		let engine = engine();
		let id = engine.insert_row("t", [("name", Some(Value::from("ada"))), ("age", Some(Value::Int8(36)))]).unwrap();

		let row = engine.update_row("t", id, [("age", Some(Value::Int8(37)))]).unwrap();
		assert_eq!(row.record("name"), Some(&b"ada"[..]));
		assert_eq!(engine.get_row("t", id).unwrap(), Some(row));
	}

	#[test]
	fn test_update_errors() {
		let engine = engine();
		let id = engine.insert_row("t", [("name", Some(Value::from("ada")))]).unwrap();

		let err = engine.update_row("t", id, [("name", None)]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::ContractViolation);
		let err = engine.update_row("t", id, [("height", Some(Value::Int8(1)))]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::ContractViolation);
		let err = engine.update_row("t", RowId::generate(), [("age", None)]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Catalog);
	}

	#[test]
	fn test_delete() {
		let engine = engine();
		let id = engine.insert_row("t", [("name", Some(Value::from("ada"))), ("age", Some(Value::Int8(1)))]).unwrap();

		engine.delete_row("t", id).unwrap();
		assert_eq!(engine.get_row("t", id).unwrap(), None);
		assert!(engine.index_scan("t", &IndexQuery::first("by_age")).unwrap().is_empty());
		assert_eq!(engine.delete_row("t", id).unwrap_err().kind(), ErrorKind::Catalog);
	}

	#[test]
	fn test_auto_increment_out_of_range_for_signed_column() {
		let engine = Engine::new(Memory::new());
		let schema = TableSchema::new().with_column(ColumnSchema::new("id", Type::Int8).with_auto_increment(true));
		engine.create_table("t", schema).unwrap();
		engine.increment_auto_increment("t", i64::MAX as u64).unwrap();

		let err = engine.insert_row("t", Vec::<(&str, Option<Value>)>::new()).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Domain);
	}

	#[test]
	fn test_auto_increment_out_of_range_for_unsigned_column() {
		let engine = Engine::new(Memory::new());
		let schema = TableSchema::new()
			.with_column(ColumnSchema::new("id", Type::Uint8).with_auto_increment(true))
			.with_column(ColumnSchema::utf8("name", 16));
		engine.create_table("t", schema).unwrap();
		engine.increment_auto_increment("t", u64::MAX).unwrap();

		let err = engine.insert_row("t", [("name", Some(Value::from("a")))]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Domain);
		assert_eq!(engine.auto_increment("t").unwrap(), u64::MAX);
		assert_eq!(engine.row_count("t").unwrap(), 0);
		assert!(engine.table_scan("t").unwrap().is_empty());
	}
}
