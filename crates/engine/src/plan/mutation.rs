// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_core::{
	EncodedKey, Row,
	catalog::{IndexDef, SortDirection, TableDef},
	interface::Delta,
	key::{IndexValues, RowKey},
};
use keystone_type::{
	Result, Value,
	error::diagnostic::{column::missing_column, contract::row_id_changed},
	return_error,
};
use tracing::trace;

/// Writes that store a new row: its data row and the entries of every index.
pub fn plan_insert(table: &TableDef, row: &Row) -> Result<Vec<Delta>> {
	check_required(table, row)?;

	let mut result = vec![data_set(table, row)?];
	for index in table.all_indices()? {
		result.extend(plan_index_insert(table, &index, row)?);
	}

	trace!(table = %table.id, row = %row.id, deltas = result.len(), "planned insert");
	Ok(result)
}

/// Removals of a stored row's data row and index entries.
pub fn plan_delete(table: &TableDef, row: &Row) -> Result<Vec<Delta>> {
	let mut result = vec![Delta::Remove {
		key: data_key(table, row),
	}];
	for index in table.all_indices()? {
		result.extend(plan_index_delete(table, &index, row)?);
	}

	trace!(table = %table.id, row = %row.id, deltas = result.len(), "planned delete");
	Ok(result)
}

/// Rewrites the data row and replaces the entries of every index whose
/// column values changed. Removals come before writes so an entry that
/// maps to the same key is kept.
pub fn plan_update(table: &TableDef, old: &Row, new: &Row) -> Result<Vec<Delta>> {
	if old.id != new.id {
		return_error!(row_id_changed(&old.id.to_string(), &new.id.to_string()));
	}
	check_required(table, new)?;

	let mut removes = Vec::new();
	let mut sets = Vec::new();
	for index in table.all_indices()? {
		let changed = index.schema.columns.iter().any(|column| old.record(column) != new.record(column));
		if !changed {
			continue;
		}
		removes.extend(plan_index_delete(table, &index, old)?);
		sets.extend(plan_index_insert(table, &index, new)?);
	}

	let mut result = removes;
	result.push(data_set(table, new)?);
	result.extend(sets);

	trace!(table = %table.id, row = %new.id, deltas = result.len(), "planned update");
	Ok(result)
}

/// Entries of one index for one row, used for inserts and index backfill.
pub fn plan_index_insert(table: &TableDef, index: &IndexDef<'_>, row: &Row) -> Result<Vec<Delta>> {
	Ok(index_keys(table, index, row)?
		.into_iter()
		.map(|key| Delta::Set {
			key,
			values: Vec::new(),
		})
		.collect())
}

pub fn plan_index_delete(table: &TableDef, index: &IndexDef<'_>, row: &Row) -> Result<Vec<Delta>> {
	Ok(index_keys(table, index, row)?
		.into_iter()
		.map(|key| Delta::Remove {
			key,
		})
		.collect())
}

/// The keys a row occupies in one index: an ascending and a descending
/// entry, or a single null bucket entry when any indexed column is null.
pub fn index_keys(table: &TableDef, index: &IndexDef<'_>, row: &Row) -> Result<Vec<EncodedKey>> {
	let mut values = Vec::with_capacity(index.columns.len());
	for column in &index.columns {
		match row.get(column)? {
			Some(value) => values.push(value),
			None => {
				return Ok(vec![
					RowKey::NullIndex {
						table: table.id,
						index: index.id,
						row: row.id,
					}
					.encode(),
				]);
			}
		}
	}

	let values: Vec<&Value> = values.iter().collect();
	let mut result = Vec::with_capacity(2);
	for direction in SortDirection::ALL {
		result.push(
			RowKey::Index {
				table: table.id,
				index: index.id,
				direction,
				values: IndexValues::encode(&values, &index.columns, direction)?,
				row: row.id,
			}
			.encode(),
		);
	}
	Ok(result)
}

fn check_required(table: &TableDef, row: &Row) -> Result<()> {
	for column in table.schema.columns.values() {
		if !column.nullable && row.is_null(&column.name) {
			return_error!(missing_column(&table.name, &column.name));
		}
	}
	Ok(())
}

fn data_key(table: &TableDef, row: &Row) -> EncodedKey {
	RowKey::Data {
		table: table.id,
		row: row.id,
	}
	.encode()
}

fn data_set(table: &TableDef, row: &Row) -> Result<Delta> {
	Ok(Delta::Set {
		key: data_key(table, row),
		values: row.to_bytes()?,
	})
}

#[cfg(test)]
mod tests {
	use indexmap::IndexMap;
	use keystone_core::{
		catalog::{ColumnSchema, IndexId, IndexSchema, TableId, TableSchema},
		key::KeyKind,
	};
	use keystone_type::{ErrorKind, RowId, Type};

	use super::*;

	fn table() -> TableDef {
		let schema = TableSchema::new()
			.with_column(ColumnSchema::new("id", Type::Int8))
			.with_column(ColumnSchema::utf8("name", 8).with_nullable(true))
			.with_column(ColumnSchema::new("score", Type::Float8))
			.with_index(IndexSchema::new("by_name", ["name"]))
			.with_index(IndexSchema::new("by_score", ["score", "id"]));
		let mut indices = IndexMap::new();
		indices.insert("by_name".to_string(), IndexId(1));
		indices.insert("by_score".to_string(), IndexId(2));
		TableDef {
			id: TableId(1),
			name: "players".to_string(),
			schema,
			indices,
		}
	}

	fn row(id: i64, name: Option<&str>, score: f64) -> Row {
		Row::encode(
			RowId::from_bytes([id as u8; 16]),
			[("id", Some(Value::Int8(id))), ("name", name.map(Value::from)), ("score", Some(Value::Float8(score)))],
			&table().schema,
		)
		.unwrap()
	}

	fn kinds(deltas: &[Delta]) -> Vec<KeyKind> {
		deltas.iter().map(|delta| KeyKind::try_from(delta.key()[0]).unwrap()).collect()
	}

	#[test]
	fn test_insert_writes_data_and_both_directions() {
		let deltas = plan_insert(&table(), &row(1, Some("ann"), 1.5)).unwrap();
		assert_eq!(
			kinds(&deltas),
			vec![KeyKind::Data, KeyKind::IndexAsc, KeyKind::IndexDesc, KeyKind::IndexAsc, KeyKind::IndexDesc]
		);
		assert!(deltas.iter().all(|delta| matches!(delta, Delta::Set { .. })));

		let Delta::Set {
			values,
			..
		} = &deltas[0]
		else {
			panic!("expected a set");
		};
		assert_eq!(Row::from_bytes(values).unwrap(), row(1, Some("ann"), 1.5));
	}

	#[test]
	fn test_null_column_goes_to_null_bucket() {
		let deltas = plan_insert(&table(), &row(2, None, 3.0)).unwrap();
		assert_eq!(kinds(&deltas), vec![KeyKind::Data, KeyKind::NullIndex, KeyKind::IndexAsc, KeyKind::IndexDesc]);
	}

	#[test]
	fn test_index_entries_end_in_row_id() {
		let row = row(3, Some("bob"), 2.0);
		for delta in plan_insert(&table(), &row).unwrap() {
			assert_eq!(RowKey::decode(delta.key()).unwrap().row(), Some(row.id));
		}
	}

	#[test]
	fn test_missing_required_column() {
		let schema = table().schema;
		let row = Row::encode(RowId::from_bytes([9; 16]), [("id", Some(Value::Int8(9)))], &schema).unwrap();
		let err = plan_insert(&table(), &row).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::MissingColumn);
		assert!(err.message.contains("score"));
	}

	#[test]
	fn test_delete_removes_everything_insert_wrote() {
		let row = row(4, Some("cy"), 0.5);
		let inserted: Vec<EncodedKey> = plan_insert(&table(), &row).unwrap().iter().map(|d| d.key().clone()).collect();
		let deleted = plan_delete(&table(), &row).unwrap();
		assert!(deleted.iter().all(|delta| matches!(delta, Delta::Remove { .. })));
		assert_eq!(deleted.iter().map(|d| d.key().clone()).collect::<Vec<_>>(), inserted);
	}

	#[test]
	fn test_update_rewrites_changed_indices_only() {
		let old = row(5, Some("dee"), 1.0);
		let new = row(5, Some("dee"), 2.0);
		let deltas = plan_update(&table(), &old, &new).unwrap();

		// by_score removes and re-adds both directions, by_name is untouched
		assert_eq!(
			kinds(&deltas),
			vec![
				KeyKind::IndexAsc,
				KeyKind::IndexDesc,
				KeyKind::Data,
				KeyKind::IndexAsc,
				KeyKind::IndexDesc
			]
		);
		assert!(matches!(deltas[0], Delta::Remove { .. }));
		assert!(matches!(deltas[3], Delta::Set { .. }));
	}

	#[test]
	fn test_update_without_index_change_rewrites_data_only() {
		let table = TableDef {
			schema: table().schema.with_column(ColumnSchema::utf8("note", 8).with_nullable(true)),
			..table()
		};
		let old = row(6, Some("eve"), 1.0);
		let mut new = old.clone();
		new.set(table.schema.column("note").unwrap(), Some(&Value::from("hi"))).unwrap();

		let deltas = plan_update(&table, &old, &new).unwrap();
		assert_eq!(kinds(&deltas), vec![KeyKind::Data]);
	}

	#[test]
	fn test_update_into_null_bucket() {
		let old = row(7, Some("fay"), 1.0);
		let new = row(7, None, 1.0);
		let deltas = plan_update(&table(), &old, &new).unwrap();
		assert_eq!(kinds(&deltas), vec![KeyKind::IndexAsc, KeyKind::IndexDesc, KeyKind::Data, KeyKind::NullIndex]);
	}

	#[test]
	fn test_update_cannot_change_identity() {
		let err = plan_update(&table(), &row(1, None, 1.0), &row(2, None, 1.0)).unwrap_err();
		assert_eq!(err.code, "CONTRACT_015");
	}
}
