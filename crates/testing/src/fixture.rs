// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_core::catalog::{ColumnSchema, IndexSchema, TableSchema};
use keystone_engine::{Engine, EngineBuilder};
use keystone_store::Memory;
use keystone_type::{RowId, Type};
use uuid::Uuid;

/// Engine over a fresh in-memory store.
pub fn memory_engine() -> Engine<Memory> {
	EngineBuilder::new(Memory::new()).build()
}

/// Deterministic row id; ids sort by `n`.
pub fn row_id(n: u128) -> RowId {
	RowId::from(Uuid::from_u128(n))
}

/// `people(id ULONG auto increment, name UTF8(32), city UTF8(16)?, age LONG?)`
/// with the indices `by_age(age)` and `by_city_age(city, age)`.
pub fn people_schema() -> TableSchema {
	TableSchema::new()
		.with_column(ColumnSchema::new("id", Type::Uint8).with_auto_increment(true))
		.with_column(ColumnSchema::utf8("name", 32))
		.with_column(ColumnSchema::utf8("city", 16).with_nullable(true))
		.with_column(ColumnSchema::new("age", Type::Int8).with_nullable(true))
		.with_index(IndexSchema::new("by_age", ["age"]))
		.with_index(IndexSchema::new("by_city_age", ["city", "age"]))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_row_ids_sort_by_number() {
		assert!(row_id(1) < row_id(2));
		assert!(row_id(255) < row_id(256));
	}

	#[test]
	fn test_people_schema_is_valid() {
		assert!(people_schema().validate().is_ok());
	}
}
