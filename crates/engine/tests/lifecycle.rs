// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Table lifecycle: counters, index maintenance, unique indexes, truncate and drop

use keystone_core::{
	EncodedKeyRange,
	catalog::{ColumnSchema, IndexSchema},
	interface::OrderedRange,
};
use keystone_engine::{Engine, EngineBuilder, EngineConfig, IndexQuery};
use keystone_store::Memory;
use keystone_testing::{init_tracing, memory_engine, people_schema, row_id};
use keystone_type::{ErrorKind, Result, Type, Value};

fn create_people(engine: &Engine<Memory>) -> Result<()> {
	init_tracing();
	engine.create_table("people", people_schema())?;
	for (n, name, city, age) in [
		(1, "ada", Some("oslo"), Some(36)),
		(2, "bob", Some("bern"), None),
		(3, "cyd", None, Some(19)),
		(4, "dan", Some("oslo"), Some(52)),
	] {
		engine.insert_row_with_id(
			"people",
			row_id(n),
			[("name", Some(Value::from(name))), ("city", city.map(Value::from)), ("age", age.map(Value::Int8))],
		)?;
	}
	Ok(())
}

#[test]
fn test_counters_follow_row_lifecycle() -> Result<()> {
	let engine = memory_engine();
	create_people(&engine)?;
	assert_eq!(engine.row_count("people")?, 4);
	assert_eq!(engine.auto_increment("people")?, 4);

	let id_column = ColumnSchema::new("id", Type::Uint8);
	let ids: Vec<_> = engine.table_scan("people")?.iter().map(|row| row.get(&id_column)).collect::<Result<_>>()?;
	assert_eq!(ids, vec![Some(Value::Uint8(1)), Some(Value::Uint8(2)), Some(Value::Uint8(3)), Some(Value::Uint8(4))]);

	engine.delete_row("people", row_id(2))?;
	assert_eq!(engine.row_count("people")?, 3);

	engine.truncate_table("people")?;
	assert_eq!(engine.row_count("people")?, 0);
	assert!(engine.table_scan("people")?.is_empty());
	assert!(engine.index_scan("people", &IndexQuery::first("by_age"))?.is_empty());
	assert!(engine.index_scan("people", &IndexQuery::exact("by_age").with_null("age"))?.is_empty());

	// truncation keeps handing out fresh auto-increment values
	let id = engine.insert_row("people", [("name", Some(Value::from("eve")))])?;
	let row = engine.get_row("people", id)?.unwrap();
	assert_eq!(row.get(&id_column)?, Some(Value::Uint8(5)));
	assert_eq!(engine.row_count("people")?, 1);
	Ok(())
}

#[test]
fn test_add_index_backfills_and_drop_index_removes() -> Result<()> {
	let engine = EngineBuilder::new(Memory::new()).write_batch_size(3).build();
	create_people(&engine)?;

	engine.add_index("people", IndexSchema::new("by_name", ["name"]))?;
	let names = engine.index_scan("people", &IndexQuery::first("by_name"))?;
	assert_eq!(names, vec![row_id(1), row_id(2), row_id(3), row_id(4)]);
	let reversed = engine.index_scan("people", &IndexQuery::last("by_name"))?;
	assert_eq!(reversed, vec![row_id(4), row_id(3), row_id(2), row_id(1)]);

	// rows written after the backfill are maintained as well
	engine.insert_row_with_id("people", row_id(9), [("name", Some(Value::from("bea")))])?;
	let found = engine.index_scan("people", &IndexQuery::exact("by_name").with_value("name", "bea"))?;
	assert_eq!(found, vec![row_id(9)]);

	engine.drop_index("people", "by_name")?;
	let err = engine.index_scan("people", &IndexQuery::first("by_name")).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Catalog);

	// the remaining indices are untouched
	assert_eq!(engine.index_scan("people", &IndexQuery::first("by_age"))?.len(), 3);
	Ok(())
}

#[test]
fn test_unique_index() -> Result<()> {
	let engine = memory_engine();
	create_people(&engine)?;
	engine.add_index("people", IndexSchema::new("unique_name", ["name"]).with_unique(true))?;

	let err = engine.insert_row("people", [("name", Some(Value::from("ada")))]).unwrap_err();
	assert_eq!(err.code, "CONTRACT_009");
	assert_eq!(engine.row_count("people")?, 4);

	let err = engine.update_row("people", row_id(2), [("name", Some(Value::from("dan")))]).unwrap_err();
	assert_eq!(err.code, "CONTRACT_009");

	// rewriting a row with its own value is not a conflict
	engine.update_row("people", row_id(2), [("name", Some(Value::from("bob"))), ("age", Some(Value::Int8(70)))])?;
	Ok(())
}

#[test]
fn test_insert_rejects_existing_row_id() -> Result<()> {
	let engine = memory_engine();
	create_people(&engine)?;

	let err = engine.insert_row_with_id("people", row_id(1), [("name", Some(Value::from("zed")))]).unwrap_err();
	assert_eq!(err.code, "CONTRACT_010");

	let err = engine.insert_row("people", [("city", Some(Value::from("rome")))]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::MissingColumn);
	assert_eq!(engine.row_count("people")?, 4);
	Ok(())
}

#[test]
fn test_alter_and_drop_table() -> Result<()> {
	let store = Memory::new();
	let engine = Engine::new(store.clone());
	create_people(&engine)?;

	engine.rename_table("people", "persons")?;
	assert_eq!(engine.tables()?, vec!["persons".to_string()]);
	assert_eq!(engine.table("people").unwrap_err().code, "CATALOG_001");

	engine.add_column("persons", ColumnSchema::new("score", Type::Float8).with_nullable(true))?;
	engine.update_row("persons", row_id(1), [("score", Some(Value::Float8(9.5)))])?;
	let row = engine.get_row("persons", row_id(1))?.unwrap();
	assert_eq!(row.get(&ColumnSchema::new("score", Type::Float8))?, Some(Value::Float8(9.5)));

	engine.drop_table("persons")?;
	assert!(engine.tables()?.is_empty());
	// only the table catalog row survives
	assert_eq!(store.range(EncodedKeyRange::all())?.count(), 1);
	Ok(())
}

#[test]
fn test_split_points_and_suggestion() -> Result<()> {
	let config = EngineConfig::from_json(r#"{"split": {"segment_bytes": 128}}"#)?;
	let engine = EngineBuilder::new(Memory::new()).with_config(config).build();
	create_people(&engine)?;

	let def = engine.table("people")?;
	let points = engine.split_points("people")?;
	// data range plus both directions of the two indices
	assert_eq!(points.len(), 5);
	assert!(points.windows(2).all(|pair| pair[0] < pair[1]));

	let range = keystone_core::key::RowKey::data_scan(def.id);
	if let Some(split) = engine.suggest_split(range.clone())? {
		assert!(range.contains_key(&split));
	}
	Ok(())
}
