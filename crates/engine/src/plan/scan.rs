// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Bound,
};

use keystone_core::{
	EncodedKey, EncodedKeyRange, Row,
	catalog::{IndexDef, SortDirection, TableDef},
	key::{IndexValues, RowKey, prefix_end},
	util::encoding::keycode::{self, KeySerializer},
};
use keystone_type::{
	Result, RowId, Value,
	error::diagnostic::contract::{null_in_ordered_query, query_not_index_prefix},
	return_error,
};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
	/// Rows equal to the supplied values.
	ExactKey,
	/// Rows strictly greater than the supplied values, ascending.
	AfterKey,
	/// Rows strictly smaller than the supplied values, descending.
	BeforeKey,
	/// Rows greater than or equal to the supplied values, ascending.
	KeyOrNext,
	/// Rows smaller than or equal to the supplied values, descending.
	KeyOrPrevious,
	/// The whole index, ascending.
	IndexFirst,
	/// The whole index, descending.
	IndexLast,
}

impl QueryType {
	/// The physical index direction the query scans.
	pub fn direction(&self) -> SortDirection {
		match self {
			QueryType::ExactKey | QueryType::AfterKey | QueryType::KeyOrNext | QueryType::IndexFirst => {
				SortDirection::Asc
			}
			QueryType::BeforeKey | QueryType::KeyOrPrevious | QueryType::IndexLast => SortDirection::Desc,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			QueryType::ExactKey => "exact key",
			QueryType::AfterKey => "after key",
			QueryType::BeforeKey => "before key",
			QueryType::KeyOrNext => "key or next",
			QueryType::KeyOrPrevious => "key or previous",
			QueryType::IndexFirst => "index first",
			QueryType::IndexLast => "index last",
		}
	}
}

impl Display for QueryType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// A lookup on one index. `values` name a leading prefix of the index
/// columns in declared order; a `None` value is a null.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexQuery {
	pub index: String,
	pub query_type: QueryType,
	pub values: Vec<(String, Option<Value>)>,
	pub limit: Option<usize>,
}

impl IndexQuery {
	pub fn new(index: impl Into<String>, query_type: QueryType) -> Self {
		Self {
			index: index.into(),
			query_type,
			values: Vec::new(),
			limit: None,
		}
	}

	pub fn exact(index: impl Into<String>) -> Self {
		Self::new(index, QueryType::ExactKey)
	}

	pub fn after(index: impl Into<String>) -> Self {
		Self::new(index, QueryType::AfterKey)
	}

	pub fn before(index: impl Into<String>) -> Self {
		Self::new(index, QueryType::BeforeKey)
	}

	pub fn key_or_next(index: impl Into<String>) -> Self {
		Self::new(index, QueryType::KeyOrNext)
	}

	pub fn key_or_previous(index: impl Into<String>) -> Self {
		Self::new(index, QueryType::KeyOrPrevious)
	}

	pub fn first(index: impl Into<String>) -> Self {
		Self::new(index, QueryType::IndexFirst)
	}

	pub fn last(index: impl Into<String>) -> Self {
		Self::new(index, QueryType::IndexLast)
	}

	pub fn with_value(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
		self.values.push((column.into(), Some(value.into())));
		self
	}

	pub fn with_null(mut self, column: impl Into<String>) -> Self {
		self.values.push((column.into(), None));
		self
	}

	pub fn with_limit(mut self, limit: usize) -> Self {
		self.limit = Some(limit);
		self
	}
}

/// Condition a scanned entry must meet beyond lying inside the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanFilter {
	/// The entry key starts with these bytes.
	KeyPrefix(EncodedKey),
	/// The data row holds exactly these records; `None` requires a null.
	Records(Vec<(String, Option<Vec<u8>>)>),
}

impl ScanFilter {
	pub fn matches_key(&self, key: &[u8]) -> bool {
		match self {
			ScanFilter::KeyPrefix(prefix) => key.starts_with(prefix),
			ScanFilter::Records(_) => true,
		}
	}

	pub fn matches_row(&self, row: &Row) -> bool {
		match self {
			ScanFilter::KeyPrefix(_) => true,
			ScanFilter::Records(records) => {
				records.iter().all(|(column, expected)| row.record(column) == expected.as_deref())
			}
		}
	}

	/// Whether the data row has to be fetched to evaluate the filter.
	pub fn needs_row(&self) -> bool {
		matches!(self, ScanFilter::Records(_))
	}
}

/// Key range of a scan, the index direction it walks and the residual
/// filter. Entries in range are visited in ascending key order, which is the
/// semantic order of `direction`. Every entry key ends in the row id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPlan {
	pub range: EncodedKeyRange,
	pub direction: SortDirection,
	pub filter: Option<ScanFilter>,
	pub limit: Option<usize>,
}

/// Every data row of the table, ordered by row id.
pub fn plan_table_scan(table: &TableDef) -> ScanPlan {
	ScanPlan {
		range: RowKey::data_scan(table.id),
		direction: SortDirection::Asc,
		filter: None,
		limit: None,
	}
}

/// Translates an index query into a range over the index keys.
///
/// Unsupplied trailing columns are filled with `0x00` bytes on lower
/// bounds and `0xFF` bytes on upper bounds, followed by the smallest or
/// largest row id. A null value routes an exact lookup into the index's
/// null bucket; other query types reject nulls.
pub fn plan_index_scan(table: &TableDef, query: &IndexQuery) -> Result<ScanPlan> {
	let index = table.index(&query.index)?;
	let supplied = supplied_values(&index, query)?;

	if supplied.iter().any(Option::is_none) {
		if query.query_type != QueryType::ExactKey {
			return_error!(null_in_ordered_query(index.name(), query.query_type.name()));
		}
		return plan_null_bucket(table, &index, query);
	}

	let values: Vec<&Value> = supplied.into_iter().flatten().collect();
	let direction = query.query_type.direction();
	let prefix = RowKey::index_prefix(table.id, index.id, direction);
	let outer_end = prefix_end(&prefix).map_or(Bound::Unbounded, Bound::Excluded);

	let encoded = IndexValues::encode(&values, &index.columns[..values.len()], direction)?;
	let unsupplied = index.values_width() - encoded.len();

	let (range, filter) = match query.query_type {
		QueryType::ExactKey => {
			let lower = bound_key(&prefix, &encoded, 0x00, unsupplied, RowId::nil());
			let upper = bound_key(&prefix, &encoded, 0xFF, unsupplied, RowId::max());

			let mut serializer = KeySerializer::with_capacity(prefix.len() + encoded.len());
			serializer.extend_bytes(&prefix).extend_bytes(encoded.as_bytes());

			(
				EncodedKeyRange::new(Bound::Included(lower), Bound::Included(upper)),
				Some(ScanFilter::KeyPrefix(serializer.to_encoded_key())),
			)
		}
		QueryType::AfterKey | QueryType::BeforeKey => {
			let upper = bound_key(&prefix, &encoded, 0xFF, unsupplied, RowId::max());
			(EncodedKeyRange::new(Bound::Excluded(upper), outer_end), None)
		}
		QueryType::KeyOrNext | QueryType::KeyOrPrevious => {
			let lower = bound_key(&prefix, &encoded, 0x00, unsupplied, RowId::nil());
			(EncodedKeyRange::new(Bound::Included(lower), outer_end), None)
		}
		QueryType::IndexFirst | QueryType::IndexLast => (EncodedKeyRange::prefix(&prefix), None),
	};

	trace!(
		table = %table.id,
		index = index.name(),
		query = %query.query_type,
		start = ?range.start,
		end = ?range.end,
		"planned index scan"
	);

	Ok(ScanPlan {
		range,
		direction,
		filter,
		limit: query.limit,
	})
}

fn plan_null_bucket(table: &TableDef, index: &IndexDef<'_>, query: &IndexQuery) -> Result<ScanPlan> {
	let mut records = Vec::with_capacity(query.values.len());
	for ((name, value), column) in query.values.iter().zip(index.columns.iter()) {
		let bytes = match value {
			Some(value) => keycode::encode(Some(value), column, SortDirection::Asc)?,
			None => None,
		};
		records.push((name.clone(), bytes));
	}

	let range = RowKey::null_index_scan(table.id, index.id);
	trace!(table = %table.id, index = index.name(), "planned null bucket scan");

	Ok(ScanPlan {
		range,
		direction: SortDirection::Asc,
		filter: Some(ScanFilter::Records(records)),
		limit: query.limit,
	})
}

/// Values of the query in index column order. The query must name a leading
/// prefix of the index columns.
fn supplied_values<'a>(index: &IndexDef<'_>, query: &'a IndexQuery) -> Result<Vec<Option<&'a Value>>> {
	let mut result = Vec::with_capacity(query.values.len());
	for (position, (name, value)) in query.values.iter().enumerate() {
		match index.schema.columns.get(position) {
			Some(expected) if expected == name => result.push(value.as_ref()),
			_ => return_error!(query_not_index_prefix(index.name(), name)),
		}
	}
	Ok(result)
}

fn bound_key(prefix: &[u8], values: &IndexValues, fill: u8, fill_count: usize, row: RowId) -> EncodedKey {
	let mut serializer = KeySerializer::with_capacity(prefix.len() + values.len() + fill_count + RowId::SIZE);
	serializer.extend_bytes(prefix).extend_bytes(values.as_bytes()).extend_repeat(fill, fill_count).extend_row_id(row);
	serializer.to_encoded_key()
}

#[cfg(test)]
mod tests {
	use indexmap::IndexMap;
	use keystone_core::catalog::{ColumnSchema, IndexId, IndexSchema, TableId, TableSchema};
	use keystone_type::{ErrorKind, Type};

	use super::*;

	fn table() -> TableDef {
		let schema = TableSchema::new()
			.with_column(ColumnSchema::new("a", Type::Int8))
			.with_column(ColumnSchema::utf8("b", 4).with_nullable(true))
			.with_column(ColumnSchema::new("c", Type::Uint8))
			.with_index(IndexSchema::new("ab", ["a", "b"]));
		let mut indices = IndexMap::new();
		indices.insert("ab".to_string(), IndexId(1));
		TableDef {
			id: TableId(7),
			name: "t".to_string(),
			schema,
			indices,
		}
	}

	fn index_key(direction: SortDirection, a: i64, b: &str, row: RowId) -> EncodedKey {
		let table = table();
		let index = table.index("ab").unwrap();
		let a = Value::Int8(a);
		let b = Value::Utf8(b.to_string());
		RowKey::Index {
			table: table.id,
			index: index.id,
			direction,
			values: IndexValues::encode(&[&a, &b], &index.columns, direction).unwrap(),
			row,
		}
		.encode()
	}

	fn row(byte: u8) -> RowId {
		RowId::from_bytes([byte; 16])
	}

	#[test]
	fn test_table_scan_covers_data_rows() {
		let plan = plan_table_scan(&table());
		let data = RowKey::Data {
			table: TableId(7),
			row: row(3),
		}
		.encode();
		assert!(plan.range.contains_key(&data));
		assert!(!plan.range.contains_key(&RowKey::Schema {
			table: TableId(7)
		}
		.encode()));
		assert_eq!(plan.filter, None);
	}

	#[test]
	fn test_exact_full_key() {
		let plan = plan_index_scan(&table(), &IndexQuery::exact("ab").with_value("a", 5i64).with_value("b", "x")).unwrap();
		assert_eq!(plan.direction, SortDirection::Asc);

		assert!(plan.range.contains_key(&index_key(SortDirection::Asc, 5, "x", row(0x00))));
		assert!(plan.range.contains_key(&index_key(SortDirection::Asc, 5, "x", row(0xFF))));
		assert!(!plan.range.contains_key(&index_key(SortDirection::Asc, 5, "y", row(0x00))));
		assert!(!plan.range.contains_key(&index_key(SortDirection::Asc, 4, "x", row(0xFF))));
		assert!(!plan.range.contains_key(&index_key(SortDirection::Desc, 5, "x", row(0x10))));
	}

	#[test]
	fn test_exact_prefix_leaves_trailing_columns_open() {
		let plan = plan_index_scan(&table(), &IndexQuery::exact("ab").with_value("a", 5i64)).unwrap();
		let filter = plan.filter.clone().unwrap();

		for b in ["", "a", "zzzz"] {
			let key = index_key(SortDirection::Asc, 5, b, row(0x42));
			assert!(plan.range.contains_key(&key));
			assert!(filter.matches_key(&key));
		}
		let other = index_key(SortDirection::Asc, 6, "", row(0x00));
		assert!(!plan.range.contains_key(&other));
		assert!(!filter.matches_key(&other));
	}

	#[test]
	fn test_after_key() {
		let plan = plan_index_scan(&table(), &IndexQuery::after("ab").with_value("a", 5i64)).unwrap();
		assert_eq!(plan.direction, SortDirection::Asc);
		assert!(!plan.range.contains_key(&index_key(SortDirection::Asc, 5, "zzzz", row(0xFF))));
		assert!(plan.range.contains_key(&index_key(SortDirection::Asc, 6, "", row(0x00))));
		assert!(plan.range.contains_key(&index_key(SortDirection::Asc, i64::MAX, "zzzz", row(0xFF))));
		assert!(!plan.range.contains_key(&index_key(SortDirection::Desc, 4, "", row(0x00))));
	}

	#[test]
	fn test_before_key_scans_descending_index() {
		let plan = plan_index_scan(&table(), &IndexQuery::before("ab").with_value("a", 5i64)).unwrap();
		assert_eq!(plan.direction, SortDirection::Desc);
		assert!(!plan.range.contains_key(&index_key(SortDirection::Desc, 5, "", row(0x00))));
		assert!(plan.range.contains_key(&index_key(SortDirection::Desc, 4, "zzzz", row(0xFF))));
		assert!(plan.range.contains_key(&index_key(SortDirection::Desc, i64::MIN, "", row(0x00))));
		assert!(!plan.range.contains_key(&index_key(SortDirection::Desc, 6, "", row(0x00))));
		assert!(!plan.range.contains_key(&index_key(SortDirection::Asc, 4, "", row(0x00))));
	}

	#[test]
	fn test_key_or_next_and_previous_include_key() {
		let next = plan_index_scan(&table(), &IndexQuery::key_or_next("ab").with_value("a", 5i64)).unwrap();
		assert!(next.range.contains_key(&index_key(SortDirection::Asc, 5, "", row(0x00))));
		assert!(!next.range.contains_key(&index_key(SortDirection::Asc, 4, "zzzz", row(0xFF))));

		let previous = plan_index_scan(&table(), &IndexQuery::key_or_previous("ab").with_value("a", 5i64)).unwrap();
		assert!(previous.range.contains_key(&index_key(SortDirection::Desc, 5, "zzzz", row(0xFF))));
		assert!(previous.range.contains_key(&index_key(SortDirection::Desc, 4, "", row(0x00))));
		assert!(!previous.range.contains_key(&index_key(SortDirection::Desc, 6, "", row(0x00))));
	}

	#[test]
	fn test_first_and_last_cover_whole_index() {
		let first = plan_index_scan(&table(), &IndexQuery::first("ab").with_limit(1)).unwrap();
		assert_eq!(first.range, RowKey::index_scan(TableId(7), IndexId(1), SortDirection::Asc));
		assert_eq!(first.limit, Some(1));

		let last = plan_index_scan(&table(), &IndexQuery::last("ab")).unwrap();
		assert_eq!(last.range, RowKey::index_scan(TableId(7), IndexId(1), SortDirection::Desc));
	}

	#[test]
	fn test_null_exact_routes_to_null_bucket() {
		let plan = plan_index_scan(&table(), &IndexQuery::exact("ab").with_value("a", 1i64).with_null("b")).unwrap();
		assert_eq!(plan.range, RowKey::null_index_scan(TableId(7), IndexId(1)));

		let filter = plan.filter.unwrap();
		assert!(filter.needs_row());

		let schema = table().schema;
		let matching = Row::encode(row(1), [("a", Some(Value::Int8(1))), ("b", None)], &schema).unwrap();
		let other = Row::encode(row(2), [("a", Some(Value::Int8(2))), ("b", None)], &schema).unwrap();
		let not_null = Row::encode(row(3), [("a", Some(Value::Int8(1))), ("b", Some(Value::from("x")))], &schema)
			.unwrap();
		assert!(filter.matches_row(&matching));
		assert!(!filter.matches_row(&other));
		assert!(!filter.matches_row(&not_null));
	}

	#[test]
	fn test_null_in_ordered_query_is_rejected() {
		let err = plan_index_scan(&table(), &IndexQuery::after("ab").with_value("a", 1i64).with_null("b"))
			.unwrap_err();
		assert_eq!(err.kind(), ErrorKind::ContractViolation);
		assert_eq!(err.code, "CONTRACT_008");
	}

	#[test]
	fn test_values_must_be_index_prefix() {
		let err = plan_index_scan(&table(), &IndexQuery::exact("ab").with_value("b", "x")).unwrap_err();
		assert_eq!(err.code, "CONTRACT_007");

		let err = plan_index_scan(&table(), &IndexQuery::exact("ab").with_value("a", 1i64).with_value("c", 2u64))
			.unwrap_err();
		assert_eq!(err.code, "CONTRACT_007");
	}

	#[test]
	fn test_wrong_value_type() {
		let err = plan_index_scan(&table(), &IndexQuery::exact("ab").with_value("a", "five")).unwrap_err();
		assert_eq!(err.code, "CONTRACT_003");
	}

	#[test]
	fn test_unknown_index() {
		let err = plan_index_scan(&table(), &IndexQuery::exact("missing")).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Catalog);
	}
}
