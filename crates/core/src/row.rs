// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use indexmap::IndexMap;
use keystone_type::{
	Result, RowId, Value,
	error::diagnostic::{contract::unknown_column, store},
	return_error,
};
use serde::{Deserialize, Serialize};

use crate::{
	catalog::{ColumnSchema, SortDirection, TableSchema},
	util::encoding::keycode,
};

/// A row as stored under its data key: the row id and the ascending,
/// unpadded encoding of every non-null column value. Columns without a
/// record are null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
	pub id: RowId,
	pub records: BTreeMap<String, Vec<u8>>,
}

impl Row {
	pub fn new(id: RowId) -> Self {
		Self {
			id,
			records: BTreeMap::new(),
		}
	}

	/// Encodes `values` against `schema`. Every named column must exist.
	pub fn encode<'a, I>(id: RowId, values: I, schema: &TableSchema) -> Result<Self>
	where
		I: IntoIterator<Item = (&'a str, Option<Value>)>,
	{
		let mut row = Self::new(id);
		for (name, value) in values {
			let Some(column) = schema.column(name) else {
				return_error!(unknown_column(name));
			};
			row.set(column, value.as_ref())?;
		}
		Ok(row)
	}

	pub fn set(&mut self, column: &ColumnSchema, value: Option<&Value>) -> Result<()> {
		match keycode::encode(value, column, SortDirection::Asc)? {
			Some(bytes) => {
				self.records.insert(column.name.clone(), bytes);
			}
			None => {
				self.records.remove(&column.name);
			}
		}
		Ok(())
	}

	pub fn get(&self, column: &ColumnSchema) -> Result<Option<Value>> {
		self.records
			.get(&column.name)
			.map(|bytes| keycode::decode(bytes, column, SortDirection::Asc))
			.transpose()
	}

	pub fn record(&self, column: &str) -> Option<&[u8]> {
		self.records.get(column).map(Vec::as_slice)
	}

	pub fn is_null(&self, column: &str) -> bool {
		!self.records.contains_key(column)
	}

	/// Decodes every column of `schema` in declaration order.
	pub fn values(&self, schema: &TableSchema) -> Result<IndexMap<String, Option<Value>>> {
		let mut result = IndexMap::with_capacity(schema.columns.len());
		for column in schema.columns.values() {
			result.insert(column.name.clone(), self.get(column)?);
		}
		Ok(result)
	}

	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		postcard::to_allocvec(self).map_err(|err| keystone_type::error!(store::serialize("row", err.to_string())))
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		postcard::from_bytes(bytes).map_err(|err| keystone_type::error!(store::deserialize("row", err.to_string())))
	}
}
