// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use keystone_type::{
	Result,
	error::diagnostic::{
		catalog::index_not_found,
		contract::{empty_index, index_column_not_in_table},
	},
	return_error,
};
use serde::{Deserialize, Serialize};

use super::{ColumnSchema, IndexId, IndexSchema, TableId};
use crate::util::encoding::keycode::key_width;

/// Columns and indexes of a table, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
	pub columns: IndexMap<String, ColumnSchema>,
	pub indices: IndexMap<String, IndexSchema>,
}

impl TableSchema {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_column(mut self, column: ColumnSchema) -> Self {
		self.columns.insert(column.name.clone(), column);
		self
	}

	pub fn with_index(mut self, index: IndexSchema) -> Self {
		self.indices.insert(index.name.clone(), index);
		self
	}

	pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
		self.columns.get(name)
	}

	pub fn index(&self, name: &str) -> Option<&IndexSchema> {
		self.indices.get(name)
	}

	/// Checks every column definition and that every indexed column exists.
	pub fn validate(&self) -> Result<()> {
		for column in self.columns.values() {
			column.validate()?;
		}
		for index in self.indices.values() {
			self.validate_index(index)?;
		}
		Ok(())
	}

	pub fn validate_index(&self, index: &IndexSchema) -> Result<()> {
		if index.columns.is_empty() {
			return_error!(empty_index(&index.name));
		}
		for column in &index.columns {
			if !self.columns.contains_key(column) {
				return_error!(index_column_not_in_table(&index.name, column));
			}
		}
		Ok(())
	}
}

/// A table as stored in the catalog: its identity, name, schema and the
/// ids assigned to its indexes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
	pub id: TableId,
	pub name: String,
	pub schema: TableSchema,
	pub indices: IndexMap<String, IndexId>,
}

/// An index resolved against its table: id, schema and column schemas in
/// key order.
#[derive(Debug, Clone)]
pub struct IndexDef<'a> {
	pub id: IndexId,
	pub schema: &'a IndexSchema,
	pub columns: Vec<&'a ColumnSchema>,
}

impl TableDef {
	pub fn index(&self, name: &str) -> Result<IndexDef<'_>> {
		let (Some(schema), Some(id)) = (self.schema.index(name), self.indices.get(name)) else {
			return_error!(index_not_found(&self.name, name));
		};
		self.resolve(*id, schema)
	}

	/// All indexes of the table in declaration order.
	pub fn all_indices(&self) -> Result<Vec<IndexDef<'_>>> {
		let mut result = Vec::with_capacity(self.schema.indices.len());
		for schema in self.schema.indices.values() {
			let Some(id) = self.indices.get(&schema.name) else {
				return_error!(index_not_found(&self.name, &schema.name));
			};
			result.push(self.resolve(*id, schema)?);
		}
		Ok(result)
	}

	/// Next free index id, one past the highest assigned.
	pub fn next_index_id(&self) -> IndexId {
		IndexId(self.indices.values().map(|id| id.0 + 1).max().unwrap_or(1))
	}

	fn resolve<'a>(&'a self, id: IndexId, schema: &'a IndexSchema) -> Result<IndexDef<'a>> {
		self.schema.validate_index(schema)?;
		let columns = schema.columns.iter().filter_map(|name| self.schema.column(name)).collect();
		Ok(IndexDef {
			id,
			schema,
			columns,
		})
	}
}

impl<'a> IndexDef<'a> {
	pub fn name(&self) -> &str {
		&self.schema.name
	}

	/// Total width of the column values region of an index key.
	pub fn values_width(&self) -> usize {
		self.columns.iter().map(|column| key_width(column)).sum()
	}
}
