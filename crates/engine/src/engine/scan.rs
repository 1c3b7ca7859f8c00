// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_core::{Row, catalog::TableDef, interface::OrderedStore, key::RowKey};
use keystone_type::{Result, RowId, error::diagnostic::key::unexpected_key_kind, return_error};
use tracing::{instrument, trace};

use crate::{
	Engine, IndexQuery, ScanPlan,
	plan::{plan_index_scan, plan_table_scan},
};

impl<S: OrderedStore> Engine<S> {
	/// Every row of the table, ordered by row id.
	#[instrument(name = "engine::scan::table", level = "debug", skip(self))]
	pub fn table_scan(&self, table: &str) -> Result<Vec<Row>> {
		let def = self.load_table(table)?;
		let plan = plan_table_scan(&def);

		let mut result = Vec::new();
		for entry in self.store.range(plan.range)? {
			result.push(Row::from_bytes(&entry.values)?);
		}
		Ok(result)
	}

	/// Row ids matching an index query in the query's order. Rows are not
	/// fetched, see [`Engine::fetch_rows`].
	#[instrument(name = "engine::scan::index", level = "debug", skip(self, query), fields(index = %query.index, query = %query.query_type))]
	pub fn index_scan(&self, table: &str, query: &IndexQuery) -> Result<Vec<RowId>> {
		let def = self.load_table(table)?;
		let plan = plan_index_scan(&def, query)?;
		self.execute_scan(&def, &plan)
	}

	/// Index scan followed by a point lookup of every matching row.
	pub fn index_scan_rows(&self, table: &str, query: &IndexQuery) -> Result<Vec<Row>> {
		let def = self.load_table(table)?;
		let plan = plan_index_scan(&def, query)?;
		let ids = self.execute_scan(&def, &plan)?;
		self.fetch(&def, &ids)
	}

	/// Data rows of `ids` in the given order. Ids without a data row are
	/// skipped.
	#[instrument(name = "engine::scan::fetch", level = "trace", skip(self, ids))]
	pub fn fetch_rows(&self, table: &str, ids: &[RowId]) -> Result<Vec<Row>> {
		let def = self.load_table(table)?;
		self.fetch(&def, ids)
	}

	/// Walks the plan's range and applies its filter and limit.
	pub(crate) fn execute_scan(&self, def: &TableDef, plan: &ScanPlan) -> Result<Vec<RowId>> {
		let limit = plan.limit.unwrap_or(usize::MAX);

		let mut result = Vec::new();
		for entry in self.store.range(plan.range.clone())? {
			if result.len() >= limit {
				break;
			}
			if let Some(filter) = &plan.filter {
				if !filter.matches_key(&entry.key) {
					continue;
				}
			}

			let key = RowKey::decode(&entry.key)?;
			let Some(id) = key.row() else {
				return_error!(unexpected_key_kind("row", key.kind().name()));
			};

			if let Some(filter) = plan.filter.as_ref().filter(|filter| filter.needs_row()) {
				match self.read_row(def, id)? {
					Some(row) if filter.matches_row(&row) => {}
					_ => continue,
				}
			}
			result.push(id);
		}

		trace!(rows = result.len(), "executed scan");
		Ok(result)
	}

	fn fetch(&self, def: &TableDef, ids: &[RowId]) -> Result<Vec<Row>> {
		let mut result = Vec::with_capacity(ids.len());
		for id in ids {
			if let Some(row) = self.read_row(def, *id)? {
				result.push(row);
			}
		}
		Ok(result)
	}
}
