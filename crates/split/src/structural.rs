// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_core::{
	EncodedKey,
	catalog::{SortDirection, TableDef},
	key::RowKey,
};
use keystone_type::Result;

/// Forced split points of a table: the start of its data rows and the start
/// of both directions of every index, in key order. They exist even for an
/// empty table.
pub fn structural_split_points(table: &TableDef) -> Result<Vec<EncodedKey>> {
	let indices = table.all_indices()?;

	let mut result = Vec::with_capacity(1 + 2 * indices.len());
	result.push(RowKey::data_prefix(table.id));
	for direction in SortDirection::ALL {
		for index in &indices {
			result.push(RowKey::index_prefix(table.id, index.id, direction));
		}
	}
	result.sort();
	Ok(result)
}
