// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_type::{Result, Value};

use crate::{
	catalog::{ColumnSchema, SortDirection},
	util::encoding::keycode,
};

/// The column values region of an index key: each indexed column in key
/// order, fixed width, complemented for descending keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IndexValues(pub Vec<u8>);

impl IndexValues {
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self(bytes.into())
	}

	pub fn encode(values: &[&Value], columns: &[&ColumnSchema], direction: SortDirection) -> Result<Self> {
		let mut bytes = Vec::with_capacity(columns.iter().map(|c| keycode::key_width(c)).sum());
		for (value, column) in values.iter().zip(columns.iter()) {
			bytes.extend(keycode::encode_key(value, column, direction)?);
		}
		Ok(Self(bytes))
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use keystone_type::Type;

	use super::*;

	#[test]
	fn test_encode_concatenates_columns_in_key_order() {
		let name = ColumnSchema::utf8("name", 4);
		let age = ColumnSchema::new("age", Type::Int8);
		let columns = [&name, &age];
		let values = [Value::from("bo"), Value::Int8(-3)];
		let refs: Vec<&Value> = values.iter().collect();

		for direction in SortDirection::ALL {
			let encoded = IndexValues::encode(&refs, &columns, direction).unwrap();
			assert_eq!(encoded.len(), 12);
			let (head, tail) = encoded.as_bytes().split_at(4);
			assert_eq!(keycode::decode_key(head, &name, direction).unwrap(), values[0]);
			assert_eq!(keycode::decode_key(tail, &age, direction).unwrap(), values[1]);
		}
	}
}
